//! Resolution results.

use super::document::Resource;
use std::collections::BTreeMap;

/// One position in a plural result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot<'a> {
    Found(&'a Resource),
    /// The stub at this position did not resolve.
    Hole,
}

impl<'a> Slot<'a> {
    pub fn resource(&self) -> Option<&'a Resource> {
        match self {
            Slot::Found(resource) => Some(resource),
            Slot::Hole => None,
        }
    }

    pub fn is_hole(&self) -> bool {
        matches!(self, Slot::Hole)
    }
}

impl<'a> From<Option<&'a Resource>> for Slot<'a> {
    fn from(resource: Option<&'a Resource>) -> Self {
        resource.map_or(Slot::Hole, Slot::Found)
    }
}

/// The value of a resolved relationship, or of a walk along a relationship path.
///
/// `Plural` keeps one slot per stub; a zero-length `Plural` is a declared
/// to-many relationship with no members and is distinct from `Absent`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Resolved<'a> {
    #[default]
    Absent,
    Single(&'a Resource),
    Plural(Vec<Slot<'a>>),
}

impl<'a> Resolved<'a> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Resolved::Absent)
    }

    pub fn as_single(&self) -> Option<&'a Resource> {
        match self {
            Resolved::Single(resource) => Some(resource),
            _ => None,
        }
    }

    pub fn as_plural(&self) -> Option<&[Slot<'a>]> {
        match self {
            Resolved::Plural(slots) => Some(slots),
            _ => None,
        }
    }

    /// Resolved resources in order, skipping holes.
    pub fn resources(&self) -> Vec<&'a Resource> {
        match self {
            Resolved::Absent => Vec::new(),
            Resolved::Single(resource) => vec![*resource],
            Resolved::Plural(slots) => slots.iter().filter_map(Slot::resource).collect(),
        }
    }

    /// Number of holes in a plural result; zero otherwise.
    pub fn hole_count(&self) -> usize {
        self.as_plural()
            .map_or(0, |slots| slots.iter().filter(|slot| slot.is_hole()).count())
    }
}

impl<'a> From<Option<&'a Resource>> for Resolved<'a> {
    fn from(resource: Option<&'a Resource>) -> Self {
        resource.map_or(Resolved::Absent, Resolved::Single)
    }
}

/// Every declared relationship of one resource, resolved, keyed by name.
pub type RelationshipSet<'r, 'a> = BTreeMap<&'r str, Resolved<'a>>;
