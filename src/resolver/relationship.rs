//! Single-hop relationship resolution.

use super::Resolver;
use crate::model::{Linkage, RelationshipSet, Resolved, Resource, Slot};
use tracing::{debug, trace};

impl<'a> Resolver<'a> {
    /// Resolves the named relationship of `resource`.
    ///
    /// - to-one linkage gives `Single` or `Absent`, never a one-element list
    /// - to-many linkage gives `Plural` with one slot per stub, holes included
    /// - an undeclared name or null linkage gives `Absent`
    pub fn get_relationship(&self, resource: &Resource, name: &str) -> Resolved<'a> {
        let Some(relationship) = resource.relationship(name) else {
            debug!(
                kind = %resource.kind,
                id = %resource.id,
                relationship = name,
                "relationship not declared"
            );
            return Resolved::Absent;
        };

        match &relationship.data {
            Linkage::Single(stub) => self.get_included(&stub.kind, &stub.id).into(),
            Linkage::Plural(stubs) => {
                let slots: Vec<Slot<'a>> = stubs
                    .iter()
                    .map(|stub| self.get_included(&stub.kind, &stub.id).into())
                    .collect();
                trace!(
                    relationship = name,
                    len = slots.len(),
                    holes = slots.iter().filter(|slot| slot.is_hole()).count(),
                    "resolved to-many relationship"
                );
                Resolved::Plural(slots)
            }
            Linkage::Empty => Resolved::Absent,
        }
    }

    /// Resolves every relationship `resource` declares.
    ///
    /// Each declared name appears in the result, even when it resolves to
    /// `Absent` or to holes only.
    pub fn get_relationships<'r>(&self, resource: &'r Resource) -> RelationshipSet<'r, 'a> {
        resource
            .relationship_names()
            .map(|name| (name, self.get_relationship(resource, name)))
            .collect()
    }
}
