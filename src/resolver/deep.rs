//! Multi-hop resolution along a relationship path such as `order.items.product`.

use super::Resolver;
use crate::model::{Resolved, Resource, Slot};
use tracing::trace;

impl<'a> Resolver<'a> {
    /// Walks `path` from `resource`, one relationship per segment.
    ///
    /// Every to-many hop fans the remaining hops out over its members and
    /// splices their results back in order, so the final shape depends on how
    /// many to-many hops were crossed. A member that fails to resolve leaves a
    /// hole in its place instead of aborting its siblings. An empty or unknown
    /// segment resolves like any undeclared relationship.
    pub fn get_deep_relationship(&self, resource: &Resource, path: &str) -> Resolved<'a> {
        let mut segments = path.split(self.options.path_separator);
        // `split` always yields at least one segment.
        let first = segments.next().unwrap_or_default();

        let mut current = self.get_relationship(resource, first);
        for segment in segments {
            if current.is_absent() {
                trace!(path, segment, "path walk stopped at absent value");
                break;
            }
            current = self.step(current, segment);
        }
        current
    }

    /// Applies one hop to an intermediate value.
    ///
    /// - `Absent` stays `Absent`
    /// - `Single` resolves `name` on that resource
    /// - `Plural` resolves `name` on each member: a hole stays a hole, an
    ///   `Absent` result becomes a hole, a `Single` fills the slot, and a
    ///   `Plural` result is spliced in place (one level of flattening)
    pub fn step(&self, current: Resolved<'a>, name: &str) -> Resolved<'a> {
        match current {
            Resolved::Absent => Resolved::Absent,
            Resolved::Single(resource) => self.get_relationship(resource, name),
            Resolved::Plural(slots) => {
                let mut next = Vec::with_capacity(slots.len());
                for slot in slots {
                    let Slot::Found(resource) = slot else {
                        next.push(Slot::Hole);
                        continue;
                    };
                    match self.get_relationship(resource, name) {
                        Resolved::Absent => next.push(Slot::Hole),
                        Resolved::Single(found) => next.push(Slot::Found(found)),
                        Resolved::Plural(branch) => next.extend(branch),
                    }
                }
                Resolved::Plural(next)
            }
        }
    }
}
