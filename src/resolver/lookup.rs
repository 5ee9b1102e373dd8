//! Resource lookup by (type, id).

use super::Resolver;
use crate::model::Resource;
use tracing::trace;

impl<'a> Resolver<'a> {
    /// Returns the first resource in `included` with this type and id.
    ///
    /// With `search_primary_data` set, primary data is searched after
    /// `included`. A miss is a normal outcome, not an error.
    pub fn get_included(&self, kind: &str, id: &str) -> Option<&'a Resource> {
        let found = self
            .document
            .included
            .iter()
            .find(|resource| resource.matches(kind, id))
            .or_else(|| {
                if self.options.search_primary_data {
                    self.document
                        .primary_resources()
                        .iter()
                        .find(|resource| resource.matches(kind, id))
                } else {
                    None
                }
            });

        if found.is_none() {
            trace!(kind, id, "resource not in document");
        }
        found
    }

    /// Finds a resource to start resolving from: primary data first, then `included`.
    pub fn locate(&self, kind: &str, id: &str) -> Option<&'a Resource> {
        self.document
            .primary_resources()
            .iter()
            .chain(self.document.included.iter())
            .find(|resource| resource.matches(kind, id))
    }
}
