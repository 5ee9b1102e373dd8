//! Opt-in linkage validation: finds stubs that point outside the document.

use super::Resolver;
use crate::model::{Resource, ResourceIdentifier};
use crate::{Error, Result};
use std::fmt;
use tracing::debug;

/// Reported at most this many times in a `MissingReference` message.
const REPORT_LIMIT: usize = 5;

/// A relationship stub whose target is not in the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DanglingReference<'a> {
    pub owner: &'a Resource,
    pub relationship: &'a str,
    pub target: &'a ResourceIdentifier,
}

impl fmt::Display for DanglingReference<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}.{} -> {}",
            self.owner.kind, self.owner.id, self.relationship, self.target
        )
    }
}

impl<'a> Resolver<'a> {
    /// Every stub in primary data and `included` whose lookup fails, in document order.
    pub fn dangling_references(&self) -> Vec<DanglingReference<'a>> {
        let document = self.document;
        let mut dangling = Vec::new();

        for owner in document
            .primary_resources()
            .iter()
            .chain(document.included.iter())
        {
            let Some(relationships) = &owner.relationships else {
                continue;
            };
            for (name, relationship) in relationships {
                for target in relationship.data.identifiers() {
                    if self.get_included(&target.kind, &target.id).is_none() {
                        dangling.push(DanglingReference {
                            owner,
                            relationship: name,
                            target,
                        });
                    }
                }
            }
        }

        dangling
    }

    /// Fails with [`Error::MissingReference`] when any stub dangles.
    pub fn ensure_linkage_complete(&self) -> Result<()> {
        let dangling = self.dangling_references();
        if dangling.is_empty() {
            return Ok(());
        }
        debug!(count = dangling.len(), "document has dangling linkage");

        let mut message = dangling
            .iter()
            .take(REPORT_LIMIT)
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        if dangling.len() > REPORT_LIMIT {
            message.push_str(&format!(" (and {} more)", dangling.len() - REPORT_LIMIT));
        }
        Err(Error::MissingReference(message))
    }
}
