//! Document model and resolution result types.

pub mod document;
pub mod resolved;

pub use document::{Document, Linkage, PrimaryData, Relationship, Resource, ResourceIdentifier};
pub use resolved::{RelationshipSet, Resolved, Slot};
