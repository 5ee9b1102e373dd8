//! Error types for jsonapi-rels.
//!
//! Relationship resolution itself never fails: a missing target is an absent
//! value or a hole. These errors cover the edges around it (reading documents,
//! picking a root resource, opt-in strict linkage checks).

use thiserror::Error;

/// Result type for jsonapi-rels operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or inspecting a document.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input was not a well-formed JSON:API document.
    #[error("Failed to parse document: {0}")]
    Json(#[from] serde_json::Error),

    /// A resource selector was not of the form `type:id`.
    #[error("Invalid resource selector `{0}`, expected `type:id`")]
    InvalidSelector(String),

    /// No resource with this type and id exists in the document.
    #[error("Resource not found: {kind}:{id}")]
    ResourceNotFound { kind: String, id: String },

    /// The document carries no primary data to start from.
    #[error("Document has no primary data")]
    NoPrimaryData,

    /// Relationship linkage points at resources missing from the document.
    #[error("Missing reference: {0}")]
    MissingReference(String),
}
