//! Relationship resolution against a document's included pool.

mod deep;
mod linkage;
mod lookup;
mod relationship;

use crate::model::Document;
use crate::ResolveOptions;

pub use self::linkage::DanglingReference;

/// Resolves relationship linkage within one document.
///
/// The resolver only borrows the document; every method is read-only and
/// returns freshly allocated results that point back into it.
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    document: &'a Document,
    options: ResolveOptions,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver with the given options.
    pub fn new(document: &'a Document, options: ResolveOptions) -> Self {
        Self { document, options }
    }

    /// Creates a resolver with default options.
    pub fn with_defaults(document: &'a Document) -> Self {
        Self::new(document, ResolveOptions::default())
    }

    pub fn document(&self) -> &'a Document {
        self.document
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }
}
