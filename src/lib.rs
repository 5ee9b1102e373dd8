//! # jsonapi-rels
//!
//! Resolves JSON:API relationship linkage (`{type, id}` stubs) back into the
//! full resource objects carried in a document's `included` pool, including
//! multi-hop dotted paths across to-one and to-many relationships.
//!
//! ## Example
//!
//! ```
//! use jsonapi_rels::{get_deep_relationship, Document};
//!
//! let doc = Document::from_json(r#"{
//!     "data": {"type": "orders", "id": "1",
//!              "relationships": {"items": {"data": [
//!                  {"type": "items", "id": "a"}, {"type": "items", "id": "b"}]}}},
//!     "included": [
//!         {"type": "items", "id": "a",
//!          "relationships": {"product": {"data": {"type": "products", "id": "p"}}}},
//!         {"type": "items", "id": "b"},
//!         {"type": "products", "id": "p", "attributes": {"name": "lamp"}}
//!     ]
//! }"#).unwrap();
//!
//! let order = &doc.primary_resources()[0];
//! let products = get_deep_relationship(&doc, order, "items.product");
//! let slots = products.as_plural().unwrap();
//! assert_eq!(slots.len(), 2);
//! assert!(slots[1].is_hole());
//! ```

pub mod error;
pub mod model;
pub mod render;
pub mod resolver;

pub use crate::model::{
    Document, Linkage, PrimaryData, Relationship, RelationshipSet, Resolved, Resource,
    ResourceIdentifier, Slot,
};
pub use error::{Error, Result};
pub use render::{IdentifierRenderer, JsonRenderer, Renderer};
pub use resolver::{DanglingReference, Resolver};

/// Options for relationship resolution.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Whether lookups fall back to primary data after `included`.
    pub search_primary_data: bool,
    /// Separator between relationship names in a deep path.
    pub path_separator: char,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            search_primary_data: false,
            path_separator: '.',
        }
    }
}

/// Finds the resource with this type and id in `document.included`.
pub fn get_included<'a>(document: &'a Document, kind: &str, id: &str) -> Option<&'a Resource> {
    Resolver::with_defaults(document).get_included(kind, id)
}

/// Resolves one named relationship of `resource`.
pub fn get_relationship<'a>(
    document: &'a Document,
    resource: &Resource,
    name: &str,
) -> Resolved<'a> {
    Resolver::with_defaults(document).get_relationship(resource, name)
}

/// Resolves every relationship `resource` declares.
pub fn get_relationships<'r, 'a>(
    document: &'a Document,
    resource: &'r Resource,
) -> RelationshipSet<'r, 'a> {
    Resolver::with_defaults(document).get_relationships(resource)
}

/// Walks a dotted relationship path from `resource`.
pub fn get_deep_relationship<'a>(
    document: &'a Document,
    resource: &Resource,
    path: &str,
) -> Resolved<'a> {
    Resolver::with_defaults(document).get_deep_relationship(resource, path)
}

// Python bindings (only when 'python' feature is enabled)
#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use pyo3::prelude::*;

    fn to_py_err(e: Error) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
    }

    fn root<'a>(resolver: &Resolver<'a>, kind: &str, id: &str) -> PyResult<&'a Resource> {
        resolver.locate(kind, id).ok_or_else(|| {
            to_py_err(Error::ResourceNotFound {
                kind: kind.to_string(),
                id: id.to_string(),
            })
        })
    }

    /// Resolves a dotted relationship path and returns the result as JSON text.
    #[pyfunction]
    fn get_deep_relationship(document: &str, kind: &str, id: &str, path: &str) -> PyResult<String> {
        let doc = Document::from_json(document).map_err(to_py_err)?;
        let resolver = Resolver::with_defaults(&doc);
        let resource = root(&resolver, kind, id)?;
        JsonRenderer::default()
            .render(&resolver.get_deep_relationship(resource, path))
            .map_err(to_py_err)
    }

    /// Resolves every relationship of a resource and returns a JSON object.
    #[pyfunction]
    fn get_relationships(document: &str, kind: &str, id: &str) -> PyResult<String> {
        let doc = Document::from_json(document).map_err(to_py_err)?;
        let resolver = Resolver::with_defaults(&doc);
        let resource = root(&resolver, kind, id)?;
        JsonRenderer::default()
            .render_set(&resolver.get_relationships(resource))
            .map_err(to_py_err)
    }

    /// A Python module implemented in Rust.
    #[pymodule]
    pub fn jsonapi_rels(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(get_deep_relationship, m)?)?;
        m.add_function(wrap_pyfunction!(get_relationships, m)?)?;
        Ok(())
    }
}
