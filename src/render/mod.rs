mod identifiers;
mod json;

use crate::model::{RelationshipSet, Resolved, Resource};
use crate::Result;

pub use identifiers::IdentifierRenderer;
pub use json::{resolved_to_value, JsonRenderer};

pub trait Renderer {
    fn render(&self, value: &Resolved<'_>) -> Result<String>;

    fn render_set(&self, set: &RelationshipSet<'_, '_>) -> Result<String>;

    fn render_resource(&self, resource: &Resource) -> Result<String>;
}
