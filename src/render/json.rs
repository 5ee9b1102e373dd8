use crate::model::{RelationshipSet, Resolved, Resource, Slot};
use crate::render::Renderer;
use crate::Result;
use serde_json::{Map, Value};

/// Renders results as JSON: absent values and holes become `null`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl JsonRenderer {
    fn write(&self, value: &Value) -> Result<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }
}

/// Converts a result into a JSON value, keeping hole positions as `null`.
pub fn resolved_to_value(resolved: &Resolved<'_>) -> Result<Value> {
    let value = match resolved {
        Resolved::Absent => Value::Null,
        Resolved::Single(resource) => serde_json::to_value(resource)?,
        Resolved::Plural(slots) => Value::Array(
            slots
                .iter()
                .map(|slot| match slot {
                    Slot::Found(resource) => serde_json::to_value(resource),
                    Slot::Hole => Ok(Value::Null),
                })
                .collect::<std::result::Result<Vec<_>, _>>()?,
        ),
    };
    Ok(value)
}

impl Renderer for JsonRenderer {
    fn render(&self, value: &Resolved<'_>) -> Result<String> {
        self.write(&resolved_to_value(value)?)
    }

    fn render_set(&self, set: &RelationshipSet<'_, '_>) -> Result<String> {
        let mut object = Map::new();
        for (name, resolved) in set {
            object.insert(name.to_string(), resolved_to_value(resolved)?);
        }
        self.write(&Value::Object(object))
    }

    fn render_resource(&self, resource: &Resource) -> Result<String> {
        self.write(&serde_json::to_value(resource)?)
    }
}
