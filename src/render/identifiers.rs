use crate::model::{RelationshipSet, Resolved, Resource, Slot};
use crate::render::Renderer;
use crate::Result;

/// Hole marker in line output.
const HOLE: &str = "-";

/// Renders one `type:id` line per resource, with `-` marking holes.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentifierRenderer;

impl IdentifierRenderer {
    fn lines(resolved: &Resolved<'_>) -> Vec<String> {
        match resolved {
            Resolved::Absent => Vec::new(),
            Resolved::Single(resource) => vec![resource.identifier().to_string()],
            Resolved::Plural(slots) => slots
                .iter()
                .map(|slot| match slot {
                    Slot::Found(resource) => resource.identifier().to_string(),
                    Slot::Hole => HOLE.to_string(),
                })
                .collect(),
        }
    }
}

impl Renderer for IdentifierRenderer {
    fn render(&self, value: &Resolved<'_>) -> Result<String> {
        let mut out = String::new();
        for line in Self::lines(value) {
            out.push_str(&line);
            out.push('\n');
        }
        Ok(out)
    }

    fn render_set(&self, set: &RelationshipSet<'_, '_>) -> Result<String> {
        let mut out = String::new();
        for (name, resolved) in set {
            out.push_str(&format!("{}:\n", name));
            for line in Self::lines(resolved) {
                out.push_str(&format!("  {}\n", line));
            }
        }
        Ok(out)
    }

    fn render_resource(&self, resource: &Resource) -> Result<String> {
        Ok(format!("{}\n", resource.identifier()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_lines_with_hole_marker() {
        let a = Resource::new("worms", "3");
        let b = Resource::new("worms", "8");
        let resolved = Resolved::Plural(vec![Slot::Found(&a), Slot::Hole, Slot::Found(&b)]);
        let rendered = IdentifierRenderer.render(&resolved).expect("render should work");
        assert_eq!(rendered, "worms:3\n-\nworms:8\n");
    }

    #[test]
    fn test_absent_renders_nothing() {
        let rendered = IdentifierRenderer
            .render(&Resolved::Absent)
            .expect("render should work");
        assert!(rendered.is_empty());
    }

    #[test]
    fn test_set_groups_by_name() {
        let cat = Resource::new("cats", "1");
        let mut set = RelationshipSet::new();
        set.insert("cat", Resolved::Single(&cat));
        set.insert("dogs", Resolved::Plural(vec![Slot::Hole]));
        let rendered = IdentifierRenderer.render_set(&set).expect("render should work");
        assert_eq!(rendered, "cat:\n  cats:1\ndogs:\n  -\n");
    }
}
