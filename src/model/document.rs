//! JSON:API document model.
//!
//! Only the members the resolver cares about get their own fields. Everything
//! else (attributes, links, meta) is kept verbatim in flattened JSON maps so
//! that a document survives a parse/serialize cycle.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// A top-level JSON:API document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Primary data.
    #[serde(default, skip_serializing_if = "PrimaryData::is_null")]
    pub data: PrimaryData,
    /// Flat pool of resources that relationship stubs are resolved against.
    #[serde(default)]
    pub included: Vec<Resource>,
    /// Any other top-level members (`meta`, `links`, `jsonapi`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    /// Parses a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parses a document from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads and parses a document from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Primary data resources in document order.
    pub fn primary_resources(&self) -> &[Resource] {
        match &self.data {
            PrimaryData::Null => &[],
            PrimaryData::Single(resource) => std::slice::from_ref(resource.as_ref()),
            PrimaryData::Collection(resources) => resources,
        }
    }
}

/// The `data` member of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimaryData {
    Collection(Vec<Resource>),
    Single(Box<Resource>),
    #[default]
    Null,
}

impl PrimaryData {
    pub fn is_null(&self) -> bool {
        matches!(self, PrimaryData::Null)
    }
}

/// A full resource object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<BTreeMap<String, Relationship>>,
    /// Attributes, links, meta and any ad-hoc members.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Resource {
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
            ..Default::default()
        }
    }

    /// Adds (or replaces) a relationship declaration.
    pub fn with_relationship(mut self, name: impl Into<String>, data: Linkage) -> Self {
        self.relationships
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), Relationship::new(data));
        self
    }

    /// Adds (or replaces) an attribute under the `attributes` member.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let attributes = self
            .fields
            .entry("attributes")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(map) = attributes {
            map.insert(name.into(), value.into());
        }
        self
    }

    pub fn matches(&self, kind: &str, id: &str) -> bool {
        self.kind == kind && self.id == id
    }

    pub fn identifier(&self) -> ResourceIdentifier {
        ResourceIdentifier::new(self.kind.as_str(), self.id.as_str())
    }

    /// Looks a value up in `attributes` first, then among the top-level members.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.fields
            .get("attributes")
            .and_then(|attributes| attributes.get(name))
            .or_else(|| self.fields.get(name))
    }

    /// Declaration for `name`, if the resource declares one.
    pub fn relationship(&self, name: &str) -> Option<&Relationship> {
        self.relationships.as_ref()?.get(name)
    }

    /// Declared relationship names in map order.
    pub fn relationship_names(&self) -> impl Iterator<Item = &str> {
        self.relationships
            .iter()
            .flat_map(|relationships| relationships.keys().map(String::as_str))
    }
}

/// A relationship declaration: linkage plus optional `links`/`meta`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub data: Linkage,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Relationship {
    pub fn new(data: Linkage) -> Self {
        Self {
            data,
            extra: Map::new(),
        }
    }
}

/// Relationship linkage. The shape alone decides cardinality.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Linkage {
    Plural(Vec<ResourceIdentifier>),
    Single(ResourceIdentifier),
    #[default]
    Empty,
}

impl Linkage {
    pub fn single(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Linkage::Single(ResourceIdentifier::new(kind, id))
    }

    pub fn plural<K, I>(stubs: impl IntoIterator<Item = (K, I)>) -> Self
    where
        K: Into<String>,
        I: Into<String>,
    {
        Linkage::Plural(
            stubs
                .into_iter()
                .map(|(kind, id)| ResourceIdentifier::new(kind, id))
                .collect(),
        )
    }

    /// Every stub carried by this linkage, in order.
    pub fn identifiers(&self) -> &[ResourceIdentifier] {
        match self {
            Linkage::Plural(stubs) => stubs,
            Linkage::Single(stub) => std::slice::from_ref(stub),
            Linkage::Empty => &[],
        }
    }
}

/// A `{type, id}` stub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl ResourceIdentifier {
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
            meta: None,
        }
    }
}

impl fmt::Display for ResourceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// Parses a `type:id` selector. The id may itself contain `:`.
impl FromStr for ResourceIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((kind, id)) if !kind.is_empty() && !id.is_empty() => {
                Ok(ResourceIdentifier::new(kind, id))
            }
            _ => Err(Error::InvalidSelector(s.to_string())),
        }
    }
}
