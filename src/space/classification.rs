//! Space classifications and their metadata field specifications.
//!
//! A classification (building, floor, laboratory, ...) tags a space with a
//! category and contributes extra metadata field definitions. The field
//! specification is stored as raw JSON — an array of
//! `{"name": ..., "description": ...}` objects — and parsed on demand, so a
//! malformed specification surfaces as an error at schema-build time rather
//! than corrupting the column layout.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::{Error, Locale, LocalizedText, Result};

/// Identifier of a classification inside a [`ClassificationRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassificationId(usize);

impl ClassificationId {
    /// Registry slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One parsed metadata field definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataField {
    /// The metadata key, e.g. `"fireRating"`. Keys double as column
    /// identifiers and must be compared verbatim.
    pub key: String,
    /// Localized column label for the key.
    pub description: LocalizedText,
}

/// A typed category a space can be assigned to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    name: LocalizedText,
    metadata_spec: Value,
}

impl Classification {
    /// Create a classification with an empty metadata specification.
    pub fn new(name: LocalizedText) -> Self {
        Classification {
            name,
            metadata_spec: Value::Array(Vec::new()),
        }
    }

    /// Attach a raw metadata specification, builder style.
    ///
    /// Expected shape: a JSON array of objects with a string `"name"` and a
    /// localized-text `"description"`. The shape is validated by
    /// [`Classification::metadata_fields`], not here.
    pub fn with_metadata_spec(mut self, spec: Value) -> Self {
        self.metadata_spec = spec;
        self
    }

    /// Display name of the classification.
    pub fn name(&self) -> &LocalizedText {
        &self.name
    }

    /// The raw metadata specification.
    pub fn metadata_spec(&self) -> &Value {
        &self.metadata_spec
    }

    /// Parse the metadata specification into field definitions, in
    /// declaration order.
    ///
    /// Returns [`Error::MalformedSpec`] when the spec is not an array or an
    /// entry lacks a usable `name` or `description`.
    pub fn metadata_fields(&self) -> Result<Vec<MetadataField>> {
        let entries = self
            .metadata_spec
            .as_array()
            .ok_or_else(|| self.malformed("metadata spec is not an array"))?;

        entries
            .iter()
            .map(|entry| {
                let attribute = entry
                    .as_object()
                    .ok_or_else(|| self.malformed("spec entry is not an object"))?;
                let key = attribute
                    .get("name")
                    .and_then(Value::as_str)
                    .ok_or_else(|| self.malformed("spec entry has no string 'name'"))?;
                let description = attribute
                    .get("description")
                    .and_then(LocalizedText::from_json)
                    .ok_or_else(|| {
                        self.malformed("spec entry has no localized 'description'")
                    })?;
                Ok(MetadataField {
                    key: key.to_string(),
                    description,
                })
            })
            .collect()
    }

    fn malformed(&self, detail: &str) -> Error {
        Error::MalformedSpec {
            classification: self.name.content(&Locale::default()).to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Ordered, in-memory registry of all known classifications.
///
/// Enumeration order is registration order, which makes the derived column
/// schema deterministic across export calls.
#[derive(Debug, Default)]
pub struct ClassificationRegistry {
    items: Vec<Classification>,
}

impl ClassificationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        ClassificationRegistry::default()
    }

    /// Register a classification, returning its id.
    pub fn register(&mut self, classification: Classification) -> ClassificationId {
        let id = ClassificationId(self.items.len());
        self.items.push(classification);
        id
    }

    /// Resolve a classification by id.
    pub fn get(&self, id: ClassificationId) -> Option<&Classification> {
        self.items.get(id.index())
    }

    /// All classifications, in registration order.
    pub fn all(&self) -> impl Iterator<Item = &Classification> {
        self.items.iter()
    }

    /// Number of registered classifications.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
