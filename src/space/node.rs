//! The space node: one element of the hierarchical tree.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::classification::ClassificationId;
use super::metadata::MetaValue;
use super::occupation::Occupation;
use super::tree::SpaceId;

/// Typed attribute block of a space.
///
/// Every field is optional; absent values render as the placeholder in the
/// export rather than being treated as errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpaceInfo {
    /// External identification code, e.g. a room number scheme.
    pub identification: Option<String>,
    pub valid_from: Option<NaiveDate>,
    pub valid_until: Option<NaiveDate>,
    pub blueprint_number: Option<String>,
    pub classification: Option<ClassificationId>,
    /// How many people the space can be allocated to.
    pub allocatable_capacity: Option<u32>,
    /// Floor area in square meters.
    pub area: Option<f64>,
}

/// One node of the space tree (a building, floor, room, ...).
///
/// Spaces are owned by a [`super::tree::SpaceTree`]; `parent` and `children`
/// are index references maintained by the tree on attachment. The parent
/// link is a non-owning back-reference used only for path rendering.
#[derive(Debug, Clone)]
pub struct Space {
    name: String,
    active: bool,
    /// Typed attributes.
    pub info: SpaceInfo,
    metadata: HashMap<String, MetaValue>,
    occupations: Vec<Occupation>,
    pub(crate) parent: Option<SpaceId>,
    pub(crate) children: Vec<SpaceId>,
}

impl Space {
    /// Create an active space with the given name and no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Space {
            name: name.into(),
            active: true,
            info: SpaceInfo::default(),
            metadata: HashMap::new(),
            occupations: Vec::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Set the active flag, builder style.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Set the typed attribute block, builder style.
    pub fn with_info(mut self, info: SpaceInfo) -> Self {
        self.info = info;
        self
    }

    /// Attach a metadata value, builder style.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<MetaValue>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Attach an occupation, builder style. Occupations keep insertion
    /// order, which is also their rendering order in the occupants column.
    pub fn with_occupation(mut self, occupation: Occupation) -> Self {
        self.occupations.push(occupation);
        self
    }

    /// The space's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the space is currently valid for reporting.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Change the active flag in place.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Look up a metadata value by key.
    pub fn metadata(&self, key: &str) -> Option<&MetaValue> {
        self.metadata.get(key)
    }

    /// All occupation records, in insertion order.
    pub fn occupations(&self) -> &[Occupation] {
        &self.occupations
    }

    /// The parent space, if this is not a root.
    pub fn parent(&self) -> Option<SpaceId> {
        self.parent
    }

    /// Child spaces, in attachment order (which is traversal order).
    pub fn children(&self) -> &[SpaceId] {
        &self.children
    }
}
