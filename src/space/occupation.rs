//! Occupation records linking spaces to their occupants.

use serde::{Deserialize, Serialize};

/// The person or account occupying a space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    /// Human-readable name, e.g. "Jane Doe"
    pub display_name: String,
    /// Account name, e.g. "jdoe"
    pub username: String,
}

impl Occupant {
    /// Create an occupant from display name and username.
    pub fn new(display_name: impl Into<String>, username: impl Into<String>) -> Self {
        Occupant {
            display_name: display_name.into(),
            username: username.into(),
        }
    }
}

/// A relation between a space and an occupant.
///
/// Only occupations that are both shared and active contribute to the
/// exported occupants column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupation {
    pub occupant: Occupant,
    /// Whether the occupation is a shared one (desk sharing and the like).
    pub shared: bool,
    /// Whether the occupation is currently valid for reporting.
    pub active: bool,
}

impl Occupation {
    /// Create a shared, active occupation.
    pub fn shared(occupant: Occupant) -> Self {
        Occupation {
            occupant,
            shared: true,
            active: true,
        }
    }

    /// Create an exclusive (non-shared), active occupation.
    pub fn exclusive(occupant: Occupant) -> Self {
        Occupation {
            occupant,
            shared: false,
            active: true,
        }
    }

    /// Mark the occupation inactive, builder style.
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Whether this occupation shows up in the occupants column.
    pub fn is_reportable(&self) -> bool {
        self.shared && self.active
    }
}
