//! Monster records and the sheet values derived from them

mod attributes;
mod derived;

pub use attributes::AttributeSet;
pub use derived::DerivedStats;

use serde::{Deserialize, Serialize};

/// A monster as stored in a bestiary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    /// Unique identifier within a bestiary
    pub id: String,
    /// Display name
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub level: i32,
    #[serde(default)]
    pub physical_weight: i32,
    #[serde(default)]
    pub attributes: AttributeSet,
}

impl Monster {
    /// Create a level 0 monster with no attributes set
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Monster {
            id: id.into(),
            name: name.into(),
            description: None,
            level: 0,
            physical_weight: 0,
            attributes: AttributeSet::new(),
        }
    }

    pub fn with_level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn with_physical_weight(mut self, physical_weight: i32) -> Self {
        self.physical_weight = physical_weight;
        self
    }

    pub fn with_attributes(mut self, attributes: AttributeSet) -> Self {
        self.attributes = attributes;
        self
    }

    /// Compute the sheet values for this monster
    pub fn derived(&self) -> DerivedStats {
        DerivedStats::from_monster(self)
    }
}
