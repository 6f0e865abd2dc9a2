//! monster_core - Derived combat statistics for tabletop monsters
//!
//! This library provides:
//! - DieSize / CoreAttribute: the die-based attribute model
//! - Attribute derivation: numeric values, skill dice counts, dodge
//! - DerivedStats: the full set of sheet values for a monster
//! - Bestiary: monster definitions loaded from TOML or JSON

pub mod config;
pub mod derivation;
pub mod monster;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use config::{default_bestiary, load_bestiary, Bestiary, ConfigError};
pub use derivation::{
    armor_skill_dice_count, die_size_to_number, dodge_value, numeric_value,
    skill_dice_contribution, weapon_skill_dice_count, willpower_dice_count, SkillDiceBreakdown,
};
pub use monster::{AttributeSet, DerivedStats, Monster};
pub use types::{CoreAttribute, DieSize, DieSizeParseError};
