//! Prelude module for convenient imports
//!
//! ```rust
//! use monster_core::prelude::*;
//! ```

// Core types
pub use crate::types::{CoreAttribute, DieSize};
pub use crate::monster::{AttributeSet, DerivedStats, Monster};

// Derivation
pub use crate::derivation::{
    armor_skill_dice_count, die_size_to_number, dodge_value, numeric_value,
    skill_dice_breakdown, skill_dice_contribution, weapon_skill_dice_count,
    willpower_dice_count, SkillDiceBreakdown,
};

// Config
pub use crate::config::{default_bestiary, load_bestiary, Bestiary};
