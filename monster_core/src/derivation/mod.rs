//! Attribute derivation - die-based core attributes to combat numbers
//!
//! Every function here is total: an unset attribute (`None`) is a valid
//! input and degrades the derived value to zero instead of failing.
//!
//! - Numeric value: face count of the die (0 when unset)
//! - Skill dice contribution: half the face count, rounded half-up
//! - Skill dice counts: ceil((c1 + c2) / 2), never below 1
//! - Dodge: defence + intellect + level - physical weight (may be negative)

mod dodge;
mod numeric;
mod skill_dice;

pub use dodge::dodge_value;
pub use numeric::{die_size_to_number, numeric_value};
pub use skill_dice::{
    armor_skill_dice_count, skill_dice_breakdown, skill_dice_contribution,
    weapon_skill_dice_count, willpower_dice_count, SkillDiceBreakdown,
};

/// Derivation constants
pub mod constants {
    /// Every monster rolls at least this many skill dice
    pub const MIN_SKILL_DICE: i32 = 1;

    /// Face count is divided by this to get a skill dice contribution
    pub const CONTRIBUTION_DIVISOR: i32 = 2;

    /// Two contributions are averaged into a dice count
    pub const POOL_DIVISOR: i32 = 2;
}
