//! Skill dice - contributions and pool counts
//!
//! Two different rounding rules live here and must not be mixed up:
//! - A single attribute contributes half its face count, rounded half-up.
//! - A pool averages two contributions and rounds up (ceiling).
//!
//! Examples:
//! - D4 + unset: contributions 2 + 0, ceil(2 / 2) = 1
//! - D6 + D8: contributions 3 + 4, ceil(7 / 2) = 4
//! - D12 + D12: contributions 6 + 6, ceil(12 / 2) = 6
//! - unset + unset: ceil(0 / 2) = 0, clamped to 1

use super::constants::{CONTRIBUTION_DIVISOR, MIN_SKILL_DICE, POOL_DIVISOR};
use super::numeric::numeric_value;
use crate::types::DieSize;
use serde::{Deserialize, Serialize};

/// Integer division rounding to nearest, halves toward positive infinity
///
/// `denominator` must be positive.
pub(crate) fn round_half_up_div(numerator: i32, denominator: i32) -> i32 {
    (2 * numerator + denominator).div_euclid(2 * denominator)
}

/// Integer division rounding toward positive infinity
///
/// `denominator` must be positive.
pub(crate) fn ceil_div(numerator: i32, denominator: i32) -> i32 {
    let quotient = numerator.div_euclid(denominator);
    if numerator.rem_euclid(denominator) == 0 {
        quotient
    } else {
        quotient + 1
    }
}

/// Skill dice a single attribute contributes to a pool
pub fn skill_dice_contribution(die: Option<DieSize>) -> i32 {
    let value = numeric_value(die);
    if value == 0 {
        return 0;
    }
    round_half_up_div(value, CONTRIBUTION_DIVISOR)
}

/// How a skill dice count was reached from its two attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDiceBreakdown {
    pub first_contribution: i32,
    pub second_contribution: i32,
    /// Sum of both contributions
    pub total: i32,
    /// Final pool size after ceiling and the minimum of one die
    pub count: i32,
}

/// Combine two attributes into a skill dice pool, keeping the intermediates
pub fn skill_dice_breakdown(first: Option<DieSize>, second: Option<DieSize>) -> SkillDiceBreakdown {
    let first_contribution = skill_dice_contribution(first);
    let second_contribution = skill_dice_contribution(second);
    let total = first_contribution + second_contribution;

    SkillDiceBreakdown {
        first_contribution,
        second_contribution,
        total,
        count: ceil_div(total, POOL_DIVISOR).max(MIN_SKILL_DICE),
    }
}

fn dice_count(first: Option<DieSize>, second: Option<DieSize>) -> i32 {
    skill_dice_breakdown(first, second).count
}

/// Weapon skill dice from Attack and Bravery
pub fn weapon_skill_dice_count(attack: Option<DieSize>, bravery: Option<DieSize>) -> i32 {
    dice_count(attack, bravery)
}

/// Armor skill dice from Defence and Fortitude
pub fn armor_skill_dice_count(defence: Option<DieSize>, fortitude: Option<DieSize>) -> i32 {
    dice_count(defence, fortitude)
}

/// Willpower dice from Support and Bravery
pub fn willpower_dice_count(support: Option<DieSize>, bravery: Option<DieSize>) -> i32 {
    dice_count(support, bravery)
}
