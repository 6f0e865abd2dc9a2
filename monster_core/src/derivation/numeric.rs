//! Numeric value of a die-based attribute

use crate::types::DieSize;

/// Convert a die size to its face count, 0 when the attribute is unset
pub fn die_size_to_number(die: Option<DieSize>) -> i32 {
    match die {
        Some(die) => die.faces(),
        None => 0,
    }
}

/// Numeric value of an attribute as used by combat and sheet display
///
/// Currently the raw face count. Kept separate from [`die_size_to_number`]
/// so a rule revision (e.g. a tier modifier) only has to change this one.
pub fn numeric_value(die: Option<DieSize>) -> i32 {
    die_size_to_number(die)
}
