//! Core types: die sizes and the six core attributes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error when a die size token is not one of `D4`, `D6`, `D8`, `D10`, `D12`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown die size: '{0}' (expected D4, D6, D8, D10 or D12)")]
pub struct DieSizeParseError(pub String);

/// Die size backing a core attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DieSize {
    D4,
    D6,
    D8,
    D10,
    D12,
}

impl DieSize {
    /// Get all die sizes, smallest first
    pub fn all() -> &'static [DieSize] {
        &[DieSize::D4, DieSize::D6, DieSize::D8, DieSize::D10, DieSize::D12]
    }

    /// Number of faces on the die
    pub const fn faces(self) -> i32 {
        match self {
            DieSize::D4 => 4,
            DieSize::D6 => 6,
            DieSize::D8 => 8,
            DieSize::D10 => 10,
            DieSize::D12 => 12,
        }
    }

    /// Token used in bestiary files and on sheets
    pub fn token(self) -> &'static str {
        match self {
            DieSize::D4 => "D4",
            DieSize::D6 => "D6",
            DieSize::D8 => "D8",
            DieSize::D10 => "D10",
            DieSize::D12 => "D12",
        }
    }

    /// Next larger die (D12 stays D12)
    pub fn next(self) -> DieSize {
        match self {
            DieSize::D4 => DieSize::D6,
            DieSize::D6 => DieSize::D8,
            DieSize::D8 => DieSize::D10,
            DieSize::D10 | DieSize::D12 => DieSize::D12,
        }
    }

    /// Next smaller die (D4 stays D4)
    pub fn prev(self) -> DieSize {
        match self {
            DieSize::D4 | DieSize::D6 => DieSize::D4,
            DieSize::D8 => DieSize::D6,
            DieSize::D10 => DieSize::D8,
            DieSize::D12 => DieSize::D10,
        }
    }
}

impl fmt::Display for DieSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for DieSize {
    type Err = DieSizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        DieSize::all()
            .iter()
            .copied()
            .find(|die| die.token().eq_ignore_ascii_case(token))
            .ok_or_else(|| DieSizeParseError(token.to_string()))
    }
}

/// The six core attributes every monster carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoreAttribute {
    Attack,
    Defence,
    Fortitude,
    Intellect,
    Support,
    Bravery,
}

impl CoreAttribute {
    /// Get all core attributes in sheet order
    pub fn all() -> &'static [CoreAttribute] {
        &[
            CoreAttribute::Attack,
            CoreAttribute::Defence,
            CoreAttribute::Fortitude,
            CoreAttribute::Intellect,
            CoreAttribute::Support,
            CoreAttribute::Bravery,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            CoreAttribute::Attack => "Attack",
            CoreAttribute::Defence => "Defence",
            CoreAttribute::Fortitude => "Fortitude",
            CoreAttribute::Intellect => "Intellect",
            CoreAttribute::Support => "Support",
            CoreAttribute::Bravery => "Bravery",
        }
    }
}
