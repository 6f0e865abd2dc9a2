//! AttributeSet - die sizes assigned to the six core attributes

use crate::types::{CoreAttribute, DieSize};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Die size of each core attribute. `None` means the attribute is not set yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack: Option<DieSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defence: Option<DieSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fortitude: Option<DieSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intellect: Option<DieSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support: Option<DieSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bravery: Option<DieSize>,
}

impl AttributeSet {
    /// Create an attribute set with nothing assigned
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an attribute set with every attribute on the same die
    pub fn uniform(die: DieSize) -> Self {
        AttributeSet {
            attack: Some(die),
            defence: Some(die),
            fortitude: Some(die),
            intellect: Some(die),
            support: Some(die),
            bravery: Some(die),
        }
    }

    /// Draw a random assignment; each attribute has a 1 in 6 chance of staying unset
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut set = AttributeSet::new();
        for attr in CoreAttribute::all() {
            let die = if rng.gen_ratio(1, 6) {
                None
            } else {
                let sizes = DieSize::all();
                Some(sizes[rng.gen_range(0..sizes.len())])
            };
            set.set(*attr, die);
        }
        set
    }

    pub fn get(&self, attr: CoreAttribute) -> Option<DieSize> {
        match attr {
            CoreAttribute::Attack => self.attack,
            CoreAttribute::Defence => self.defence,
            CoreAttribute::Fortitude => self.fortitude,
            CoreAttribute::Intellect => self.intellect,
            CoreAttribute::Support => self.support,
            CoreAttribute::Bravery => self.bravery,
        }
    }

    pub fn set(&mut self, attr: CoreAttribute, die: Option<DieSize>) {
        let slot = match attr {
            CoreAttribute::Attack => &mut self.attack,
            CoreAttribute::Defence => &mut self.defence,
            CoreAttribute::Fortitude => &mut self.fortitude,
            CoreAttribute::Intellect => &mut self.intellect,
            CoreAttribute::Support => &mut self.support,
            CoreAttribute::Bravery => &mut self.bravery,
        };
        *slot = die;
    }

    /// Builder-style variant of [`AttributeSet::set`]
    pub fn with(mut self, attr: CoreAttribute, die: DieSize) -> Self {
        self.set(attr, Some(die));
        self
    }

    /// Step an attribute one die size up; an unset attribute becomes D4
    pub fn step_up(&mut self, attr: CoreAttribute) {
        let die = match self.get(attr) {
            Some(die) => die.next(),
            None => DieSize::D4,
        };
        self.set(attr, Some(die));
    }

    /// Step an attribute one die size down; stepping below D4 unsets it
    pub fn step_down(&mut self, attr: CoreAttribute) {
        let die = match self.get(attr) {
            Some(DieSize::D4) | None => None,
            Some(die) => Some(die.prev()),
        };
        self.set(attr, die);
    }

    /// Whether every core attribute has a die assigned
    pub fn is_complete(&self) -> bool {
        self.iter().all(|(_, die)| die.is_some())
    }

    /// Iterate attributes in sheet order
    pub fn iter(&self) -> impl Iterator<Item = (CoreAttribute, Option<DieSize>)> + '_ {
        CoreAttribute::all().iter().map(move |attr| (*attr, self.get(*attr)))
    }
}
