//! DerivedStats - everything a monster sheet shows that is not stored

use crate::derivation::{dodge_value, numeric_value, skill_dice_breakdown, SkillDiceBreakdown};
use crate::monster::{AttributeSet, Monster};
use crate::types::CoreAttribute;
use serde::Serialize;

/// Derived combat values for one monster, recomputed on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedStats {
    pub attack: i32,
    pub defence: i32,
    pub fortitude: i32,
    pub intellect: i32,
    pub support: i32,
    pub bravery: i32,
    /// Attack + Bravery
    pub weapon_skill: SkillDiceBreakdown,
    /// Defence + Fortitude
    pub armor_skill: SkillDiceBreakdown,
    /// Support + Bravery
    pub willpower: SkillDiceBreakdown,
    pub dodge: i64,
}

impl DerivedStats {
    pub fn from_monster(monster: &Monster) -> Self {
        Self::from_parts(&monster.attributes, monster.level, monster.physical_weight)
    }

    pub fn from_parts(attributes: &AttributeSet, level: i32, physical_weight: i32) -> Self {
        DerivedStats {
            attack: numeric_value(attributes.attack),
            defence: numeric_value(attributes.defence),
            fortitude: numeric_value(attributes.fortitude),
            intellect: numeric_value(attributes.intellect),
            support: numeric_value(attributes.support),
            bravery: numeric_value(attributes.bravery),
            weapon_skill: skill_dice_breakdown(attributes.attack, attributes.bravery),
            armor_skill: skill_dice_breakdown(attributes.defence, attributes.fortitude),
            willpower: skill_dice_breakdown(attributes.support, attributes.bravery),
            dodge: dodge_value(attributes.defence, attributes.intellect, level, physical_weight),
        }
    }

    /// Numeric value of a core attribute
    pub fn numeric(&self, attr: CoreAttribute) -> i32 {
        match attr {
            CoreAttribute::Attack => self.attack,
            CoreAttribute::Defence => self.defence,
            CoreAttribute::Fortitude => self.fortitude,
            CoreAttribute::Intellect => self.intellect,
            CoreAttribute::Support => self.support,
            CoreAttribute::Bravery => self.bravery,
        }
    }

    pub fn weapon_skill_dice(&self) -> i32 {
        self.weapon_skill.count
    }

    pub fn armor_skill_dice(&self) -> i32 {
        self.armor_skill.count
    }

    pub fn willpower_dice(&self) -> i32 {
        self.willpower.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivation::{armor_skill_dice_count, weapon_skill_dice_count, willpower_dice_count};
    use crate::types::DieSize;

    fn orc() -> Monster {
        Monster::new("orc", "Orc")
            .with_level(3)
            .with_physical_weight(2)
            .with_attributes(
                AttributeSet::new()
                    .with(CoreAttribute::Attack, DieSize::D10)
                    .with(CoreAttribute::Defence, DieSize::D8)
                    .with(CoreAttribute::Fortitude, DieSize::D8)
                    .with(CoreAttribute::Intellect, DieSize::D6)
                    .with(CoreAttribute::Support, DieSize::D4)
                    .with(CoreAttribute::Bravery, DieSize::D6),
            )
    }

    #[test]
    fn test_orc_sheet() {
        let stats = orc().derived();

        assert_eq!(stats.attack, 10);
        assert_eq!(stats.numeric(CoreAttribute::Intellect), 6);
        // Attack 5 + Bravery 3 = 8 -> 4
        assert_eq!(stats.weapon_skill_dice(), 4);
        // Defence 4 + Fortitude 4 = 8 -> 4
        assert_eq!(stats.armor_skill_dice(), 4);
        // Support 2 + Bravery 3 = 5 -> 3
        assert_eq!(stats.willpower_dice(), 3);
        // 8 + 6 + 3 - 2
        assert_eq!(stats.dodge, 15);
    }

    #[test]
    fn test_sheet_matches_free_functions() {
        let monster = orc();
        let attrs = &monster.attributes;
        let stats = monster.derived();

        assert_eq!(stats.weapon_skill_dice(), weapon_skill_dice_count(attrs.attack, attrs.bravery));
        assert_eq!(stats.armor_skill_dice(), armor_skill_dice_count(attrs.defence, attrs.fortitude));
        assert_eq!(stats.willpower_dice(), willpower_dice_count(attrs.support, attrs.bravery));
    }

    #[test]
    fn test_empty_monster_sheet() {
        let stats = Monster::new("blob", "Blob").with_physical_weight(4).derived();

        for attr in CoreAttribute::all() {
            assert_eq!(stats.numeric(*attr), 0);
        }
        assert_eq!(stats.weapon_skill_dice(), 1);
        assert_eq!(stats.armor_skill_dice(), 1);
        assert_eq!(stats.willpower_dice(), 1);
        assert_eq!(stats.dodge, -4);
    }

    #[test]
    fn test_sheet_serializes() {
        let json = serde_json::to_value(orc().derived()).unwrap();
        assert_eq!(json["dodge"], 15);
        assert_eq!(json["weapon_skill"]["count"], 4);
    }
}
