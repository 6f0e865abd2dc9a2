//! Bestiary loading - monsters keyed by id

use super::ConfigError;
use crate::monster::Monster;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

/// Accepted monster levels
pub const LEVEL_RANGE: RangeInclusive<i32> = -1_000..=1_000;

/// Accepted physical weights
pub const PHYSICAL_WEIGHT_RANGE: RangeInclusive<i32> = -1_000..=1_000;

/// Container for monster definitions in a bestiary file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestiaryFile {
    #[serde(rename = "monsters", default)]
    pub monsters: Vec<Monster>,
}

/// Monster registry, listed in the order monsters were registered
#[derive(Debug, Clone, Default)]
pub struct Bestiary {
    monsters: HashMap<String, Monster>,
    order: Vec<String>,
}

impl Bestiary {
    /// Create a new empty bestiary
    pub fn new() -> Self {
        Bestiary {
            monsters: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a monster after trimming and checking its id, name, level and weight
    pub fn register(&mut self, mut monster: Monster) -> Result<(), ConfigError> {
        monster.id = monster.id.trim().to_string();
        monster.name = monster.name.trim().to_string();

        if monster.id.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "monster '{}' has an empty id",
                monster.name
            )));
        }
        if monster.name.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "monster '{}' has an empty name",
                monster.id
            )));
        }
        if !LEVEL_RANGE.contains(&monster.level) {
            return Err(ConfigError::ValidationError(format!(
                "monster '{}' has level {} outside {:?}",
                monster.id, monster.level, LEVEL_RANGE
            )));
        }
        if !PHYSICAL_WEIGHT_RANGE.contains(&monster.physical_weight) {
            return Err(ConfigError::ValidationError(format!(
                "monster '{}' has physical weight {} outside {:?}",
                monster.id, monster.physical_weight, PHYSICAL_WEIGHT_RANGE
            )));
        }
        if self.monsters.contains_key(&monster.id) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate monster id '{}'",
                monster.id
            )));
        }

        tracing::debug!("Registered monster: {} ({})", monster.name, monster.id);
        self.order.push(monster.id.clone());
        self.monsters.insert(monster.id.clone(), monster);
        Ok(())
    }

    /// Get a monster by id
    pub fn get(&self, id: &str) -> Option<&Monster> {
        self.monsters.get(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Monster ids in registration order
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    /// Monsters in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Monster> + '_ {
        self.order.iter().filter_map(|id| self.monsters.get(id))
    }

    fn from_file(file: BestiaryFile) -> Result<Self, ConfigError> {
        let mut bestiary = Bestiary::new();
        for monster in file.monsters {
            bestiary.register(monster)?;
        }
        Ok(bestiary)
    }
}

/// Load a bestiary from a `.toml` or `.json` file
pub fn load_bestiary(path: &Path) -> Result<Bestiary, ConfigError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let bestiary = match extension.as_deref() {
        Some("toml") => Bestiary::from_file(super::load_toml(path)?)?,
        Some("json") => parse_bestiary_json(&fs::read_to_string(path)?)?,
        _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
    };

    tracing::info!("Loaded {} monsters from {}", bestiary.len(), path.display());
    Ok(bestiary)
}

/// Load a bestiary from a TOML string
pub fn parse_bestiary(content: &str) -> Result<Bestiary, ConfigError> {
    let file: BestiaryFile = super::parse_toml(content)?;
    Bestiary::from_file(file)
}

/// Load a bestiary from a JSON string
pub fn parse_bestiary_json(content: &str) -> Result<Bestiary, ConfigError> {
    let file: BestiaryFile = super::parse_json(content)?;
    Bestiary::from_file(file)
}

/// Get the bundled bestiary
pub fn default_bestiary() -> Bestiary {
    let toml = include_str!("../../config/monsters.toml");
    parse_bestiary(toml).unwrap_or_else(|err| {
        tracing::warn!("Bundled bestiary failed to load: {}", err);
        Bestiary::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DieSize;

    #[test]
    fn test_parse_bestiary() {
        let toml = r#"
[[monsters]]
id = "cave_troll"
name = "Cave Troll"
level = 5
physical_weight = 4

[monsters.attributes]
attack = "D12"
defence = "D8"
fortitude = "D12"
intellect = "D4"
support = "D4"
bravery = "D10"

[[monsters]]
id = "wisp"
name = "Wisp"
level = 1

[monsters.attributes]
intellect = "D8"
"#;

        let bestiary = parse_bestiary(toml).unwrap();
        assert_eq!(bestiary.len(), 2);
        assert_eq!(bestiary.ids(), &["cave_troll".to_string(), "wisp".to_string()]);

        let troll = bestiary.get("cave_troll").unwrap();
        assert_eq!(troll.attributes.attack, Some(DieSize::D12));
        // Attack 6 + Bravery 5 = 11 -> 6
        assert_eq!(troll.derived().weapon_skill_dice(), 6);
        // 8 + 4 + 5 - 4
        assert_eq!(troll.derived().dodge, 13);

        let wisp = bestiary.get("wisp").unwrap();
        assert_eq!(wisp.physical_weight, 0);
        assert_eq!(wisp.attributes.attack, None);
        assert_eq!(wisp.derived().weapon_skill_dice(), 1);
    }

    #[test]
    fn test_parse_bestiary_json() {
        let json = r#"{
            "monsters": [
                {
                    "id": "rat",
                    "name": "Giant Rat",
                    "level": 1,
                    "physical_weight": 1,
                    "attributes": { "attack": "D4", "defence": "D6" }
                }
            ]
        }"#;

        let bestiary = parse_bestiary_json(json).unwrap();
        let rat = bestiary.get("rat").unwrap();
        assert_eq!(rat.attributes.defence, Some(DieSize::D6));
        assert_eq!(rat.derived().dodge, 6);
    }

    #[test]
    fn test_names_are_trimmed() {
        let toml = r#"
[[monsters]]
id = "  ghoul "
name = " Ghoul  "
"#;
        let bestiary = parse_bestiary(toml).unwrap();
        assert_eq!(bestiary.get("ghoul").unwrap().name, "Ghoul");
    }

    #[test]
    fn test_blank_name_rejected() {
        let toml = r#"
[[monsters]]
id = "nameless"
name = "   "
"#;
        let err = parse_bestiary(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let toml = r#"
[[monsters]]
id = "imp"
name = "Imp"

[[monsters]]
id = "imp"
name = "Other Imp"
"#;
        let err = parse_bestiary(toml).unwrap_err();
        assert!(err.to_string().contains("duplicate monster id 'imp'"));
    }

    #[test]
    fn test_out_of_range_level_rejected() {
        let toml = r#"
[[monsters]]
id = "titan"
name = "Titan"
level = 2147483647

[monsters.attributes]
defence = "D4"
"#;
        let err = parse_bestiary(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("level 2147483647"));
    }

    #[test]
    fn test_out_of_range_weight_rejected() {
        let json = r#"{"monsters": [{"id": "mote", "name": "Mote", "physical_weight": -5000}]}"#;
        let err = parse_bestiary_json(json).unwrap_err();
        assert!(err.to_string().contains("physical weight -5000"));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let monster = Monster::new("edge", "Edge")
            .with_level(*LEVEL_RANGE.end())
            .with_physical_weight(*PHYSICAL_WEIGHT_RANGE.start());
        let mut bestiary = Bestiary::new();
        bestiary.register(monster).unwrap();
        assert_eq!(bestiary.get("edge").unwrap().derived().dodge, 2_000);
    }

    #[test]
    fn test_bad_die_token_is_parse_error() {
        let toml = r#"
[[monsters]]
id = "dragon"
name = "Dragon"

[monsters.attributes]
attack = "D20"
"#;
        let err = parse_bestiary(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_bestiary_by_extension() {
        let dir = std::env::temp_dir().join(format!("monster_core_bestiary_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let toml_path = dir.join("imps.toml");
        fs::write(&toml_path, "[[monsters]]\nid = \"imp\"\nname = \"Imp\"\n").unwrap();
        let json_path = dir.join("imps.JSON");
        fs::write(&json_path, r#"{"monsters": [{"id": "imp", "name": "Imp", "level": 2}]}"#).unwrap();

        assert_eq!(load_bestiary(&toml_path).unwrap().get("imp").unwrap().level, 0);
        assert_eq!(load_bestiary(&json_path).unwrap().get("imp").unwrap().level, 2);

        let missing = load_bestiary(&dir.join("missing.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::IoError(_)));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_bestiary(Path::new("monsters.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_default_bestiary_loads_all() {
        let bestiary = default_bestiary();

        assert_eq!(bestiary.len(), 6, "Expected 6 monsters from config");

        let expected = ["goblin", "orc_brute", "cave_troll", "bog_wisp", "skeleton", "hatchling"];
        for id in expected {
            assert!(bestiary.get(id).is_some(), "Missing monster: {}", id);
        }
    }
}
