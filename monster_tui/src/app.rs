//! Application state

use monster_core::{
    default_bestiary, load_bestiary, AttributeSet, Bestiary, ConfigError, CoreAttribute,
    DerivedStats, Monster,
};
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Bestiary,
    Sheet,
    Breakdown,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Bestiary, Tab::Sheet, Tab::Breakdown, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Bestiary => "Bestiary",
            Tab::Sheet => "Sheet",
            Tab::Breakdown => "Calc",
            Tab::Help => "Help",
        }
    }
}

pub struct App {
    pub current_tab: Tab,
    /// Working copies of the loaded monsters; edits never touch the source file
    pub monsters: Vec<Monster>,
    pub selected_monster: usize,
    pub selected_attribute: usize,
    /// Bestiary file given on the command line, `None` for the bundled one
    pub source: Option<PathBuf>,
    pub status: String,
    pub rng: rand::rngs::StdRng,
    /// Tab to return to when help is toggled off
    pub previous_tab: Tab,
    pub breakdown_scroll: usize,
}

impl App {
    pub fn new(source: Option<PathBuf>) -> Self {
        let mut app = App {
            current_tab: Tab::Bestiary,
            monsters: Vec::new(),
            selected_monster: 0,
            selected_attribute: 0,
            source,
            status: String::new(),
            rng: rand::rngs::StdRng::from_entropy(),
            previous_tab: Tab::Bestiary,
            breakdown_scroll: 0,
        };
        app.reload();
        app
    }

    fn load_monsters(source: Option<&PathBuf>) -> Result<Bestiary, ConfigError> {
        match source {
            Some(path) => load_bestiary(path),
            None => Ok(default_bestiary()),
        }
    }

    /// Reload monsters from the source, dropping unsaved edits
    pub fn reload(&mut self) {
        match Self::load_monsters(self.source.as_ref()) {
            Ok(bestiary) => {
                self.monsters = bestiary.iter().cloned().collect();
                self.status = match &self.source {
                    Some(path) => format!("Loaded {} monsters from {}", self.monsters.len(), path.display()),
                    None => format!("Loaded {} bundled monsters", self.monsters.len()),
                };
            }
            Err(err) => {
                tracing::error!("Failed to load bestiary: {}", err);
                self.status = format!("Load failed: {}", err);
            }
        }
        self.selected_monster = self.selected_monster.min(self.monsters.len().saturating_sub(1));
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let next_idx = (current_idx + 1) % tabs.len();
        self.current_tab = tabs[next_idx];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn set_tab(&mut self, index: usize) {
        let tabs = Tab::all();
        if index < tabs.len() {
            self.current_tab = tabs[index];
        }
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Bestiary => {
                if self.selected_monster > 0 {
                    self.selected_monster -= 1;
                }
            }
            Tab::Sheet => {
                if self.selected_attribute > 0 {
                    self.selected_attribute -= 1;
                }
            }
            Tab::Breakdown => {
                if self.breakdown_scroll > 0 {
                    self.breakdown_scroll -= 1;
                }
            }
            Tab::Help => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Bestiary => {
                if self.selected_monster < self.monsters.len().saturating_sub(1) {
                    self.selected_monster += 1;
                }
            }
            Tab::Sheet => {
                if self.selected_attribute < CoreAttribute::all().len() - 1 {
                    self.selected_attribute += 1;
                }
            }
            Tab::Breakdown => {
                self.breakdown_scroll += 1;
            }
            Tab::Help => {}
        }
    }

    pub fn on_left(&mut self) {
        if self.current_tab == Tab::Sheet {
            let attr = self.current_attribute();
            if let Some(monster) = self.current_monster_mut() {
                monster.attributes.step_down(attr);
            }
        }
    }

    pub fn on_right(&mut self) {
        if self.current_tab == Tab::Sheet {
            let attr = self.current_attribute();
            if let Some(monster) = self.current_monster_mut() {
                monster.attributes.step_up(attr);
            }
        }
    }

    pub fn on_enter(&mut self) {
        if self.current_tab == Tab::Bestiary && !self.monsters.is_empty() {
            self.current_tab = Tab::Sheet;
        }
    }

    pub fn adjust_level(&mut self, delta: i32) {
        if let Some(monster) = self.current_monster_mut() {
            monster.level = monster.level.saturating_add(delta);
        }
    }

    pub fn adjust_weight(&mut self, delta: i32) {
        if let Some(monster) = self.current_monster_mut() {
            monster.physical_weight = monster.physical_weight.saturating_add(delta);
        }
    }

    /// Clear the selected attribute on the sheet
    pub fn unset_attribute(&mut self) {
        let attr = self.current_attribute();
        if let Some(monster) = self.current_monster_mut() {
            monster.attributes.set(attr, None);
        }
    }

    /// Replace the current monster's attributes with a random assignment
    pub fn randomize(&mut self) {
        let attributes = AttributeSet::random(&mut self.rng);
        let name = match self.current_monster_mut() {
            Some(monster) => {
                monster.attributes = attributes;
                tracing::debug!("Randomized attributes for {}", monster.id);
                monster.name.clone()
            }
            None => return,
        };
        self.status = format!("Randomized {}", name);
    }

    pub fn toggle_help(&mut self) {
        if self.current_tab == Tab::Help {
            self.current_tab = self.previous_tab;
        } else {
            self.previous_tab = self.current_tab;
            self.current_tab = Tab::Help;
        }
    }

    pub fn current_attribute(&self) -> CoreAttribute {
        let attrs = CoreAttribute::all();
        attrs[self.selected_attribute.min(attrs.len() - 1)]
    }

    pub fn current_monster(&self) -> Option<&Monster> {
        self.monsters.get(self.selected_monster)
    }

    fn current_monster_mut(&mut self) -> Option<&mut Monster> {
        self.monsters.get_mut(self.selected_monster)
    }

    /// Sheet values for the selected monster, recomputed on every call
    pub fn derived(&self) -> Option<DerivedStats> {
        self.current_monster().map(Monster::derived)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monster_core::DieSize;

    fn sheet_app() -> App {
        let mut app = App::default();
        app.set_tab(1);
        app
    }

    #[test]
    fn test_loads_bundled_bestiary() {
        let app = App::default();
        assert!(!app.monsters.is_empty());
        assert_eq!(app.current_monster().unwrap().id, "goblin");
    }

    #[test]
    fn test_tab_cycle() {
        let mut app = App::default();
        app.prev_tab();
        assert_eq!(app.current_tab, Tab::Help);
        app.next_tab();
        assert_eq!(app.current_tab, Tab::Bestiary);
    }

    #[test]
    fn test_help_toggles_back_to_previous_tab() {
        let mut app = App::default();
        app.set_tab(2);
        app.toggle_help();
        assert_eq!(app.current_tab, Tab::Help);
        app.toggle_help();
        assert_eq!(app.current_tab, Tab::Breakdown);
    }

    #[test]
    fn test_step_attribute_updates_sheet() {
        let mut app = sheet_app();
        // Goblin attack D6 -> D8: weapon contributions 4 + 2 = 6 -> 3
        app.on_right();
        assert_eq!(app.current_monster().unwrap().attributes.attack, Some(DieSize::D8));
        assert_eq!(app.derived().unwrap().weapon_skill_dice(), 3);
    }

    #[test]
    fn test_unset_attribute_still_renders() {
        let mut app = sheet_app();
        for _ in 0..CoreAttribute::all().len() {
            app.unset_attribute();
            app.on_down();
        }
        let stats = app.derived().unwrap();
        assert_eq!(stats.weapon_skill_dice(), 1);
        assert_eq!(stats.armor_skill_dice(), 1);
        assert_eq!(stats.willpower_dice(), 1);
    }

    #[test]
    fn test_weight_drives_dodge_negative() {
        let mut app = sheet_app();
        // Goblin: 4 + 6 + 1 - 1 = 10
        assert_eq!(app.derived().unwrap().dodge, 10);
        app.adjust_weight(15);
        assert_eq!(app.derived().unwrap().dodge, -5);
    }

    #[test]
    fn test_extreme_level_still_renders() {
        let mut app = sheet_app();
        app.adjust_level(i32::MAX);
        app.adjust_level(1);
        assert_eq!(app.current_monster().unwrap().level, i32::MAX);
        // 4 + 6 + i32::MAX - 1
        assert_eq!(app.derived().unwrap().dodge, i64::from(i32::MAX) + 9);
    }

    #[test]
    fn test_missing_file_keeps_running() {
        let app = App::new(Some(PathBuf::from("does/not/exist.toml")));
        assert!(app.monsters.is_empty());
        assert!(app.status.starts_with("Load failed"));
        assert!(app.derived().is_none());
    }

    #[test]
    fn test_reload_discards_edits() {
        let mut app = sheet_app();
        app.adjust_level(10);
        app.reload();
        assert_eq!(app.current_monster().unwrap().level, 1);
    }
}
