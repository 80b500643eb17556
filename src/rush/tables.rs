// src/rush/tables.rs

// Max attainable level per asset per town hall. A tier missing from an
// asset's row means the asset has no target there; that is not zero.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RunError;

type Row = (&'static str, &'static [(u32, u32)]);

const HEROES: &[Row] = &[
    ("Barbarian King", &[(7, 5), (8, 10), (9, 30), (10, 40), (11, 50), (12, 65), (13, 75), (14, 85), (15, 90), (16, 95), (17, 100), (18, 105)]),
    ("Archer Queen", &[(8, 10), (9, 30), (10, 40), (11, 50), (12, 65), (13, 75), (14, 85), (15, 90), (16, 95), (17, 100), (18, 105)]),
    ("Grand Warden", &[(11, 20), (12, 40), (13, 50), (14, 55), (15, 65), (16, 70), (17, 75), (18, 80)]),
    ("Royal Champion", &[(13, 25), (14, 30), (15, 40), (16, 45), (17, 50), (18, 55)]),
    ("Minion Prince", &[(9, 10), (10, 20), (11, 30), (12, 40), (13, 50), (14, 60), (15, 70), (16, 80), (17, 90), (18, 95)]),
];

const TROOPS: &[Row] = &[
    ("Barbarian", &[(1, 1), (2, 1), (3, 2), (4, 2), (5, 3), (6, 4), (7, 4), (8, 5), (9, 6), (10, 7), (11, 8), (12, 9), (13, 10), (14, 11), (15, 11), (16, 12), (17, 12)]),
    ("Archer", &[(1, 1), (2, 1), (3, 2), (4, 2), (5, 3), (6, 4), (7, 4), (8, 5), (9, 6), (10, 7), (11, 8), (12, 9), (13, 10), (14, 11), (15, 11), (16, 12), (17, 12)]),
    ("Giant", &[(1, 1), (2, 1), (3, 2), (4, 2), (5, 3), (6, 4), (7, 5), (8, 6), (9, 7), (10, 8), (11, 9), (12, 10), (13, 10), (14, 11), (15, 11), (16, 12), (17, 12)]),
    ("Balloon", &[(4, 2), (5, 3), (6, 4), (7, 5), (8, 6), (9, 6), (10, 7), (11, 8), (12, 9), (13, 10), (14, 10), (15, 10), (16, 11), (17, 11)]),
    ("Wizard", &[(5, 3), (6, 4), (7, 4), (8, 5), (9, 6), (10, 7), (11, 9), (12, 10), (13, 10), (14, 11), (15, 11), (16, 12), (17, 12)]),
    ("Healer", &[(4, 1), (5, 2), (6, 3), (7, 3), (8, 4), (9, 4), (10, 5), (11, 5), (12, 6), (13, 7), (14, 8), (15, 8), (16, 9), (17, 9)]),
    ("Dragon", &[(7, 2), (8, 3), (9, 4), (10, 5), (11, 6), (12, 7), (13, 8), (14, 9), (15, 10), (16, 11), (17, 12)]),
    ("P.E.K.K.A", &[(8, 3), (9, 4), (10, 5), (11, 6), (12, 7), (13, 8), (14, 9), (15, 10), (16, 10), (17, 11)]),
    ("Golem", &[(8, 2), (9, 4), (10, 5), (11, 6), (12, 7), (13, 9), (14, 10), (15, 11), (16, 12), (17, 13)]),
    ("Witch", &[(9, 2), (10, 3), (11, 4), (12, 5), (13, 5), (14, 6), (15, 6), (16, 7), (17, 7)]),
    ("Lava Hound", &[(9, 2), (10, 3), (11, 4), (12, 5), (13, 6), (14, 6), (15, 6), (16, 7), (17, 7)]),
    ("Bowler", &[(10, 2), (11, 3), (12, 4), (13, 5), (14, 6), (15, 6), (16, 7), (17, 7)]),
    ("Miner", &[(10, 3), (11, 5), (12, 6), (13, 7), (14, 8), (15, 8), (16, 9), (17, 9)]),
    ("Electro Dragon", &[(11, 2), (12, 3), (13, 4), (14, 5), (15, 5), (16, 6), (17, 6)]),
    ("Yeti", &[(12, 2), (13, 3), (14, 4), (15, 4), (16, 5), (17, 5)]),
    ("Dragon Rider", &[(14, 2), (15, 3), (16, 3), (17, 4)]),
    ("Electro Titan", &[(15, 2), (16, 3), (17, 3)]),
    ("Root Rider", &[(16, 2), (17, 3)]),
];

const SPELLS: &[Row] = &[
    ("Lightning Spell", &[(5, 4), (6, 4), (7, 4), (8, 5), (9, 6), (10, 7), (11, 8), (12, 9), (13, 9), (14, 10), (15, 10), (16, 11), (17, 11)]),
    ("Healing Spell", &[(6, 3), (7, 4), (8, 5), (9, 6), (10, 7), (11, 7), (12, 8), (13, 8), (14, 9), (15, 9), (16, 10), (17, 10)]),
    ("Rage Spell", &[(7, 4), (8, 5), (9, 5), (10, 5), (11, 6), (12, 6), (13, 6), (14, 6), (15, 6), (16, 6), (17, 6)]),
    ("Jump Spell", &[(9, 2), (10, 3), (11, 3), (12, 4), (13, 4), (14, 5), (15, 5), (16, 5), (17, 5)]),
    ("Freeze Spell", &[(9, 1), (10, 5), (11, 6), (12, 7), (13, 7), (14, 7), (15, 7), (16, 8), (17, 8)]),
    ("Poison Spell", &[(8, 2), (9, 3), (10, 4), (11, 5), (12, 6), (13, 7), (14, 8), (15, 9), (16, 10), (17, 10)]),
    ("Earthquake Spell", &[(8, 2), (9, 3), (10, 4), (11, 5), (12, 5), (13, 5), (14, 5), (15, 5), (16, 5), (17, 5)]),
    ("Haste Spell", &[(9, 2), (10, 4), (11, 5), (12, 5), (13, 5), (14, 5), (15, 5), (16, 5), (17, 5)]),
    ("Clone Spell", &[(10, 3), (11, 5), (12, 6), (13, 7), (14, 7), (15, 8), (16, 8), (17, 8)]),
    ("Invisibility Spell", &[(11, 2), (12, 3), (13, 4), (14, 4), (15, 4), (16, 4), (17, 4)]),
    ("Recall Spell", &[(13, 2), (14, 3), (15, 4), (16, 5), (17, 5)]),
    ("Bat Spell", &[(10, 3), (11, 4), (12, 5), (13, 5), (14, 5), (15, 5), (16, 5), (17, 5)]),
    ("Overgrowth Spell", &[(15, 2), (16, 3), (17, 3)]),
];

/// Asset family. Each family is scored with its own weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hero,
    Troop,
    Spell,
}

impl Category {
    /// Score added per missing level.
    pub fn weight(self) -> f64 {
        match self {
            Category::Hero => 1.0,
            Category::Troop => 0.3,
            Category::Spell => 0.4,
        }
    }
}

/// name → (tier → max level)
pub type LevelTable = BTreeMap<String, BTreeMap<u32, u32>>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceTables {
    pub heroes: LevelTable,
    pub troops: LevelTable,
    pub spells: LevelTable,
}

fn build(rows: &[Row]) -> LevelTable {
    rows.iter()
        .map(|(name, tiers)| (s!(*name), tiers.iter().copied().collect()))
        .collect()
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self { heroes: build(HEROES), troops: build(TROOPS), spells: build(SPELLS) }
    }
}

impl ReferenceTables {
    pub fn table(&self, category: Category) -> &LevelTable {
        match category {
            Category::Hero => &self.heroes,
            Category::Troop => &self.troops,
            Category::Spell => &self.spells,
        }
    }

    /// Max level for `name` at exactly `tier`, if the asset has a row there.
    pub fn lookup(&self, category: Category, name: &str, tier: u32) -> Option<u32> {
        self.table(category).get(name)?.get(&tier).copied()
    }

    /// Parse a `{ "heroes": {..}, "troops": {..}, "spells": {..} }` document.
    /// Tier keys are JSON strings (`"9": 30`).
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, RunError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
            .map_err(|e| RunError::Tables(format!("{}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_exact_tier() {
        let t = ReferenceTables::default();
        assert_eq!(t.lookup(Category::Hero, "Barbarian King", 9), Some(30));
        assert_eq!(t.lookup(Category::Hero, "Royal Champion", 12), None);
        assert_eq!(t.lookup(Category::Spell, "Nope Spell", 12), None);
        assert_eq!(t.lookup(Category::Troop, "Root Rider", 18), None);
    }

    #[test]
    fn override_parses_string_tier_keys() {
        let json = r#"{"heroes":{"Barbarian King":{"9":31}},"troops":{},"spells":{}}"#;
        let t = ReferenceTables::from_json(json).unwrap();
        assert_eq!(t.lookup(Category::Hero, "Barbarian King", 9), Some(31));
        assert!(t.troops.is_empty());
    }
}
