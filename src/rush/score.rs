// src/rush/score.rs
use serde::{Deserialize, Serialize};

use super::tables::{Category, ReferenceTables};
use crate::model::{Player, Unit};

/// Classification bucket, ordered from best to worst.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RushStatus {
    #[serde(rename = "New Account")]
    NewAccount,
    #[serde(rename = "Maxed")]
    Maxed,
    #[serde(rename = "Slightly Behind")]
    SlightlyBehind,
    #[serde(rename = "Moderately Rushed")]
    ModeratelyRushed,
    #[serde(rename = "Rushed")]
    Rushed,
    #[serde(rename = "Severely Rushed")]
    SeverelyRushed,
    #[serde(rename = "Severely Rushed (Heroes)")]
    SeverelyRushedHeroes,
}

impl RushStatus {
    pub fn label(self) -> &'static str {
        match self {
            RushStatus::NewAccount => "New Account",
            RushStatus::Maxed => "Maxed",
            RushStatus::SlightlyBehind => "Slightly Behind",
            RushStatus::ModeratelyRushed => "Moderately Rushed",
            RushStatus::Rushed => "Rushed",
            RushStatus::SeverelyRushed => "Severely Rushed",
            RushStatus::SeverelyRushedHeroes => "Severely Rushed (Heroes)",
        }
    }

    /// Statuses at or past "Moderately Rushed" count as rushed.
    pub fn is_rushed(self) -> bool {
        self >= RushStatus::ModeratelyRushed
    }
}

impl std::fmt::Display for RushStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Upper score bound (inclusive) of each band, plus the hero veto.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RushThresholds {
    pub maxed: f64,
    pub slightly_behind: f64,
    pub moderately_rushed: f64,
    pub rushed: f64,
    /// Missing hero levels strictly above this force `SeverelyRushedHeroes`.
    pub hero_override_above: u32,
}

impl Default for RushThresholds {
    fn default() -> Self {
        Self {
            maxed: 3.0,
            slightly_behind: 10.0,
            moderately_rushed: 25.0,
            rushed: 50.0,
            hero_override_above: 20,
        }
    }
}

impl RushThresholds {
    /// Same bands, stricter hero veto (15+ missing hero levels).
    pub fn dashboard() -> Self {
        Self { hero_override_above: 14, ..Self::default() }
    }

    pub fn classify(&self, rush_score: f64, missing_hero_levels: u32) -> RushStatus {
        if missing_hero_levels > self.hero_override_above {
            return RushStatus::SeverelyRushedHeroes;
        }
        if rush_score <= self.maxed {
            RushStatus::Maxed
        } else if rush_score <= self.slightly_behind {
            RushStatus::SlightlyBehind
        } else if rush_score <= self.moderately_rushed {
            RushStatus::ModeratelyRushed
        } else if rush_score <= self.rushed {
            RushStatus::Rushed
        } else {
            RushStatus::SeverelyRushed
        }
    }
}

/// One asset below its target level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deficit {
    pub name: String,
    pub current: u32,
    pub target: u32,
    pub missing: u32,
}

/// Derived per run, never persisted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RushReport {
    pub is_rushed: bool,
    pub rush_score: f64,
    pub rush_percentage: f64,
    pub rushed_heroes: Vec<Deficit>,
    pub rushed_troops: Vec<Deficit>,
    pub rushed_spells: Vec<Deficit>,
    pub hero_score: f64,
    pub troop_score: f64,
    pub spell_score: f64,
    pub total_missing_hero_levels: u32,
    pub status: RushStatus,
}

impl RushReport {
    fn new_account() -> Self {
        Self {
            is_rushed: false,
            rush_score: 0.0,
            rush_percentage: 0.0,
            rushed_heroes: Vec::new(),
            rushed_troops: Vec::new(),
            rushed_spells: Vec::new(),
            hero_score: 0.0,
            troop_score: 0.0,
            spell_score: 0.0,
            total_missing_hero_levels: 0,
            status: RushStatus::NewAccount,
        }
    }

    pub fn deficits(&self, category: Category) -> &[Deficit] {
        match category {
            Category::Hero => &self.rushed_heroes,
            Category::Troop => &self.rushed_troops,
            Category::Spell => &self.rushed_spells,
        }
    }
}

#[derive(Default)]
struct Tally {
    possible: u32,
    current: u32,
    score: f64,
    deficits: Vec<Deficit>,
}

fn tally<'a>(
    units: impl Iterator<Item = &'a Unit>,
    category: Category,
    tables: &ReferenceTables,
    reference_tier: u32,
) -> Tally {
    let mut t = Tally::default();
    for unit in units {
        // No row, or a zero target: the asset does not count at this tier
        let Some(target) = tables.lookup(category, &unit.name, reference_tier) else {
            continue;
        };
        if target == 0 {
            continue;
        }
        t.possible += target;
        t.current += unit.level.min(target);
        if unit.level < target {
            let missing = target - unit.level;
            t.score += f64::from(missing) * category.weight();
            t.deficits.push(Deficit {
                name: unit.name.clone(),
                current: unit.level,
                target,
                missing,
            });
        }
    }
    t
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Score one player. Pure; only home-village assets are considered.
pub fn score(player: &Player, tables: &ReferenceTables, thresholds: &RushThresholds) -> RushReport {
    let tier = player.town_hall_level;
    if tier <= 2 {
        return RushReport::new_account();
    }
    let reference_tier = tier - 1;

    let heroes = tally(player.home_heroes(), Category::Hero, tables, reference_tier);
    let troops = tally(player.home_troops(), Category::Troop, tables, reference_tier);
    let spells = tally(player.home_spells(), Category::Spell, tables, reference_tier);

    let rush_score = heroes.score + troops.score + spells.score;
    let possible = heroes.possible + troops.possible + spells.possible;
    let current = heroes.current + troops.current + spells.current;
    let rush_percentage = if possible > 0 {
        round1(100.0 - f64::from(current) / f64::from(possible) * 100.0)
    } else {
        0.0
    };

    let total_missing_hero_levels: u32 = heroes.deficits.iter().map(|d| d.missing).sum();
    let status = thresholds.classify(rush_score, total_missing_hero_levels);

    RushReport {
        is_rushed: status.is_rushed(),
        rush_score,
        rush_percentage,
        rushed_heroes: heroes.deficits,
        rushed_troops: troops.deficits,
        rushed_spells: spells.deficits,
        hero_score: heroes.score,
        troop_score: troops.score,
        spell_score: spells.score,
        total_missing_hero_levels,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges_are_inclusive() {
        let t = RushThresholds::default();
        assert_eq!(t.classify(3.0, 0), RushStatus::Maxed);
        assert_eq!(t.classify(3.1, 0), RushStatus::SlightlyBehind);
        assert_eq!(t.classify(10.0, 0), RushStatus::SlightlyBehind);
        assert_eq!(t.classify(25.0, 0), RushStatus::ModeratelyRushed);
        assert_eq!(t.classify(50.0, 0), RushStatus::Rushed);
        assert_eq!(t.classify(50.1, 0), RushStatus::SeverelyRushed);
    }

    #[test]
    fn hero_veto_depends_on_preset() {
        assert_eq!(RushThresholds::default().classify(0.0, 20), RushStatus::Maxed);
        assert_eq!(RushThresholds::default().classify(0.0, 21), RushStatus::SeverelyRushedHeroes);
        assert_eq!(RushThresholds::dashboard().classify(0.0, 15), RushStatus::SeverelyRushedHeroes);
        assert_eq!(RushThresholds::dashboard().classify(0.0, 14), RushStatus::Maxed);
    }

    #[test]
    fn rushed_flag_follows_status() {
        assert!(!RushStatus::SlightlyBehind.is_rushed());
        assert!(!RushStatus::NewAccount.is_rushed());
        assert!(RushStatus::ModeratelyRushed.is_rushed());
        assert!(RushStatus::SeverelyRushedHeroes.is_rushed());
    }

    #[test]
    fn labels_serialize_plain() {
        let json = serde_json::to_string(&RushStatus::SeverelyRushedHeroes).unwrap();
        assert_eq!(json, "\"Severely Rushed (Heroes)\"");
    }
}
