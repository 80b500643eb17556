// src/history/mod.rs
//! Historical accumulation across runs.
//!
//! The store is one JSON document, read once at the start of a run and
//! rewritten whole at the end. Per-player totals only ever grow; a war is
//! folded into a player's record at most once, keyed by its [`WarRef::id`].
//!
//! ## War IDs
//! - regular war: `{clan_tag}_{opponent_tag}_{preparationStartTime}`
//! - league war:  `cwl_{season}_round{n}_{war_tag}`
//!
//! Both are stable across re-fetches of the same war, which is what makes
//! repeated runs during a live war harmless.
pub mod record;
pub mod store;

pub use record::{AttackRecord, CwlSeasonRecord, PlayerRecord};
pub use store::HistoryStore;

use chrono::Local;

use crate::model::ClanWar;

pub const REGULAR_WAR: &str = "regular_war";

/// Local wall-clock time in ISO-8601 without offset, e.g. `2025-03-01T18:04:05.123456`.
pub fn now_iso() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

pub fn season_key(season: &str) -> String {
    format!("cwl_{season}")
}

/// Identity and label of one war, stamped with the time it is recorded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WarRef {
    pub id: String,
    pub war_type: String,
    pub date: String,
}

impl WarRef {
    pub fn regular(war: &ClanWar) -> Self {
        let prep = war.preparation_start_time.as_deref().unwrap_or("");
        Self {
            id: format!("{}_{}_{}", war.clan.tag, war.opponent.tag, prep),
            war_type: s!(REGULAR_WAR),
            date: now_iso(),
        }
    }

    /// `round` is 1-based.
    pub fn league(season: &str, round: usize, war_tag: &str) -> Self {
        Self {
            id: format!("cwl_{season}_round{round}_{war_tag}"),
            war_type: format!("CWL_{season}"),
            date: now_iso(),
        }
    }

    pub fn dated(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WarSide;

    #[test]
    fn regular_id_is_stable() {
        let war = ClanWar {
            preparation_start_time: Some(s!("20250301T100000.000Z")),
            clan: WarSide { tag: s!("#AAA"), ..Default::default() },
            opponent: WarSide { tag: s!("#BBB"), ..Default::default() },
            ..Default::default()
        };
        let a = WarRef::regular(&war);
        let b = WarRef::regular(&war.clone());
        assert_eq!(a.id, "#AAA_#BBB_20250301T100000.000Z");
        assert_eq!(a.id, b.id);
        assert_eq!(a.war_type, "regular_war");
    }

    #[test]
    fn league_id_is_namespaced() {
        let w = WarRef::league("2025-03", 4, "#8QJ2");
        assert_eq!(w.id, "cwl_2025-03_round4_#8QJ2");
        assert_eq!(w.war_type, "CWL_2025-03");
        assert_eq!(season_key("2025-03"), "cwl_2025-03");
    }
}
