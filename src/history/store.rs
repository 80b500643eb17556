// src/history/store.rs
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::record::{AttackRecord, CwlSeasonRecord, PlayerRecord};
use super::{WarRef, now_iso};
use crate::error::RunError;
use crate::file::write_atomic;
use crate::war::{AttackOutcome, PlayerWarStats};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryStore {
    pub clan_tag: String,
    pub last_updated: Option<String>,
    pub players: BTreeMap<String, PlayerRecord>,
    pub cwl_seasons: BTreeMap<String, CwlSeasonRecord>,
    /// Reserved; carried through untouched.
    pub wars: BTreeMap<String, Value>,
    /// Reserved; carried through untouched.
    pub war_log: Vec<Value>,
}

impl HistoryStore {
    pub fn empty(clan_tag: &str) -> Self {
        Self { clan_tag: s!(clan_tag), ..Self::default() }
    }

    /// Never fails: a missing file starts fresh, an unreadable or malformed
    /// one is logged and replaced by an empty store.
    pub fn load(path: &Path, clan_tag: &str) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                logd!("no history at {}; starting fresh", path.display());
                return Self::empty(clan_tag);
            }
            Err(e) => {
                logw!("could not read history {}: {e}; starting fresh", path.display());
                return Self::empty(clan_tag);
            }
        };
        match serde_json::from_str::<Self>(&text) {
            Ok(store) => {
                logd!("loaded history: {} players, {} CWL seasons", store.players.len(), store.cwl_seasons.len());
                store
            }
            Err(e) => {
                logw!("history {} is corrupt ({e}); starting fresh", path.display());
                Self::empty(clan_tag)
            }
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Stamp `last_updated` and rewrite the whole file.
    pub fn save(&mut self, path: &Path) -> Result<(), RunError> {
        self.last_updated = Some(now_iso());
        let json = self.to_json()?;
        write_atomic(path, json.as_bytes())?;
        logf!("history saved to {}", path.display());
        Ok(())
    }

    /// Fold one player's attacks from one war into their record.
    ///
    /// Name and town hall are refreshed on every call. Counters move only
    /// the first time a given `war.id` is seen for this player; later calls
    /// with the same id are no-ops even if the attack list differs.
    /// Returns whether anything was recorded.
    pub fn record_attacks(
        &mut self,
        player_tag: &str,
        player_name: &str,
        tier: u32,
        war: &WarRef,
        attacks: &[AttackOutcome],
    ) -> bool {
        let record = self
            .players
            .entry(s!(player_tag))
            .or_insert_with(|| PlayerRecord::new(player_tag, player_name, tier));

        record.name = s!(player_name);
        record.current_th = record.current_th.max(tier);

        if record.has_war(&war.id) {
            return false;
        }
        record.war_ids.push(war.id.clone());
        record.wars_participated += 1;

        for attack in attacks {
            record.attacks_history.push(AttackRecord {
                war_id: war.id.clone(),
                war_type: war.war_type.clone(),
                date: war.date.clone(),
                stars: attack.stars,
                destruction: attack.destruction,
                defender_th: attack.defender_th,
                attacker_th: tier,
                hit_type: attack.hit,
            });
            record.total_attacks += 1;
            record.total_stars += attack.stars;
            record.total_destruction += attack.destruction;
            record.stars.add(attack.stars);
        }
        true
    }

    /// `record_attacks` for every member of an extracted war. Returns how
    /// many players had the war newly recorded.
    pub fn record_war<'a>(
        &mut self,
        stats: impl IntoIterator<Item = &'a PlayerWarStats>,
        war: &WarRef,
    ) -> usize {
        stats
            .into_iter()
            .filter(|s| self.record_attacks(&s.tag, &s.name, s.th, war, &s.attacks))
            .count()
    }

    /// Replace the season summary. A season once marked complete stays complete.
    pub fn record_season(&mut self, key: &str, mut season: CwlSeasonRecord) {
        if let Some(prev) = self.cwl_seasons.get(key) {
            season.complete |= prev.complete;
        }
        self.cwl_seasons.insert(s!(key), season);
    }

    pub fn season_complete(&self, key: &str) -> bool {
        self.cwl_seasons.get(key).is_some_and(|s| s.complete)
    }
}
