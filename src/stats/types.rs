//! Core data model for aggregated statistics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat map of provider-defined counter keys to non-negative values, exactly
/// as the stats service returns them. Keys that do not match the expected
/// shape are ignored during aggregation, never rejected.
pub type RawCounterMap = BTreeMap<String, u64>;

/// The fixed whitelist of statistic kinds we extract from raw counter keys.
///
/// Anything outside this set (collection counters, social stats, `lastmodified`
/// markers) is skipped by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Wins,
    Kills,
    Matches,
    MinutesPlayed,
    PlayersOutlived,
    Score,
}

impl StatKind {
    /// Map the raw key token to a stat kind. Epic reports wins as `placetop1`.
    pub fn from_key_token(token: &str) -> Option<Self> {
        match token {
            "placetop1" => Some(StatKind::Wins),
            "kills" => Some(StatKind::Kills),
            "matchesplayed" => Some(StatKind::Matches),
            "minutesplayed" => Some(StatKind::MinutesPlayed),
            "playersoutlived" => Some(StatKind::PlayersOutlived),
            "score" => Some(StatKind::Score),
            _ => None,
        }
    }
}

/// Accumulated and derived statistics for one mode (or for `overall`).
///
/// The six counters are accumulated; `kd` and `win_rate` are derived once the
/// accumulation pass is complete and are never summed directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeStats {
    pub wins: u64,
    pub kills: u64,
    pub matches: u64,
    pub minutes_played: u64,
    pub players_outlived: u64,
    pub score: u64,
    pub kd: f64,
    pub win_rate: f64,
}

impl ModeStats {
    /// Add one raw counter value to the field for `kind`.
    pub fn accumulate(&mut self, kind: StatKind, value: u64) {
        match kind {
            StatKind::Wins => self.wins += value,
            StatKind::Kills => self.kills += value,
            StatKind::Matches => self.matches += value,
            StatKind::MinutesPlayed => self.minutes_played += value,
            StatKind::PlayersOutlived => self.players_outlived += value,
            StatKind::Score => self.score += value,
        }
    }

    /// Field-wise sum of the raw counters only. Derived values are left
    /// untouched; callers derive them afterwards via [`ModeStats::finalize`].
    pub fn merge_counters(&mut self, other: &ModeStats) {
        self.wins += other.wins;
        self.kills += other.kills;
        self.matches += other.matches;
        self.minutes_played += other.minutes_played;
        self.players_outlived += other.players_outlived;
        self.score += other.score;
    }

    /// Derive `kd` and `win_rate` from the accumulated counters.
    ///
    /// Deaths are estimated as `matches - wins`, clamped at zero against
    /// inconsistent upstream data. When deaths are zero the K/D is reported as
    /// the raw kill count rather than infinity, and a record with no matches
    /// reports a zero win rate. Both fallbacks are deliberate, externally
    /// observable policy.
    pub fn finalize(&mut self) {
        let deaths = self.matches.saturating_sub(self.wins);
        self.kd = if deaths > 0 {
            round_to(self.kills as f64 / deaths as f64, 2)
        } else {
            self.kills as f64
        };
        self.win_rate = if self.matches > 0 {
            round_to(self.wins as f64 / self.matches as f64 * 100.0, 1)
        } else {
            0.0
        };
    }
}

/// Fully aggregated, immutable statistics for one account at one point in
/// time. `overall` is accumulated in lockstep with the per-mode buckets, so
/// it always equals the field-wise sum of the base (non-composite) modes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub overall: ModeStats,
    pub modes: BTreeMap<String, ModeStats>,
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10u32.pow(decimals) as f64;
    (value * factor).round() / factor
}
