//! Data models for the storage layer

use crate::cli::types::{AccountId, DiscordId};
use serde::{Deserialize, Serialize};

/// A Discord user's linked Epic account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedAccount {
    pub discord_id: DiscordId,
    pub epic_account_id: AccountId,
    pub epic_display_name: String,
    pub linked_at: u64,
}

/// Last-known overall counters for one account, kept so the leaderboard can
/// be ranked without refetching everyone from the stats service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub epic_account_id: AccountId,
    pub epic_display_name: String,
    pub wins: u64,
    pub kills: u64,
    pub matches: u64,
    pub kd: f64,
    pub win_rate: f64,
    pub updated_at: u64,
}
