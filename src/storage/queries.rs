//! Query operations for account links and the leaderboard

use super::{models::*, schema::LinkDatabase};
use crate::cli::types::{AccountId, DiscordId};
use crate::stats::types::StatsSnapshot;
use anyhow::Result;
use rusqlite::{params, OptionalExtension};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

fn now_secs() -> Result<u64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs())
}

impl LinkDatabase {
    /// Link (or re-link) a Discord user to an Epic account
    pub fn link_account(
        &mut self,
        discord_id: &DiscordId,
        epic_account_id: &AccountId,
        epic_display_name: &str,
    ) -> Result<()> {
        self.conn.execute(
            "INSERT INTO linked_accounts (discord_id, epic_account_id, epic_display_name, linked_at)
             VALUES (?, ?, ?, ?)
             ON CONFLICT(discord_id) DO UPDATE SET
               epic_account_id = excluded.epic_account_id,
               epic_display_name = excluded.epic_display_name,
               linked_at = excluded.linked_at",
            params![
                discord_id.as_str(),
                epic_account_id.as_str(),
                epic_display_name,
                now_secs()?,
            ],
        )?;
        Ok(())
    }

    /// Get the linked Epic account for a Discord user, if any
    pub fn get_linked_account(&self, discord_id: &DiscordId) -> Result<Option<LinkedAccount>> {
        let row = self
            .conn
            .query_row(
                "SELECT discord_id, epic_account_id, epic_display_name, linked_at
                 FROM linked_accounts
                 WHERE discord_id = ?",
                params![discord_id.as_str()],
                |row| {
                    Ok(LinkedAccount {
                        discord_id: DiscordId::new(row.get::<_, String>(0)?),
                        epic_account_id: AccountId::new(row.get::<_, String>(1)?),
                        epic_display_name: row.get(2)?,
                        linked_at: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(row)
    }

    /// Remove a Discord user's link. Returns whether a link existed
    pub fn unlink_account(&mut self, discord_id: &DiscordId) -> Result<bool> {
        let rows = self.conn.execute(
            "DELETE FROM linked_accounts WHERE discord_id = ?",
            params![discord_id.as_str()],
        )?;
        Ok(rows > 0)
    }

    /// Record the overall counters of a freshly computed lifetime snapshot
    /// so the account shows up in the leaderboard
    pub fn record_snapshot(
        &mut self,
        epic_account_id: &AccountId,
        epic_display_name: &str,
        snapshot: &StatsSnapshot,
    ) -> Result<()> {
        self.conn.execute(
            "INSERT INTO leaderboard_entries
               (epic_account_id, epic_display_name, wins, kills, matches, kd, win_rate, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(epic_account_id) DO UPDATE SET
               epic_display_name = excluded.epic_display_name,
               wins = excluded.wins,
               kills = excluded.kills,
               matches = excluded.matches,
               kd = excluded.kd,
               win_rate = excluded.win_rate,
               updated_at = excluded.updated_at",
            params![
                epic_account_id.as_str(),
                epic_display_name,
                snapshot.overall.wins,
                snapshot.overall.kills,
                snapshot.overall.matches,
                snapshot.overall.kd,
                snapshot.overall.win_rate,
                now_secs()?,
            ],
        )?;
        Ok(())
    }

    /// Top accounts by wins
    pub fn leaderboard(&self, limit: u32) -> Result<Vec<LeaderboardEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT epic_account_id, epic_display_name, wins, kills, matches, kd, win_rate, updated_at
             FROM leaderboard_entries
             ORDER BY wins DESC, kills DESC
             LIMIT ?",
        )?;
        let rows = stmt.query_map(params![limit], |row| {
            Ok(LeaderboardEntry {
                epic_account_id: AccountId::new(row.get::<_, String>(0)?),
                epic_display_name: row.get(1)?,
                wins: row.get(2)?,
                kills: row.get(3)?,
                matches: row.get(4)?,
                kd: row.get(5)?,
                win_rate: row.get(6)?,
                updated_at: row.get(7)?,
            })
        })?;

        let mut entries = Vec::new();
        for entry in rows {
            entries.push(entry?);
        }
        Ok(entries)
    }

    /// Delete leaderboard entries that have not been refreshed within
    /// `max_age`. Returns the count removed
    pub fn prune_leaderboard(&mut self, max_age: Duration) -> Result<usize> {
        let cutoff = now_secs()?.saturating_sub(max_age.as_secs());
        let rows = self.conn.execute(
            "DELETE FROM leaderboard_entries WHERE updated_at < ?",
            params![cutoff],
        )?;
        Ok(rows)
    }
}
