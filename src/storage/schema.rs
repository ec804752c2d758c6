//! Database schema and connection management

use crate::error::StatsError;
use anyhow::Result;
use dirs::cache_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Database connection manager for account links and leaderboard data
pub struct LinkDatabase {
    pub(crate) conn: Connection,
}

impl LinkDatabase {
    /// Create a new database connection and ensure tables exist
    pub fn new() -> Result<Self> {
        let db_path = Self::database_path()?;

        // Ensure the cache directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Self::with_path(&db_path)
    }

    /// Open a database at an explicit path (used by tests)
    pub fn with_path(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the path to the database file
    fn database_path() -> Result<PathBuf> {
        let cache_dir = cache_dir().ok_or_else(|| StatsError::Storage {
            message: "Could not determine cache directory".to_string(),
        })?;
        Ok(cache_dir.join("brstats").join("links.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // Discord users and the Epic accounts they linked
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS linked_accounts (
                discord_id TEXT PRIMARY KEY,
                epic_account_id TEXT NOT NULL,
                epic_display_name TEXT NOT NULL,
                linked_at INTEGER NOT NULL
            )",
            [],
        )?;

        // Last-known overall counters per account for leaderboard ranking
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS leaderboard_entries (
                epic_account_id TEXT PRIMARY KEY,
                epic_display_name TEXT NOT NULL,
                wins INTEGER NOT NULL,
                kills INTEGER NOT NULL,
                matches INTEGER NOT NULL,
                kd REAL NOT NULL,
                win_rate REAL NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        // Create indexes for performance
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_linked_epic
             ON linked_accounts(epic_account_id)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_leaderboard_wins
             ON leaderboard_entries(wins)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_leaderboard_time
             ON leaderboard_entries(updated_at)",
            [],
        )?;

        Ok(())
    }
}
