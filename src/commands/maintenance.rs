//! Storage maintenance: purge stale leaderboard rows.

use crate::{error::Result, storage::LinkDatabase};
use std::time::Duration;

pub fn handle_maintenance(max_age_days: u64) -> Result<()> {
    let mut db = LinkDatabase::new()?;
    let removed = db.prune_leaderboard(Duration::from_secs(max_age_days * 24 * 60 * 60))?;
    println!("Maintenance: removed {} expired leaderboard entries", removed);
    Ok(())
}
