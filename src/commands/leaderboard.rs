//! Wins leaderboard over locally recorded snapshots.

use crate::{error::Result, storage::LinkDatabase};

pub fn handle_leaderboard(limit: u32, as_json: bool) -> Result<()> {
    let db = LinkDatabase::new()?;
    let entries = db.leaderboard(limit)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No recorded stats yet. Run `brstats stats` for a player first.");
        return Ok(());
    }

    for (rank, entry) in entries.iter().enumerate() {
        println!(
            "{:>3}. {:<20} wins {:>6}  kills {:>7}  kd {:>6.2}  win% {:>5.1}",
            rank + 1,
            entry.epic_display_name,
            entry.wins,
            entry.kills,
            entry.kd,
            entry.win_rate
        );
    }
    Ok(())
}
