//! Stats lookup: resolve a player, run the aggregation pipeline, print.

use crate::{
    cache::{CacheConfig, CacheStore},
    cli::types::{AccountId, DiscordId},
    epic::{http::EpicClient, types::AccountInfo},
    error::{Result, StatsError},
    service::{SeasonContext, StatsOutcome, StatsService},
    stats::{aggregate::Aggregator, modes::ModeRegistry, types::ModeStats},
    storage::LinkDatabase,
};

/// Configuration parameters for a stats lookup.
#[derive(Debug)]
pub struct StatsParams {
    pub account: Option<AccountId>,
    pub name: Option<String>,
    pub discord: Option<DiscordId>,
    pub season_start: Option<u64>,
    pub season_name: String,
    pub mode: Option<String>,
    pub as_json: bool,
}

/// Resolve the target player, fetch and aggregate their stats, and print the
/// result. Lifetime snapshots also refresh the local leaderboard entry.
pub async fn handle_stats(params: StatsParams) -> Result<()> {
    let client = EpicClient::from_env()?;
    let player = resolve_player(&client, &params).await?;
    let account_id = AccountId::new(player.id.clone());

    let window = params.season_start.map(|start_time| SeasonContext {
        name: params.season_name.clone(),
        start_time,
    });

    let service = StatsService::new(
        client,
        Aggregator::new(ModeRegistry::default()),
        CacheStore::new(CacheConfig::default()),
    );

    match service.get_stats(&account_id, window.as_ref()).await? {
        StatsOutcome::Snapshot(snapshot) => {
            if window.is_none() {
                // Leaderboard tracks lifetime totals only.
                let mut db = LinkDatabase::new()?;
                db.record_snapshot(&account_id, &player.display_name, &snapshot)?;
            }

            let period = window
                .as_ref()
                .map(|s| s.name.as_str())
                .unwrap_or("Lifetime");

            if let Some(mode_name) = &params.mode {
                let Some(mode_stats) = snapshot.modes.get(mode_name) else {
                    println!(
                        "{} has no stats in {} ({})",
                        player.display_name, mode_name, period
                    );
                    return Ok(());
                };
                if params.as_json {
                    println!("{}", serde_json::to_string_pretty(mode_stats)?);
                } else {
                    println!("{} — {} ({})", player.display_name, mode_name, period);
                    print_mode_line(mode_name, mode_stats);
                }
            } else if params.as_json {
                println!("{}", serde_json::to_string_pretty(snapshot.as_ref())?);
            } else {
                println!("{} ({})", player.display_name, period);
                print_mode_line("Overall", &snapshot.overall);
                for (name, mode_stats) in &snapshot.modes {
                    print_mode_line(name, mode_stats);
                }
            }
        }
        StatsOutcome::NoData => {
            println!("No stats recorded for {}", player.display_name);
        }
        StatsOutcome::Private => {
            println!("{}'s stats are private", player.display_name);
        }
    }

    Ok(())
}

async fn resolve_player(client: &EpicClient, params: &StatsParams) -> Result<AccountInfo> {
    if let Some(account) = &params.account {
        return client.find_player_by_id(account).await?.ok_or_else(|| {
            StatsError::AccountNotFound {
                name: account.to_string(),
            }
        });
    }

    if let Some(name) = &params.name {
        return client
            .find_player(name)
            .await?
            .ok_or_else(|| StatsError::AccountNotFound { name: name.clone() });
    }

    if let Some(discord) = &params.discord {
        let db = LinkDatabase::new()?;
        let linked = db
            .get_linked_account(discord)?
            .ok_or_else(|| StatsError::NotLinked {
                discord_id: discord.to_string(),
            })?;
        return Ok(AccountInfo {
            id: linked.epic_account_id.as_str().to_string(),
            display_name: linked.epic_display_name,
        });
    }

    Err(StatsError::AccountNotFound {
        name: "(no --account, --name, or --discord given)".to_string(),
    })
}

fn print_mode_line(name: &str, stats: &ModeStats) {
    println!(
        "{:<22} wins {:>6}  kills {:>7}  matches {:>7}  kd {:>6.2}  win% {:>5.1}",
        name, stats.wins, stats.kills, stats.matches, stats.kd, stats.win_rate
    );
}
