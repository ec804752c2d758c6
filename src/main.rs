//! Entry point: parse CLI and dispatch to command handlers.

use brstats::{
    cli::{Brstats, Commands, LinkCmd},
    commands::{
        leaderboard::handle_leaderboard,
        link::{handle_link_remove, handle_link_set, handle_link_show},
        maintenance::handle_maintenance,
        stats::{handle_stats, StatsParams},
    },
    Result,
};
use clap::Parser;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Brstats::parse();

    match app.command {
        Commands::Stats {
            account,
            name,
            discord,
            season_start,
            season_name,
            mode,
            json,
        } => {
            handle_stats(StatsParams {
                account,
                name,
                discord,
                season_start,
                season_name,
                mode,
                as_json: json,
            })
            .await?
        }

        Commands::Link { cmd } => match cmd {
            LinkCmd::Set { discord, name } => handle_link_set(discord, name).await?,
            LinkCmd::Show { discord } => handle_link_show(discord)?,
            LinkCmd::Remove { discord } => handle_link_remove(discord)?,
        },

        Commands::Leaderboard { limit, json } => handle_leaderboard(limit, json)?,

        Commands::Maintenance { max_age_days } => handle_maintenance(max_age_days)?,
    }

    Ok(())
}
