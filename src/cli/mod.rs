//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::{AccountId, DiscordId};

#[derive(Debug, Parser)]
#[clap(name = "brstats", about = "Fortnite Battle Royale stats CLI")]
pub struct Brstats {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch, aggregate, and display stats for a player.
    ///
    /// Resolves the player from `--account`, `--name`, or a linked
    /// `--discord` user, in that order of precedence.
    Stats {
        /// Epic account id.
        #[clap(long, short)]
        account: Option<AccountId>,

        /// Epic display name to look up.
        #[clap(long, short)]
        name: Option<String>,

        /// Discord user id with a linked account.
        #[clap(long)]
        discord: Option<DiscordId>,

        /// Restrict to a season window starting at this Unix epoch second.
        /// Windowed results bypass the snapshot cache.
        #[clap(long)]
        season_start: Option<u64>,

        /// Label for the season window (e.g. "C6S4").
        #[clap(long, default_value = "Season")]
        season_name: String,

        /// Only print this mode (display name, e.g. "Zero Build Squad").
        #[clap(long, short)]
        mode: Option<String>,

        /// Output the snapshot as JSON instead of a text table.
        #[clap(long)]
        json: bool,
    },

    /// Manage Discord ↔ Epic account links.
    Link {
        #[clap(subcommand)]
        cmd: LinkCmd,
    },

    /// Show the wins leaderboard across known accounts.
    Leaderboard {
        /// Maximum number of entries to print.
        #[clap(long, short, default_value_t = 10)]
        limit: u32,

        /// Output entries as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Purge expired rows from local storage and report the count removed.
    Maintenance {
        /// Remove leaderboard entries not refreshed within this many days.
        #[clap(long, default_value_t = 30)]
        max_age_days: u64,
    },
}

#[derive(Debug, Subcommand)]
pub enum LinkCmd {
    /// Link a Discord user to an Epic account by display name.
    Set {
        #[clap(long)]
        discord: DiscordId,

        /// Epic display name to resolve and store.
        #[clap(long)]
        name: String,
    },

    /// Show the linked account for a Discord user.
    Show {
        #[clap(long)]
        discord: DiscordId,
    },

    /// Remove a Discord user's link.
    Remove {
        #[clap(long)]
        discord: DiscordId,
    },
}
