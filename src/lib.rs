//! Fortnite Battle Royale Stats Library
//!
//! A Rust library for turning Epic's flat per-playlist stat counters into a
//! structured statistics model: per-mode and overall totals, derived K/D and
//! win rate, composite "meta" modes, and a TTL-bounded snapshot cache that
//! shields the upstream stats service from repeated requests.
//!
//! ## Features
//!
//! - **Stat Key Parsing**: Decode `br_<stat>_<input>_<variant>_playlist_<token>` counter keys
//! - **Mode Classification**: Ordered, first-match-wins playlist matching against a mode registry
//! - **Aggregation**: One pass over the raw counter map, input devices merged per mode
//! - **Composite Modes**: Meta-modes (e.g. "Zero Build") summed from already-aggregated modes
//! - **Snapshot Cache**: Serving TTL for hits, longer retention TTL enforced by a sweep
//! - **Account Linking**: Local SQLite storage for Discord/Epic account links and a leaderboard
//!
//! ## Quick Start
//!
//! ```rust
//! use brstats::{Aggregator, ModeRegistry, RawCounterMap};
//!
//! let mut raw = RawCounterMap::new();
//! raw.insert("br_placetop1_keyboardmouse_m0_playlist_defaultsolo".into(), 2);
//! raw.insert("br_kills_keyboardmouse_m0_playlist_defaultsolo".into(), 10);
//! raw.insert("br_matchesplayed_keyboardmouse_m0_playlist_defaultsolo".into(), 5);
//!
//! let aggregator = Aggregator::new(ModeRegistry::default());
//! let snapshot = aggregator.aggregate(&raw);
//!
//! assert_eq!(snapshot.modes["Solo"].wins, 2);
//! assert_eq!(snapshot.overall.kills, 10);
//! ```
//!
//! ## Environment Configuration
//!
//! Set an Epic access token so the CLI can reach the stats service:
//! ```bash
//! export EPIC_ACCESS_TOKEN=eg1~...
//! ```

pub mod cache;
pub mod cli;
pub mod commands;
pub mod epic;
pub mod error;
pub mod service;
pub mod stats;
pub mod storage;

// Re-export commonly used types
pub use cache::{CacheConfig, CacheStore};
pub use cli::types::{AccountId, DiscordId};
pub use error::{Result, StatsError};
pub use service::{RawFetch, SeasonContext, StatsOutcome, StatsProvider, StatsService};
pub use stats::{Aggregator, ModeDefinition, ModeRegistry, ModeStats, RawCounterMap, StatsSnapshot};

pub const ACCESS_TOKEN_ENV_VAR: &str = "EPIC_ACCESS_TOKEN";
