//! Epic Games services client: account lookup and raw Battle Royale stats.

pub mod http;
pub mod types;

pub use http::EpicClient;
pub use types::{AccountInfo, StatsEnvelope};
