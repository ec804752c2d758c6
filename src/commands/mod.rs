//! Command implementations for the brstats CLI

pub mod leaderboard;
pub mod link;
pub mod maintenance;
pub mod stats;
