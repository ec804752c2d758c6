//! Stats normalization engine: key parsing, mode classification, aggregation.

pub mod aggregate;
pub mod modes;
pub mod parser;
pub mod types;

pub use aggregate::Aggregator;
pub use modes::{ModeDefinition, ModeRegistry};
pub use parser::{parse_stat_key, ParsedStatKey};
pub use types::{ModeStats, RawCounterMap, StatKind, StatsSnapshot};
