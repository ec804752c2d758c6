//! ID types shared across the CLI and library layers.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Epic account IDs.
///
/// Epic account IDs are opaque hex strings; wrapping them prevents mixing
/// them up with display names or Discord IDs.
///
/// # Examples
///
/// ```rust
/// use brstats::AccountId;
///
/// let id = AccountId::new("4735ce9132924caf8a5b17789b40f79c");
/// assert_eq!(id.as_str(), "4735ce9132924caf8a5b17789b40f79c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(StatsError::InvalidId {
                value: s.to_string(),
            });
        }
        Ok(Self(s.trim().to_string()))
    }
}

/// Type-safe wrapper for Discord user IDs (snowflakes, kept as strings).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscordId(String);

impl DiscordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DiscordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DiscordId {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() || !s.trim().chars().all(|c| c.is_ascii_digit()) {
            return Err(StatsError::InvalidId {
                value: s.to_string(),
            });
        }
        Ok(Self(s.trim().to_string()))
    }
}
