//! Error types for the Fortnite stats library

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Access token not provided and {env_var} environment variable not set")]
    MissingAccessToken { env_var: String },

    #[error("Invalid mode definition `{id}`: {reason}")]
    InvalidModeDefinition { id: String, reason: String },

    #[error("Account not found: {name}")]
    AccountNotFound { name: String },

    #[error("No account linked for Discord user {discord_id}")]
    NotLinked { discord_id: String },

    #[error("Invalid id: {value}")]
    InvalidId { value: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl From<anyhow::Error> for StatsError {
    fn from(err: anyhow::Error) -> Self {
        StatsError::Storage {
            message: err.to_string(),
        }
    }
}
