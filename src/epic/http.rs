//! HTTP client for Epic's public account and statsv2 services.
//!
//! Authentication/session management is not handled here; the caller supplies
//! a valid bearer token (usually via `EPIC_ACCESS_TOKEN`).

use crate::cli::types::AccountId;
use crate::epic::types::{AccountInfo, StatsEnvelope};
use crate::error::{Result, StatsError};
use crate::service::{RawFetch, SeasonContext, StatsProvider};
use crate::ACCESS_TOKEN_ENV_VAR;
use reqwest::{Client, StatusCode};
use std::future::Future;

/// Base path for the public account service.
pub const ACCOUNT_BASE_URL: &str =
    "https://account-public-service-prod.ol.epicgames.com/account/api/public/account";

/// Base path for the statsv2 proxy service.
pub const STATS_BASE_URL: &str =
    "https://statsproxy-public-service-live.ol.epicgames.com/statsproxy/api/statsv2";

#[derive(Debug)]
pub struct EpicClient {
    client: Client,
    access_token: String,
}

impl EpicClient {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            access_token: access_token.into(),
        }
    }

    /// Build a client from the `EPIC_ACCESS_TOKEN` environment variable.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(ACCESS_TOKEN_ENV_VAR).map_err(|_| {
            StatsError::MissingAccessToken {
                env_var: ACCESS_TOKEN_ENV_VAR.to_string(),
            }
        })?;
        Ok(Self::new(token))
    }

    /// Look an account up by display name. `None` when no such account.
    pub async fn find_player(&self, display_name: &str) -> Result<Option<AccountInfo>> {
        let url = format!("{ACCOUNT_BASE_URL}/displayName/{display_name}");
        let res = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if res.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(res.error_for_status()?.json::<AccountInfo>().await?))
    }

    /// Look an account up by id. `None` when no such account.
    pub async fn find_player_by_id(&self, account_id: &AccountId) -> Result<Option<AccountInfo>> {
        let url = format!("{ACCOUNT_BASE_URL}/{}", account_id.as_str());
        let res = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if res.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(res.error_for_status()?.json::<AccountInfo>().await?))
    }

    /// Fetch the raw Battle Royale counter map for one account.
    ///
    /// A 403 means the account keeps its stats private; a 404 or an empty
    /// stats block means there is nothing recorded. Both are outcomes, not
    /// errors. A season window is forwarded as a `startTime` query parameter.
    pub async fn get_br_stats(
        &self,
        account_id: &AccountId,
        window: Option<&SeasonContext>,
    ) -> Result<RawFetch> {
        let url = format!("{STATS_BASE_URL}/account/{}", account_id.as_str());
        let mut req = self.client.get(&url).bearer_auth(&self.access_token);
        if let Some(season) = window {
            req = req.query(&[("startTime", season.start_time)]);
        }

        let res = req.send().await?;
        match res.status() {
            StatusCode::FORBIDDEN => Ok(RawFetch::Private),
            StatusCode::NOT_FOUND => Ok(RawFetch::NoData),
            _ => {
                let envelope: StatsEnvelope =
                    res.error_for_status()?.json::<StatsEnvelope>().await?;
                if envelope.stats.is_empty() {
                    Ok(RawFetch::NoData)
                } else {
                    Ok(RawFetch::Counters(envelope.stats))
                }
            }
        }
    }
}

impl StatsProvider for EpicClient {
    fn fetch_raw_stats(
        &self,
        account_id: &AccountId,
        window: Option<&SeasonContext>,
    ) -> impl Future<Output = Result<RawFetch>> + Send {
        self.get_br_stats(account_id, window)
    }
}
