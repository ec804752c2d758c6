//! Wire types for the Epic account and statsv2 services.

use crate::stats::types::RawCounterMap;
use serde::Deserialize;

/// Account record from the public account service.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountInfo {
    pub id: String,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
}

/// Envelope around one statsv2 response.
///
/// `stats` is the flat counter map the aggregation engine consumes.
/// `endTime` comes back as i64::MAX for lifetime queries; keep it raw.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsEnvelope {
    #[serde(rename = "accountId")]
    pub account_id: String,
    #[serde(rename = "startTime", default)]
    pub start_time: u64,
    #[serde(rename = "endTime", default)]
    pub end_time: u64,
    #[serde(default)]
    pub stats: RawCounterMap,
}
