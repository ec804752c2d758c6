//! Mode registry and playlist classification.
//!
//! The registry is an explicit, ordered list of immutable [`ModeDefinition`]
//! records loaded at startup. Classification is a linear scan: the first
//! non-composite definition with a substring match against the playlist token
//! wins, so more specific patterns (`respawn_nobuild`) must precede the
//! general ones (`respawn`).

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One mode definition.
///
/// Exactly one of `patterns` or `composed_of` is populated:
/// - `patterns`: substring matches against the playlist token (base mode);
/// - `composed_of`: display names of other modes whose counters are summed
///   in a second pass (composite mode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeDefinition {
    pub id: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub composed_of: Vec<String>,
}

impl ModeDefinition {
    /// Base mode matched by playlist patterns.
    pub fn base(
        id: impl Into<String>,
        display_name: impl Into<String>,
        patterns: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            composed_of: Vec::new(),
        }
    }

    /// Composite mode summed from other modes' display names.
    pub fn composite(
        id: impl Into<String>,
        display_name: impl Into<String>,
        composed_of: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            patterns: Vec::new(),
            composed_of: composed_of.iter().map(|m| m.to_string()).collect(),
        }
    }

    pub fn is_composite(&self) -> bool {
        !self.composed_of.is_empty()
    }
}

/// Ordered sequence of mode definitions. Order is significant: pattern
/// classification returns the first match.
#[derive(Debug, Clone)]
pub struct ModeRegistry {
    definitions: Vec<ModeDefinition>,
}

impl ModeRegistry {
    /// Build a registry from explicit definitions, validating that each one
    /// carries exactly one of `patterns` or `composed_of`.
    pub fn new(definitions: Vec<ModeDefinition>) -> Result<Self> {
        for def in &definitions {
            if def.patterns.is_empty() && def.composed_of.is_empty() {
                return Err(StatsError::InvalidModeDefinition {
                    id: def.id.clone(),
                    reason: "neither patterns nor composedOf is set".to_string(),
                });
            }
            if !def.patterns.is_empty() && !def.composed_of.is_empty() {
                return Err(StatsError::InvalidModeDefinition {
                    id: def.id.clone(),
                    reason: "patterns and composedOf are mutually exclusive".to_string(),
                });
            }
        }
        Ok(Self { definitions })
    }

    /// Load a registry from a JSON file holding an array of definitions.
    /// Lets deployments add per-season playlists without a rebuild.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let definitions: Vec<ModeDefinition> = serde_json::from_str(&contents)?;
        Self::new(definitions)
    }

    pub fn definitions(&self) -> &[ModeDefinition] {
        &self.definitions
    }

    /// Composite definitions in registry order.
    pub fn composites(&self) -> impl Iterator<Item = &ModeDefinition> {
        self.definitions.iter().filter(|d| d.is_composite())
    }

    /// Classify a playlist token: first non-composite definition with a
    /// substring match wins. Depends only on the registry and the token.
    pub fn classify(&self, playlist_token: &str) -> Option<&ModeDefinition> {
        self.definitions
            .iter()
            .filter(|d| !d.is_composite())
            .find(|d| d.patterns.iter().any(|p| playlist_token.contains(p.as_str())))
    }
}

impl Default for ModeRegistry {
    /// The built-in registry covering the current Battle Royale playlists.
    ///
    /// Zero Build and Ranked entries come before their build-mode
    /// counterparts so the `_nobuild` suffixed tokens match first.
    fn default() -> Self {
        let definitions = vec![
            ModeDefinition::base("zb_solo", "Zero Build Solo", &["nobuildbr_solo"]),
            ModeDefinition::base("zb_duo", "Zero Build Duo", &["nobuildbr_duo"]),
            ModeDefinition::base("zb_squad", "Zero Build Squad", &["nobuildbr_squad"]),
            ModeDefinition::base("reload_zb", "Reload Zero Build", &["respawn_nobuild"]),
            ModeDefinition::base("reload", "Reload", &["respawn"]),
            ModeDefinition::base("ranked_zb", "Ranked Zero Build", &["showdown_nobuild"]),
            ModeDefinition::base("ranked_br", "Ranked BR", &["showdown"]),
            ModeDefinition::base("blitz", "Blitz", &["blitz"]),
            ModeDefinition::base("solo", "Solo", &["defaultsolo"]),
            ModeDefinition::base("duo", "Duo", &["defaultduo"]),
            ModeDefinition::base("squad", "Squad", &["defaultsquad"]),
            ModeDefinition::composite(
                "zero_build",
                "Zero Build",
                &["Zero Build Solo", "Zero Build Duo", "Zero Build Squad"],
            ),
            ModeDefinition::composite("battle_royale", "Battle Royale", &["Solo", "Duo", "Squad"]),
        ];
        // Built-in definitions are known valid; skip the constructor check.
        Self { definitions }
    }
}
