//! Single-pass aggregation of raw counters into a [`StatsSnapshot`].
//!
//! The pass parses each key, classifies its playlist, and accumulates the
//! value into the target mode bucket and into `overall` in the same step.
//! Input device variants (keyboard/mouse, gamepad, touch) land in the same
//! bucket; device is not part of the output grouping. Composite modes are
//! built in a strictly-second pass from the finished base counters, and
//! derived values are computed last.

use crate::stats::modes::ModeRegistry;
use crate::stats::parser::parse_stat_key;
use crate::stats::types::{ModeStats, RawCounterMap, StatsSnapshot};
use std::collections::BTreeMap;

pub struct Aggregator {
    registry: ModeRegistry,
}

impl Aggregator {
    pub fn new(registry: ModeRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ModeRegistry {
        &self.registry
    }

    /// Walk the raw counter map once and produce a finished snapshot.
    ///
    /// Keys that fail to parse are skipped. Tokens no definition matches
    /// fall back to the token itself as a display bucket, so new playlists
    /// still show up before the registry learns about them.
    pub fn aggregate(&self, raw: &RawCounterMap) -> StatsSnapshot {
        let mut overall = ModeStats::default();
        let mut modes: BTreeMap<String, ModeStats> = BTreeMap::new();

        for (key, value) in raw {
            let Some(parsed) = parse_stat_key(key) else {
                continue;
            };
            let bucket = match self.registry.classify(&parsed.playlist_token) {
                Some(def) => def.display_name.clone(),
                None => parsed.playlist_token.clone(),
            };
            modes.entry(bucket).or_default().accumulate(parsed.kind, *value);
            overall.accumulate(parsed.kind, *value);
        }

        // Composite pass: runs only after every base bucket is complete, and
        // reads the raw counters before any derivation. A missing source mode
        // contributes zero; a composite with no matches is omitted entirely.
        for def in self.registry.composites() {
            let mut combined = ModeStats::default();
            for source in &def.composed_of {
                if let Some(src) = modes.get(source.as_str()) {
                    combined.merge_counters(src);
                }
            }
            if combined.matches > 0 {
                modes.insert(def.display_name.clone(), combined);
            }
        }

        for stats in modes.values_mut() {
            stats.finalize();
        }
        overall.finalize();

        StatsSnapshot { overall, modes }
    }
}
