//! Record of the engine configuration a run used.
//!
//! Reports embed a snapshot so two outputs can be compared by
//! `config_hash` without diffing the files that produced them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::engine::{EngineConfig, RecomputePolicy};
use crate::resolve::{ConfigPaths, ConfigSource};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub taken_at: DateTime<Utc>,
    pub schema_version: String,
    #[serde(default)]
    pub config_path: Option<String>,
    /// Human-readable [`ConfigSource`].
    pub source: String,
    /// sha256 of the file as read, when a file was read.
    #[serde(default)]
    pub file_hash: Option<String>,
    /// sha256 of the effective config's canonical JSON. Equal hashes mean
    /// equal analysis behavior regardless of file formatting or source.
    pub config_hash: String,
    pub summary: ConfigSummary,
}

/// The values that decide classification and eligibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigSummary {
    pub min_samples: usize,
    pub moderate_min_ft: f64,
    pub poor_min_ft: f64,
    pub decision_time_s: f64,
    pub recompute: RecomputePolicy,
}

impl From<&EngineConfig> for ConfigSummary {
    fn from(config: &EngineConfig) -> Self {
        let t = &config.thresholds;
        ConfigSummary {
            min_samples: config.min_samples,
            moderate_min_ft: t.moderate_min,
            poor_min_ft: t.poor_min,
            decision_time_s: config.decision_time_s,
            recompute: config.recompute,
        }
    }
}

impl ConfigSnapshot {
    pub fn new(config: &EngineConfig, paths: &ConfigPaths, raw_content: Option<&str>) -> Self {
        let path = paths.engine.as_ref().map(|p| p.display().to_string());
        Self::capture(config, &paths.source, path, raw_content)
    }

    /// Snapshot of the builtin defaults, for runs with no config file.
    pub fn defaults_only() -> Self {
        Self::capture(
            &EngineConfig::default(),
            &ConfigSource::BuiltinDefault,
            None,
            None,
        )
    }

    fn capture(
        config: &EngineConfig,
        source: &ConfigSource,
        config_path: Option<String>,
        raw_content: Option<&str>,
    ) -> Self {
        ConfigSnapshot {
            taken_at: Utc::now(),
            schema_version: config.schema_version.clone(),
            config_path,
            source: source.to_string(),
            file_hash: raw_content.map(sha256_hex),
            config_hash: sha256_hex(&config.to_canonical_json()),
            summary: config.into(),
        }
    }

    /// True when both snapshots describe the same effective values.
    pub fn matches(&self, other: &ConfigSnapshot) -> bool {
        self.config_hash == other.config_hash
    }

    /// Leading 12 hex digits of `config_hash`, for display.
    pub fn short_id(&self) -> &str {
        self.config_hash.get(..12).unwrap_or(&self.config_hash)
    }
}

fn sha256_hex(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}
