//! Pitch tunnel engine configuration loading and validation.
//!
//! This crate provides:
//! - The typed `EngineConfig` (sample threshold, classification thresholds,
//!   decision time, sampling parameters, recompute policy)
//! - Config resolution (CLI → env → XDG → defaults)
//! - Semantic validation
//! - Config snapshots for output envelopes

pub mod engine;
pub mod resolve;
pub mod snapshot;
pub mod validate;

pub use engine::{ClassificationThresholds, EngineConfig, RecomputePolicy};
pub use resolve::{resolve_config, ConfigPaths, ConfigSource};
pub use snapshot::ConfigSnapshot;
pub use validate::{validate_engine_config, ValidationError, ValidationResult};

/// Schema version for configuration files.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";
