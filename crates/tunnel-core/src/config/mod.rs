//! Configuration loading for tunnel-core.
//!
//! This module handles:
//! - Engine config resolution (CLI > env > XDG > defaults)
//! - Parsing (JSON or TOML by extension) and semantic validation
//! - Config snapshot generation for output envelopes

pub use tunnel_config::{
    ClassificationThresholds, ConfigPaths, ConfigSnapshot, ConfigSource, EngineConfig,
    RecomputePolicy, ValidationError,
};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tunnel_config::{resolve_config, validate_engine_config};

/// Errors that can occur during config loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Invalid config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },

    #[error("Semantic validation failed: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("I/O error reading {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Stable error code for structured output.
    pub fn code(&self) -> u32 {
        match self {
            ConfigError::NotFound { .. } => 10,
            ConfigError::ParseError { .. } => 11,
            ConfigError::ValidationError(_) => 11,
            ConfigError::IoError { .. } => 60,
        }
    }
}

/// Resolved configuration with provenance information.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub engine: EngineConfig,
    /// Where the config was resolved from.
    pub paths: ConfigPaths,
    /// Raw file content (None if using defaults).
    raw: Option<String>,
}

impl ResolvedConfig {
    /// Built-in defaults with no file behind them.
    pub fn defaults() -> Self {
        ResolvedConfig {
            engine: EngineConfig::default(),
            paths: ConfigPaths::default(),
            raw: None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.paths.engine.as_deref()
    }

    pub fn source(&self) -> &ConfigSource {
        &self.paths.source
    }

    pub fn using_defaults(&self) -> bool {
        self.paths.engine.is_none()
    }

    /// Snapshot of the resolved config as loaded.
    pub fn snapshot(&self) -> ConfigSnapshot {
        self.snapshot_of(&self.engine)
    }

    /// Snapshot of `effective`, the resolved config after command-line
    /// overrides, keeping this config's source path and file hash.
    pub fn snapshot_of(&self, effective: &EngineConfig) -> ConfigSnapshot {
        ConfigSnapshot::new(effective, &self.paths, self.raw.as_deref())
    }
}

/// Configuration resolution options.
#[derive(Debug, Default)]
pub struct ConfigOptions {
    /// Explicit engine config path (highest priority).
    pub config_path: Option<PathBuf>,
}

/// Load configuration with the standard resolution order.
///
/// Resolution order (highest to lowest priority):
/// 1. Explicit CLI path (must exist)
/// 2. `TUNNEL_CONFIG` / `TUNNEL_CONFIG_DIR`
/// 3. XDG config home (~/.config/pitch-tunnel/)
/// 4. Built-in defaults
pub fn load_config(options: &ConfigOptions) -> Result<ResolvedConfig, ConfigError> {
    if let Some(path) = &options.config_path {
        if !path.exists() {
            return Err(ConfigError::NotFound { path: path.clone() });
        }
    }

    let paths = resolve_config(options.config_path.as_deref());
    let Some(path) = paths.engine.clone() else {
        return Ok(ResolvedConfig::defaults());
    };

    let (engine, raw) = load_engine_file(&path)?;
    Ok(ResolvedConfig {
        engine,
        paths,
        raw: Some(raw),
    })
}

/// Load and validate one engine config file.
pub fn load_engine_file(path: &Path) -> Result<(EngineConfig, String), ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let engine =
        EngineConfig::from_str_for_path(&content, path).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

    validate_engine_config(&engine)?;
    Ok((engine, content))
}
