//! Engine configuration.
//!
//! Every named constant of the tunnel engine is a field here with a
//! documented default. A config file only needs the fields it overrides:
//!
//! ```json
//! { "min_samples": 20, "thresholds": { "poor_min": 0.2 } }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::validate::ValidationError;
use tunnel_common::{
    DEFAULT_DECISION_TIME_S, DEFAULT_MIN_SAMPLES, DEFAULT_MODERATE_MIN_FT, DEFAULT_POOR_MIN_FT,
};

/// Front edge of home plate, measured from the back tip (ft).
pub const DEFAULT_PLATE_Y_FT: f64 = 17.0 / 12.0;

/// Spacing between flight-path samples (s).
pub const DEFAULT_PATH_STEP_S: f64 = 0.01;

/// Separation cutoffs (ft) at the decision point. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationThresholds {
    /// At or above this a pair is "moderate separation".
    pub moderate_min: f64,
    /// At or above this a pair is "high disruption / poor tunnel".
    pub poor_min: f64,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        ClassificationThresholds {
            moderate_min: DEFAULT_MODERATE_MIN_FT,
            poor_min: DEFAULT_POOR_MIN_FT,
        }
    }
}

/// When a session re-runs analysis after the selection changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecomputePolicy {
    /// Selection changes clear results; the caller re-runs explicitly.
    #[default]
    Explicit,
    /// Selection and decision-time changes re-run analysis immediately.
    OnChange,
}

impl std::fmt::Display for RecomputePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecomputePolicy::Explicit => write!(f, "explicit"),
            RecomputePolicy::OnChange => write!(f, "on_change"),
        }
    }
}

/// Tunnel engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub schema_version: String,
    /// Pitch types with fewer samples are dropped from analysis.
    pub min_samples: usize,
    pub thresholds: ClassificationThresholds,
    /// Decision-point offset used when the caller does not supply one (s).
    pub decision_time_s: f64,
    /// y-coordinate of the plane a pitch has to cross to reach the plate (ft).
    pub plate_y_ft: f64,
    pub path_step_s: f64,
    pub recompute: RecomputePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            schema_version: crate::CONFIG_SCHEMA_VERSION.to_string(),
            min_samples: DEFAULT_MIN_SAMPLES,
            thresholds: ClassificationThresholds::default(),
            decision_time_s: DEFAULT_DECISION_TIME_S,
            plate_y_ft: DEFAULT_PLATE_Y_FT,
            path_step_s: DEFAULT_PATH_STEP_S,
            recompute: RecomputePolicy::Explicit,
        }
    }
}

impl EngineConfig {
    /// Load from a file; `.toml` files are parsed as TOML, anything else as JSON.
    pub fn from_file(path: &Path) -> Result<Self, ValidationError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ValidationError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_str_for_path(&content, path)
    }

    /// Parse `content` read from `path`, choosing TOML or JSON by extension.
    pub fn from_str_for_path(content: &str, path: &Path) -> Result<Self, ValidationError> {
        if is_toml(path) {
            Self::from_toml_str(content)
        } else {
            Self::from_json_str(content)
        }
    }

    /// Parse from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(json)
            .map_err(|e| ValidationError::ParseError(format!("Invalid JSON: {}", e)))
    }

    /// Parse from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ValidationError> {
        toml::from_str(content)
            .map_err(|e| ValidationError::ParseError(format!("Invalid TOML: {}", e)))
    }

    /// Canonical JSON form, used for hashing.
    pub fn to_canonical_json(&self) -> String {
        // serde_json preserves struct field order, which is fixed.
        serde_json::to_string(self).unwrap_or_default()
    }
}

pub(crate) fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_engine_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.min_samples, 10);
        assert_eq!(config.thresholds.moderate_min, 0.05);
        assert_eq!(config.thresholds.poor_min, 0.15);
        assert_eq!(config.decision_time_s, 0.15);
        assert_eq!(config.recompute, RecomputePolicy::Explicit);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config =
            EngineConfig::from_json_str(r#"{"min_samples": 20, "thresholds": {"poor_min": 0.2}}"#)
                .unwrap();
        assert_eq!(config.min_samples, 20);
        assert_eq!(config.thresholds.poor_min, 0.2);
        assert_eq!(config.thresholds.moderate_min, 0.05);
        assert_eq!(config.schema_version, crate::CONFIG_SCHEMA_VERSION);
    }

    #[test]
    fn test_toml_parse() {
        let config = EngineConfig::from_toml_str(
            r#"
            min_samples = 5
            recompute = "on_change"

            [thresholds]
            moderate_min = 0.04
            "#,
        )
        .unwrap();
        assert_eq!(config.min_samples, 5);
        assert_eq!(config.recompute, RecomputePolicy::OnChange);
        assert_eq!(config.thresholds.moderate_min, 0.04);
        assert_eq!(config.thresholds.poor_min, 0.15);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = EngineConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ValidationError::ParseError(_)));
    }

    #[test]
    fn test_canonical_json_stable() {
        let a = EngineConfig::default().to_canonical_json();
        let b = EngineConfig::default().to_canonical_json();
        assert_eq!(a, b);
        assert!(a.contains(r#""min_samples":10"#));
    }

    #[test]
    fn test_is_toml() {
        assert!(is_toml(Path::new("/tmp/engine.toml")));
        assert!(!is_toml(Path::new("/tmp/engine.json")));
        assert!(!is_toml(Path::new("/tmp/engine")));
    }

    #[test]
    fn test_from_str_for_path_picks_parser() {
        let toml = EngineConfig::from_str_for_path("min_samples = 4\n", Path::new("e.toml"));
        assert_eq!(toml.unwrap().min_samples, 4);

        let json = EngineConfig::from_str_for_path(r#"{"min_samples": 6}"#, Path::new("e.json"));
        assert_eq!(json.unwrap().min_samples, 6);

        // TOML text behind a non-.toml name goes to the JSON parser.
        let err = EngineConfig::from_str_for_path("min_samples = 4\n", Path::new("engine"));
        assert!(matches!(err, Err(ValidationError::ParseError(_))));
    }
}
