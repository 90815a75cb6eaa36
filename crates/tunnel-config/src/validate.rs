//! Configuration validation errors and semantic validation.

use thiserror::Error;

use crate::engine::EngineConfig;

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Configuration validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Semantic validation failed: {0}")]
    SemanticError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: String, actual: String },
}

impl ValidationError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::IoError(_) => 60,
            ValidationError::ParseError(_) => 61,
            ValidationError::SemanticError(_) => 63,
            ValidationError::InvalidValue { .. } => 65,
            ValidationError::VersionMismatch { .. } => 66,
        }
    }
}

impl From<ValidationError> for tunnel_common::Error {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::IoError(msg) => tunnel_common::Error::Config(msg),
            other => tunnel_common::Error::InvalidConfig(other.to_string()),
        }
    }
}

/// Validate an engine configuration semantically.
pub fn validate_engine_config(config: &EngineConfig) -> ValidationResult<()> {
    if config.schema_version != crate::CONFIG_SCHEMA_VERSION {
        return Err(ValidationError::VersionMismatch {
            expected: crate::CONFIG_SCHEMA_VERSION.to_string(),
            actual: config.schema_version.clone(),
        });
    }

    if config.min_samples == 0 {
        return Err(ValidationError::InvalidValue {
            field: "min_samples".to_string(),
            message: "Must be at least 1, got 0".to_string(),
        });
    }

    let t = &config.thresholds;
    require_finite("thresholds.moderate_min", t.moderate_min)?;
    require_finite("thresholds.poor_min", t.poor_min)?;
    if t.moderate_min < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "thresholds.moderate_min".to_string(),
            message: format!("Must be non-negative, got {}", t.moderate_min),
        });
    }
    if t.moderate_min >= t.poor_min {
        return Err(ValidationError::SemanticError(format!(
            "thresholds.moderate_min ({}) must be below thresholds.poor_min ({})",
            t.moderate_min, t.poor_min
        )));
    }

    require_finite("decision_time_s", config.decision_time_s)?;
    if config.decision_time_s < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "decision_time_s".to_string(),
            message: format!("Must be non-negative, got {}", config.decision_time_s),
        });
    }

    require_finite("plate_y_ft", config.plate_y_ft)?;

    require_finite("path_step_s", config.path_step_s)?;
    if config.path_step_s <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "path_step_s".to_string(),
            message: format!("Must be positive, got {}", config.path_step_s),
        });
    }

    Ok(())
}

fn require_finite(field: &str, value: f64) -> ValidationResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: field.to_string(),
            message: format!("Must be finite, got {}", value),
        })
    }
}
