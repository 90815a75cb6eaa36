//! Errors raised while loading pitch data or running an analysis.
//!
//! Each variant carries a numeric code that stays fixed across releases, a
//! category that picks the process exit code, and a one-line fix for people
//! reading stderr.
//!
//! "Nothing to analyze" is not an error. Empty selections and thin data are
//! reported through [`crate::AnalysisStatus`]; the variants here are for
//! conditions the caller has to fix.
//!
//! # Human-Facing Output
//!
//! ```text
//! ✗ Malformed Pitch Record
//!   Reason: malformed pitch record #17 (pitch_id=40211): field `vz0` is missing
//!   Fix: Repair or drop the offending record in the dataset and reload.
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Broad error family; `tunnel-core` maps each to an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Engine configuration errors.
    Config,
    /// Dataset loading and record validation errors.
    Data,
    /// Selection and analysis errors.
    Analysis,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Data => write!(f, "data"),
            ErrorCategory::Analysis => write!(f, "analysis"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid engine config: {0}")]
    InvalidConfig(String),

    // Data errors (20-29)
    #[error("dataset load failed: {0}")]
    DatasetLoad(String),

    #[error("malformed pitch record #{index}{}: field `{field}` {reason}", fmt_pitch_id(.pitch_id))]
    MalformedPitch {
        index: usize,
        pitch_id: Option<u64>,
        field: String,
        reason: String,
    },

    #[error("dataset is not ready (state: {state})")]
    DatasetNotReady { state: String },

    // Analysis errors (30-39)
    #[error("unknown pitcher: {name}")]
    UnknownPitcher { name: String },

    #[error("pitch type {pitch_type} is not eligible for the current selection")]
    IneligiblePitchType { pitch_type: String },

    #[error("a pitch pair needs two different pitch types, got {pitch_type} twice")]
    SamePitchType { pitch_type: String },

    #[error("invalid decision time {value}s: must be finite and non-negative")]
    InvalidDecisionTime { value: f64 },

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

fn fmt_pitch_id(pitch_id: &Option<u64>) -> String {
    match pitch_id {
        Some(id) => format!(" (pitch_id={})", id),
        None => String::new(),
    }
}

impl Error {
    /// Numeric code: 1x config, 2x data, 3x analysis, 6x I/O.
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::InvalidConfig(_) => 11,
            Error::DatasetLoad(_) => 20,
            Error::MalformedPitch { .. } => 21,
            Error::DatasetNotReady { .. } => 22,
            Error::UnknownPitcher { .. } => 30,
            Error::IneligiblePitchType { .. } => 31,
            Error::SamePitchType { .. } => 33,
            Error::InvalidDecisionTime { .. } => 32,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Config(_) | Error::InvalidConfig(_) => ErrorCategory::Config,

            Error::DatasetLoad(_) | Error::MalformedPitch { .. } | Error::DatasetNotReady { .. } => {
                ErrorCategory::Data
            }

            Error::UnknownPitcher { .. }
            | Error::IneligiblePitchType { .. }
            | Error::SamePitchType { .. }
            | Error::InvalidDecisionTime { .. } => ErrorCategory::Analysis,

            Error::Io(_) | Error::Json(_) => ErrorCategory::Io,
        }
    }

    /// Whether fixing the input and calling again can succeed. Nothing
    /// here retries on its own.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::Config(_) => true,
            Error::InvalidConfig(_) => true,

            Error::DatasetLoad(_) => true,
            Error::MalformedPitch { .. } => false, // the snapshot itself is bad
            Error::DatasetNotReady { .. } => true,

            Error::UnknownPitcher { .. } => true,
            Error::IneligiblePitchType { .. } => true,
            Error::SamePitchType { .. } => true,
            Error::InvalidDecisionTime { .. } => true,

            Error::Io(_) => true,
            Error::Json(_) => false,
        }
    }

    /// What the user should do about it.
    pub fn remediation(&self) -> &'static str {
        match self {
            Error::Config(_) => {
                "Run 'tunnel-core config validate' to check the engine configuration."
            }
            Error::InvalidConfig(_) => {
                "Fix the reported field in engine.json, or remove the file to use built-in defaults."
            }
            Error::DatasetLoad(_) => {
                "Check that the dataset path exists and contains a JSON array of pitch records."
            }
            Error::MalformedPitch { .. } => {
                "Repair or drop the offending record in the dataset and reload."
            }
            Error::DatasetNotReady { .. } => "Load a dataset before selecting or analyzing.",
            Error::UnknownPitcher { .. } => {
                "List available pitchers with 'tunnel-core pitchers --data <file>'."
            }
            Error::IneligiblePitchType { .. } => {
                "Pick pitch types with enough samples for the selected pitcher and stance."
            }
            Error::SamePitchType { .. } => {
                "Choose two different pitch types, e.g. '--pair FF,CU'."
            }
            Error::InvalidDecisionTime { .. } => {
                "Pass a small positive offset in seconds, e.g. '--time 0.15'."
            }
            Error::Io(_) => "Check that the file exists and is readable, then retry.",
            Error::Json(_) => {
                "Invalid JSON in file. Check syntax with 'jq . <file>' or regenerate the export."
            }
        }
    }

    /// Title line for the human error block.
    pub fn headline(&self) -> &'static str {
        match self {
            Error::Config(_) => "Configuration Error",
            Error::InvalidConfig(_) => "Invalid Engine Configuration",
            Error::DatasetLoad(_) => "Dataset Load Failed",
            Error::MalformedPitch { .. } => "Malformed Pitch Record",
            Error::DatasetNotReady { .. } => "Dataset Not Ready",
            Error::UnknownPitcher { .. } => "Unknown Pitcher",
            Error::IneligiblePitchType { .. } => "Ineligible Pitch Type",
            Error::SamePitchType { .. } => "Identical Pitch Types",
            Error::InvalidDecisionTime { .. } => "Invalid Decision Time",
            Error::Io(_) => "I/O Error",
            Error::Json(_) => "JSON Parse Error",
        }
    }
}

/// The `error` object printed on stderr in JSON mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    pub code: u32,
    pub category: ErrorCategory,
    pub message: String,
    pub recoverable: bool,
    /// Variant fields such as record index or pitcher name.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub context: HashMap<String, serde_json::Value>,
}

impl From<&Error> for StructuredError {
    fn from(err: &Error) -> Self {
        let mut context = HashMap::new();

        match err {
            Error::MalformedPitch {
                index,
                pitch_id,
                field,
                ..
            } => {
                context.insert("index".to_string(), serde_json::json!(index));
                context.insert("field".to_string(), serde_json::json!(field));
                if let Some(id) = pitch_id {
                    context.insert("pitch_id".to_string(), serde_json::json!(id));
                }
            }
            Error::UnknownPitcher { name } => {
                context.insert("pitcher".to_string(), serde_json::json!(name));
            }
            Error::IneligiblePitchType { pitch_type } | Error::SamePitchType { pitch_type } => {
                context.insert("pitch_type".to_string(), serde_json::json!(pitch_type));
            }
            Error::DatasetNotReady { state } => {
                context.insert("state".to_string(), serde_json::json!(state));
            }
            _ => {}
        }

        StructuredError {
            code: err.code(),
            category: err.category(),
            message: err.to_string(),
            recoverable: err.is_recoverable(),
            context,
        }
    }
}

impl StructuredError {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":{},"error":"serialization_failed"}}"#, self.code)
        })
    }
}

/// Format an error for human-readable stderr output.
///
/// Output format:
/// ```text
/// ✗ [Headline]
///   Reason: [Error message]
///   Fix: [Remediation hint]
/// ```
pub fn format_error_human(err: &Error, use_color: bool) -> String {
    let (red, cyan, reset) = if use_color {
        ("\x1b[31m", "\x1b[36m", "\x1b[0m")
    } else {
        ("", "", "")
    };

    format!(
        "{red}✗{reset} {headline}\n  Reason: {message}\n  {cyan}Fix:{reset} {remediation}",
        red = red,
        cyan = cyan,
        reset = reset,
        headline = err.headline(),
        message = err,
        remediation = err.remediation()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed() -> Error {
        Error::MalformedPitch {
            index: 17,
            pitch_id: Some(40211),
            field: "vz0".into(),
            reason: "is missing".into(),
        }
    }

    #[test]
    fn test_error_code() {
        assert_eq!(Error::Config("test".into()).code(), 10);
        assert_eq!(malformed().code(), 21);
        assert_eq!(Error::InvalidDecisionTime { value: -1.0 }.code(), 32);
    }

    #[test]
    fn test_same_pitch_type_is_analysis_error() {
        let err = Error::SamePitchType {
            pitch_type: "FF".into(),
        };
        assert_eq!(err.code(), 33);
        assert_eq!(err.category(), ErrorCategory::Analysis);
        assert!(err.to_string().contains("FF twice"));
        let structured = StructuredError::from(&err);
        assert_eq!(structured.context["pitch_type"], "FF");
    }

    #[test]
    fn test_error_category() {
        assert_eq!(Error::Config("test".into()).category(), ErrorCategory::Config);
        assert_eq!(malformed().category(), ErrorCategory::Data);
        assert_eq!(
            Error::UnknownPitcher { name: "x".into() }.category(),
            ErrorCategory::Analysis
        );
    }

    #[test]
    fn test_malformed_message_names_record() {
        let msg = malformed().to_string();
        assert!(msg.contains("#17"));
        assert!(msg.contains("pitch_id=40211"));
        assert!(msg.contains("`vz0`"));

        let anon = Error::MalformedPitch {
            index: 3,
            pitch_id: None,
            field: "ax".into(),
            reason: "is not finite (NaN)".into(),
        };
        assert_eq!(
            anon.to_string(),
            "malformed pitch record #3: field `ax` is not finite (NaN)"
        );
    }

    #[test]
    fn test_error_recoverable() {
        assert!(Error::DatasetLoad("404".into()).is_recoverable());
        assert!(!malformed().is_recoverable());
    }

    #[test]
    fn test_structured_error_from_error() {
        let structured = StructuredError::from(&malformed());

        assert_eq!(structured.code, 21);
        assert_eq!(structured.category, ErrorCategory::Data);
        assert!(!structured.recoverable);
        assert_eq!(structured.context.get("index"), Some(&serde_json::json!(17)));
        assert_eq!(
            structured.context.get("field"),
            Some(&serde_json::json!("vz0"))
        );
    }

    #[test]
    fn test_structured_error_json() {
        let err = Error::UnknownPitcher {
            name: "Kim".into(),
        };
        let json = StructuredError::from(&err).to_json();

        assert!(json.contains(r#""code":30"#));
        assert!(json.contains(r#""category":"analysis""#));
        assert!(json.contains(r#""pitcher":"Kim""#));
    }

    #[test]
    fn test_format_error_human() {
        let formatted = format_error_human(&malformed(), false);
        assert!(formatted.starts_with("✗ Malformed Pitch Record"));
        assert!(formatted.contains("Reason: malformed pitch record #17"));
        assert!(formatted.contains("Fix:"));
    }
}
