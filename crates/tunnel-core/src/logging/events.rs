//! Event vocabulary and the JSONL record shape.
//!
//! Event names double as tracing targets, so `RUST_LOG=dataset=debug`
//! style filters select whole event families.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity as written to JSONL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<&tracing::Level> for Level {
    fn from(level: &tracing::Level) -> Self {
        if *level == tracing::Level::ERROR {
            Level::Error
        } else if *level == tracing::Level::WARN {
            Level::Warn
        } else if *level == tracing::Level::INFO {
            Level::Info
        } else if *level == tracing::Level::DEBUG {
            Level::Debug
        } else {
            Level::Trace
        }
    }
}

/// Where in the pipeline an event was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Init,
    Load,
    /// Pitcher, stance and decision-time changes.
    Select,
    Aggregate,
    /// Pairwise comparison and classification.
    Compare,
    Report,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Init => "init",
            Stage::Load => "load",
            Stage::Select => "select",
            Stage::Aggregate => "aggregate",
            Stage::Compare => "compare",
            Stage::Report => "report",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub mod event_names {
    pub const RUN_STARTED: &str = "run.started";
    pub const RUN_FINISHED: &str = "run.finished";

    pub const DATASET_LOAD_STARTED: &str = "dataset.load_started";
    pub const DATASET_LOADED: &str = "dataset.loaded";
    pub const DATASET_LOAD_FAILED: &str = "dataset.load_failed";

    pub const SELECTION_CHANGED: &str = "selection.changed";

    pub const ANALYSIS_STARTED: &str = "analysis.started";
    pub const ANALYSIS_INSUFFICIENT_DATA: &str = "analysis.insufficient_data";
    pub const ANALYSIS_FINISHED: &str = "analysis.finished";

    pub const CONFIG_LOADED: &str = "config.loaded";
    pub const CONFIG_DEFAULT_USED: &str = "config.default_used";
    pub const CONFIG_ERROR: &str = "config.error";

    pub const INTERNAL_ERROR: &str = "internal_error";
}

/// One line of JSONL log output.
///
/// `run_id` and `stage` are optional because plain `tracing` calls from
/// dependencies carry neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    pub ts: DateTime<Utc>,
    pub level: Level,
    /// Event name, taken from the tracing target.
    pub event: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl LogEvent {
    pub fn new(level: Level, event: impl Into<String>) -> Self {
        LogEvent {
            ts: Utc::now(),
            level,
            event: event.into(),
            run_id: None,
            stage: None,
            message: None,
            fields: serde_json::Map::new(),
        }
    }

    pub fn to_jsonl(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            serde_json::json!({ "event": self.event, "error": "unserializable" }).to_string()
        })
    }
}

/// Per-invocation correlation handle passed to `log_event!`.
#[derive(Debug, Clone)]
pub struct LogContext {
    pub run_id: String,
}

impl LogContext {
    pub fn new(run_id: impl Into<String>) -> Self {
        LogContext {
            run_id: run_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jsonl_omits_absent_parts() {
        let line = LogEvent::new(Level::Info, event_names::RUN_STARTED).to_jsonl();
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["event"], "run.started");
        assert_eq!(parsed["level"], "info");
        assert!(parsed.get("run_id").is_none());
        assert!(parsed.get("fields").is_none());
    }

    #[test]
    fn jsonl_reads_back() {
        let mut event = LogEvent::new(Level::Warn, event_names::ANALYSIS_INSUFFICIENT_DATA);
        event.run_id = Some("run-abc".to_string());
        event.stage = Some(Stage::Aggregate.to_string());
        event.fields.insert("eligible".to_string(), 1.into());

        let back: LogEvent = serde_json::from_str(&event.to_jsonl()).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn tracing_levels_map() {
        assert_eq!(Level::from(&tracing::Level::ERROR), Level::Error);
        assert_eq!(Level::from(&tracing::Level::DEBUG), Level::Debug);
        assert_eq!(Level::from(&tracing::Level::TRACE), Level::Trace);
    }

    #[test]
    fn stage_display_matches_serde() {
        for stage in [
            Stage::Init,
            Stage::Load,
            Stage::Select,
            Stage::Aggregate,
            Stage::Compare,
            Stage::Report,
        ] {
            let json = serde_json::to_string(&stage).unwrap();
            assert_eq!(json, format!("\"{}\"", stage));
        }
    }
}
