//! Pitch tunnel common types and errors.
//!
//! This crate provides foundational types shared across the engine crates:
//! - Pitch release telemetry records and their validation
//! - Derived aggregate and comparison records
//! - Caller-owned selection state
//! - Common error types
//! - Output formats

pub mod analysis;
pub mod error;
pub mod output;
pub mod pitch;
pub mod selection;

pub use analysis::{
    AnalysisStatus, PitchTypeSummary, TrajectoryPoint, TunnelAnalysisResult, TunnelClass,
};
pub use error::{Error, ErrorCategory, Result, StructuredError};
pub use output::OutputFormat;
pub use pitch::{Pitch, RawPitch, Stance};
pub use selection::{Selection, StanceFilter};

/// Schema version stamped on every serialized output envelope.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Minimum number of pitches a type needs before it is summarized.
pub const DEFAULT_MIN_SAMPLES: usize = 10;

/// Tunnel separation (ft) at or above which a pair is "moderate separation".
pub const DEFAULT_MODERATE_MIN_FT: f64 = 0.05;

/// Tunnel separation (ft) at or above which a pair is "high disruption".
pub const DEFAULT_POOR_MIN_FT: f64 = 0.15;

/// Default decision-point offset after release (s).
pub const DEFAULT_DECISION_TIME_S: f64 = 0.15;
