//! Exit codes for the tunnel-core CLI.
//!
//! Exit codes communicate the outcome without requiring output parsing.
//!
//! Exit code ranges:
//! - 0-1: Operational outcomes (results produced / nothing to analyze)
//! - 10-19: User/environment errors (recoverable by user action)
//! - 20-29: Internal errors

use tunnel_common::{AnalysisStatus, Error, ErrorCategory};

/// Exit codes for tunnel-core operations.
///
/// These codes are a stable contract for automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Results produced
    Clean = 0,

    /// Nothing to analyze (no pitcher, or fewer than two eligible types)
    InsufficientData = 1,

    /// Invalid arguments
    ArgsError = 10,

    /// Engine configuration missing, unparsable or invalid
    ConfigError = 11,

    /// Dataset could not be loaded or contains malformed records
    DataError = 12,

    /// Internal error (bug - please report)
    InternalError = 20,

    /// I/O error
    IoError = 21,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    pub fn is_success(self) -> bool {
        self == ExitCode::Clean
    }

    /// Operational outcomes are not errors; they communicate analysis state.
    pub fn is_operational(self) -> bool {
        (self as i32) < 10
    }

    pub fn is_user_error(self) -> bool {
        (10..20).contains(&(self as i32))
    }

    pub fn is_internal_error(self) -> bool {
        (self as i32) >= 20
    }

    pub fn is_error(self) -> bool {
        (self as i32) >= 10
    }

    /// Get the code name as a string constant (for JSON output).
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK_CLEAN",
            ExitCode::InsufficientData => "OK_INSUFFICIENT_DATA",
            ExitCode::ArgsError => "ERR_ARGS",
            ExitCode::ConfigError => "ERR_CONFIG",
            ExitCode::DataError => "ERR_DATA",
            ExitCode::InternalError => "ERR_INTERNAL",
            ExitCode::IoError => "ERR_IO",
        }
    }

    /// Exit code for an analysis outcome.
    pub fn for_status(status: &AnalysisStatus) -> Self {
        match status {
            AnalysisStatus::Complete { .. } => ExitCode::Clean,
            AnalysisStatus::NotRun
            | AnalysisStatus::NoPitcherSelected
            | AnalysisStatus::InsufficientData { .. } => ExitCode::InsufficientData,
        }
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err.category() {
            ErrorCategory::Config => ExitCode::ConfigError,
            ErrorCategory::Data => ExitCode::DataError,
            ErrorCategory::Analysis => ExitCode::ArgsError,
            ErrorCategory::Io => ExitCode::IoError,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}
