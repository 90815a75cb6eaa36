//! Logging configuration.
//!
//! Level and format come from `TUNNEL_LOG` (or `RUST_LOG`) and
//! `TUNNEL_LOG_FORMAT`; `-v`/`-q` on the command line override both.

use serde::{Deserialize, Serialize};

/// Environment variable holding the log level.
pub const ENV_LOG_LEVEL: &str = "TUNNEL_LOG";
/// Environment variable holding the log format.
pub const ENV_LOG_FORMAT: &str = "TUNNEL_LOG_FORMAT";

/// Where log lines go and how they look. Both variants write to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// fmt-style lines for a terminal.
    #[default]
    Human,
    /// One JSON object per line.
    Jsonl,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Human => "human",
            LogFormat::Jsonl => "jsonl",
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "text" => Ok(LogFormat::Human),
            "jsonl" | "json" => Ok(LogFormat::Jsonl),
            other => Err(format!("unknown log format '{}' (human|jsonl)", other)),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum level that reaches the output. Ordered from most to least verbose.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    const NAMES: [(LogLevel, &'static str); 6] = [
        (LogLevel::Trace, "trace"),
        (LogLevel::Debug, "debug"),
        (LogLevel::Info, "info"),
        (LogLevel::Warn, "warn"),
        (LogLevel::Error, "error"),
        (LogLevel::Off, "off"),
    ];

    pub fn as_str(&self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|(level, _)| level == self)
            .map_or("info", |(_, name)| *name)
    }

    /// Level implied by `-q` and the number of `-v` flags, if either was given.
    pub fn from_verbosity(quiet: bool, verbose: u8) -> Option<LogLevel> {
        match (quiet, verbose) {
            (true, _) => Some(LogLevel::Error),
            (false, 0) => None,
            (false, 1) => Some(LogLevel::Debug),
            (false, _) => Some(LogLevel::Trace),
        }
    }

    /// Most verbose level named in a `RUST_LOG`-style directive list, e.g.
    /// `warn,tunnel_core=debug` gives `Debug`.
    fn from_directives(directives: &str) -> Option<LogLevel> {
        directives
            .split(',')
            .filter_map(|d| d.rsplit('=').next())
            .filter_map(|name| name.parse().ok())
            .min()
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = match wanted.as_str() {
            "warning" => "warn",
            "none" | "quiet" => "off",
            other => other,
        };
        Self::NAMES
            .iter()
            .find(|(_, name)| *name == wanted)
            .map(|(level, _)| *level)
            .ok_or_else(|| format!("unknown log level '{}'", s))
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    pub level: LogLevel,
    /// Timestamps on human lines.
    pub timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            format: LogFormat::Human,
            level: LogLevel::Info,
            timestamps: true,
        }
    }
}

impl LogConfig {
    /// Resolve from the process environment, then apply CLI overrides.
    pub fn from_env(cli_level: Option<LogLevel>, cli_format: Option<LogFormat>) -> Self {
        Self::from_vars(
            std::env::var(ENV_LOG_LEVEL).ok().as_deref(),
            std::env::var("RUST_LOG").ok().as_deref(),
            std::env::var(ENV_LOG_FORMAT).ok().as_deref(),
            cli_level,
            cli_format,
        )
    }

    fn from_vars(
        tunnel_log: Option<&str>,
        rust_log: Option<&str>,
        log_format: Option<&str>,
        cli_level: Option<LogLevel>,
        cli_format: Option<LogFormat>,
    ) -> Self {
        let env_level = match tunnel_log {
            Some(val) => val.parse().ok(),
            None => rust_log.and_then(LogLevel::from_directives),
        };

        LogConfig {
            level: cli_level.or(env_level).unwrap_or_default(),
            format: cli_format
                .or_else(|| log_format.and_then(|v| v.parse().ok()))
                .unwrap_or_default(),
            timestamps: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Jsonl);
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Human);
        assert!("xml".parse::<LogFormat>().is_err());
        assert_eq!(LogFormat::Jsonl.to_string(), "jsonl");
    }

    #[test]
    fn level_names_round_trip() {
        for (level, name) in LogLevel::NAMES {
            assert_eq!(name.parse::<LogLevel>().unwrap(), level);
            assert_eq!(level.to_string(), name);
        }
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("quiet".parse::<LogLevel>().unwrap(), LogLevel::Off);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn verbosity_flags() {
        assert_eq!(LogLevel::from_verbosity(false, 0), None);
        assert_eq!(LogLevel::from_verbosity(false, 1), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_verbosity(false, 3), Some(LogLevel::Trace));
        assert_eq!(LogLevel::from_verbosity(true, 2), Some(LogLevel::Error));
    }

    #[test]
    fn rust_log_directives() {
        assert_eq!(
            LogLevel::from_directives("warn,tunnel_core=debug"),
            Some(LogLevel::Debug)
        );
        assert_eq!(LogLevel::from_directives("error"), Some(LogLevel::Error));
        assert_eq!(LogLevel::from_directives("tunnel_core"), None);
    }

    #[test]
    fn tunnel_log_beats_rust_log() {
        let config = LogConfig::from_vars(Some("error"), Some("trace"), None, None, None);
        assert_eq!(config.level, LogLevel::Error);
    }

    #[test]
    fn rust_log_fallback() {
        let config = LogConfig::from_vars(None, Some("tunnel_core=debug"), None, None, None);
        assert_eq!(config.level, LogLevel::Debug);
    }

    #[test]
    fn cli_overrides_env() {
        let config = LogConfig::from_vars(
            Some("error"),
            None,
            Some("jsonl"),
            Some(LogLevel::Trace),
            Some(LogFormat::Human),
        );
        assert_eq!(config.level, LogLevel::Trace);
        assert_eq!(config.format, LogFormat::Human);
    }

    #[test]
    fn defaults_without_env() {
        assert_eq!(
            LogConfig::from_vars(None, None, None, None, None),
            LogConfig::default()
        );
        let config = LogConfig::from_vars(None, None, Some("jsonl"), None, None);
        assert_eq!(config.format, LogFormat::Jsonl);
    }
}
