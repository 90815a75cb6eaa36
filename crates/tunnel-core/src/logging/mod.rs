//! Logging for tunnel-core.
//!
//! Log lines always go to stderr so stdout carries only the command
//! payload. Interactive runs get fmt-style lines; `TUNNEL_LOG_FORMAT=jsonl`
//! switches to one JSON object per event (see [`JsonlLayer`]).
//!
//! ```ignore
//! init_logging(&LogConfig::from_env(None, None));
//! let ctx = LogContext::new(generate_run_id());
//! log_event!(ctx, INFO, event_names::DATASET_LOADED, Stage::Load, "dataset ready",
//!     pitches = 2048);
//! ```

pub mod config;
pub mod events;
pub mod layer;

pub use config::{LogConfig, LogFormat, LogLevel};
pub use events::{event_names, Level, LogContext, LogEvent, Stage};
pub use layer::JsonlLayer;

use std::io::IsTerminal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Install the global subscriber. Call once, before the first event.
///
/// A set `RUST_LOG` is used verbatim as the filter; otherwise the filter is
/// the bare level from `config`.
pub fn init_logging(config: &LogConfig) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(config.level.as_str()),
    };

    let output = match config.format {
        LogFormat::Jsonl => JsonlLayer::stderr().boxed(),
        LogFormat::Human => {
            let lines = fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false);
            if config.timestamps {
                lines.boxed()
            } else {
                lines.without_time().boxed()
            }
        }
    };

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(output.with_filter(filter))
        .try_init();
}

/// `run-` followed by twelve hex digits of a v4 UUID.
pub fn generate_run_id() -> String {
    let hex = uuid::Uuid::new_v4().simple().to_string();
    format!("run-{}", &hex[..12])
}

/// Emit a tracing event whose target is the event name, with the
/// context's run id and the pipeline stage attached.
///
/// ```ignore
/// log_event!(ctx, DEBUG, event_names::ANALYSIS_FINISHED, Stage::Compare, "done",
///     pairs = 3);
/// ```
#[macro_export]
macro_rules! log_event {
    ($ctx:expr, $level:ident, $event:expr, $stage:expr, $msg:expr $(, $key:ident = $val:expr)*) => {
        tracing::event!(
            target: $event,
            tracing::Level::$level,
            run_id = %$ctx.run_id,
            stage = %$stage,
            message = $msg,
            $($key = $val,)*
        )
    };
}
