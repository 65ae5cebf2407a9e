//! Tracing subscriber setup.
//!
//! Logging is off unless a filter directive is given. The orchestrator
//! parses stdout and stderr together, so any event written under its
//! default invocation would corrupt the result line.

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Log line encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Installs the global subscriber.
///
/// `directive` uses `RUST_LOG` syntax and falls back to
/// [`podpath_common::constants::DEFAULT_LOG_FILTER`].
pub fn init(directive: Option<&str>, format: LogFormat) {
    let filter =
        EnvFilter::new(directive.unwrap_or(podpath_common::constants::DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
