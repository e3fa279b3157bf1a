//! Logging setup built on tracing.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the crate's own targets (default: INFO)
    pub level: Level,
    /// Whether to use json format for logs (default: false)
    pub json_format: bool,
    /// Whether to colorize logs when output is a terminal (default: true)
    pub colorize: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            colorize: true,
        }
    }
}

/// Initialize the logging system with the given configuration.
///
/// `RUST_LOG` overrides the configured level when set. Safe to call more
/// than once; later calls are no-ops.
pub fn init_logging(config: LoggingConfig) {
    let level_filter = match config.level {
        Level::TRACE => "trace",
        Level::DEBUG => "debug",
        Level::INFO => "info",
        Level::WARN => "warn",
        Level::ERROR => "error",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("genchain={}", level_filter)));

    let builder = fmt()
        .with_env_filter(env_filter)
        .with_ansi(config.colorize)
        .with_target(true);

    // try_init so embedding applications keep their own subscriber
    let result = if config.json_format {
        builder.json().flatten_event(true).try_init()
    } else {
        builder.try_init()
    };
    let _ = result;
}
