//! Log file setup.
//!
//! The terminal belongs to the UI, so there is no console layer. Filtering
//! follows `RUST_LOG` (default `info`), e.g. `RUST_LOG=ahkmap::label=debug`.
//! Logs go to `<data_dir>/ahkmap/logs/ahkmap.log`, rotated daily.

use std::fs;
use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn logs_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ahkmap")
        .join("logs")
}

/// Install the global subscriber. Failing to create the log directory
/// leaves logging disabled rather than aborting startup.
pub fn init() {
    let dir = logs_dir();
    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!("Warning: Could not initialize file logging: {e}");
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_appender = tracing_appender::rolling::daily(dir, "ahkmap.log");
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(file_layer).init();
}
