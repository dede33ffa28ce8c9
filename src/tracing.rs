//! Logging setup
//!
//! The console gets warnings by default (`info` with `--verbose`), and
//! `RUST_LOG` overrides both:
//! - `RUST_LOG=message=debug` - every processed message
//! - `RUST_LOG=model=debug` - row count / page changes
//! - `RUST_LOG=bookcsv::csv=trace` - module-level filtering
//!
//! The file log always records debug output under
//! `~/.config/bookcsv/logs/bookcsv.log.YYYY-MM-DD`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::{ensure_logs_dir, LOG_FILE_NAME};

/// Install the console and file layers.
///
/// Console output goes to stderr so it never mixes with rendered pages.
pub fn init(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time()
        .with_filter(console_filter);

    let file_layer = match ensure_logs_dir() {
        Ok(logs_dir) => Some(
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(logs_dir, LOG_FILE_NAME))
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new("debug")),
        ),
        Err(e) => {
            eprintln!("Warning: file logging disabled: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
