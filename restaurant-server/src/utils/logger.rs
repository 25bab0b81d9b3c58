//! Logging setup
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies to this
//! crate and to `tower_http`.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber: console output, or daily rolling files
/// under `log_dir` when that directory exists
pub fn init_logger_with_file(log_level: &str, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("restaurant_server={log_level},shared={log_level},tower_http={log_level}").into()
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false);

    if let Some(dir) = log_dir.map(Path::new).filter(|p| p.is_dir()) {
        let file_appender = tracing_appender::rolling::daily(dir, "restaurant-server");
        let _ = subscriber
            .with_ansi(false)
            .with_writer(file_appender)
            .try_init();
        return;
    }

    // A subscriber may already be installed (tests)
    let _ = subscriber.try_init();
}
