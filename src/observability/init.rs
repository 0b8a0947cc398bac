//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::infrastructure::paths;
use crate::Config;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber writing to a rotating log file.
///
/// # Initialization Behavior
///
/// - Creates the log file's parent directory if needed
/// - Silently gives up if that fails (logging is optional)
/// - Idempotent: only the first successful call takes effect
///
/// # Example
///
/// ```rust,no_run
/// use mdi_picker::observability::init_tracing;
/// use mdi_picker::Config;
///
/// let config = Config {
///     trace_level: Some("mdi_picker=debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let trace_file = config
        .trace_file
        .as_deref()
        .map_or_else(paths::default_trace_file, paths::expand_tilde);

    if let Some(parent) = trace_file.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let writer = Arc::new(FileWriter::new(trace_file));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true),
    );

    let _ = subscriber.try_init();
}
