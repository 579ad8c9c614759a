//! File-based logging module for entertain-rs
//!
//! This module sets up tracing-based logging that writes to a file instead of stdout,
//! since the application uses a TUI that occupies the terminal.

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const LOG_DIR: &str = ".logs";
const LOG_FILE_PREFIX: &str = "entertain-rs";
const DEFAULT_FILTER: &str = "entertain_rs=debug,reqwest=info,warn";

/// Initialize the logging system.
///
/// Logs are written to `.logs/entertain-rs.YYYY-MM-DD.log` with daily rotation.
/// `RUST_LOG` takes precedence, then the config file's `logging.filter`, then
/// the built-in default.
pub fn init_logging(config_filter: Option<&str>) -> anyhow::Result<()> {
    let log_dir = Path::new(LOG_DIR);
    if !log_dir.exists() {
        std::fs::create_dir_all(log_dir)?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // The guard flushes on drop, so it has to live as long as the process
    Box::leak(Box::new(guard));

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config_filter.unwrap_or(DEFAULT_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!("Logging initialized - logs written to {}/", LOG_DIR);

    Ok(())
}

/// Log the start of a provider fetch
#[macro_export]
macro_rules! log_fetch_request {
    ($ticket:expr, $url:expr) => {
        tracing::debug!(
            generation = $ticket.generation,
            category = %$ticket.category,
            subgenre = %$ticket.subgenre,
            url = %$url,
            "Fetch started"
        );
    };
}

/// Log a provider fetch and its result
#[macro_export]
macro_rules! log_fetch_result {
    ($ticket:expr, $result:expr) => {
        match &$result {
            Ok(recommendations) => tracing::info!(
                category = %$ticket.category,
                subgenre = %$ticket.subgenre,
                count = recommendations.len(),
                "Fetch succeeded"
            ),
            Err(e) => tracing::warn!(
                category = %$ticket.category,
                subgenre = %$ticket.subgenre,
                error = %e,
                "Fetch failed"
            ),
        }
    };
}
