//! Logging setup for drizzle.
//!
//! Events go to stderr, and optionally to a daily-rotating file as well.
//! `RUST_LOG` overrides the default `info` level.
//!
//! ```no_run
//! drizzle::logging::init(None).expect("Failed to initialize logging");
//! tracing::info!("Ready");
//! ```

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

const LOG_PREFIX: &str = "drizzle";
const LOG_SUFFIX: &str = "log";

/// Platform log directory:
/// - Windows: `%APPDATA%/drizzle/logs`
/// - macOS: `~/Library/Application Support/drizzle/logs`
/// - Linux: `~/.local/share/drizzle/logs`
pub fn default_log_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_dir().context("Failed to determine data directory")?;
    Ok(base_dir.join("drizzle").join("logs"))
}

/// Install the global subscriber. With `file_dir` set, events are also
/// written to `<file_dir>/drizzle.<date>.log`, keeping the last 10 files.
///
/// # Errors
///
/// Returns error if the log directory or file appender cannot be created.
pub fn init(file_dir: Option<&Path>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("Failed to create env filter")?;

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let file_layer = match file_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .max_log_files(10)
                .filename_prefix(LOG_PREFIX)
                .filename_suffix(LOG_SUFFIX)
                .build(dir)
                .context("Failed to create log file appender")?;

            Some(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_ansi(false)
                    .with_writer(appender),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Logging already initialized")?;

    if let Some(dir) = file_dir {
        tracing::debug!("Writing logs to {}", current_log_path(dir).display());
    }
    Ok(())
}

/// Path of today's log file inside `dir`.
pub fn current_log_path(dir: &Path) -> PathBuf {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    dir.join(format!("{LOG_PREFIX}.{today}.{LOG_SUFFIX}"))
}
