use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::model::LogConfig;

/// Environment variable holding an EnvFilter directive
pub const LOG_ENV: &str = "TODOCHAIN_LOG";

const LOG_FILE_NAME: &str = "todochain.log";

/// Initialize file logging for the TUI session.
///
/// The terminal belongs to the TUI, so events go to a log file through a
/// non-blocking writer. The returned guard flushes on drop and must be held
/// until exit. Returns `None` (logging disabled) if the log directory cannot
/// be created.
pub fn init_logging(cli_level: Option<&str>, config: &LogConfig) -> Option<WorkerGuard> {
    let path = log_file_path(config)?;
    let dir = path.parent()?;
    if std::fs::create_dir_all(dir).is_err() {
        return None;
    }
    let file_name = path.file_name()?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_level = std::env::var(LOG_ENV).ok();
    let filter = build_env_filter(cli_level, env_level.as_deref(), config.level.as_deref());

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true),
    );

    // Already set (e.g. by an embedding test): keep the guard alive anyway
    let _ = tracing::subscriber::set_global_default(subscriber);

    Some(guard)
}

/// Configured log file, else `<data dir>/todochain/todochain.log`
pub fn log_file_path(config: &LogConfig) -> Option<PathBuf> {
    match &config.file {
        Some(file) => Some(Path::new(file).to_path_buf()),
        None => dirs::data_dir().map(|d| d.join("todochain").join(LOG_FILE_NAME)),
    }
}

/// Build an EnvFilter with precedence: CLI flag > env var > config > "warn"
fn build_env_filter(
    cli_level: Option<&str>,
    env_level: Option<&str>,
    config_level: Option<&str>,
) -> EnvFilter {
    [cli_level, env_level, config_level]
        .into_iter()
        .flatten()
        .find_map(|level| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}
