//! tracing setup.
//!
//! The TUI owns the terminal, so in that mode logs go to a daily rotated
//! file under the data dir, written off the runtime threads. Headless
//! commands log to stderr. `RUST_LOG` overrides the default filter.

use anyhow::Context;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "dashtune=info,warn";
const LOG_FILE_PREFIX: &str = "dashtune";
const LOG_FILE_SUFFIX: &str = "log";
const MAX_LOG_FILES: usize = 7;

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn init_stderr() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("init logging: {e}"))
}

fn file_appender(data_dir: &Path) -> anyhow::Result<RollingFileAppender> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("create dir {}", data_dir.display()))?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(data_dir)
        .with_context(|| format!("open log appender in {}", data_dir.display()))
}

/// Log to `<data_dir>/dashtune.YYYY-MM-DD.log`.
///
/// Buffered lines are flushed when the returned guard drops, so the caller
/// keeps it alive until exit.
pub fn init_file(data_dir: &Path) -> anyhow::Result<WorkerGuard> {
    let (writer, guard) = tracing_appender::non_blocking(file_appender(data_dir)?);

    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter())
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("init logging: {e}"))?;

    tracing::info!("logging to {}/", data_dir.display());
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_appender_writes_dated_file() {
        let dir = std::env::temp_dir().join(format!("dashtune-log-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let mut appender = file_appender(&dir).unwrap();
        appender.write_all(b"hello\n").unwrap();
        appender.flush().unwrap();

        let names: Vec<String> = std::fs::read_dir(&dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("dashtune."));
        assert!(names[0].ends_with(".log"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
