//! Tracing initialization.
//! Builds a subscriber with EnvFilter, compact or JSON stdout formatting, and
//! an optional non-blocking file layer.
//!
//! Behavior:
//! - Log level is driven by LogLevel (no RUST_LOG override here).
//! - If a log file cannot be opened, we warn and continue on stdout only.
//! - The returned WorkerGuard must live until exit so file logs are flushed.

use anyhow::Result;
use chrono::Local;
use std::fmt as stdfmt;
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LogLevel;
use crate::output as out;

/// Human-friendly local timestamps (YY-MM-DD HH:MM:SS).
struct LocalShortTime;
impl FormatTime for LocalShortTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> stdfmt::Result {
        write!(w, "{}", Local::now().format("%y-%m-%d %H:%M:%S"))
    }
}

fn level_filter(lvl: &LogLevel) -> LevelFilter {
    match lvl {
        LogLevel::Quiet => LevelFilter::ERROR,
        LogLevel::Normal => LevelFilter::INFO,
        LogLevel::Info => LevelFilter::DEBUG,
        LogLevel::Debug => LevelFilter::TRACE,
    }
}

/// Open a non-blocking appender for `path`. Parent directories are created
/// best-effort; on failure we fall back to stdout-only logging.
fn open_non_blocking(path: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    match fs::OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => {
            let (writer, guard) = tracing_appender::non_blocking(file);
            Some((writer, guard))
        }
        Err(e) => {
            out::print_warn(&format!(
                "Failed to open log file '{}': {}; logging to stdout only.",
                path.display(),
                e
            ));
            None
        }
    }
}

/// Initialize tracing from LogLevel and format flags. Returns the worker
/// guard when a file appender was attached.
pub fn init_tracing(
    lvl: &LogLevel,
    log_file: Option<&Path>,
    json: bool,
) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::default().add_directive(level_filter(lvl).into());

    match (log_file.and_then(open_non_blocking), json) {
        (Some((writer, guard)), true) => {
            registry()
                .with(filter)
                .with(tsfmt::layer().json().with_timer(LocalShortTime))
                .with(
                    tsfmt::layer()
                        .json()
                        .with_timer(LocalShortTime)
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .init();
            Ok(Some(guard))
        }
        (Some((writer, guard)), false) => {
            registry()
                .with(filter)
                .with(tsfmt::layer().compact().with_timer(LocalShortTime))
                .with(
                    tsfmt::layer()
                        .compact()
                        .with_timer(LocalShortTime)
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .init();
            Ok(Some(guard))
        }
        (None, true) => {
            registry()
                .with(filter)
                .with(tsfmt::layer().json().with_timer(LocalShortTime))
                .init();
            Ok(None)
        }
        (None, false) => {
            registry()
                .with(filter)
                .with(tsfmt::layer().compact().with_timer(LocalShortTime))
                .init();
            Ok(None)
        }
    }
}
