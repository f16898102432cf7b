//! File logging bootstrap.
//!
//! # Responsibility
//! - Initialize rotating file logs exactly once per process.
//!
//! # Invariants
//! - Re-initialization with the same directory is idempotent.
//! - Re-initialization with a different directory is rejected.
//! - Initialization never panics.

use std::path::{Path, PathBuf};

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;

const LOG_FILE_BASENAME: &str = "meetlog";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Initializes file logging with the given level filter and directory.
///
/// # Errors
/// - Returns an error when `level` is not one of
///   `trace|debug|info|warn|error`.
/// - Returns an error when the directory cannot be created or the logger
///   backend fails to start.
/// - Returns an error when logging was already initialized with a different
///   directory.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<(), String> {
    let level = normalize_level(level)?;

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, String> {
        std::fs::create_dir_all(log_dir).map_err(|err| {
            format!(
                "failed to create log directory `{}`: {err}",
                log_dir.display()
            )
        })?;

        let logger = Logger::try_with_str(level)
            .map_err(|err| format!("invalid log level `{level}`: {err}"))?
            .log_to_file(
                FileSpec::default()
                    .directory(log_dir)
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;

        info!(
            "event=core_init status=ok level={level} log_dir={} version={}",
            log_dir.display(),
            env!("CARGO_PKG_VERSION")
        );

        Ok(LoggingState {
            log_dir: log_dir.to_path_buf(),
            _logger: logger,
        })
    })?;

    if state.log_dir != log_dir {
        return Err(format!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            state.log_dir.display(),
            log_dir.display()
        ));
    }

    Ok(())
}

/// Default log level for the current build mode.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}
