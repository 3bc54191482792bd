//! File logging bootstrap
//!
//! The browser owns the terminal, so log records go to a rotating file under
//! the user's data directory instead of stderr. Events are written as
//! `event=<name> module=<area> key=value ...` so they can be grepped.
//!
//! Initialisation happens once per process; repeating it with the same
//! settings is a no-op and changing them afterwards is rejected.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use thiserror::Error;

const LOG_FILE_BASENAME: &str = "postdeck";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Errors raised while setting up logging
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Level string is not one of trace, debug, info, warn, error
    #[error("unsupported log level `{0}`; expected trace|debug|info|warn|error")]
    UnsupportedLevel(String),

    /// No usable log directory
    #[error("could not determine log directory")]
    NoLogDir,

    /// Log directory could not be created
    #[error("failed to create log directory `{path}`: {source}")]
    CreateDir {
        /// Directory that was being created
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Logger backend failed to start
    #[error("failed to start logger: {0}")]
    Backend(#[from] flexi_logger::FlexiLoggerError),

    /// Logging is already running with different settings
    #[error("logging already initialized with {current}; refusing to switch to {requested}")]
    AlreadyInitialized {
        /// Active setting
        current: String,
        /// Setting that was asked for
        requested: String,
    },
}

/// Result type for logging setup
pub type Result<T> = std::result::Result<T, LoggingError>;

/// Start file logging at `level` in `log_dir`
///
/// # Errors
///
/// Returns a [`LoggingError`] when `level` is unsupported, the directory
/// cannot be created, the backend fails to start, or logging was already
/// started with another level or directory.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<()> {
    let level = normalize_level(level)?;

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState> {
        std::fs::create_dir_all(log_dir).map_err(|source| LoggingError::CreateDir {
            path: log_dir.to_path_buf(),
            source,
        })?;

        let logger = Logger::try_with_str(level)?
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
            .format_for_files(flexi_logger::detailed_format)
            .start()?;

        install_panic_hook_once();

        log::info!(
            "event=app_start module=logging status=ok platform={} build_mode={} version={}",
            std::env::consts::OS,
            build_mode(),
            env!("CARGO_PKG_VERSION")
        );
        log::info!(
            "event=logging_init module=logging status=ok level={} log_dir={}",
            level,
            log_dir.display()
        );

        Ok(LoggingState {
            level,
            log_dir: log_dir.to_path_buf(),
            _logger: logger,
        })
    })?;

    if state.log_dir != log_dir {
        return Err(LoggingError::AlreadyInitialized {
            current: format!("directory `{}`", state.log_dir.display()),
            requested: format!("`{}`", log_dir.display()),
        });
    }
    if state.level != level {
        return Err(LoggingError::AlreadyInitialized {
            current: format!("level `{}`", state.level),
            requested: format!("`{level}`"),
        });
    }

    Ok(())
}

/// `<data_local_dir>/postdeck/logs`
///
/// # Errors
///
/// Returns [`LoggingError::NoLogDir`] if the platform has no data directory.
pub fn default_log_dir() -> Result<PathBuf> {
    dirs::data_local_dir()
        .map(|dir| dir.join("postdeck").join("logs"))
        .ok_or(LoggingError::NoLogDir)
}

/// `debug` in debug builds, `info` otherwise
#[must_use]
pub const fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) { "debug" } else { "info" }
}

/// Canonical spelling of a log level
///
/// # Errors
///
/// Returns [`LoggingError::UnsupportedLevel`] for anything other than the
/// five `log` levels (`warning` is accepted for `warn`).
pub fn normalize_level(level: &str) -> Result<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::UnsupportedLevel(other.to_string())),
    }
}

const fn build_mode() -> &'static str {
    if cfg!(debug_assertions) { "debug" } else { "release" }
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.get().is_some() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map_or_else(|| "unknown".to_string(), |loc| format!("{}:{}", loc.file(), loc.line()));
        let payload = panic_payload_summary(panic_info);
        log::error!("event=panic_captured module=logging status=error location={location} payload={payload}");
        previous_hook(panic_info);
    }));

    let _ = PANIC_HOOK_INSTALLED.set(());
}

fn panic_payload_summary(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };

    sanitize_message(&payload, MAX_PANIC_PAYLOAD_CHARS)
}

fn sanitize_message(value: &str, max_chars: usize) -> String {
    let normalized = value.replace(['\n', '\r'], " ");
    let mut truncated = normalized.chars().take(max_chars).collect::<String>();
    if normalized.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_level() {
        assert_eq!(normalize_level("INFO").unwrap(), "info");
        assert_eq!(normalize_level(" warning ").unwrap(), "warn");
        assert!(matches!(
            normalize_level("loud"),
            Err(LoggingError::UnsupportedLevel(level)) if level == "loud"
        ));
    }

    #[test]
    fn test_sanitize_message() {
        let sanitized = sanitize_message("line1\nline2\rline3", 8);
        assert!(!sanitized.contains('\n'));
        assert!(!sanitized.contains('\r'));
        assert!(sanitized.ends_with("..."));
        assert_eq!(sanitize_message("short", 8), "short");
    }

    #[test]
    fn test_default_log_dir_ends_with_postdeck_logs() {
        if let Ok(dir) = default_log_dir() {
            assert!(dir.ends_with("postdeck/logs"));
        }
    }

    #[test]
    fn test_init_is_idempotent_and_rejects_conflicts() {
        let dir = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();

        init_logging("info", dir.path()).unwrap();
        init_logging("INFO", dir.path()).unwrap();

        assert!(matches!(
            init_logging("debug", dir.path()),
            Err(LoggingError::AlreadyInitialized { .. })
        ));
        assert!(matches!(
            init_logging("info", other.path()),
            Err(LoggingError::AlreadyInitialized { .. })
        ));

        let state = LOGGING_STATE.get().unwrap();
        assert_eq!(state.level, "info");
        assert_eq!(state.log_dir, dir.path());
    }
}
