//! Logging bootstrap for the tracking core.
//!
//! # Responsibility
//! - Start rolling file logs once per process and keep the handle alive.
//! - Install a panic hook so crashes leave a trace in the log file.
//!
//! # Invariants
//! - Repeat initialization with the same level and directory is a no-op.
//! - A second configuration is rejected; the first one stays active.
//! - No path through here panics; failures come back as strings.
//!
//! # See also
//! - docs/architecture/logging.md

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_BASENAME: &str = "nutrilog";
const ROTATE_AT_BYTES: u64 = 5 * 1024 * 1024;
const KEPT_LOG_FILES: usize = 7;
const PANIC_PAYLOAD_CAP: usize = 200;

static ACTIVE: OnceCell<ActiveLogging> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogging {
    level: LogLevel,
    dir: PathBuf,
    _handle: LoggerHandle,
}

/// Verbosity accepted by [`init_logging`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn parse(raw: &str) -> Result<Self, String> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!(
                "unsupported log level `{other}`; expected trace|debug|info|warn|error"
            )),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Starts file logging at `level` under `log_dir`.
///
/// The first successful call wins for the whole process. Calling again
/// with the same configuration returns `Ok(())`; any other configuration
/// is rejected so log files never move mid-session.
///
/// # Errors
/// - Unknown `level` values.
/// - Empty or relative `log_dir`, or a directory that cannot be created.
/// - Logger backend startup failures.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = LogLevel::parse(level)?;
    let dir = absolute_dir(log_dir)?;

    if let Some(state) = ACTIVE.get() {
        return ensure_matches(state, level, &dir);
    }

    let state = ACTIVE.get_or_try_init(|| start_logging(level, dir.clone()))?;
    // Another thread may have initialized first with its own configuration.
    ensure_matches(state, level, &dir)
}

/// Active `(level, log_dir)` pair, or `None` before the first successful init.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE
        .get()
        .map(|state| (state.level.as_str(), state.dir.clone()))
}

/// Level used when the embedder does not pick one.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logging(level: LogLevel, dir: PathBuf) -> Result<ActiveLogging, String> {
    std::fs::create_dir_all(&dir)
        .map_err(|err| format!("failed to create log directory `{}`: {err}", dir.display()))?;

    let handle = Logger::try_with_str(level.as_str())
        .map_err(|err| format!("invalid log level `{}`: {err}", level.as_str()))?
        .log_to_file(FileSpec::default().directory(&dir).basename(LOG_BASENAME))
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEPT_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        // detailed_format carries a timestamp and source location in front
        // of every message; log tooling keys on that column layout.
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    capture_panics_once();

    info!(
        "event=logging_start module=logging status=ok level={} dir={} os={} version={} build={}",
        level.as_str(),
        dir.display(),
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION"),
        if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        }
    );

    Ok(ActiveLogging {
        level,
        dir,
        _handle: handle,
    })
}

fn ensure_matches(state: &ActiveLogging, level: LogLevel, dir: &Path) -> Result<(), String> {
    if state.dir != dir {
        return Err(format!(
            "logging already writes to `{}`; will not switch to `{}`",
            state.dir.display(),
            dir.display()
        ));
    }
    if state.level != level {
        return Err(format!(
            "logging already runs at level `{}`; will not switch to `{}`",
            state.level.as_str(),
            level.as_str()
        ));
    }
    Ok(())
}

fn absolute_dir(raw: &str) -> Result<PathBuf, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("log_dir must not be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log_dir must be absolute, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}

fn capture_panics_once() {
    if PANIC_HOOK.get().is_some() {
        return;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let thread = std::thread::current();
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        error!(
            "event=panic_captured module=logging status=error thread={} location={} payload={}",
            thread.name().unwrap_or("unnamed"),
            location,
            describe_panic_payload(panic_info)
        );
        previous(panic_info);
    }));

    let _ = PANIC_HOOK.set(());
}

fn describe_panic_payload(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "opaque panic payload".to_string()
    };
    // Payloads can embed user text; keep the log line single-line and short.
    single_line_capped(&payload, PANIC_PAYLOAD_CAP)
}

fn single_line_capped(value: &str, max_chars: usize) -> String {
    let mut out = String::with_capacity(value.len().min(max_chars));
    for (taken, c) in value.chars().enumerate() {
        if taken == max_chars {
            out.push_str("...");
            return out;
        }
        out.push(if c.is_control() { ' ' } else { c });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{absolute_dir, init_logging, logging_status, single_line_capped, LogLevel};
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_dir(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("nutrilog-log-{tag}-{}-{nanos}", std::process::id()))
    }

    #[test]
    fn level_parsing_accepts_aliases_and_mixed_case() {
        assert_eq!(LogLevel::parse("INFO").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::parse(" warning ").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::parse("Error").unwrap(), LogLevel::Error);
        assert!(LogLevel::parse("verbose").is_err());
    }

    #[test]
    fn log_dir_must_be_absolute_and_non_empty() {
        assert!(absolute_dir("").unwrap_err().contains("empty"));
        assert!(absolute_dir("logs/dev").unwrap_err().contains("absolute"));
        assert!(absolute_dir(std::env::temp_dir().to_str().unwrap()).is_ok());
    }

    #[test]
    fn panic_payload_is_flattened_and_capped() {
        let flattened = single_line_capped("line1\nline2\rline3", 64);
        assert!(!flattened.contains('\n'));
        assert!(!flattened.contains('\r'));

        let capped = single_line_capped("abcdef", 4);
        assert_eq!(capped, "abcd...");

        let exact = single_line_capped("abcd", 4);
        assert_eq!(exact, "abcd");
    }

    #[test]
    fn first_init_wins_and_conflicts_are_rejected() {
        let dir = scratch_dir("primary");
        let dir_str = dir.to_str().expect("temp dir is valid UTF-8").to_string();
        let other = scratch_dir("other");
        let other_str = other.to_str().expect("temp dir is valid UTF-8").to_string();

        init_logging("info", &dir_str).expect("first init");
        init_logging("info", &dir_str).expect("repeat with same config");

        let level_conflict = init_logging("debug", &dir_str).unwrap_err();
        assert!(level_conflict.contains("will not switch"));

        let dir_conflict = init_logging("info", &other_str).unwrap_err();
        assert!(dir_conflict.contains("will not switch"));

        let (level, active_dir) = logging_status().expect("logging is active");
        assert_eq!(level, "info");
        assert_eq!(active_dir, dir);
    }
}
