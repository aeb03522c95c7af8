//! Opt-in diagnostics. Nothing touches disk unless `--logs` (or `COMMITTERM_LOGS`) is set.
//!
//! A single `tracing` subscriber feeds two temp files: a plain-text debug log and a JSON
//! trace. Events raised inside a generation worker sit under its `generation{job_id=..}` span,
//! so both files attribute each line to a job. Panics go to a separate crash log.

use crate::config::AppConfig;
use std::{
    env,
    fs::{self, File, OpenOptions},
    io::{self, Write},
    panic,
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex, OnceLock,
    },
};
use tracing::Level;
use tracing_subscriber::{
    filter::Targets,
    fmt::{self, time::UtcTime, MakeWriter},
    prelude::*,
};

const CRATE_TARGET: &str = "committerm";
const TRACE_LOG_ENV: &str = "COMMITTERM_TRACE_LOG";

static LOG_ENABLED: AtomicBool = AtomicBool::new(false);
static LOG_CONTENT_ENABLED: AtomicBool = AtomicBool::new(false);
static SUBSCRIBER: OnceLock<()> = OnceLock::new();

static DEBUG_LOG: LogFile = LogFile::new(log_file_path, 5 * 1024 * 1024);
static TRACE_LOG: LogFile = LogFile::new(trace_log_path, 5 * 1024 * 1024);
static CRASH_LOG: LogFile = LogFile::new(crash_log_path, 256 * 1024);

pub(crate) fn log_file_path() -> PathBuf {
    env::temp_dir().join("committerm_tui.log")
}

pub(crate) fn trace_log_path() -> PathBuf {
    env::var(TRACE_LOG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("committerm_trace.jsonl"))
}

fn crash_log_path() -> PathBuf {
    env::temp_dir().join("committerm_crash.log")
}

/// Append-only temp file, opened on first write. When the next write would push it past
/// `max_bytes` it is truncated and starts over.
struct LogFile {
    path: fn() -> PathBuf,
    max_bytes: u64,
    open: Mutex<Option<OpenLog>>,
}

struct OpenLog {
    file: File,
    len: u64,
}

impl LogFile {
    const fn new(path: fn() -> PathBuf, max_bytes: u64) -> Self {
        Self {
            path,
            max_bytes,
            open: Mutex::new(None),
        }
    }

    fn append(&self, bytes: &[u8]) {
        if !LOG_ENABLED.load(Ordering::Relaxed) {
            return;
        }
        let incoming = bytes.len() as u64;
        let mut open = self.open.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let full = open
            .as_ref()
            .is_some_and(|log| log.len.saturating_add(incoming) > self.max_bytes);
        if open.is_none() || full {
            *open = self.reopen(full, incoming);
        }
        if let Some(log) = open.as_mut() {
            if log.file.write_all(bytes).is_ok() {
                log.len = log.len.saturating_add(incoming);
            }
        }
    }

    fn reopen(&self, full: bool, incoming: u64) -> Option<OpenLog> {
        let path = (self.path)();
        let existing = fs::metadata(&path).map(|meta| meta.len()).unwrap_or(0);
        let truncate = full || existing.saturating_add(incoming) > self.max_bytes;
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(!truncate)
            .truncate(truncate)
            .open(&path)
            .ok()?;
        Some(OpenLog {
            file,
            len: if truncate { 0 } else { existing },
        })
    }

    fn close(&self) {
        *self.open.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }
}

/// `MakeWriter` over one of the static log files.
#[derive(Clone, Copy)]
struct LogFileWriter(&'static LogFile);

impl Write for LogFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.append(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogFileWriter {
    type Writer = LogFileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        *self
    }
}

fn install_subscriber() {
    SUBSCRIBER.get_or_init(|| {
        let debug = fmt::layer()
            .with_ansi(false)
            .with_timer(UtcTime::rfc_3339())
            .with_writer(LogFileWriter(&DEBUG_LOG))
            .with_filter(Targets::new().with_target(CRATE_TARGET, Level::DEBUG));
        let trace = fmt::layer()
            .json()
            .with_timer(UtcTime::rfc_3339())
            .with_current_span(true)
            .with_span_list(false)
            .with_writer(LogFileWriter(&TRACE_LOG))
            .with_filter(Targets::new().with_target(CRATE_TARGET, Level::INFO));
        let subscriber = tracing_subscriber::registry().with(debug).with(trace);
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

fn configure(enabled: bool, content_enabled: bool) {
    LOG_ENABLED.store(enabled, Ordering::Relaxed);
    LOG_CONTENT_ENABLED.store(enabled && content_enabled, Ordering::Relaxed);
    for log in [&DEBUG_LOG, &TRACE_LOG, &CRASH_LOG] {
        log.close();
    }
    if enabled {
        install_subscriber();
    }
}

/// Apply the log flags. `--no-logs` wins over `--logs`.
pub fn init_logging(config: &AppConfig) {
    configure(config.logs && !config.no_logs, config.log_content);
}

/// Debug line for the log file; the TUI owns the terminal, so nothing goes to stderr.
pub fn log_debug(msg: &str) {
    if !LOG_ENABLED.load(Ordering::Relaxed) {
        return;
    }
    tracing::debug!(target: CRATE_TARGET, "{msg}");
}

/// Like `log_debug`, for lines carrying prompt, diff, or model output. Needs `--log-content`.
pub fn log_debug_content(msg: &str) {
    if !LOG_CONTENT_ENABLED.load(Ordering::Relaxed) {
        return;
    }
    log_debug(msg);
}

/// Crash log entry: location and version, plus the payload only with `--log-content`.
pub fn log_panic(info: &panic::PanicHookInfo<'_>) {
    if !LOG_ENABLED.load(Ordering::Relaxed) {
        return;
    }
    let location = info
        .location()
        .map(|loc| format!("{}:{}", loc.file(), loc.line()))
        .unwrap_or_else(|| "unknown".to_string());
    let payload = if LOG_CONTENT_ENABLED.load(Ordering::Relaxed) {
        info.payload()
            .downcast_ref::<&str>()
            .map(|text| (*text).to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string())
    } else {
        "payload omitted".to_string()
    };
    let thread = std::thread::current();
    let line = format!(
        "{} panic on thread {} at {location}: {payload} (v{})\n",
        UtcNow,
        thread.name().unwrap_or("unnamed"),
        env!("CARGO_PKG_VERSION")
    );
    CRASH_LOG.append(line.as_bytes());
}

/// RFC 3339 timestamp for lines written outside the subscriber.
struct UtcNow;

impl std::fmt::Display for UtcNow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use tracing_subscriber::fmt::{format::Writer, time::FormatTime};
        UtcTime::rfc_3339().format_time(&mut Writer::new(f))
    }
}

#[cfg(test)]
pub(crate) fn set_logging_for_tests(enabled: bool, content_enabled: bool) {
    configure(enabled, content_enabled);
}
