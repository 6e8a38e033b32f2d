//! Native Logging Boundary
//!
//! The host platform owns the real log writer (OSLog, Logcat, console). The
//! core hands it a tag, a severity, and a deferred message producer so the
//! host can drop filtered records without ever building the message string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// `tracing` target used by shims that write native records back into
/// `tracing`. Layers mirroring `tracing` events to a [`NativeLogger`] skip it.
pub const NATIVE_LOG_TARGET: &str = "native_log";

/// Severity understood by the native logger.
///
/// Ordered from most verbose to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LogLevel {
    Verbose,
    Debug,
    Info,
    Warning,
    Error,
    Assert,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Verbose => "VERBOSE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Assert => "ASSERT",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deferred message producer.
///
/// Called at most once, and only if the native side decides to emit the record.
pub type MessageProvider = Box<dyn FnOnce() -> String + Send>;

/// Native logging entry point
///
/// Implemented by each host:
/// - **iOS**: wrapper logger over OSLog
/// - **Android**: Logcat
/// - **Desktop**: `tracing` (see `bridge-desktop`)
///
/// Logging is fire-and-forget: the entry point has no error channel, and a
/// failing sink must swallow its own errors.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::log::{LogLevel, NativeLogger};
///
/// fn warn(logger: &dyn NativeLogger, tag: &str, msg: String) {
///     logger.log(Box::new(move || msg), tag, LogLevel::Warning);
/// }
/// ```
pub trait NativeLogger: Send + Sync {
    /// Emit one record.
    fn log(&self, provider: MessageProvider, tag: &str, level: LogLevel);

    /// Lowest level the sink will emit.
    ///
    /// Callers may skip work for records below this level.
    fn min_level(&self) -> LogLevel {
        LogLevel::Verbose
    }

    /// Whether a record at `level` would be emitted.
    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level()
    }
}
