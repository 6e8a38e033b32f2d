//! Native logger backed by `tracing`.

use bridge_traits::log::{LogLevel, MessageProvider, NativeLogger, NATIVE_LOG_TARGET};
use tracing::{debug, error, info, trace, warn};

/// Writes native log records as `tracing` events under [`NATIVE_LOG_TARGET`].
///
/// `Assert` records are emitted at `ERROR` with `assert = true`.
#[derive(Debug, Clone)]
pub struct TracingNativeLogger {
    min_level: LogLevel,
}

impl TracingNativeLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

impl Default for TracingNativeLogger {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl NativeLogger for TracingNativeLogger {
    fn log(&self, provider: MessageProvider, tag: &str, level: LogLevel) {
        if !self.is_enabled(level) {
            return;
        }

        let message = provider();
        match level {
            LogLevel::Verbose => trace!(target: NATIVE_LOG_TARGET, tag, "{}", message),
            LogLevel::Debug => debug!(target: NATIVE_LOG_TARGET, tag, "{}", message),
            LogLevel::Info => info!(target: NATIVE_LOG_TARGET, tag, "{}", message),
            LogLevel::Warning => warn!(target: NATIVE_LOG_TARGET, tag, "{}", message),
            LogLevel::Error => error!(target: NATIVE_LOG_TARGET, tag, "{}", message),
            LogLevel::Assert => {
                error!(target: NATIVE_LOG_TARGET, tag, assert = true, "{}", message)
            }
        }
    }

    fn min_level(&self) -> LogLevel {
        self.min_level
    }
}
