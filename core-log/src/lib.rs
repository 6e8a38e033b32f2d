//! # SDK Log Façade
//!
//! Leveled logging calls that forward straight to the host's
//! [`NativeLogger`]. Each call wraps the message in a deferred producer so the
//! native side can drop filtered records without building the string.
//!
//! Two entry points:
//! - [`Logger`] - an instance bound to one native logger
//! - [`sdk_log`] - process-wide static functions backed by an installed logger
//!
//! ```ignore
//! use core_log::{sdk_log, Logger};
//! use std::sync::Arc;
//!
//! sdk_log::install(Arc::new(MyHostLogger));
//! sdk_log::warn("Data", "Offline, serving cached document");
//! ```

pub mod sdk_log;

use bridge_traits::log::{LogLevel, NativeLogger};
use std::sync::Arc;

/// Leveled façade over a [`NativeLogger`].
#[derive(Clone)]
pub struct Logger {
    native: Arc<dyn NativeLogger>,
}

impl Logger {
    pub fn new(native: Arc<dyn NativeLogger>) -> Self {
        Self { native }
    }

    pub fn verbose(&self, tag: &str, message: &str) {
        self.forward(tag, message, LogLevel::Verbose);
    }

    pub fn debug(&self, tag: &str, message: &str) {
        self.forward(tag, message, LogLevel::Debug);
    }

    pub fn info(&self, tag: &str, message: &str) {
        self.forward(tag, message, LogLevel::Info);
    }

    pub fn warn(&self, tag: &str, message: &str) {
        self.forward(tag, message, LogLevel::Warning);
    }

    pub fn error(&self, tag: &str, message: &str) {
        self.forward(tag, message, LogLevel::Error);
    }

    /// Log a condition that should never happen.
    pub fn assert(&self, tag: &str, message: &str) {
        self.forward(tag, message, LogLevel::Assert);
    }

    fn forward(&self, tag: &str, message: &str, level: LogLevel) {
        forward(self.native.as_ref(), tag, message, level);
    }
}

pub(crate) fn forward(native: &dyn NativeLogger, tag: &str, message: &str, level: LogLevel) {
    let message = message.to_owned();
    native.log(Box::new(move || message), tag, level);
}
