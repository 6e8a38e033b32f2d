//! Process-wide static log façade.
//!
//! Hosts install their native logger once at start-up; SDK code anywhere in
//! the process can then log without threading a [`Logger`](crate::Logger)
//! through. Calls made before installation are dropped and their message is
//! never produced.

use bridge_traits::log::{LogLevel, NativeLogger};
use std::sync::{Arc, RwLock};

static NATIVE: RwLock<Option<Arc<dyn NativeLogger>>> = RwLock::new(None);

/// Install (or replace) the native logger behind the static façade.
pub fn install(native: Arc<dyn NativeLogger>) {
    let mut slot = NATIVE.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *slot = Some(native);
}

/// Remove the installed logger, returning it.
pub fn uninstall() -> Option<Arc<dyn NativeLogger>> {
    let mut slot = NATIVE.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    slot.take()
}

pub fn is_installed() -> bool {
    current().is_some()
}

fn current() -> Option<Arc<dyn NativeLogger>> {
    NATIVE
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

fn dispatch(tag: &str, message: &str, level: LogLevel) {
    if let Some(native) = current() {
        crate::forward(native.as_ref(), tag, message, level);
    }
}

pub fn verbose(tag: &str, message: &str) {
    dispatch(tag, message, LogLevel::Verbose);
}

pub fn debug(tag: &str, message: &str) {
    dispatch(tag, message, LogLevel::Debug);
}

pub fn info(tag: &str, message: &str) {
    dispatch(tag, message, LogLevel::Info);
}

pub fn warn(tag: &str, message: &str) {
    dispatch(tag, message, LogLevel::Warning);
}

pub fn error(tag: &str, message: &str) {
    dispatch(tag, message, LogLevel::Error);
}

pub fn assert(tag: &str, message: &str) {
    dispatch(tag, message, LogLevel::Assert);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::log::MessageProvider;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        records: Mutex<Vec<(String, LogLevel, String)>>,
    }

    impl NativeLogger for Recorder {
        fn log(&self, provider: MessageProvider, tag: &str, level: LogLevel) {
            self.records
                .lock()
                .unwrap()
                .push((tag.to_string(), level, provider()));
        }
    }

    // The slot is process-global; keep every assertion on it in one test.
    #[test]
    fn test_static_facade_lifecycle() {
        uninstall();
        assert!(!is_installed());
        info("Early", "dropped before install");

        let recorder = Arc::new(Recorder::default());
        install(recorder.clone());
        assert!(is_installed());

        verbose("Sdk", "v");
        debug("Sdk", "d");
        info("Sdk", "i");
        warn("Sdk", "w");
        error("Sdk", "e");
        assert("Sdk", "a");

        let removed = uninstall();
        assert!(removed.is_some());
        info("Late", "dropped after uninstall");

        let records = recorder.records.lock().unwrap();
        let levels: Vec<LogLevel> = records.iter().map(|r| r.1).collect();
        assert_eq!(
            levels,
            vec![
                LogLevel::Verbose,
                LogLevel::Debug,
                LogLevel::Info,
                LogLevel::Warning,
                LogLevel::Error,
                LogLevel::Assert,
            ]
        );
        assert!(records.iter().all(|r| r.0 == "Sdk"));
        assert_eq!(records[3].2, "w");
    }
}
