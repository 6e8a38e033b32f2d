//! Integration tests for logging system

use bridge_traits::log::{LogLevel, MessageProvider, NativeLogger};
use core_runtime::logging::{init_logging, redact_if_sensitive, LogFormat, LoggingConfig};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingLogger {
    records: Mutex<Vec<(String, LogLevel, String)>>,
}

impl NativeLogger for RecordingLogger {
    fn log(&self, provider: MessageProvider, tag: &str, level: LogLevel) {
        self.records
            .lock()
            .unwrap()
            .push((tag.to_string(), level, provider()));
    }
}

// Global subscriber can only be installed once per process, so every
// init-dependent assertion lives in this one test.
#[test]
fn test_init_logging_mirrors_to_native_logger_once() {
    let logger = Arc::new(RecordingLogger::default());
    let native: Arc<dyn NativeLogger> = logger.clone();

    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Debug)
        .with_native_logger(native);
    init_logging(config).expect("first init succeeds");

    tracing::debug!(target: "core_data", document_id = "a", "read");
    tracing::trace!(target: "core_data", "filtered by level");
    tracing::info!(target: "some_dependency", "filtered by crate");

    {
        let records = logger.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, "core_data");
        assert_eq!(records[0].1, LogLevel::Debug);
        assert_eq!(records[0].2, "read document_id=a");
    }

    let second = init_logging(LoggingConfig::default());
    assert!(second.is_err());
}

#[test]
fn test_invalid_filter_is_config_error() {
    // Filter parsing happens before subscriber installation.
    let config = LoggingConfig::default().with_filter("core_data=[unclosed");
    let err = init_logging(config).unwrap_err();
    assert!(err.to_string().contains("Invalid log filter"));
}

#[test]
fn test_secret_redaction() {
    assert_eq!(redact_if_sensitive("app_secret", "1234"), "[REDACTED]");
    assert_eq!(redact_if_sensitive("password", "pass"), "[REDACTED]");
    assert_eq!(redact_if_sensitive("document_id", "prefs"), "prefs");
}

#[test]
fn test_config_chaining() {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Warning)
        .with_spans(false)
        .with_target(false)
        .with_thread_info(true);

    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.level, LogLevel::Warning);
    assert!(!config.enable_spans);
    assert!(!config.display_target);
    assert!(config.display_thread_info);
}
