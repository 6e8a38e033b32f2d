//! # Logging & Tracing Infrastructure
//!
//! Provides structured logging with `tracing` crate, supporting:
//! - JSON and pretty-print output formats
//! - Module-level filtering
//! - Mirroring of events into the host's [`NativeLogger`]
//! - Redaction helpers for secrets
//!
//! ## Overview
//!
//! SDK crates log their own diagnostics with the `tracing` macros. This module
//! configures the `tracing-subscriber` stack for those events and, when a
//! native logger is configured, forwards every event that survives filtering
//! to it, so SDK diagnostics land in OSLog/Logcat next to the host's own
//! records. The event target becomes the native tag.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
//! use bridge_traits::log::LogLevel;
//! use bridge_desktop::TracingNativeLogger;
//! use std::sync::Arc;
//!
//! let config = LoggingConfig::default()
//!     .with_format(LogFormat::Compact)
//!     .with_level(LogLevel::Debug)
//!     .with_native_logger(Arc::new(MyHostLogger::new()));
//!
//! init_logging(config)?;
//! tracing::info!(target: "core_data", "Data bridge ready");
//! ```

use crate::error::{Error, Result};

use bridge_traits::log::{LogLevel, NativeLogger, NATIVE_LOG_TARGET};

use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::{
    filter::EnvFilter,
    fmt::format::FmtSpan,
    layer::{Context, SubscriberExt},
    registry::LookupSpan,
    util::SubscriberInitExt,
    Layer,
};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format with colors
    Pretty,
    /// Structured JSON format for machine parsing
    Json,
    /// Compact format for production
    Compact,
}

impl Default for LogFormat {
    fn default() -> Self {
        #[cfg(debug_assertions)]
        return Self::Pretty;

        #[cfg(not(debug_assertions))]
        return Self::Json;
    }
}

/// Logging configuration
#[derive(Clone)]
pub struct LoggingConfig {
    /// Output format
    pub format: LogFormat,
    /// Minimum log level
    pub level: LogLevel,
    /// Custom filter string (e.g., "core_data=debug,core_service=trace")
    pub filter: Option<String>,
    /// Native logger that mirrors every emitted event
    pub native_logger: Option<Arc<dyn NativeLogger>>,
    /// Enable span contexts
    pub enable_spans: bool,
    /// Display target module in logs
    pub display_target: bool,
    /// Display thread info
    pub display_thread_info: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: LogLevel::Info,
            filter: None,
            native_logger: None,
            enable_spans: true,
            display_target: true,
            display_thread_info: false,
        }
    }
}

impl fmt::Debug for LoggingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingConfig")
            .field("format", &self.format)
            .field("level", &self.level)
            .field("filter", &self.filter)
            .field("native_logger", &self.native_logger.is_some())
            .field("enable_spans", &self.enable_spans)
            .field("display_target", &self.display_target)
            .field("display_thread_info", &self.display_thread_info)
            .finish()
    }
}

impl LoggingConfig {
    /// Set log format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set minimum log level
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set custom filter string
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Mirror events into a native logger
    pub fn with_native_logger(mut self, logger: Arc<dyn NativeLogger>) -> Self {
        self.native_logger = Some(logger);
        self
    }

    /// Enable or disable span contexts
    pub fn with_spans(mut self, enable: bool) -> Self {
        self.enable_spans = enable;
        self
    }

    /// Enable or disable target display
    pub fn with_target(mut self, display: bool) -> Self {
        self.display_target = display;
        self
    }

    /// Enable or disable thread info
    pub fn with_thread_info(mut self, display: bool) -> Self {
        self.display_thread_info = display;
        self
    }
}

/// Initialize the logging system
///
/// This should be called once during application startup. Subsequent calls
/// will return an error.
///
/// # Errors
///
/// Returns an error if:
/// - Logging is already initialized
/// - The filter string is invalid
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let filter = build_filter(&config)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(&config))
        .with(NativeLoggerLayer::new(config.native_logger.clone()))
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to initialize logging: {}", e)))
}

fn level_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Verbose => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warning => "warn",
        LogLevel::Error | LogLevel::Assert => "error",
    }
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let base_level = level_directive(config.level);

    let filter_string = if let Some(custom_filter) = &config.filter {
        custom_filter.clone()
    } else {
        // Default filter: SDK crates and native records at the configured
        // level, everything else at warn
        let sdk_targets = [
            "core_runtime",
            "core_log",
            "core_crashes",
            "core_data",
            "core_service",
            "bridge_desktop",
            NATIVE_LOG_TARGET,
        ];
        let mut directives = vec!["warn".to_string()];
        directives.extend(
            sdk_targets
                .iter()
                .map(|name| format!("{}={}", name, base_level)),
        );
        directives.join(",")
    };

    EnvFilter::try_new(filter_string)
        .map_err(|e| Error::Config(format!("Invalid log filter: {}", e)))
}

fn fmt_layer<S>(config: &LoggingConfig) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_target(config.display_target)
        .with_thread_ids(config.display_thread_info)
        .with_thread_names(config.display_thread_info)
        .with_writer(io::stdout);

    match config.format {
        LogFormat::Pretty => layer
            .pretty()
            .with_span_events(if config.enable_spans {
                FmtSpan::ACTIVE
            } else {
                FmtSpan::NONE
            })
            .boxed(),
        LogFormat::Json => layer
            .json()
            .flatten_event(true)
            .with_current_span(config.enable_spans)
            .with_span_list(config.enable_spans)
            .boxed(),
        LogFormat::Compact => layer.compact().boxed(),
    }
}

/// Layer that forwards events to a [`NativeLogger`].
///
/// The message is rendered lazily inside the provider, so records the native
/// side filters out cost only the field capture.
struct NativeLoggerLayer {
    logger: Option<Arc<dyn NativeLogger>>,
}

impl NativeLoggerLayer {
    fn new(logger: Option<Arc<dyn NativeLogger>>) -> Self {
        Self { logger }
    }
}

impl<S> Layer<S> for NativeLoggerLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let Some(logger) = self.logger.as_ref() else {
            return;
        };

        let metadata = event.metadata();
        // Records the native logger wrote back into tracing.
        if metadata.target() == NATIVE_LOG_TARGET {
            return;
        }

        let level = tracing_level_to_log_level(*metadata.level());
        if !logger.is_enabled(level) {
            return;
        }

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let fallback = metadata.name();
        let FieldVisitor { message, fields } = visitor;
        let message = message.unwrap_or_else(|| fallback.to_string());

        logger.log(
            Box::new(move || render_record(message, fields)),
            metadata.target(),
            level,
        );
    }
}

fn render_record(message: String, fields: BTreeMap<String, String>) -> String {
    if fields.is_empty() {
        return message;
    }
    let rendered: Vec<String> = fields
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    format!("{} {}", message, rendered.join(" "))
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: BTreeMap<String, String>,
}

impl FieldVisitor {
    fn record_value(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = Some(value);
        } else {
            self.fields.insert(field.name().to_string(), value);
        }
    }
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_value(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_value(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.record_value(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.record_value(field, value.to_string());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.record_value(field, value.to_string());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.record_value(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_value(field, format!("{:?}", value));
    }
}

fn tracing_level_to_log_level(level: tracing::Level) -> LogLevel {
    match level {
        tracing::Level::TRACE => LogLevel::Verbose,
        tracing::Level::DEBUG => LogLevel::Debug,
        tracing::Level::INFO => LogLevel::Info,
        tracing::Level::WARN => LogLevel::Warning,
        tracing::Level::ERROR => LogLevel::Error,
    }
}

/// Helper function to redact sensitive field values
///
/// ```ignore
/// use tracing::info;
/// use core_runtime::logging::redact_if_sensitive;
///
/// info!(app_secret = %redact_if_sensitive("app_secret", secret), "Configured SDK");
/// ```
pub fn redact_if_sensitive(field_name: &str, value: &str) -> String {
    const SENSITIVE_FIELDS: &[&str] = &[
        "token",
        "password",
        "secret",
        "api_key",
        "authorization",
        "bearer",
    ];

    let field_lower = field_name.to_lowercase();
    if SENSITIVE_FIELDS.iter().any(|&f| field_lower.contains(f)) {
        "[REDACTED]".to_string()
    } else {
        value.to_string()
    }
}
