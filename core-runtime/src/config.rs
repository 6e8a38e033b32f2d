//! # SDK Configuration Module
//!
//! Provides configuration management for the SDK.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct an `SdkConfig`
//! holding the native capabilities and settings the SDK needs. It enforces
//! fail-fast validation so a missing native capability is reported when the
//! host configures the SDK rather than at the first call.
//!
//! ## Required Dependencies
//!
//! - `NativeLogger` - Platform log writer
//! - `DocumentStore` - Native document-store module
//!
//! When the `desktop-shims` feature is enabled, desktop defaults are injected
//! for both if not provided.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::SdkConfig;
//! use std::sync::Arc;
//!
//! let config = SdkConfig::builder()
//!     .app_secret("00000000-0000-0000-0000-000000000000")
//!     .native_logger(Arc::new(MyHostLogger))
//!     .document_store(Arc::new(MyDocumentStore))
//!     .build()
//!     .expect("Failed to build config");
//! ```
//!
//! ## Error Handling
//!
//! ```ignore
//! use core_runtime::config::SdkConfig;
//!
//! // Without `desktop-shims` this fails with `CapabilityMissing { capability: "NativeLogger", .. }`
//! let config = SdkConfig::builder()
//!     .build()
//!     .expect("Should fail - missing required bridges");
//! ```

use crate::error::{Error, Result};
use crate::logging::LoggingConfig;
use bridge_traits::{DocumentStore, LogLevel, NativeLogger};
use std::sync::Arc;

/// SDK configuration.
///
/// Use [`SdkConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct SdkConfig {
    /// App secret issued for the host application. The data service only
    /// starts when one is configured.
    pub app_secret: Option<String>,

    /// Minimum level of the default desktop native logger
    pub log_level: LogLevel,

    /// Native logging entry point (required)
    pub native_logger: Arc<dyn NativeLogger>,

    /// Native document-store module (required)
    pub document_store: Arc<dyn DocumentStore>,

    /// `tracing` setup; `None` leaves subscriber installation to the host
    pub logging: Option<LoggingConfig>,
}

impl std::fmt::Debug for SdkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SdkConfig")
            .field(
                "app_secret",
                &self.app_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .field("log_level", &self.log_level)
            .field("native_logger", &"NativeLogger { ... }")
            .field("document_store", &"DocumentStore { ... }")
            .field("logging", &self.logging)
            .finish()
    }
}

impl SdkConfig {
    /// Creates a new builder for constructing an `SdkConfig`.
    pub fn builder() -> SdkConfigBuilder {
        SdkConfigBuilder::default()
    }

    /// Whether the host supplied an app secret.
    pub fn is_configured(&self) -> bool {
        self.app_secret.is_some()
    }
}

/// Builder for [`SdkConfig`].
#[derive(Default)]
pub struct SdkConfigBuilder {
    app_secret: Option<String>,
    log_level: Option<LogLevel>,
    native_logger: Option<Arc<dyn NativeLogger>>,
    document_store: Option<Arc<dyn DocumentStore>>,
    logging: Option<LoggingConfig>,
}

impl SdkConfigBuilder {
    /// Sets the app secret.
    pub fn app_secret(mut self, secret: impl Into<String>) -> Self {
        self.app_secret = Some(secret.into());
        self
    }

    /// Sets the minimum level of the desktop default logger (default: `Info`).
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Sets the native logging entry point.
    pub fn native_logger(mut self, logger: Arc<dyn NativeLogger>) -> Self {
        self.native_logger = Some(logger);
        self
    }

    /// Sets the native document-store module.
    pub fn document_store(mut self, store: Arc<dyn DocumentStore>) -> Self {
        self.document_store = Some(store);
        self
    }

    /// Requests `tracing` subscriber installation at bootstrap.
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// Validates the configuration and builds an `SdkConfig`.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if the app secret is blank
    /// - [`Error::CapabilityMissing`] if a required native capability is absent
    pub fn build(self) -> Result<SdkConfig> {
        let app_secret = match self.app_secret {
            Some(secret) => {
                let trimmed = secret.trim();
                if trimmed.is_empty() {
                    return Err(Error::Config("App secret cannot be blank".to_string()));
                }
                Some(trimmed.to_string())
            }
            None => None,
        };

        let log_level = self.log_level.unwrap_or(LogLevel::Info);

        let native_logger = match self.native_logger {
            Some(logger) => logger,
            None => Self::default_native_logger(log_level)?,
        };

        let document_store = match self.document_store {
            Some(store) => store,
            None => Self::default_document_store()?,
        };

        Ok(SdkConfig {
            app_secret,
            log_level,
            native_logger,
            document_store,
            logging: self.logging,
        })
    }

    #[cfg(feature = "desktop-shims")]
    fn default_native_logger(level: LogLevel) -> Result<Arc<dyn NativeLogger>> {
        Ok(Arc::new(bridge_desktop::TracingNativeLogger::new(level)))
    }

    #[cfg(not(feature = "desktop-shims"))]
    fn default_native_logger(_level: LogLevel) -> Result<Arc<dyn NativeLogger>> {
        Err(Error::CapabilityMissing {
            capability: "NativeLogger".to_string(),
            message: "No native logger provided. \
                      Desktop: enable the `desktop-shims` feature. \
                      Mobile: inject the platform logger adapter."
                .to_string(),
        })
    }

    #[cfg(feature = "desktop-shims")]
    fn default_document_store() -> Result<Arc<dyn DocumentStore>> {
        Ok(Arc::new(bridge_desktop::InMemoryDocumentStore::new()))
    }

    #[cfg(not(feature = "desktop-shims"))]
    fn default_document_store() -> Result<Arc<dyn DocumentStore>> {
        Err(Error::CapabilityMissing {
            capability: "DocumentStore".to_string(),
            message: "No document store provided. \
                      Desktop: enable the `desktop-shims` feature. \
                      Mobile: inject the native data module adapter."
                .to_string(),
        })
    }
}
