//! SDK service façade and bootstrap helpers.
//!
//! This crate wires host-provided native capabilities (logger, document store)
//! into the SDK modules. Desktop hosts typically enable the `desktop-shims`
//! feature, which fills in `bridge-desktop` defaults for anything the host did
//! not provide.
//!
//! ```ignore
//! use core_runtime::config::SdkConfig;
//! use core_service::Sdk;
//!
//! let sdk = Sdk::start(
//!     SdkConfig::builder()
//!         .app_secret(secret)
//!         .native_logger(host_logger)
//!         .document_store(host_store)
//!         .build()?,
//! )?;
//! sdk.logger().info("App", "SDK ready");
//! let doc = sdk.data().read("prefs", DefaultPartitions::USER_DOCUMENTS, None).await?;
//! ```

pub mod error;
pub mod registrar;

pub use error::{Result, SdkError};
pub use registrar::SdkPackageProvider;

use std::sync::Arc;

use core_data::DataClient;
use core_log::{sdk_log, Logger};
use core_runtime::{
    config::SdkConfig,
    logging::{init_logging, redact_if_sensitive},
};
use tracing::{info, warn};

/// Primary façade exposed to host applications.
#[derive(Clone)]
pub struct Sdk {
    config: Arc<SdkConfig>,
    logger: Logger,
    data: DataClient,
}

impl Sdk {
    /// Start the SDK.
    ///
    /// Installs the native logger behind the static [`sdk_log`] façade and,
    /// when the config requests it, the `tracing` subscriber. Logging
    /// initialisation fails if the host already installed a global subscriber.
    pub fn start(config: SdkConfig) -> Result<Self> {
        if let Some(logging) = config.logging.clone() {
            let logging = match logging.native_logger {
                Some(_) => logging,
                None => logging.with_native_logger(Arc::clone(&config.native_logger)),
            };
            init_logging(logging)?;
        }

        sdk_log::install(Arc::clone(&config.native_logger));

        let secret = config
            .app_secret
            .as_deref()
            .map(|secret| redact_if_sensitive("app_secret", secret));
        info!(configured = config.is_configured(), app_secret = ?secret, "SDK started");
        if !config.is_configured() {
            warn!("No app secret configured; the native store will reject data calls");
        }

        Ok(Self::from_parts(config))
    }

    /// Build the façade without touching process-wide state.
    pub fn from_parts(config: SdkConfig) -> Self {
        let logger = Logger::new(Arc::clone(&config.native_logger));
        let data = DataClient::new(Arc::clone(&config.document_store));
        Self {
            config: Arc::new(config),
            logger,
            data,
        }
    }

    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn data(&self) -> &DataClient {
        &self.data
    }

    /// Crash the process with a test crash.
    pub fn generate_test_crash(&self) -> ! {
        core_crashes::generate_test_crash()
    }

    /// Provider the host UI framework calls to register this SDK's modules.
    pub fn package_provider(&self) -> SdkPackageProvider {
        SdkPackageProvider::new(self.clone())
    }
}
