//! SDK walkthrough against the desktop shims.
//!
//! Run with:
//! ```bash
//! cargo run -p core-service --example sdk_demo
//! ```

use bridge_desktop::{InMemoryDocumentStore, RecordingPackageBuilder, TracingNativeLogger};
use bridge_traits::{log::LogLevel, package::PackageProvider};
use core_data::{DefaultPartitions, TimeToLive, WriteOptions};
use core_log::sdk_log;
use core_runtime::{
    config::SdkConfig,
    logging::{LogFormat, LoggingConfig},
};
use core_service::Sdk;
use serde_json::json;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = SdkConfig::builder()
        .app_secret("demo-secret")
        .native_logger(Arc::new(TracingNativeLogger::new(LogLevel::Verbose)))
        .document_store(Arc::new(InMemoryDocumentStore::new()))
        .logging(
            LoggingConfig::default()
                .with_format(LogFormat::Compact)
                .with_level(LogLevel::Debug),
        )
        .build()?;

    let sdk = Sdk::start(config)?;
    sdk_log::info("Demo", "SDK started");

    let user = DefaultPartitions::USER_DOCUMENTS;
    let created = sdk
        .data()
        .create("settings", &json!({ "theme": "dark" }), user, None)
        .await?;
    sdk_log::info(
        "Demo",
        &format!("Created at {:?}", created.last_updated_date()),
    );

    let replaced = sdk
        .data()
        .replace(
            "settings",
            &json!({ "theme": "light" }),
            user,
            Some(WriteOptions::new(TimeToLive::NO_CACHE)),
        )
        .await?;
    sdk_log::debug("Demo", &format!("New eTag {:?}", replaced.e_tag()));

    if let Err(err) = sdk.data().read("missing", user, None).await {
        sdk_log::warn("Demo", &format!("Expected failure: {}", err));
    }

    sdk.data().remove("settings", user, None).await?;

    let mut builder = RecordingPackageBuilder::new();
    sdk.package_provider().create_package(&mut builder);
    sdk_log::info(
        "Demo",
        &format!("Registered modules: {:?}", builder.module_names()),
    );

    Ok(())
}
