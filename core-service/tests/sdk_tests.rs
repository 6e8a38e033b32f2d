//! Service-level tests wiring the SDK against desktop shims

use bridge_desktop::{InMemoryDocumentStore, RecordingPackageBuilder};
use bridge_traits::{
    log::{LogLevel, MessageProvider, NativeLogger},
    package::PackageProvider,
};
use core_crashes::is_test_crash;
use core_data::{DataModule, DefaultPartitions};
use core_log::sdk_log;
use core_runtime::config::SdkConfig;
use core_service::Sdk;
use serde_json::json;
use std::panic::{self, AssertUnwindSafe};
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

fn config(logger: Arc<RecordingLogger>) -> SdkConfig {
    SdkConfig::builder()
        .app_secret("secret")
        .native_logger(logger)
        .document_store(Arc::new(InMemoryDocumentStore::new()))
        .build()
        .unwrap()
}

#[test]
fn test_start_installs_static_logger() {
    let logger = Arc::new(RecordingLogger::default());
    let sdk = Sdk::start(config(logger.clone())).unwrap();
    assert!(sdk.config().is_configured());

    sdk_log::warn("App", "through the static façade");
    sdk.logger().error("App", "through the instance");

    let records = logger.records.lock().unwrap();
    assert!(records.contains(&(
        "App".to_string(),
        LogLevel::Warning,
        "through the static façade".to_string()
    )));
    assert!(records.contains(&(
        "App".to_string(),
        LogLevel::Error,
        "through the instance".to_string()
    )));
}

#[tokio::test]
async fn test_data_round_trip_through_facade() -> anyhow::Result<()> {
    let sdk = Sdk::from_parts(config(Arc::new(RecordingLogger::default())));
    let user = DefaultPartitions::USER_DOCUMENTS;

    sdk.data()
        .create("prefs", &json!({ "volume": 7 }), user, None)
        .await?;
    let doc = sdk.data().read("prefs", user, None).await?;
    assert_eq!(doc.deserialized_value(), Some(&json!({ "volume": 7 })));
    assert!(doc.last_updated_date().is_some());
    Ok(())
}

#[test]
fn test_package_registration() {
    let sdk = Sdk::from_parts(config(Arc::new(RecordingLogger::default())));
    let mut builder = RecordingPackageBuilder::new();

    sdk.package_provider().create_package(&mut builder);

    assert_eq!(builder.module_names(), vec![DataModule::NAME]);
    assert!(builder.view_manager_names().is_empty());
}

#[test]
fn test_generate_test_crash_reaches_unwind_boundary() {
    let sdk = Sdk::from_parts(config(Arc::new(RecordingLogger::default())));

    let payload = panic::catch_unwind(AssertUnwindSafe(|| {
        sdk.generate_test_crash();
    }))
    .unwrap_err();

    assert!(is_test_crash(payload.as_ref()));
}
