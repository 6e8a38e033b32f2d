//! End-to-end data bridge tests against the in-memory store

use bridge_desktop::InMemoryDocumentStore;
use bridge_traits::{
    data::{error_codes, keys},
    time::FixedClock,
};
use chrono::{TimeZone, Utc};
use core_data::{DataClient, DataError, DataModule, DefaultPartitions, TimeToLive, WriteOptions};
use serde_json::json;
use std::sync::Arc;

const NOW_MILLIS: i64 = 1_700_000_000_000;

async fn setup() -> (DataClient, Arc<InMemoryDocumentStore>) {
    let clock = FixedClock(Utc.timestamp_millis_opt(NOW_MILLIS).unwrap());
    let store = Arc::new(InMemoryDocumentStore::with_clock(Arc::new(clock)));
    (DataClient::new(store.clone()), store)
}

#[tokio::test]
async fn test_document_lifecycle() {
    let (data, store) = setup().await;
    let user = DefaultPartitions::USER_DOCUMENTS;

    let created = data
        .create("prefs", &json!({ "theme": "dark" }), user, None)
        .await
        .unwrap();
    assert_eq!(created.id(), Some("prefs"));
    assert_eq!(created.partition(), Some(user));
    assert_eq!(
        created.last_updated_date(),
        Some(Utc.timestamp_millis_opt(NOW_MILLIS).unwrap())
    );
    assert!(!created.is_from_device_cache());

    let read = data.read("prefs", user, None).await.unwrap();
    assert_eq!(read.deserialized_value(), Some(&json!({ "theme": "dark" })));
    assert_eq!(read.json_value(), Some("{\"theme\":\"dark\"}"));

    let replaced = data
        .replace(
            "prefs",
            &json!({ "theme": "light" }),
            user,
            Some(WriteOptions::new(TimeToLive::INFINITE)),
        )
        .await
        .unwrap();
    assert_ne!(replaced.e_tag(), created.e_tag());

    let removed = data.remove("prefs", user, None).await.unwrap();
    assert_eq!(removed[keys::LAST_UPDATED_DATE], json!(NOW_MILLIS as f64));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_missing_document_rejects_with_native_code() {
    let (data, _) = setup().await;

    let err = data
        .read("missing", DefaultPartitions::USER_DOCUMENTS, None)
        .await
        .unwrap_err();
    match err {
        DataError::Store(native) => {
            assert_eq!(native.code, error_codes::READ_FAILED);
            assert!(native.message.contains("missing"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_app_documents_are_read_only() {
    let (data, store) = setup().await;
    store
        .insert("catalog", DefaultPartitions::APP_DOCUMENTS, json!({ "items": [] }))
        .await;

    let doc = data
        .read("catalog", DefaultPartitions::APP_DOCUMENTS, None)
        .await
        .unwrap();
    assert_eq!(doc.deserialized_value(), Some(&json!({ "items": [] })));

    let err = data
        .remove("catalog", DefaultPartitions::APP_DOCUMENTS, None)
        .await
        .unwrap_err();
    assert!(matches!(err, DataError::Store(ref e) if e.code == error_codes::DELETE_FAILED));
}

#[tokio::test]
async fn test_concurrent_creates_are_independent() {
    let (data, store) = setup().await;

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let data = data.clone();
            tokio::spawn(async move {
                data.create(
                    &format!("doc-{i}"),
                    &json!({ "n": i }),
                    DefaultPartitions::USER_DOCUMENTS,
                    None,
                )
                .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }
    assert_eq!(store.len().await, 8);
}

#[test]
fn test_constants() {
    assert_eq!(TimeToLive::INFINITE, -1);
    assert_eq!(TimeToLive::NO_CACHE, 0);
    assert_eq!(TimeToLive::DEFAULT, 86_400);
    assert_eq!(DefaultPartitions::USER_DOCUMENTS, "user");
    assert_eq!(DefaultPartitions::APP_DOCUMENTS, "readonly");
}

#[tokio::test]
async fn test_module_dispatches_to_its_store() {
    let (data, store) = setup().await;
    let module = DataModule::new(data);

    module
        .client()
        .create("shared", &json!(42), DefaultPartitions::USER_DOCUMENTS, None)
        .await
        .unwrap();

    assert_eq!(store.len().await, 1);
    let read = module
        .client()
        .read("shared", DefaultPartitions::USER_DOCUMENTS, None)
        .await
        .unwrap();
    assert_eq!(read.value_as::<i64>().unwrap().unwrap(), 42);
}
