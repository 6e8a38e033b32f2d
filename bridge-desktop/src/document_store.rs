//! In-process document store
//!
//! Stands in for the remote partitioned store on desktop and in tests. Every
//! document lives in memory keyed by `(partition, id)`; nothing is served from
//! a device cache, so `isFromDeviceCache` is always `false` and cache options
//! are accepted but have no effect.

use async_trait::async_trait;
use bridge_traits::{
    data::{error_codes, keys, DocumentMap, DocumentStore, DocumentStoreError, StoreResult},
    error::BridgeError,
    time::{Clock, SystemClock},
    ReadOptions, WriteOptions,
};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Partition that accepts reads only.
const READONLY_PARTITION: &str = "readonly";

#[derive(Debug, Clone)]
struct StoredDocument {
    value: Value,
    e_tag: String,
    last_updated: DateTime<Utc>,
}

/// Memory-backed [`DocumentStore`].
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<(String, String), StoredDocument>>,
    clock: Arc<dyn Clock>,
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a store that stamps `lastUpdatedDate` from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
            clock,
        }
    }

    /// Seed a document, bypassing partition write rules.
    pub async fn insert(&self, document_id: &str, partition: &str, value: Value) {
        let stored = self.stamp(value);
        self.documents
            .write()
            .await
            .insert(key(document_id, partition), stored);
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    fn stamp(&self, value: Value) -> StoredDocument {
        StoredDocument {
            value,
            e_tag: Uuid::new_v4().to_string(),
            last_updated: self.clock.now(),
        }
    }

    fn check_address(code: &str, document_id: &str, partition: &str) -> StoreResult<()> {
        if document_id.is_empty() {
            return Err(DocumentStoreError::new(code, "Document id must not be empty"));
        }
        if partition.is_empty() {
            return Err(DocumentStoreError::new(code, "Partition must not be empty"));
        }
        Ok(())
    }

    fn check_writable(code: &str, partition: &str) -> StoreResult<()> {
        if partition == READONLY_PARTITION {
            return Err(DocumentStoreError::new(
                code,
                format!("Partition '{}' is read-only", partition),
            ));
        }
        Ok(())
    }

    /// Build the wrapper map the native module resolves with.
    fn wrap(
        code: &str,
        document_id: &str,
        partition: &str,
        stored: &StoredDocument,
        include_value: bool,
    ) -> StoreResult<DocumentMap> {
        let mut map = DocumentMap::new();
        map.insert(keys::E_TAG.into(), Value::String(stored.e_tag.clone()));
        map.insert(keys::ID.into(), Value::String(document_id.to_string()));
        map.insert(keys::PARTITION.into(), Value::String(partition.to_string()));
        map.insert(
            keys::LAST_UPDATED_DATE.into(),
            Value::from(stored.last_updated.timestamp_millis() as f64),
        );
        map.insert(keys::IS_FROM_DEVICE_CACHE.into(), Value::Bool(false));

        if include_value {
            let json = serde_json::to_string(&stored.value).map_err(|e| {
                DocumentStoreError::from_bridge(
                    code,
                    BridgeError::OperationFailed(format!("Failed to serialize document: {}", e)),
                )
            })?;
            map.insert(keys::JSON_VALUE.into(), Value::String(json));
            map.insert(keys::DESERIALIZED_VALUE.into(), stored.value.clone());
        }

        Ok(map)
    }

    fn not_found(code: &str, document_id: &str, partition: &str) -> DocumentStoreError {
        DocumentStoreError::new(
            code,
            format!(
                "Document '{}' not found in partition '{}'",
                document_id, partition
            ),
        )
    }
}

fn key(document_id: &str, partition: &str) -> (String, String) {
    (partition.to_string(), document_id.to_string())
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn read(
        &self,
        document_id: &str,
        partition: &str,
        options: ReadOptions,
    ) -> StoreResult<DocumentMap> {
        let code = error_codes::READ_FAILED;
        Self::check_address(code, document_id, partition)?;
        debug!(document_id, partition, ttl = options.time_to_live, "In-memory read");

        let documents = self.documents.read().await;
        let stored = documents
            .get(&key(document_id, partition))
            .ok_or_else(|| Self::not_found(code, document_id, partition))?;
        Self::wrap(code, document_id, partition, stored, true)
    }

    async fn create(
        &self,
        document_id: &str,
        document: &Value,
        partition: &str,
        options: WriteOptions,
    ) -> StoreResult<DocumentMap> {
        let code = error_codes::CREATE_FAILED;
        Self::check_address(code, document_id, partition)?;
        Self::check_writable(code, partition)?;
        debug!(document_id, partition, ttl = options.time_to_live, "In-memory create");

        let mut documents = self.documents.write().await;
        let address = key(document_id, partition);
        if documents.contains_key(&address) {
            return Err(DocumentStoreError::new(
                code,
                format!(
                    "Document '{}' already exists in partition '{}'",
                    document_id, partition
                ),
            ));
        }

        let stored = self.stamp(document.clone());
        let response = Self::wrap(code, document_id, partition, &stored, true)?;
        documents.insert(address, stored);
        Ok(response)
    }

    async fn replace(
        &self,
        document_id: &str,
        document: &Value,
        partition: &str,
        options: WriteOptions,
    ) -> StoreResult<DocumentMap> {
        let code = error_codes::REPLACE_FAILED;
        Self::check_address(code, document_id, partition)?;
        Self::check_writable(code, partition)?;
        debug!(document_id, partition, ttl = options.time_to_live, "In-memory replace");

        let mut documents = self.documents.write().await;
        let address = key(document_id, partition);
        if !documents.contains_key(&address) {
            return Err(Self::not_found(code, document_id, partition));
        }

        let stored = self.stamp(document.clone());
        let response = Self::wrap(code, document_id, partition, &stored, true)?;
        documents.insert(address, stored);
        Ok(response)
    }

    async fn remove(
        &self,
        document_id: &str,
        partition: &str,
        options: WriteOptions,
    ) -> StoreResult<DocumentMap> {
        let code = error_codes::DELETE_FAILED;
        Self::check_address(code, document_id, partition)?;
        Self::check_writable(code, partition)?;
        debug!(document_id, partition, ttl = options.time_to_live, "In-memory remove");

        let removed = self
            .documents
            .write()
            .await
            .remove(&key(document_id, partition))
            .ok_or_else(|| Self::not_found(code, document_id, partition))?;

        // Deletion resolves with metadata only.
        let tombstone = StoredDocument {
            last_updated: self.clock.now(),
            ..removed
        };
        Self::wrap(code, document_id, partition, &tombstone, false)
    }
}
