//! Document Store Boundary
//!
//! Contract between the data bridge and the native document-store module.
//! Responses cross the boundary as loosely-typed maps, keyed the way the
//! native module writes them (see [`keys`]).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::error::BridgeError;

/// A native response object.
pub type DocumentMap = Map<String, Value>;

/// Response and option keys used by the native module.
pub mod keys {
    pub const ID: &str = "id";
    pub const PARTITION: &str = "partition";
    pub const E_TAG: &str = "eTag";
    pub const LAST_UPDATED_DATE: &str = "lastUpdatedDate";
    pub const IS_FROM_DEVICE_CACHE: &str = "isFromDeviceCache";
    pub const JSON_VALUE: &str = "jsonValue";
    pub const DESERIALIZED_VALUE: &str = "deserializedValue";
    pub const TIME_TO_LIVE: &str = "timeToLive";
}

/// Rejection codes, one per operation.
pub mod error_codes {
    pub const READ_FAILED: &str = "Read failed";
    pub const CREATE_FAILED: &str = "Create failed";
    pub const DELETE_FAILED: &str = "Delete failed";
    pub const REPLACE_FAILED: &str = "Replace failed";
}

/// Cache time-to-live sentinels, in seconds.
#[derive(Debug, Clone, Copy)]
pub struct TimeToLive;

impl TimeToLive {
    /// Cached entries never expire.
    pub const INFINITE: i32 = -1;
    /// Nothing is cached.
    pub const NO_CACHE: i32 = 0;
    /// One day.
    pub const DEFAULT: i32 = 86_400;
}

/// Offline cache options for reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadOptions {
    #[serde(default = "default_time_to_live")]
    pub time_to_live: i32,
}

/// Offline cache options for writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteOptions {
    #[serde(default = "default_time_to_live")]
    pub time_to_live: i32,
}

fn default_time_to_live() -> i32 {
    TimeToLive::DEFAULT
}

impl ReadOptions {
    pub fn new(time_to_live: i32) -> Self {
        Self { time_to_live }
    }
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self::new(TimeToLive::DEFAULT)
    }
}

impl WriteOptions {
    pub fn new(time_to_live: i32) -> Self {
        Self { time_to_live }
    }
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self::new(TimeToLive::DEFAULT)
    }
}

/// Rejection raised by the native document store.
///
/// `document` carries whatever partial response the native side attached to
/// the rejection.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{code}: {message}")]
pub struct DocumentStoreError {
    pub code: String,
    pub message: String,
    pub document: Option<DocumentMap>,
}

impl DocumentStoreError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            document: None,
        }
    }

    pub fn with_document(mut self, document: DocumentMap) -> Self {
        self.document = Some(document);
        self
    }

    /// Reject `code` with a bridge-level failure as the message.
    pub fn from_bridge(code: impl Into<String>, err: BridgeError) -> Self {
        Self::new(code, err.to_string())
    }
}

pub type StoreResult<T> = std::result::Result<T, DocumentStoreError>;

/// Native document-store module
///
/// Each call resolves or rejects exactly once. Ordering between calls is up
/// to the implementation.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::data::{DocumentStore, ReadOptions};
///
/// async fn fetch(store: &dyn DocumentStore) -> StoreResult<DocumentMap> {
///     store.read("settings", "user", ReadOptions::default()).await
/// }
/// ```
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read a document.
    async fn read(
        &self,
        document_id: &str,
        partition: &str,
        options: ReadOptions,
    ) -> StoreResult<DocumentMap>;

    /// Create a document. Rejects if it already exists.
    async fn create(
        &self,
        document_id: &str,
        document: &Value,
        partition: &str,
        options: WriteOptions,
    ) -> StoreResult<DocumentMap>;

    /// Replace an existing document.
    async fn replace(
        &self,
        document_id: &str,
        document: &Value,
        partition: &str,
        options: WriteOptions,
    ) -> StoreResult<DocumentMap>;

    /// Delete a document.
    async fn remove(
        &self,
        document_id: &str,
        partition: &str,
        options: WriteOptions,
    ) -> StoreResult<DocumentMap>;
}
