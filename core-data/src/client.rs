//! Document bridge over the native document store.

use bridge_traits::data::{DocumentMap, DocumentStore, ReadOptions, WriteOptions};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::document::{convert_timestamp_to_date, Document};
use crate::error::Result;

/// Read/create/replace/remove over a partitioned document store.
///
/// Omitted options default to [`TimeToLive::DEFAULT`](crate::TimeToLive::DEFAULT).
/// Supplied options are forwarded as given. Native rejections come back as
/// [`DataError::Store`](crate::DataError::Store) with the native error intact;
/// nothing is retried.
#[derive(Clone)]
pub struct DataClient {
    store: Arc<dyn DocumentStore>,
}

impl DataClient {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Read a document.
    pub async fn read(
        &self,
        document_id: &str,
        partition: &str,
        read_options: Option<ReadOptions>,
    ) -> Result<Document> {
        let options = read_options.unwrap_or_default();
        debug!(
            document_id,
            partition,
            ttl = options.time_to_live,
            "Reading document"
        );
        let result = self.store.read(document_id, partition, options).await?;
        Ok(convert_timestamp_to_date(result))
    }

    /// Create a document.
    pub async fn create(
        &self,
        document_id: &str,
        document: &Value,
        partition: &str,
        write_options: Option<WriteOptions>,
    ) -> Result<Document> {
        let options = write_options.unwrap_or_default();
        debug!(
            document_id,
            partition,
            ttl = options.time_to_live,
            "Creating document"
        );
        let result = self
            .store
            .create(document_id, document, partition, options)
            .await?;
        Ok(convert_timestamp_to_date(result))
    }

    /// Delete a document. The native response is returned as is.
    pub async fn remove(
        &self,
        document_id: &str,
        partition: &str,
        write_options: Option<WriteOptions>,
    ) -> Result<DocumentMap> {
        let options = write_options.unwrap_or_default();
        debug!(
            document_id,
            partition,
            ttl = options.time_to_live,
            "Removing document"
        );
        Ok(self.store.remove(document_id, partition, options).await?)
    }

    /// Replace an existing document.
    pub async fn replace(
        &self,
        document_id: &str,
        document: &Value,
        partition: &str,
        write_options: Option<WriteOptions>,
    ) -> Result<Document> {
        let options = write_options.unwrap_or_default();
        debug!(
            document_id,
            partition,
            ttl = options.time_to_live,
            "Replacing document"
        );
        let result = self
            .store
            .replace(document_id, document, partition, options)
            .await?;
        Ok(convert_timestamp_to_date(result))
    }
}
