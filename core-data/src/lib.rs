//! # Data Bridge
//!
//! Document CRUD over a partitioned remote store with an offline cache,
//! delegated to the host's native document-store module.
//!
//! ## Overview
//!
//! [`DataClient`] fills in default cache options, calls the native
//! [`DocumentStore`](bridge_traits::DocumentStore), and converts the
//! `lastUpdatedDate` field of read/create/replace responses into a date.
//! Everything else (caching, conflict detection, auth) is the native side's
//! job.
//!
//! ## Usage
//!
//! ```ignore
//! use core_data::{DataClient, DefaultPartitions, WriteOptions, TimeToLive};
//! use serde_json::json;
//!
//! let data = DataClient::new(store);
//! let doc = data
//!     .create("prefs", &json!({ "theme": "dark" }), DefaultPartitions::USER_DOCUMENTS, None)
//!     .await?;
//! println!("written at {:?}", doc.last_updated_date());
//!
//! data.remove("prefs", DefaultPartitions::USER_DOCUMENTS, Some(WriteOptions::new(TimeToLive::NO_CACHE)))
//!     .await?;
//! ```

pub mod client;
pub mod document;
pub mod error;
pub mod module;

pub use bridge_traits::data::{ReadOptions, TimeToLive, WriteOptions};
pub use client::DataClient;
pub use document::{convert_timestamp_to_date, Document};
pub use error::{DataError, Result};
pub use module::DataModule;

/// Partitions every app gets.
#[derive(Debug, Clone, Copy)]
pub struct DefaultPartitions;

impl DefaultPartitions {
    /// Documents private to the signed-in user.
    pub const USER_DOCUMENTS: &'static str = "user";
    /// Documents shared by all users, read-only from the client.
    pub const APP_DOCUMENTS: &'static str = "readonly";
}
