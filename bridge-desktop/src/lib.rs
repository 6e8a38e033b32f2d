//! # Desktop Bridge Implementations
//!
//! Default implementations of the native boundary traits for desktop hosts
//! and local development.
//!
//! ## Overview
//!
//! - `NativeLogger` writing through `tracing`
//! - `DocumentStore` kept in process memory
//! - `PackageBuilder` that records what was registered
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::{InMemoryDocumentStore, TracingNativeLogger};
//! use std::sync::Arc;
//!
//! let logger = Arc::new(TracingNativeLogger::default());
//! let store = Arc::new(InMemoryDocumentStore::new());
//! // Use in SDK configuration
//! ```

mod document_store;
mod logger;
mod package;

pub use document_store::InMemoryDocumentStore;
pub use logger::TracingNativeLogger;
pub use package::RecordingPackageBuilder;
