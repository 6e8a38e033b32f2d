//! # Host Bridge Traits
//!
//! Native boundary traits that each host platform implements.
//!
//! ## Overview
//!
//! The SDK core never performs platform I/O itself. Logging, document storage
//! and UI-framework registration are delegated to host-provided
//! implementations of the traits in this crate, which keeps the core testable
//! with fakes.
//!
//! ## Traits
//!
//! - [`NativeLogger`](log::NativeLogger) - Platform log writer with deferred message production
//! - [`DocumentStore`](data::DocumentStore) - Partitioned remote document store with offline cache
//! - [`PackageBuilder`](package::PackageBuilder) - Host UI framework module registration
//! - [`Clock`](time::Clock) - Time source for deterministic testing
//!
//! ## Platform Requirements
//!
//! | Platform | Implementation Crate | Status |
//! |----------|---------------------|--------|
//! | Desktop  | `bridge-desktop`    | ✅ Available |
//! | iOS      | Host app            | 📋 Planned |
//! | Android  | Host app            | 📋 Planned |
//!
//! ## Thread Safety
//!
//! `NativeLogger` and `DocumentStore` require `Send + Sync` so a single
//! instance can be shared across async tasks behind an `Arc`.

pub mod data;
pub mod error;
pub mod log;
pub mod package;
pub mod time;

pub use error::BridgeError;

// Re-export commonly used types
pub use data::{
    DocumentMap, DocumentStore, DocumentStoreError, ReadOptions, StoreResult, TimeToLive,
    WriteOptions,
};
pub use log::{LogLevel, MessageProvider, NativeLogger, NATIVE_LOG_TARGET};
pub use package::{NativeModule, PackageBuilder, PackageProvider, ViewManager};
pub use time::{Clock, FixedClock, SystemClock};
