//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the SDK:
//! - Logging and tracing infrastructure
//! - Configuration management
//!
//! ## Overview
//!
//! This crate contains the runtime utilities the SDK modules depend on. It
//! establishes the logging conventions (including mirroring of `tracing`
//! events into the host's native logger) and the fail-fast configuration
//! builder used to bootstrap the SDK.

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
