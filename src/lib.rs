//! Workspace placeholder crate.
//!
//! Re-exports the SDK façade and exposes the shared feature flags
//! (`desktop-shims`) so host applications can depend on one crate.

pub use core_service::*;
