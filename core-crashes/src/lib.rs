//! # Test Crash Support
//!
//! Lets a host deliberately crash the process to verify its crash-reporting
//! pipeline end to end.
//!
//! [`generate_test_crash`] panics with a [`TestCrashError`] payload. The
//! payload is raised with [`std::panic::panic_any`] and reaches the panic hook
//! unmodified, so a crash reporter can recognise it with [`is_test_crash`].
//!
//! ```ignore
//! std::panic::set_hook(Box::new(|info| {
//!     if core_crashes::is_test_crash(info.payload()) {
//!         report("test crash");
//!     }
//! }));
//! core_crashes::generate_test_crash();
//! ```

use std::any::Any;
use thiserror::Error;

const CRASH_MESSAGE: &str = "Test crash exception generated by SDK";

/// Error raised by [`generate_test_crash`].
#[derive(Error, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[error("{}", CRASH_MESSAGE)]
pub struct TestCrashError;

impl TestCrashError {
    pub fn new() -> Self {
        Self
    }

    pub fn message(&self) -> &'static str {
        CRASH_MESSAGE
    }
}

/// Crash the current thread with a [`TestCrashError`].
///
/// Never returns. Under `panic = "abort"` the process aborts after the panic
/// hook runs.
pub fn generate_test_crash() -> ! {
    tracing::warn!("Generating test crash");
    std::panic::panic_any(TestCrashError::new())
}

/// Whether a panic payload is a test crash.
pub fn is_test_crash(payload: &(dyn Any + Send)) -> bool {
    payload.is::<TestCrashError>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_fixed() {
        let err = TestCrashError::new();
        assert_eq!(err.to_string(), "Test crash exception generated by SDK");
        assert_eq!(err.message(), err.to_string());
    }

    #[test]
    fn test_is_error() {
        let err: Box<dyn std::error::Error> = Box::new(TestCrashError::new());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_other_payloads_are_not_test_crashes() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert!(!is_test_crash(payload.as_ref()));
    }
}
