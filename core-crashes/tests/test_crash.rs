//! Panic propagation of the test crash

use core_crashes::{generate_test_crash, is_test_crash, TestCrashError};
use std::panic;

#[test]
fn test_generate_test_crash_unwinds_with_payload() {
    let result = panic::catch_unwind(|| {
        generate_test_crash();
    });

    let payload = result.expect_err("test crash must not return");
    assert!(is_test_crash(payload.as_ref()));

    let err = payload
        .downcast::<TestCrashError>()
        .expect("payload is the crash error itself");
    assert_eq!(err.to_string(), "Test crash exception generated by SDK");
}

#[test]
#[should_panic]
fn test_generate_test_crash_is_fatal() {
    generate_test_crash();
}
