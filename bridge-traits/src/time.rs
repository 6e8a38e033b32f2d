//! Time Abstractions
//!
//! Injectable time source so native shims can stamp documents deterministically
//! in tests.

use chrono::{DateTime, Utc};

/// Time source trait
///
/// # Example
///
/// ```ignore
/// use bridge_traits::time::Clock;
///
/// fn stamp(clock: &dyn Clock) -> i64 {
///     clock.unix_timestamp_millis()
/// }
/// ```
pub trait Clock: Send + Sync {
    /// Get current UTC time
    fn now(&self) -> DateTime<Utc>;

    /// Get current Unix timestamp in seconds
    fn unix_timestamp(&self) -> i64 {
        self.now().timestamp()
    }

    /// Get current Unix timestamp in milliseconds
    fn unix_timestamp_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// System clock implementation using actual system time
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_system_clock() {
        let clock = SystemClock;
        let now = clock.now();
        let timestamp = clock.unix_timestamp();

        assert!(timestamp > 0);
        assert!(now.timestamp() <= timestamp);
    }

    #[test]
    fn test_fixed_clock_millis() {
        let instant = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let clock = FixedClock(instant);

        assert_eq!(clock.unix_timestamp_millis(), 1_700_000_000_000);
        assert_eq!(clock.unix_timestamp(), 1_700_000_000);
    }
}
