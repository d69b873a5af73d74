//! System clock

use chrono::{DateTime, Utc};
use vt_core::services::verification::ClockTrait;

/// Clock backed by the system's UTC time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockTrait for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_current() {
        let before = Utc::now();
        let now = SystemClock.now();
        assert!(now >= before);
        assert!(now <= Utc::now());
    }
}
