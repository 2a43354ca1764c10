//! Hourly time-window seeds.
//!
//! A window seed is `day_of_month * 100 + hour_of_day + offset`, read from the
//! UTC wall clock. Two reads produce the same seed iff they fall within the
//! same UTC hour of the same UTC day (for equal offsets). Challenges are bound
//! to the seed at issuance; verification recomputes it fresh.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Time source abstraction so window reads stay deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock UTC time source used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Window seed for a given instant.
pub fn window_at(now: DateTime<Utc>, offset: i64) -> i64 {
    i64::from(now.day()) * 100 + i64::from(now.hour()) + offset
}

/// Window seed for the current wall-clock time.
pub fn current_window(offset: i64) -> i64 {
    window_at(Utc::now(), offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, hour, min, sec).unwrap()
    }

    #[test]
    fn test_window_encoding() {
        assert_eq!(window_at(utc(28, 14, 0, 0), 0), 2814);
        assert_eq!(window_at(utc(1, 0, 0, 0), 0), 100);
        assert_eq!(window_at(utc(31, 23, 59, 59), 0), 3123);
    }

    #[test]
    fn test_window_stable_within_hour() {
        assert_eq!(
            window_at(utc(12, 9, 0, 0), 0),
            window_at(utc(12, 9, 59, 59), 0)
        );
    }

    #[test]
    fn test_window_changes_across_hours() {
        assert_ne!(
            window_at(utc(12, 9, 59, 59), 0),
            window_at(utc(12, 10, 0, 0), 0)
        );
    }

    #[test]
    fn test_offset_shifts_seed() {
        let now = utc(5, 17, 30, 0);
        assert_eq!(window_at(now, 3), window_at(now, 0) + 3);
        assert_eq!(window_at(now, -517), 0);
    }
}
