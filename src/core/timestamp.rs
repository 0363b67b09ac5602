//! Timestamp formatting and clock sources
//!
//! Entries are stamped with local wall-clock time. The clock is a trait so
//! tests (and replay tools) can pin the time an entry is captured at.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Timelike};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timestamp format used in the formatted text of an entry
///
/// # Examples
///
/// ```
/// use debug_log_system::core::TimestampFormat;
/// use chrono::{Local, TimeZone};
///
/// let at = Local.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::Clock.format(&at), "10:30:45:00");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `HH:MM:SS:hh` with hundredths of a second: `10:30:45:12`
    #[default]
    Clock,

    /// `HH:MM:SShh`, hundredths glued to the seconds: `10:30:4512`
    Compact,

    /// ISO 8601 with milliseconds and local offset: `2025-01-08T10:30:45.123+01:00`
    Iso8601,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        let hundredths = (datetime.nanosecond() % 1_000_000_000) / 10_000_000;
        match self {
            TimestampFormat::Clock => {
                format!("{}:{:02}", datetime.format("%H:%M:%S"), hundredths)
            }
            TimestampFormat::Compact => {
                format!("{}{:02}", datetime.format("%H:%M:%S"), hundredths)
            }
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                if write!(out, "{}", datetime.format(format_str)).is_err() {
                    return TimestampFormat::Clock.format(datetime);
                }
                out
            }
        }
    }

    /// Check that a custom format string only contains valid specifiers
    pub fn is_valid(&self) -> bool {
        match self {
            TimestampFormat::Custom(format_str) => {
                !format_str.is_empty()
                    && !StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error))
            }
            _ => true,
        }
    }
}

/// Source of the capture time for new entries
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock pinned to a settable instant
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Local>>,
}

impl FixedClock {
    pub fn new(at: DateTime<Local>) -> Self {
        Self { now: Mutex::new(at) }
    }

    pub fn set(&self, at: DateTime<Local>) {
        *self.now.lock() = at;
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.lock();
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Local> {
        // 2025-01-08 10:30:45.123456 local
        Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_clock_format() {
        assert_eq!(TimestampFormat::Clock.format(&fixed_datetime()), "10:30:45:12");
    }

    #[test]
    fn test_compact_format() {
        assert_eq!(TimestampFormat::Compact.format(&fixed_datetime()), "10:30:4512");
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime());
        assert!(result.starts_with("2025-01-08T10:30:45.123"));
    }

    #[test]
    fn test_unix_format() {
        let result = TimestampFormat::Unix.format(&fixed_datetime());
        let parsed: i64 = result.parse().expect("valid unix timestamp");
        assert_eq!(parsed, fixed_datetime().timestamp());
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025/01/08 10:30");
    }

    #[test]
    fn test_invalid_custom_format_falls_back() {
        let format = TimestampFormat::Custom("%Q".to_string());
        assert!(!format.is_valid());
        assert_eq!(format.format(&fixed_datetime()), "10:30:45:12");
    }

    #[test]
    fn test_default_is_clock() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Clock);
    }

    #[test]
    fn test_deserialization() {
        let format: TimestampFormat = serde_json::from_str("\"Compact\"").expect("deserialize");
        assert_eq!(format, TimestampFormat::Compact);

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%H:%M"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%H:%M".to_string()));
    }

    #[test]
    fn test_fixed_clock_advance() {
        let clock = FixedClock::new(fixed_datetime());
        clock.advance(chrono::Duration::seconds(1));
        assert_eq!(TimestampFormat::Clock.format(&clock.now()), "10:30:46:12");
    }
}
