//! Time utilities for timegate
//!
//! Provides the point-in-time type used for interval bounds, a wall clock
//! that can be overridden during development, and parse/format helpers.
//!
//! # Mock Time for Development
//!
//! In debug builds, the `TIMEGATE_MOCK_TIME` environment variable can be set
//! to override the system time returned by [`now`]. This is useful for
//! checking how a catalog behaves at a given date without editing it.
//!
//! Format: `YYYY-MM-DD HH:MM:SS` (e.g., `2025-12-25 14:30:00`)
//!
//! Example:
//! ```bash
//! TIMEGATE_MOCK_TIME="2025-12-25 14:30:00" timegate check
//! ```

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone};
use std::sync::OnceLock;
use std::time::Duration;

/// Environment variable name for mock time (debug builds only)
pub const MOCK_TIME_ENV_VAR: &str = "TIMEGATE_MOCK_TIME";

/// Local date-time format accepted by the mock clock and [`parse_timestamp`]
pub const LOCAL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An absolute point in time. Comparisons ignore the display offset.
pub type Timestamp = DateTime<Local>;

/// Offset between mock time and real time at process start.
/// Keeping an offset lets mock time advance naturally.
static MOCK_TIME_OFFSET: OnceLock<Option<chrono::Duration>> = OnceLock::new();

#[allow(clippy::disallowed_methods)] // Internal implementation that wraps Local::now()
fn get_mock_time_offset() -> Option<chrono::Duration> {
    *MOCK_TIME_OFFSET.get_or_init(|| {
        #[cfg(debug_assertions)]
        {
            if let Ok(mock_time_str) = std::env::var(MOCK_TIME_ENV_VAR) {
                match parse_local_datetime(&mock_time_str) {
                    Ok(mock_dt) => {
                        let offset = mock_dt.signed_duration_since(chrono::Local::now());
                        tracing::info!(
                            mock_time = %mock_time_str,
                            offset_secs = offset.num_seconds(),
                            "Mock time enabled"
                        );
                        return Some(offset);
                    }
                    Err(message) => {
                        tracing::warn!(
                            mock_time = %mock_time_str,
                            expected_format = LOCAL_DATETIME_FORMAT,
                            %message,
                            "Ignoring invalid mock time"
                        );
                    }
                }
            }
            None
        }
        #[cfg(not(debug_assertions))]
        {
            None
        }
    })
}

/// Returns whether mock time is currently active.
pub fn is_mock_time_active() -> bool {
    get_mock_time_offset().is_some()
}

/// Get the current local time, respecting mock time settings in debug builds.
///
/// In release builds, this always returns the real system time.
/// In debug builds, if `TIMEGATE_MOCK_TIME` is set, this returns a time
/// that advances from the mock time at the same rate as real time.
#[allow(clippy::disallowed_methods)] // The wrapper that provides mock time support
pub fn now() -> Timestamp {
    let real_now = chrono::Local::now();

    if let Some(offset) = get_mock_time_offset() {
        real_now + offset
    } else {
        real_now
    }
}

fn parse_local_datetime(s: &str) -> Result<Timestamp, String> {
    let naive = NaiveDateTime::parse_from_str(s, LOCAL_DATETIME_FORMAT)
        .map_err(|e| format!("expected {}: {}", LOCAL_DATETIME_FORMAT, e))?;
    Local
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| format!("'{}' is ambiguous or skipped in the local timezone", s))
}

/// Parse a timestamp from RFC 3339 (`2025-12-25T14:30:00Z`) or the local
/// `YYYY-MM-DD HH:MM:SS` form.
pub fn parse_timestamp(s: &str) -> Result<Timestamp, String> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Local));
    }
    parse_local_datetime(s)
        .map_err(|_| format!("'{}' is neither RFC 3339 nor {}", s, LOCAL_DATETIME_FORMAT))
}

/// Format a timestamp as RFC 3339 with second precision.
pub fn format_timestamp(dt: &Timestamp) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Format a timestamp for display with full date and time.
pub fn format_datetime_full(dt: &Timestamp) -> String {
    dt.format(LOCAL_DATETIME_FORMAT).to_string()
}

/// Helper to format durations in human-readable form
pub fn format_duration(d: Duration) -> String {
    let total_secs = d.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Utc};

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(30)), "30s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_duration(Duration::from_secs(3661)), "1h 1m 1s");
    }

    #[test]
    fn test_format_datetime_full() {
        let dt = Local.with_ymd_and_hms(2025, 12, 25, 14, 30, 45).unwrap();
        assert_eq!(format_datetime_full(&dt), "2025-12-25 14:30:45");
    }

    #[test]
    fn test_parse_rfc3339() {
        let parsed = parse_timestamp("2025-12-25T14:30:00Z").unwrap();
        let expected = Utc.with_ymd_and_hms(2025, 12, 25, 14, 30, 0).unwrap();
        assert_eq!(parsed, expected);

        let offset = parse_timestamp("2025-12-25T16:30:00+02:00").unwrap();
        assert_eq!(offset, expected);
    }

    #[test]
    fn test_parse_local_form() {
        let parsed = parse_timestamp("2025-06-15 12:00:00").unwrap();
        let expected = Local.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_invalid_formats() {
        let invalid = [
            "2025-12-25",          // Missing time
            "14:30:00",            // Missing date
            "2025/12/25 14:30:00", // Wrong date separator
            "Dec 25, 2025 14:30",  // Wrong format
            "",                    // Empty string
            "not a date",
        ];

        for s in &invalid {
            assert!(parse_timestamp(s).is_err(), "Expected '{}' to be rejected", s);
        }
    }

    #[test]
    fn test_format_timestamp_round_trips() {
        let dt = Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let formatted = format_timestamp(&dt);
        assert_eq!(parse_timestamp(&formatted).unwrap(), dt);
    }

    #[test]
    fn test_now_returns_time() {
        let t = now();
        assert!(t.year() >= 2020);
        assert!(t.year() <= 2100);
    }

    #[test]
    fn test_now_advances() {
        let t1 = now();
        std::thread::sleep(Duration::from_millis(20));
        let t2 = now();
        assert!(t2 > t1, "Time should advance forward");
    }

    #[test]
    #[cfg(debug_assertions)]
    fn test_is_mock_time_active_in_debug() {
        // OnceLock makes the env var uncontrollable within one run; only check it doesn't panic
        let _ = is_mock_time_active();
    }
}
