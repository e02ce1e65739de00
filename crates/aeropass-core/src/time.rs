//! Local date/time combination and display formatting helpers.
//!
//! Boarding-pass feeds deliver dates as `yyyy/MM/dd` and times as
//! `HH:mm`; the wallet provider wants ISO-8601 local date-times with no
//! offset (`yyyy-MM-ddTHH:mm:ss` — local-time semantics, the airport's
//! wall clock). Malformed input is a hard error, never a silently wrong
//! date.

use chrono::{NaiveDate, NaiveTime};

use crate::error::ValidationError;

/// Combine a `yyyy/MM/dd` date and an `HH:mm` time into an ISO-8601
/// local date-time string (`yyyy-MM-ddTHH:mm:ss`, no offset).
pub fn combine_local(date: &str, time: &str) -> Result<String, ValidationError> {
    let invalid = || ValidationError::InvalidDateTime {
        date: date.to_string(),
        time: time.to_string(),
    };
    let d = NaiveDate::parse_from_str(date, "%Y/%m/%d").map_err(|_| invalid())?;
    let t = NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| invalid())?;
    Ok(format!(
        "{}T{}",
        d.format("%Y-%m-%d"),
        t.format("%H:%M:%S")
    ))
}

/// Fixed-width display flight number: carrier left-aligned in two
/// columns, number right-aligned in four (`"CI"`, `"123"` → `"CI 123"`).
pub fn format_flight_number(carrier: &str, number: &str) -> String {
    format!("{carrier:<2}{number:>4}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_local_emits_iso8601_no_offset() {
        assert_eq!(
            combine_local("2025/01/01", "08:30").unwrap(),
            "2025-01-01T08:30:00"
        );
    }

    #[test]
    fn combine_local_rejects_impossible_dates() {
        let err = combine_local("2025/13/40", "08:30").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDateTime { .. }));
    }

    #[test]
    fn combine_local_rejects_wrong_formats() {
        assert!(combine_local("2025-01-01", "08:30").is_err());
        assert!(combine_local("2025/01/01", "8:30 AM").is_err());
        assert!(combine_local("", "").is_err());
    }

    #[test]
    fn combine_local_rejects_invalid_time() {
        assert!(combine_local("2025/01/01", "25:00").is_err());
    }

    #[test]
    fn flight_number_is_fixed_width() {
        assert_eq!(format_flight_number("CI", "123"), "CI 123");
        assert_eq!(format_flight_number("CI", "2222"), "CI2222");
        assert_eq!(format_flight_number("B7", "9"), "B7   9");
    }
}
