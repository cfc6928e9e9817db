// Copyright 2025 System76 <info@system76.com>
// SPDX-License-Identifier: GPL-3.0-only

use std::fmt::{self, Write};

use chrono::{DateTime, Utc};

/// 24-hour wall clock time with seconds.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Shown before a row's first refresh.
pub const PLACEHOLDER: &str = "00:00:00";

/// Shown in place of the time when a row can't be formatted.
pub const ERROR_TEXT: &str = "Error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    UnknownTimezone(String),
    Format,
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTimezone(id) => write!(f, "unknown timezone `{id}`"),
            Self::Format => f.write_str("failed to format time"),
        }
    }
}

impl std::error::Error for ClockError {}

/// Format `now` as local time in `timezone_id`.
///
/// Writes through `fmt::Write` instead of `to_string()` so a formatting
/// failure surfaces as an error rather than a panic.
pub fn format_time(timezone_id: &str, now: DateTime<Utc>) -> Result<String, ClockError> {
    let timezone = timezone_id
        .parse::<chrono_tz::Tz>()
        .map_err(|_| ClockError::UnknownTimezone(timezone_id.to_owned()))?;

    let mut formatted = String::new();
    write!(formatted, "{}", now.with_timezone(&timezone).format(TIME_FORMAT))
        .map_err(|_| ClockError::Format)?;

    Ok(formatted)
}

/// Text for a row's time label.
pub fn display_time(timezone_id: &str, now: DateTime<Utc>) -> String {
    format_time(timezone_id, now).unwrap_or_else(|_| ERROR_TEXT.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon_utc() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn utc_matches_clock() {
        assert_eq!(format_time("UTC", noon_utc()).unwrap(), "12:00:00");
    }

    #[test]
    fn tokyo_is_nine_hours_ahead() {
        assert_eq!(format_time("Asia/Tokyo", noon_utc()).unwrap(), "21:00:00");
    }

    #[test]
    fn daylight_saving_is_applied() {
        // June: London is on BST and New York on EDT.
        assert_eq!(format_time("Europe/London", noon_utc()).unwrap(), "13:00:00");
        assert_eq!(format_time("US/Eastern", noon_utc()).unwrap(), "08:00:00");

        let winter = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(format_time("Europe/London", winter).unwrap(), "12:00:00");
        assert_eq!(format_time("US/Eastern", winter).unwrap(), "07:00:00");
    }

    #[test]
    fn wraps_past_midnight() {
        let late = Utc.with_ymd_and_hms(2025, 6, 1, 23, 30, 5).unwrap();
        assert_eq!(format_time("Asia/Jakarta", late).unwrap(), "06:30:05");
    }

    #[test]
    fn unknown_timezone_is_an_error() {
        assert_eq!(
            format_time("Nowhere/Special", noon_utc()),
            Err(ClockError::UnknownTimezone("Nowhere/Special".to_owned()))
        );
        assert_eq!(display_time("Nowhere/Special", noon_utc()), ERROR_TEXT);
    }
}
