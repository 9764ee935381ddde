//! UTC datetime utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` struct used for sitemap `lastmod`
//! values. Generation time is always taken in UTC, so no timezone database
//! is needed.
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::from_unix(1_700_000_000);
//! assert_eq!(dt.to_rfc3339(), "2023-11-14T22:13:20Z");
//!
//! let now = DateTimeUtc::now();
//! ```

use serde::{Serialize, Serializer};
use std::time::{SystemTime, UNIX_EPOCH};

const SECS_PER_DAY: u64 = 86_400;

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Current wall-clock time.
    ///
    /// A clock set before 1970 is clamped to the epoch.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::from_unix(secs)
    }

    /// Convert seconds since the Unix epoch (civil-from-days).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_unix(secs: u64) -> Self {
        let days = (secs / SECS_PER_DAY) as i64;
        let rem = secs % SECS_PER_DAY;

        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z.rem_euclid(146_097);
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = yoe + era * 400 + i64::from(month <= 2);

        Self::new(
            year as u16,
            month as u8,
            day as u8,
            (rem / 3600) as u8,
            (rem % 3600 / 60) as u8,
            (rem % 60) as u8,
        )
    }

    /// Format as RFC 3339 (W3C datetime), as used by sitemap `<lastmod>`.
    ///
    /// Returns: `YYYY-MM-DDTHH:MM:SSZ`
    pub fn to_rfc3339(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl Serialize for DateTimeUtc {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unix_epoch() {
        assert_eq!(DateTimeUtc::from_unix(0), DateTimeUtc::from_ymd(1970, 1, 1));
        assert_eq!(
            DateTimeUtc::from_unix(86_399),
            DateTimeUtc::new(1970, 1, 1, 23, 59, 59)
        );
    }

    #[test]
    fn test_from_unix_recent() {
        let dt = DateTimeUtc::from_unix(1_700_000_000);
        assert_eq!(dt.to_rfc3339(), "2023-11-14T22:13:20Z");
    }

    #[test]
    fn test_from_unix_leap_day() {
        // 2000-02-29T00:00:00Z
        let dt = DateTimeUtc::from_unix(951_782_400);
        assert_eq!(dt, DateTimeUtc::from_ymd(2000, 2, 29));
        // one day later rolls into March
        let dt = DateTimeUtc::from_unix(951_782_400 + 86_400);
        assert_eq!(dt, DateTimeUtc::from_ymd(2000, 3, 1));
    }

    #[test]
    fn test_now_is_valid() {
        let now = DateTimeUtc::now();
        assert!(now.year >= 2024);
        assert!((1..=12).contains(&now.month));
        assert!((1..=31).contains(&now.day));
    }

    #[test]
    fn test_serialize_as_string() {
        let dt = DateTimeUtc::new(2026, 10, 19, 8, 0, 0);
        let json = serde_json::to_string(&dt).unwrap();
        assert_eq!(json, "\"2026-10-19T08:00:00Z\"");
    }
}
