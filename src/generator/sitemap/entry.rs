//! Sitemap entry types.

use crate::utils::date::DateTimeUtc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Crawler hint for how often a page is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relative crawl priority in `[0, 1]`.
///
/// Stored in tenths so the fixed category values compare exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u8);

impl Priority {
    pub const HOME: Self = Self(10);
    pub const LISTING: Self = Self(9);
    pub const QUESTION: Self = Self(8);
    pub const WIKI: Self = Self(7);

    /// Build from tenths, clamped to `0..=10`.
    pub const fn from_tenths(tenths: u8) -> Self {
        if tenths > 10 { Self(10) } else { Self(tenths) }
    }

    pub fn value(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl Serialize for Priority {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

/// One advertised page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteEntry {
    pub url: String,
    pub last_modified: DateTimeUtc,
    pub change_frequency: ChangeFrequency,
    pub priority: Priority,
}

impl SiteEntry {
    pub fn new(
        url: String,
        last_modified: DateTimeUtc,
        change_frequency: ChangeFrequency,
        priority: Priority,
    ) -> Self {
        Self {
            url,
            last_modified,
            change_frequency,
            priority,
        }
    }

    /// Same entry with the timestamp dropped, for structural comparison.
    pub fn shape(&self) -> (&str, ChangeFrequency, Priority) {
        (&self.url, self.change_frequency, self.priority)
    }
}
