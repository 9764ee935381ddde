//! Dotted config field paths used in diagnostics.

use owo_colors::OwoColorize;
use std::fmt;

/// Path of a field inside `easyloops.toml`, e.g. `site.url`.
///
/// Generated for every `#[derive(Config)]` struct as `Type::FIELDS.<field>`:
///
/// ```ignore
/// diag.error(SiteInfoConfig::FIELDS.url, "must use http or https");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
