//! `[site]` section: identity of the published site.
//!
//! ```toml
//! [site]
//! name = "EasyLoops"
//! title = "EasyLoops - Learn Programming"
//! description = "Interactive coding challenges designed to build your programming skills systematically."
//! url = "https://easyloops.app"
//! language = "en"
//! ```

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Site identity used for sitemap URLs and page metadata.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteInfoConfig {
    /// Short site name (Open Graph `site_name`, wiki titles).
    #[config(inline_doc = "Short site name")]
    pub name: String,

    /// Title of the home page.
    #[config(inline_doc = "Home page title")]
    pub title: String,

    /// Description of the home page.
    pub description: String,

    /// Absolute site URL without trailing slash. Every sitemap `<loc>` starts with it.
    #[config(inline_doc = "Base URL for sitemap entries")]
    pub url: String,

    /// Language code (e.g., "en").
    #[config(inline_doc = "Language code")]
    pub language: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            name: "EasyLoops".into(),
            title: "EasyLoops - Learn Programming".into(),
            description: "Interactive coding challenges designed to build your programming skills systematically.".into(),
            url: "https://easyloops.app".into(),
            language: "en".into(),
        }
    }
}

impl SiteInfoConfig {
    /// Strip trailing slashes so `url + "/questions"` never doubles them.
    pub fn normalize(&mut self) {
        let trimmed = self.url.trim().trim_end_matches('/');
        if trimmed.len() != self.url.len() {
            self.url = trimmed.to_string();
        }
    }

    /// # Checks
    /// - `url` parses, uses http or https, and has a host
    /// - `url` carries no query or fragment (entries are built by appending paths)
    /// - `name` is not empty
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error(Self::FIELDS.name, "site name must not be empty");
        }

        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://easyloops.app",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://easyloops.app",
                    );
                }
                if parsed.query().is_some() || parsed.fragment().is_some() {
                    diag.error(
                        Self::FIELDS.url,
                        "URL must not contain a query string or fragment",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {e}"),
                    "use format like https://easyloops.app",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn validate(site: &SiteInfoConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::default();
        site.validate(&mut diag);
        diag
    }

    #[test]
    fn test_defaults() {
        let site = SiteInfoConfig::default();
        assert_eq!(site.url, "https://easyloops.app");
        assert_eq!(site.name, "EasyLoops");
        assert!(!validate(&site).has_errors());
    }

    #[test]
    fn test_parse_site_section() {
        let config = test_parse_config("[site]\nname = \"Loops\"\nurl = \"http://localhost:3001\"");
        assert_eq!(config.site.name, "Loops");
        assert_eq!(config.site.url, "http://localhost:3001");
        // untouched fields keep defaults
        assert_eq!(config.site.language, "en");
    }

    #[test]
    fn test_normalize_trailing_slash() {
        let mut site = SiteInfoConfig {
            url: "https://easyloops.app//".into(),
            ..SiteInfoConfig::default()
        };
        site.normalize();
        assert_eq!(site.url, "https://easyloops.app");
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        for url in ["ftp://easyloops.app", "not a url", "https://easyloops.app/?x=1"] {
            let site = SiteInfoConfig {
                url: url.into(),
                ..SiteInfoConfig::default()
            };
            assert!(validate(&site).has_errors(), "{url} should be rejected");
        }
    }

    #[test]
    fn test_validate_accepts_subpath() {
        let site = SiteInfoConfig {
            url: "https://example.github.io/easyloops".into(),
            ..SiteInfoConfig::default()
        };
        assert!(!validate(&site).has_errors());
    }

    #[test]
    fn test_validate_empty_name() {
        let site = SiteInfoConfig {
            name: " ".into(),
            ..SiteInfoConfig::default()
        };
        let diag = validate(&site);
        assert_eq!(diag.errors()[0].field.as_str(), "site.name");
    }
}
