//! Open Graph and Twitter Card data.

use serde::Serialize;

use crate::config::SiteConfig;

/// Open Graph tags for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub url: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub og_type: Option<&'static str>,
}

impl OpenGraph {
    pub fn new(url: String, title: &str, description: &str) -> Self {
        Self {
            url,
            title: title.to_owned(),
            description: description.to_owned(),
            site_name: None,
            og_type: None,
        }
    }

    /// Site-wide fields, only set on the home page.
    pub fn with_site(mut self, config: &SiteConfig) -> Self {
        self.site_name = Some(config.site.name.clone());
        self.og_type = Some("website");
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
}
