//! `[meta]` section: page metadata wording.

use macros::Config;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "meta")]
pub struct MetaConfig {
    /// Title of the `/questions` listing page.
    pub listing_title: String,

    pub listing_description: String,

    /// Title shared by every question page.
    pub question_title: String,

    /// Description shared by every question page.
    pub question_description: String,

    /// Wiki titles are rendered as `<prefix> - <Title Cased Slug>`.
    pub wiki_title_prefix: String,

    /// Title returned for slugs missing from `[wiki] slugs`.
    pub not_found_title: String,

    #[config(inline_doc = "Twitter card type for the home page")]
    pub twitter_card: String,
}

impl Default for MetaConfig {
    fn default() -> Self {
        Self {
            listing_title: "EasyLoops - All Practice Problems".into(),
            listing_description:
                "Browse all interactive programming challenges and practice problems".into(),
            question_title: "EasyLoops - Practice Problems".into(),
            question_description: "Learn programming with interactive practice problems".into(),
            wiki_title_prefix: "EasyLoops Wiki".into(),
            not_found_title: "Page Not Found".into(),
            twitter_card: "summary_large_image".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_meta_override() {
        let config = test_parse_config("[meta]\nquestion_title = \"Practice\"");
        assert_eq!(config.meta.question_title, "Practice");
        assert_eq!(config.meta.not_found_title, "Page Not Found");
    }
}
