//! Page metadata for the site's routes.
//!
//! | Page                   | Title                               | Canonical             |
//! |------------------------|-------------------------------------|-----------------------|
//! | `/`                    | `[site] title`                      | site URL              |
//! | `/questions`           | `[meta] listing_title`              | `/questions`          |
//! | `/questions/<id>`      | `[meta] question_title`             | `/questions/<id>`     |
//! | `/wiki/<slug>`         | `<wiki_title_prefix> - <Slug Title>` | `/wiki/<slug>`       |
//!
//! Unknown wiki slugs get `[meta] not_found_title` and nothing else.

mod og;

pub use og::{OpenGraph, TwitterCard};

use serde::Serialize;

use crate::config::SiteConfig;
use crate::generator::sitemap::builder::{QUESTIONS_PATH, WIKI_PATH, question_url, wiki_url};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Site-relative path, or an absolute URL for the home page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterCard>,
}

impl PageMetadata {
    fn page(title: String, description: String, canonical: String, open_graph: OpenGraph) -> Self {
        Self {
            title,
            description: Some(description),
            canonical: Some(canonical),
            open_graph: Some(open_graph),
            twitter: None,
        }
    }

    fn title_only(title: String) -> Self {
        Self {
            title,
            description: None,
            canonical: None,
            open_graph: None,
            twitter: None,
        }
    }

    /// Whether this is the not-found placeholder.
    pub fn is_not_found(&self) -> bool {
        self.canonical.is_none()
    }
}

/// Home page metadata.
pub fn root_metadata(config: &SiteConfig) -> PageMetadata {
    let site = &config.site;
    let og = OpenGraph::new(site.url.clone(), &site.title, &site.description).with_site(config);

    let mut meta = PageMetadata::page(
        site.title.clone(),
        site.description.clone(),
        site.url.clone(),
        og,
    );
    meta.twitter = Some(TwitterCard {
        card: config.meta.twitter_card.clone(),
        title: site.title.clone(),
        description: site.description.clone(),
    });
    meta
}

/// `/questions` listing metadata.
pub fn listing_metadata(config: &SiteConfig) -> PageMetadata {
    let meta = &config.meta;
    let url = format!("{}{QUESTIONS_PATH}", config.site.url);
    PageMetadata::page(
        meta.listing_title.clone(),
        meta.listing_description.clone(),
        QUESTIONS_PATH.to_owned(),
        OpenGraph::new(url, &meta.listing_title, &meta.listing_description),
    )
}

/// Question page metadata. Every identifier gets the same wording.
pub fn question_metadata(config: &SiteConfig, id: &str) -> PageMetadata {
    let meta = &config.meta;
    PageMetadata::page(
        meta.question_title.clone(),
        meta.question_description.clone(),
        format!("{QUESTIONS_PATH}/{id}"),
        OpenGraph::new(
            question_url(&config.site.url, id),
            &meta.question_title,
            &meta.question_description,
        ),
    )
}

/// Wiki page metadata, or the not-found placeholder for unregistered slugs.
pub fn wiki_metadata(config: &SiteConfig, slug: &str) -> PageMetadata {
    if !config.wiki.contains(slug) {
        return PageMetadata::title_only(config.meta.not_found_title.clone());
    }

    let topic = title_case(slug);
    let title = format!("{} - {topic}", config.meta.wiki_title_prefix);
    let description = format!(
        "Learn about {} in programming with {}",
        topic.to_lowercase(),
        config.site.name
    );

    PageMetadata::page(
        title.clone(),
        description.clone(),
        format!("{WIKI_PATH}/{slug}"),
        OpenGraph::new(wiki_url(&config.site.url, slug), &title, &description),
    )
}

/// `"late-initialized"` → `"Late Initialized"`.
///
/// Only the first character of each word changes.
pub fn title_case(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
