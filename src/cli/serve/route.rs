//! URL → route mapping for the preview server.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route<'a> {
    SitemapXml,
    SitemapJson,
    RootMeta,
    ListingMeta,
    QuestionMeta(Cow<'a, str>),
    WikiMeta(Cow<'a, str>),
    Health,
    NotFound,
}

/// Map a request URL (path plus optional query) to a route.
///
/// A single trailing slash is ignored. Identifiers are percent-decoded and
/// must be one non-empty path segment.
pub fn route(url: &str) -> Route<'_> {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let path = match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    };

    match path {
        "/sitemap.xml" => Route::SitemapXml,
        "/sitemap.json" => Route::SitemapJson,
        "/meta" => Route::RootMeta,
        "/meta/questions" => Route::ListingMeta,
        "/health" => Route::Health,
        _ => {
            if let Some(id) = path.strip_prefix("/meta/questions/").and_then(segment) {
                Route::QuestionMeta(id)
            } else if let Some(slug) = path.strip_prefix("/meta/wiki/").and_then(segment) {
                Route::WikiMeta(slug)
            } else {
                Route::NotFound
            }
        }
    }
}

fn segment(raw: &str) -> Option<Cow<'_, str>> {
    if raw.is_empty() || raw.contains('/') {
        return None;
    }
    percent_decode_str(raw).decode_utf8().ok()
}
