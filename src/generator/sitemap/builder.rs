//! Sitemap entry assembly.
//!
//! Entries are laid out in a fixed order:
//!
//! ```text
//! <base>                      daily    1.0
//! <base>/questions            daily    0.9
//! <base>/questions/<id>...    weekly   0.8   (question source order)
//! <base>/wiki/<slug>...       monthly  0.7   (configuration order)
//! ```
//!
//! Nothing is sorted, deduplicated or encoded here. Identifier hygiene is
//! reported separately by [`super::check`].

use super::entry::{ChangeFrequency, Priority, SiteEntry};
use crate::utils::date::DateTimeUtc;

/// Path of the question listing page.
pub const QUESTIONS_PATH: &str = "/questions";
/// Path prefix of wiki pages.
pub const WIKI_PATH: &str = "/wiki";

/// Build the full entry list.
///
/// Output length is always `2 + question_ids.len() + wiki_slugs.len()`.
pub fn build_entries<Q, W>(
    base_url: &str,
    question_ids: &[Q],
    wiki_slugs: &[W],
    now: DateTimeUtc,
) -> Vec<SiteEntry>
where
    Q: AsRef<str>,
    W: AsRef<str>,
{
    let mut entries = Vec::with_capacity(2 + question_ids.len() + wiki_slugs.len());

    entries.push(SiteEntry::new(
        base_url.to_owned(),
        now,
        ChangeFrequency::Daily,
        Priority::HOME,
    ));
    entries.push(SiteEntry::new(
        format!("{base_url}{QUESTIONS_PATH}"),
        now,
        ChangeFrequency::Daily,
        Priority::LISTING,
    ));

    entries.extend(question_ids.iter().map(|id| {
        SiteEntry::new(
            question_url(base_url, id.as_ref()),
            now,
            ChangeFrequency::Weekly,
            Priority::QUESTION,
        )
    }));

    entries.extend(wiki_slugs.iter().map(|slug| {
        SiteEntry::new(
            wiki_url(base_url, slug.as_ref()),
            now,
            ChangeFrequency::Monthly,
            Priority::WIKI,
        )
    }));

    entries
}

/// `<base>/questions/<id>`
pub fn question_url(base_url: &str, id: &str) -> String {
    format!("{base_url}{QUESTIONS_PATH}/{id}")
}

/// `<base>/wiki/<slug>`
pub fn wiki_url(base_url: &str, slug: &str) -> String {
    format!("{base_url}{WIKI_PATH}/{slug}")
}
