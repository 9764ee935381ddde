//! `meta` command: print the metadata of one page as JSON.

use anyhow::Result;

use crate::cli::args::MetaPage;
use crate::config::SiteConfig;
use crate::log;
use crate::seo::{PageMetadata, listing_metadata, question_metadata, root_metadata, wiki_metadata};

pub fn run_meta(page: &MetaPage, pretty: bool, config: &SiteConfig) -> Result<()> {
    let meta = page_metadata(page, config);
    if let MetaPage::Wiki { slug } = page
        && meta.is_not_found()
    {
        log!("warning"; "unknown wiki slug `{}`", slug);
    }
    super::emit_json(&meta, pretty, None)
}

fn page_metadata(page: &MetaPage, config: &SiteConfig) -> PageMetadata {
    match page {
        MetaPage::Root => root_metadata(config),
        MetaPage::Questions => listing_metadata(config),
        MetaPage::Question { id } => question_metadata(config, id),
        MetaPage::Wiki { slug } => wiki_metadata(config, slug),
    }
}
