//! `query` command: print the sitemap entries as JSON.
//!
//! Same entries `build` writes, without touching the output directory.

use anyhow::Result;

use crate::cli::args::QueryArgs;
use crate::config::SiteConfig;
use crate::generator::sitemap::{self, SiteEntry};
use crate::log;
use crate::source::AnySource;
use crate::utils::plural::plural_count;

pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let entries = collect_entries(config)?;
    log!("query"; "found {}", plural_count(entries.len(), "sitemap url"));
    super::emit_json(&entries, args.pretty, args.output.as_deref())
}

fn collect_entries(config: &SiteConfig) -> Result<Vec<SiteEntry>> {
    let source = AnySource::from_config(&config.questions);
    log!("query"; "reading questions from {}", source.describe());
    super::block_on(sitemap::generate(config, &source))?
}
