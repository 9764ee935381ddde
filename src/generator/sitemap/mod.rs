//! Sitemap generation.
//!
//! ```text
//! QuestionSource ──await once──► check ──► build_entries ──► xml::render ──► <output>/<path>
//!                                 │
//!                                 └─ warn, or fail with sitemap.strict
//! ```

pub mod builder;
pub mod check;
pub mod entry;
pub mod xml;

pub use builder::build_entries;
pub use entry::{ChangeFrequency, Priority, SiteEntry};

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::config::SiteConfig;
use crate::generator::minify_xml;
use crate::source::{AnySource, QuestionSource};
use crate::utils::{date::DateTimeUtc, plural::plural_count};
use crate::{debug, log};
use check::{IdentifierKind, check_identifiers};

/// Build and write the sitemap if enabled.
pub async fn build_sitemap(config: &SiteConfig) -> Result<Option<PathBuf>> {
    if !config.sitemap.enable {
        debug!("sitemap"; "disabled, skipping");
        return Ok(None);
    }

    let source = AnySource::from_config(&config.questions);
    let entries = generate(config, &source).await?;
    write_sitemap(config, &entries).map(Some)
}

/// Query the source and build entries stamped with the current time.
pub async fn generate<S: QuestionSource>(config: &SiteConfig, source: &S) -> Result<Vec<SiteEntry>> {
    generate_at(config, source, DateTimeUtc::now()).await
}

/// Like [`generate`], with an explicit generation time.
pub async fn generate_at<S: QuestionSource>(
    config: &SiteConfig,
    source: &S,
    now: DateTimeUtc,
) -> Result<Vec<SiteEntry>> {
    let question_ids = source
        .questions()
        .await
        .context("failed to load question identifiers")?;

    debug!(
        "sitemap";
        "{}, {}",
        plural_count(question_ids.len(), "question"),
        plural_count(config.wiki.slugs.len(), "wiki page")
    );

    report_issues(config, &question_ids)?;

    Ok(build_entries(
        &config.site.url,
        &question_ids,
        &config.wiki.slugs,
        now,
    ))
}

fn report_issues(config: &SiteConfig, question_ids: &[String]) -> Result<()> {
    let issues = check_identifiers(IdentifierKind::Question, question_ids);
    if issues.is_empty() {
        return Ok(());
    }

    for issue in &issues {
        log!("warning"; "{}", issue);
    }
    if config.sitemap.strict {
        bail!(
            "{} with sitemap.strict enabled",
            plural_count(issues.len(), "identifier problem")
        );
    }
    Ok(())
}

/// Render and write entries, creating parent directories.
pub fn write_sitemap(config: &SiteConfig, entries: &[SiteEntry]) -> Result<PathBuf> {
    let path = config.sitemap.output_file();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let xml = xml::render(entries);
    let xml = minify_xml(&xml, config.sitemap.minify);
    fs::write(&path, xml.as_bytes())
        .with_context(|| format!("failed to write sitemap to {}", path.display()))?;

    log!("sitemap"; "{} ({})", path.display(), plural_count(entries.len(), "url"));
    Ok(path)
}
