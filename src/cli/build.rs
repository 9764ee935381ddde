//! `build` command: write the sitemap.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::generator::sitemap::build_sitemap;
use crate::log;

pub fn run_build(config: &SiteConfig) -> Result<()> {
    match super::block_on(build_sitemap(config))?? {
        Some(_) => {}
        None => log!("build"; "sitemap disabled, nothing to do"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config_at;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_writes_sitemap_from_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("questions/01-variables")).unwrap();
        fs::create_dir_all(temp.path().join("questions/02-loops")).unwrap();

        let config = test_config_at(
            temp.path(),
            "[questions]\ndir = \"questions\"\n[wiki]\nslugs = [\"loops\"]",
        );
        run_build(&config).unwrap();

        let xml = fs::read_to_string(temp.path().join("public/sitemap.xml")).unwrap();
        assert!(xml.contains("/questions/01-variables</loc>"));
        assert!(xml.contains("/questions/02-loops</loc>"));
        assert!(xml.contains("/wiki/loops</loc>"));
    }

    #[test]
    fn test_build_fails_on_missing_question_dir() {
        let temp = TempDir::new().unwrap();
        let config = test_config_at(temp.path(), "[questions]\ndir = \"nope\"");

        assert!(run_build(&config).is_err());
        assert!(!temp.path().join("public/sitemap.xml").exists());
    }
}
