//! `init` command: write a commented default `easyloops.toml`.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::{
    CONFIG_FILE,
    section::{
        E2eConfig, MetaConfig, QuestionsConfig, ServeConfig, SiteInfoConfig, SitemapConfig,
        WikiConfig,
    },
};
use crate::log;

/// Generate easyloops.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = format!(
        "# EasyLoops configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    );

    let sections = [
        SiteInfoConfig::template_with_header(),
        SitemapConfig::template_with_header(),
        QuestionsConfig::template_with_header(),
        WikiConfig::template_with_header(),
        MetaConfig::template_with_header(),
        ServeConfig::template_with_header(),
        // includes [e2e.retries], [e2e.workers] and [e2e.web_server]
        E2eConfig::template_with_header(),
    ];
    out.push_str(&sections.join("\n"));
    out
}

/// Write the template into `root`, refusing to replace an existing file
/// unless `force` is set.
pub fn write_config(root: &Path, force: bool) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    if path.exists() && !force {
        bail!(
            "'{}' already exists, pass --force to overwrite",
            path.display()
        );
    }

    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

/// Entry point for `easyloops init`.
pub fn run_init(force: bool, dry: bool) -> Result<()> {
    if dry {
        print!("{}", generate_config_template());
        return Ok(());
    }
    let cwd = std::env::current_dir().context("cannot read current directory")?;
    write_config(&cwd, force)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_has_all_sections() {
        let template = generate_config_template();
        for header in [
            "[site]",
            "[sitemap]",
            "[questions]",
            "[wiki]",
            "[meta]",
            "[serve]",
            "[e2e]",
            "[e2e.web_server]",
        ] {
            assert!(template.contains(header), "missing {header}");
        }
    }

    #[test]
    fn test_template_is_valid_toml() {
        let template = generate_config_template();
        let table: toml::Table = toml::from_str(&template).unwrap();
        assert!(table.contains_key("site"));
        assert!(table.contains_key("e2e"));
    }

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), false).unwrap();

        let content = fs::read_to_string(temp.path().join(CONFIG_FILE)).unwrap();
        assert!(content.starts_with("# EasyLoops configuration file"));
    }

    #[test]
    fn test_existing_config_needs_force() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "custom content").unwrap();

        assert!(write_config(temp.path(), false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "custom content");

        write_config(temp.path(), true).unwrap();
        assert_ne!(fs::read_to_string(&path).unwrap(), "custom content");
    }
}
