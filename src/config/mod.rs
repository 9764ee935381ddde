//! Project configuration management for `easyloops.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # one module per TOML section
//! ├── types/         # FieldPath, diagnostics, field status
//! ├── util.rs        # config file discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section          | Purpose                                          |
//! |------------------|--------------------------------------------------|
//! | `[site]`         | Site name, home page text, base URL              |
//! | `[sitemap]`      | Sitemap output location, minify, strict mode     |
//! | `[questions]`    | Where question identifiers come from             |
//! | `[wiki]`         | Wiki slug registry                               |
//! | `[meta]`         | Page metadata wording                            |
//! | `[serve]`        | Preview server interface and port                |
//! | `[e2e]`          | Browser test harness and dev server bootstrap    |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    DEFAULT_WIKI_SLUGS, E2eConfig, MetaConfig, QuestionSourceKind, QuestionsConfig, ServeConfig,
    SiteInfoConfig, SitemapConfig, WebServerConfig, WikiConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, ConfigPresence, FieldPath};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    log,
};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "easyloops.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `easyloops.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory, parent of the config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Keys written in the file, for field status checks (internal use only)
    #[serde(skip)]
    pub presence: ConfigPresence,

    #[serde(default)]
    pub site: SiteInfoConfig,

    #[serde(default)]
    pub sitemap: SitemapConfig,

    #[serde(default)]
    pub questions: QuestionsConfig,

    #[serde(default)]
    pub wiki: WikiConfig,

    #[serde(default)]
    pub meta: MetaConfig,

    #[serde(default)]
    pub serve: ServeConfig,

    #[serde(default)]
    pub e2e: E2eConfig,
}

impl SiteConfig {
    /// Load configuration for a command.
    ///
    /// Searches upward from cwd for the config file; the project root is the
    /// directory containing it.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path =
            find_config_file(&cli.config).ok_or_else(|| ConfigError::NotFound(cli.config.clone()))?;

        let mut config = Self::from_path(&config_path)?;
        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        config.config_path = config_path;
        config.finalize(&root, cli);
        config.validate()?;

        Ok(config)
    }

    /// Load from file, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let mut config: Self =
            serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
                ignored.push(path.to_string());
            })
            .map_err(ConfigError::Toml)?;
        config.presence = ConfigPresence::from_toml(content).map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Shorthand for `config.get_root().join(path)`.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    // ========================================================================
    // finalize: paths + cli overrides
    // ========================================================================

    /// Resolve paths against `root` and apply CLI overrides.
    pub fn finalize(&mut self, root: &Path, cli: &Cli) {
        self.root = root.to_path_buf();
        self.normalize_paths();
        self.apply_command_options(cli);
        self.site.normalize();
    }

    fn normalize_paths(&mut self) {
        self.sitemap.output = self.root_join(&self.sitemap.output);
        self.questions.dir = self.root_join(&self.questions.dir);
        self.questions.manifest = self.root_join(&self.questions.manifest);
        self.e2e.test_dir = self.root_join(&self.e2e.test_dir);
        self.e2e.web_server.cwd = Some(match self.e2e.web_server.cwd.take() {
            Some(cwd) => self.root_join(cwd),
            None => self.root.clone(),
        });
    }

    fn apply_command_options(&mut self, cli: &Cli) {
        if let Some(url) = &cli.site_url {
            self.site.url = url.clone();
        }

        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            Commands::Serve { interface, port } => {
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
            }
            Commands::Init { .. }
            | Commands::Query { .. }
            | Commands::Meta { .. }
            | Commands::E2e { .. } => {}
        }
    }

    fn apply_build_args(&mut self, args: &BuildArgs) {
        Self::update_option(&mut self.sitemap.enable, args.sitemap.as_ref());
        Self::update_option(&mut self.sitemap.minify, args.minify.as_ref());
        if args.strict {
            self.sitemap.strict = true;
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section, reporting all problems at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::with_presence(self.presence.clone());

        self.site.validate_field_status(&mut diag);
        self.sitemap.validate_field_status(&mut diag);
        self.questions.validate_field_status(&mut diag);
        self.wiki.validate_field_status(&mut diag);
        self.meta.validate_field_status(&mut diag);
        self.serve.validate_field_status(&mut diag);
        self.e2e.validate_field_status(&mut diag);

        self.site.validate(&mut diag);
        self.sitemap.validate(&mut diag);
        self.questions.validate(&mut diag);
        self.wiki.validate(&mut diag);
        self.e2e.validate(&mut diag);

        diag.print_hints_and_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields so typos in tests surface.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// Fully resolved config rooted at `root`, as commands see it.
#[cfg(test)]
pub fn test_config_at(root: &Path, content: &str) -> SiteConfig {
    use clap::Parser;

    let cli = Cli::parse_from(["easyloops", "query"]);
    let mut config = test_parse_config(content);
    config.finalize(root, &cli);
    config
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_invalid_toml_is_rejected() {
        let result = SiteConfig::parse_with_ignored("[site\nname = \"EasyLoops\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.url, "https://easyloops.app");
        assert_eq!(config.wiki.slugs.len(), DEFAULT_WIKI_SLUGS.len());
        assert_eq!(config.serve.port, 3001);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\nname = \"EasyLoops\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.name, "EasyLoops");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_finalize_resolves_paths() {
        let config = test_config_at(Path::new("/srv/easyloops"), "");

        assert_eq!(config.sitemap.output, PathBuf::from("/srv/easyloops/public"));
        assert_eq!(
            config.questions.dir,
            PathBuf::from("/srv/easyloops/public/questions")
        );
        assert_eq!(
            config.e2e.web_server.cwd,
            Some(PathBuf::from("/srv/easyloops"))
        );
    }

    #[test]
    fn test_finalize_trims_site_url() {
        let config = test_config_at(Path::new("/srv"), "[site]\nurl = \"https://easyloops.app/\"");
        assert_eq!(config.site.url, "https://easyloops.app");
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "easyloops",
            "--site-url",
            "http://localhost:3001/",
            "build",
            "--sitemap=false",
            "--strict",
        ]);
        let mut config = test_parse_config("");
        config.finalize(Path::new("/srv"), &cli);

        assert_eq!(config.site.url, "http://localhost:3001");
        assert!(!config.sitemap.enable);
        assert!(config.sitemap.strict);
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::parse_from(["easyloops", "serve", "--port", "4000"]);
        let mut config = test_parse_config("[serve]\nport = 3005");
        config.finalize(Path::new("/srv"), &cli);
        assert_eq!(config.serve.port, 4000);
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = test_parse_config(
            "[site]\nurl = \"ftp://x\"\n[wiki]\nslugs = [\"a b\"]\n[e2e]\ntimeout = 0",
        );
        let err = config.validate().unwrap_err();
        let diag = match err.downcast::<ConfigError>() {
            Ok(ConfigError::Diagnostics(diag)) => diag,
            other => panic!("unexpected error: {other:?}"),
        };
        assert_eq!(diag.errors().len(), 3);
    }

    #[test]
    fn test_loaded_config_reports_experimental_keys() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "[sitemap]\nstrict = false\n").unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert!(config.presence.contains("sitemap.strict"));

        let mut diag = ConfigDiagnostics::with_presence(config.presence.clone());
        config.sitemap.validate_field_status(&mut diag);
        assert_eq!(diag.hints().len(), 1);
        assert!(config.validate().is_ok());
    }
}
