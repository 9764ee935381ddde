//! `[sitemap]` section.
//!
//! ```toml
//! [sitemap]
//! enable = true
//! output = "public"       # directory the sitemap is written into
//! path = "sitemap.xml"    # file name relative to `output`
//! minify = false
//! strict = false          # fail the build on duplicate or unsafe identifiers
//! ```

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "sitemap")]
pub struct SitemapConfig {
    #[config(inline_doc = "Enable sitemap generation")]
    pub enable: bool,

    #[config(inline_doc = "Output directory, relative to the project root")]
    pub output: PathBuf,

    #[config(inline_doc = "Sitemap file name inside the output directory")]
    pub path: PathBuf,

    #[config(inline_doc = "Strip indentation from the XML")]
    pub minify: bool,

    /// Treat identifier problems (duplicates, characters that need
    /// percent-encoding) as build errors instead of warnings.
    #[config(status = experimental)]
    pub strict: bool,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            output: "public".into(),
            path: "sitemap.xml".into(),
            minify: false,
            strict: false,
        }
    }
}

impl SitemapConfig {
    /// Full path of the written sitemap.
    pub fn output_file(&self) -> PathBuf {
        self.output.join(&self.path)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.path.as_os_str().is_empty() {
            diag.error(Self::FIELDS.path, "sitemap file name must not be empty");
        } else if self.path.is_absolute() {
            diag.error_with_hint(
                Self::FIELDS.path,
                "sitemap path must be relative to the output directory",
                "use a file name like \"sitemap.xml\"",
            );
        }
    }
}
