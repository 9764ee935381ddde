//! `[wiki]` section: the registry of concept pages.
//!
//! The slug list is the only source of wiki pages. It is injected into the
//! sitemap builder and the metadata lookup instead of living in a global.

use crate::config::ConfigDiagnostics;
use crate::generator::sitemap::check::{IdentifierKind, check_identifiers};
use macros::Config;
use serde::{Deserialize, Serialize};

/// Slugs shipped with the site.
pub const DEFAULT_WIKI_SLUGS: &[&str] = &[
    "algorithms",
    "arrays",
    "async-programming",
    "backtracking",
    "camelcase",
    "chars",
    "classes",
    "conditionals",
    "constraints",
    "conventions",
    "data-structures",
    "data-types",
    "debugging",
    "design-patterns",
    "dynamic-programming",
    "exception-handling",
    "explicit",
    "file-io",
    "floating-point",
    "functions",
    "gracefully",
    "graphs",
    "greedy-algorithms",
    "inheritance",
    "inference",
    "interfaces",
    "late-initialized",
    "loops",
    "memory-management",
    "optimization",
    "parsing",
    "polymorphism",
    "programming-concepts",
    "reassignment",
    "recursion",
    "searching",
    "snake-case",
    "sorting",
    "stdin",
    "strings",
    "template",
    "testing",
    "threading",
    "trees",
    "uninitialized",
    "val",
    "variable",
    "variable-declarations",
];

#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "wiki")]
pub struct WikiConfig {
    /// Wiki page slugs, in sitemap order.
    pub slugs: Vec<String>,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            slugs: DEFAULT_WIKI_SLUGS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl WikiConfig {
    pub fn contains(&self, slug: &str) -> bool {
        self.slugs.iter().any(|s| s == slug)
    }

    /// Slugs are known at configuration time, so problems are hard errors.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for issue in check_identifiers(IdentifierKind::Wiki, &self.slugs) {
            diag.error_with_hint(
                Self::FIELDS.slugs,
                issue.to_string(),
                "use lowercase words joined by '-'",
            );
        }
    }
}
