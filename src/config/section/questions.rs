//! `[questions]` section: where question identifiers come from.
//!
//! ```toml
//! [questions]
//! source = "dir"                          # dir | manifest | list
//! dir = "public/questions"                # one sub-directory per question
//! manifest = "public/questions/index.json" # JSON array of identifiers
//! list = []                               # inline identifiers
//! ```

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which question source to read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionSourceKind {
    /// Sub-directories of `dir`.
    #[default]
    Dir,
    /// JSON array in `manifest`.
    Manifest,
    /// The inline `list`.
    List,
}

#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "questions")]
pub struct QuestionsConfig {
    #[config(inline_doc = "dir | manifest | list")]
    pub source: QuestionSourceKind,

    #[config(inline_doc = "Directory with one sub-directory per question")]
    pub dir: PathBuf,

    #[config(inline_doc = "JSON array of question identifiers")]
    pub manifest: PathBuf,

    #[config(inline_doc = "Inline question identifiers")]
    pub list: Vec<String>,
}

impl Default for QuestionsConfig {
    fn default() -> Self {
        Self {
            source: QuestionSourceKind::Dir,
            dir: "public/questions".into(),
            manifest: "public/questions/index.json".into(),
            list: Vec::new(),
        }
    }
}

impl QuestionsConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match self.source {
            QuestionSourceKind::Dir if self.dir.as_os_str().is_empty() => {
                diag.error(Self::FIELDS.dir, "question directory must be set when source = \"dir\"");
            }
            QuestionSourceKind::Manifest if self.manifest.as_os_str().is_empty() => {
                diag.error(
                    Self::FIELDS.manifest,
                    "manifest path must be set when source = \"manifest\"",
                );
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_questions_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.questions.source, QuestionSourceKind::Dir);
        assert_eq!(config.questions.dir, PathBuf::from("public/questions"));
    }

    #[test]
    fn test_questions_list_source() {
        let config = test_parse_config(
            "[questions]\nsource = \"list\"\nlist = [\"01-variable-declaration\", \"13-while-loops\"]",
        );
        assert_eq!(config.questions.source, QuestionSourceKind::List);
        assert_eq!(config.questions.list.len(), 2);
    }

    #[test]
    fn test_questions_unknown_source_rejected() {
        let result: Result<crate::config::SiteConfig, _> =
            toml::from_str("[questions]\nsource = \"http\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_questions_empty_manifest_path() {
        let questions = QuestionsConfig {
            source: QuestionSourceKind::Manifest,
            manifest: PathBuf::new(),
            ..QuestionsConfig::default()
        };
        let mut diag = ConfigDiagnostics::default();
        questions.validate(&mut diag);
        assert_eq!(diag.errors()[0].field.as_str(), "questions.manifest");
    }
}
