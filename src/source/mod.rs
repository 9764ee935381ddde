//! Question identifier sources.
//!
//! A source is queried exactly once per sitemap build. Whatever it returns is
//! used verbatim, in order; failures propagate to the caller.
//!
//! | Kind       | Reads                                         |
//! |------------|-----------------------------------------------|
//! | `dir`      | sub-directory names of `[questions] dir`      |
//! | `manifest` | JSON array at `[questions] manifest`          |
//! | `list`     | `[questions] list`                            |

mod dir;
mod manifest;

pub use dir::DirSource;
pub use manifest::ManifestSource;

use std::future::Future;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::{QuestionSourceKind, QuestionsConfig};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("`{0}` is not a JSON array of question identifiers")]
    Manifest(PathBuf, #[source] serde_json::Error),
}

/// Provides the ordered list of question identifiers.
pub trait QuestionSource {
    fn questions(&self) -> impl Future<Output = Result<Vec<String>, SourceError>> + Send;
}

/// Inline identifiers from config.
#[derive(Debug, Clone, Default)]
pub struct ListSource {
    ids: Vec<String>,
}

impl ListSource {
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids }
    }
}

impl QuestionSource for ListSource {
    async fn questions(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.ids.clone())
    }
}

/// The source selected by `[questions] source`.
#[derive(Debug, Clone)]
pub enum AnySource {
    Dir(DirSource),
    Manifest(ManifestSource),
    List(ListSource),
}

impl AnySource {
    pub fn from_config(config: &QuestionsConfig) -> Self {
        match config.source {
            QuestionSourceKind::Dir => Self::Dir(DirSource::new(&config.dir)),
            QuestionSourceKind::Manifest => Self::Manifest(ManifestSource::new(&config.manifest)),
            QuestionSourceKind::List => Self::List(ListSource::new(config.list.clone())),
        }
    }

    /// Short description for log lines.
    pub fn describe(&self) -> String {
        match self {
            Self::Dir(source) => format!("directory {}", source.path().display()),
            Self::Manifest(source) => format!("manifest {}", source.path().display()),
            Self::List(_) => "inline list".to_string(),
        }
    }
}

impl QuestionSource for AnySource {
    async fn questions(&self) -> Result<Vec<String>, SourceError> {
        match self {
            Self::Dir(source) => source.questions().await,
            Self::Manifest(source) => source.questions().await,
            Self::List(source) => source.questions().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_source_keeps_order_and_duplicates() {
        let source = ListSource::new(vec!["b".into(), "a".into(), "b".into()]);
        assert_eq!(source.questions().await.unwrap(), vec!["b", "a", "b"]);
    }

    #[tokio::test]
    async fn test_any_source_from_list_config() {
        let config = QuestionsConfig {
            source: QuestionSourceKind::List,
            list: vec!["two-sum".into()],
            ..QuestionsConfig::default()
        };
        let source = AnySource::from_config(&config);

        assert!(matches!(source, AnySource::List(_)));
        assert_eq!(source.describe(), "inline list");
        assert_eq!(source.questions().await.unwrap(), vec!["two-sum"]);
    }

    #[test]
    fn test_any_source_defaults_to_dir() {
        let source = AnySource::from_config(&QuestionsConfig::default());
        assert!(matches!(source, AnySource::Dir(_)));
    }
}
