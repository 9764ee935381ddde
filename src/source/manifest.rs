//! Questions listed in a JSON manifest.
//!
//! ```json
//! ["01-variable-declaration", "13-while-loops"]
//! ```
//!
//! Objects with an `id` field are accepted too, so an exported question
//! index can be used directly:
//!
//! ```json
//! [{ "id": "two-sum", "title": "Two Sum" }]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{QuestionSource, SourceError};

#[derive(Debug, Clone)]
pub struct ManifestSource {
    path: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ManifestItem {
    Id(String),
    Entry { id: String },
}

impl ManifestItem {
    fn into_id(self) -> String {
        match self {
            Self::Id(id) | Self::Entry { id } => id,
        }
    }
}

impl ManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, bytes: &[u8]) -> Result<Vec<String>, SourceError> {
        let items: Vec<ManifestItem> = serde_json::from_slice(bytes)
            .map_err(|e| SourceError::Manifest(self.path.clone(), e))?;
        Ok(items.into_iter().map(ManifestItem::into_id).collect())
    }
}

impl QuestionSource for ManifestSource {
    async fn questions(&self) -> Result<Vec<String>, SourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| SourceError::Io(self.path.clone(), e))?;
        self.parse(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_manifest(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("index.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn test_manifest_keeps_order() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, r#"["two-sum", "01-variable-declaration"]"#);

        let ids = ManifestSource::new(path).questions().await.unwrap();
        assert_eq!(ids, vec!["two-sum", "01-variable-declaration"]);
    }

    #[tokio::test]
    async fn test_manifest_objects_with_id() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, r#"[{"id": "two-sum", "title": "Two Sum"}, "loops"]"#);

        let ids = ManifestSource::new(path).questions().await.unwrap();
        assert_eq!(ids, vec!["two-sum", "loops"]);
    }

    #[tokio::test]
    async fn test_manifest_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write_manifest(&dir, r#"{"questions": []}"#);

        let err = ManifestSource::new(path).questions().await.unwrap_err();
        assert!(matches!(err, SourceError::Manifest(..)));
    }

    #[tokio::test]
    async fn test_manifest_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = ManifestSource::new(dir.path().join("nope.json"))
            .questions()
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Io(..)));
    }
}
