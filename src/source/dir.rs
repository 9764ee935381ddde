//! Questions as sub-directories: `public/questions/<id>/`.

use std::path::{Path, PathBuf};

use super::{QuestionSource, SourceError};
use crate::debug;

#[derive(Debug, Clone)]
pub struct DirSource {
    path: PathBuf,
}

impl DirSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuestionSource for DirSource {
    /// Sub-directory names, sorted by bytes. Hidden directories and plain
    /// files are skipped.
    async fn questions(&self) -> Result<Vec<String>, SourceError> {
        let io_err = |e| SourceError::Io(self.path.clone(), e);

        let mut entries = tokio::fs::read_dir(&self.path).await.map_err(io_err)?;
        let mut ids = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
            if !entry.file_type().await.map_err(io_err)?.is_dir() {
                continue;
            }
            let Ok(name) = entry.file_name().into_string() else {
                debug!("questions"; "skipping non-UTF-8 directory {}", entry.path().display());
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            ids.push(name);
        }

        ids.sort_unstable();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_dir_source_sorted_dirs_only() {
        let dir = TempDir::new().unwrap();
        for name in ["13-while-loops", "01-variable-declaration", ".git", "two-sum"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        fs::write(dir.path().join("index.json"), "[]").unwrap();

        let ids = DirSource::new(dir.path()).questions().await.unwrap();
        assert_eq!(
            ids,
            vec!["01-variable-declaration", "13-while-loops", "two-sum"]
        );
    }

    #[tokio::test]
    async fn test_dir_source_empty_dir() {
        let dir = TempDir::new().unwrap();
        let ids = DirSource::new(dir.path()).questions().await.unwrap();
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn test_dir_source_missing_dir() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("questions");

        let err = DirSource::new(&missing).questions().await.unwrap_err();
        assert!(matches!(err, SourceError::Io(ref path, _) if *path == missing));
    }
}
