//! Filesystem-backed document source.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::{DocumentSource, Result, SourceError};

/// Serves documents from a content directory on disk.
///
/// This is the deployment mode where the site's static JSON lives next
/// to the pages, with `courses/` and `data/` under the site root.
#[derive(Debug, Clone)]
pub struct FsSource {
    /// Root directory all fetches resolve under.
    root: PathBuf,
}

impl FsSource {
    /// Create a source rooted at the given content directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the content root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a relative document path under the root.
    ///
    /// Absolute paths and `..` components are rejected so a document
    /// path can never escape the content directory.
    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let relative = Path::new(path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if path.is_empty() || escapes {
            return Err(SourceError::Fetch {
                path: path.to_string(),
                message: "path must be relative and stay under the content root".to_string(),
            });
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl DocumentSource for FsSource {
    fn name(&self) -> &'static str {
        "fs"
    }

    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let full = self.resolve(path)?;
        debug!(path = %full.display(), "Reading document from disk");

        match tokio::fs::read(&full).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(SourceError::NotFound {
                path: path.to_string(),
            }),
            Err(e) => Err(SourceError::Fetch {
                path: path.to_string(),
                message: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_root() -> PathBuf {
        let root = std::env::temp_dir().join(format!("sitekit_fs_test_{}", std::process::id()));
        std::fs::create_dir_all(&root).expect("failed to create test root");
        root
    }

    #[tokio::test]
    async fn test_fetch_existing_file() {
        let root = test_root();
        let dir = root.join("courses");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.json"), b"[]").unwrap();

        let source = FsSource::new(&root);
        let bytes = source.fetch("courses/index.json").await.unwrap();
        assert_eq!(bytes, b"[]");

        let _ = std::fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn test_fetch_missing_file_is_not_found() {
        let root = test_root();
        let source = FsSource::new(&root);

        let err = source.fetch("courses/missing.json").await.unwrap_err();
        assert!(err.is_not_found());

        let _ = std::fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn test_fetch_rejects_parent_traversal() {
        let source = FsSource::new("/content");
        let err = source.fetch("../etc/passwd").await.unwrap_err();
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("content root"));
    }

    #[tokio::test]
    async fn test_fetch_rejects_absolute_path() {
        let source = FsSource::new("/content");
        let err = source.fetch("/etc/passwd").await.unwrap_err();
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn test_fetch_rejects_empty_path() {
        let source = FsSource::new("/content");
        assert!(source.fetch("").await.is_err());
    }

    #[test]
    fn test_root_accessor() {
        let source = FsSource::new("/srv/site");
        assert_eq!(source.root(), Path::new("/srv/site"));
    }

    #[test]
    fn test_name() {
        assert_eq!(FsSource::new("/content").name(), "fs");
    }
}
