//! In-memory document source for tests.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;

use super::{DocumentSource, Result, SourceError};

/// A document source backed by an in-memory map.
///
/// Loader tests substitute this for the filesystem or HTTP sources,
/// the same way store tests substitute the in-memory store for the
/// SQLite-backed one.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document at the given path.
    pub fn insert(&mut self, path: impl Into<String>, bytes: Vec<u8>) {
        self.documents.insert(path.into(), bytes);
    }

    /// Insert a document serialized from a JSON-serializable value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized.
    pub fn insert_json<T: Serialize>(
        &mut self,
        path: impl Into<String>,
        value: &T,
    ) -> std::result::Result<(), serde_json::Error> {
        let bytes = serde_json::to_vec(value)?;
        self.insert(path, bytes);
        Ok(())
    }

    /// Number of documents in the source.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the source holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl DocumentSource for MemorySource {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                path: path.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_inserted_document() {
        let mut source = MemorySource::new();
        source.insert("data/crashes.json", b"[]".to_vec());

        let bytes = source.fetch("data/crashes.json").await.unwrap();
        assert_eq!(bytes, b"[]");
    }

    #[tokio::test]
    async fn test_fetch_missing_is_not_found() {
        let source = MemorySource::new();
        let err = source.fetch("courses/index.json").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_insert_json() {
        let mut source = MemorySource::new();
        source
            .insert_json("numbers.json", &vec![1, 2, 3])
            .unwrap();

        let bytes = source.fetch("numbers.json").await.unwrap();
        assert_eq!(bytes, b"[1,2,3]");
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut source = MemorySource::new();
        assert!(source.is_empty());

        source.insert("a.json", Vec::new());
        assert_eq!(source.len(), 1);
        assert!(!source.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(MemorySource::new().name(), "memory");
    }
}
