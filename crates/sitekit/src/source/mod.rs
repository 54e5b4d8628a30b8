//! Document sources for static JSON content.
//!
//! Both page cores read fixed-location JSON documents (the course
//! catalog, per-course detail files, the crash dataset). This module
//! defines the asynchronous fetch boundary they share, with
//! implementations backed by a content directory, an HTTP origin, and
//! an in-memory map for tests.
//!
//! # Example
//!
//! ```
//! use sitekit::{DocumentSource, MemorySource};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut source = MemorySource::new();
//! source.insert("courses/index.json", b"[]".to_vec());
//!
//! let bytes = source.fetch("courses/index.json").await.unwrap();
//! assert_eq!(bytes, b"[]");
//! # }
//! ```

mod fs;
mod http;
mod memory;

use async_trait::async_trait;
use thiserror::Error;

pub use fs::FsSource;
pub use http::HttpSource;
pub use memory::MemorySource;

/// Errors that can occur while fetching a document.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The document does not exist (or the request reported a
    /// non-success status).
    #[error("document not found: {path}")]
    NotFound {
        /// Relative path of the missing document.
        path: String,
    },

    /// The fetch itself failed (I/O error, transport error, bad path).
    #[error("failed to fetch {path}: {message}")]
    Fetch {
        /// Relative path of the document that failed to fetch.
        path: String,
        /// Description of what went wrong.
        message: String,
    },
}

impl SourceError {
    /// Check if this error means the document was missing, as opposed
    /// to the fetch mechanism failing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// A specialized Result type for document-source operations.
pub type Result<T> = std::result::Result<T, SourceError>;

/// A source of static documents addressed by relative path.
///
/// Implementors provide the actual fetch mechanism (filesystem read,
/// HTTP GET, in-memory lookup). Paths are relative and slash-separated,
/// e.g. `courses/index.json` or `data/crashes.json`.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// The name of this source (for logging/debugging).
    fn name(&self) -> &'static str;

    /// Fetch the raw bytes of the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::NotFound`] if the document does not
    /// exist, or [`SourceError::Fetch`] if the fetch mechanism fails.
    async fn fetch(&self, path: &str) -> Result<Vec<u8>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = SourceError::NotFound {
            path: "courses/index.json".to_string(),
        };
        assert_eq!(err.to_string(), "document not found: courses/index.json");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_fetch_display() {
        let err = SourceError::Fetch {
            path: "data/crashes.json".to_string(),
            message: "connection refused".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("data/crashes.json"));
        assert!(msg.contains("connection refused"));
        assert!(!err.is_not_found());
    }
}
