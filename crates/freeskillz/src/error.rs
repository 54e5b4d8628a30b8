//! Error types for the FreeSkillz core.
//!
//! Every failure here is recoverable at the call site: the page stays
//! interactive and surfaces the message to the user, whether the
//! catalog was missing, a document was malformed, or a name failed
//! validation.

use std::path::PathBuf;

use thiserror::Error;

use sitekit::SourceError;

/// The main error type for FreeSkillz operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Store Errors ===
    /// Failed to open or create the local store database.
    #[error("failed to open store at {path}: {source}")]
    StoreOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A local store operation failed.
    #[error("store operation failed: {0}")]
    Store(#[from] rusqlite::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Content Errors ===
    /// A requested document does not exist.
    #[error("not found: {resource}")]
    NotFound {
        /// The missing resource (document path or course id).
        resource: String,
    },

    /// A document or stored value held malformed JSON.
    #[error("failed to parse {resource}: {source}")]
    Parse {
        /// The resource that failed to parse.
        resource: String,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// Fetching a document failed for a reason other than absence.
    #[error("failed to fetch {resource}: {message}")]
    Fetch {
        /// The resource that failed to fetch.
        resource: String,
        /// Description of what went wrong.
        message: String,
    },

    // === Input Errors ===
    /// Caller-supplied input failed validation.
    #[error("invalid input: {message}")]
    Validation {
        /// Description of the validation failure.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },
}

/// A specialized Result type for FreeSkillz operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl From<SourceError> for Error {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::NotFound { path } => Self::NotFound { resource: path },
            SourceError::Fetch { path, message } => Self::Fetch {
                resource: path,
                message,
            },
        }
    }
}

impl Error {
    /// Create a new validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new not-found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Check if this error means a resource was missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error came from malformed JSON.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Check if this error is a validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::not_found("courses/index.json");
        assert_eq!(err.to_string(), "not found: courses/index.json");

        let err = Error::validation("name must not be empty");
        assert_eq!(err.to_string(), "invalid input: name must not be empty");
    }

    #[test]
    fn test_error_classification() {
        assert!(Error::not_found("x").is_not_found());
        assert!(!Error::not_found("x").is_validation());
        assert!(Error::validation("x").is_validation());
        assert!(!Error::validation("x").is_parse());
    }

    #[test]
    fn test_parse_error_classification() {
        let json_err = serde_json::from_str::<i32>("not json").unwrap_err();
        let err = Error::Parse {
            resource: "enrollments".to_string(),
            source: json_err,
        };
        assert!(err.is_parse());
        assert!(err.to_string().contains("enrollments"));
    }

    #[test]
    fn test_from_source_error_not_found() {
        let err: Error = SourceError::NotFound {
            path: "courses/webdev.json".to_string(),
        }
        .into();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_source_error_fetch() {
        let err: Error = SourceError::Fetch {
            path: "courses/index.json".to_string(),
            message: "connection refused".to_string(),
        }
        .into();
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_from_rusqlite_error() {
        let result = rusqlite::Connection::open_with_flags(
            "/nonexistent/path/db.sqlite",
            rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY,
        );
        if let Err(sqlite_err) = result {
            let err: Error = sqlite_err.into();
            assert!(matches!(err, Error::Store(_)));
        }
    }
}
