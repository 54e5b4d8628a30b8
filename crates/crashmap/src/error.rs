//! Error types for the crash-map core.
//!
//! Every failure is recovered at the call site and surfaced as a
//! user-visible message; a failed dataset load leaves the page
//! interactive and is only re-attempted on a new user action.

use thiserror::Error;

use sitekit::SourceError;

/// The main error type for crash-map operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The dataset document does not exist.
    #[error("not found: {resource}")]
    NotFound {
        /// The missing resource.
        resource: String,
    },

    /// A document held malformed JSON.
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

/// A specialized Result type for crash-map operations.
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
}
