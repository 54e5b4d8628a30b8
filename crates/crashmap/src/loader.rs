//! Crash dataset loading.

use sitekit::DocumentSource;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::CrashRecord;

/// Default location of the crash dataset.
pub const DEFAULT_DATASET_PATH: &str = "data/crashes.json";

/// Loads the crash dataset through an injected document source.
///
/// No retries: a failed load is only re-attempted when the caller
/// invokes it again.
#[derive(Debug)]
pub struct RecordLoader<S: DocumentSource> {
    source: S,
    dataset_path: String,
}

impl<S: DocumentSource> RecordLoader<S> {
    /// Create a loader with the default dataset path.
    pub fn new(source: S) -> Self {
        Self::with_path(source, DEFAULT_DATASET_PATH)
    }

    /// Create a loader reading the dataset from a custom path.
    pub fn with_path(source: S, dataset_path: impl Into<String>) -> Self {
        Self {
            source,
            dataset_path: dataset_path.into(),
        }
    }

    /// Load and parse the full record set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the dataset is missing,
    /// [`Error::Parse`] if it holds malformed JSON, or [`Error::Fetch`]
    /// if the fetch mechanism fails.
    pub async fn load(&self) -> Result<Vec<CrashRecord>> {
        debug!(source = self.source.name(), path = %self.dataset_path, "Loading crash dataset");
        let bytes = self.source.fetch(&self.dataset_path).await?;
        let records: Vec<CrashRecord> =
            serde_json::from_slice(&bytes).map_err(|source| Error::Parse {
                resource: self.dataset_path.clone(),
                source,
            })?;

        info!(records = records.len(), "Crash dataset loaded");
        Ok(records)
    }
}
