//! Dashboard state and view derivation.
//!
//! The page loads the dataset once and re-derives everything it
//! renders (markers, summary figures, histogram) whenever the filter
//! changes. Re-derivation is a full recomputation over the filtered
//! set; nothing is updated incrementally.

use sitekit::DocumentSource;
use tracing::debug;

use crate::analytics::{compute_decade_histogram, compute_summary, DecadeCount, Summary};
use crate::error::Result;
use crate::filter::{apply_filter, FilterCriteria};
use crate::loader::RecordLoader;
use crate::record::CrashRecord;

/// The loaded dataset plus view derivation.
///
/// A second `load` racing an earlier one simply replaces the held
/// records when it resolves; last write wins, which is acceptable for
/// a read-mostly single-user page.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    records: Vec<CrashRecord>,
}

impl Dashboard {
    /// Create a dashboard over an already-loaded record set.
    #[must_use]
    pub fn new(records: Vec<CrashRecord>) -> Self {
        Self { records }
    }

    /// Load the dataset through the given loader.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be fetched or parsed.
    pub async fn load<S: DocumentSource>(loader: &RecordLoader<S>) -> Result<Self> {
        Ok(Self::new(loader.load().await?))
    }

    /// The full, unfiltered record set.
    #[must_use]
    pub fn records(&self) -> &[CrashRecord] {
        &self.records
    }

    /// Replace the held records (e.g. after a reload).
    pub fn set_records(&mut self, records: Vec<CrashRecord>) {
        self.records = records;
    }

    /// Derive the rendered view for the given criteria.
    ///
    /// Full recomputation over the filtered set on every call.
    #[must_use]
    pub fn view(&self, criteria: &FilterCriteria) -> DashboardView {
        let records = apply_filter(&self.records, criteria);
        let summary = compute_summary(&records);
        let histogram = compute_decade_histogram(&records);
        debug!(
            kept = records.len(),
            decades = histogram.len(),
            "Dashboard view derived"
        );

        DashboardView {
            records,
            summary,
            histogram,
        }
    }
}

/// Everything the page renders for one filter state.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// The filtered record set.
    pub records: Vec<CrashRecord>,
    /// Aggregate statistics over the filtered set.
    pub summary: Summary,
    /// Per-decade histogram over the filtered set.
    pub histogram: Vec<DecadeCount>,
}

impl DashboardView {
    /// The filtered records eligible for spatial rendering (both
    /// coordinates present). Positionless records are excluded here
    /// but still counted in `summary` and `histogram`.
    pub fn markers(&self) -> impl Iterator<Item = &CrashRecord> {
        self.records.iter().filter(|r| r.has_position())
    }
}
