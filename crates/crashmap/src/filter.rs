//! Multi-field record filtering.

use tracing::debug;

use crate::record::CrashRecord;

/// Default lower year bound (no lower limit in practice).
pub const DEFAULT_YEAR_MIN: i32 = 0;

/// Default upper year bound (no upper limit in practice).
pub const DEFAULT_YEAR_MAX: i32 = 9999;

/// Type criterion value that matches every record.
pub const TYPE_ALL: &str = "All";

/// Filter criteria for the dashboard.
///
/// Transient UI state, never persisted. Each field defaults to its
/// no-filtering value, so `FilterCriteria::default()` keeps every
/// record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Inclusive lower bound on the incident year.
    pub year_min: i32,
    /// Inclusive upper bound on the incident year.
    pub year_max: i32,
    /// Incident type to keep; [`TYPE_ALL`] keeps every type.
    pub kind: String,
    /// Case-insensitive substring matched against the country; empty
    /// disables the axis.
    pub region: String,
    /// Inclusive lower bound on the fatality count.
    pub fatalities_min: u32,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            year_min: DEFAULT_YEAR_MIN,
            year_max: DEFAULT_YEAR_MAX,
            kind: TYPE_ALL.to_string(),
            region: String::new(),
            fatalities_min: 0,
        }
    }
}

impl FilterCriteria {
    /// Build criteria from free-text UI inputs.
    ///
    /// Empty or unparsable values fall back to the no-filtering
    /// default for their axis, mirroring how the page coerces its
    /// input fields.
    #[must_use]
    pub fn from_raw(
        year_min: &str,
        year_max: &str,
        kind: &str,
        region: &str,
        fatalities_min: &str,
    ) -> Self {
        let kind = kind.trim();
        Self {
            year_min: year_min.trim().parse().unwrap_or(DEFAULT_YEAR_MIN),
            year_max: year_max.trim().parse().unwrap_or(DEFAULT_YEAR_MAX),
            kind: if kind.is_empty() {
                TYPE_ALL.to_string()
            } else {
                kind.to_string()
            },
            region: region.trim().to_string(),
            fatalities_min: fatalities_min.trim().parse().unwrap_or(0),
        }
    }

    /// Check if a record satisfies every axis of the criteria.
    #[must_use]
    pub fn matches(&self, record: &CrashRecord) -> bool {
        if record.year < self.year_min || record.year > self.year_max {
            return false;
        }

        if self.kind != TYPE_ALL && record.kind != self.kind {
            return false;
        }

        if !self.region.is_empty() {
            let needle = self.region.to_lowercase();
            let matched = record
                .country
                .as_ref()
                .is_some_and(|country| country.to_lowercase().contains(&needle));
            if !matched {
                return false;
            }
        }

        record.fatality_count() >= self.fatalities_min
    }
}

/// Keep the records satisfying the criteria, preserving input order.
#[must_use]
pub fn apply_filter(records: &[CrashRecord], criteria: &FilterCriteria) -> Vec<CrashRecord> {
    let filtered: Vec<CrashRecord> = records
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect();
    debug!(kept = filtered.len(), total = records.len(), "Filter applied");
    filtered
}
