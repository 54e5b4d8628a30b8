//! Crash record type.

use serde::{Deserialize, Serialize};

/// A single incident record, loaded verbatim from the static dataset.
///
/// Field names on the wire are PascalCase, matching the dataset as it
/// ships. Coordinates are optional: a record without a position is
/// excluded from spatial rendering but still counts in every
/// aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrashRecord {
    /// Latitude of the incident, if known.
    #[serde(rename = "Latitude", default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Longitude of the incident, if known.
    #[serde(rename = "Longitude", default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// Human-readable location description.
    #[serde(rename = "Location", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Year of the incident.
    #[serde(rename = "Year")]
    pub year: i32,

    /// Incident type label, e.g. "Accident".
    #[serde(rename = "Type")]
    pub kind: String,

    /// Number of fatalities, if recorded.
    #[serde(rename = "Fatalities", default, skip_serializing_if = "Option::is_none")]
    pub fatalities: Option<u32>,

    /// Country the incident occurred in, if recorded.
    #[serde(rename = "Country", default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl CrashRecord {
    /// Check if this record carries both coordinates, making it
    /// eligible for spatial rendering.
    #[must_use]
    pub fn has_position(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    /// Fatality count for aggregation; an absent value counts as 0.
    #[must_use]
    pub fn fatality_count(&self) -> u32 {
        self.fatalities.unwrap_or(0)
    }
}
