//! Summary statistics and decade histogram.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::record::CrashRecord;

/// Aggregate statistics over a record set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Number of records.
    pub count: usize,
    /// Sum of fatalities across all records (absent counts as 0).
    pub total_fatalities: u64,
    /// Mean fatalities per record, rounded to one decimal place;
    /// 0.0 for an empty set.
    pub average_fatalities: f64,
}

/// One bar of the per-decade histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecadeCount {
    /// Decade label: the year truncated to its lower multiple of ten.
    pub decade: i32,
    /// Number of records in the decade.
    pub count: usize,
}

/// Compute aggregate statistics over the given records.
///
/// The empty set yields all zeroes; there is no division by zero.
#[must_use]
pub fn compute_summary(records: &[CrashRecord]) -> Summary {
    let count = records.len();
    let total_fatalities: u64 = records
        .iter()
        .map(|r| u64::from(r.fatality_count()))
        .sum();

    #[allow(clippy::cast_precision_loss)]
    let average_fatalities = if count == 0 {
        0.0
    } else {
        let mean = total_fatalities as f64 / count as f64;
        (mean * 10.0).round() / 10.0
    };

    Summary {
        count,
        total_fatalities,
        average_fatalities,
    }
}

/// Bucket records by decade, ascending.
///
/// The bucket key is `floor(Year / 10) * 10`. The result is sparse:
/// only decades with at least one record appear.
#[must_use]
pub fn compute_decade_histogram(records: &[CrashRecord]) -> Vec<DecadeCount> {
    let mut buckets: BTreeMap<i32, usize> = BTreeMap::new();
    for record in records {
        // div_euclid floors, so pre-1900s (or BCE) years still land in
        // the right bucket.
        let decade = record.year.div_euclid(10) * 10;
        *buckets.entry(decade).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(decade, count)| DecadeCount { decade, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, fatalities: Option<u32>) -> CrashRecord {
        CrashRecord {
            latitude: None,
            longitude: None,
            location: None,
            year,
            kind: "Accident".to_string(),
            fatalities,
            country: None,
        }
    }

    #[test]
    fn test_summary_empty_set_is_all_zeroes() {
        let summary = compute_summary(&[]);
        assert_eq!(
            summary,
            Summary {
                count: 0,
                total_fatalities: 0,
                average_fatalities: 0.0,
            }
        );
    }

    #[test]
    fn test_summary_absent_fatalities_count_as_zero() {
        let records = vec![
            record(1970, Some(10)),
            record(1980, Some(5)),
            record(1990, None),
        ];
        let summary = compute_summary(&records);

        assert_eq!(summary.count, 3);
        assert_eq!(summary.total_fatalities, 15);
        assert!((summary.average_fatalities - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_average_rounds_to_one_decimal() {
        // 10 / 3 = 3.333... -> 3.3
        let records = vec![record(1970, Some(10)), record(1971, None), record(1972, None)];
        let summary = compute_summary(&records);
        assert!((summary.average_fatalities - 3.3).abs() < f64::EPSILON);

        // 5 / 3 = 1.666... -> 1.7
        let records = vec![record(1970, Some(5)), record(1971, None), record(1972, None)];
        let summary = compute_summary(&records);
        assert!((summary.average_fatalities - 1.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_histogram_buckets_by_decade() {
        let records = vec![record(1972, None), record(1975, None), record(1988, None)];
        let histogram = compute_decade_histogram(&records);

        assert_eq!(
            histogram,
            vec![
                DecadeCount {
                    decade: 1970,
                    count: 2
                },
                DecadeCount {
                    decade: 1980,
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_histogram_is_sparse() {
        // A 1900s record and a 2020s record: no empty buckets between
        let records = vec![record(1908, None), record(2021, None)];
        let histogram = compute_decade_histogram(&records);

        assert_eq!(histogram.len(), 2);
        assert_eq!(histogram[0].decade, 1900);
        assert_eq!(histogram[1].decade, 2020);
    }

    #[test]
    fn test_histogram_empty_set() {
        assert!(compute_decade_histogram(&[]).is_empty());
    }

    #[test]
    fn test_histogram_decade_boundaries() {
        let records = vec![record(1969, None), record(1970, None), record(1979, None)];
        let histogram = compute_decade_histogram(&records);

        assert_eq!(
            histogram,
            vec![
                DecadeCount {
                    decade: 1960,
                    count: 1
                },
                DecadeCount {
                    decade: 1970,
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn test_histogram_negative_years_floor_correctly() {
        let records = vec![record(-5, None)];
        let histogram = compute_decade_histogram(&records);
        assert_eq!(histogram[0].decade, -10);
    }
}
