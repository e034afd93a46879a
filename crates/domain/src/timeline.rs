//! Timeline shaping.
//!
//! Turns raw balance snapshots into a series a chart can consume
//! directly: sorted ascending by timestamp, one point per timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::portfolio::TimelineSnapshot;

/// A single chart point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    /// Point position on the time axis.
    pub timestamp: DateTime<Utc>,
    /// Point position on the value axis, in USD.
    pub total_value_usd: f64,
}

/// A chart-ready series of portfolio values over time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TimelineSeries {
    points: Vec<TimelinePoint>,
}

impl TimelineSeries {
    /// Builds a series from raw snapshots.
    ///
    /// Snapshots are sorted ascending by timestamp. When two snapshots
    /// share a timestamp the later one in the input wins.
    #[must_use]
    pub fn from_snapshots(snapshots: Vec<TimelineSnapshot>) -> Self {
        let mut points: Vec<TimelinePoint> = snapshots
            .into_iter()
            .map(|s| TimelinePoint {
                timestamp: s.timestamp,
                total_value_usd: s.total_value_usd,
            })
            .collect();

        // Stable sort keeps input order among equal timestamps, so the
        // last duplicate survives the dedup below.
        points.sort_by_key(|p| p.timestamp);
        points.reverse();
        points.dedup_by_key(|p| p.timestamp);
        points.reverse();

        Self { points }
    }

    /// The shaped points, oldest first.
    #[must_use]
    pub fn points(&self) -> &[TimelinePoint] {
        &self.points
    }

    /// Number of points in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest value in the series, for axis scaling.
    #[must_use]
    pub fn min_value(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|p| p.total_value_usd)
            .reduce(f64::min)
    }

    /// Largest value in the series, for axis scaling.
    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|p| p.total_value_usd)
            .reduce(f64::max)
    }

    /// First and last timestamps, when the series is non-empty.
    #[must_use]
    pub fn time_bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some((first.timestamp, last.timestamp)),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn snapshot(secs: i64, value: f64) -> TimelineSnapshot {
        TimelineSnapshot {
            timestamp: Utc.timestamp_opt(secs, 0).unwrap(),
            total_value_usd: value,
        }
    }

    #[test]
    fn empty_input_yields_empty_series() {
        let series = TimelineSeries::from_snapshots(vec![]);
        assert!(series.is_empty());
        assert_eq!(series.min_value(), None);
        assert_eq!(series.max_value(), None);
        assert_eq!(series.time_bounds(), None);
    }

    #[test]
    fn points_are_sorted_ascending() {
        let series = TimelineSeries::from_snapshots(vec![
            snapshot(300, 3.0),
            snapshot(100, 1.0),
            snapshot(200, 2.0),
        ]);
        let timestamps: Vec<i64> = series.points().iter().map(|p| p.timestamp.timestamp()).collect();
        assert_eq!(timestamps, vec![100, 200, 300]);
    }

    #[test]
    fn duplicate_timestamps_keep_last_input_value() {
        let series = TimelineSeries::from_snapshots(vec![
            snapshot(100, 1.0),
            snapshot(200, 2.0),
            snapshot(100, 9.0),
        ]);
        assert_eq!(series.len(), 2);
        assert_eq!(series.points()[0].total_value_usd, 9.0);
    }

    #[test]
    fn value_bounds() {
        let series = TimelineSeries::from_snapshots(vec![
            snapshot(100, 5.0),
            snapshot(200, 1.5),
            snapshot(300, 7.25),
        ]);
        assert_eq!(series.min_value(), Some(1.5));
        assert_eq!(series.max_value(), Some(7.25));
    }

    #[test]
    fn time_bounds_span_the_series() {
        let series = TimelineSeries::from_snapshots(vec![snapshot(300, 1.0), snapshot(100, 2.0)]);
        let (start, end) = series.time_bounds().unwrap();
        assert_eq!(start.timestamp(), 100);
        assert_eq!(end.timestamp(), 300);
    }
}
