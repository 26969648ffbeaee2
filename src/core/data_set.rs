use std::cmp::Ordering;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

/// Rounding mode for entry index search when no sample sits exactly on the
/// requested x value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryRounding {
    /// Greatest index whose x is at or below the requested value.
    Down,
    /// Least index whose x is at or above the requested value.
    Up,
    /// Index with the smallest absolute x distance; ties resolve to the
    /// lower index.
    Closest,
}

/// Named, ordered series of samples sorted ascending by x.
///
/// Construction validates the ordering invariant; the point sequence is
/// immutable afterwards, so index-based results stay valid for the lifetime
/// of the set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSet {
    label: String,
    points: Vec<DataPoint>,
    x_extent: Option<(f64, f64)>,
    y_extent: Option<(f64, f64)>,
}

impl DataSet {
    /// Builds a data set from samples already sorted ascending by x.
    ///
    /// Invariants:
    /// - all coordinates are finite
    /// - x values are monotonically non-decreasing (duplicates allowed)
    pub fn new(label: impl Into<String>, points: Vec<DataPoint>) -> ChartResult<Self> {
        if points.iter().any(|point| !point.is_finite()) {
            return Err(ChartError::InvalidData(
                "data set coordinates must be finite".to_owned(),
            ));
        }
        if points.windows(2).any(|pair| pair[0].x > pair[1].x) {
            return Err(ChartError::InvalidData(
                "data set x values must be sorted ascending".to_owned(),
            ));
        }
        Ok(Self::from_sorted(label.into(), points))
    }

    /// Builds a data set from unordered samples.
    ///
    /// Non-finite samples are dropped and the remainder is stably sorted by
    /// x, keeping duplicate-x samples in input order.
    #[must_use]
    pub fn from_unordered(label: impl Into<String>, mut points: Vec<DataPoint>) -> Self {
        let original_count = points.len();
        points.retain(|point| point.is_finite());
        points.sort_by(|a, b| a.x.total_cmp(&b.x));

        let dropped_count = original_count - points.len();
        if dropped_count > 0 {
            warn!(
                dropped_count,
                canonical_count = points.len(),
                "dropped non-finite samples while canonicalizing data set"
            );
        }
        Self::from_sorted(label.into(), points)
    }

    fn from_sorted(label: String, points: Vec<DataPoint>) -> Self {
        let mut x_extent: Option<(f64, f64)> = None;
        let mut y_extent: Option<(f64, f64)> = None;
        for point in &points {
            x_extent = Some(match x_extent {
                Some((min, max)) => (min.min(point.x), max.max(point.x)),
                None => (point.x, point.x),
            });
            y_extent = Some(match y_extent {
                Some((min, max)) => (min.min(point.y), max.max(point.y)),
                None => (point.y, point.y),
            });
        }

        Self {
            label,
            points,
            x_extent,
            y_extent,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn point_at(&self, index: usize) -> Option<DataPoint> {
        self.points.get(index).copied()
    }

    /// Minimum and maximum x over all samples, `None` for an empty set.
    #[must_use]
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        self.x_extent
    }

    /// Minimum and maximum y over all samples, `None` for an empty set.
    #[must_use]
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        self.y_extent
    }

    /// Compares the stored label against `query`.
    ///
    /// `ignore_case` compares with locale-independent simple case folding;
    /// otherwise the comparison is ordinal.
    #[must_use]
    pub fn label_matches(&self, query: &str, ignore_case: bool) -> bool {
        if ignore_case {
            self.label.to_lowercase() == query.to_lowercase()
        } else {
            self.label == query
        }
    }

    /// Finds the index of the sample matching `x` under the given rounding.
    ///
    /// Returns `None` for an empty set or a non-finite `x`, when `Down`
    /// finds every sample above `x`, or when `Up` finds every sample
    /// below `x`. Runs in O(log n).
    #[must_use]
    pub fn entry_index_for_x(&self, x: f64, rounding: EntryRounding) -> Option<usize> {
        if self.points.is_empty() || !x.is_finite() {
            return None;
        }

        let at_or_above = self.points.partition_point(|point| point.x < x);
        let at_or_below = self.points.partition_point(|point| point.x <= x).checked_sub(1);

        match rounding {
            EntryRounding::Up => (at_or_above < self.points.len()).then_some(at_or_above),
            EntryRounding::Down => at_or_below,
            EntryRounding::Closest => {
                let above = (at_or_above < self.points.len()).then_some(at_or_above);
                match (at_or_below, above) {
                    (Some(below), Some(above)) => {
                        let below_dist = OrderedFloat((self.points[below].x - x).abs());
                        let above_dist = OrderedFloat((self.points[above].x - x).abs());
                        Some(match below_dist.cmp(&above_dist) {
                            Ordering::Less => below,
                            Ordering::Greater => above,
                            Ordering::Equal => below.min(above),
                        })
                    }
                    (Some(below), None) => Some(below),
                    (None, Some(above)) => Some(above),
                    (None, None) => None,
                }
            }
        }
    }
}
