use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-windowing")]
use rayon::prelude::*;

use crate::core::{AxisWindow, DataSet, DataSetCollection};

/// Inclusive index interval of the samples a renderer must draw.
///
/// An empty range means nothing falls inside the current axis window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleRange {
    bounds: Option<(usize, usize)>,
}

impl VisibleRange {
    #[must_use]
    pub const fn empty() -> Self {
        Self { bounds: None }
    }

    pub(crate) fn from_bounds(min: usize, max: usize) -> Self {
        debug_assert!(min <= max);
        Self {
            bounds: Some((min, max)),
        }
    }

    #[must_use]
    pub fn min(&self) -> Option<usize> {
        self.bounds.map(|(min, _)| min)
    }

    #[must_use]
    pub fn max(&self) -> Option<usize> {
        self.bounds.map(|(_, max)| max)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bounds.map_or(0, |(min, max)| max - min + 1)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.bounds
            .is_some_and(|(min, max)| index >= min && index <= max)
    }

    /// Restartable forward iterator over the contained indices.
    pub fn iter(&self) -> RangeInclusive<usize> {
        match self.bounds {
            Some((min, max)) => min..=max,
            // An inverted bound is the canonical empty inclusive range.
            None => 1..=0,
        }
    }
}

impl IntoIterator for VisibleRange {
    type Item = usize;
    type IntoIter = RangeInclusive<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &VisibleRange {
    type Item = usize;
    type IntoIter = RangeInclusive<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Computes the inclusive index range of `set` that must be drawn for
/// `window`.
///
/// The low bound backs off one index when the first in-window sample lies
/// strictly inside the window, so a line segment entering the viewport
/// keeps its off-screen anchor point. A sample sitting exactly on the
/// window minimum is itself the low bound and gets no extra padding.
///
/// Runs two binary searches over the sorted samples; O(log n) per call.
#[must_use]
pub fn visible_range(set: &DataSet, window: AxisWindow) -> VisibleRange {
    let points = set.points();
    let lower_edge = points.partition_point(|point| point.x < window.min());
    let upper_edge = points.partition_point(|point| point.x <= window.max());
    if lower_edge >= upper_edge {
        return VisibleRange::empty();
    }

    let high = upper_edge - 1;
    let low = if points[lower_edge].x > window.min() {
        lower_edge.saturating_sub(1)
    } else {
        lower_edge
    };
    VisibleRange::from_bounds(low, high)
}

/// Computes per-set visible ranges for every member of `collection`.
#[must_use]
pub fn visible_ranges(collection: &DataSetCollection, window: AxisWindow) -> Vec<VisibleRange> {
    // For many large series, optional parallel fan-out keeps results
    // identical while reducing wall-clock time per draw pass.
    #[cfg(feature = "parallel-windowing")]
    {
        collection
            .sets()
            .par_iter()
            .map(|set| visible_range(set, window))
            .collect()
    }

    #[cfg(not(feature = "parallel-windowing"))]
    {
        collection
            .sets()
            .iter()
            .map(|set| visible_range(set, window))
            .collect()
    }
}
