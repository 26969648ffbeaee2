use indexmap::IndexMap;

use crate::core::{
    AxisWindow, DataSet, DataSetCollection, VisibleRange, visible_range, visible_ranges,
};
use crate::error::{ChartError, ChartResult};

/// Chart-facing data container: an ordered data set collection plus
/// free-form series metadata.
///
/// Groups the state a rendering layer reads once per draw pass; windowing
/// results are computed on demand from the immutable member sets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub(super) sets: DataSetCollection,
    pub(super) series_metadata: IndexMap<String, String>,
}

impl ChartData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_data_sets(sets: Vec<DataSet>) -> Self {
        Self {
            sets: DataSetCollection::with_sets(sets),
            series_metadata: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn data_sets(&self) -> &[DataSet] {
        self.sets.sets()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    #[must_use]
    pub fn data_set_at(&self, index: usize) -> Option<&DataSet> {
        self.sets.get(index)
    }

    /// First data set whose label matches, in insertion order.
    #[must_use]
    pub fn data_set_for_label(&self, label: &str, ignore_case: bool) -> Option<&DataSet> {
        self.sets.data_set_for_label(label, ignore_case)
    }

    #[must_use]
    pub fn index_for_label(&self, label: &str, ignore_case: bool) -> Option<usize> {
        self.sets.index_for_label(label, ignore_case)
    }

    /// Aggregate x extent across all member sets.
    #[must_use]
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        self.sets.x_extent()
    }

    /// Aggregate y extent across all member sets.
    #[must_use]
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        self.sets.y_extent()
    }

    /// Visible index range of the set at `index` for the given window.
    pub fn visible_range_at(&self, index: usize, window: AxisWindow) -> ChartResult<VisibleRange> {
        let set = self
            .sets
            .get(index)
            .ok_or(ChartError::DataSetIndexOutOfBounds {
                index,
                len: self.sets.len(),
            })?;
        Ok(visible_range(set, window))
    }

    /// Per-set visible ranges, in collection order.
    #[must_use]
    pub fn visible_ranges(&self, window: AxisWindow) -> Vec<VisibleRange> {
        visible_ranges(&self.sets, window)
    }

    #[must_use]
    pub fn series_metadata(&self) -> &IndexMap<String, String> {
        &self.series_metadata
    }

    #[must_use]
    pub fn series_metadata_value(&self, key: &str) -> Option<&str> {
        self.series_metadata.get(key).map(String::as_str)
    }
}
