use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::DataSet;

/// Ordered collection of data sets owned by a chart's data container.
///
/// Insertion order is preserved and is the tie-break order when several
/// sets share a label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSetCollection {
    sets: Vec<DataSet>,
}

impl DataSetCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sets(sets: Vec<DataSet>) -> Self {
        Self { sets }
    }

    pub fn push(&mut self, set: DataSet) {
        self.sets.push(set);
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
    pub fn sets(&self) -> &[DataSet] {
        &self.sets
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DataSet> {
        self.sets.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataSet> {
        self.sets.iter()
    }

    pub fn remove(&mut self, index: usize) -> Option<DataSet> {
        (index < self.sets.len()).then(|| self.sets.remove(index))
    }

    pub fn clear(&mut self) {
        self.sets.clear();
    }

    /// Returns the first set whose label matches, in insertion order.
    #[must_use]
    pub fn data_set_for_label(&self, label: &str, ignore_case: bool) -> Option<&DataSet> {
        self.sets
            .iter()
            .find(|set| set.label_matches(label, ignore_case))
    }

    /// Returns the index of the first set whose label matches.
    #[must_use]
    pub fn index_for_label(&self, label: &str, ignore_case: bool) -> Option<usize> {
        self.sets
            .iter()
            .position(|set| set.label_matches(label, ignore_case))
    }

    /// Returns every matching index in insertion order.
    #[must_use]
    pub fn indices_for_label(&self, label: &str, ignore_case: bool) -> SmallVec<[usize; 2]> {
        self.sets
            .iter()
            .enumerate()
            .filter(|(_, set)| set.label_matches(label, ignore_case))
            .map(|(index, _)| index)
            .collect()
    }

    /// Aggregate x extent across all member sets.
    #[must_use]
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        merge_extents(self.sets.iter().map(DataSet::x_extent))
    }

    /// Aggregate y extent across all member sets.
    #[must_use]
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        merge_extents(self.sets.iter().map(DataSet::y_extent))
    }
}

impl<'a> IntoIterator for &'a DataSetCollection {
    type Item = &'a DataSet;
    type IntoIter = std::slice::Iter<'a, DataSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn merge_extents(extents: impl Iterator<Item = Option<(f64, f64)>>) -> Option<(f64, f64)> {
    extents
        .flatten()
        .reduce(|(acc_min, acc_max), (min, max)| (acc_min.min(min), acc_max.max(max)))
}
