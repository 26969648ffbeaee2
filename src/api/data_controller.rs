use tracing::{debug, trace, warn};

use crate::core::{DataSet, DataSetCollection};

use super::ChartData;

impl ChartData {
    /// Appends a data set, keeping insertion order.
    pub fn add_data_set(&mut self, set: DataSet) {
        debug!(label = set.label(), points = set.len(), "add data set");
        self.sets.push(set);
    }

    /// Replaces the whole collection.
    pub fn replace_data_sets(&mut self, sets: Vec<DataSet>) {
        debug!(
            original_count = self.sets.len(),
            new_count = sets.len(),
            "replace data sets"
        );
        self.sets = DataSetCollection::with_sets(sets);
    }

    /// Removes the set at `index`; returns it, or `None` when out of bounds.
    pub fn remove_data_set_at(&mut self, index: usize) -> Option<DataSet> {
        let removed = self.sets.remove(index);
        match &removed {
            Some(set) => trace!(index, label = set.label(), "removed data set"),
            None => warn!(
                index,
                len = self.sets.len(),
                "remove skipped, index out of bounds"
            ),
        }
        removed
    }

    /// Removes every set whose label matches; returns how many were removed.
    pub fn remove_data_sets_for_label(&mut self, label: &str, ignore_case: bool) -> usize {
        let mut removed_count = 0;
        while let Some(index) = self.sets.index_for_label(label, ignore_case) {
            self.sets.remove(index);
            removed_count += 1;
        }
        if removed_count > 0 {
            debug!(label, removed_count, "removed data sets by label");
        }
        removed_count
    }

    pub fn clear_data_sets(&mut self) {
        debug!(original_count = self.sets.len(), "clear data sets");
        self.sets.clear();
    }

    /// Stores a free-form metadata entry, replacing any previous value.
    pub fn set_series_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.series_metadata.insert(key.into(), value.into());
    }

    /// Removes a metadata entry, preserving the order of the remaining keys.
    pub fn remove_series_metadata(&mut self, key: &str) -> Option<String> {
        self.series_metadata.shift_remove(key)
    }
}
