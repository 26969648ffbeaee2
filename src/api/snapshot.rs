use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, DataSet};
use crate::error::{ChartError, ChartResult};

use super::ChartData;

/// Serializable per-set state captured by [`DataSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSetSnapshot {
    pub label: String,
    pub points: Vec<DataPoint>,
    pub x_extent: Option<(f64, f64)>,
    pub y_extent: Option<(f64, f64)>,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSnapshot {
    pub data_sets: Vec<DataSetSnapshot>,
    pub series_metadata: IndexMap<String, String>,
}

impl ChartData {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> DataSnapshot {
        DataSnapshot {
            data_sets: self.data_sets().iter().map(snapshot_set).collect(),
            series_metadata: self.series_metadata.clone(),
        }
    }

    /// Serializes the snapshot as compact JSON.
    pub fn snapshot_json(&self) -> ChartResult<String> {
        serde_json::to_string(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    /// Serializes the snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}

fn snapshot_set(set: &DataSet) -> DataSetSnapshot {
    DataSetSnapshot {
        label: set.label().to_owned(),
        points: set.points().to_vec(),
        x_extent: set.x_extent(),
        y_extent: set.y_extent(),
    }
}
