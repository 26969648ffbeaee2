mod chart_data;
mod data_controller;
mod snapshot;

pub use chart_data::ChartData;
pub use snapshot::{DataSetSnapshot, DataSnapshot};
