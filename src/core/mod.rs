pub mod collection;
pub mod data_set;
pub mod types;
pub mod windowing;

pub use collection::DataSetCollection;
pub use data_set::{DataSet, EntryRounding};
pub use types::{AxisWindow, DataPoint};
pub use windowing::{VisibleRange, visible_range, visible_ranges};
