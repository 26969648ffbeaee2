//! chart-data-rs: data-series core for charting front-ends.
//!
//! This crate owns the label-addressed data set collection and the
//! axis-window visibility computation a rendering layer consumes once per
//! draw pass. It carries no rendering dependencies; the drawing, layout,
//! and gesture layers live in the embedding application.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::ChartData;
pub use error::{ChartError, ChartResult};
