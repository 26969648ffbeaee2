use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid axis window: min={min}, max={max}")]
    InvalidWindow { min: f64, max: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("data set index {index} out of bounds (len={len})")]
    DataSetIndexOutOfBounds { index: usize, len: usize },
}
