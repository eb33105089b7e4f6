use thiserror::Error;

use crate::core::AxisId;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("margins leave no plot area: x={x}, y={y}")]
    InvalidMargins { x: f64, y: f64 },

    #[error("{axis} axis range is degenerate: min={min}, max={max}")]
    DegenerateAxis { axis: AxisId, min: f64, max: f64 },

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
