mod chart;
mod config;
mod line_style;
mod render_frame_builder;
mod snapshot;
mod training;

pub use chart::LineChart;
pub use config::{LineChartConfig, RenderStyle};
pub use line_style::{LineStyle, LineStyleUpdate};
pub use snapshot::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1};
pub use training::EpochMetrics;
