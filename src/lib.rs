//! line-graph: incremental, pointer-interactive line chart.
//!
//! The chart owns an append-only point sequence, two axis specs and a
//! renderer. Callers push points (typically one per training epoch), then
//! ask for a redraw; every redraw rebuilds the full scene as a
//! backend-agnostic [`render::RenderFrame`].

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{LineChart, LineChartConfig};
pub use error::{ChartError, ChartResult};
