use serde::{Deserialize, Serialize};

use crate::core::{AxisSpec, DataPoint, Margins, PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::PointerState;
use crate::render::Renderer;

use super::{LineChart, LineStyle};

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable copy of the chart state, for regression tests and
/// debugging tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub margins: Margins,
    pub plot_area: PlotArea,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub line_style: LineStyle,
    pub header: String,
    pub points: Vec<DataPoint>,
    pub pointer: Option<PointerState>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

impl ChartSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> LineChart<R> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            viewport: self.viewport,
            margins: self.margins,
            plot_area: self.plot_area,
            x_axis: self.x_axis.clone(),
            y_axis: self.y_axis.clone(),
            line_style: self.line_style,
            header: self.header.clone(),
            points: self.points.clone(),
            pointer: self.pointer,
        }
    }
}
