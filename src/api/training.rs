use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AxisUpdate, DataPoint, Margins, PointField, Viewport};
use crate::error::ChartResult;
use crate::render::{Color, Renderer};

use super::{LineChart, LineChartConfig, LineStyleUpdate};

/// Per-epoch payload reported by a training loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochMetrics {
    /// Zero-based epoch index.
    pub epoch: u32,
    pub loss: f64,
}

impl EpochMetrics {
    #[must_use]
    pub fn new(epoch: u32, loss: f64) -> Self {
        Self { epoch, loss }
    }
}

impl<R: Renderer> LineChart<R> {
    /// Chart preset for a live loss curve: `epoch` against `loss`, 50 px
    /// margins, a 5 px `#BADA55` line.
    pub fn loss_curve(renderer: R, viewport: Viewport) -> ChartResult<Self> {
        let config = LineChartConfig::new(viewport).with_margins(Margins::new(50.0, 50.0));
        let mut chart = Self::new(renderer, config)?;
        chart
            .set_x_axis(AxisUpdate::label("epoch").with_range(1.0, 2.0))?
            .set_y_axis(AxisUpdate::label("loss").with_range(0.0, 1.0))?
            .set_line_style(
                LineStyleUpdate::new()
                    .with_width(5.0)
                    .with_color(Color::from_rgb8(0xBA, 0xDA, 0x55)),
            )?;
        Ok(chart)
    }

    /// Appends `(epoch + 1, loss)`, resyncs both axis ranges to the data,
    /// updates the header and repaints.
    ///
    /// The x range is `[1, max epoch]`, widened to `[1, 2]` while only one
    /// epoch is known; the y range is `[0, max loss]`.
    pub fn record_epoch(&mut self, metrics: EpochMetrics) -> ChartResult<()> {
        self.add_data(DataPoint::new(f64::from(metrics.epoch) + 1.0, metrics.loss));

        let x_max = Self::range_max(&self.points, PointField::X).max(2.0);
        let y_max = Self::range_max(&self.points, PointField::Y);
        debug!(epoch = metrics.epoch, loss = metrics.loss, x_max, y_max, "record epoch");

        self.set_x_axis(AxisUpdate::range(1.0, x_max))?
            .set_y_axis(AxisUpdate::range(0.0, y_max))?
            .set_header(format!("epoch: {} - loss {}", metrics.epoch, metrics.loss));
        self.render()
    }
}
