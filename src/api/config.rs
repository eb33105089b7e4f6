use serde::{Deserialize, Serialize};

use crate::core::{Margins, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Ambient drawing constants for axes, labels and the hover marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub axis_color: Color,
    pub text_color: Color,
    pub axis_stroke_width: f64,
    pub font_size_px: f64,
    pub tick_length_px: f64,
    /// Distance from the x baseline down to tick label baselines.
    pub x_tick_label_offset_px: f64,
    /// Distance from the y baseline left to tick label centers.
    pub y_tick_label_offset_px: f64,
    pub hover_marker_radius_px: f64,
    pub hover_label_offset_px: f64,
    /// Tick marks are skipped for an axis spanning more integers than this.
    pub max_tick_marks: usize,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            axis_color: Color::BLACK,
            text_color: Color::BLACK,
            axis_stroke_width: 1.0,
            font_size_px: 10.0,
            tick_length_px: 5.0,
            x_tick_label_offset_px: 20.0,
            y_tick_label_offset_px: 10.0,
            hover_marker_radius_px: 5.0,
            hover_label_offset_px: 10.0,
            max_tick_marks: 10_000,
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> ChartResult<()> {
        self.axis_color.validate()?;
        self.text_color.validate()?;
        for (name, value) in [
            ("axis_stroke_width", self.axis_stroke_width),
            ("font_size_px", self.font_size_px),
            ("hover_marker_radius_px", self.hover_marker_radius_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "render style `{name}` must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("tick_length_px", self.tick_length_px),
            ("x_tick_label_offset_px", self.x_tick_label_offset_px),
            ("y_tick_label_offset_px", self.y_tick_label_offset_px),
            ("hover_label_offset_px", self.hover_label_offset_px),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "render style `{name}` must be finite"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default)]
    pub style: RenderStyle,
}

impl LineChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            style: RenderStyle::default(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// Reads a config such as
    /// `{"viewport": {"width": 600, "height": 400}, "margins": {"x": 40, "y": 30}}`.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))
    }
}
