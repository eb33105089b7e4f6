use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Stroke used for the data polyline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub width: f64,
    pub color: Color,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: Color::rgb(1.0, 0.0, 0.0),
        }
    }
}

impl LineStyle {
    /// Overwrites only the fields present in `update`.
    pub fn apply(&mut self, update: LineStyleUpdate) -> ChartResult<()> {
        if let Some(width) = update.width {
            if !width.is_finite() || width <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "line width must be finite and > 0, got {width}"
                )));
            }
        }
        if let Some(color) = update.color {
            color.validate()?;
        }

        if let Some(width) = update.width {
            self.width = width;
        }
        if let Some(color) = update.color {
            self.color = color;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LineStyleUpdate {
    pub width: Option<f64>,
    pub color: Option<Color>,
}

impl LineStyleUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}
