use serde::{Deserialize, Serialize};

use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};

/// Blank border around the plotting region, applied on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub x: f64,
    pub y: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(50.0, 50.0)
    }
}

/// Inner rectangle of the surface where data is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Derives the plot area as the viewport minus `margins` on every side.
    pub fn resolve(viewport: Viewport, margins: Margins) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !margins.x.is_finite() || !margins.y.is_finite() || margins.x < 0.0 || margins.y < 0.0 {
            return Err(ChartError::InvalidMargins {
                x: margins.x,
                y: margins.y,
            });
        }

        let width = f64::from(viewport.width) - margins.x * 2.0;
        let height = f64::from(viewport.height) - margins.y * 2.0;
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidMargins {
                x: margins.x,
                y: margins.y,
            });
        }

        Ok(Self {
            left: margins.x,
            top: margins.y,
            width,
            height,
        })
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_area_subtracts_margins_twice() {
        let area = PlotArea::resolve(Viewport::new(300, 200), Margins::new(50.0, 50.0))
            .expect("valid area");
        assert_eq!((area.width, area.height), (200.0, 100.0));
        assert_eq!((area.right(), area.bottom()), (250.0, 150.0));
    }

    #[test]
    fn margins_consuming_the_surface_are_rejected() {
        let result = PlotArea::resolve(Viewport::new(300, 200), Margins::new(50.0, 100.0));
        assert!(matches!(result, Err(ChartError::InvalidMargins { .. })));
    }

    #[test]
    fn negative_margins_are_rejected() {
        let result = PlotArea::resolve(Viewport::new(300, 200), Margins::new(-1.0, 10.0));
        assert!(result.is_err());
    }
}
