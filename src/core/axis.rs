use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::scale::LinearScale;
use crate::error::{ChartError, ChartResult};

/// Lower bound applied to every axis maximum set through [`AxisUpdate`].
pub const MIN_AXIS_MAX: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisId {
    X,
    Y,
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Label and data range of one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Default for AxisSpec {
    fn default() -> Self {
        Self {
            label: String::new(),
            min: 0.0,
            max: MIN_AXIS_MAX,
        }
    }
}

impl AxisSpec {
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Applies a partial update; untouched fields keep their value.
    ///
    /// `max` is clamped to at least [`MIN_AXIS_MAX`]. `min` is stored as
    /// given, so `min >= max` is representable and only rejected when the
    /// axis is mapped to pixels.
    pub fn apply(&mut self, update: AxisUpdate) -> ChartResult<()> {
        if let Some((min, max)) = update.range {
            if !min.is_finite() || !max.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "axis range must be finite: [{min}, {max}]"
                )));
            }
        }

        if let Some(label) = update.label {
            self.label = label;
        }
        if let Some((min, max)) = update.range {
            self.min = min;
            self.max = max.max(MIN_AXIS_MAX);
        }
        Ok(())
    }

    /// Builds the pixel mapping for this axis over `[offset, offset + extent]`.
    pub fn scale(&self, axis: AxisId, pixel_offset: f64, pixel_extent: f64) -> ChartResult<LinearScale> {
        if !self.min.is_finite()
            || !self.max.is_finite()
            || self.max <= self.min
            || !self.span().is_finite()
        {
            return Err(ChartError::DegenerateAxis {
                axis,
                min: self.min,
                max: self.max,
            });
        }
        let scale = LinearScale::new(self.min, self.max, pixel_offset, pixel_extent)?;
        Ok(match axis {
            AxisId::X => scale,
            AxisId::Y => scale.inverted(),
        })
    }
}

/// Partial axis update: label, range, or both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisUpdate {
    pub label: Option<String>,
    pub range: Option<(f64, f64)>,
}

impl AxisUpdate {
    #[must_use]
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            range: None,
        }
    }

    #[must_use]
    pub fn range(min: f64, max: f64) -> Self {
        Self {
            label: None,
            range: Some((min, max)),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some((min, max));
        self
    }
}

/// Which integer ticks carry a numeric label, chosen from the axis span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickLabelDensity {
    Every,
    EveryFifth,
    EveryTenth,
    Hidden,
}

impl TickLabelDensity {
    #[must_use]
    pub fn for_span(span: f64) -> Self {
        if span <= 10.0 {
            Self::Every
        } else if span < 25.0 {
            Self::EveryFifth
        } else if span < 100.0 {
            Self::EveryTenth
        } else {
            Self::Hidden
        }
    }

    #[must_use]
    pub fn labels(self, tick: i64) -> bool {
        match self {
            Self::Every => true,
            Self::EveryFifth => tick % 5 == 0,
            Self::EveryTenth => tick % 10 == 0,
            Self::Hidden => false,
        }
    }
}

/// Integer tick values inside `[min, max]`, ascending.
pub fn integer_ticks(min: f64, max: f64) -> impl Iterator<Item = i64> {
    let (start, end) = if min.is_finite() && max.is_finite() {
        (min.ceil() as i64, max.floor() as i64)
    } else {
        (1, 0)
    };
    start..=end
}
