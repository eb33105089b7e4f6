use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, LinearScale};

/// Last known pointer position over the surface, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    pub screen_x: f64,
    pub screen_y: f64,
}

impl PointerState {
    #[must_use]
    pub fn new(screen_x: f64, screen_y: f64) -> Self {
        Self { screen_x, screen_y }
    }
}

/// Data point resolved as nearest to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverTarget {
    /// Position of the point in insertion order.
    pub index: usize,
    pub point: DataPoint,
    pub screen_x: f64,
    pub screen_y: f64,
    pub distance: f64,
}

/// Exhaustive nearest-point scan in screen space.
///
/// Points that cannot be mapped (non-finite values) are skipped. Among
/// equally distant points the earliest one wins.
#[must_use]
pub fn nearest_point(
    points: &[DataPoint],
    x_scale: LinearScale,
    y_scale: LinearScale,
    pointer: PointerState,
) -> Option<HoverTarget> {
    points
        .iter()
        .enumerate()
        .filter_map(|(index, point)| {
            let screen_x = x_scale.domain_to_pixel(point.x).ok()?;
            let screen_y = y_scale.domain_to_pixel(point.y).ok()?;
            let distance =
                (screen_x - pointer.screen_x).hypot(screen_y - pointer.screen_y);
            Some(HoverTarget {
                index,
                point: *point,
                screen_x,
                screen_y,
                distance,
            })
        })
        .min_by_key(|target| OrderedFloat(target.distance))
}
