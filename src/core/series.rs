use crate::core::types::{DataPoint, PointField};

/// Largest finite value of `field` across `points`, floored at `0.0`.
///
/// An empty slice yields `0.0`; NaN and infinite values are ignored. Hosts use this to keep axis ranges in sync
/// with appended data, so the floor matches the `[0, max]` loss range.
#[must_use]
pub fn range_max(points: &[DataPoint], field: PointField) -> f64 {
    points
        .iter()
        .map(|point| point.field(field))
        .filter(|value| value.is_finite())
        .fold(0.0, |highest, value| if value > highest { value } else { highest })
}
