pub mod axis;
pub mod layout;
pub mod scale;
pub mod series;
pub mod types;

pub use axis::{AxisId, AxisSpec, AxisUpdate, TickLabelDensity, integer_ticks};
pub use layout::{Margins, PlotArea};
pub use scale::LinearScale;
pub use series::range_max;
pub use types::{DataPoint, PointField, Viewport};
