use tracing::{debug, trace, warn};

use crate::core::{
    AxisId, AxisSpec, AxisUpdate, DataPoint, LinearScale, Margins, PlotArea, PointField, Viewport,
    range_max,
};
use crate::error::ChartResult;
use crate::interaction::{HoverTarget, PointerState, nearest_point};
use crate::render::Renderer;

use super::{LineChartConfig, LineStyle, LineStyleUpdate, RenderStyle};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Continuously updated line plot with axes and a hover tooltip.
///
/// The chart exclusively owns its points and its renderer. Configuration
/// setters return `&mut Self` (or `ChartResult<&mut Self>` when the input can
/// be rejected) so calls chain; none of them repaints. Call
/// [`LineChart::render`] once a batch of changes is complete.
#[derive(Debug)]
pub struct LineChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) viewport: Viewport,
    pub(super) margins: Margins,
    pub(super) plot_area: PlotArea,
    pub(super) style: RenderStyle,
    pub(super) x_axis: AxisSpec,
    pub(super) y_axis: AxisSpec,
    pub(super) line_style: LineStyle,
    pub(super) header: String,
    pub(super) points: Vec<DataPoint>,
    pub(super) pointer: Option<PointerState>,
}

impl<R: Renderer> LineChart<R> {
    pub fn new(renderer: R, config: LineChartConfig) -> ChartResult<Self> {
        let plot_area = PlotArea::resolve(config.viewport, config.margins)?;
        config.style.validate()?;

        Ok(Self {
            renderer,
            viewport: config.viewport,
            margins: config.margins,
            plot_area,
            style: config.style,
            x_axis: AxisSpec::default(),
            y_axis: AxisSpec::default(),
            line_style: LineStyle::default(),
            header: String::new(),
            points: Vec::new(),
            pointer: None,
        })
    }

    /// Maximum of `field` across `points`, or `0.0` when empty.
    #[must_use]
    pub fn range_max(points: &[DataPoint], field: PointField) -> f64 {
        range_max(points, field)
    }

    /// Replaces the margins and recomputes the plot area.
    pub fn set_margins(&mut self, margins: Margins) -> ChartResult<&mut Self> {
        self.plot_area = PlotArea::resolve(self.viewport, margins).inspect_err(|err| {
            warn!(error = %err, "rejecting margins");
        })?;
        self.margins = margins;
        Ok(self)
    }

    /// Resizes the drawing surface and recomputes the plot area.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<&mut Self> {
        self.plot_area = PlotArea::resolve(viewport, self.margins).inspect_err(|err| {
            warn!(error = %err, "rejecting viewport");
        })?;
        self.viewport = viewport;
        Ok(self)
    }

    pub fn set_axis(&mut self, axis: AxisId, update: AxisUpdate) -> ChartResult<&mut Self> {
        let spec = match axis {
            AxisId::X => &mut self.x_axis,
            AxisId::Y => &mut self.y_axis,
        };
        spec.apply(update).inspect_err(|err| {
            warn!(%axis, error = %err, "rejecting axis update");
        })?;
        Ok(self)
    }

    pub fn set_x_axis(&mut self, update: AxisUpdate) -> ChartResult<&mut Self> {
        self.set_axis(AxisId::X, update)
    }

    pub fn set_y_axis(&mut self, update: AxisUpdate) -> ChartResult<&mut Self> {
        self.set_axis(AxisId::Y, update)
    }

    /// Replaces the whole point sequence.
    pub fn set_data(&mut self, points: Vec<DataPoint>) -> &mut Self {
        debug!(count = points.len(), "set data points");
        self.points = points;
        self
    }

    /// Appends one point. Does not repaint.
    pub fn add_data(&mut self, point: DataPoint) -> &mut Self {
        self.points.push(point);
        trace!(count = self.points.len(), "append data point");
        self
    }

    pub fn set_line_style(&mut self, update: LineStyleUpdate) -> ChartResult<&mut Self> {
        self.line_style.apply(update).inspect_err(|err| {
            warn!(error = %err, "rejecting line style update");
        })?;
        Ok(self)
    }

    pub fn set_header(&mut self, header: impl Into<String>) -> &mut Self {
        self.header = header.into();
        self
    }

    /// Stores the pointer position used for hover feedback. Does not repaint.
    ///
    /// A non-finite position is treated as the pointer leaving the surface.
    pub fn record_pointer(&mut self, screen_x: f64, screen_y: f64) -> &mut Self {
        if screen_x.is_finite() && screen_y.is_finite() {
            self.pointer = Some(PointerState::new(screen_x, screen_y));
        } else {
            warn!(screen_x, screen_y, "ignoring non-finite pointer position");
            self.pointer = None;
        }
        self
    }

    pub fn clear_pointer(&mut self) -> &mut Self {
        self.pointer = None;
        self
    }

    /// Pointer-move handler for host input wiring: records and repaints.
    pub fn on_pointer_move(&mut self, screen_x: f64, screen_y: f64) -> ChartResult<()> {
        self.record_pointer(screen_x, screen_y);
        self.render()
    }

    /// Pointer-leave handler for host input wiring. Does not repaint.
    pub fn on_pointer_leave(&mut self) {
        self.clear_pointer();
    }

    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    /// Renders into an external cairo context, e.g. from a GTK draw callback.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    pub fn x_scale(&self) -> ChartResult<LinearScale> {
        self.x_axis
            .scale(AxisId::X, self.plot_area.left, self.plot_area.width)
    }

    pub fn y_scale(&self) -> ChartResult<LinearScale> {
        self.y_axis
            .scale(AxisId::Y, self.plot_area.top, self.plot_area.height)
    }

    pub fn map_x_to_pixel(&self, x: f64) -> ChartResult<f64> {
        self.x_scale()?.domain_to_pixel(x)
    }

    pub fn map_pixel_to_x(&self, pixel: f64) -> ChartResult<f64> {
        self.x_scale()?.pixel_to_domain(pixel)
    }

    pub fn map_y_to_pixel(&self, y: f64) -> ChartResult<f64> {
        self.y_scale()?.domain_to_pixel(y)
    }

    pub fn map_pixel_to_y(&self, pixel: f64) -> ChartResult<f64> {
        self.y_scale()?.pixel_to_domain(pixel)
    }

    /// Resolves the point nearest the recorded pointer, if any.
    pub fn hover_target(&self) -> ChartResult<Option<HoverTarget>> {
        let Some(pointer) = self.pointer else {
            return Ok(None);
        };
        if self.points.is_empty() {
            return Ok(None);
        }
        Ok(nearest_point(
            &self.points,
            self.x_scale()?,
            self.y_scale()?,
            pointer,
        ))
    }

    /// Tooltip text for `target`: `"<x label> <x> - <y label> <y>"`.
    #[must_use]
    pub fn hover_label(&self, target: &HoverTarget) -> String {
        format!(
            "{} {} - {} {}",
            self.x_axis.label, target.point.x, self.y_axis.label, target.point.y
        )
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn axis(&self, axis: AxisId) -> &AxisSpec {
        match axis {
            AxisId::X => &self.x_axis,
            AxisId::Y => &self.y_axis,
        }
    }

    #[must_use]
    pub fn x_axis(&self) -> &AxisSpec {
        &self.x_axis
    }

    #[must_use]
    pub fn y_axis(&self) -> &AxisSpec {
        &self.y_axis
    }

    #[must_use]
    pub fn margins(&self) -> Margins {
        self.margins
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot_area
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn line_style(&self) -> LineStyle {
        self.line_style
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<&mut Self> {
        style.validate()?;
        self.style = style;
        Ok(self)
    }

    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    #[must_use]
    pub fn pointer(&self) -> Option<PointerState> {
        self.pointer
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
