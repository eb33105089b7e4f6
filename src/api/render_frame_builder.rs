use tracing::{trace, warn};

use crate::core::{AxisId, AxisSpec, LinearScale, TickLabelDensity, integer_ticks};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, LinePrimitive, PolylinePrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::LineChart;

impl<R: Renderer> LineChart<R> {
    /// Materializes the full scene for the current state.
    ///
    /// Order: data polyline, x axis, y axis, header, hover marker. Fails with
    /// `DegenerateAxis` when an axis has `max <= min`.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let x_scale = self.x_scale()?;
        let y_scale = self.y_scale()?;
        let mut frame = RenderFrame::new(self.viewport);

        if !self.points.is_empty() {
            let path: Vec<(f64, f64)> = self
                .points
                .iter()
                .filter_map(|point| {
                    Some((
                        x_scale.domain_to_pixel(point.x).ok()?,
                        y_scale.domain_to_pixel(point.y).ok()?,
                    ))
                })
                .collect();
            let skipped = self.points.len() - path.len();
            if skipped > 0 {
                warn!(skipped, "skipping non-finite points in line path");
            }
            if !path.is_empty() {
                frame = frame.with_polyline(PolylinePrimitive::new(
                    path,
                    self.line_style.width,
                    self.line_style.color,
                ));
            }
        }

        self.push_x_axis(&mut frame, x_scale);
        self.push_y_axis(&mut frame, y_scale);

        let width = f64::from(self.viewport.width);
        let height = f64::from(self.viewport.height);
        if !self.header.is_empty() {
            frame = frame.with_text(self.text(
                self.header.clone(),
                width / 2.0,
                self.margins.y / 2.0,
            ));
        }

        if let Some(target) = self.hover_target()? {
            frame = frame
                .with_circle(CirclePrimitive::new(
                    target.screen_x,
                    target.screen_y,
                    self.style.hover_marker_radius_px,
                    self.style.axis_stroke_width,
                    self.style.axis_color,
                ))
                .with_text(self.text(
                    self.hover_label(&target),
                    target.screen_x,
                    target.screen_y - self.style.hover_label_offset_px,
                ));
        }

        trace!(
            width,
            height,
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "built render frame"
        );
        Ok(frame)
    }

    fn push_x_axis(&self, frame: &mut RenderFrame, scale: LinearScale) {
        let area = self.plot_area;
        let baseline = area.bottom();
        frame
            .lines
            .push(self.axis_line(area.left, baseline, area.right(), baseline));
        if !self.x_axis.label.is_empty() {
            frame.texts.push(self.text(
                self.x_axis.label.clone(),
                f64::from(self.viewport.width) / 2.0,
                f64::from(self.viewport.height) - self.margins.y / 2.0,
            ));
        }

        self.push_ticks(frame, AxisId::X, &self.x_axis, scale, |chart, tick_px| {
            (
                chart.axis_line(
                    tick_px,
                    baseline,
                    tick_px,
                    baseline + chart.style.tick_length_px,
                ),
                (tick_px, baseline + chart.style.x_tick_label_offset_px),
            )
        });
    }

    fn push_y_axis(&self, frame: &mut RenderFrame, scale: LinearScale) {
        let area = self.plot_area;
        frame
            .lines
            .push(self.axis_line(area.left, area.top, area.left, area.bottom()));
        if !self.y_axis.label.is_empty() {
            frame.texts.push(self.text(
                self.y_axis.label.clone(),
                self.margins.x / 2.0,
                f64::from(self.viewport.height) / 2.0,
            ));
        }

        self.push_ticks(frame, AxisId::Y, &self.y_axis, scale, |chart, tick_px| {
            (
                chart.axis_line(
                    area.left,
                    tick_px,
                    area.left - chart.style.tick_length_px,
                    tick_px,
                ),
                (area.left - chart.style.y_tick_label_offset_px, tick_px),
            )
        });
    }

    /// Emits one mark per integer tick and labels the ticks selected by the
    /// span's [`TickLabelDensity`].
    fn push_ticks(
        &self,
        frame: &mut RenderFrame,
        axis: AxisId,
        spec: &AxisSpec,
        scale: LinearScale,
        place: impl Fn(&Self, f64) -> (LinePrimitive, (f64, f64)),
    ) {
        let tick_count = integer_ticks(spec.min, spec.max).size_hint().1;
        if tick_count.is_none_or(|count| count > self.style.max_tick_marks) {
            warn!(
                %axis,
                min = spec.min,
                max = spec.max,
                limit = self.style.max_tick_marks,
                "axis spans too many integers, skipping tick marks"
            );
            return;
        }

        let density = TickLabelDensity::for_span(spec.span());
        for tick in integer_ticks(spec.min, spec.max) {
            let Ok(tick_px) = scale.domain_to_pixel(tick as f64) else {
                continue;
            };
            let (mark, (label_x, label_y)) = place(self, tick_px);
            frame.lines.push(mark);
            if density.labels(tick) {
                frame
                    .texts
                    .push(self.text(tick.to_string(), label_x, label_y));
            }
        }
    }

    fn axis_line(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> LinePrimitive {
        LinePrimitive::new(
            x1,
            y1,
            x2,
            y2,
            self.style.axis_stroke_width,
            self.style.axis_color,
        )
    }

    fn text(&self, text: String, x: f64, y: f64) -> TextPrimitive {
        TextPrimitive::new(
            text,
            x,
            y,
            self.style.font_size_px,
            self.style.text_color,
            TextHAlign::Center,
        )
    }
}
