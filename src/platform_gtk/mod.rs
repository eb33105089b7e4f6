use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::LineChart;
use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::CairoRenderer;

type SharedChart = Rc<RefCell<LineChart<CairoRenderer>>>;

/// Hosts a [`LineChart`] in a GTK `DrawingArea`.
///
/// Pointer motion records the pointer and queues a redraw; leaving the area
/// clears it. All chart access stays on the GTK main thread.
pub struct GtkLineChart {
    chart: SharedChart,
    area: gtk::DrawingArea,
}

impl GtkLineChart {
    #[must_use]
    pub fn new(chart: LineChart<CairoRenderer>) -> Self {
        let viewport = chart.viewport();
        let chart: SharedChart = Rc::new(RefCell::new(chart));

        let area = gtk::DrawingArea::new();
        area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));

        let draw_chart = Rc::clone(&chart);
        area.set_draw_func(move |_, context, width, height| {
            let mut chart = draw_chart.borrow_mut();
            if let Some(allocated) = allocated_viewport(width, height)
                .filter(|allocated| *allocated != chart.viewport())
            {
                if let Err(err) = chart.set_viewport(allocated) {
                    warn!(error = %err, width, height, "keeping previous viewport");
                }
            }
            if let Err(err) = chart.render_on_cairo_context(context) {
                warn!(error = %err, "line chart draw failed");
            }
        });

        let motion = gtk::EventControllerMotion::new();
        let motion_chart = Rc::clone(&chart);
        let motion_area = area.downgrade();
        motion.connect_motion(move |_, x, y| {
            motion_chart.borrow_mut().record_pointer(x, y);
            if let Some(area) = motion_area.upgrade() {
                area.queue_draw();
            }
        });
        let leave_chart = Rc::clone(&chart);
        let leave_area = area.downgrade();
        motion.connect_leave(move |_| {
            leave_chart.borrow_mut().on_pointer_leave();
            if let Some(area) = leave_area.upgrade() {
                area.queue_draw();
            }
        });
        area.add_controller(motion);

        Self { chart, area }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    #[must_use]
    pub fn chart(&self) -> SharedChart {
        Rc::clone(&self.chart)
    }

    /// Mutates the chart (e.g. `record_epoch`-style appends) and queues a redraw.
    pub fn update(
        &self,
        mutate: impl FnOnce(&mut LineChart<CairoRenderer>) -> ChartResult<()>,
    ) -> ChartResult<()> {
        let result = mutate(&mut self.chart.borrow_mut());
        self.area.queue_draw();
        result
    }
}

/// Viewport for the size GTK hands the draw func, if it is positive.
fn allocated_viewport(width: i32, height: i32) -> Option<Viewport> {
    let viewport = Viewport::new(u32::try_from(width).ok()?, u32::try_from(height).ok()?);
    viewport.is_valid().then_some(viewport)
}
