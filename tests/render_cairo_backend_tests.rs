#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use line_graph::ChartError;
use line_graph::api::{EpochMetrics, LineChart};
use line_graph::core::Viewport;
use line_graph::render::CairoRenderer;

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_loss_curve_with_hover() {
    let renderer = CairoRenderer::new(300, 200).expect("renderer");
    let mut chart = LineChart::loss_curve(renderer, Viewport::new(300, 200)).expect("chart init");
    chart.record_epoch(EpochMetrics::new(0, 0.9)).expect("epoch 0");
    chart.record_epoch(EpochMetrics::new(1, 0.4)).expect("epoch 1");
    chart.on_pointer_move(240.0, 120.0).expect("pointer move");

    let stats = chart.renderer().last_stats();
    assert_eq!(stats.polylines_drawn, 1);
    assert_eq!(stats.circles_drawn, 1);
    // x: baseline + ticks 1, 2; y: baseline + ticks 0, 1.
    assert_eq!(stats.lines_drawn, 6);
    // axis labels, header, hover label, 4 tick labels.
    assert_eq!(stats.texts_drawn, 8);

    let mut png = Vec::new();
    chart.renderer().write_png(&mut png).expect("png export");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(300, 200).expect("renderer");
    let mut chart = LineChart::loss_curve(renderer, Viewport::new(300, 200)).expect("chart init");
    chart.record_epoch(EpochMetrics::new(0, 0.5)).expect("epoch 0");

    let surface = ImageSurface::create(Format::ARgb32, 300, 200).expect("surface");
    let context = Context::new(&surface).expect("context");
    chart
        .render_on_cairo_context(&context)
        .expect("render on external context");

    let stats = chart.renderer().last_stats();
    assert_eq!(stats.polylines_drawn, 1);
    assert!(stats.texts_drawn >= 3);
}
