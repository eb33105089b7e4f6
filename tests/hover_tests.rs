use line_graph::api::{LineChart, LineChartConfig};
use line_graph::core::{AxisUpdate, DataPoint, Margins, Viewport};
use line_graph::render::NullRenderer;

fn chart_with_two_points() -> LineChart<NullRenderer> {
    let config = LineChartConfig::new(Viewport::new(300, 200)).with_margins(Margins::new(50.0, 50.0));
    let mut chart = LineChart::new(NullRenderer::default(), config).expect("chart init");
    chart
        .set_x_axis(AxisUpdate::label("epoch").with_range(0.0, 6.0))
        .expect("x axis")
        .set_y_axis(AxisUpdate::label("loss").with_range(0.0, 6.0))
        .expect("y axis")
        .set_data(vec![DataPoint::new(1.0, 1.0), DataPoint::new(5.0, 5.0)]);
    chart
}

#[test]
fn hover_snaps_to_nearest_point_in_screen_space() {
    let mut chart = chart_with_two_points();
    let near_x = chart.map_x_to_pixel(4.6).expect("x map");
    let near_y = chart.map_y_to_pixel(4.2).expect("y map");
    chart.on_pointer_move(near_x, near_y).expect("pointer move");

    let target = chart.hover_target().expect("query").expect("target");
    assert_eq!(target.index, 1);
    assert_eq!(target.point, DataPoint::new(5.0, 5.0));
    assert_eq!(target.screen_x, chart.map_x_to_pixel(5.0).expect("x"));
    assert_eq!(target.screen_y, chart.map_y_to_pixel(5.0).expect("y"));

    let frame = chart.renderer().last_frame.as_ref().expect("frame");
    assert_eq!(frame.circles.len(), 1);
    let marker = frame.circles[0];
    assert_eq!((marker.center_x, marker.center_y), (target.screen_x, target.screen_y));
    assert_eq!(marker.radius, 5.0);

    let label = frame.text("epoch 5 - loss 5").expect("hover label");
    assert_eq!((label.x, label.y), (target.screen_x, target.screen_y - 10.0));
}

#[test]
fn pointer_move_renders_synchronously() {
    let mut chart = chart_with_two_points();
    chart.on_pointer_move(60.0, 140.0).expect("pointer move");
    assert_eq!(chart.renderer().frames_rendered, 1);
    assert!(chart.renderer().last_frame.as_ref().expect("frame").text("epoch 1 - loss 1").is_some());
}

#[test]
fn record_pointer_alone_does_not_render() {
    let mut chart = chart_with_two_points();
    chart.record_pointer(60.0, 140.0);
    assert_eq!(chart.renderer().frames_rendered, 0);
    assert!(chart.pointer().is_some());
}

#[test]
fn pointer_leave_clears_hover_without_rendering() {
    let mut chart = chart_with_two_points();
    chart.on_pointer_move(60.0, 140.0).expect("pointer move");
    chart.on_pointer_leave();

    assert!(chart.pointer().is_none());
    assert_eq!(chart.renderer().frames_rendered, 1);
    assert!(chart.hover_target().expect("query").is_none());

    chart.render().expect("render");
    let frame = chart.renderer().last_frame.as_ref().expect("frame");
    assert!(frame.circles.is_empty());
}

#[test]
fn empty_series_yields_no_hover_target() {
    let config = LineChartConfig::new(Viewport::new(300, 200));
    let mut chart = LineChart::new(NullRenderer::default(), config).expect("chart init");
    chart.on_pointer_move(100.0, 100.0).expect("pointer move");

    assert!(chart.hover_target().expect("query").is_none());
    assert_eq!(chart.renderer().last_circle_count, 0);
}

#[test]
fn equidistant_points_resolve_to_the_first() {
    let mut chart = chart_with_two_points();
    chart.set_data(vec![DataPoint::new(1.5, 3.0), DataPoint::new(4.5, 3.0)]);
    let mid_x = chart.map_x_to_pixel(3.0).expect("x map");
    let mid_y = chart.map_y_to_pixel(3.0).expect("y map");
    chart.record_pointer(mid_x, mid_y);

    let target = chart.hover_target().expect("query").expect("target");
    assert_eq!(target.index, 0);
}

#[test]
fn hover_label_formats_fractional_values() {
    let mut chart = chart_with_two_points();
    chart.set_data(vec![DataPoint::new(3.0, 0.25)]);
    chart.record_pointer(0.0, 0.0);

    let target = chart.hover_target().expect("query").expect("target");
    assert_eq!(chart.hover_label(&target), "epoch 3 - loss 0.25");
}

#[test]
fn non_finite_pointer_counts_as_leaving() {
    let mut chart = chart_with_two_points();
    chart.record_pointer(10.0, 10.0);
    chart.record_pointer(f64::NAN, 10.0);
    assert!(chart.pointer().is_none());
}
