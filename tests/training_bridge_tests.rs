use line_graph::api::{EpochMetrics, LineChart};
use line_graph::core::{DataPoint, Viewport};
use line_graph::render::NullRenderer;

fn loss_chart() -> LineChart<NullRenderer> {
    LineChart::loss_curve(NullRenderer::default(), Viewport::new(300, 200)).expect("chart init")
}

#[test]
fn loss_curve_preset_labels_axes() {
    let chart = loss_chart();
    assert_eq!(chart.x_axis().label, "epoch");
    assert_eq!(chart.y_axis().label, "loss");
    assert!(chart.points().is_empty());
    assert_eq!(chart.renderer().frames_rendered, 0);
}

#[test]
fn first_epoch_renders_with_non_degenerate_axes() {
    let mut chart = loss_chart();
    chart
        .record_epoch(EpochMetrics::new(0, 0.9))
        .expect("record first epoch");

    assert_eq!(chart.points(), &[DataPoint::new(1.0, 0.9)]);
    assert_eq!((chart.x_axis().min, chart.x_axis().max), (1.0, 2.0));
    assert_eq!((chart.y_axis().min, chart.y_axis().max), (0.0, 1.0));
    assert_eq!(chart.header(), "epoch: 0 - loss 0.9");
    assert_eq!(chart.renderer().frames_rendered, 1);
}

#[test]
fn axes_track_appended_epochs() {
    let mut chart = loss_chart();
    for (epoch, loss) in [(0, 1.8), (1, 1.1), (2, 0.7), (3, 0.55), (4, 0.4)] {
        chart
            .record_epoch(EpochMetrics::new(epoch, loss))
            .expect("record epoch");
    }

    assert_eq!(chart.points().len(), 5);
    assert_eq!(chart.points()[4], DataPoint::new(5.0, 0.4));
    assert_eq!((chart.x_axis().min, chart.x_axis().max), (1.0, 5.0));
    assert_eq!((chart.y_axis().min, chart.y_axis().max), (0.0, 1.8));
    assert_eq!(chart.header(), "epoch: 4 - loss 0.4");

    let frame = chart.renderer().last_frame.as_ref().expect("frame");
    assert_eq!(frame.polylines[0].points.len(), 5);
    assert!(frame.text("epoch: 4 - loss 0.4").is_some());
}

#[test]
fn hover_survives_epoch_updates() {
    let mut chart = loss_chart();
    chart.record_epoch(EpochMetrics::new(0, 0.8)).expect("epoch 0");
    chart.record_pointer(250.0, 60.0);
    chart.record_epoch(EpochMetrics::new(1, 0.6)).expect("epoch 1");

    let frame = chart.renderer().last_frame.as_ref().expect("frame");
    assert_eq!(frame.circles.len(), 1);
    assert!(frame.text("epoch 2 - loss 0.6").is_some());
}

#[test]
fn diverged_loss_does_not_stall_later_epochs() {
    let mut chart = loss_chart();
    chart.record_epoch(EpochMetrics::new(0, 0.5)).expect("epoch 0");
    chart
        .record_epoch(EpochMetrics::new(1, f64::INFINITY))
        .expect("infinite loss is recorded");

    assert_eq!(chart.points().len(), 2);
    assert_eq!((chart.x_axis().min, chart.x_axis().max), (1.0, 2.0));
    assert_eq!((chart.y_axis().min, chart.y_axis().max), (0.0, 1.0));
    assert_eq!(chart.header(), "epoch: 1 - loss inf");
    assert_eq!(chart.renderer().frames_rendered, 2);

    chart.record_epoch(EpochMetrics::new(2, 0.3)).expect("epoch 2");

    assert_eq!(chart.points().len(), 3);
    assert_eq!((chart.x_axis().min, chart.x_axis().max), (1.0, 3.0));
    assert_eq!(chart.header(), "epoch: 2 - loss 0.3");
    assert_eq!(chart.renderer().frames_rendered, 3);
    let frame = chart.renderer().last_frame.as_ref().expect("frame");
    assert_eq!(frame.polylines[0].points.len(), 2);
}

#[test]
fn epoch_metrics_deserialize_from_callback_payload() {
    let metrics: EpochMetrics =
        serde_json::from_str(r#"{"epoch": 7, "loss": 0.125}"#).expect("payload");
    assert_eq!(metrics, EpochMetrics::new(7, 0.125));
}
