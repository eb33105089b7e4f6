use line_graph::api::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, LineChart, LineChartConfig};
use line_graph::core::{AxisUpdate, DataPoint, Viewport};
use line_graph::render::NullRenderer;

fn populated_chart() -> LineChart<NullRenderer> {
    let mut chart = LineChart::new(
        NullRenderer::default(),
        LineChartConfig::new(Viewport::new(640, 360)),
    )
    .expect("chart init");
    chart
        .set_x_axis(AxisUpdate::label("epoch").with_range(1.0, 3.0))
        .expect("x axis")
        .set_header("epoch: 2 - loss 0.3")
        .set_data(vec![
            DataPoint::new(1.0, 0.9),
            DataPoint::new(2.0, 0.5),
            DataPoint::new(3.0, 0.3),
        ])
        .record_pointer(320.0, 180.0);
    chart
}

#[test]
fn snapshot_contract_carries_schema_version_and_state() {
    let chart = populated_chart();
    let json = chart
        .snapshot()
        .to_json_contract_v1_pretty()
        .expect("serialize");

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["schema_version"], CHART_SNAPSHOT_JSON_SCHEMA_V1);
    assert_eq!(value["snapshot"]["x_axis"]["label"], "epoch");
    assert_eq!(value["snapshot"]["line_style"]["color"], "#FF0000");
    assert_eq!(value["snapshot"]["points"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["snapshot"]["pointer"]["screen_x"], 320.0);

    let restored = ChartSnapshot::from_json_compat_str(&json).expect("parse");
    assert_eq!(restored, chart.snapshot());
}

#[test]
fn bare_snapshot_json_is_accepted() {
    let chart = populated_chart();
    let bare = serde_json::to_string(&chart.snapshot()).expect("serialize bare");
    let restored = ChartSnapshot::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(restored.header, "epoch: 2 - loss 0.3");
}

#[test]
fn unknown_schema_version_is_rejected() {
    let chart = populated_chart();
    let json = chart
        .snapshot()
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replace("\"schema_version\": 1", "\"schema_version\": 99");
    assert!(ChartSnapshot::from_json_compat_str(&json).is_err());
}

#[test]
fn cleared_pointer_serializes_as_null() {
    let mut chart = populated_chart();
    chart.clear_pointer();
    let value = serde_json::to_value(chart.snapshot()).expect("to value");
    assert!(value["pointer"].is_null());
}
