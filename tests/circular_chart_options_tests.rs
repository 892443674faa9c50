use std::cmp::Ordering;

use chart_config_rs::options::{
    Alignment, ChartConfig, DonutChartOptions, GaugeChartOptions, GaugeKind, MeterChartOptions,
    PieChartOptions, PieOptions, ProportionalMeterChartOptions, RadarChartOptions, SegmentDatum,
    SegmentSortFn, Status,
};
use serde_json::json;

#[test]
fn gauge_accepts_keyword_fields() {
    let gauge: GaugeChartOptions = serde_json::from_value(json!({
        "gauge": { "type": "semi", "alignment": "center" }
    }))
    .expect("parse gauge options");
    let group = gauge.gauge.expect("gauge group");
    assert_eq!(group.kind.and_then(|kind| kind.known().copied()), Some(GaugeKind::Semi));
    assert_eq!(
        group.alignment.and_then(|alignment| alignment.known().copied()),
        Some(Alignment::Center)
    );
}

#[test]
fn gauge_rejects_numeric_type() {
    // type must be a string (closed member or free-form), never a number.
    let bad = serde_json::from_value::<GaugeChartOptions>(json!({ "gauge": { "type": 42 } }));
    assert!(bad.is_err());
}

#[test]
fn gauge_delta_arrow_requires_enabled() {
    let ok: GaugeChartOptions = serde_json::from_value(json!({
        "gauge": { "deltaArrow": { "direction": "up", "enabled": true } }
    }))
    .expect("delta arrow with enabled");
    assert!(ok.gauge.expect("gauge").delta_arrow.expect("arrow").enabled);

    let missing = serde_json::from_value::<GaugeChartOptions>(json!({
        "gauge": { "deltaArrow": { "direction": "up" } }
    }));
    assert!(missing.is_err(), "deltaArrow.enabled is required");
}

#[test]
fn donut_accepts_every_pie_field_plus_donut_group() {
    let donut: DonutChartOptions = serde_json::from_value(json!({
        "title": "Share",
        "pie": { "alignment": "left", "valueField": "amount" },
        "donut": {
            "center": { "label": "Browsers", "number": 25 },
            "alignment": "center"
        }
    }))
    .expect("parse donut options");
    assert_eq!(donut.base().title.as_deref(), Some("Share"));
    let pie = donut.pie.pie.expect("pie group");
    assert_eq!(pie.value_field.as_deref(), Some("amount"));
    let center = donut.donut.expect("donut group").center.expect("center");
    assert_eq!(center.label.as_deref(), Some("Browsers"));
    assert_eq!(center.number, Some(25.0));
}

#[test]
fn pie_sort_hook_orders_segments() {
    let pie = PieChartOptions {
        pie: Some(PieOptions {
            sort_function: Some(SegmentSortFn::new(|a, b| {
                b.value.total_cmp(&a.value).then_with(|| a.group.cmp(&b.group))
            })),
            ..PieOptions::default()
        }),
        ..PieChartOptions::default()
    };
    let sort = pie.pie.expect("pie group").sort_function.expect("sort hook");
    let small = SegmentDatum { group: "a".to_owned(), value: 1.0 };
    let large = SegmentDatum { group: "b".to_owned(), value: 9.0 };
    assert_eq!(sort.call(&small, &large), Ordering::Greater);
    assert_eq!(sort.call(&large, &small), Ordering::Less);
}

#[test]
fn meter_status_ranges_parse_with_required_inner_fields() {
    let meter: MeterChartOptions = serde_json::from_value(json!({
        "meter": {
            "peak": 90,
            "status": {
                "ranges": [
                    { "range": [0, 50], "status": "success" },
                    { "range": [50, 80], "status": "warning" },
                    { "range": [80, 100], "status": "danger" }
                ]
            },
            "title": { "percentageIndicator": { "enabled": true } }
        }
    }))
    .expect("parse meter options");
    let status = meter.meter.expect("meter").status.expect("status");
    assert_eq!(status.ranges.len(), 3);
    assert_eq!(status.ranges[0].range, [0.0, 50.0]);
    assert_eq!(status.ranges[2].status.known().copied(), Some(Status::Danger));

    let missing_range = serde_json::from_value::<MeterChartOptions>(json!({
        "meter": { "status": { "ranges": [{ "status": "danger" }] } }
    }));
    assert!(missing_range.is_err(), "status range bounds are required");
}

#[test]
fn proportional_meter_exposes_only_proportional_group() {
    let meter: ProportionalMeterChartOptions = serde_json::from_value(json!({
        "meter": { "proportional": { "total": 2000.0, "unit": "GB" } }
    }))
    .expect("parse proportional meter options");
    let proportional = meter.meter.expect("meter").proportional.expect("proportional");
    assert_eq!(proportional.total, Some(2000.0));
    assert_eq!(proportional.unit.as_deref(), Some("GB"));
}

#[test]
fn radar_requires_axes_mapping() {
    let radar: RadarChartOptions = serde_json::from_value(json!({
        "radar": { "axes": { "angle": "metric", "value": "score" } }
    }))
    .expect("parse radar options");
    assert_eq!(radar.radar.axes.angle, "metric");

    let missing_axes = serde_json::from_value::<RadarChartOptions>(json!({ "radar": {} }));
    assert!(missing_axes.is_err(), "radar.axes is required");

    let missing_group = serde_json::from_value::<RadarChartOptions>(json!({ "title": "x" }));
    assert!(missing_group.is_err(), "radar group is required");
}
