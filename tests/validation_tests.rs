use std::str::FromStr;

use chart_config_rs::{validate_for_kind, AnyChartConfig, ChartConfig, ChartKind, ConfigError};
use serde_json::{json, Value};

/// Minimal configuration containing only the kind's required fields.
fn minimal_config(kind: ChartKind) -> Value {
    match kind {
        ChartKind::Radar => json!({ "radar": { "axes": { "angle": "a", "value": "v" } } }),
        ChartKind::Combo => json!({
            "comboChartTypes": [{ "type": "line", "correspondingDatasets": ["d"] }]
        }),
        ChartKind::CirclePack => json!({
            "circlePack": { "circles": { "fillOpacity": 0.5 }, "hierarchyLevel": 1 }
        }),
        ChartKind::Alluvial => json!({ "alluvial": { "nodes": [{ "name": "A" }] } }),
        ChartKind::Heatmap => json!({ "heatmap": {} }),
        ChartKind::Thematic => json!({ "thematic": { "projection": "geoEqualEarth" } }),
        ChartKind::Choropleth => json!({
            "thematic": { "projection": "geoEqualEarth" },
            "choropleth": {}
        }),
        _ => json!({}),
    }
}

#[test]
fn every_kind_accepts_its_minimal_required_config() {
    for kind in ChartKind::ALL {
        let config = validate_for_kind(kind, &minimal_config(kind))
            .unwrap_or_else(|err| panic!("minimal {kind} config must validate: {err}"));
        assert_eq!(config.kind(), kind);
    }
}

#[test]
fn base_fields_are_readable_for_every_kind() {
    for kind in ChartKind::ALL {
        let mut value = minimal_config(kind);
        value
            .as_object_mut()
            .expect("object")
            .insert("title".to_owned(), json!("Shared"));
        let config = validate_for_kind(kind, &value).expect("validate");
        assert_eq!(config.base().title.as_deref(), Some("Shared"));
    }
}

#[test]
fn kinds_with_required_groups_reject_the_empty_object() {
    let strict = [
        ChartKind::Radar,
        ChartKind::Combo,
        ChartKind::CirclePack,
        ChartKind::Alluvial,
        ChartKind::Heatmap,
        ChartKind::Thematic,
        ChartKind::Choropleth,
    ];
    for kind in strict {
        match validate_for_kind(kind, &json!({})) {
            Ok(_) => panic!("{kind} must reject a config missing its required group"),
            Err(err) => assert!(matches!(err, ConfigError::Rejected { kind: k, .. } if k == kind)),
        }
    }
}

#[test]
fn bar_shaped_config_passes_bar_and_fails_radar() {
    let value = json!({
        "bars": { "maxWidth": 12.0 },
        "axes": { "left": {}, "bottom": { "scaleType": "labels" } },
        "title": "Sales"
    });
    let bar = validate_for_kind(ChartKind::Bar, &value).expect("bar shape accepts");
    assert!(matches!(bar, AnyChartConfig::Bar(_)));

    // Radar requires its own group; the bar fields alone do not satisfy it.
    assert!(validate_for_kind(ChartKind::Radar, &value).is_err());
}

#[test]
fn gauge_keyword_values_validate_and_numbers_do_not() {
    let good = json!({ "gauge": { "type": "semi", "alignment": "center" } });
    assert!(validate_for_kind(ChartKind::Gauge, &good).is_ok());

    let bad = json!({ "gauge": { "type": 42 } });
    match validate_for_kind(ChartKind::Gauge, &bad) {
        Ok(_) => panic!("numeric gauge type must be rejected"),
        Err(err) => assert!(matches!(err, ConfigError::Rejected { kind: ChartKind::Gauge, .. })),
    }
}

#[test]
fn unknown_fields_are_tolerated() {
    let value = json!({ "title": "Pie", "futureKnob": { "level": 9 } });
    assert!(validate_for_kind(ChartKind::Pie, &value).is_ok());
}

#[test]
fn lollipop_and_boxplot_share_their_parents_surface() {
    let scatterish = json!({ "points": { "radius": 4.0 } });
    assert!(validate_for_kind(ChartKind::Lollipop, &scatterish).is_ok());
    assert!(validate_for_kind(ChartKind::Scatter, &scatterish).is_ok());

    let axisish = json!({ "axes": { "left": { "includeZero": false } } });
    assert!(validate_for_kind(ChartKind::Boxplot, &axisish).is_ok());
}

#[test]
fn validated_configs_reserialize_and_revalidate() {
    let value = json!({
        "title": "Share",
        "pie": { "alignment": "left" },
        "donut": { "center": { "label": "Total", "number": 100 } }
    });
    let config = validate_for_kind(ChartKind::Donut, &value).expect("validate donut");
    let serialized = serde_json::to_value(&config).expect("serialize");
    assert!(validate_for_kind(ChartKind::Donut, &serialized).is_ok());
    assert_eq!(serialized["donut"]["center"]["label"], json!("Total"));
}

#[test]
fn color_scale_order_survives_the_untyped_value_path() {
    let value = json!({
        "color": { "scale": { "Gamma": "#111", "Alpha": "#222", "Beta": "#333" } }
    });
    let config = validate_for_kind(ChartKind::Bar, &value).expect("validate");
    let scale = config
        .base()
        .color
        .as_ref()
        .and_then(|color| color.scale.as_ref())
        .expect("scale");
    let keys: Vec<&str> = scale.keys().map(String::as_str).collect();
    assert_eq!(keys, ["Gamma", "Alpha", "Beta"]);
}

#[test]
fn chart_kind_round_trips_through_wire_names() {
    for kind in ChartKind::ALL {
        assert_eq!(ChartKind::from_str(kind.as_str()).expect("parse"), kind);
        let wire = serde_json::to_value(kind).expect("serialize kind");
        assert_eq!(wire, json!(kind.as_str()));
    }
    match ChartKind::from_str("sparkline") {
        Ok(_) => panic!("unknown kind must not parse"),
        Err(err) => assert!(matches!(err, ConfigError::UnknownKind(_))),
    }
}

#[test]
fn from_value_matches_validate_for_kind() {
    let value = json!({ "heatmap": { "colorLegend": { "type": "linear" } } });
    let config = AnyChartConfig::from_value(ChartKind::Heatmap, &value).expect("validate");
    assert_eq!(config.kind(), ChartKind::Heatmap);
}
