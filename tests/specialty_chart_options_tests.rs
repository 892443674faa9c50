use chart_config_rs::options::{
    AlluvialChartOptions, ChartConfig, ChoroplethChartOptions, CirclePackChartOptions,
    ColorLegendKind, DividerState, HeatmapChartOptions, MapProjection, ThematicChartOptions,
    TreeChartOptions, TreeKind, WordCloudChartOptions,
};
use serde_json::json;

#[test]
fn word_cloud_tooltip_extends_the_shared_tooltip() {
    let cloud: WordCloudChartOptions = serde_json::from_value(json!({
        "wordCloud": { "fontSizeField": "count", "wordField": "term" },
        "tooltip": { "enabled": true, "wordLabel": "Term", "valueLabel": "Mentions" }
    }))
    .expect("parse word cloud options");
    let group = cloud.word_cloud.expect("word cloud group");
    assert_eq!(group.word_field.as_deref(), Some("term"));
    let tooltip = cloud.tooltip.expect("tooltip");
    assert_eq!(tooltip.tooltip.enabled, Some(true));
    assert_eq!(tooltip.word_label.as_deref(), Some("Term"));
    // The specialized tooltip replaces the base one for this kind.
    assert!(cloud.base.tooltip.is_none());
}

#[test]
fn tree_kind_is_open() {
    let tree: TreeChartOptions = serde_json::from_value(json!({
        "tree": { "type": "dendrogram", "rootTitle": "Org" }
    }))
    .expect("parse tree options");
    let group = tree.tree.expect("tree group");
    assert_eq!(group.kind.and_then(|kind| kind.known().copied()), Some(TreeKind::Dendrogram));
    assert_eq!(group.root_title.as_deref(), Some("Org"));
}

#[test]
fn circle_pack_requires_circles_and_hierarchy_level() {
    let packed: CirclePackChartOptions = serde_json::from_value(json!({
        "circlePack": {
            "circles": { "fillOpacity": 0.7 },
            "hierarchyLevel": 2,
            "padding": { "outer": 4, "inner": 2 }
        }
    }))
    .expect("parse circle pack options");
    assert_eq!(packed.circle_pack.circles.fill_opacity, 0.7);
    assert_eq!(packed.circle_pack.hierarchy_level, 2);

    let missing_circles = serde_json::from_value::<CirclePackChartOptions>(json!({
        "circlePack": { "hierarchyLevel": 2 }
    }));
    assert!(missing_circles.is_err(), "circles is required");

    let missing_level = serde_json::from_value::<CirclePackChartOptions>(json!({
        "circlePack": { "circles": { "fillOpacity": 0.7 } }
    }));
    assert!(missing_level.is_err(), "hierarchyLevel is required");
}

#[test]
fn alluvial_requires_nodes() {
    let alluvial: AlluvialChartOptions = serde_json::from_value(json!({
        "alluvial": {
            "units": "visits",
            "nodes": [
                { "name": "Home", "category": "entry" },
                { "name": "Checkout" }
            ],
            "nodeAlignment": "left",
            "monochrome": true
        }
    }))
    .expect("parse alluvial options");
    assert_eq!(alluvial.alluvial.nodes.len(), 2);
    assert_eq!(alluvial.alluvial.nodes[1].category, None);

    let missing_nodes =
        serde_json::from_value::<AlluvialChartOptions>(json!({ "alluvial": { "units": "x" } }));
    assert!(missing_nodes.is_err(), "alluvial.nodes is required");
}

#[test]
fn heatmap_group_is_required_and_color_legend_needs_a_type() {
    let heatmap: HeatmapChartOptions = serde_json::from_value(json!({
        "heatmap": {
            "divider": { "state": "auto" },
            "colorLegend": { "title": "Intensity", "type": "quantize" }
        }
    }))
    .expect("parse heatmap options");
    let divider = heatmap.heatmap.divider.expect("divider");
    assert_eq!(divider.state.and_then(|s| s.known().copied()), Some(DividerState::Auto));
    let legend = heatmap.heatmap.color_legend.expect("legend");
    assert_eq!(legend.kind.known().copied(), Some(ColorLegendKind::Quantize));

    let missing_group = serde_json::from_value::<HeatmapChartOptions>(json!({ "title": "x" }));
    assert!(missing_group.is_err(), "heatmap group is required");

    let untyped_legend = serde_json::from_value::<HeatmapChartOptions>(json!({
        "heatmap": { "colorLegend": { "title": "Intensity" } }
    }));
    assert!(untyped_legend.is_err(), "colorLegend.type is required");
}

#[test]
fn thematic_requires_projection_and_accepts_custom_ones() {
    let thematic: ThematicChartOptions = serde_json::from_value(json!({
        "thematic": { "projection": "geoEqualEarth" }
    }))
    .expect("parse thematic options");
    assert_eq!(
        thematic.thematic.projection.known().copied(),
        Some(MapProjection::GeoEqualEarth)
    );

    let custom: ThematicChartOptions = serde_json::from_value(json!({
        "thematic": { "projection": "geoWinkel3" }
    }))
    .expect("free-form projection string");
    assert!(custom.thematic.projection.is_custom());

    let missing = serde_json::from_value::<ThematicChartOptions>(json!({ "thematic": {} }));
    assert!(missing.is_err(), "projection is required");
}

#[test]
fn choropleth_extends_thematic_additively() {
    let choropleth: ChoroplethChartOptions = serde_json::from_value(json!({
        "title": "Population",
        "thematic": { "projection": "geoMercator" },
        "choropleth": { "colorLegend": { "type": "linear" } }
    }))
    .expect("parse choropleth options");
    assert_eq!(choropleth.base().title.as_deref(), Some("Population"));
    let legend = choropleth.choropleth.color_legend.expect("legend");
    assert_eq!(legend.kind.known().copied(), Some(ColorLegendKind::Linear));

    let missing_thematic = serde_json::from_value::<ChoroplethChartOptions>(json!({
        "choropleth": {}
    }));
    assert!(missing_thematic.is_err(), "thematic group is still required");

    let missing_choropleth = serde_json::from_value::<ChoroplethChartOptions>(json!({
        "thematic": { "projection": "geoMercator" }
    }));
    assert!(missing_choropleth.is_err(), "choropleth group is required");
}
