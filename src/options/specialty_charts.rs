//! Option shapes for the remaining kinds: word cloud, alluvial, heatmap,
//! and the thematic (geographic) family.

use serde::{Deserialize, Serialize};

use super::base::BaseChartOptions;
use super::callbacks::FontSizeRangeFn;
use super::components::TooltipOptions;
use super::enums::{Alignment, ColorLegendKind, DividerState, MapProjection};
use super::keyword::OpenEnum;

/// Options specific to the word-cloud group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WordCloudOptions {
    /// Data field the font sizes are read from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size_field: Option<String>,
    /// Decides the font-size range from the chart size and data.
    #[serde(skip)]
    pub font_size_range: Option<FontSizeRangeFn>,
    /// Data field the words are read from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_field: Option<String>,
}

/// Word-cloud tooltip: the shared tooltip surface plus word/value labels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WordCloudTooltipOptions {
    #[serde(flatten)]
    pub tooltip: TooltipOptions,
    /// Label shown beside the highlighted word.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_label: Option<String>,
    /// Label shown beside the highlighted word's value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_label: Option<String>,
}

/// Options specific to word cloud charts.
///
/// The specialized `tooltip` field takes the place of the base one; the
/// flattened base's tooltip is never populated for this kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WordCloudChartOptions {
    #[serde(flatten)]
    pub base: BaseChartOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_cloud: Option<WordCloudOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<WordCloudTooltipOptions>,
}

/// One node of the alluvial flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlluvialNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Options specific to the alluvial group. The node list is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlluvialOptions {
    /// Unit label appended to link values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    /// Nodes to draw, in order.
    pub nodes: Vec<AlluvialNode>,
    /// Node alignment; the engine defaults to center.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_alignment: Option<OpenEnum<Alignment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_padding: Option<f64>,
    /// Render every link in a single color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monochrome: Option<bool>,
}

/// Options specific to alluvial charts. The group is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlluvialChartOptions {
    #[serde(flatten)]
    pub base: BaseChartOptions,
    pub alluvial: AlluvialOptions,
}

/// Heatmap cell-divider options.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapDividerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<OpenEnum<DividerState>>,
}

/// Color legend customization shared by heatmap and choropleth. The legend
/// kind is required once the group is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorLegendOptions {
    /// Text beside or on top of the legend; position follows text length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: OpenEnum<ColorLegendKind>,
}

/// Options specific to the heatmap group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeatmapOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divider: Option<HeatmapDividerOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_legend: Option<ColorLegendOptions>,
}

/// Options specific to heatmap charts. The group is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapChartOptions {
    #[serde(flatten)]
    pub base: BaseChartOptions,
    pub heatmap: HeatmapOptions,
}

/// Options specific to the thematic group. The projection is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThematicOptions {
    pub projection: OpenEnum<MapProjection>,
}

/// Options common to any thematic (geographic) chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThematicChartOptions {
    #[serde(flatten)]
    pub base: BaseChartOptions,
    pub thematic: ThematicOptions,
}

/// Options specific to the choropleth group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChoroplethOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_legend: Option<ColorLegendOptions>,
}

/// Options specific to choropleth charts: the thematic surface plus the
/// (required) choropleth group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoroplethChartOptions {
    #[serde(flatten)]
    pub thematic: ThematicChartOptions,
    pub choropleth: ChoroplethOptions,
}
