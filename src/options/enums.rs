//! Closed keyword sets used by enumerated option fields.
//!
//! Every field typed over one of these goes through
//! [`OpenEnum`](super::keyword::OpenEnum) so that callers can also pass an
//! arbitrary string; the sets below are the recommended values, not a
//! runtime restriction.

use serde::{Deserialize, Serialize};

/// Built-in visual themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartTheme {
    #[default]
    White,
    G10,
    G90,
    G100,
}

/// Horizontal alignment of circular and packed layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Semantic status used by gauge and meter coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Warning,
    Danger,
}

/// Gauge sweep variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GaugeKind {
    Semi,
    Full,
}

/// Direction of the gauge delta arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowDirection {
    Up,
    Down,
}

/// Tree chart layout variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeKind {
    Tree,
    Dendrogram,
}

/// Heatmap cell-divider width state. `Auto` drops the divider for cell
/// dimensions under 16px.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DividerState {
    On,
    Off,
    #[default]
    Auto,
}

/// Color-legend scale rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorLegendKind {
    Linear,
    Quantize,
}

/// Geographic projections recognized by thematic charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MapProjection {
    GeoEqualEarth,
    GeoAlbers,
    GeoAlbersUsa,
    GeoMercator,
    GeoNaturalEarth1,
    GeoOrthographic,
    GeoEquirectangular,
}

/// Axis scale variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleKind {
    Time,
    Linear,
    Log,
    Labels,
    LabelsRatio,
}

/// Where the legend sits relative to the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

/// Label truncation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TruncationKind {
    #[default]
    EndLine,
    MidLine,
    FrontLine,
    None,
}

/// Axis tick label rotation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TickRotation {
    Always,
    #[default]
    Auto,
    Never,
}

/// Zoom-bar presentation variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ZoomBarView {
    #[default]
    GraphView,
    SliderView,
}

/// Chart types a combo chart member can render as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComboMemberKind {
    Line,
    Scatter,
    Area,
    StackedArea,
    SimpleBar,
    GroupedBar,
    StackedBar,
}

/// File export formats handed to per-format file-name callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Png,
    Jpg,
    Csv,
}
