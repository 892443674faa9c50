//! Option shapes for hierarchical layouts: treemap, tree, circle pack.

use serde::{Deserialize, Serialize};

use super::base::BaseChartOptions;
use super::enums::TreeKind;
use super::keyword::OpenEnum;

/// Treemap charts add nothing over the base surface.
pub type TreemapChartOptions = BaseChartOptions;

/// Options specific to the tree group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TreeOptions {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<OpenEnum<TreeKind>>,
    /// Title rendered at the root node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_title: Option<String>,
}

/// Options specific to tree charts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeChartOptions {
    #[serde(flatten)]
    pub base: BaseChartOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<TreeOptions>,
}

/// Circle styling. Fill opacity is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleOptions {
    pub fill_opacity: f64,
}

/// Spacing between and inside packed circles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CirclePaddingOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outer: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner: Option<f64>,
}

/// Options specific to the circle-pack group. Circle styling and the
/// hierarchy depth are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CirclePackOptions {
    pub circles: CircleOptions,
    /// Depth of nodes to display.
    pub hierarchy_level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<CirclePaddingOptions>,
}

/// Options specific to circle pack charts. The group is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CirclePackChartOptions {
    #[serde(flatten)]
    pub base: BaseChartOptions,
    pub circle_pack: CirclePackOptions,
}
