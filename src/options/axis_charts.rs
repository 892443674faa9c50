//! Option shapes for the cartesian chart family.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::axes::{AxesOptions, AxisOptions, BinnedAxisOptions, ComboAxisOptions};
use super::base::BaseChartOptions;
use super::callbacks::RadiusRangeFn;
use super::components::{
    BarOptions, GridOptions, StackedBarOptions, TimeScaleOptions, ZoomBarOptions,
};
use super::enums::ComboMemberKind;
use super::keyword::OpenEnum;

/// Options common to any chart with an axis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AxisChartOptions {
    #[serde(flatten)]
    pub base: BaseChartOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axes: Option<AxesOptions<AxisOptions>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_scale: Option<TimeScaleOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_bar: Option<ZoomBarOptions>,
}

/// Options common to binned charts with an axis: the same surface as
/// [`AxisChartOptions`], with axis definitions specialized for bins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BinnedAxisChartOptions {
    #[serde(flatten)]
    pub base: BaseChartOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axes: Option<AxesOptions<BinnedAxisOptions>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_scale: Option<TimeScaleOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_bar: Option<ZoomBarOptions>,
}

/// Boxplot charts add nothing over the axis surface.
pub type BoxplotChartOptions = AxisChartOptions;

/// Options specific to bar charts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BarChartOptions {
    #[serde(flatten)]
    pub axis: AxisChartOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bars: Option<BarOptions>,
}

/// Options specific to stacked bar charts. Stacking widens the `bars`
/// group; everything else stays the bar surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StackedBarChartOptions {
    #[serde(flatten)]
    pub axis: AxisChartOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bars: Option<StackedBarOptions>,
}

/// Options for the points of scatter-family charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointOptions {
    /// Point radius in pixels.
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Options specific to scatter charts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterChartOptions {
    #[serde(flatten)]
    pub axis: AxisChartOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<PointOptions>,
}

/// Lollipop charts share the scatter surface.
pub type LollipopChartOptions = ScatterChartOptions;

/// Options for the individual bubbles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BubbleOptions {
    /// Data field the bubble radius value is read from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_field: Option<String>,
    /// Label describing what the radius value maps to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_label: Option<String>,
    /// Maps the data's radius extent to the pixel radii to use.
    #[serde(skip)]
    pub radius_range: Option<RadiusRangeFn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Options specific to bubble charts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BubbleChartOptions {
    #[serde(flatten)]
    pub axis: AxisChartOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bubble: Option<BubbleOptions>,
}

/// Options for the individual bullets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BulletOptions {
    /// Titles of the performance areas, worst to best.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_area_titles: Option<Vec<String>>,
}

/// Options specific to bullet charts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletChartOptions {
    #[serde(flatten)]
    pub axis: AxisChartOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet: Option<BulletOptions>,
}

/// Options related to histogram bins.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BinOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_label: Option<String>,
}

/// Options specific to histogram charts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramChartOptions {
    #[serde(flatten)]
    pub axis: AxisChartOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bins: Option<BinOptions>,
}

/// Line interpolation: a curve name, or an object naming the curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CurveOptions {
    Name(String),
    Named { name: String },
}

impl CurveOptions {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Named { name } => name,
        }
    }
}

/// Options specific to line charts: the scatter surface plus the curve.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LineChartOptions {
    #[serde(flatten)]
    pub scatter: ScatterChartOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<CurveOptions>,
}

/// Data fields bounding the shaded area.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AreaBoundsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_bound_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_bound_field: Option<String>,
}

/// Options specific to area charts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaChartOptions {
    #[serde(flatten)]
    pub axis: AxisChartOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<CurveOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<AreaBoundsOptions>,
}

/// Options specific to stacked area charts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StackedAreaChartOptions {
    #[serde(flatten)]
    pub scatter: ScatterChartOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<CurveOptions>,
}

/// One member chart of a combo chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboChartMember {
    /// What to render this member as.
    #[serde(rename = "type")]
    pub kind: OpenEnum<ComboMemberKind>,
    /// Member-specific option overrides, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
    /// Names of the datasets this member renders.
    pub corresponding_datasets: Vec<String>,
}

/// Options specific to combo charts. The member list is required; axes are
/// specialized to route datasets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboChartOptions {
    #[serde(flatten)]
    pub base: BaseChartOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axes: Option<AxesOptions<ComboAxisOptions>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_scale: Option<TimeScaleOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_bar: Option<ZoomBarOptions>,
    pub combo_chart_types: Vec<ComboChartMember>,
}
