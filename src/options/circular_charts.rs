//! Option shapes for the circular family: pie, donut, gauge, meter, radar.

use serde::{Deserialize, Serialize};

use super::base::BaseChartOptions;
use super::callbacks::{FontSizeFn, LabelFormatFn, NumberFormatFn, SegmentSortFn, YPositionFn};
use super::enums::{Alignment, ArrowDirection, GaugeKind, Status};
use super::keyword::OpenEnum;

/// Pie segment labels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PieLabelOptions {
    #[serde(skip)]
    pub formatter: Option<LabelFormatFn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Options specific to the pie group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PieOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<PieLabelOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<OpenEnum<Alignment>>,
    /// Data field the segment value is read from; defaults to `value`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_field: Option<String>,
    /// Comparator deciding segment order.
    #[serde(skip)]
    pub sort_function: Option<SegmentSortFn>,
}

/// Options specific to pie charts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PieChartOptions {
    #[serde(flatten)]
    pub base: BaseChartOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pie: Option<PieOptions>,
}

/// Delta arrow shown beside the gauge value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaugeDeltaArrowOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<OpenEnum<ArrowDirection>>,
    /// Sizes the arrow from the delta value.
    #[serde(skip)]
    pub size: Option<FontSizeFn>,
    pub enabled: bool,
}

/// Options specific to the gauge group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GaugeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arc_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_arrow: Option<GaugeDeltaArrowOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_percentage_symbol: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OpenEnum<Status>>,
    #[serde(skip)]
    pub delta_font_size: Option<FontSizeFn>,
    /// Spacing between the value and delta numbers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_spacing: Option<f64>,
    #[serde(skip)]
    pub number_formatter: Option<NumberFormatFn>,
    #[serde(skip)]
    pub value_font_size: Option<FontSizeFn>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<OpenEnum<GaugeKind>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<OpenEnum<Alignment>>,
}

/// Options specific to gauge charts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeChartOptions {
    #[serde(flatten)]
    pub base: BaseChartOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gauge: Option<GaugeOptions>,
}

/// Center readout of a donut.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DonutCenterOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<f64>,
    #[serde(skip)]
    pub number_font_size: Option<FontSizeFn>,
    #[serde(skip)]
    pub title_font_size: Option<FontSizeFn>,
    #[serde(skip)]
    pub title_y_position: Option<YPositionFn>,
    #[serde(skip)]
    pub number_formatter: Option<NumberFormatFn>,
}

/// Options specific to the donut group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DonutOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<DonutCenterOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<OpenEnum<Alignment>>,
}

/// Options specific to donut charts: everything a pie accepts, plus the
/// donut group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DonutChartOptions {
    #[serde(flatten)]
    pub pie: PieChartOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donut: Option<DonutOptions>,
}

/// Shared proportional-meter sub-group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MeterProportionalOptions {
    /// Total the rendered value is a proportion of.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// One status band of a meter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterStatusRange {
    /// `[min, max]` value range the status applies to.
    pub range: [f64; 2],
    pub status: OpenEnum<Status>,
}

/// Status bands of a meter. The band list is required once the group is
/// present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterStatusOptions {
    pub ranges: Vec<MeterStatusRange>,
}

/// Percentage indicator rendered inside the meter title.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PercentageIndicatorOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Meter title options.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MeterTitleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_indicator: Option<PercentageIndicatorOptions>,
}

/// Options specific to the meter group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MeterOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_labels: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proportional: Option<MeterProportionalOptions>,
    /// Peak marker value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MeterStatusOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<MeterTitleOptions>,
}

/// Options specific to meter charts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MeterChartOptions {
    #[serde(flatten)]
    pub base: BaseChartOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter: Option<MeterOptions>,
}

/// Proportional meter exposes only the proportional sub-group.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProportionalMeterOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proportional: Option<MeterProportionalOptions>,
}

/// Options specific to proportional meter charts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProportionalMeterChartOptions {
    #[serde(flatten)]
    pub base: BaseChartOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter: Option<ProportionalMeterOptions>,
}

/// Data fields the radar axes read. Both are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarAxesOptions {
    /// Field mapped to the angular axis.
    pub angle: String,
    /// Field mapped to the value axis.
    pub value: String,
}

/// Options specific to the radar group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarOptions {
    pub axes: RadarAxesOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<OpenEnum<Alignment>>,
}

/// Options specific to radar charts. The radar group is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarChartOptions {
    #[serde(flatten)]
    pub base: BaseChartOptions,
    pub radar: RadarOptions,
}
