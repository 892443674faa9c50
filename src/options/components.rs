//! Shared option groups composed into multiple chart shapes: tooltip,
//! legend, toolbar, grid, zoom bar, time scale, locale, tabular
//! representation, and bar sizing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::callbacks::{LabelFormatFn, NumberFormatFn};
use super::enums::{Alignment, LegendPosition, TruncationKind, ZoomBarView};
use super::keyword::OpenEnum;

/// Label truncation behavior shared by tooltips, legends and axis ticks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TruncationOptions {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<OpenEnum<TruncationKind>>,
    /// Label length above which truncation kicks in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u32>,
    /// Number of characters to keep.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_character: Option<u32>,
}

/// Tooltip configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Show a total row when hovering a whole group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_total: Option<bool>,
    /// Label used for the group row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncation: Option<TruncationOptions>,
    /// Formats the hovered value before display.
    #[serde(skip)]
    pub value_formatter: Option<NumberFormatFn>,
}

/// Legend configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegendOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<OpenEnum<LegendPosition>>,
    /// Whether legend items toggle group visibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clickable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<OpenEnum<Alignment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncation: Option<TruncationOptions>,
    /// Explicit ordering of legend items by group name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<String>>,
}

/// Toolbar configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolbarOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Icons shown before the rest collapses into the overflow menu.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_icons: Option<u32>,
}

/// Per-direction grid line options.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridAxisOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_ticks: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_with_axis_ticks: Option<bool>,
}

/// Backdrop grid configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<GridAxisOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<GridAxisOptions>,
}

/// Zoom bar attached to one axis slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZoomBarAxisOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<OpenEnum<ZoomBarView>>,
    /// Domain shown when the chart first renders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_zoom_domain: Option<[f64; 2]>,
}

/// Zoom bar configuration. Only the top slot is supported.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomBarOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<ZoomBarAxisOptions>,
}

/// Time-scale presentation knobs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeScaleOptions {
    /// Extra ticks of breathing room at the domain edges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_space_on_edges: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_day_name: Option<bool>,
}

/// Locale descriptor forwarded to label formatters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocaleOptions {
    /// BCP 47 language tag, e.g. `"en-US"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Free-form formatter options passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options_object: Option<Value>,
}

/// Customization of the accessible tabular alternate representation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TabularRepOptions {
    #[serde(skip)]
    pub table_heading_formatter: Option<LabelFormatFn>,
    #[serde(skip)]
    pub table_cell_formatter: Option<LabelFormatFn>,
}

/// Bar sizing options.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarOptions {
    /// Fixed bar width in pixels. Wins over `spacing_factor`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing_factor: Option<f64>,
}

/// Stacked-bar options: everything bars accept, plus the stack divider.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StackedBarOptions {
    #[serde(flatten)]
    pub bar: BarOptions,
    /// Width of the divider between stacked segments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divider_size: Option<f64>,
}
