//! Options common to every chart kind.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::callbacks::{ColorFn, FileName, IsFilledFn};
use super::components::{
    LegendOptions, LocaleOptions, TabularRepOptions, ToolbarOptions, TooltipOptions,
};
use super::enums::ChartTheme;
use super::keyword::OpenEnum;

/// CSS class prefix applied when the caller does not set one.
pub const DEFAULT_STYLE_PREFIX: &str = "cc";

/// Options related to charting data selection and loading state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataOptions {
    /// Data field identifying which group a datum belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_key_field: Option<String>,
    /// Render a loading skeleton instead of data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loading: Option<bool>,
    /// Groups pre-selected in the legend, in order. Empty or absent means
    /// every group is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_groups: Option<Vec<String>>,
}

/// Preset palette selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorPairingOptions {
    /// Number of color variants in the palette. Absent means the engine
    /// uses the number of data groups present at render time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_count: Option<u32>,
    /// Which pairing option of the palette to use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette_option: Option<u32>,
}

/// Gradient fill options.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Ordered hex color stops, e.g. `["#fff", "#000"]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
}

/// Options related to color scales.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOptions {
    /// Explicit group-to-color mapping, in caller order.
    /// e.g. `{ "Dataset 1": "blue" }`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<IndexMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pairing: Option<ColorPairingOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<GradientOptions>,
}

/// Options related to (CSV|PNG|JPG) file downloads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileDownloadOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<FileName>,
}

/// Base chart options common to any chart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BaseChartOptions {
    /// Chart title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<LocaleOptions>,
    /// Disables animations when set to `false`; enabled by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animations_enabled: Option<bool>,
    /// Prevents the container from resizing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resizable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<OpenEnum<ChartTheme>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<TooltipOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toolbar: Option<ToolbarOptions>,
    /// Decides whether a shape is filled, overriding the engine default.
    #[serde(skip)]
    pub is_filled: Option<IsFilledFn>,
    /// Generates the fill color per group/label/datum.
    #[serde(skip)]
    pub fill_color: Option<ColorFn>,
    /// Generates the stroke color per group/label/datum. Not every chart
    /// kind honors stroke color (e.g. word cloud).
    #[serde(skip)]
    pub stroke_color: Option<ColorFn>,
    /// Prefix for generated CSS classes; defaults to `"cc"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DataOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_download: Option<FileDownloadOptions>,
    /// Marks the chart kind as unstable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experimental: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tabular_rep_modal: Option<TabularRepOptions>,
}

impl BaseChartOptions {
    /// CSS class prefix, applying the documented `"cc"` default.
    #[must_use]
    pub fn css_prefix(&self) -> &str {
        self.style_prefix.as_deref().unwrap_or(DEFAULT_STYLE_PREFIX)
    }

    /// Whether animations run; absent means enabled.
    #[must_use]
    pub fn animations(&self) -> bool {
        self.animations_enabled.unwrap_or(true)
    }

    /// Pre-selected legend groups. An empty slice means every group is
    /// treated as active.
    #[must_use]
    pub fn selected_groups(&self) -> &[String] {
        self.data
            .as_ref()
            .and_then(|data| data.selected_groups.as_deref())
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<OpenEnum<ChartTheme>>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    #[must_use]
    pub fn with_dimensions(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self.height = Some(height.into());
        self
    }
}
