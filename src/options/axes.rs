//! Axis option shapes shared by every cartesian chart kind.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::callbacks::NumberFormatFn;
use super::components::TruncationOptions;
use super::enums::{ScaleKind, TickRotation};
use super::keyword::OpenEnum;

/// Axis slots, one option set per cartesian position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AxesOptions<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<T>,
}

// Manual impl so `AxesOptions<T>: Default` does not require `T: Default`.
impl<T> Default for AxesOptions<T> {
    fn default() -> Self {
        Self {
            top: None,
            bottom: None,
            left: None,
            right: None,
        }
    }
}

/// Tick generation and labelling for one axis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AxisTickOptions {
    /// Requested tick count; the engine may emit fewer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    /// Explicit tick values (numbers or labels).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<OpenEnum<TickRotation>>,
    #[serde(skip)]
    pub formatter: Option<NumberFormatFn>,
}

/// Options for a single axis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AxisOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Data field this axis reads its values from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maps_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_type: Option<OpenEnum<ScaleKind>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Explicit `[min, max]` domain override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<AxisTickOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncation: Option<TruncationOptions>,
}

/// Histogram-style binning for one axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BinnedOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Requested bin count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bins: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_domain_to_bins: Option<bool>,
}

/// Axis options specialized for binned (histogram-style) axes: everything a
/// plain axis accepts, plus the binning group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BinnedAxisOptions {
    #[serde(flatten)]
    pub axis: AxisOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binned: Option<BinnedOptions>,
}

/// Axis options specialized for combo charts, which route datasets to axes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComboAxisOptions {
    #[serde(flatten)]
    pub axis: AxisOptions,
    /// Marks the primary axis of the combo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corresponding_datasets: Option<Vec<String>>,
}
