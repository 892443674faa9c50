//! Callback-valued option fields.
//!
//! These are configuration-time plug-in points the rendering engine invokes
//! synchronously; no concurrency semantics attach to them. Each wrapper
//! holds an `Arc`'d closure so option shapes stay `Clone`, and every
//! callback field is `#[serde(skip)]` — closures never cross a JSON
//! boundary. Datum parameters the engine passes through are untyped
//! [`serde_json::Value`]s.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::ExportFormat;

/// A font-size style value: plain pixels, or a CSS length string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontSizeValue {
    Number(f64),
    Text(String),
}

/// Slice datum handed to the pie segment comparator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentDatum {
    pub group: String,
    pub value: f64,
}

/// Decides whether a shape is filled, given the data group, an optional
/// point label and datum, and the engine's default.
#[derive(Clone)]
pub struct IsFilledFn(
    Arc<dyn Fn(&str, Option<&str>, Option<&Value>, Option<bool>) -> bool + Send + Sync>,
);

impl IsFilledFn {
    pub fn new(
        hook: impl Fn(&str, Option<&str>, Option<&Value>, Option<bool>) -> bool
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self(Arc::new(hook))
    }

    #[must_use]
    pub fn call(
        &self,
        group: &str,
        label: Option<&str>,
        datum: Option<&Value>,
        default_filled: Option<bool>,
    ) -> bool {
        (self.0)(group, label, datum, default_filled)
    }
}

impl fmt::Debug for IsFilledFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IsFilledFn(..)")
    }
}

/// Produces a color string for a group/label/datum triple. Used for both
/// the fill and stroke hooks; not every chart kind honors stroke color.
#[derive(Clone)]
pub struct ColorFn(
    Arc<dyn Fn(&str, Option<&str>, Option<&Value>, Option<&str>) -> String + Send + Sync>,
);

impl ColorFn {
    pub fn new(
        hook: impl Fn(&str, Option<&str>, Option<&Value>, Option<&str>) -> String
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self(Arc::new(hook))
    }

    #[must_use]
    pub fn call(
        &self,
        group: &str,
        label: Option<&str>,
        datum: Option<&Value>,
        default_color: Option<&str>,
    ) -> String {
        (self.0)(group, label, datum, default_color)
    }
}

impl fmt::Debug for ColorFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ColorFn(..)")
    }
}

/// Maps a numeric value to a font size.
#[derive(Clone)]
pub struct FontSizeFn(Arc<dyn Fn(f64) -> FontSizeValue + Send + Sync>);

impl FontSizeFn {
    pub fn new(hook: impl Fn(f64) -> FontSizeValue + Send + Sync + 'static) -> Self {
        Self(Arc::new(hook))
    }

    #[must_use]
    pub fn call(&self, value: f64) -> FontSizeValue {
        (self.0)(value)
    }
}

impl fmt::Debug for FontSizeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FontSizeFn(..)")
    }
}

/// Formats a numeric value for display.
#[derive(Clone)]
pub struct NumberFormatFn(Arc<dyn Fn(f64) -> String + Send + Sync>);

impl NumberFormatFn {
    pub fn new(hook: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(hook))
    }

    #[must_use]
    pub fn call(&self, value: f64) -> String {
        (self.0)(value)
    }
}

impl fmt::Debug for NumberFormatFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NumberFormatFn(..)")
    }
}

/// Maps a numeric value to a vertical position.
#[derive(Clone)]
pub struct YPositionFn(Arc<dyn Fn(f64) -> f64 + Send + Sync>);

impl YPositionFn {
    pub fn new(hook: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self(Arc::new(hook))
    }

    #[must_use]
    pub fn call(&self, value: f64) -> f64 {
        (self.0)(value)
    }
}

impl fmt::Debug for YPositionFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("YPositionFn(..)")
    }
}

/// Formats an arbitrary datum into a display label.
#[derive(Clone)]
pub struct LabelFormatFn(Arc<dyn Fn(&Value) -> String + Send + Sync>);

impl LabelFormatFn {
    pub fn new(hook: impl Fn(&Value) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(hook))
    }

    #[must_use]
    pub fn call(&self, datum: &Value) -> String {
        (self.0)(datum)
    }
}

impl fmt::Debug for LabelFormatFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LabelFormatFn(..)")
    }
}

/// Comparator over pie segments.
#[derive(Clone)]
pub struct SegmentSortFn(Arc<dyn Fn(&SegmentDatum, &SegmentDatum) -> Ordering + Send + Sync>);

impl SegmentSortFn {
    pub fn new(
        hook: impl Fn(&SegmentDatum, &SegmentDatum) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        Self(Arc::new(hook))
    }

    #[must_use]
    pub fn call(&self, a: &SegmentDatum, b: &SegmentDatum) -> Ordering {
        (self.0)(a, b)
    }
}

impl fmt::Debug for SegmentSortFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SegmentSortFn(..)")
    }
}

/// Maps the data's radius extent to the `[min, max]` pixel radii to use.
#[derive(Clone)]
pub struct RadiusRangeFn(Arc<dyn Fn(f64, f64) -> [f64; 2] + Send + Sync>);

impl RadiusRangeFn {
    pub fn new(hook: impl Fn(f64, f64) -> [f64; 2] + Send + Sync + 'static) -> Self {
        Self(Arc::new(hook))
    }

    #[must_use]
    pub fn call(&self, min: f64, max: f64) -> [f64; 2] {
        (self.0)(min, max)
    }
}

impl fmt::Debug for RadiusRangeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RadiusRangeFn(..)")
    }
}

/// Decides the `[min, max]` font-size range of a word cloud from the chart
/// size and the charting data.
#[derive(Clone)]
pub struct FontSizeRangeFn(Arc<dyn Fn(&Value, &Value) -> [f64; 2] + Send + Sync>);

impl FontSizeRangeFn {
    pub fn new(hook: impl Fn(&Value, &Value) -> [f64; 2] + Send + Sync + 'static) -> Self {
        Self(Arc::new(hook))
    }

    #[must_use]
    pub fn call(&self, chart_size: &Value, data: &Value) -> [f64; 2] {
        (self.0)(chart_size, data)
    }
}

impl fmt::Debug for FontSizeRangeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FontSizeRangeFn(..)")
    }
}

/// Derives an export file name from the requested format.
#[derive(Clone)]
pub struct FileNameFn(Arc<dyn Fn(ExportFormat) -> String + Send + Sync>);

impl FileNameFn {
    pub fn new(hook: impl Fn(ExportFormat) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(hook))
    }

    #[must_use]
    pub fn call(&self, format: ExportFormat) -> String {
        (self.0)(format)
    }
}

impl fmt::Debug for FileNameFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FileNameFn(..)")
    }
}

/// Export file name: a literal used for every format, or a per-format
/// function. The union carries no discriminant tag: a bare JSON string
/// deserializes to [`FileName::Literal`], and the function arm is only
/// constructible in code (it serializes as `null`).
#[derive(Clone)]
pub enum FileName {
    Literal(String),
    PerFormat(FileNameFn),
}

impl FileName {
    /// Resolves the file name for one export format.
    #[must_use]
    pub fn resolve(&self, format: ExportFormat) -> String {
        match self {
            Self::Literal(name) => name.clone(),
            Self::PerFormat(hook) => hook.call(format),
        }
    }
}

impl fmt::Debug for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(name) => f.debug_tuple("Literal").field(name).finish(),
            Self::PerFormat(_) => f.write_str("PerFormat(..)"),
        }
    }
}

impl From<&str> for FileName {
    fn from(name: &str) -> Self {
        Self::Literal(name.to_owned())
    }
}

impl From<FileNameFn> for FileName {
    fn from(hook: FileNameFn) -> Self {
        Self::PerFormat(hook)
    }
}

impl Serialize for FileName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Literal(name) => serializer.serialize_str(name),
            Self::PerFormat(_) => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for FileName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::Literal)
    }
}
