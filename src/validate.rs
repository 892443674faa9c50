//! Runtime validation of untyped JSON configuration values.
//!
//! Rust callers constructing option structs directly get the contract for
//! free from the type system. Callers holding a [`serde_json::Value`]
//! (configs loaded from files, embedded hosts, remote payloads) go through
//! [`validate_for_kind`], which enforces the same structural contract at
//! runtime: required fields must be present, every present field must have
//! the declared shape, unknown fields are tolerated.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ConfigError, ConfigResult};
use crate::options::{
    AlluvialChartOptions, AnyChartConfig, AreaChartOptions, AxisChartOptions, BarChartOptions,
    BubbleChartOptions, BulletChartOptions, ChartKind, ChoroplethChartOptions,
    CirclePackChartOptions, ComboChartOptions, DonutChartOptions, GaugeChartOptions,
    HeatmapChartOptions, HistogramChartOptions, LineChartOptions, MeterChartOptions,
    PieChartOptions, ProportionalMeterChartOptions, RadarChartOptions, ScatterChartOptions,
    StackedAreaChartOptions, StackedBarChartOptions, ThematicChartOptions, TreeChartOptions,
    TreemapChartOptions, WordCloudChartOptions,
};

/// Checks `value` against the configuration shape for `kind`.
///
/// Accepts exactly the values the kind's option struct deserializes;
/// rejection carries the underlying structural mismatch.
pub fn validate_for_kind(kind: ChartKind, value: &Value) -> ConfigResult<AnyChartConfig> {
    let outcome = deserialize_for_kind(kind, value);
    match &outcome {
        Ok(_) => debug!(kind = %kind, "chart configuration accepted"),
        Err(err) => warn!(kind = %kind, error = %err, "chart configuration rejected"),
    }
    outcome
}

fn shape<'de, T: Deserialize<'de>>(kind: ChartKind, value: &'de Value) -> ConfigResult<T> {
    T::deserialize(value).map_err(|source| ConfigError::Rejected { kind, source })
}

fn deserialize_for_kind(kind: ChartKind, value: &Value) -> ConfigResult<AnyChartConfig> {
    Ok(match kind {
        ChartKind::Alluvial => {
            AnyChartConfig::Alluvial(shape::<AlluvialChartOptions>(kind, value)?)
        }
        ChartKind::Area => AnyChartConfig::Area(shape::<AreaChartOptions>(kind, value)?),
        ChartKind::StackedArea => {
            AnyChartConfig::StackedArea(shape::<StackedAreaChartOptions>(kind, value)?)
        }
        ChartKind::Bar => AnyChartConfig::Bar(shape::<BarChartOptions>(kind, value)?),
        ChartKind::StackedBar => {
            AnyChartConfig::StackedBar(shape::<StackedBarChartOptions>(kind, value)?)
        }
        ChartKind::Boxplot => AnyChartConfig::Boxplot(shape::<AxisChartOptions>(kind, value)?),
        ChartKind::Bubble => AnyChartConfig::Bubble(shape::<BubbleChartOptions>(kind, value)?),
        ChartKind::Bullet => AnyChartConfig::Bullet(shape::<BulletChartOptions>(kind, value)?),
        ChartKind::CirclePack => {
            AnyChartConfig::CirclePack(shape::<CirclePackChartOptions>(kind, value)?)
        }
        ChartKind::Combo => AnyChartConfig::Combo(shape::<ComboChartOptions>(kind, value)?),
        ChartKind::Donut => AnyChartConfig::Donut(shape::<DonutChartOptions>(kind, value)?),
        ChartKind::Gauge => AnyChartConfig::Gauge(shape::<GaugeChartOptions>(kind, value)?),
        ChartKind::Heatmap => AnyChartConfig::Heatmap(shape::<HeatmapChartOptions>(kind, value)?),
        ChartKind::Histogram => {
            AnyChartConfig::Histogram(shape::<HistogramChartOptions>(kind, value)?)
        }
        ChartKind::Line => AnyChartConfig::Line(shape::<LineChartOptions>(kind, value)?),
        ChartKind::Lollipop => {
            AnyChartConfig::Lollipop(shape::<ScatterChartOptions>(kind, value)?)
        }
        ChartKind::Meter => AnyChartConfig::Meter(shape::<MeterChartOptions>(kind, value)?),
        ChartKind::ProportionalMeter => {
            AnyChartConfig::ProportionalMeter(shape::<ProportionalMeterChartOptions>(kind, value)?)
        }
        ChartKind::Pie => AnyChartConfig::Pie(shape::<PieChartOptions>(kind, value)?),
        ChartKind::Radar => AnyChartConfig::Radar(shape::<RadarChartOptions>(kind, value)?),
        ChartKind::Scatter => AnyChartConfig::Scatter(shape::<ScatterChartOptions>(kind, value)?),
        ChartKind::Thematic => {
            AnyChartConfig::Thematic(shape::<ThematicChartOptions>(kind, value)?)
        }
        ChartKind::Choropleth => {
            AnyChartConfig::Choropleth(shape::<ChoroplethChartOptions>(kind, value)?)
        }
        ChartKind::Tree => AnyChartConfig::Tree(shape::<TreeChartOptions>(kind, value)?),
        ChartKind::Treemap => AnyChartConfig::Treemap(shape::<TreemapChartOptions>(kind, value)?),
        ChartKind::WordCloud => {
            AnyChartConfig::WordCloud(shape::<WordCloudChartOptions>(kind, value)?)
        }
    })
}

impl AnyChartConfig {
    /// Builds the typed union from an untyped value.
    /// See [`validate_for_kind`].
    pub fn from_value(kind: ChartKind, value: &Value) -> ConfigResult<Self> {
        validate_for_kind(kind, value)
    }
}
