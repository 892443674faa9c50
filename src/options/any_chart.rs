//! The closed set of chart kinds and the union over their option shapes.
//!
//! Validation never guesses a kind from a value's shape: callers always
//! supply the [`ChartKind`] discriminant, and the union is built by
//! dispatching on it (see [`crate::validate`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::axis_charts::{
    AreaChartOptions, AxisChartOptions, BarChartOptions, BinnedAxisChartOptions,
    BubbleChartOptions, BulletChartOptions, ComboChartOptions, HistogramChartOptions,
    LineChartOptions, ScatterChartOptions, StackedAreaChartOptions, StackedBarChartOptions,
};
use super::base::BaseChartOptions;
use super::circular_charts::{
    DonutChartOptions, GaugeChartOptions, MeterChartOptions, PieChartOptions,
    ProportionalMeterChartOptions, RadarChartOptions,
};
use super::hierarchy_charts::{CirclePackChartOptions, TreeChartOptions};
use super::specialty_charts::{
    AlluvialChartOptions, ChoroplethChartOptions, HeatmapChartOptions, ThematicChartOptions,
    WordCloudChartOptions,
};

/// Discriminant naming one chart kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Alluvial,
    Area,
    StackedArea,
    Bar,
    StackedBar,
    Boxplot,
    Bubble,
    Bullet,
    CirclePack,
    Combo,
    Donut,
    Gauge,
    Heatmap,
    Histogram,
    Line,
    Lollipop,
    Meter,
    ProportionalMeter,
    Pie,
    Radar,
    Scatter,
    Thematic,
    Choropleth,
    Tree,
    Treemap,
    WordCloud,
}

impl ChartKind {
    /// Every kind, in the order the shapes are documented.
    pub const ALL: [Self; 26] = [
        Self::Alluvial,
        Self::Area,
        Self::StackedArea,
        Self::Bar,
        Self::StackedBar,
        Self::Boxplot,
        Self::Bubble,
        Self::Bullet,
        Self::CirclePack,
        Self::Combo,
        Self::Donut,
        Self::Gauge,
        Self::Heatmap,
        Self::Histogram,
        Self::Line,
        Self::Lollipop,
        Self::Meter,
        Self::ProportionalMeter,
        Self::Pie,
        Self::Radar,
        Self::Scatter,
        Self::Thematic,
        Self::Choropleth,
        Self::Tree,
        Self::Treemap,
        Self::WordCloud,
    ];

    /// Kebab-case wire name, matching the serde representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alluvial => "alluvial",
            Self::Area => "area",
            Self::StackedArea => "stacked-area",
            Self::Bar => "bar",
            Self::StackedBar => "stacked-bar",
            Self::Boxplot => "boxplot",
            Self::Bubble => "bubble",
            Self::Bullet => "bullet",
            Self::CirclePack => "circle-pack",
            Self::Combo => "combo",
            Self::Donut => "donut",
            Self::Gauge => "gauge",
            Self::Heatmap => "heatmap",
            Self::Histogram => "histogram",
            Self::Line => "line",
            Self::Lollipop => "lollipop",
            Self::Meter => "meter",
            Self::ProportionalMeter => "proportional-meter",
            Self::Pie => "pie",
            Self::Radar => "radar",
            Self::Scatter => "scatter",
            Self::Thematic => "thematic",
            Self::Choropleth => "choropleth",
            Self::Tree => "tree",
            Self::Treemap => "treemap",
            Self::WordCloud => "word-cloud",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownKind(s.to_owned()))
    }
}

/// Capability surface the rendering engine consumes: any configuration
/// exposes the fields common to every chart kind.
pub trait ChartConfig {
    fn base(&self) -> &BaseChartOptions;
}

impl ChartConfig for BaseChartOptions {
    fn base(&self) -> &BaseChartOptions {
        self
    }
}

impl ChartConfig for AxisChartOptions {
    fn base(&self) -> &BaseChartOptions {
        &self.base
    }
}

impl ChartConfig for BinnedAxisChartOptions {
    fn base(&self) -> &BaseChartOptions {
        &self.base
    }
}

impl ChartConfig for BarChartOptions {
    fn base(&self) -> &BaseChartOptions {
        &self.axis.base
    }
}

impl ChartConfig for StackedBarChartOptions {
    fn base(&self) -> &BaseChartOptions {
        &self.axis.base
    }
}

impl ChartConfig for ScatterChartOptions {
    fn base(&self) -> &BaseChartOptions {
        &self.axis.base
    }
}

impl ChartConfig for BubbleChartOptions {
    fn base(&self) -> &BaseChartOptions {
        &self.axis.base
    }
}

impl ChartConfig for BulletChartOptions {
    fn base(&self) -> &BaseChartOptions {
        &self.axis.base
    }
}

impl ChartConfig for HistogramChartOptions {
    fn base(&self) -> &BaseChartOptions {
        &self.axis.base
    }
}

impl ChartConfig for LineChartOptions {
    fn base(&self) -> &BaseChartOptions {
        &self.scatter.axis.base
    }
}

impl ChartConfig for AreaChartOptions {
    fn base(&self) -> &BaseChartOptions {
        &self.axis.base
    }
}

impl ChartConfig for StackedAreaChartOptions {
    fn base(&self) -> &BaseChartOptions {
        &self.scatter.axis.base
    }
}

impl ChartConfig for ComboChartOptions {
    fn base(&self) -> &BaseChartOptions {
        &self.base
    }
}

impl ChartConfig for PieChartOptions {
    fn base(&self) -> &BaseChartOptions {
        &self.base
    }
}

impl ChartConfig for DonutChartOptions {
    fn base(&self) -> &BaseChartOptions {
        &self.pie.base
    }
}

impl ChartConfig for GaugeChartOptions {
    fn base(&self) -> &BaseChartOptions {
        &self.base
    }
}

impl ChartConfig for MeterChartOptions {
    fn base(&self) -> &BaseChartOptions {
        &self.base
    }
}

impl ChartConfig for ProportionalMeterChartOptions {
    fn base(&self) -> &BaseChartOptions {
        &self.base
    }
}

impl ChartConfig for RadarChartOptions {
    fn base(&self) -> &BaseChartOptions {
        &self.base
    }
}

impl ChartConfig for TreeChartOptions {
    fn base(&self) -> &BaseChartOptions {
        &self.base
    }
}

impl ChartConfig for CirclePackChartOptions {
    fn base(&self) -> &BaseChartOptions {
        &self.base
    }
}

impl ChartConfig for WordCloudChartOptions {
    fn base(&self) -> &BaseChartOptions {
        &self.base
    }
}

impl ChartConfig for AlluvialChartOptions {
    fn base(&self) -> &BaseChartOptions {
        &self.base
    }
}

impl ChartConfig for HeatmapChartOptions {
    fn base(&self) -> &BaseChartOptions {
        &self.base
    }
}

impl ChartConfig for ThematicChartOptions {
    fn base(&self) -> &BaseChartOptions {
        &self.base
    }
}

impl ChartConfig for ChoroplethChartOptions {
    fn base(&self) -> &BaseChartOptions {
        &self.thematic.base
    }
}

/// Closed union over every kind-specific configuration shape.
///
/// Serialization emits the inner shape untagged; building a value from
/// untyped JSON goes through [`crate::validate::validate_for_kind`], which
/// dispatches on an explicit [`ChartKind`].
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnyChartConfig {
    Alluvial(AlluvialChartOptions),
    Area(AreaChartOptions),
    StackedArea(StackedAreaChartOptions),
    Bar(BarChartOptions),
    StackedBar(StackedBarChartOptions),
    Boxplot(AxisChartOptions),
    Bubble(BubbleChartOptions),
    Bullet(BulletChartOptions),
    CirclePack(CirclePackChartOptions),
    Combo(ComboChartOptions),
    Donut(DonutChartOptions),
    Gauge(GaugeChartOptions),
    Heatmap(HeatmapChartOptions),
    Histogram(HistogramChartOptions),
    Line(LineChartOptions),
    Lollipop(ScatterChartOptions),
    Meter(MeterChartOptions),
    ProportionalMeter(ProportionalMeterChartOptions),
    Pie(PieChartOptions),
    Radar(RadarChartOptions),
    Scatter(ScatterChartOptions),
    Thematic(ThematicChartOptions),
    Choropleth(ChoroplethChartOptions),
    Tree(TreeChartOptions),
    Treemap(BaseChartOptions),
    WordCloud(WordCloudChartOptions),
}

impl AnyChartConfig {
    /// The discriminant this configuration was validated under.
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Alluvial(_) => ChartKind::Alluvial,
            Self::Area(_) => ChartKind::Area,
            Self::StackedArea(_) => ChartKind::StackedArea,
            Self::Bar(_) => ChartKind::Bar,
            Self::StackedBar(_) => ChartKind::StackedBar,
            Self::Boxplot(_) => ChartKind::Boxplot,
            Self::Bubble(_) => ChartKind::Bubble,
            Self::Bullet(_) => ChartKind::Bullet,
            Self::CirclePack(_) => ChartKind::CirclePack,
            Self::Combo(_) => ChartKind::Combo,
            Self::Donut(_) => ChartKind::Donut,
            Self::Gauge(_) => ChartKind::Gauge,
            Self::Heatmap(_) => ChartKind::Heatmap,
            Self::Histogram(_) => ChartKind::Histogram,
            Self::Line(_) => ChartKind::Line,
            Self::Lollipop(_) => ChartKind::Lollipop,
            Self::Meter(_) => ChartKind::Meter,
            Self::ProportionalMeter(_) => ChartKind::ProportionalMeter,
            Self::Pie(_) => ChartKind::Pie,
            Self::Radar(_) => ChartKind::Radar,
            Self::Scatter(_) => ChartKind::Scatter,
            Self::Thematic(_) => ChartKind::Thematic,
            Self::Choropleth(_) => ChartKind::Choropleth,
            Self::Tree(_) => ChartKind::Tree,
            Self::Treemap(_) => ChartKind::Treemap,
            Self::WordCloud(_) => ChartKind::WordCloud,
        }
    }
}

impl ChartConfig for AnyChartConfig {
    fn base(&self) -> &BaseChartOptions {
        match self {
            Self::Alluvial(config) => config.base(),
            Self::Area(config) => config.base(),
            Self::StackedArea(config) => config.base(),
            Self::Bar(config) => config.base(),
            Self::StackedBar(config) => config.base(),
            Self::Boxplot(config) => config.base(),
            Self::Bubble(config) => config.base(),
            Self::Bullet(config) => config.base(),
            Self::CirclePack(config) => config.base(),
            Self::Combo(config) => config.base(),
            Self::Donut(config) => config.base(),
            Self::Gauge(config) => config.base(),
            Self::Heatmap(config) => config.base(),
            Self::Histogram(config) => config.base(),
            Self::Line(config) => config.base(),
            Self::Lollipop(config) => config.base(),
            Self::Meter(config) => config.base(),
            Self::ProportionalMeter(config) => config.base(),
            Self::Pie(config) => config.base(),
            Self::Radar(config) => config.base(),
            Self::Scatter(config) => config.base(),
            Self::Thematic(config) => config.base(),
            Self::Choropleth(config) => config.base(),
            Self::Tree(config) => config.base(),
            Self::Treemap(config) => config.base(),
            Self::WordCloud(config) => config.base(),
        }
    }
}
