//! Configuration shapes, one per chart kind, plus the option groups they
//! share. Shapes are pure value descriptions: callers build them (in code
//! or from JSON), the rendering engine reads them, nothing here mutates.
//!
//! Specialization is done by composition (`#[serde(flatten)]` of the base
//! shape into each kind's shape), never by simulated inheritance, so every
//! kind remains structurally additive over its base.

pub mod any_chart;
pub mod axes;
pub mod axis_charts;
pub mod base;
pub mod callbacks;
pub mod circular_charts;
pub mod components;
pub mod enums;
pub mod hierarchy_charts;
pub mod keyword;
pub mod specialty_charts;

pub use any_chart::{AnyChartConfig, ChartConfig, ChartKind};
pub use axes::{
    AxesOptions, AxisOptions, AxisTickOptions, BinnedAxisOptions, BinnedOptions, ComboAxisOptions,
};
pub use axis_charts::{
    AreaBoundsOptions, AreaChartOptions, AxisChartOptions, BarChartOptions, BinOptions,
    BinnedAxisChartOptions, BoxplotChartOptions, BubbleChartOptions, BubbleOptions,
    BulletChartOptions, BulletOptions, ComboChartMember, ComboChartOptions, CurveOptions,
    HistogramChartOptions, LineChartOptions, LollipopChartOptions, PointOptions,
    ScatterChartOptions, StackedAreaChartOptions, StackedBarChartOptions,
};
pub use base::{
    BaseChartOptions, ColorOptions, ColorPairingOptions, DataOptions, FileDownloadOptions,
    GradientOptions, DEFAULT_STYLE_PREFIX,
};
pub use callbacks::{
    ColorFn, FileName, FileNameFn, FontSizeFn, FontSizeRangeFn, FontSizeValue, IsFilledFn,
    LabelFormatFn, NumberFormatFn, RadiusRangeFn, SegmentDatum, SegmentSortFn, YPositionFn,
};
pub use circular_charts::{
    DonutCenterOptions, DonutChartOptions, DonutOptions, GaugeChartOptions,
    GaugeDeltaArrowOptions, GaugeOptions, MeterChartOptions, MeterOptions,
    MeterProportionalOptions, MeterStatusOptions, MeterStatusRange, MeterTitleOptions,
    PercentageIndicatorOptions, PieChartOptions, PieLabelOptions, PieOptions,
    ProportionalMeterChartOptions, ProportionalMeterOptions, RadarAxesOptions, RadarChartOptions,
    RadarOptions,
};
pub use components::{
    BarOptions, GridAxisOptions, GridOptions, LegendOptions, LocaleOptions, StackedBarOptions,
    TabularRepOptions, TimeScaleOptions, ToolbarOptions, TooltipOptions, TruncationOptions,
    ZoomBarAxisOptions, ZoomBarOptions,
};
pub use enums::{
    Alignment, ArrowDirection, ChartTheme, ColorLegendKind, ComboMemberKind, DividerState,
    ExportFormat, GaugeKind, LegendPosition, MapProjection, ScaleKind, Status, TickRotation,
    TreeKind, TruncationKind, ZoomBarView,
};
pub use hierarchy_charts::{
    CirclePackChartOptions, CirclePackOptions, CirclePaddingOptions, CircleOptions,
    TreeChartOptions, TreeOptions, TreemapChartOptions,
};
pub use keyword::OpenEnum;
pub use specialty_charts::{
    AlluvialChartOptions, AlluvialNode, AlluvialOptions, ChoroplethChartOptions,
    ChoroplethOptions, ColorLegendOptions, HeatmapChartOptions, HeatmapDividerOptions,
    HeatmapOptions, ThematicChartOptions, ThematicOptions, WordCloudChartOptions,
    WordCloudOptions, WordCloudTooltipOptions,
};
