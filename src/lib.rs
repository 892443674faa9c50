//! chart-config-rs: typed configuration surface for a charting library.
//!
//! This crate defines one option shape per chart kind (bar, line, pie,
//! gauge, alluvial, ...), the shared option groups they compose, and a
//! runtime validator that checks untyped JSON configuration values against
//! the shape selected by an explicit [`ChartKind`] discriminant. It holds
//! no rendering, layout, or data-transformation logic.

pub mod error;
pub mod options;
pub mod telemetry;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use options::{AnyChartConfig, BaseChartOptions, ChartConfig, ChartKind};
pub use validate::validate_for_kind;
