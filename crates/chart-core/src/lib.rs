// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the public API for building, mounting and rendering the GDP bar chart.

pub mod axis;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod dom;
pub mod error;
pub mod format;
pub mod geometry;
pub mod mount;
pub mod scale;
pub mod text;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use axis::{Axis, AxisTick, Orient};
pub use chart::{Bar, BarChart, RenderOptions};
pub use config::ChartConfig;
pub use dataset::{DataPoint, Dataset};
pub use dom::{Element, Node};
pub use error::ChartError;
pub use mount::{setup_chart, setup_chart_with, ChartInstance};
pub use scale::{LinearScale, ScaleTransform, TimeInterval, TimeScale};
pub use text::TextShaper;
pub use theme::Theme;
pub use tooltip::{Target, Tooltip, TooltipContent, TooltipEvent, Visibility};
