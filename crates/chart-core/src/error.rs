// File: crates/chart-core/src/error.rs
// Summary: Error type for dataset loading, configuration and chart mounting.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// No data points; the bar width would divide by zero.
    #[error("dataset contains no data points")]
    EmptyDataset,

    #[error("invalid ISO date '{value}'")]
    InvalidDate { value: String },

    /// Period start whose month is not 01, 04, 07 or 10.
    #[error("date '{date}' does not start a quarter")]
    UnknownQuarterMonth { date: String },

    #[error("page has no element with id 'container' to host the tooltip")]
    MissingTooltipHost,

    #[error("tooltip element {slot} is no longer present under #container")]
    TooltipDetached { slot: usize },

    #[error("failed to parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse chart config: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
