// File: crates/chart-core/src/dataset.rs
// Summary: Quarterly GDP dataset model and JSON loading.
// Notes:
// - Dates are kept both as the source string (for `data-date`) and parsed,
//   so markup reproduces the input verbatim while scales work on UTC time.
// - Validation is eager: a dataset that loads is one the chart can draw.

use std::path::Path;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ChartError, Result};

/// One observation: the quarter's start date and GDP in billions.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub date_str: String,
    pub date: NaiveDate,
    pub value: f64,
    pub quarter: u8,
    year: i32,
}

impl DataPoint {
    pub fn try_new(date_str: impl Into<String>, value: f64) -> Result<Self> {
        let date_str = date_str.into();
        let date = parse_iso_date(&date_str)?;
        // Period labels read the calendar date as written; placement uses the UTC instant.
        let written = written_date(&date_str)?;
        let quarter = quarter_of_month(written.month())
            .ok_or_else(|| ChartError::UnknownQuarterMonth { date: date_str.clone() })?;
        Ok(Self { date_str, date, value, quarter, year: written.year() })
    }

    pub fn year(&self) -> i32 { self.year }
}

/// Fixed month → quarter lookup; only quarter start months are recognised.
pub fn quarter_of_month(month: u32) -> Option<u8> {
    match month {
        1 => Some(1),
        4 => Some(2),
        7 => Some(3),
        10 => Some(4),
        _ => None,
    }
}

/// Parse `YYYY-MM-DD`, falling back to a full RFC 3339 timestamp taken as its UTC date.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate> {
    let t = s.trim();
    NaiveDate::parse_from_str(t, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(t).map(|dt| dt.with_timezone(&Utc).date_naive()))
        .map_err(|_| ChartError::InvalidDate { value: s.to_string() })
}

/// Leading `YYYY-MM-DD` of a date string, ignoring any time or offset.
fn written_date(s: &str) -> Result<NaiveDate> {
    s.trim()
        .get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .ok_or_else(|| ChartError::InvalidDate { value: s.to_string() })
}

#[derive(Deserialize)]
struct RawDataset {
    from_date: String,
    to_date: String,
    data: Vec<(String, f64)>,
}

/// Ordered data points plus the declared horizontal domain.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub points: Vec<DataPoint>,
}

impl Dataset {
    pub fn new(from_date: NaiveDate, to_date: NaiveDate, points: Vec<DataPoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        Ok(Self { from_date, to_date, points })
    }

    /// Build from `(date, value)` pairs, e.g. for tests and generated data.
    pub fn from_pairs<S: AsRef<str>>(from_date: &str, to_date: &str, pairs: &[(S, f64)]) -> Result<Self> {
        let points = pairs
            .iter()
            .map(|(d, v)| DataPoint::try_new(d.as_ref(), *v))
            .collect::<Result<Vec<_>>>()?;
        Self::new(parse_iso_date(from_date)?, parse_iso_date(to_date)?, points)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawDataset = serde_json::from_str(json)?;
        let ds = Self::from_pairs(&raw.from_date, &raw.to_date, &raw.data)?;
        debug!(points = ds.len(), from = %ds.from_date, to = %ds.to_date, "loaded dataset");
        Ok(ds)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max)
    }

    /// Index of the point whose source date string equals `date`.
    pub fn position_of(&self, date: &str) -> Option<usize> {
        self.points.iter().position(|p| p.date_str == date)
    }
}
