// File: crates/chart-core/tests/dataset.rs
// Purpose: Dataset JSON loading, validation failures, and value formatting.

use chart_core::dataset::{parse_iso_date, quarter_of_month, DataPoint};
use chrono::NaiveDate;
use chart_core::format::{format_locale_number, gdp_label, group_thousands, period_label};
use chart_core::{ChartError, Dataset};

#[test]
fn loads_json_and_ignores_extra_fields() {
    let json = r#"{
        "name": "GDP",
        "from_date": "1947-01-01",
        "to_date": "1947-04-01",
        "data": [["1947-01-01", 243.1], ["1947-04-01", 246.3]]
    }"#;
    let ds = Dataset::from_json_str(json).expect("parse");
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.points[1].date_str, "1947-04-01");
    assert_eq!(ds.points[1].quarter, 2);
    assert_eq!(ds.max_value(), 246.3);
    assert_eq!(ds.position_of("1947-04-01"), Some(1));
}

#[test]
fn empty_dataset_is_rejected() {
    let json = r#"{"from_date": "2020-01-01", "to_date": "2020-01-01", "data": []}"#;
    assert!(matches!(Dataset::from_json_str(json), Err(ChartError::EmptyDataset)));
}

#[test]
fn malformed_dates_are_rejected() {
    let err = DataPoint::try_new("2020-13-01", 1.0).unwrap_err();
    assert!(matches!(err, ChartError::InvalidDate { ref value } if value == "2020-13-01"));
    assert!(matches!(
        Dataset::from_pairs("nope", "2020-01-01", &[("2020-01-01", 1.0)]),
        Err(ChartError::InvalidDate { .. })
    ));
}

#[test]
fn non_quarter_months_are_rejected() {
    let err = DataPoint::try_new("2020-02-01", 1.0).unwrap_err();
    assert!(matches!(err, ChartError::UnknownQuarterMonth { .. }));
    assert_eq!(quarter_of_month(10), Some(4));
    assert_eq!(quarter_of_month(11), None);
}

#[test]
fn bad_json_surfaces_parse_error() {
    assert!(matches!(Dataset::from_json_str("{"), Err(ChartError::Json(_))));
    assert!(matches!(Dataset::from_json_file("does/not/exist.json"), Err(ChartError::Io(_))));
}

#[test]
fn rfc3339_timestamps_use_their_date() {
    let p = DataPoint::try_new("2020-07-01T00:00:00Z", 1.0).unwrap();
    assert_eq!(p.quarter, 3);
    assert_eq!(p.date_str, "2020-07-01T00:00:00Z");
}

#[test]
fn offset_timestamps_place_at_utc_but_label_as_written() {
    let p = DataPoint::try_new("2020-07-01T00:00:00+02:00", 1.0).unwrap();
    assert_eq!(p.date, NaiveDate::from_ymd_opt(2020, 6, 30).unwrap());
    assert_eq!(p.quarter, 3);
    assert_eq!(p.year(), 2020);
    assert_eq!(parse_iso_date("2021-01-01T01:00:00+05:00").unwrap(), NaiveDate::from_ymd_opt(2020, 12, 31).unwrap());
}

#[test]
fn labels_match_tooltip_format() {
    let p = DataPoint::try_new("2020-04-01", 1000.0).unwrap();
    assert_eq!(period_label(&p), "Q2 2020");
    assert_eq!(gdp_label(p.value), "$1,000 Billion");
    assert_eq!(gdp_label(243.1), "$243.1 Billion");
    assert_eq!(format_locale_number(1234.56789), "1,234.568");
    assert_eq!(format_locale_number(-0.0001), "0");
    assert_eq!(group_thousands(1234567.0, 0), "1,234,567");
    assert_eq!(group_thousands(-2500.0, 1), "-2,500.0");
}
