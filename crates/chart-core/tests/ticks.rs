// File: crates/chart-core/tests/ticks.rs
// Purpose: Validate nice tick generation and labels for the value and time axes.

use chart_core::scale::{format_time_tick, precision_fixed, tick_step, ticks};
use chart_core::{LinearScale, ScaleTransform, TimeInterval, TimeScale};
use chrono::NaiveDate;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn linear_ticks_use_nice_steps() {
    assert_eq!(ticks(0.0, 1000.0, 10), (0..=10).map(|i| i as f64 * 100.0).collect::<Vec<_>>());
    assert_eq!(ticks(0.0, 18064.7, 10), (0..=9).map(|i| i as f64 * 2000.0).collect::<Vec<_>>());
    assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(ticks(3.0, 3.0, 10), vec![3.0]);
    assert!(ticks(0.0, 1.0, 0).is_empty());
}

#[test]
fn linear_tick_labels_group_thousands() {
    let y = LinearScale::new((0.0, 18064.7), (370.0, 20.0));
    let labels: Vec<String> = y.ticks(10).iter().map(|v| y.format_tick(v, 10)).collect();
    assert_eq!(labels.first().map(String::as_str), Some("0"));
    assert_eq!(labels[1], "2,000");
    assert_eq!(labels.last().map(String::as_str), Some("18,000"));

    let small = LinearScale::new((0.0, 1.0), (100.0, 0.0));
    assert_eq!(small.format_tick(&0.5, 10), "0.5");
    assert_eq!(precision_fixed(tick_step(0.0, 1.0, 10)), 1);
}

#[test]
fn linear_scale_inverts() {
    let y = LinearScale::new((0.0, 1000.0), (370.0, 20.0));
    assert_eq!(y.apply(&0.0), 370.0);
    assert_eq!(y.apply(&1000.0), 20.0);
    assert!((y.invert(195.0) - 500.0).abs() < 1e-9);
}

#[test]
fn long_ranges_tick_every_five_years() {
    let x = TimeScale::new((d(1947, 1, 1), d(2015, 7, 1)), (40.0, 700.0));
    assert_eq!(x.interval(10), TimeInterval::Year(5));
    let t = x.ticks(10);
    assert_eq!(t.first(), Some(&d(1950, 1, 1)));
    assert_eq!(t.last(), Some(&d(2015, 1, 1)));
    assert_eq!(t.len(), 14);
    assert_eq!(x.format_tick(&t[0], 10), "1950");
}

#[test]
fn short_ranges_tick_every_quarter() {
    let x = TimeScale::new((d(1947, 1, 1), d(1949, 10, 1)), (40.0, 700.0));
    assert_eq!(x.interval(10), TimeInterval::Month(3));
    let labels: Vec<String> = x.ticks(10).iter().map(|v| x.format_tick(v, 10)).collect();
    assert_eq!(labels.len(), 12);
    assert_eq!(&labels[..5], &["1947", "April", "July", "October", "1948"]);
}

#[test]
fn day_and_week_intervals_for_narrow_domains() {
    assert_eq!(TimeScale::new((d(2020, 1, 1), d(2020, 1, 5)), (0.0, 1.0)).interval(10), TimeInterval::Day(1));
    let weekly = TimeScale::new((d(2020, 1, 1), d(2020, 3, 1)), (0.0, 1.0));
    assert_eq!(weekly.interval(10), TimeInterval::Week);
    // 2020-01-05 was a Sunday.
    assert_eq!(weekly.ticks(10).first(), Some(&d(2020, 1, 5)));
    assert_eq!(format_time_tick(d(2020, 1, 5)), "Jan 05");
    assert_eq!(format_time_tick(d(2020, 1, 7)), "Tue 07");
}

#[test]
fn time_scale_maps_domain_ends_to_range() {
    let x = TimeScale::new((d(2020, 1, 1), d(2020, 10, 1)), (40.0, 700.0));
    assert_eq!(x.apply(&d(2020, 1, 1)), 40.0);
    assert_eq!(x.apply(&d(2020, 10, 1)), 700.0);
    assert_eq!(x.invert(700.0), d(2020, 10, 1));
    assert_eq!(x.invert(40.0), d(2020, 1, 1));
}
