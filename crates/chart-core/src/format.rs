// File: crates/chart-core/src/format.rs
// Summary: Number and label formatting for ticks and the tooltip.

use num_format::{Locale, ToFormattedString};

use crate::dataset::DataPoint;

/// Format `v` with `precision` fixed decimals and `,` thousands grouping.
pub fn group_thousands(v: f64, precision: usize) -> String {
    let fixed = format!("{:.*}", precision, v.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let grouped = match int_part.parse::<u64>() {
        Ok(n) => n.to_formatted_string(&Locale::en),
        Err(_) => int_part.to_string(),
    };
    let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if v.is_sign_negative() && !is_zero { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Locale-style number: grouped integer part, at most three fraction digits, trailing zeros dropped.
pub fn format_locale_number(v: f64) -> String {
    let s = group_thousands(v, 3);
    match s.split_once('.') {
        Some((int_part, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() { int_part.to_string() } else { format!("{int_part}.{frac}") }
        }
        None => s,
    }
}

/// Raw numeric attribute text (`1000`, `243.1`).
pub fn format_attr_number(v: f64) -> String {
    format!("{v}")
}

/// `Q2 2020`
pub fn period_label(p: &DataPoint) -> String {
    format!("Q{} {}", p.quarter, p.year())
}

/// `$1,000 Billion`
pub fn gdp_label(value: f64) -> String {
    format!("${} Billion", format_locale_number(value))
}
