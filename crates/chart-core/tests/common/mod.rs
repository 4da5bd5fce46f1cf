// File: crates/chart-core/tests/common/mod.rs
// Purpose: Shared fixtures for integration tests.

#![allow(dead_code)]

use chart_core::{Dataset, Element};

/// Four quarters of 2020 with distinct values.
pub fn quarters_2020() -> Dataset {
    Dataset::from_pairs(
        "2020-01-01",
        "2020-10-01",
        &[("2020-01-01", 500.0), ("2020-04-01", 1000.0), ("2020-07-01", 750.0), ("2020-10-01", 250.0)],
    )
    .expect("valid dataset")
}

/// First three years of the quarterly GDP series.
pub fn early_gdp() -> Dataset {
    Dataset::from_json_str(include_str!("../../../../data/sample-gdp.json")).expect("sample parses")
}

/// `<body><div id="container"></div></body>`
pub fn page() -> Element {
    Element::new("body").child(Element::new("div").attr("id", "container"))
}

pub fn container() -> Element {
    Element::new("div").attr("id", "app")
}
