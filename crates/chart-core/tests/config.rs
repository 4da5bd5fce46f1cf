// File: crates/chart-core/tests/config.rs
// Purpose: TOML chart configuration defaults and overrides.

use chart_core::types::Insets;
use chart_core::{BarChart, ChartConfig, ChartError, Dataset};

#[test]
fn empty_config_uses_defaults() {
    let cfg = ChartConfig::from_toml_str("").expect("empty is valid");
    assert_eq!(cfg, ChartConfig::default());
    assert_eq!((cfg.width, cfg.height), (720, 400));
    assert_eq!(cfg.margins, Insets::new(40, 20, 20, 30));
    assert_eq!(cfg.font_family[0], "Inter");
    assert!(cfg.bar_class.split_whitespace().any(|c| c == "bar"));
}

#[test]
fn overrides_flow_into_layout() {
    let cfg = ChartConfig::from_toml_str(
        r#"
        width = 420
        theme = "dark"
        bar_class = "bar custom"

        [margins]
        left = 10
        right = 10
        "#,
    )
    .expect("parse");
    assert_eq!(cfg.margins, Insets::new(10, 10, 20, 30));

    let opts = cfg.render_options();
    assert_eq!(opts.theme.name, "dark");
    let ds = Dataset::from_pairs("2020-01-01", "2020-04-01", &[("2020-01-01", 1.0), ("2020-04-01", 2.0)]).unwrap();
    let chart = BarChart::new(ds, &opts).unwrap();
    assert_eq!(chart.bar_width, 200.0);
    assert_eq!(chart.to_svg_element().select_tag("rect")[0].get_attr("class"), Some("bar custom"));
}

#[test]
fn unknown_theme_falls_back() {
    let cfg = ChartConfig::from_toml_str("theme = \"neon\"").unwrap();
    assert_eq!(cfg.render_options().theme.name, "fuchsia");
}

#[test]
fn malformed_config_is_an_error() {
    assert!(matches!(ChartConfig::from_toml_str("width = \"wide\""), Err(ChartError::Config(_))));
}
