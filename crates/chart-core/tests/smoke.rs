// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing SVG and PNG output.

mod common;

use chart_core::types::FADE_MS;
use chart_core::{setup_chart, BarChart, RenderOptions};
use common::{container, early_gdp, page};

#[test]
fn render_smoke_png() {
    let chart = BarChart::new(early_gdp(), &RenderOptions::default()).expect("layout");

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (720, 400));
}

#[test]
fn hovered_instance_highlights_bar() {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let mut pg = page();
    let mut app = container();
    let mut inst = setup_chart(&early_gdp(), &mut app, &mut pg).unwrap();

    let rect = inst.chart().bars[5].rect;
    let (cx, cy) = (rect.left + rect.width() * 0.5, rect.bottom - 2.0);
    let idle = image::load_from_memory(&inst.render_to_png_bytes(&opts).unwrap()).unwrap().to_rgba8();

    inst.pointer_at(Some((cx, cy)));
    inst.advance(FADE_MS);
    let hover = image::load_from_memory(&inst.render_to_png_bytes(&opts).unwrap()).unwrap().to_rgba8();

    let (px, py) = (cx as u32, cy as u32);
    assert_eq!(idle.get_pixel(px, py).0, [0xd9, 0x46, 0xef, 255], "fuchsia-500 bar");
    assert_eq!(hover.get_pixel(px, py).0, [0xf0, 0xab, 0xfc, 255], "fuchsia-300 active bar");
}

#[test]
fn svg_markup_is_well_formed_enough() {
    let chart = BarChart::new(early_gdp(), &RenderOptions::default()).unwrap();
    let svg = chart.render_svg();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"720\" height=\"400\">"));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(svg.matches("<rect ").count(), 12);
    assert!(svg.contains("data-date=\"1948-04-01\""));
}
