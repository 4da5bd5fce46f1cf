// File: crates/chart-core/src/theme.rs
// Summary: Colour themes for raster output and the matching SVG fills.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub bar: skia::Color,
    pub bar_active: skia::Color,
    pub tooltip_background: skia::Color,
    pub tooltip_text: skia::Color,
    pub tooltip_shadow: skia::Color,
}

impl Theme {
    /// White page with fuchsia bars (fuchsia-500, fuchsia-300 when active).
    pub fn fuchsia() -> Self {
        Self {
            name: "fuchsia",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            bar: skia::Color::from_argb(255, 0xd9, 0x46, 0xef),
            bar_active: skia::Color::from_argb(255, 0xf0, 0xab, 0xfc),
            tooltip_background: skia::Color::from_argb(230, 255, 255, 255),
            tooltip_text: skia::Color::from_argb(255, 0x1f, 0x29, 0x37),
            tooltip_shadow: skia::Color::from_argb(26, 0x4a, 0x04, 0x4e), // fuchsia-950/10
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            bar: skia::Color::from_argb(255, 0xc0, 0x26, 0xd3),
            bar_active: skia::Color::from_argb(255, 0xe8, 0x79, 0xf9),
            tooltip_background: skia::Color::from_argb(230, 40, 40, 45),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
            tooltip_shadow: skia::Color::from_argb(60, 0, 0, 0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::fuchsia() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::fuchsia(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to fuchsia.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
