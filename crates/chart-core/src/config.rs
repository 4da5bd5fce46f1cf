// File: crates/chart-core/src/config.rs
// Summary: Chart configuration (layout, styling tokens, theme) loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chart::RenderOptions;
use crate::error::Result;
use crate::theme;
use crate::types::{Insets, HEIGHT, WIDTH};

pub const DEFAULT_BAR_CLASS: &str = "bar fill-fuchsia-500 hover:fill-fuchsia-300";
pub const DEFAULT_TOOLTIP_CLASS: &str = "bg-white/90 shadow-fuchsia-950/10 font-inter rounded w-40 p-3 h-20 \
absolute bottom-16 left-16 shadow-lg flex items-center justify-center flex-col";

/// Styling and layout knobs. Every field has a default, so an empty file is valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: i32,
    pub height: i32,
    pub margins: Insets,
    pub tick_count: usize,
    pub bar_class: String,
    pub tooltip_class: String,
    /// Font family token, most preferred first.
    pub font_family: Vec<String>,
    pub theme: String,
    pub draw_labels: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            margins: Insets::default(),
            tick_count: 10,
            bar_class: DEFAULT_BAR_CLASS.to_string(),
            tooltip_class: DEFAULT_TOOLTIP_CLASS.to_string(),
            font_family: ["Inter", "ui-sans-serif", "system-ui", "sans-serif"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            theme: "fuchsia".to_string(),
            draw_labels: true,
        }
    }
}

impl ChartConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            height: self.height,
            insets: self.margins,
            tick_count: self.tick_count,
            theme: theme::find(&self.theme),
            draw_labels: self.draw_labels,
            show_tooltip: true,
            bar_class: self.bar_class.clone(),
            tooltip_class: self.tooltip_class.clone(),
            font_family: self.font_family.clone(),
        }
    }
}
