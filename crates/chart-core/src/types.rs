// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (canvas size, margins, fade timings).

/// Default canvas width in logical units.
pub const WIDTH: i32 = 720;
/// Default canvas height in logical units.
pub const HEIGHT: i32 = 400;

/// Tooltip opacity while visible.
pub const TOOLTIP_OPACITY: f64 = 0.9;
/// Duration of every tooltip opacity transition, in milliseconds.
pub const FADE_MS: u64 = 200;
/// Delay before the tooltip hides after the pointer leaves the chart with a bar focused.
pub const LEAVE_HIDE_DELAY_MS: u64 = 500;
/// Delay before the focused bar is blurred after the pointer leaves the chart.
pub const LEAVE_DEFOCUS_DELAY_MS: u64 = 600;

/// Screen margins, in logical units.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(40, 20, 20, 30)
    }
}
