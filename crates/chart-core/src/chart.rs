// File: crates/chart-core/src/chart.rs
// Summary: Bar chart layout (scales, axes, bars), SVG markup and headless PNG rendering using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;
use tracing::debug;

use crate::axis::{Axis, Orient, TICK_SIZE};
use crate::config::ChartConfig;
use crate::dataset::Dataset;
use crate::dom::Element;
use crate::error::ChartError;
use crate::format::format_attr_number;
use crate::geometry::RectF;
use crate::scale::{LinearScale, ScaleTransform, TimeScale};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::tooltip::TooltipContent;
use crate::types::Insets;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Tooltip box size and its offset from the host's bottom-left corner.
const TOOLTIP_W: f32 = 160.0;
const TOOLTIP_H: f32 = 80.0;
const TOOLTIP_INSET: f32 = 64.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub tick_count: usize,
    pub theme: Theme,
    /// Axis tick labels and tooltip text; off for platform-independent pixels.
    pub draw_labels: bool,
    /// Draw the tooltip box when rendering an interactive instance.
    pub show_tooltip: bool,
    pub bar_class: String,
    pub tooltip_class: String,
    pub font_family: Vec<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        ChartConfig::default().render_options()
    }
}

/// One laid-out bar.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub index: usize,
    pub rect: RectF,
    pub date: String,
    pub value: f64,
}

/// Tooltip drawn on top of a raster render.
pub(crate) struct TooltipOverlay<'a> {
    pub content: Option<&'a TooltipContent>,
    pub opacity: f64,
    pub active_bar: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct BarChart {
    pub dataset: Dataset,
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub x: TimeScale,
    pub y: LinearScale,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub bar_width: f64,
    pub bars: Vec<Bar>,
    pub bar_class: String,
}

impl BarChart {
    /// Compute scales, axes and bar geometry for `dataset`.
    pub fn new(dataset: Dataset, opts: &RenderOptions) -> Result<Self, ChartError> {
        if dataset.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        let w = opts.width as f64;
        let h = opts.height as f64;
        let ins = opts.insets;
        let baseline = h - ins.bottom as f64;
        let bar_width = (w - ins.hsum() as f64) / dataset.len() as f64;

        let x = TimeScale::new((dataset.from_date, dataset.to_date), (ins.left as f64, w - ins.right as f64));
        let y = LinearScale::new((0.0, dataset.max_value()), (baseline, ins.top as f64));

        let x_axis = Axis::from_scale("x-axis", Orient::Bottom, &x, opts.tick_count, (0.0, baseline));
        let y_axis = Axis::from_scale("y-axis", Orient::Left, &y, opts.tick_count, (ins.left as f64, 0.0));

        let bars = dataset
            .points
            .iter()
            .enumerate()
            .map(|(index, p)| {
                let top = y.apply(&p.value);
                Bar {
                    index,
                    rect: RectF::from_xywh(x.apply(&p.date), top, bar_width, baseline - top),
                    date: p.date_str.clone(),
                    value: p.value,
                }
            })
            .collect::<Vec<_>>();

        debug!(
            bars = bars.len(),
            bar_width,
            x_ticks = x_axis.ticks.len(),
            y_ticks = y_axis.ticks.len(),
            "laid out bar chart"
        );

        Ok(Self {
            dataset,
            width: opts.width,
            height: opts.height,
            insets: ins,
            x,
            y,
            x_axis,
            y_axis,
            bar_width,
            bars,
            bar_class: opts.bar_class.clone(),
        })
    }

    /// Topmost bar under `(x, y)`; later bars paint over earlier ones.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        self.bars.iter().rev().find(|b| b.rect.contains(x, y)).map(|b| b.index)
    }

    pub fn to_svg_element(&self) -> Element {
        let mut svg = Element::new("svg")
            .attr("xmlns", SVG_NS)
            .attr("width", self.width)
            .attr("height", self.height)
            .child(self.x_axis.to_element())
            .child(self.y_axis.to_element());
        for b in &self.bars {
            svg.append(
                Element::new("rect")
                    .attr("x", format_attr_number(b.rect.left))
                    .attr("width", format_attr_number(b.rect.width()))
                    .attr("y", format_attr_number(b.rect.top))
                    .attr("height", format_attr_number(b.rect.height()))
                    .attr("class", &self.bar_class)
                    .attr("data-date", &b.date)
                    .attr("data-gdp", format_attr_number(b.value))
                    .attr("tabindex", 0),
            );
        }
        svg
    }

    pub fn render_svg(&self) -> String {
        self.to_svg_element().to_string()
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        self.render_png_with(opts, None)
    }

    pub(crate) fn render_png_with(&self, opts: &RenderOptions, overlay: Option<&TooltipOverlay<'_>>) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((self.width, self.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        let shaper = opts.draw_labels.then(|| TextShaper::new(&opts.font_family));
        self.draw_bars(canvas, &opts.theme, overlay.and_then(|o| o.active_bar));
        draw_axis(canvas, &self.x_axis, &opts.theme, shaper.as_ref());
        draw_axis(canvas, &self.y_axis, &opts.theme, shaper.as_ref());

        if let Some(o) = overlay {
            if opts.show_tooltip && o.opacity > 0.0 {
                draw_tooltip(canvas, self.height as f32, o, &opts.theme, shaper.as_ref());
            }
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    fn draw_bars(&self, canvas: &skia::Canvas, theme: &Theme, active: Option<usize>) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        for b in &self.bars {
            paint.set_color(if active == Some(b.index) { theme.bar_active } else { theme.bar });
            let r = b.rect;
            canvas.draw_rect(
                skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32),
                &paint,
            );
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_axis(canvas: &skia::Canvas, axis: &Axis, theme: &Theme, shaper: Option<&TextShaper>) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (tx, ty) = (axis.translate.0 as f32, axis.translate.1 as f32);
    let (r0, r1) = (axis.range.0 as f32 + 0.5, axis.range.1 as f32 + 0.5);
    let size = TICK_SIZE as f32;
    match axis.orient {
        Orient::Bottom => {
            let y = ty + 0.5;
            canvas.draw_line((r0, y), (r1, y), &paint);
            canvas.draw_line((r0, y), (r0, y + size), &paint);
            canvas.draw_line((r1, y), (r1, y + size), &paint);
            for t in &axis.ticks {
                let x = tx + t.pos as f32 + 0.5;
                canvas.draw_line((x, ty), (x, ty + size), &paint);
                if let Some(s) = shaper {
                    s.draw_centered(canvas, &t.label, x, ty + 16.1, 10.0, theme.axis_label, false);
                }
            }
        }
        Orient::Left => {
            let x = tx + 0.5;
            canvas.draw_line((x, r0), (x, r1), &paint);
            canvas.draw_line((x - size, r0), (x, r0), &paint);
            canvas.draw_line((x - size, r1), (x, r1), &paint);
            for t in &axis.ticks {
                let y = ty + t.pos as f32 + 0.5;
                canvas.draw_line((tx - size, y), (tx, y), &paint);
                if let Some(s) = shaper {
                    s.draw_right(canvas, &t.label, tx - 9.0, y + 3.2, 10.0, theme.axis_label, false);
                }
            }
        }
    }
}

fn faded(c: skia::Color, opacity: f64) -> skia::Color {
    c.with_a((c.a() as f64 * opacity.clamp(0.0, 1.0)).round() as u8)
}

fn draw_tooltip(canvas: &skia::Canvas, height: f32, o: &TooltipOverlay<'_>, theme: &Theme, shaper: Option<&TextShaper>) {
    let left = TOOLTIP_INSET;
    let top = height - TOOLTIP_INSET - TOOLTIP_H;
    let rect = skia::Rect::from_xywh(left, top, TOOLTIP_W, TOOLTIP_H);

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(faded(theme.tooltip_shadow, o.opacity));
    canvas.draw_rrect(skia::RRect::new_rect_xy(rect.with_offset((0.0, 4.0)), 4.0, 4.0), &paint);
    paint.set_color(faded(theme.tooltip_background, o.opacity));
    canvas.draw_rrect(skia::RRect::new_rect_xy(rect, 4.0, 4.0), &paint);

    if let (Some(s), Some(content)) = (shaper, o.content) {
        let cx = left + TOOLTIP_W * 0.5;
        let cy = top + TOOLTIP_H * 0.5;
        let color = faded(theme.tooltip_text, o.opacity);
        s.draw_centered(canvas, &content.period, cx, cy - 4.0, 16.0, color, true);
        s.draw_centered(canvas, &content.value, cx, cy + 18.0, 16.0, color, false);
    }
}
