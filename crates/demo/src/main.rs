// File: crates/demo/src/main.rs
// Summary: Demo loads a GDP JSON dataset, writes an HTML page with the chart and a PNG, and replays hover/focus interactions.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::mount::TOOLTIP_HOST_ID;
use chart_core::{BarChart, ChartConfig, ChartInstance, Dataset, Element};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gdp-chart", about = "Render the quarterly GDP bar chart to HTML/SVG and PNG")]
struct Args {
    /// Dataset JSON with `from_date`, `to_date` and `data`
    #[arg(long, default_value = "data/sample-gdp.json")]
    data: PathBuf,

    /// Optional TOML chart config (layout, classes, font family, theme)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Hover the bar with this date and render the tooltip
    #[arg(long)]
    hover: Option<String>,

    /// Focus the bar with this date, then move the pointer off the chart
    #[arg(long)]
    focus: Option<String>,

    /// Skip raster output
    #[arg(long)]
    no_png: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chart_core=info,gdp_chart=info")),
        )
        .with_target(true)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(p) => ChartConfig::from_file(p).with_context(|| format!("failed to load config '{}'", p.display()))?,
        None => ChartConfig::default(),
    };
    let opts = config.render_options();

    let dataset = Dataset::from_json_file(&args.data)
        .with_context(|| format!("failed to load dataset '{}'", args.data.display()))?;
    info!(points = dataset.len(), from = %dataset.from_date, to = %dataset.to_date, "loaded {}", args.data.display());

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let chart = BarChart::new(dataset, &opts)?;
    let mut page = page_skeleton();
    let mut app = Element::new("div").attr("id", "app");
    let mut instance = chart.mount(&opts, &mut app, &mut page)?;
    if let Some(host) = page.find_by_id_mut(TOOLTIP_HOST_ID) {
        host.append(app);
    }

    if !args.no_png {
        let out = args.out_dir.join("chart.png");
        chart.render_to_png(&opts, &out)?;
        info!("Wrote {}", out.display());
    }

    if let Some(date) = &args.hover {
        replay_hover(&mut instance, date)?;
        if !args.no_png {
            write_bytes(&args.out_dir.join("chart_hover.png"), &instance.render_to_png_bytes(&opts)?)?;
        }
        instance.pointer_at(None);
        instance.advance(chart_core::types::FADE_MS);
    }

    if let Some(date) = &args.focus {
        replay_focus(&mut instance, date, &opts, &args)?;
    }

    instance.sync_tooltip(&mut page)?;
    let html = args.out_dir.join("index.html");
    write_bytes(&html, render_document(&page).as_bytes())?;
    info!("Wrote {}", html.display());

    let svg = args.out_dir.join("chart.svg");
    write_bytes(&svg, chart.render_svg().as_bytes())?;
    info!("Wrote {}", svg.display());
    Ok(())
}

fn replay_hover(instance: &mut ChartInstance, date: &str) -> Result<()> {
    let Some(idx) = instance.chart().dataset.position_of(date) else {
        anyhow::bail!("no bar with date '{date}'");
    };
    let r = instance.chart().bars[idx].rect;
    instance.pointer_at(Some((r.left + r.width() * 0.5, r.bottom - 1.0)));
    instance.advance(chart_core::types::FADE_MS);
    match instance.content() {
        Some(c) => info!(opacity = instance.opacity(), "hover {date}: {}", c.text()),
        None => warn!("hover {date}: tooltip has no content"),
    }
    Ok(())
}

fn replay_focus(instance: &mut ChartInstance, date: &str, opts: &chart_core::RenderOptions, args: &Args) -> Result<()> {
    if instance.focus_date(date).is_none() {
        anyhow::bail!("no bar with date '{date}'");
    }
    instance.advance(chart_core::types::FADE_MS);
    if let Some(c) = instance.content() {
        info!(opacity = instance.opacity(), "focus {date}: {}", c.text());
    }
    if !args.no_png {
        write_bytes(&args.out_dir.join("chart_focus.png"), &instance.render_to_png_bytes(opts)?)?;
    }

    // Pointer passes over the chart and leaves while focus stays on the bar.
    instance.pointer_at(Some((0.0, 0.0)));
    instance.pointer_at(None);
    instance.advance(chart_core::types::LEAVE_DEFOCUS_DELAY_MS);
    info!(
        visible = instance.tooltip().is_visible(),
        focused = ?instance.focused(),
        "after pointer left the chart"
    );
    Ok(())
}

fn page_skeleton() -> Element {
    Element::new("body").child(
        Element::new("div")
            .attr("id", TOOLTIP_HOST_ID)
            .attr("class", "relative flex flex-col items-center p-8 font-inter"),
    )
}

fn render_document(body: &Element) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>GDP</title>\n</head>\n{body}\n</html>\n"
    )
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}
