// File: crates/chart-core/src/mount.rs
// Summary: Mounting a chart into a page tree and driving tooltip interaction on the mounted instance.
// Notes:
// - Each setup appends a fresh `<svg>` to the container and a fresh tooltip to
//   `#container`; repeated setups stack charts rather than replacing them.
// - The returned `ChartInstance` owns that chart's tooltip state.

use tracing::{debug, info};

use crate::chart::{BarChart, RenderOptions, TooltipOverlay};
use crate::dataset::Dataset;
use crate::dom::{Element, Node};
use crate::error::{ChartError, Result};
use crate::format::format_attr_number;
use crate::tooltip::{Target, Tooltip, TooltipContent, TooltipEvent, Visibility};

/// Id of the element that hosts tooltips.
pub const TOOLTIP_HOST_ID: &str = "container";
pub const TOOLTIP_ID: &str = "tooltip";

/// Build a chart for `dataset` and mount it: `<svg>` into `container`, tooltip into `page`'s `#container`.
pub fn setup_chart(dataset: &Dataset, container: &mut Element, page: &mut Element) -> Result<ChartInstance> {
    setup_chart_with(dataset, &RenderOptions::default(), container, page)
}

pub fn setup_chart_with(
    dataset: &Dataset,
    opts: &RenderOptions,
    container: &mut Element,
    page: &mut Element,
) -> Result<ChartInstance> {
    let chart = BarChart::new(dataset.clone(), opts)?;
    chart.mount(opts, container, page)
}

impl BarChart {
    pub fn mount(&self, opts: &RenderOptions, container: &mut Element, page: &mut Element) -> Result<ChartInstance> {
        let host = page.find_by_id_mut(TOOLTIP_HOST_ID).ok_or(ChartError::MissingTooltipHost)?;
        let instance = ChartInstance {
            chart: self.clone(),
            tooltip: Tooltip::new(&self.dataset.points),
            tooltip_class: opts.tooltip_class.clone(),
            tooltip_slot: host.children.len(),
            pointer_inside: false,
        };
        host.append(instance.tooltip_element());
        container.append(self.to_svg_element());
        info!(bars = self.bars.len(), slot = instance.tooltip_slot, "mounted bar chart");
        Ok(instance)
    }
}

/// A mounted chart: layout for hit testing plus its tooltip.
#[derive(Clone, Debug)]
pub struct ChartInstance {
    chart: BarChart,
    tooltip: Tooltip,
    tooltip_class: String,
    /// Child index of this chart's tooltip under `#container`.
    tooltip_slot: usize,
    pointer_inside: bool,
}

impl ChartInstance {
    pub fn chart(&self) -> &BarChart { &self.chart }
    pub fn tooltip(&self) -> &Tooltip { &self.tooltip }
    pub fn tooltip_slot(&self) -> usize { self.tooltip_slot }
    pub fn visibility(&self) -> Visibility { self.tooltip.visibility() }
    pub fn opacity(&self) -> f64 { self.tooltip.opacity() }
    pub fn content(&self) -> Option<&TooltipContent> { self.tooltip.content() }
    pub fn focused(&self) -> Option<usize> { self.tooltip.focused() }
    pub fn hovered(&self) -> Option<usize> { self.tooltip.hovered() }

    /// Dispatch a raw event, as the page's event loop would.
    pub fn handle(&mut self, event: TooltipEvent) {
        match event {
            TooltipEvent::PointerEnter(_) => self.pointer_inside = true,
            TooltipEvent::ChartPointerLeave { .. } => self.pointer_inside = false,
            _ => {}
        }
        self.tooltip.handle(event);
    }

    pub fn advance(&mut self, ms: u64) {
        self.tooltip.advance(ms);
    }

    /// Move the pointer to `pos` (chart coordinates), or off the chart with `None`.
    /// Positions outside the canvas count as off the chart.
    pub fn pointer_at(&mut self, pos: Option<(f64, f64)>) {
        let pos = pos.filter(|&(x, y)| self.on_canvas(x, y));
        let next = pos.and_then(|(x, y)| self.chart.hit_test(x, y));
        let prev = self.tooltip.hovered();
        if next != prev {
            if let Some(bar) = prev {
                let to = next.map(Target::Bar).unwrap_or(Target::Outside);
                self.tooltip.handle(TooltipEvent::PointerLeave { bar, to });
            }
            if let Some(bar) = next {
                self.tooltip.handle(TooltipEvent::PointerEnter(bar));
            }
        }
        if pos.is_none() && self.pointer_inside {
            self.tooltip.handle(TooltipEvent::ChartPointerLeave { to: Target::Outside });
        }
        self.pointer_inside = pos.is_some();
    }

    fn on_canvas(&self, x: f64, y: f64) -> bool {
        (0.0..self.chart.width as f64).contains(&x) && (0.0..self.chart.height as f64).contains(&y)
    }

    /// Tab: blur the focused bar and focus the next one; past the last bar focus leaves the chart.
    pub fn focus_next(&mut self) -> Option<usize> {
        let next = match self.tooltip.focused() {
            Some(i) => (i + 1 < self.chart.bars.len()).then_some(i + 1),
            None => (!self.chart.bars.is_empty()).then_some(0),
        };
        self.move_focus(next)
    }

    /// Shift+Tab counterpart of [`focus_next`](Self::focus_next).
    pub fn focus_prev(&mut self) -> Option<usize> {
        let next = match self.tooltip.focused() {
            Some(i) => i.checked_sub(1),
            None => self.chart.bars.len().checked_sub(1),
        };
        self.move_focus(next)
    }

    /// Focus the bar whose source date is `date`.
    pub fn focus_date(&mut self, date: &str) -> Option<usize> {
        let idx = self.chart.dataset.position_of(date)?;
        self.move_focus(Some(idx))
    }

    fn move_focus(&mut self, next: Option<usize>) -> Option<usize> {
        if let Some(cur) = self.tooltip.focused() {
            self.tooltip.handle(TooltipEvent::Blur(cur));
        }
        if let Some(i) = next {
            self.tooltip.handle(TooltipEvent::Focus(i));
        }
        debug!(focused = ?next, "keyboard focus moved");
        next
    }

    /// Current tooltip state as a `div#tooltip`.
    pub fn tooltip_element(&self) -> Element {
        let mut div = Element::new("div")
            .attr("id", TOOLTIP_ID)
            .attr("class", &self.tooltip_class)
            .style("opacity", format_attr_number(self.tooltip.opacity()));
        if let Some(c) = self.tooltip.content() {
            div.set_attr("data-date", &c.date);
            div.append(Element::new("span").attr("class", "font-bold").text(c.period.clone()));
            div.append(Element::new("span").text(c.value.clone()));
        }
        div
    }

    /// Write the current tooltip state into this chart's mounted tooltip element.
    pub fn sync_tooltip(&self, page: &mut Element) -> Result<()> {
        let host = page.find_by_id_mut(TOOLTIP_HOST_ID).ok_or(ChartError::MissingTooltipHost)?;
        match host.children.get_mut(self.tooltip_slot) {
            Some(Node::Element(e)) if e.id() == Some(TOOLTIP_ID) => {
                *e = self.tooltip_element();
                Ok(())
            }
            _ => Err(ChartError::TooltipDetached { slot: self.tooltip_slot }),
        }
    }

    /// Raster render with the active bar highlighted and the tooltip drawn at its current opacity.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> anyhow::Result<Vec<u8>> {
        let overlay = TooltipOverlay {
            content: self.tooltip.content(),
            opacity: self.tooltip.opacity(),
            active_bar: self.tooltip.focused().or(self.tooltip.hovered()),
        };
        self.chart.render_png_with(opts, Some(&overlay))
    }
}
