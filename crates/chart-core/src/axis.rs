// File: crates/chart-core/src/axis.rs
// Summary: Axis model (ticks + labels) and its SVG group.

use crate::dom::Element;
use crate::format::format_attr_number;
use crate::scale::ScaleTransform;

/// Length of tick marks and the domain path's outer ticks.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between tick mark and label.
pub const TICK_PADDING: f64 = 3.0;
/// Crisp-edge offset for 1px strokes.
const OFFSET: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    /// Pixel position along the axis, before the crisp-edge offset.
    pub pos: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub id: String,
    pub orient: Orient,
    /// Translation of the whole axis group.
    pub translate: (f64, f64),
    pub range: (f64, f64),
    pub ticks: Vec<AxisTick>,
}

impl Axis {
    pub fn from_scale<S: ScaleTransform>(
        id: impl Into<String>,
        orient: Orient,
        scale: &S,
        tick_count: usize,
        translate: (f64, f64),
    ) -> Self {
        let ticks = scale
            .ticks(tick_count)
            .iter()
            .map(|v| AxisTick { pos: scale.apply(v), label: scale.format_tick(v, tick_count) })
            .collect();
        Self { id: id.into(), orient, translate, range: scale.range(), ticks }
    }

    fn domain_path(&self) -> String {
        let (r0, r1) = (self.range.0 + OFFSET, self.range.1 + OFFSET);
        match self.orient {
            Orient::Bottom => format!("M{r0},{TICK_SIZE}V{OFFSET}H{r1}V{TICK_SIZE}"),
            Orient::Left => format!("M{},{r0}H{OFFSET}V{r1}H{}", -TICK_SIZE, -TICK_SIZE),
        }
    }

    pub fn to_element(&self) -> Element {
        let anchor = match self.orient {
            Orient::Bottom => "middle",
            Orient::Left => "end",
        };
        let mut g = Element::new("g")
            .attr(
                "transform",
                format!("translate({},{})", format_attr_number(self.translate.0), format_attr_number(self.translate.1)),
            )
            .attr("id", &self.id)
            .attr("fill", "none")
            .attr("font-size", 10)
            .attr("font-family", "sans-serif")
            .attr("text-anchor", anchor)
            .child(
                Element::new("path")
                    .attr("class", "domain")
                    .attr("stroke", "currentColor")
                    .attr("d", self.domain_path()),
            );

        let spacing = TICK_SIZE + TICK_PADDING;
        for t in &self.ticks {
            let p = format_attr_number(t.pos + OFFSET);
            let tick = match self.orient {
                Orient::Bottom => Element::new("g")
                    .attr("class", "tick")
                    .attr("opacity", 1)
                    .attr("transform", format!("translate({p},0)"))
                    .child(Element::new("line").attr("stroke", "currentColor").attr("y2", TICK_SIZE))
                    .child(
                        Element::new("text")
                            .attr("fill", "currentColor")
                            .attr("y", spacing)
                            .attr("dy", "0.71em")
                            .text(t.label.clone()),
                    ),
                Orient::Left => Element::new("g")
                    .attr("class", "tick")
                    .attr("opacity", 1)
                    .attr("transform", format!("translate(0,{p})"))
                    .child(Element::new("line").attr("stroke", "currentColor").attr("x2", -TICK_SIZE))
                    .child(
                        Element::new("text")
                            .attr("fill", "currentColor")
                            .attr("x", -spacing)
                            .attr("dy", "0.32em")
                            .text(t.label.clone()),
                    ),
            };
            g.append(tick);
        }
        g
    }
}
