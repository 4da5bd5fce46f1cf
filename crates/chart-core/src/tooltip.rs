// File: crates/chart-core/src/tooltip.rs
// Summary: Tooltip visibility state machine reconciling pointer hover and keyboard focus.
// Notes:
// - States are HIDDEN and VISIBLE; the guard is "some bar holds keyboard focus".
//   Focus always wins over hover.
// - Time is a virtual millisecond clock advanced by the owner, so delayed
//   hides/defocus are deterministic. Timers are fire-and-forget: once
//   scheduled they always run.

use tracing::trace;

use crate::dataset::DataPoint;
use crate::format::{gdp_label, period_label};
use crate::types::{FADE_MS, LEAVE_DEFOCUS_DELAY_MS, LEAVE_HIDE_DELAY_MS, TOOLTIP_OPACITY};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

/// Where the pointer went when it left something.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Bar(usize),
    Outside,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipEvent {
    PointerEnter(usize),
    PointerLeave { bar: usize, to: Target },
    Focus(usize),
    Blur(usize),
    /// Pointer left the whole chart.
    ChartPointerLeave { to: Target },
}

/// Text shown for one bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipContent {
    pub date: String,
    pub period: String,
    pub value: String,
}

impl TooltipContent {
    pub fn for_point(p: &DataPoint) -> Self {
        Self { date: p.date_str.clone(), period: period_label(p), value: gdp_label(p.value) }
    }

    pub fn text(&self) -> String {
        format!("{} {}", self.period, self.value)
    }
}

/// Opacity transition; eased with cubic in-out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fade {
    pub from: f64,
    pub to: f64,
    pub start_ms: u64,
    pub duration_ms: u64,
}

impl Fade {
    fn settled(opacity: f64) -> Self {
        Self { from: opacity, to: opacity, start_ms: 0, duration_ms: 0 }
    }

    pub fn value_at(&self, now_ms: u64) -> f64 {
        if self.duration_ms == 0 || now_ms >= self.start_ms.saturating_add(self.duration_ms) {
            return self.to;
        }
        if now_ms <= self.start_ms {
            return self.from;
        }
        let t = (now_ms - self.start_ms) as f64 / self.duration_ms as f64;
        self.from + (self.to - self.from) * ease_cubic_in_out(t)
    }
}

fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerAction {
    Hide,
    Defocus(usize),
}

#[derive(Clone, Copy, Debug)]
struct Pending {
    due_ms: u64,
    seq: u64,
    action: TimerAction,
}

#[derive(Clone, Debug)]
pub struct Tooltip {
    visibility: Visibility,
    fade: Fade,
    content: Option<TooltipContent>,
    focused: Option<usize>,
    hovered: Option<usize>,
    contents: Vec<TooltipContent>,
    pending: Vec<Pending>,
    next_seq: u64,
    now_ms: u64,
}

impl Tooltip {
    pub fn new(points: &[DataPoint]) -> Self {
        Self {
            visibility: Visibility::Hidden,
            fade: Fade::settled(0.0),
            content: None,
            focused: None,
            hovered: None,
            contents: points.iter().map(TooltipContent::for_point).collect(),
            pending: Vec::new(),
            next_seq: 0,
            now_ms: 0,
        }
    }

    pub fn visibility(&self) -> Visibility { self.visibility }
    pub fn is_visible(&self) -> bool { self.visibility == Visibility::Visible }
    pub fn opacity(&self) -> f64 { self.fade.value_at(self.now_ms) }
    /// Opacity the running transition ends at.
    pub fn target_opacity(&self) -> f64 { self.fade.to }
    pub fn fade(&self) -> Fade { self.fade }
    pub fn content(&self) -> Option<&TooltipContent> { self.content.as_ref() }
    pub fn focused(&self) -> Option<usize> { self.focused }
    pub fn hovered(&self) -> Option<usize> { self.hovered }
    pub fn now_ms(&self) -> u64 { self.now_ms }
    pub fn pending_timers(&self) -> usize { self.pending.len() }

    pub fn handle(&mut self, event: TooltipEvent) {
        trace!(?event, now_ms = self.now_ms, focused = ?self.focused, "tooltip event");
        match event {
            TooltipEvent::PointerEnter(bar) => {
                self.hovered = Some(bar);
                if self.focused.is_none() {
                    self.show(bar);
                }
            }
            TooltipEvent::PointerLeave { bar, to } => {
                if self.hovered == Some(bar) {
                    self.hovered = None;
                }
                if self.focused.is_none() && to == Target::Outside {
                    self.hide();
                }
            }
            TooltipEvent::Focus(bar) => {
                self.focused = Some(bar);
                self.show(bar);
            }
            TooltipEvent::Blur(bar) => {
                if self.focused == Some(bar) {
                    self.focused = None;
                }
                self.hide();
            }
            TooltipEvent::ChartPointerLeave { to } => {
                self.hovered = None;
                if let (Some(bar), Target::Outside) = (self.focused, to) {
                    self.schedule(LEAVE_HIDE_DELAY_MS, TimerAction::Hide);
                    self.schedule(LEAVE_DEFOCUS_DELAY_MS, TimerAction::Defocus(bar));
                }
            }
        }
    }

    /// Move the clock forward, firing due timers in order.
    pub fn advance(&mut self, ms: u64) {
        let target = self.now_ms.saturating_add(ms);
        while let Some(i) = self.next_due(target) {
            let p = self.pending.swap_remove(i);
            self.now_ms = p.due_ms;
            trace!(action = ?p.action, now_ms = self.now_ms, "tooltip timer");
            match p.action {
                TimerAction::Hide => self.hide(),
                TimerAction::Defocus(bar) => {
                    // Blurring an element that no longer has focus is a no-op.
                    if self.focused == Some(bar) {
                        self.handle(TooltipEvent::Blur(bar));
                    }
                }
            }
        }
        self.now_ms = target;
    }

    fn next_due(&self, limit: u64) -> Option<usize> {
        self.pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= limit)
            .min_by_key(|(_, p)| (p.due_ms, p.seq))
            .map(|(i, _)| i)
    }

    fn schedule(&mut self, delay_ms: u64, action: TimerAction) {
        self.pending.push(Pending { due_ms: self.now_ms.saturating_add(delay_ms), seq: self.next_seq, action });
        self.next_seq += 1;
    }

    fn show(&mut self, bar: usize) {
        let Some(content) = self.contents.get(bar) else { return };
        self.content = Some(content.clone());
        self.visibility = Visibility::Visible;
        self.fade_to(TOOLTIP_OPACITY);
    }

    fn hide(&mut self) {
        self.visibility = Visibility::Hidden;
        self.fade_to(0.0);
    }

    // A new transition interrupts the running one and starts from the current opacity.
    fn fade_to(&mut self, to: f64) {
        self.fade = Fade { from: self.opacity(), to, start_ms: self.now_ms, duration_ms: FADE_MS };
    }
}
