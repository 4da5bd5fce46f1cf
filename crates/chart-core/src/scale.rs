// File: crates/chart-core/src/scale.rs
// Summary: Time (X) and value (Y) scales with nice tick generation.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};

use crate::format::group_thousands;

/// Common scale operations used by axes and hit testing.
pub trait ScaleTransform {
    type Domain;
    fn apply(&self, v: &Self::Domain) -> f64;
    fn invert(&self, px: f64) -> Self::Domain;
    fn range(&self) -> (f64, f64);
    fn ticks(&self, count: usize) -> Vec<Self::Domain>;
    fn format_tick(&self, v: &Self::Domain, count: usize) -> String;
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Integer tick bounds `i1..=i2` and the increment (negative means "divide by -inc").
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 { 10.0 } else if error >= E5 { 5.0 } else if error >= E2 { 2.0 } else { 1.0 };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = (start * inv).round();
        i2 = (stop * inv).round();
        if i1 / inv < start { i1 += 1.0; }
        if i2 / inv > stop { i2 -= 1.0; }
        inc = -inv;
    } else {
        let s = 10f64.powf(power) * factor;
        i1 = (start / s).round();
        i2 = (stop / s).round();
        if i1 * s < start { i1 += 1.0; }
        if i2 * s > stop { i2 -= 1.0; }
        inc = s;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Nice tick values covering `[start, stop]`, roughly `count` of them.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if !(i2 >= i1) {
        return Vec::new();
    }
    let n = (i2 - i1 + 1.0) as usize;
    let mut out: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reverse { out.reverse(); }
    out
}

/// Positive distance between adjacent nice ticks.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let (_, _, inc) = tick_spec(lo, hi, count as f64);
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if stop < start { -step } else { step }
}

/// Fixed precision that distinguishes ticks `step` apart.
pub fn precision_fixed(step: f64) -> usize {
    let e = step.abs().log10().floor();
    if e.is_finite() && e < 0.0 { (-e) as usize } else { 0 }
}

/// Continuous value → pixel mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    fn normalize(&self, v: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 { 0.5 } else { (v - self.domain.0) / span }
    }
}

impl ScaleTransform for LinearScale {
    type Domain = f64;

    #[inline]
    fn apply(&self, v: &f64) -> f64 {
        let t = self.normalize(*v);
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    fn invert(&self, px: f64) -> f64 {
        let span = self.range.1 - self.range.0;
        let t = if span == 0.0 { 0.5 } else { (px - self.range.0) / span };
        self.domain.0 + t * (self.domain.1 - self.domain.0)
    }

    fn range(&self) -> (f64, f64) { self.range }

    fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    fn format_tick(&self, v: &f64, count: usize) -> String {
        let step = tick_step(self.domain.0, self.domain.1, count);
        group_thousands(*v, precision_fixed(step))
    }
}

const MS_DAY: i64 = 86_400_000;
const MS_WEEK: i64 = 7 * MS_DAY;
const MS_MONTH: i64 = 30 * MS_DAY;
const MS_YEAR: i64 = 365 * MS_DAY;

/// Calendar interval between adjacent time ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeInterval {
    Day(u32),
    Week,
    Month(u32),
    Year(i32),
}

impl TimeInterval {
    const CANDIDATES: [(TimeInterval, i64); 6] = [
        (TimeInterval::Day(1), MS_DAY),
        (TimeInterval::Day(2), 2 * MS_DAY),
        (TimeInterval::Week, MS_WEEK),
        (TimeInterval::Month(1), MS_MONTH),
        (TimeInterval::Month(3), 3 * MS_MONTH),
        (TimeInterval::Year(1), MS_YEAR),
    ];

    /// Interval whose spacing best matches `count` ticks over `[start_ms, stop_ms]`.
    pub fn choose(start_ms: i64, stop_ms: i64, count: usize) -> Self {
        let target = (stop_ms - start_ms).abs() as f64 / count.max(1) as f64;
        let i = Self::CANDIDATES.iter().take_while(|(_, d)| (*d as f64) <= target).count();
        if i == Self::CANDIDATES.len() {
            let step = tick_step(start_ms as f64 / MS_YEAR as f64, stop_ms as f64 / MS_YEAR as f64, count);
            return TimeInterval::Year((step.abs().round() as i32).max(1));
        }
        if i == 0 {
            return TimeInterval::Day(1);
        }
        let lo = Self::CANDIDATES[i - 1];
        let hi = Self::CANDIDATES[i];
        if target / (lo.1 as f64) < (hi.1 as f64) / target { lo.0 } else { hi.0 }
    }

    fn matches(&self, d: NaiveDate) -> bool {
        match *self {
            TimeInterval::Day(k) => (d.day() - 1) % k == 0,
            TimeInterval::Week => d.weekday() == Weekday::Sun,
            TimeInterval::Month(k) => d.day() == 1 && d.month0() % k == 0,
            TimeInterval::Year(k) => d.ordinal() == 1 && d.year().rem_euclid(k) == 0,
        }
    }

    /// Boundaries that fall inside `[first, last]`.
    pub fn range(&self, first: NaiveDate, last: NaiveDate) -> Vec<NaiveDate> {
        let mut out = Vec::new();
        let mut d = first;
        while d <= last {
            if self.matches(d) {
                out.push(d);
            }
            d = match self.next_candidate(d) {
                Some(n) => n,
                None => break,
            };
        }
        out
    }

    // Jump to the next date that could be a boundary, so long ranges stay cheap.
    fn next_candidate(&self, d: NaiveDate) -> Option<NaiveDate> {
        match *self {
            TimeInterval::Day(_) | TimeInterval::Week => d.succ_opt(),
            TimeInterval::Month(_) => {
                let (y, m) = if d.month() == 12 { (d.year() + 1, 1) } else { (d.year(), d.month() + 1) };
                NaiveDate::from_ymd_opt(y, m, 1)
            }
            TimeInterval::Year(_) => NaiveDate::from_ymd_opt(d.year() + 1, 1, 1),
        }
    }
}

/// Multi-scale label: `%Y` on Jan 1, `%B` on the 1st, `%b %d` on Sundays, else `%a %d`.
pub fn format_time_tick(d: NaiveDate) -> String {
    if d.ordinal() == 1 {
        d.format("%Y").to_string()
    } else if d.day() == 1 {
        d.format("%B").to_string()
    } else if d.weekday() == Weekday::Sun {
        d.format("%b %d").to_string()
    } else {
        d.format("%a %d").to_string()
    }
}

pub fn to_utc_ms(d: NaiveDate) -> i64 {
    d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().timestamp_millis()).unwrap_or_default()
}

/// UTC calendar time → horizontal pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub domain: (NaiveDate, NaiveDate),
    pub range: (f64, f64),
    start_ms: i64,
    stop_ms: i64,
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        Self { domain, range, start_ms: to_utc_ms(domain.0), stop_ms: to_utc_ms(domain.1) }
    }

    pub fn interval(&self, count: usize) -> TimeInterval {
        TimeInterval::choose(self.start_ms, self.stop_ms, count)
    }
}

impl ScaleTransform for TimeScale {
    type Domain = NaiveDate;

    #[inline]
    fn apply(&self, v: &NaiveDate) -> f64 {
        let span = (self.stop_ms - self.start_ms) as f64;
        let t = if span == 0.0 { 0.5 } else { (to_utc_ms(*v) - self.start_ms) as f64 / span };
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// Date containing the instant under `px`.
    fn invert(&self, px: f64) -> NaiveDate {
        let span = self.range.1 - self.range.0;
        let t = if span == 0.0 { 0.5 } else { (px - self.range.0) / span };
        let ms = self.start_ms as f64 + t * (self.stop_ms - self.start_ms) as f64;
        let base = self.domain.0.and_hms_opt(0, 0, 0).unwrap_or(NaiveDateTime::MIN);
        let offset = Duration::milliseconds((ms - self.start_ms as f64).floor() as i64);
        base.checked_add_signed(offset).map(|dt| dt.date()).unwrap_or(self.domain.0)
    }

    fn range(&self) -> (f64, f64) { self.range }

    fn ticks(&self, count: usize) -> Vec<NaiveDate> {
        let (first, last) = if self.domain.0 <= self.domain.1 {
            (self.domain.0, self.domain.1)
        } else {
            (self.domain.1, self.domain.0)
        };
        self.interval(count).range(first, last)
    }

    fn format_tick(&self, v: &NaiveDate, _count: usize) -> String {
        format_time_tick(*v)
    }
}
