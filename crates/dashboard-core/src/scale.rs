// File: crates/dashboard-core/src/scale.rs
// Summary: Time (X) and linear value (Y) scales, nice domains, and tick selection.

use chrono::{Datelike, Months, NaiveDate, TimeDelta};
use tracing::debug;

use crate::model::MonthlyAggregate;
use crate::types::{Margins, Viewport};

/// Tick count used for niceness and tick selection when none is configured.
pub const DEFAULT_TICKS: usize = 10;

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

const MONTH_DAYS: f64 = 30.0;
const YEAR_DAYS: f64 = 365.0;

/// Mapping between a data domain and screen pixels.
pub trait ScaleTransform {
    type Domain;
    fn to_px(&self, v: Self::Domain) -> f64;
    fn from_px(&self, px: f64) -> Self::Domain;
}

/// Horizontal scale, linear in calendar days.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    start: NaiveDate,
    end: NaiveDate,
    range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        Self { start: domain.0, end: domain.1, range }
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) { (self.start, self.end) }
    pub fn range(&self) -> (f64, f64) { self.range }

    fn span_days(&self) -> f64 {
        (self.end - self.start).num_days() as f64
    }

    #[inline]
    pub fn to_px(&self, d: NaiveDate) -> f64 {
        let (r0, r1) = self.range;
        let span = self.span_days();
        if span == 0.0 {
            return r0 + 0.5 * (r1 - r0);
        }
        let t = (d - self.start).num_days() as f64 / span;
        r0 + t * (r1 - r0)
    }

    /// Nearest calendar day for a pixel position.
    pub fn from_px(&self, px: f64) -> NaiveDate {
        let (r0, r1) = self.range;
        if r1 == r0 {
            return self.start;
        }
        let days = ((px - r0) / (r1 - r0) * self.span_days()).round() as i64;
        let fallback = if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX };
        TimeDelta::try_days(days)
            .and_then(|delta| self.start.checked_add_signed(delta))
            .unwrap_or(fallback)
    }

    /// Month-level tick values: first-of-month dates inside the domain, both ends inclusive.
    pub fn ticks(&self, count: usize) -> Vec<NaiveDate> {
        let (lo, hi) = if self.end < self.start { (self.end, self.start) } else { (self.start, self.end) };
        let span = (hi - lo).num_days() as f64;
        let mut out = Vec::new();
        let mut cursor = match first_month_on_or_after(lo) {
            Some(d) => d,
            None => return out,
        };
        match tick_interval(span, count) {
            TickInterval::Months(step) => {
                while cursor <= hi {
                    if cursor.month0() % step == 0 {
                        out.push(cursor);
                    }
                    cursor = match cursor.checked_add_months(Months::new(1)) {
                        Some(next) => next,
                        None => break,
                    };
                }
            }
            TickInterval::Years(step) => {
                if cursor.month() != 1 {
                    cursor = match NaiveDate::from_ymd_opt(cursor.year() + 1, 1, 1) {
                        Some(d) => d,
                        None => return out,
                    };
                }
                while cursor <= hi {
                    if cursor.year().rem_euclid(step) == 0 {
                        out.push(cursor);
                    }
                    cursor = match cursor.checked_add_months(Months::new(12)) {
                        Some(next) => next,
                        None => break,
                    };
                }
            }
        }
        out
    }
}

impl ScaleTransform for TimeScale {
    type Domain = NaiveDate;
    fn to_px(&self, v: NaiveDate) -> f64 { TimeScale::to_px(self, v) }
    fn from_px(&self, px: f64) -> NaiveDate { TimeScale::from_px(self, px) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TickInterval {
    Months(u32),
    Years(i32),
}

/// Pick the interval whose length is closest to `span / count`, never finer than one month.
fn tick_interval(span_days: f64, count: usize) -> TickInterval {
    let target = span_days / count.max(1) as f64;
    if target >= YEAR_DAYS {
        let step = tick_step(0.0, span_days / YEAR_DAYS, count).round().max(1.0);
        return TickInterval::Years(step as i32);
    }
    let candidates = [
        (TickInterval::Months(1), MONTH_DAYS),
        (TickInterval::Months(3), 3.0 * MONTH_DAYS),
        (TickInterval::Years(1), YEAR_DAYS),
    ];
    let i = candidates.iter().position(|&(_, d)| d > target).unwrap_or(candidates.len() - 1);
    if i == 0 {
        return candidates[0].0;
    }
    let (below, below_days) = candidates[i - 1];
    let (above, above_days) = candidates[i];
    if target / below_days < above_days / target { below } else { above }
}

fn first_month_on_or_after(d: NaiveDate) -> Option<NaiveDate> {
    let first = d.with_day(1)?;
    if first == d { Some(first) } else { first.checked_add_months(Months::new(1)) }
}

/// Vertical value scale. Range is usually inverted: `(bottom_px, top_px)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) { self.domain }
    pub fn range(&self) -> (f64, f64) { self.range }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        // a zero-width domain maps everything to the middle of the range
        let t = if span == 0.0 { 0.5 } else { (v - d0) / span };
        r0 + t * (r1 - r0)
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return d0;
        }
        d0 + (px - r0) / (r1 - r0) * (d1 - d0)
    }

    /// Extend the domain outward to round numbers for roughly `count` ticks.
    /// The domain only changes once the tick step settles.
    pub fn nice(mut self, count: usize) -> Self {
        let (d0, d1) = self.domain;
        let reversed = d1 < d0;
        let (mut start, mut stop) = if reversed { (d1, d0) } else { (d0, d1) };
        if start == stop || !start.is_finite() || !stop.is_finite() {
            return self;
        }
        let mut prestep = f64::NAN;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if step == prestep {
                self.domain = if reversed { (stop, start) } else { (start, stop) };
                return self;
            } else if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = step;
        }
        // no stable step: keep the domain as given
        self
    }

    /// Round-number tick values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if count == 0 || !d0.is_finite() || !d1.is_finite() {
            return Vec::new();
        }
        if d0 == d1 {
            return vec![d0];
        }
        let (start, stop) = if d1 < d0 { (d1, d0) } else { (d0, d1) };
        let inc = tick_increment(start, stop, count);
        if inc == 0.0 || !inc.is_finite() {
            return Vec::new();
        }
        let mut out: Vec<f64> = if inc > 0.0 {
            let (i0, i1) = ((start / inc).ceil() as i64, (stop / inc).floor() as i64);
            (i0..=i1).map(|i| i as f64 * inc).collect()
        } else {
            let inv = -inc;
            let (i0, i1) = ((start * inv).ceil() as i64, (stop * inv).floor() as i64);
            (i0..=i1).map(|i| i as f64 / inv).collect()
        };
        if d1 < d0 {
            out.reverse();
        }
        out
    }
}

impl ScaleTransform for LinearScale {
    type Domain = f64;
    fn to_px(&self, v: f64) -> f64 { LinearScale::to_px(self, v) }
    fn from_px(&self, px: f64) -> f64 { LinearScale::from_px(self, px) }
}

/// Tick spacing as a power of ten times 1, 2 or 5.
/// Negative results encode the reciprocal of the step, keeping small steps exact.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Positive tick spacing between `start` and `stop`.
fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let inc = tick_increment(start, stop, count);
    if inc < 0.0 { 1.0 / -inc } else { inc }
}

/// The pair of scales shared by both sales curves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
    pub x: TimeScale,
    pub y: LinearScale,
}

/// Build chart scales with the default tick count for the y-domain.
pub fn build_scales(series: &[MonthlyAggregate], viewport: Viewport, margins: Margins) -> Scales {
    build_scales_with(series, viewport, margins, DEFAULT_TICKS)
}

/// Build chart scales.
///
/// The x-domain runs from the first month to one month past the last, so the
/// final point sits inside the plot. The y-domain is `[0, max]` over both
/// measures, niced for `y_ticks` ticks. An empty series yields a y-domain of
/// `[0, 0]` and an x-domain of January 1970.
pub fn build_scales_with(series: &[MonthlyAggregate], viewport: Viewport, margins: Margins, y_ticks: usize) -> Scales {
    let first = series.iter().map(|m| m.month).min();
    let last = series.iter().map(|m| m.month).max();
    let (x0, x_last) = match (first, last) {
        (Some(a), Some(b)) => (a, b),
        _ => (NaiveDate::default(), NaiveDate::default()),
    };
    let x1 = x_last.checked_add_months(Months::new(1)).unwrap_or(x_last);

    let y_max = series
        .iter()
        .map(|m| m.retail_sales.max(m.wholesale_sales))
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
        .unwrap_or(0.0);

    let width = viewport.width as f64;
    let height = viewport.height as f64;
    let x = TimeScale::new((x0, x1), (margins.left as f64, width - margins.right as f64));
    let y = LinearScale::new((0.0, y_max), (height - margins.bottom as f64, margins.top as f64)).nice(y_ticks);

    debug!(x_start = %x0, x_end = %x1, y_max = y.domain().1, "built chart scales");
    Scales { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_increment_picks_one_two_five() {
        assert_eq!(tick_increment(0.0, 10.0, 10), 1.0);
        assert_eq!(tick_increment(0.0, 17.0, 10), 2.0);
        assert_eq!(tick_increment(0.0, 45.0, 10), 5.0);
        assert_eq!(tick_increment(0.0, 0.5, 10), -20.0);
    }

    #[test]
    fn one_year_span_uses_monthly_ticks() {
        assert_eq!(tick_interval(365.0, 10), TickInterval::Months(1));
    }

    #[test]
    fn multi_year_spans_coarsen() {
        assert_eq!(tick_interval(3.0 * 365.0, 10), TickInterval::Months(3));
        assert_eq!(tick_interval(10.0 * 365.0, 10), TickInterval::Years(1));
        assert_eq!(tick_interval(40.0 * 365.0, 10), TickInterval::Years(5));
    }

    #[test]
    fn short_spans_stay_monthly() {
        assert_eq!(tick_interval(31.0, 10), TickInterval::Months(1));
    }
}
