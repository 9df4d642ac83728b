// File: crates/dashboard-core/src/axis.rs
// Summary: Bottom time-axis ticks with upper-cased month labels.

use chrono::NaiveDate;

use crate::scale::TimeScale;

/// A labelled tick on the time axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: NaiveDate,
    /// Horizontal pixel position.
    pub x: f64,
    pub label: String,
}

/// Three-letter English month abbreviation in upper case, e.g. `"JUL"`.
pub fn format_tick(date: NaiveDate) -> String {
    date.format("%b").to_string().to_uppercase()
}

/// Ticks the x-scale selects for roughly `count` labels.
pub fn axis_ticks(x: &TimeScale, count: usize) -> Vec<Tick> {
    x.ticks(count)
        .into_iter()
        .map(|value| Tick { value, x: x.to_px(value), label: format_tick(value) })
        .collect()
}
