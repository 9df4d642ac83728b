// File: crates/dashboard-core/src/path.rs
// Summary: Monotone-X cubic line paths for sales curves, with SVG `d` serialization.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::model::MonthlyAggregate;
use crate::scale::ScaleTransform;

/// One drawing instruction, in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    CubicTo { c1: (f64, f64), c2: (f64, f64), to: (f64, f64) },
    Close,
}

/// Renderer-agnostic curve geometry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinePath {
    pub commands: Vec<PathCommand>,
}

impl LinePath {
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    /// SVG path data, coordinates rounded to three decimals.
    pub fn to_svg_d(&self) -> String {
        let mut d = String::with_capacity(self.commands.len() * 48);
        for cmd in &self.commands {
            // Writing into a String cannot fail.
            let _ = match *cmd {
                PathCommand::MoveTo { x, y } => write!(d, "M{},{}", num(x), num(y)),
                PathCommand::LineTo { x, y } => write!(d, "L{},{}", num(x), num(y)),
                PathCommand::CubicTo { c1, c2, to } => write!(
                    d,
                    "C{},{},{},{},{},{}",
                    num(c1.0), num(c1.1), num(c2.0), num(c2.1), num(to.0), num(to.1)
                ),
                PathCommand::Close => write!(d, "Z"),
            };
        }
        d
    }
}

pub(crate) fn num(v: f64) -> f64 {
    let r = (v * 1000.0).round() / 1000.0;
    // avoid printing "-0"
    if r == 0.0 { 0.0 } else { r }
}

/// Build the curve for one measure of `series` through the shared scales.
///
/// Points are taken in input order, which must already be ascending by month.
pub fn build_path<X, Y, F>(series: &[MonthlyAggregate], x: &X, y: &Y, accessor: F) -> LinePath
where
    X: ScaleTransform<Domain = NaiveDate>,
    Y: ScaleTransform<Domain = f64>,
    F: Fn(&MonthlyAggregate) -> f64,
{
    let points: Vec<(f64, f64)> = series.iter().map(|m| (x.to_px(m.month), y.to_px(accessor(m)))).collect();
    monotone_x(&points)
}

/// Monotone cubic interpolation in x (Fritsch–Carlson style tangents), never
/// overshooting between two consecutive points.
pub fn monotone_x(points: &[(f64, f64)]) -> LinePath {
    let mut curve = MonotoneX::new();
    for &(x, y) in points {
        curve.point(x, y);
    }
    curve.finish()
}

struct MonotoneX {
    commands: Vec<PathCommand>,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    t0: f64,
    seen: u8,
}

impl MonotoneX {
    fn new() -> Self {
        Self { commands: Vec::new(), x0: f64::NAN, y0: f64::NAN, x1: f64::NAN, y1: f64::NAN, t0: f64::NAN, seen: 0 }
    }

    fn point(&mut self, x: f64, y: f64) {
        let mut t1 = f64::NAN;
        // coincident points add nothing
        if x == self.x1 && y == self.y1 {
            return;
        }
        match self.seen {
            0 => {
                self.seen = 1;
                self.commands.push(PathCommand::MoveTo { x, y });
            }
            1 => self.seen = 2,
            2 => {
                self.seen = 3;
                t1 = self.slope3(x, y);
                let t0 = self.slope2(t1);
                self.segment(t0, t1);
            }
            _ => {
                t1 = self.slope3(x, y);
                self.segment(self.t0, t1);
            }
        }
        self.x0 = self.x1;
        self.x1 = x;
        self.y0 = self.y1;
        self.y1 = y;
        self.t0 = t1;
    }

    fn finish(mut self) -> LinePath {
        match self.seen {
            1 => self.commands.push(PathCommand::Close),
            2 => self.commands.push(PathCommand::LineTo { x: self.x1, y: self.y1 }),
            3 => {
                let t1 = self.slope2(self.t0);
                self.segment(self.t0, t1);
            }
            _ => {}
        }
        LinePath { commands: self.commands }
    }

    /// Tangent at the current point from its two neighbours.
    fn slope3(&self, x2: f64, y2: f64) -> f64 {
        let h0 = self.x1 - self.x0;
        let h1 = x2 - self.x1;
        let d0 = if h0 != 0.0 { h0 } else if h1 < 0.0 { -0.0 } else { 0.0 };
        let d1 = if h1 != 0.0 { h1 } else if h0 < 0.0 { -0.0 } else { 0.0 };
        let s0 = (self.y1 - self.y0) / d0;
        let s1 = (y2 - self.y1) / d1;
        let p = (s0 * h1 + s1 * h0) / (h0 + h1);
        if s0.is_nan() || s1.is_nan() || p.is_nan() {
            return 0.0;
        }
        let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        if t.is_nan() { 0.0 } else { t }
    }

    /// One-sided tangent for an end point.
    fn slope2(&self, t: f64) -> f64 {
        let h = self.x1 - self.x0;
        if h != 0.0 { (3.0 * (self.y1 - self.y0) / h - t) / 2.0 } else { t }
    }

    fn segment(&mut self, t0: f64, t1: f64) {
        let dx = (self.x1 - self.x0) / 3.0;
        self.commands.push(PathCommand::CubicTo {
            c1: (self.x0 + dx, self.y0 + dx * t0),
            c2: (self.x1 - dx, self.y1 - dx * t1),
            to: (self.x1, self.y1),
        });
    }
}

fn sign(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}
