// File: crates/dashboard-core/src/types.rs
// Summary: Shared layout types and constants (viewport size, chart margins).

use serde::Deserialize;

/// Default chart width in pixels, used when the host cannot measure its container.
pub const WIDTH: u32 = 800;
/// Default chart height in pixels.
pub const HEIGHT: u32 = 400;

/// Drawing surface size, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    /// Create new margins (non-negative by type).
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(20, 30, 50, 80)
    }
}
