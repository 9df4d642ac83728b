// File: crates/dashboard-core/src/config.rs
// Summary: Dashboard configuration loaded from TOML, with an embedded default.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::aggregate::MIN_YEAR;
use crate::error::Result;
use crate::scale::DEFAULT_TICKS;
use crate::types::{Margins, Viewport};

/// Default configuration embedded in the library.
pub const DEFAULT_CONFIG: &str = r#"
[viewport]
width = 800
height = 400

[margins]
top = 20
right = 30
bottom = 50
left = 80

[aggregation]
min_year = 2017

[axis]
x_ticks = 10
y_ticks = 10

[style]
theme = "light"
line_width = 4.0
label_size = 16.0
"#;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub viewport: Viewport,
    pub margins: Margins,
    pub aggregation: AggregationConfig,
    pub axis: AxisConfig,
    pub style: StyleConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Records dated before this year are dropped.
    pub min_year: i32,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self { min_year: MIN_YEAR }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub x_ticks: usize,
    pub y_ticks: usize,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self { x_ticks: DEFAULT_TICKS, y_ticks: DEFAULT_TICKS }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Theme preset name, see [`crate::theme::find`].
    pub theme: String,
    pub line_width: f32,
    pub label_size: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self { theme: "light".to_string(), line_width: 4.0, label_size: 16.0 }
    }
}

/// Parse a TOML document; keys it leaves out keep their defaults.
pub fn parse_config(contents: &str) -> Result<DashboardConfig> {
    Ok(toml::from_str(contents)?)
}

/// Load configuration from `path`, or the embedded default when `path` is `None`.
pub fn load_config(path: Option<&Path>) -> Result<DashboardConfig> {
    match path {
        Some(p) => {
            info!("Loading config from: {}", p.display());
            let contents = std::fs::read_to_string(p)?;
            parse_config(&contents)
        }
        None => {
            info!("Using default embedded configuration");
            parse_config(DEFAULT_CONFIG)
        }
    }
}
