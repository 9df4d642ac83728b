// File: crates/dashboard-core/src/theme.rs
// Summary: Light/Dark theming for the sales chart colors.

/// 8-bit RGBA color, independent of any rendering backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// CSS hex notation, `#rrggbb` (alpha is emitted separately as opacity).
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(&self) -> f32 {
        self.a as f32 / 255.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub retail_stroke: Rgba,
    pub wholesale_stroke: Rgba,
    pub tick_label: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(0xff, 0xff, 0xff),
            retail_stroke: Rgba::rgb(0x5d, 0xae, 0xff),
            wholesale_stroke: Rgba::rgb(0xb0, 0xb0, 0xb0),
            tick_label: Rgba::rgb(0x80, 0x80, 0x80), // css "gray"
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            retail_stroke: Rgba::rgb(64, 160, 255),
            wholesale_stroke: Rgba::rgb(150, 150, 160),
            tick_label: Rgba::rgb(180, 180, 190),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Rgba::rgb(0x00, 0x00, 0x00),
            retail_stroke: Rgba::rgb(0x00, 0xff, 0xff),
            wholesale_stroke: Rgba::rgb(0xff, 0xff, 0xff),
            tick_label: Rgba::rgb(0xcc, 0xcc, 0xcc),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}

/// Stroke and label styling shared by the SVG and PNG renderers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartStyle {
    pub theme: Theme,
    pub line_width: f32,
    pub label_size: f32,
}

impl ChartStyle {
    pub fn from_config(config: &crate::config::DashboardConfig) -> Self {
        Self {
            theme: find(&config.style.theme),
            line_width: config.style.line_width,
            label_size: config.style.label_size,
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self { theme: Theme::light(), line_width: 4.0, label_size: 16.0 }
    }
}
