// File: crates/dashboard-core/src/svg.rs
// Summary: SVG rendering of chart artifacts (two sales curves and a bottom month axis).

use std::fmt::Write;
use std::path::Path;

use crate::error::{DashboardError, Result};
use crate::path::{num, LinePath};
use crate::pipeline::ChartArtifacts;
use crate::theme::{ChartStyle, Rgba};

/// Render the chart as a standalone SVG document.
pub fn render_chart(chart: &ChartArtifacts, style: &ChartStyle) -> Result<String> {
    let mut out = String::with_capacity(4096);
    write_chart(&mut out, chart, style).map_err(|e| DashboardError::Render(e.to_string()))?;
    Ok(out)
}

/// Render and write the SVG to `path`, creating parent directories.
pub fn write_chart_svg(chart: &ChartArtifacts, style: &ChartStyle, path: impl AsRef<Path>) -> Result<()> {
    let svg = render_chart(chart, style)?;
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, svg)?;
    Ok(())
}

fn write_chart(out: &mut String, chart: &ChartArtifacts, style: &ChartStyle) -> std::fmt::Result {
    let w = chart.viewport.width;
    let h = chart.viewport.height;
    let theme = &style.theme;

    writeln!(out, r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}">"#)?;
    writeln!(out, r#"<rect width="{w}" height="{h}" fill="{}"/>"#, theme.background.hex())?;

    write_line(out, &chart.retail_path, theme.retail_stroke, style.line_width)?;
    write_line(out, &chart.wholesale_path, theme.wholesale_stroke, style.line_width)?;

    // bottom axis: no domain line, zero-length ticks, labels only
    let axis_y = h as f64 - chart.margins.bottom as f64;
    writeln!(out, r#"<g transform="translate(0,{})" text-anchor="middle" font-family="sans-serif">"#, num(axis_y))?;
    for tick in &chart.ticks {
        writeln!(
            out,
            r#"<text x="{}" y="3" dy="0.71em" font-size="{}" fill="{}">{}</text>"#,
            num(tick.x),
            style.label_size,
            theme.tick_label.hex(),
            tick.label
        )?;
    }
    writeln!(out, "</g>")?;
    writeln!(out, "</svg>")
}

fn write_line(out: &mut String, path: &LinePath, stroke: Rgba, width: f32) -> std::fmt::Result {
    if path.is_empty() {
        return Ok(());
    }
    writeln!(
        out,
        r#"<path fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}" d="{}"/>"#,
        stroke.hex(),
        stroke.opacity(),
        width,
        path.to_svg_d()
    )
}
