// File: crates/dashboard-core/src/raster.rs
// Summary: Headless PNG rendering of chart artifacts using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::path::{LinePath, PathCommand};
use crate::pipeline::ChartArtifacts;
use crate::theme::{ChartStyle, Rgba};

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Render the chart to PNG bytes.
pub fn render_chart_png_bytes(chart: &ChartArtifacts, style: &ChartStyle) -> Result<Vec<u8>> {
    let w = chart.viewport.width as i32;
    let h = chart.viewport.height as i32;
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
    let canvas = surface.canvas();

    canvas.clear(color(style.theme.background));

    draw_line(canvas, &chart.retail_path, style.theme.retail_stroke, style.line_width);
    draw_line(canvas, &chart.wholesale_path, style.theme.wholesale_stroke, style.line_width);
    draw_tick_labels(canvas, chart, style);

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the chart to a PNG at `output_png_path`.
pub fn render_chart_png(
    chart: &ChartArtifacts,
    style: &ChartStyle,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_chart_png_bytes(chart, style)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn to_skia_path(line: &LinePath) -> skia::Path {
    let mut path = skia::Path::new();
    for cmd in &line.commands {
        match *cmd {
            PathCommand::MoveTo { x, y } => { path.move_to((x as f32, y as f32)); }
            PathCommand::LineTo { x, y } => { path.line_to((x as f32, y as f32)); }
            PathCommand::CubicTo { c1, c2, to } => {
                path.cubic_to(
                    (c1.0 as f32, c1.1 as f32),
                    (c2.0 as f32, c2.1 as f32),
                    (to.0 as f32, to.1 as f32),
                );
            }
            PathCommand::Close => { path.close(); }
        }
    }
    path
}

fn draw_line(canvas: &skia::Canvas, line: &LinePath, stroke_color: Rgba, width: f32) {
    if line.is_empty() {
        return;
    }
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(width);
    stroke.set_color(color(stroke_color));
    canvas.draw_path(&to_skia_path(line), &stroke);
}

fn draw_tick_labels(canvas: &skia::Canvas, chart: &ChartArtifacts, style: &ChartStyle) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(color(style.theme.tick_label));
    let mut font = skia::Font::default();
    font.set_size(style.label_size);

    // same placement as the SVG axis: 3px below the axis line, cap height under it
    let baseline = chart.viewport.height as f32 - chart.margins.bottom as f32 + 3.0 + style.label_size * 0.71;
    for tick in &chart.ticks {
        let (width, _) = font.measure_str(&tick.label, Some(&paint));
        canvas.draw_str(&tick.label, (tick.x as f32 - width * 0.5, baseline), &font, &paint);
    }
}
