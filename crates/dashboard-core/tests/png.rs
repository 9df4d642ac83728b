// File: crates/dashboard-core/tests/png.rs
// Purpose: PNG smoke test for the Skia raster renderer (requires `--features png`).
#![cfg(feature = "png")]

use dashboard_core::dataset::bundled_products;
use dashboard_core::raster::{render_chart_png, render_chart_png_bytes};
use dashboard_core::{chart_for_products, ChartStyle, DashboardConfig};

#[test]
fn render_smoke_png() {
    let items = bundled_products().unwrap();
    let config = DashboardConfig::default();
    let chart = chart_for_products(&items, &config).unwrap().unwrap();
    let style = ChartStyle::from_config(&config);

    let bytes = render_chart_png_bytes(&chart, &style).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!((img.width(), img.height()), (800, 400));
    // top-left corner is plain background
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);

    let out = std::path::PathBuf::from("target/test_out/bundled_chart.png");
    render_chart_png(&chart, &style, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}
