// File: crates/dashboard-core/tests/snapshot.rs
// Purpose: Golden SVG snapshot harness with bless flow, plus structural checks.
// Behavior:
// - Renders the bundled dataset chart to an SVG string.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares text for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use dashboard_core::config::parse_config;
use dashboard_core::dataset::bundled_products;
use dashboard_core::{chart_for_products, svg, ChartStyle, DashboardConfig, Theme};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn render_svg() -> String {
    let items = bundled_products().expect("bundled dataset");
    let config = DashboardConfig::default();
    let chart = chart_for_products(&items, &config).expect("pipeline").expect("chart");
    svg::render_chart(&chart, &ChartStyle::from_config(&config)).expect("render svg")
}

#[test]
fn svg_structure() {
    let svg = render_svg();
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 800 400">"#));
    assert!(svg.trim_end().ends_with("</svg>"));

    let retail = svg.find(r##"stroke="#5daeff""##).expect("retail path");
    let wholesale = svg.find(r##"stroke="#b0b0b0""##).expect("wholesale path");
    assert!(retail < wholesale, "retail is drawn first");
    assert_eq!(svg.matches(r#"fill="none""#).count(), 2);
    assert_eq!(svg.matches(r#"stroke-width="4""#).count(), 2);

    assert!(svg.contains(r#"<g transform="translate(0,350)""#));
    assert_eq!(svg.matches("<text ").count(), 13);
    assert!(svg.contains(r##"font-size="16" fill="#808080">JUL</text>"##));
}

#[test]
fn empty_chart_has_no_paths() {
    let config = DashboardConfig::default();
    let chart = dashboard_core::build_chart(&[], &config).unwrap();
    let svg = svg::render_chart(&chart, &ChartStyle::default()).unwrap();
    assert!(!svg.contains("<path"));
    assert!(!svg.contains("<text"));
}

#[test]
fn theme_changes_colors() {
    let items = bundled_products().unwrap();
    let config = DashboardConfig::default();
    let chart = chart_for_products(&items, &config).unwrap().unwrap();
    let style = ChartStyle { theme: Theme::dark(), ..ChartStyle::default() };
    let svg = svg::render_chart(&chart, &style).unwrap();
    assert!(svg.contains(r##"fill="#121214""##));
    assert!(!svg.contains("#5daeff"));
}

#[test]
fn configured_theme_reaches_svg() {
    let items = bundled_products().unwrap();

    let config = parse_config("[style]\ntheme = \"DARK\"\n").unwrap();
    let chart = chart_for_products(&items, &config).unwrap().unwrap();
    let style = ChartStyle::from_config(&config);
    assert_eq!(style.theme.name, "dark");
    let svg = svg::render_chart(&chart, &style).unwrap();
    assert!(svg.contains(r##"fill="#121214""##));
    assert!(svg.contains(r##"stroke="#40a0ff""##));

    let config = parse_config("[style]\ntheme = \"nope\"\n").unwrap();
    let style = ChartStyle::from_config(&config);
    assert_eq!(style.theme, Theme::light());
    let svg = svg::render_chart(&chart, &style).unwrap();
    assert!(svg.contains(r##"fill="#ffffff""##));
    assert!(svg.contains(r##"stroke="#5daeff""##));
}

#[test]
fn golden_bundled_chart() {
    let text = render_svg();
    let snap_path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/bundled_chart.svg");

    if bless_mode() {
        std::fs::create_dir_all(snap_path.parent().unwrap()).expect("create snapshots dir");
        std::fs::write(&snap_path, &text).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), text.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
        assert_eq!(text, want, "rendered SVG differs from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
