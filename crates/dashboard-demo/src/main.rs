// File: crates/dashboard-demo/src/main.rs
// Summary: Demo loads the product dataset, builds the dashboard view, and writes the sales chart.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use dashboard_core::dashboard::{CHART_TITLE, LOADING_MESSAGE};
use dashboard_core::dataset::load_sales_csv;
use dashboard_core::{
    load_config, svg, BundledDataset, ChartArtifacts, ChartStyle, DashboardConfig, DashboardView, JsonFileSource,
    MonthlyAggregate, ProductPanel, ProductStore, SalesMeasure,
};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "sales-dashboard", version, about = "Render a product's monthly retail vs. wholesale sales chart")]
struct Args {
    /// Product dataset (JSON array); the bundled dataset is used when omitted
    #[arg(long)]
    data: Option<PathBuf>,

    /// Weekly sales CSV that replaces the first product's sales
    #[arg(long)]
    sales_csv: Option<PathBuf>,

    /// TOML configuration overriding the embedded defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory
    #[arg(long, default_value = "target/out")]
    out: PathBuf,

    /// Also rasterize the chart to PNG (needs the `png` feature)
    #[arg(long)]
    png: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref()).context("loading configuration")?;

    let mut store = ProductStore::new();
    match &args.data {
        Some(path) => store.fetch(&JsonFileSource::new(path)),
        None => store.fetch(&BundledDataset),
    };

    if let Some(csv_path) = &args.sales_csv {
        attach_csv_sales(&mut store, csv_path)?;
    }

    let view = DashboardView::build(store.state(), &config).context("building dashboard")?;
    let (panels, chart) = ready_parts(view)?;
    for panel in &panels {
        print_panel(panel);
    }
    match chart {
        Some(chart) => write_outputs(&chart, &config, &args)?,
        None => warn!("nothing to chart: no product or no sales data"),
    }
    Ok(())
}

/// Replace the first product's sales with the CSV records. A failed product load is left as is.
fn attach_csv_sales(store: &mut ProductStore, csv_path: &Path) -> Result<()> {
    if store.state().error.is_some() {
        return Ok(());
    }
    let sales = load_sales_csv(csv_path).with_context(|| format!("failed to load CSV '{}'", csv_path.display()))?;
    let mut items = store.state().items.clone();
    let first = items.first_mut().context("no product to attach CSV sales to")?;
    info!(product = %first.id, records = sales.len(), "replacing product sales from CSV");
    first.sales = Some(sales);
    store.finish_load(items);
    Ok(())
}

/// Unpack a ready view; the other states become the error reported on exit.
fn ready_parts(view: DashboardView) -> Result<(Vec<ProductPanel>, Option<ChartArtifacts>)> {
    match view {
        DashboardView::Ready { panels, chart } => Ok((panels, chart)),
        DashboardView::Failed(message) => anyhow::bail!("{message}"),
        DashboardView::Loading => anyhow::bail!("{LOADING_MESSAGE}"),
    }
}

fn print_panel(p: &ProductPanel) {
    println!("{}", p.title);
    println!("  {}", p.subtitle);
    println!("  {} @ {}  [{}]", p.brand, p.retailer, p.image);
    if !p.tags.is_empty() {
        println!("  tags: {}", p.tags.join(", "));
    }
}

fn write_outputs(chart: &ChartArtifacts, config: &DashboardConfig, args: &Args) -> Result<()> {
    println!("{CHART_TITLE}");
    for m in &chart.series {
        println!("  {}", month_line(m));
    }
    let labels: Vec<&str> = chart.ticks.iter().map(|t| t.label.as_str()).collect();
    println!("  axis: {}", labels.join(" "));

    let style = ChartStyle::from_config(config);
    let svg_path = args.out.join("chart.svg");
    svg::write_chart_svg(chart, &style, &svg_path).with_context(|| format!("writing {}", svg_path.display()))?;
    info!(path = %svg_path.display(), "wrote SVG chart");

    if args.png {
        write_png(chart, &style, args)?;
    }
    Ok(())
}

fn month_line(m: &MonthlyAggregate) -> String {
    let figures: Vec<String> = [SalesMeasure::Retail, SalesMeasure::Wholesale]
        .iter()
        .map(|measure| format!("{} {:>14.2}", measure.label(), measure.value(m)))
        .collect();
    format!("{}  {}", m.month.format("%Y-%m"), figures.join("  "))
}

#[cfg(feature = "png")]
fn write_png(chart: &ChartArtifacts, style: &ChartStyle, args: &Args) -> Result<()> {
    let png_path = args.out.join("chart.png");
    dashboard_core::raster::render_chart_png(chart, style, &png_path)?;
    info!(path = %png_path.display(), "wrote PNG chart");
    Ok(())
}

#[cfg(not(feature = "png"))]
fn write_png(_chart: &ChartArtifacts, _style: &ChartStyle, _args: &Args) -> Result<()> {
    warn!("built without the `png` feature; skipping PNG output");
    Ok(())
}
