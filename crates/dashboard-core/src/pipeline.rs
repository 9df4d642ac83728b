// File: crates/dashboard-core/src/pipeline.rs
// Summary: Weekly records -> monthly series -> scales -> paths and ticks, in one pass.

use tracing::{debug, debug_span};

use crate::aggregate::aggregate_since;
use crate::axis::{axis_ticks, Tick};
use crate::config::DashboardConfig;
use crate::error::Result;
use crate::model::{MonthlyAggregate, Product, SalesMeasure, WeeklySalesRecord};
use crate::path::{build_path, LinePath};
use crate::scale::{build_scales_with, Scales};
use crate::types::{Margins, Viewport};

/// Everything a renderer needs to draw the sales chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartArtifacts {
    pub viewport: Viewport,
    pub margins: Margins,
    pub series: Vec<MonthlyAggregate>,
    pub scales: Scales,
    pub retail_path: LinePath,
    pub wholesale_path: LinePath,
    pub ticks: Vec<Tick>,
}

/// Run the full chart pipeline over one product's weekly sales.
/// All-or-nothing: a bad record yields an error and no artifacts.
pub fn build_chart(sales: &[WeeklySalesRecord], config: &DashboardConfig) -> Result<ChartArtifacts> {
    let _span = debug_span!("build_chart", records = sales.len()).entered();

    let series = aggregate_since(sales, config.aggregation.min_year)?;
    let scales = build_scales_with(&series, config.viewport, config.margins, config.axis.y_ticks);

    let retail_path = build_path(&series, &scales.x, &scales.y, |m| SalesMeasure::Retail.value(m));
    let wholesale_path = build_path(&series, &scales.x, &scales.y, |m| SalesMeasure::Wholesale.value(m));
    // an empty series has nothing to label
    let ticks = if series.is_empty() { Vec::new() } else { axis_ticks(&scales.x, config.axis.x_ticks) };

    debug!(months = series.len(), ticks = ticks.len(), "chart artifacts ready");
    Ok(ChartArtifacts {
        viewport: config.viewport,
        margins: config.margins,
        series,
        scales,
        retail_path,
        wholesale_path,
        ticks,
    })
}

/// Chart the first product of `items`.
///
/// Returns `Ok(None)` without running the pipeline when there is no product
/// or the product carries no sales.
pub fn chart_for_products(items: &[Product], config: &DashboardConfig) -> Result<Option<ChartArtifacts>> {
    let Some(sales) = items.first().and_then(|p| p.sales.as_deref()) else {
        debug!("no product sales to chart");
        return Ok(None);
    };
    build_chart(sales, config).map(Some)
}
