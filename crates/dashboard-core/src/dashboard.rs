// File: crates/dashboard-core/src/dashboard.rs
// Summary: Dashboard view model: loading / error / product panels plus the sales chart.

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::model::Product;
use crate::pipeline::{chart_for_products, ChartArtifacts};
use crate::store::ProductState;

pub const LOADING_MESSAGE: &str = "Loading products...";
/// Heading of the chart card.
pub const CHART_TITLE: &str = "Retail Sales";

/// Product info shown in the side panel.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductPanel {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub brand: String,
    pub retailer: String,
    pub tags: Vec<String>,
}

impl From<&Product> for ProductPanel {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.clone(),
            title: p.title.clone(),
            subtitle: p.subtitle.clone(),
            image: p.image.clone(),
            brand: p.brand.clone(),
            retailer: p.retailer.clone(),
            tags: p.tags.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DashboardView {
    Loading,
    Failed(String),
    Ready {
        panels: Vec<ProductPanel>,
        /// `None` when there is no product or it has no sales.
        chart: Option<ChartArtifacts>,
    },
}

impl DashboardView {
    /// Derive the view from the current store state. Recomputed from scratch on every call.
    pub fn build(state: &ProductState, config: &DashboardConfig) -> Result<Self> {
        if state.loading {
            return Ok(DashboardView::Loading);
        }
        if let Some(err) = &state.error {
            return Ok(DashboardView::Failed(err.clone()));
        }
        let panels = state.items.iter().map(ProductPanel::from).collect();
        let chart = chart_for_products(&state.items, config)?;
        Ok(DashboardView::Ready { panels, chart })
    }

    /// One-line status text for the non-ready states.
    pub fn status_text(&self) -> Option<String> {
        match self {
            DashboardView::Loading => Some(LOADING_MESSAGE.to_string()),
            DashboardView::Failed(msg) => Some(format!("Error: {msg}")),
            DashboardView::Ready { .. } => None,
        }
    }
}
