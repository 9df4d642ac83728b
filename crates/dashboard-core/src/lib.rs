// File: crates/dashboard-core/src/lib.rs
// Summary: Core library entry point; exports the sales chart pipeline, store, and renderers.

pub mod aggregate;
pub mod axis;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod model;
pub mod path;
pub mod pipeline;
pub mod scale;
pub mod store;
pub mod svg;
pub mod theme;
pub mod types;
#[cfg(feature = "png")]
pub mod raster;

pub use aggregate::{aggregate, aggregate_since, MIN_YEAR};
pub use axis::{axis_ticks, format_tick, Tick};
pub use config::{load_config, DashboardConfig};
pub use dashboard::{DashboardView, ProductPanel};
pub use error::{DashboardError, Result};
pub use model::{MonthlyAggregate, Product, SalesMeasure, WeeklySalesRecord};
pub use path::{build_path, LinePath, PathCommand};
pub use pipeline::{build_chart, chart_for_products, ChartArtifacts};
pub use scale::{build_scales, LinearScale, Scales, ScaleTransform, TimeScale};
pub use store::{BundledDataset, JsonFileSource, ProductSource, ProductState, ProductStore};
pub use theme::{ChartStyle, Theme};
pub use types::{Margins, Viewport};
