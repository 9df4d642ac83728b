// File: crates/dashboard-core/src/store.rs
// Summary: Product store with explicit load lifecycle (pending / fulfilled / rejected).

use std::path::PathBuf;

use tracing::{info, warn};

use crate::dataset;
use crate::error::Result;
use crate::model::Product;

/// Message recorded when a source fails without one of its own.
pub const DEFAULT_LOAD_ERROR: &str = "Failed to load products";

/// Where products come from.
pub trait ProductSource {
    fn id(&self) -> &'static str;
    fn load(&self) -> Result<Vec<Product>>;
}

/// The dataset compiled into the library.
pub struct BundledDataset;

impl ProductSource for BundledDataset {
    fn id(&self) -> &'static str { "bundled" }
    fn load(&self) -> Result<Vec<Product>> { dataset::bundled_products() }
}

/// A JSON product array on disk.
pub struct JsonFileSource {
    pub path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProductSource for JsonFileSource {
    fn id(&self) -> &'static str { "json-file" }
    fn load(&self) -> Result<Vec<Product>> { dataset::load_products_json(&self.path) }
}

/// Snapshot of the store, as the dashboard sees it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductState {
    pub items: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct ProductStore {
    state: ProductState,
}

impl ProductStore {
    pub fn new() -> Self { Self::default() }

    pub fn state(&self) -> &ProductState { &self.state }

    /// The product the dashboard displays.
    pub fn first_product(&self) -> Option<&Product> { self.state.items.first() }

    /// Load products from `source`, moving through pending to fulfilled or rejected.
    pub fn fetch(&mut self, source: &dyn ProductSource) -> &ProductState {
        self.begin_load();
        match source.load() {
            Ok(items) => {
                info!(source = source.id(), products = items.len(), "products loaded");
                self.finish_load(items);
            }
            Err(e) => {
                warn!(source = source.id(), error = %e, "product load failed");
                self.fail_load(e.to_string());
            }
        }
        &self.state
    }

    pub fn begin_load(&mut self) {
        self.state.loading = true;
        self.state.error = None;
    }

    pub fn finish_load(&mut self, items: Vec<Product>) {
        self.state.loading = false;
        self.state.items = items;
    }

    pub fn fail_load(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.state.loading = false;
        self.state.error = Some(if message.is_empty() { DEFAULT_LOAD_ERROR.to_string() } else { message });
    }

    /// Drop loaded products and any recorded error.
    pub fn reset(&mut self) {
        self.state.items.clear();
        self.state.error = None;
    }
}
