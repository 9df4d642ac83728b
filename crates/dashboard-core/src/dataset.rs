// File: crates/dashboard-core/src/dataset.rs
// Summary: Product dataset loading (bundled JSON, JSON files, weekly sales CSV).

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::model::{Product, WeeklySalesRecord};

/// The mock dataset shipped with the library.
pub const BUNDLED_JSON: &str = include_str!("../assets/products_2017.json");

/// Parse a JSON array of products.
pub fn parse_products(json: &str) -> Result<Vec<Product>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse the bundled dataset.
pub fn bundled_products() -> Result<Vec<Product>> {
    parse_products(BUNDLED_JSON)
}

pub fn load_products_json(path: &Path) -> Result<Vec<Product>> {
    let contents = std::fs::read_to_string(path)?;
    let items = parse_products(&contents)?;
    info!(path = %path.display(), products = items.len(), "loaded product dataset");
    Ok(items)
}

/// Read weekly sales from a CSV file with a header row.
///
/// Columns are matched by name: `weekEnding`, `retailSales` and
/// `wholesaleSales` are required, `unitsSold` and `retailerMargin` optional.
pub fn load_sales_csv(path: &Path) -> Result<Vec<WeeklySalesRecord>> {
    let rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_path(path)?;
    let records = read_sales_csv(rdr)?;
    info!(path = %path.display(), records = records.len(), "loaded weekly sales CSV");
    Ok(records)
}

/// Same as [`load_sales_csv`] for in-memory CSV text.
pub fn parse_sales_csv(text: &str) -> Result<Vec<WeeklySalesRecord>> {
    let rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(text.as_bytes());
    read_sales_csv(rdr)
}

fn read_sales_csv<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<WeeklySalesRecord>> {
    let mut out = Vec::new();
    for rec in rdr.deserialize() {
        out.push(rec?);
    }
    Ok(out)
}
