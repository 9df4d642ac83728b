// File: crates/dashboard-core/src/model.rs
// Summary: Product, weekly sales record, and monthly aggregate models.
// Notes:
// - Field names follow the camelCase layout of the bundled JSON dataset.
// - `week_ending` stays a string on input; the aggregator parses it so a bad
//   date is reported with the index of the offending record.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One week of sales for a product, as stored in the dataset.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySalesRecord {
    pub week_ending: String,
    pub retail_sales: f64,
    pub wholesale_sales: f64,
    #[serde(default)]
    pub units_sold: f64,
    #[serde(default)]
    pub retailer_margin: f64,
}

impl WeeklySalesRecord {
    pub fn new(week_ending: impl Into<String>, retail_sales: f64, wholesale_sales: f64) -> Self {
        Self {
            week_ending: week_ending.into(),
            retail_sales,
            wholesale_sales,
            units_sold: 0.0,
            retailer_margin: 0.0,
        }
    }

    /// Calendar date of `week_ending`, or `None` when it cannot be parsed.
    pub fn week_ending_date(&self) -> Option<NaiveDate> {
        parse_date(&self.week_ending)
    }
}

/// Parse `YYYY-MM-DD`, a naive `YYYY-MM-DDTHH:MM:SS[.f]` timestamp, or RFC 3339.
/// The date written in the string is kept as-is; offsets never shift it.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

/// Retail and wholesale totals for one calendar month.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAggregate {
    /// Always the first day of the month.
    pub month: NaiveDate,
    pub retail_sales: f64,
    pub wholesale_sales: f64,
}

/// Which of the two sales figures a curve plots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SalesMeasure {
    Retail,
    Wholesale,
}

impl SalesMeasure {
    pub fn value(self, m: &MonthlyAggregate) -> f64 {
        match self {
            SalesMeasure::Retail => m.retail_sales,
            SalesMeasure::Wholesale => m.wholesale_sales,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SalesMeasure::Retail => "Retail Sales",
            SalesMeasure::Wholesale => "Wholesale Sales",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub image: String,
    pub subtitle: String,
    pub brand: String,
    pub retailer: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// `None` when the dataset omits the field; such a product is never charted.
    #[serde(default)]
    pub sales: Option<Vec<WeeklySalesRecord>>,
}
