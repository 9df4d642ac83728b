// File: crates/dashboard-core/src/aggregate.rs
// Summary: Monthly bucketing of weekly sales records.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::error::{DashboardError, Result};
use crate::model::{parse_date, MonthlyAggregate, WeeklySalesRecord};

/// Records dated before this year never reach the chart.
pub const MIN_YEAR: i32 = 2017;

/// Aggregate weekly records into monthly totals, dropping anything before [`MIN_YEAR`].
pub fn aggregate(records: &[WeeklySalesRecord]) -> Result<Vec<MonthlyAggregate>> {
    aggregate_since(records, MIN_YEAR)
}

/// Aggregate weekly records into one entry per calendar month, sorted by month.
///
/// Every date is parsed before any bucketing happens, so a single bad record
/// fails the whole call instead of producing a partial series. Records whose
/// year is below `min_year` are excluded: they create no bucket and add to no
/// total. Sales values are summed as given, negatives included.
pub fn aggregate_since(records: &[WeeklySalesRecord], min_year: i32) -> Result<Vec<MonthlyAggregate>> {
    let mut dated: Vec<(NaiveDate, &WeeklySalesRecord)> = Vec::with_capacity(records.len());
    for (index, r) in records.iter().enumerate() {
        let date = parse_date(&r.week_ending).ok_or_else(|| DashboardError::InvalidDate {
            index,
            value: r.week_ending.clone(),
        })?;
        dated.push((date, r));
    }
    dated.sort_by_key(|&(d, _)| d);

    // (year, month) -> (retail, wholesale)
    let mut buckets: BTreeMap<(i32, u32), (f64, f64)> = BTreeMap::new();
    for (date, r) in dated.iter().filter(|(d, _)| d.year() >= min_year) {
        let totals = buckets.entry((date.year(), date.month())).or_insert((0.0, 0.0));
        totals.0 += r.retail_sales;
        totals.1 += r.wholesale_sales;
    }

    if buckets.is_empty() && !records.is_empty() {
        warn!(records = records.len(), min_year, "every sales record predates the cutoff year");
    }

    // BTreeMap iterates keys in ascending (year, month) order.
    let out: Vec<MonthlyAggregate> = buckets
        .into_iter()
        .filter_map(|((year, month), (retail, wholesale))| {
            NaiveDate::from_ymd_opt(year, month, 1).map(|month| MonthlyAggregate {
                month,
                retail_sales: retail,
                wholesale_sales: wholesale,
            })
        })
        .collect();

    debug!(records = records.len(), months = out.len(), "aggregated weekly sales by month");
    Ok(out)
}
