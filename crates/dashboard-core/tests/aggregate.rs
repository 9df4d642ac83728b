// File: crates/dashboard-core/tests/aggregate.rs
// Purpose: Monthly bucketing, cutoff filtering, ordering, and exact sums.

use chrono::NaiveDate;
use dashboard_core::{aggregate, aggregate_since, DashboardError, MonthlyAggregate, WeeklySalesRecord};

fn rec(date: &str, retail: f64, wholesale: f64) -> WeeklySalesRecord {
    WeeklySalesRecord::new(date, retail, wholesale)
}

fn month(y: i32, m: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, 1).unwrap()
}

fn agg(y: i32, m: u32, retail: f64, wholesale: f64) -> MonthlyAggregate {
    MonthlyAggregate { month: month(y, m), retail_sales: retail, wholesale_sales: wholesale }
}

#[test]
fn drops_records_before_2017() {
    let input = vec![rec("2016-12-28", 10.0, 5.0), rec("2017-01-04", 20.0, 8.0), rec("2017-01-11", 5.0, 2.0)];
    let out = aggregate(&input).unwrap();
    assert_eq!(out, vec![agg(2017, 1, 25.0, 10.0)]);
}

#[test]
fn separate_months_are_ordered() {
    let input = vec![rec("2017-01-04", 10.0, 5.0), rec("2017-02-08", 7.0, 3.0)];
    let out = aggregate(&input).unwrap();
    assert_eq!(out, vec![agg(2017, 1, 10.0, 5.0), agg(2017, 2, 7.0, 3.0)]);
}

#[test]
fn empty_input_gives_empty_output() {
    assert!(aggregate(&[]).unwrap().is_empty());
}

#[test]
fn all_pre_cutoff_gives_empty_output() {
    let input = vec![rec("2015-06-07", 1.0, 1.0), rec("2016-12-31", 2.0, 2.0)];
    assert!(aggregate(&input).unwrap().is_empty());
}

#[test]
fn unsorted_input_is_sorted_by_month() {
    let input = vec![
        rec("2018-03-04", 1.0, 1.0),
        rec("2017-11-05", 2.0, 2.0),
        rec("2018-01-07", 3.0, 3.0),
        rec("2017-11-26", 4.0, 4.0),
        rec("2016-02-14", 100.0, 100.0),
    ];
    let out = aggregate(&input).unwrap();
    let months: Vec<_> = out.iter().map(|m| m.month).collect();
    assert_eq!(months, vec![month(2017, 11), month(2018, 1), month(2018, 3)]);
    assert!(months.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(out[0].retail_sales, 6.0);
}

#[test]
fn sums_match_inputs_per_month() {
    // two years of weekly data starting on a Sunday in late 2016
    let start = NaiveDate::from_ymd_opt(2016, 11, 6).unwrap();
    let input: Vec<WeeklySalesRecord> = (0..110)
        .map(|i| {
            let d = start + chrono::Days::new(7 * i);
            rec(&d.format("%Y-%m-%d").to_string(), (i * 13 % 97) as f64, (i * 7 % 31) as f64 - 5.0)
        })
        .collect();
    let out = aggregate(&input).unwrap();

    for m in &out {
        let (retail, wholesale) = input
            .iter()
            .filter(|r| {
                let d = r.week_ending_date().unwrap();
                d.format("%Y-%m").to_string() == m.month.format("%Y-%m").to_string()
            })
            .fold((0.0, 0.0), |acc, r| (acc.0 + r.retail_sales, acc.1 + r.wholesale_sales));
        assert_eq!(m.retail_sales, retail, "retail for {}", m.month);
        assert_eq!(m.wholesale_sales, wholesale, "wholesale for {}", m.month);
    }
    assert!(out.iter().all(|m| m.month >= month(2017, 1)));
    assert!(out.windows(2).all(|w| w[0].month < w[1].month));
    // Jan 2017 .. Dec 2018
    assert_eq!(out.len(), 24);
}

#[test]
fn already_monthly_series_is_unchanged() {
    let monthly = vec![agg(2017, 1, 10.0, 4.0), agg(2017, 2, 12.5, 6.0), agg(2017, 5, 3.0, 1.0)];
    let input: Vec<WeeklySalesRecord> = monthly
        .iter()
        .map(|m| rec(&m.month.format("%Y-%m-%d").to_string(), m.retail_sales, m.wholesale_sales))
        .collect();
    assert_eq!(aggregate(&input).unwrap(), monthly);
}

#[test]
fn month_boundary_uses_own_date() {
    let input = vec![rec("2017-01-31", 1.0, 1.0), rec("2017-02-01", 2.0, 2.0)];
    let out = aggregate(&input).unwrap();
    assert_eq!(out, vec![agg(2017, 1, 1.0, 1.0), agg(2017, 2, 2.0, 2.0)]);
}

#[test]
fn timestamps_keep_their_written_date() {
    let input = vec![rec("2017-01-01T00:00:00.000Z", 1.0, 1.0), rec("2017-03-31T23:30:00-05:00", 2.0, 3.0)];
    let out = aggregate(&input).unwrap();
    assert_eq!(out, vec![agg(2017, 1, 1.0, 1.0), agg(2017, 3, 2.0, 3.0)]);
}

#[test]
fn negative_sales_are_accepted() {
    let input = vec![rec("2017-04-02", -10.0, 3.0), rec("2017-04-09", 4.0, -8.0)];
    let out = aggregate(&input).unwrap();
    assert_eq!(out, vec![agg(2017, 4, -6.0, -5.0)]);
}

#[test]
fn invalid_date_aborts_aggregation() {
    let input = vec![rec("2017-01-04", 1.0, 1.0), rec("not a date", 1.0, 1.0)];
    match aggregate(&input) {
        Err(DashboardError::InvalidDate { index, value }) => {
            assert_eq!(index, 1);
            assert_eq!(value, "not a date");
        }
        other => panic!("expected InvalidDate, got {other:?}"),
    }
}

#[test]
fn invalid_date_before_cutoff_still_fails() {
    let input = vec![rec("2016-13-01", 1.0, 1.0)];
    assert!(aggregate(&input).is_err());
}

#[test]
fn custom_cutoff_year() {
    let input = vec![rec("2016-12-28", 10.0, 5.0), rec("2017-01-04", 20.0, 8.0)];
    let out = aggregate_since(&input, 2016).unwrap();
    assert_eq!(out, vec![agg(2016, 12, 10.0, 5.0), agg(2017, 1, 20.0, 8.0)]);
}
