//! Plain-text summary report assembly
//!
//! Pure formatting: identical inputs produce byte-identical output. All
//! dollar figures carry exactly two decimals. Section headers use the
//! `====` prefix and per-product lines follow first-appearance order, as
//! the grouped totals iterate.

use std::fmt::Write;

use crate::aggregate::GroupedTotals;
use crate::stats::RevenueStats;
use crate::table::SalesRecord;

const TITLE: &str = "Sales Data Analysis Summary";

pub fn format_report(
    stats: &RevenueStats,
    units_by_product: &GroupedTotals<u64>,
    revenue_by_product: &GroupedTotals<f64>,
    top: &SalesRecord,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{}", "=".repeat(TITLE.len()));
    let _ = writeln!(out);

    let _ = writeln!(out, "====Total profit: ${:.2}", stats.sum);
    let _ = writeln!(out, "====Median Revenue: ${:.2}", stats.median);
    let _ = writeln!(out, "====Mean Revenue: ${:.2}", stats.mean);

    let width = units_by_product
        .iter()
        .map(|(product, _)| product.len())
        .max()
        .unwrap_or(0);

    let _ = writeln!(out, "====Total units sold:");
    for (product, total) in units_by_product.iter() {
        let _ = writeln!(out, "{product:<width$}  {total}");
    }

    let _ = writeln!(out, "====Total profit:");
    for (product, total) in revenue_by_product.iter() {
        let _ = writeln!(out, "{product:<width$}  {total:.2}");
    }

    let _ = writeln!(out, "====The Highest Revenue:");
    let _ = writeln!(out, "Product        {}", top.product);
    let _ = writeln!(out, "Units Sold     {}", top.units_sold);
    let _ = writeln!(out, "Total Revenue  {:.2}", top.total_revenue);

    out
}
