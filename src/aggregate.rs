//! Grouped sums and the highest-revenue record
//!
//! Grouping is stable: products appear in the result in the order they
//! first appear in the table, which is also the order the report prints
//! them in. The two metrics (units sold, revenue) share one generic
//! accumulation path.

use std::collections::HashMap;
use std::ops::AddAssign;

use crate::error::{Error, Result};
use crate::table::{SalesRecord, SalesTable};

/// Per-product totals for one metric, keyed by product in first-appearance
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedTotals<T> {
    entries: Vec<(String, T)>,
}

impl<T> GroupedTotals<T>
where
    T: Copy + Default + AddAssign,
{
    /// Partition the table by product and sum `metric` within each
    /// partition. An empty table yields an empty mapping.
    pub fn sum_by_product(table: &SalesTable, metric: impl Fn(&SalesRecord) -> T) -> Self {
        let mut entries: Vec<(String, T)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for record in table.records() {
            let slot = match index.get(&record.product) {
                Some(&i) => i,
                None => {
                    entries.push((record.product.clone(), T::default()));
                    index.insert(record.product.clone(), entries.len() - 1);
                    entries.len() - 1
                }
            };
            entries[slot].1 += metric(record);
        }

        Self { entries }
    }
}

impl<T> GroupedTotals<T> {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, product: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(k, _)| k == product)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Total units sold per product.
pub fn units_by_product(table: &SalesTable) -> GroupedTotals<u64> {
    GroupedTotals::sum_by_product(table, |r| r.units_sold)
}

/// Total revenue per product.
pub fn revenue_by_product(table: &SalesTable) -> GroupedTotals<f64> {
    GroupedTotals::sum_by_product(table, |r| r.total_revenue)
}

/// The record with the greatest total revenue.
///
/// Single forward scan with strict greater-than replacement, so ties
/// resolve to the first such record in table order.
pub fn highest_revenue(table: &SalesTable) -> Result<SalesRecord> {
    let mut best: Option<&SalesRecord> = None;
    for record in table.records() {
        match best {
            Some(current) if record.total_revenue > current.total_revenue => {
                best = Some(record);
            }
            None => best = Some(record),
            _ => {}
        }
    }
    best.cloned().ok_or(Error::EmptyInput {
        what: "highest revenue",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::SalesTable;

    fn record(product: &str, units_sold: u64, total_revenue: f64) -> SalesRecord {
        SalesRecord {
            product: product.to_string(),
            units_sold,
            total_revenue,
        }
    }

    fn sample_table() -> SalesTable {
        [
            record("A", 5, 50.0),
            record("B", 3, 90.0),
            record("A", 2, 20.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn groups_units_by_product() {
        let totals = units_by_product(&sample_table());
        assert_eq!(totals.get("A"), Some(&7));
        assert_eq!(totals.get("B"), Some(&3));
        assert_eq!(totals.len(), 2);
    }

    #[test]
    fn groups_revenue_by_product() {
        let totals = revenue_by_product(&sample_table());
        assert_eq!(totals.get("A"), Some(&70.0));
        assert_eq!(totals.get("B"), Some(&90.0));
    }

    #[test]
    fn group_order_follows_first_appearance() {
        let table: SalesTable = [
            record("Zeta", 1, 1.0),
            record("Alpha", 1, 1.0),
            record("Zeta", 1, 1.0),
        ]
        .into_iter()
        .collect();
        let totals = units_by_product(&table);
        let keys: Vec<&str> = totals.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn group_totals_conserve_the_column_sum() {
        let table = sample_table();
        let units_total: u64 = units_by_product(&table).iter().map(|(_, v)| v).sum();
        let direct: u64 = table.records().iter().map(|r| r.units_sold).sum();
        assert_eq!(units_total, direct);

        let revenue_total: f64 = revenue_by_product(&table).iter().map(|(_, v)| v).sum();
        let direct: f64 = table.records().iter().map(|r| r.total_revenue).sum();
        assert!((revenue_total - direct).abs() < 1e-9);
    }

    #[test]
    fn empty_table_yields_empty_mappings() {
        let table = SalesTable::default();
        assert!(units_by_product(&table).is_empty());
        assert!(revenue_by_product(&table).is_empty());
    }

    #[test]
    fn highest_revenue_returns_the_full_record() {
        let top = highest_revenue(&sample_table()).unwrap();
        assert_eq!(top, record("B", 3, 90.0));
    }

    #[test]
    fn highest_revenue_tie_goes_to_the_first_record() {
        let table: SalesTable = [
            record("First", 1, 90.0),
            record("Second", 9, 90.0),
            record("Third", 2, 10.0),
        ]
        .into_iter()
        .collect();
        let top = highest_revenue(&table).unwrap();
        assert_eq!(top.product, "First");
        assert_eq!(top.units_sold, 1);
    }

    #[test]
    fn highest_revenue_fails_on_empty_table() {
        let err = highest_revenue(&SalesTable::default()).unwrap_err();
        assert!(matches!(err, Error::EmptyInput { .. }));
    }
}
