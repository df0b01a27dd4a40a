//! Sum, mean, and median over the revenue column
//!
//! These operate on the raw per-row revenue values, not the per-product
//! totals. The sum of an empty sequence is well-defined (handled by the
//! grouped aggregation), but a mean or median of nothing is not, so
//! `summarize` refuses empty input.

use serde::Serialize;

use crate::error::{Error, Result};

/// Aggregate statistics over the full revenue column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevenueStats {
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
}

impl RevenueStats {
    pub fn summarize(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyInput {
                what: "revenue statistics",
            });
        }

        let sum: f64 = values.iter().sum();
        let mean = sum / values.len() as f64;

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 1 {
            sorted[mid]
        } else {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        };

        Ok(Self { sum, mean, median })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_count() {
        let stats = RevenueStats::summarize(&[10.0, 20.0, 30.0]).unwrap();
        assert_eq!(stats.sum, 60.0);
        assert_eq!(stats.mean, 20.0);
        assert_eq!(stats.median, 20.0);
    }

    #[test]
    fn even_count_averages_the_middle_pair() {
        let stats = RevenueStats::summarize(&[10.0, 20.0, 30.0, 40.0]).unwrap();
        assert_eq!(stats.sum, 100.0);
        assert_eq!(stats.mean, 25.0);
        assert_eq!(stats.median, 25.0);
    }

    #[test]
    fn median_is_permutation_invariant() {
        let orderings = [
            [30.0, 10.0, 40.0, 20.0],
            [40.0, 30.0, 20.0, 10.0],
            [20.0, 40.0, 10.0, 30.0],
        ];
        for values in &orderings {
            assert_eq!(RevenueStats::summarize(values).unwrap().median, 25.0);
        }
    }

    #[test]
    fn single_value() {
        let stats = RevenueStats::summarize(&[42.5]).unwrap();
        assert_eq!(stats.sum, 42.5);
        assert_eq!(stats.mean, 42.5);
        assert_eq!(stats.median, 42.5);
    }

    #[test]
    fn negative_values_are_not_rejected() {
        let stats = RevenueStats::summarize(&[-20.0, 10.0]).unwrap();
        assert_eq!(stats.sum, -10.0);
        assert_eq!(stats.median, -5.0);
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = RevenueStats::summarize(&[]).unwrap_err();
        assert!(matches!(err, Error::EmptyInput { .. }));
    }
}
