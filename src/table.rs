//! In-memory sales table and CSV loading
//!
//! Rows are loaded once from a header-addressed CSV file and are immutable
//! afterwards. The three required columns (`Product`, `Units Sold`,
//! `Total Revenue`) are resolved by label exactly once, at load time, so a
//! missing or misnamed column fails fast instead of surfacing later in the
//! pipeline.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

pub const PRODUCT_COLUMN: &str = "Product";
pub const UNITS_COLUMN: &str = "Units Sold";
pub const REVENUE_COLUMN: &str = "Total Revenue";

/// One sales record. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub product: String,
    pub units_sold: u64,
    pub total_revenue: f64,
}

/// The full ordered set of records, in file order.
#[derive(Debug, Clone, Default)]
pub struct SalesTable {
    records: Vec<SalesRecord>,
}

/// Column indices resolved from the header row.
struct ColumnLayout {
    product: usize,
    units: usize,
    revenue: usize,
}

impl ColumnLayout {
    fn resolve(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| Error::malformed(format!("missing required column '{name}'")))
        };
        Ok(Self {
            product: find(PRODUCT_COLUMN)?,
            units: find(UNITS_COLUMN)?,
            revenue: find(REVENUE_COLUMN)?,
        })
    }
}

impl SalesTable {
    /// Load a table from a CSV file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::InputNotFound {
                path: path.to_path_buf(),
            });
        }
        let file = std::fs::File::open(path)?;
        let table = Self::from_reader(file)?;
        debug!("loaded {} records from {}", table.len(), path.display());
        Ok(table)
    }

    /// Parse a table from any CSV source with a header row.
    ///
    /// Column order is irrelevant; columns are matched by label. Extra
    /// columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let layout = ColumnLayout::resolve(csv_reader.headers()?)?;

        let mut records = Vec::new();
        for (index, result) in csv_reader.records().enumerate() {
            let record = result?;
            // Header is line 1, so the first data row is line 2.
            let line = index + 2;

            let field = |col: usize, name: &str| {
                record
                    .get(col)
                    .map(str::trim)
                    .ok_or_else(|| Error::malformed(format!("row {line}: missing '{name}' field")))
            };

            let product = field(layout.product, PRODUCT_COLUMN)?.to_string();
            if product.is_empty() {
                return Err(Error::malformed(format!("row {line}: empty product name")));
            }

            let units_raw = field(layout.units, UNITS_COLUMN)?;
            let units_sold = units_raw.parse::<u64>().map_err(|_| {
                Error::malformed(format!(
                    "row {line}: non-numeric '{UNITS_COLUMN}' value '{units_raw}'"
                ))
            })?;

            let revenue_raw = field(layout.revenue, REVENUE_COLUMN)?;
            let total_revenue = revenue_raw.parse::<f64>().map_err(|_| {
                Error::malformed(format!(
                    "row {line}: non-numeric '{REVENUE_COLUMN}' value '{revenue_raw}'"
                ))
            })?;

            records.push(SalesRecord {
                product,
                units_sold,
                total_revenue,
            });
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The raw revenue column, in table order.
    pub fn revenues(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.total_revenue).collect()
    }
}

impl FromIterator<SalesRecord> for SalesTable {
    fn from_iter<I: IntoIterator<Item = SalesRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
