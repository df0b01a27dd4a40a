//! # Salesum
//!
//! A small CLI tool that reads a sales CSV and writes a plain-text
//! analysis summary: per-product unit and revenue totals, the
//! highest-revenue record, and sum/mean/median over the revenue column.
//!
//! ## Usage
//!
//! ```bash
//! salesum [-i sales_data.csv] [-o sales_summary.txt] [-c salesum.toml]
//! ```
//!
//! ## Modules
//!
//! - `table` - The immutable in-memory sales table and its CSV loader
//! - `aggregate` - Per-product grouped sums and the highest-revenue scan
//! - `stats` - Sum/mean/median over the raw revenue column
//! - `report` - Pure assembly of the fixed-layout text report
//! - `config` - Input/output paths with TOML file and CLI overrides
//! - `run` - The single-shot load/compute/format/write orchestration
//! - `error` - Typed error kinds surfaced to the CLI

pub mod aggregate;
pub mod config;
pub mod error;
pub mod report;
pub mod run;
pub mod stats;
pub mod table;

pub use error::{Error, Result};
