//! Single-shot batch run
//!
//! Load the table, derive the four summaries, format, write. Everything
//! after load is a pure read over the immutable table; any failure
//! propagates out before the output file is touched.

use std::path::Path;

use tracing::{debug, info};

use crate::aggregate::{highest_revenue, revenue_by_product, units_by_product};
use crate::config::SummaryConfig;
use crate::error::{Error, Result};
use crate::report::format_report;
use crate::stats::RevenueStats;
use crate::table::SalesTable;

pub fn run(config: &SummaryConfig) -> Result<()> {
    let table = SalesTable::load(&config.input_path)?;
    info!(
        "loaded {} sales records from {}",
        table.len(),
        config.input_path.display()
    );

    if config.show_data {
        print_table(&table);
    }

    let stats = RevenueStats::summarize(&table.revenues())?;
    let units = units_by_product(&table);
    let revenue = revenue_by_product(&table);
    let top = highest_revenue(&table)?;
    debug!(
        "revenue sum={:.2} mean={:.2} median={:.2}, top product '{}' at {:.2}",
        stats.sum, stats.mean, stats.median, top.product, top.total_revenue
    );

    let report = format_report(&stats, &units, &revenue, &top);
    write_report(&config.output_path, &report)?;
    info!("wrote summary to {}", config.output_path.display());

    Ok(())
}

fn print_table(table: &SalesTable) {
    println!("Data:");
    println!("{:<20} {:>10} {:>14}", "Product", "Units Sold", "Total Revenue");
    for record in table.records() {
        println!(
            "{:<20} {:>10} {:>14.2}",
            record.product, record.units_sold, record.total_revenue
        );
    }
}

fn write_report(path: &Path, report: &str) -> Result<()> {
    std::fs::write(path, report).map_err(|source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}
