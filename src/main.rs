use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, error};

use salesum::config::SummaryConfig;

/// Summarize tabular sales data into a plain-text analysis report
#[derive(Parser)]
#[command(name = "salesum")]
#[command(about = "Summarize a sales CSV into a plain-text report", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Input CSV path (default: sales_data.csv)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output report path (default: sales_summary.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Echo the loaded table to stdout before writing the report
    #[arg(long)]
    show_data: bool,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("salesum started with verbosity level: {}", cli.verbose);

    if let Err(e) = try_main(cli) {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn try_main(cli: Cli) -> anyhow::Result<()> {
    let config = SummaryConfig::load(cli.config.as_deref())?
        .with_overrides(cli.input, cli.output, cli.show_data);
    salesum::run::run(&config)?;
    Ok(())
}
