mod cli;
mod logging;
mod report;

use std::process;

use anyhow::Result;
use chrono::{Datelike, Local};
use clap::Parser;

use cesu_engine::calculation::calculate_with_source;
use cesu_engine::feed::{DEFAULT_FEED_URL, HttpFeedSource};
use cesu_engine::models::{PayMonth, SalaryInputs};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // The clock is read once here; the engine itself never touches it.
    let today = Local::now().date_naive();
    let year = cli.year.unwrap_or_else(|| today.year());
    let month = cli.month.unwrap_or_else(|| today.month());

    let inputs = SalaryInputs::new(
        PayMonth::new(year, month)?,
        cli.hourly_rate,
        cli.absent_days,
        cli.transport,
    )?;

    let source = HttpFeedSource::default();
    let breakdown = calculate_with_source(&inputs, &source, &cli.ics_file, DEFAULT_FEED_URL)?;

    report::print_breakdown(&breakdown);
    Ok(())
}
