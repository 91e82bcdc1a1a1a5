use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;

/// CESU salary calculator with French labor law bonuses.
#[derive(Parser)]
#[command(
    name = "cesu",
    version,
    about = "Calculate monthly CESU salary with French labor law bonuses"
)]
pub struct Cli {
    /// Target month (1-12). Defaults to the current month.
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Target year. Defaults to the current year.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Net hourly salary in euros.
    #[arg(short = 'r', long = "rate", default_value = "12.0")]
    pub hourly_rate: Decimal,

    /// Number of absent days to deduct.
    #[arg(short, long = "absent-days", default_value_t = 0)]
    pub absent_days: u32,

    /// Monthly transport allowance in euros.
    #[arg(short, long, default_value = "60.0")]
    pub transport: Decimal,

    /// Path to the ICS holidays file (downloaded and cached when missing).
    #[arg(long = "ics", default_value = cesu_engine::feed::DEFAULT_FEED_FILE)]
    pub ics_file: PathBuf,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
