//! Command implementations for the EVP CLI.
//!
//! Provides subcommands for printing console reports and exporting the
//! computed aggregate bundle. Both commands load the population CSV once,
//! run the aggregate layer, and only serialize its outputs; no figure is
//! recomputed at the presentation layer.

use clap::Subcommand;

pub mod export;
pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// Print summary statistics, rankings, trend, county and country
    /// tables, and fired insights for a population CSV
    Report {
        /// Path to the EV population CSV (header row required)
        #[arg(short = 'c', long)]
        csv: String,

        /// Number of makes to list
        #[arg(long, default_value_t = evp_stats::rankings::DEFAULT_MAKE_LIMIT)]
        makes: usize,

        /// Number of counties to list
        #[arg(long, default_value_t = evp_stats::county::DEFAULT_COUNTY_LIMIT)]
        counties: usize,
    },

    /// Export every derived aggregate as pretty-printed JSON
    Export {
        /// Path to the EV population CSV (header row required)
        #[arg(short = 'c', long)]
        csv: String,

        /// Output path; stdout when omitted
        #[arg(short = 'o', long)]
        out: Option<String>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Report { csv, makes, counties } => report::run_report(&csv, makes, counties),
        Command::Export { csv, out } => export::run_export(&csv, out.as_deref()),
    }
}
