//! EVP CLI - Command line tool for reporting on EV population data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "evp-cli",
    version,
    about = "Electric vehicle population analytics toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: evp_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    evp_cmd::run(cli.command)
}
