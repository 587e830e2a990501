use crate::{commands::Commands, error::CliError};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod input;
mod output;

#[derive(Parser)]
#[command(
    name = "kql",
    version = "0.1.0",
    about = "Compile and normalize KQL filter trees"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let pretty = cli.command.pretty();
    let result = commands::run(cli.command)?;
    output::print_json(&result, pretty)
}
