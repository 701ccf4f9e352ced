use clap::Parser;
use cloudopt::{cli::Cli, config, run_command};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> cloudopt::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    // Load configuration
    let config = config::load_config(cli.config.as_deref())?;
    log::debug!("Using configuration: {:?}", config);

    run_command(cli.command, &config)
}
