mod cli;
mod commands;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use luach::config::Config;

use crate::cli::{Cli, Command, DisplayArgs};

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    };
    logging::init(cli.verbose, config.logging.enabled);

    if let Err(e) = run(cli.command, &config) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config: {}", path.display())),
        None => Config::load().context("failed to load config"),
    }
}

fn run(command: Option<Command>, config: &Config) -> Result<()> {
    match command.unwrap_or_else(|| Command::Today(DisplayArgs::default())) {
        Command::Today(args) => commands::today(&args, config),
        Command::Convert { date, display } => commands::convert(date, &display, config),
        Command::ToGregorian { year, month, day } => commands::to_gregorian(year, &month, day),
        Command::Year { year } => commands::year(year, config),
        Command::Gematriya(args) => commands::gematriya(&args, config),
    }
}
