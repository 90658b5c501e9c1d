mod cli;
mod config;
mod convert;
mod export_cmd;
mod generate;
mod logging;
mod plans_cmd;
mod progress_cmd;
mod session;
mod show_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(&cli.config)?;
    match cli.command {
        Command::Generate(args) => generate::run(args, &config),
        Command::Show(args) => show_cmd::run(args, &config),
        Command::Progress(args) => progress_cmd::run(args, &config),
        Command::Export(args) => export_cmd::run(args, &config),
        Command::Plans(args) => plans_cmd::run(args, &config),
    }
}
