mod cli;
mod eras_cmd;
mod logging;
mod to_ad;
mod to_wareki;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::ToWareki(args) => to_wareki::run(args),
        Command::ToAd(args) => to_ad::run(args),
        Command::Eras => eras_cmd::run(),
    }
}
