mod cli;
mod commands;

use clap::Parser;

use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Normalize { input, json } => commands::normalize::run(&input, json),
        Command::Elements { input, json } => commands::elements::run(&input, json),
        Command::Check { input } => commands::check::run(&input),
    }
}
