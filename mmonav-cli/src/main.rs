//! MMONav CLI - live navigation guidance from game logs and pasted
//! coordinates.
//!
//! This binary provides a terminal front-end to the `mmonav` library.

mod adapters;
mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mmonav")]
#[command(about = "Bearing, distance and compass guidance toward in-game locations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Watch a game log (or pasted text) and print live guidance
    Watch(commands::watch::WatchArgs),
    /// One-shot bearing and distance between two coordinate strings
    Bearing(commands::bearing::BearingArgs),
    /// Show how a piece of text scrubs and parses
    Parse(commands::parse::ParseArgs),
    /// Write a starter profile file
    InitConfig(commands::init_config::InitConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Watch(args) => commands::watch::run(args),
        Command::Bearing(args) => commands::bearing::run(args),
        Command::Parse(args) => commands::parse::run(args),
        Command::InitConfig(args) => commands::init_config::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
