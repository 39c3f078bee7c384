//! Architecture as Code - Manage enterprise architecture programmatically
//!
//! Discovers cloud resources, groups them into logical applications, and
//! scores tag compliance for architecture documentation.

use clap::Parser;

mod api;
mod cli;
mod commands;
mod discovery;
mod error;
mod model;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Discover(args) => commands::discover::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
