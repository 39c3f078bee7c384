//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - discover: Discover command arguments
//! - completions: Completions command arguments

use clap::builder::{styling::AnsiColor, Styles};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod discover;

pub use completions::CompletionsArgs;
pub use discover::DiscoverArgs;

/// Architecture as Code
///
/// Manage enterprise architecture programmatically.
#[derive(Parser, Debug)]
#[command(
    name = "arch",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Architecture as Code - Manage enterprise architecture programmatically",
    long_about = "Architecture as Code discovers cloud resources, groups them into logical \
                  applications, and scores tag compliance for architecture documentation."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover current architecture from cloud subscriptions
    Discover(DiscoverArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
