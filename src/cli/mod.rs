//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - scan: Scan command arguments
//! - cleanup: Cleanup command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod cleanup;
pub mod completions;
pub mod scan;

pub use cleanup::CleanupArgs;
pub use completions::CompletionsArgs;
pub use scan::ScanArgs;

/// resfold - satellite assembly folding
///
/// Folds culture satellite assemblies into the primary assembly's manifest
/// resources and cleans up the redundant satellite files afterwards.
#[derive(Parser, Debug)]
#[command(
    name = "resfold",
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Folds culture satellite assemblies into a .NET assembly's manifest resources",
    long_about = "resfold rewrites an already-built .NET assembly so that its culture satellite \
                  assemblies (de/App.resources.dll, fr/App.resources.dll, ...) travel inside the \
                  main binary as manifest resources. A later, independent cleanup step deletes \
                  the satellites the embed step recorded in its culture ledger.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  resfold scan bin/Release/App.exe             \x1b[90m# Show the embedding plan\x1b[0m\n   \
                  resfold scan bin/Release/App.exe --json      \x1b[90m# Plan as JSON for tooling\x1b[0m\n   \
                  resfold cleanup App.exe --cultures \"de;fr\"   \x1b[90m# Delete embedded satellites\x1b[0m\n   \
                  resfold cleanup App.exe --cultures \"de\" -y   \x1b[90m# Without confirmation\x1b[0m\n\n\
                  "
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
    /// Show which culture satellites would be folded into an assembly
    Scan(ScanArgs),

    /// Remove satellite files recorded in an embed step's culture ledger
    Cleanup(CleanupArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
