use std::path::PathBuf;

use clap::Parser;

/// Arguments for the scan command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the embedding plan:\n    resfold scan bin/Release/App.exe\n\n\
                  Plan as JSON for build tooling:\n    resfold scan bin/Release/App.exe --json")]
pub struct ScanArgs {
    /// Primary assembly whose culture satellites to look for
    pub assembly: PathBuf,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}
