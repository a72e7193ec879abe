use std::path::PathBuf;

use clap::Parser;

/// Arguments for the cleanup command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove satellites recorded by the embed step:\n    \
                  resfold cleanup bin/Release/App.exe --cultures \"de;de-DE;fr\"\n\n\
                  Without confirmation (build scripts):\n    \
                  resfold cleanup bin/Release/App.exe --cultures \"de;fr\" -y")]
pub struct CleanupArgs {
    /// Primary assembly the satellites were embedded into
    pub assembly: PathBuf,

    /// Culture ledger emitted by the embed step (semicolon-delimited)
    #[arg(long, env = "RESFOLD_CULTURES")]
    pub cultures: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}
