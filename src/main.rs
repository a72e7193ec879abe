//! resfold - satellite assembly folding CLI
//!
//! The embed step itself is library-only (it needs the host's binary
//! rewriter behind the `ResourceModule` trait); the CLI covers the parts
//! that stand alone: inspecting the embedding plan and running the
//! cross-process cleanup step.

use clap::Parser;

use resfold::cli::{Cli, Commands};
use resfold::commands;

/// Install the global tracing subscriber with stderr output
///
/// Honors `RUST_LOG` when set; otherwise `--verbose` lifts the level from
/// `warn` to `debug`.
fn init_subscriber(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    // try_init is a no-op if a subscriber is already set
    let _ = subscriber.try_init();
}

fn main() {
    let cli = Cli::parse();

    init_subscriber(cli.verbose);

    let result = match cli.command {
        Commands::Scan(args) => commands::scan::run(args),
        Commands::Cleanup(args) => commands::cleanup::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
