//! Cleanup command implementation
//!
//! Thin CLI wrapper over the cleanup step: confirms when interactive,
//! delegates to `operations::cleanup` and summarizes the report.

use console::style;
use inquire::Confirm;

use crate::cli::CleanupArgs;
use crate::error::{ResfoldError, Result};
use crate::ledger::EmbeddingLedger;
use crate::operations;

/// Run cleanup command
pub fn run(args: CleanupArgs) -> Result<()> {
    let ledger = EmbeddingLedger::parse(&args.cultures);
    if ledger.is_empty() {
        println!("Empty culture ledger, nothing to clean up.");
        return Ok(());
    }

    if !args.yes && console::user_attended() && !confirm_cleanup(&ledger)? {
        println!("Cleanup cancelled.");
        return Ok(());
    }

    let report = operations::cleanup::run(&args.assembly, &args.cultures)?;

    if !report.deleted.is_empty() {
        println!(
            "Removed {} satellite(s): {}",
            report.deleted.len(),
            style(report.deleted.join(", ")).green()
        );
    }
    if !report.skipped.is_empty() {
        println!(
            "Already gone: {}",
            style(report.skipped.join(", ")).dim()
        );
    }
    for failure in &report.failures {
        eprintln!(
            "{} {} ({}): {}",
            style("Failed:").red().bold(),
            failure.culture,
            failure.path.display(),
            failure.reason
        );
    }

    report.into_result().map(|_| ())
}

/// Confirm deletion with the user, showing what would be removed
fn confirm_cleanup(ledger: &EmbeddingLedger) -> Result<bool> {
    println!("\nSatellite files for the following culture(s) will be deleted:");
    for culture in ledger.cultures() {
        println!("  - {culture}");
    }
    println!();

    Confirm::new("Proceed with cleanup?")
        .with_default(true)
        .with_help_message("Press Enter to confirm, or 'n' to cancel")
        .prompt()
        .map_err(|e| ResfoldError::IoError {
            message: e.to_string(),
        })
}
