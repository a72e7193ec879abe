//! Cleanup step: ledger string → satellite deletion
//!
//! Runs independently of the embed step, typically later and often in a
//! different process. The only input besides the assembly path is the
//! serialized ledger the embed step emitted.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::cleanup::{CleanupReport, cleanup};
use crate::error::{Result, assembly_not_found};
use crate::ledger::EmbeddingLedger;

/// Run the cleanup step
///
/// `cultures` is the delimited ledger string produced by the embed step,
/// passed through verbatim. An empty ledger means nothing was embedded and
/// there is nothing to delete. The returned report lists every culture
/// attempted; call [`CleanupReport::into_result`] to fail hard on any
/// per-culture failure.
pub fn run(assembly_path: &Path, cultures: &str) -> Result<CleanupReport> {
    let assembly_path = resolve_assembly_path(assembly_path)?;

    let ledger = EmbeddingLedger::parse(cultures);
    if ledger.is_empty() {
        info!(assembly = %assembly_path.display(), "empty ledger, no satellites to remove");
        return Ok(CleanupReport::default());
    }

    let report = cleanup(&assembly_path, &ledger)?;
    for failure in &report.failures {
        warn!(
            culture = %failure.culture,
            path = %failure.path.display(),
            reason = %failure.reason,
            "satellite cleanup failed"
        );
    }
    info!(
        assembly = %assembly_path.display(),
        deleted = report.deleted.len(),
        skipped = report.skipped.len(),
        failed = report.failures.len(),
        "cleanup finished"
    );

    Ok(report)
}

fn resolve_assembly_path(path: &Path) -> Result<PathBuf> {
    if !path.is_file() {
        return Err(assembly_not_found(path.display().to_string()));
    }
    dunce::canonicalize(path).map_err(|_| assembly_not_found(path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cleanup_step_consumes_ledger_verbatim() {
        let temp = TempDir::new().unwrap();
        let assembly = temp.path().join("App.exe");
        fs::write(&assembly, b"MZ").unwrap();
        for culture in ["de", "fr"] {
            let dir = temp.path().join(culture);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("App.resources.dll"), b"satellite").unwrap();
        }

        let report = run(&assembly, "de;fr").unwrap();
        assert_eq!(report.deleted.len(), 2);
        assert!(!temp.path().join("de").exists());
        assert!(!temp.path().join("fr").exists());
    }

    #[test]
    fn test_empty_ledger_is_a_no_op() {
        let temp = TempDir::new().unwrap();
        let assembly = temp.path().join("App.exe");
        fs::write(&assembly, b"MZ").unwrap();

        let report = run(&assembly, "").unwrap();
        assert!(report.deleted.is_empty());
        assert!(report.skipped.is_empty());
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_missing_assembly_fails_setup() {
        let result = run(Path::new("/nonexistent/App.exe"), "de");
        assert!(matches!(
            result,
            Err(crate::error::ResfoldError::AssemblyNotFound { .. })
        ));
    }
}
