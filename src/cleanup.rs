//! Satellite cleanup
//!
//! Deletes the satellite files that a previous embed run folded into the
//! assembly, driven by the ledger that run produced. Cultures are fully
//! independent units of work: one culture failing (a locked file, say) is
//! recorded and the rest are still attempted. Already-missing files are
//! success, which makes re-running cleanup safe.
//!
//! No handle on the primary assembly or the satellites is held across the
//! deletes — a process spawned from the freshly rewritten assembly may be
//! starting up at the same moment, and a lingering handle would turn the
//! delete into a sharing violation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{Result, assembly_not_found, cleanup_failed};
use crate::ledger::EmbeddingLedger;
use crate::naming::{assembly_base_name, satellite_file_name};

/// One culture whose satellite could not be removed
#[derive(Debug, Clone, Serialize)]
pub struct CleanupFailure {
    pub culture: String,
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of one cleanup run, per culture
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanupReport {
    /// Cultures whose satellite file was deleted in this run
    pub deleted: Vec<String>,
    /// Cultures whose satellite was already gone (safe re-run)
    pub skipped: Vec<String>,
    /// Cultures that could not be cleaned up
    pub failures: Vec<CleanupFailure>,
}

impl CleanupReport {
    /// Collapse the report into a hard error for callers that need one
    ///
    /// Returns the first failure as an error; the report still describes
    /// every culture that was attempted.
    pub fn into_result(self) -> Result<Self> {
        if let Some(f) = self.failures.first() {
            return Err(cleanup_failed(&f.culture, &f.path, &f.reason));
        }
        Ok(self)
    }
}

/// Delete the satellite files recorded in the ledger
///
/// For each culture, removes `{dir}/{culture}/{base}.resources.dll` next to
/// the primary assembly, then the culture directory itself if that left it
/// empty. Deletion is independent per culture and idempotent across runs.
pub fn cleanup(primary_assembly: &Path, ledger: &EmbeddingLedger) -> Result<CleanupReport> {
    let Some(base_name) = assembly_base_name(primary_assembly) else {
        return Err(assembly_not_found(primary_assembly.display().to_string()));
    };
    let root = parent_dir(primary_assembly);
    let satellite_name = satellite_file_name(base_name);

    let mut report = CleanupReport::default();
    for culture in ledger.cultures() {
        let culture_dir = root.join(culture);
        let satellite = culture_dir.join(&satellite_name);

        if !satellite.is_file() {
            debug!(culture, path = %satellite.display(), "satellite already gone");
            report.skipped.push(culture.to_string());
            continue;
        }

        match fs::remove_file(&satellite) {
            Ok(()) => {
                info!(culture, path = %satellite.display(), "removed embedded satellite");
                remove_dir_if_empty(&culture_dir);
                report.deleted.push(culture.to_string());
            }
            Err(e) => {
                warn!(culture, path = %satellite.display(), error = %e, "cleanup failed");
                report.failures.push(CleanupFailure {
                    culture: culture.to_string(),
                    path: satellite,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}

/// Directory containing the assembly; a bare file name means the cwd
fn parent_dir(assembly: &Path) -> &Path {
    match assembly.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

/// Remove a culture directory that cleanup emptied out
///
/// Other files in the directory (another assembly's satellites, for example)
/// keep the directory alive.
fn remove_dir_if_empty(dir: &Path) {
    let is_empty = fs::read_dir(dir)
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false);
    if is_empty {
        if let Err(e) = fs::remove_dir(dir) {
            debug!(path = %dir.display(), error = %e, "left culture directory in place");
        }
    }
}
