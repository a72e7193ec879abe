//! Satellite cleanup errors

use std::path::Path;

use super::ResfoldError;

/// Creates a per-culture cleanup failure
pub fn failed(
    culture: impl Into<String>,
    path: impl AsRef<Path>,
    reason: impl Into<String>,
) -> ResfoldError {
    ResfoldError::CleanupFailed {
        culture: culture.into(),
        path: path.as_ref().display().to_string(),
        reason: reason.into(),
    }
}
