//! Debug symbol coordination errors

use super::ResfoldError;

/// Creates a symbol desynchronization error
///
/// Always fatal to the whole operation: silently shipping an assembly with
/// stripped or orphaned symbols is worse than failing the build.
pub fn desync_risk(detail: impl Into<String>) -> ResfoldError {
    ResfoldError::SymbolDesyncRisk {
        detail: detail.into(),
    }
}
