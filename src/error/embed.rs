//! Embedding engine errors

use super::ResfoldError;

/// Creates an error for a satellite file that is absent at embed time
pub fn missing_source_file(path: impl Into<String>) -> ResfoldError {
    ResfoldError::MissingSourceFile { path: path.into() }
}

/// Creates an error for a failed resource insert, carrying the root cause
pub fn failed(resource: impl Into<String>, reason: impl Into<String>) -> ResfoldError {
    ResfoldError::EmbedFailed {
        resource: resource.into(),
        reason: reason.into(),
    }
}
