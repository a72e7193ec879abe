//! Caller configuration errors

use super::ResfoldError;

/// Creates an error for an assembly path that does not exist
pub fn assembly_not_found(path: impl Into<String>) -> ResfoldError {
    ResfoldError::AssemblyNotFound { path: path.into() }
}

/// Creates an error for an unrecognized `DebugType` build property value
pub fn invalid_debug_type(value: impl Into<String>) -> ResfoldError {
    ResfoldError::InvalidDebugType {
        value: value.into(),
    }
}

/// Creates an error for a ledger string that could not be parsed
pub fn ledger_parse_failed(input: impl Into<String>, reason: impl Into<String>) -> ResfoldError {
    ResfoldError::LedgerParse {
        input: input.into(),
        reason: reason.into(),
    }
}
