//! Error types and handling for resfold
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Caller configuration errors
//! - [`embed`]: Embedding engine errors
//! - [`symbols`]: Debug symbol coordination errors
//! - [`cleanup`]: Satellite cleanup errors

pub mod cleanup;
pub mod config;
pub mod embed;
pub mod symbols;

#[allow(unused_imports)]
pub use cleanup::failed as cleanup_failed;
#[allow(unused_imports)]
pub use config::{assembly_not_found, invalid_debug_type, ledger_parse_failed};
#[allow(unused_imports)]
pub use embed::{failed as embed_failed, missing_source_file};
#[allow(unused_imports)]
pub use symbols::desync_risk as symbol_desync_risk;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for resfold operations
#[derive(Error, Diagnostic, Debug)]
pub enum ResfoldError {
    // Configuration errors (caller bugs, never retried)
    #[error("No resources to embed")]
    #[diagnostic(
        code(resfold::config::empty_batch),
        help("The embed step must be invoked with at least one satellite resource")
    )]
    EmptyResourceBatch,

    #[error("Assembly not found: {path}")]
    #[diagnostic(
        code(resfold::config::assembly_not_found),
        help("Check that the assembly path points at the build output of the current project")
    )]
    AssemblyNotFound { path: String },

    #[error("Unknown debug type: {value}")]
    #[diagnostic(
        code(resfold::config::invalid_debug_type),
        help("Supported debug types: none, full, pdbonly, embedded, portable")
    )]
    InvalidDebugType { value: String },

    #[error("Failed to parse embedded cultures '{input}': {reason}")]
    #[diagnostic(code(resfold::config::ledger_parse_failed))]
    LedgerParse { input: String, reason: String },

    // Embedding errors (abort the current embed call)
    #[error("Could not locate file '{path}' for embedding")]
    #[diagnostic(
        code(resfold::embed::missing_source),
        help("The satellite assembly was discovered but vanished before embedding; rebuild the project")
    )]
    MissingSourceFile { path: String },

    #[error("Failed to embed resource '{resource}': {reason}")]
    #[diagnostic(code(resfold::embed::failed))]
    EmbedFailed { resource: String, reason: String },

    // Symbol coordination errors (fatal to the whole operation)
    #[error("Debug symbols would desynchronize: {detail}")]
    #[diagnostic(
        code(resfold::symbols::desync_risk),
        help(
            "Saving the rewritten assembly would strip or orphan its debug symbols. \
             Failing the build is safer than shipping an undebuggable module."
        )
    )]
    SymbolDesyncRisk { detail: String },

    // Cleanup errors (scoped per culture, other cultures still attempted)
    #[error("Failed to remove satellite for culture '{culture}' at {path}: {reason}")]
    #[diagnostic(
        code(resfold::cleanup::failed),
        help("Another process may hold the file open; re-run cleanup once it exits")
    )]
    CleanupFailed {
        culture: String,
        path: String,
        reason: String,
    },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(resfold::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ResfoldError {
    fn from(err: std::io::Error) -> Self {
        ResfoldError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ResfoldError>;
