//! resfold - satellite assembly resource folding
//!
//! Rewrites an already-built .NET assembly so that its culture satellite
//! assemblies travel inside the main binary as manifest resources, then —
//! as a separate, later step — removes the redundant satellite files from
//! disk, driven by the ledger the embed step produced.
//!
//! The low-level assembly reader/writer is deliberately not part of this
//! crate: the engine works against the narrow [`ResourceModule`] trait, so
//! any binary-rewriting library exposing the manifest resource table can
//! back it. Diagnostics are emitted through the `tracing` facade; the host
//! decides where they go.
//!
//! # Pipeline
//!
//! ```text
//! discovery -> naming policy -> embedding engine -> ledger
//!                                   |                  |
//!                         (module saved by host)       | (persisted as step output)
//!                                                      v
//!                                               cleanup engine
//! ```

pub mod cleanup;
pub mod cli;
pub mod commands;
pub mod culture;
pub mod discovery;
pub mod embedder;
pub mod error;
pub mod ledger;
pub mod module;
pub mod naming;
pub mod operations;
pub mod symbols;

pub use cleanup::{CleanupFailure, CleanupReport};
pub use discovery::SatelliteDescriptor;
pub use embedder::ResourceInfo;
pub use error::{ResfoldError, Result};
pub use ledger::EmbeddingLedger;
pub use module::{EmbeddedResource, InMemoryModule, ResourceModule, ResourceVisibility};
pub use operations::{EmbedOutcome, EmbedRequest};
pub use symbols::{DebugSymbolPolicy, SavePlan};
