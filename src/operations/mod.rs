//! Step orchestration
//!
//! The host build invokes resfold as two independent steps, possibly in
//! different process lifetimes: [`embed`] rewrites the in-memory module and
//! reports the ledger, [`cleanup`] later consumes that ledger verbatim to
//! delete the folded-in satellite files.

pub mod cleanup;
pub mod embed;

pub use cleanup::run as run_cleanup;
pub use embed::{EmbedOutcome, EmbedRequest, run as run_embed};
