//! Command implementations for the resfold CLI

pub mod cleanup;
pub mod completions;
pub mod scan;
pub mod version;
