//! Embedding engine
//!
//! Adds or replaces named resources in a borrowed module with the raw bytes of
//! files on disk. The call is all-or-nothing at the logical level: the first
//! failure aborts further changes and the caller must discard the in-memory
//! module rather than save it. Nothing is rolled back in memory — external
//! atomicity comes from not persisting a failed module.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ResfoldError, Result, embed_failed, missing_source_file};
use crate::module::{EmbeddedResource, ResourceModule};

/// One file to embed and the manifest name it is stored under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceInfo {
    /// File whose raw bytes become the resource; must exist at embed time
    pub source_path: PathBuf,
    /// Manifest resource name; duplicates within a batch: last write wins
    pub resource_name: String,
}

impl ResourceInfo {
    pub fn new(source_path: impl Into<PathBuf>, resource_name: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            resource_name: resource_name.into(),
        }
    }
}

/// Embed the given resources into the module, replacing same-named entries
///
/// An empty batch is a caller configuration bug, not a no-op. Per resource:
/// missing source file or a failed insert aborts the call immediately,
/// short-circuiting the remaining resources. Replacing an existing entry
/// before inserting makes the operation idempotent — re-running the same
/// batch converges to the same final resource table.
///
/// All file handles are released before returning; the cleanup step may
/// delete the source files shortly after, possibly from another process.
pub fn embed(module: &mut dyn ResourceModule, resources: &[ResourceInfo]) -> Result<()> {
    if resources.is_empty() {
        return Err(ResfoldError::EmptyResourceBatch);
    }

    for res in resources {
        if !res.source_path.is_file() {
            return Err(missing_source_file(res.source_path.display().to_string()));
        }

        let bytes = read_resource_bytes(&res.source_path, &res.resource_name)?;

        // Stale entry from a previous build, or an earlier resource in this
        // batch under the same name: remove before inserting.
        if module.remove_resource(&res.resource_name) {
            debug!(resource = %res.resource_name, "replacing existing manifest resource");
        }

        module
            .add_resource(EmbeddedResource::private(
                res.resource_name.clone(),
                bytes,
            ))
            .map_err(|e| embed_failed(&res.resource_name, e.to_string()))?;

        info!(
            resource = %res.resource_name,
            source = %res.source_path.display(),
            "embedded resource"
        );
    }

    Ok(())
}

fn read_resource_bytes(path: &Path, resource_name: &str) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| embed_failed(resource_name, e.to_string()))
}
