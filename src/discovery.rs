//! Satellite assembly discovery
//!
//! Scans the directory next to a primary assembly for culture-named
//! subdirectories carrying a matching `{base}.resources.dll`. Directories
//! without a matching satellite are silently skipped — a culture simply not
//! being localized is normal, not an error.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::culture::is_culture_tag;
use crate::error::{Result, assembly_not_found};
use crate::naming::{assembly_base_name, satellite_file_name};

/// One discovered culture satellite next to the primary assembly
///
/// Created fresh on every discovery pass; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SatelliteDescriptor {
    /// Culture tag taken from the directory name (`de`, `de-DE`, ...)
    pub culture: String,
    /// Full path of the satellite assembly file
    pub path: PathBuf,
}

/// Discover culture satellites belonging to the given primary assembly
///
/// Enumerates the immediate subdirectories of the assembly's directory.
/// Order follows directory enumeration and carries no meaning: the naming
/// policy makes each culture's embedding independent of the others.
pub fn discover(primary_assembly: &Path) -> Result<Vec<SatelliteDescriptor>> {
    let Some(base_name) = assembly_base_name(primary_assembly) else {
        return Err(assembly_not_found(primary_assembly.display().to_string()));
    };
    let root = match primary_assembly.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !root.is_dir() {
        return Err(assembly_not_found(primary_assembly.display().to_string()));
    }

    let satellite_name = satellite_file_name(base_name);
    let mut satellites = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_dir())
    {
        let Some(dir_name) = entry.file_name().to_str() else {
            continue;
        };
        if !is_culture_tag(dir_name) {
            continue;
        }

        let candidate = entry.path().join(&satellite_name);
        if candidate.is_file() {
            debug!(culture = dir_name, path = %candidate.display(), "found satellite assembly");
            satellites.push(SatelliteDescriptor {
                culture: dir_name.to_string(),
                path: candidate,
            });
        } else {
            debug!(culture = dir_name, "culture directory without satellite, skipping");
        }
    }

    Ok(satellites)
}
