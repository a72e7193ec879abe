//! Manifest resource naming policy
//!
//! The name under which a satellite assembly's bytes are stored inside the
//! primary assembly. The runtime resolver looks resources up by
//! (assembly base name, requested culture), so the name must encode both and
//! must never change between releases: previously shipped binaries resolve
//! against the names they were built with.

use std::path::Path;

/// Derive the manifest resource name for a culture's satellite assembly
///
/// Each culture gets its own distinct name (`App.de.resources.dll` vs
/// `App.de-DE.resources.dll`) so runtime culture fallback can probe each
/// stage of the fallback chain independently.
pub fn manifest_resource_name(base_name: &str, culture: &str) -> String {
    format!("{base_name}.{culture}.resources.dll")
}

/// File name a satellite assembly carries on disk inside its culture directory
pub fn satellite_file_name(base_name: &str) -> String {
    format!("{base_name}.resources.dll")
}

/// Base name of an assembly path (file stem, e.g. `App` for `bin/App.exe`)
pub fn assembly_base_name(assembly_path: &Path) -> Option<&str> {
    assembly_path.file_stem().and_then(|s| s.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_names_are_distinct_per_culture() {
        let de = manifest_resource_name("App", "de");
        let de_de = manifest_resource_name("App", "de-DE");
        assert_ne!(de, de_de);
    }

    #[test]
    fn test_names_are_deterministic() {
        assert_eq!(
            manifest_resource_name("App", "de-DE"),
            manifest_resource_name("App", "de-DE"),
        );
        assert_eq!(manifest_resource_name("App", "fr"), "App.fr.resources.dll");
    }

    #[test]
    fn test_satellite_file_name() {
        assert_eq!(satellite_file_name("App"), "App.resources.dll");
    }

    #[test]
    fn test_assembly_base_name() {
        assert_eq!(assembly_base_name(Path::new("bin/App.exe")), Some("App"));
        assert_eq!(
            assembly_base_name(Path::new("/out/My.Lib.dll")),
            Some("My.Lib")
        );
    }
}
