//! Common test utilities for resfold integration tests

use std::path::PathBuf;

use tempfile::TempDir;

/// A build output directory for integration tests
///
/// Mimics the layout a compiler leaves behind: the primary assembly at the
/// root, culture satellites in `{culture}/{base}.resources.dll` next to it.
#[allow(dead_code)]
pub struct TestBuildDir {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the build output root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestBuildDir {
    /// Create a new empty build output directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a primary assembly file and return its path
    pub fn create_assembly(&self, file_name: &str) -> PathBuf {
        let assembly = self.path.join(file_name);
        std::fs::write(&assembly, b"MZ\x90\x00").expect("Failed to write assembly");
        assembly
    }

    /// Write a culture satellite for the given assembly base name
    pub fn add_satellite(&self, culture: &str, base_name: &str) -> PathBuf {
        let dir = self.path.join(culture);
        std::fs::create_dir_all(&dir).expect("Failed to create culture directory");
        let satellite = dir.join(format!("{base_name}.resources.dll"));
        std::fs::write(&satellite, format!("satellite {culture}"))
            .expect("Failed to write satellite");
        satellite
    }

    /// Write a separate symbol file next to the assembly
    pub fn add_symbol_file(&self, base_name: &str) -> PathBuf {
        let pdb = self.path.join(format!("{base_name}.pdb"));
        std::fs::write(&pdb, b"pdb").expect("Failed to write symbol file");
        pdb
    }

    /// Check if a path relative to the build root exists
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

/// Command for the resfold binary
#[allow(dead_code)]
pub fn resfold_cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("resfold").expect("resfold binary not built")
}
