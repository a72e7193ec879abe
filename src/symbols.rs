//! Debug symbol coordination
//!
//! Resource embedding rewrites the assembly, and a careless rewrite can
//! silently strip embedded symbols or orphan a separate symbol file. Because
//! resource-only edits never perturb method-body token layout, coordination
//! reduces to presence/absence bookkeeping: decide what the save pipeline
//! must do with symbols, and verify afterwards that the expected artifacts
//! are still there.
//!
//! The five policies form a closed enum on purpose — every save path is
//! forced to handle all of them explicitly.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, invalid_debug_type, symbol_desync_risk};
use crate::module::ResourceModule;

/// How the build emits debug symbols for the assembly being rewritten
///
/// Mirrors the `DebugType` build property spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugSymbolPolicy {
    /// No symbols are produced
    None,
    /// Separate symbol file with full debug info
    Full,
    /// Separate symbol file without sequence-point line info
    PdbOnly,
    /// Symbol data lives inside the assembly itself
    Embedded,
    /// Separate file in the portable cross-platform format
    Portable,
}

/// What the external writer must do with symbols when saving the module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePlan {
    /// Rewrite symbol information alongside the module
    pub write_symbols: bool,
    /// Re-attach the embedded symbol stream during save
    pub reattach_embedded: bool,
    /// Separate symbol file the rewritten module must stay in sync with
    pub symbol_file: Option<PathBuf>,
}

impl DebugSymbolPolicy {
    /// Derive the policy from the build configuration, once per embed run
    ///
    /// `debug_symbols == false` means no symbols regardless of the debug
    /// type; unknown debug type spellings are a caller configuration error.
    pub fn from_build_config(debug_symbols: bool, debug_type: &str) -> Result<Self> {
        if !debug_symbols {
            return Ok(Self::None);
        }
        match debug_type.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "full" => Ok(Self::Full),
            "pdbonly" => Ok(Self::PdbOnly),
            "embedded" => Ok(Self::Embedded),
            "portable" => Ok(Self::Portable),
            other => Err(invalid_debug_type(other)),
        }
    }

    /// Whether a separate symbol file is expected next to the assembly
    pub fn expects_symbol_file(self) -> bool {
        match self {
            Self::Full | Self::PdbOnly | Self::Portable => true,
            Self::None | Self::Embedded => false,
        }
    }

    /// Path of the separate symbol file for the given assembly
    pub fn symbol_file_path(assembly_path: &Path) -> PathBuf {
        assembly_path.with_extension("pdb")
    }

    /// Decide what the save pipeline must do with symbols
    ///
    /// Fails with `SymbolDesyncRisk` when the policy cannot be honored:
    /// embedded symbols that the module's save pipeline would drop, or an
    /// expected separate symbol file that is already missing.
    pub fn plan_save(self, module: &dyn ResourceModule, assembly_path: &Path) -> Result<SavePlan> {
        match self {
            Self::None => Ok(SavePlan {
                write_symbols: false,
                reattach_embedded: false,
                symbol_file: None,
            }),
            Self::Embedded => {
                if !module.preserves_embedded_symbols() {
                    return Err(symbol_desync_risk(format!(
                        "symbols are embedded in '{}' but the module writer would drop them on save",
                        assembly_path.display()
                    )));
                }
                Ok(SavePlan {
                    write_symbols: true,
                    reattach_embedded: true,
                    symbol_file: None,
                })
            }
            Self::Full | Self::PdbOnly | Self::Portable => {
                let symbol_file = Self::symbol_file_path(assembly_path);
                if !symbol_file.is_file() {
                    return Err(symbol_desync_risk(format!(
                        "expected symbol file '{}' does not exist",
                        symbol_file.display()
                    )));
                }
                debug!(symbol_file = %symbol_file.display(), "separate symbol file stays untouched");
                Ok(SavePlan {
                    write_symbols: true,
                    reattach_embedded: false,
                    symbol_file: Some(symbol_file),
                })
            }
        }
    }

    /// Post-condition check used by test scenarios after the module is saved
    ///
    /// Verifies the separate symbol file is present exactly when the policy
    /// expects one.
    pub fn verify_post_save(self, assembly_path: &Path) -> Result<()> {
        let symbol_file = Self::symbol_file_path(assembly_path);
        let present = symbol_file.is_file();
        if self.expects_symbol_file() && !present {
            return Err(symbol_desync_risk(format!(
                "symbol file '{}' disappeared during save",
                symbol_file.display()
            )));
        }
        Ok(())
    }
}
