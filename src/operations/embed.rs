//! Embed step: discovery → naming → symbol plan → embedding → ledger
//!
//! The module itself is loaded and saved by the host's binary rewriter; this
//! step borrows it, folds every discovered satellite into its resource table
//! and hands back the ledger plus the save plan the writer must honor.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::discovery::discover;
use crate::embedder::{ResourceInfo, embed};
use crate::error::{Result, assembly_not_found};
use crate::ledger::EmbeddingLedger;
use crate::module::ResourceModule;
use crate::naming::{assembly_base_name, manifest_resource_name};
use crate::symbols::{DebugSymbolPolicy, SavePlan};

/// Inputs of one embed step invocation
#[derive(Debug, Clone)]
pub struct EmbedRequest {
    /// Primary assembly whose satellites are folded in
    pub assembly_path: PathBuf,
    /// Symbol policy derived from the build configuration
    pub policy: DebugSymbolPolicy,
}

/// Outputs of one embed step invocation
#[derive(Debug, Clone)]
pub struct EmbedOutcome {
    /// Cultures embedded in this run; serialize with
    /// [`EmbeddingLedger::to_delimited`] and persist as step output
    pub ledger: EmbeddingLedger,
    /// Save instructions for the external writer; `None` when nothing was
    /// embedded and the module must not be rewritten at all
    pub save_plan: Option<SavePlan>,
}

/// Run the embed step against a borrowed module
///
/// On any failure the module may hold a partial set of the new resources;
/// the caller must discard it instead of saving. Zero discovered satellites
/// is success with an empty ledger — an unlocalized project is normal.
pub fn run(module: &mut dyn ResourceModule, request: &EmbedRequest) -> Result<EmbedOutcome> {
    let assembly_path = resolve_assembly_path(&request.assembly_path)?;
    let base_name = assembly_base_name(&assembly_path)
        .map(ToString::to_string)
        .ok_or_else(|| assembly_not_found(assembly_path.display().to_string()))?;

    let satellites = discover(&assembly_path)?;
    if satellites.is_empty() {
        info!(assembly = %assembly_path.display(), "no culture satellites found, nothing to embed");
        return Ok(EmbedOutcome {
            ledger: EmbeddingLedger::default(),
            save_plan: None,
        });
    }

    // Resolve the symbol plan before mutating anything: a desync risk must
    // abort the operation while the module is still pristine.
    let save_plan = request.policy.plan_save(module, &assembly_path)?;

    let resources: Vec<ResourceInfo> = satellites
        .iter()
        .map(|sat| {
            ResourceInfo::new(
                sat.path.clone(),
                manifest_resource_name(&base_name, &sat.culture),
            )
        })
        .collect();

    embed(module, &resources)?;

    let ledger = EmbeddingLedger::from_cultures(satellites.iter().map(|s| s.culture.clone()));
    info!(
        assembly = %assembly_path.display(),
        cultures = %ledger,
        "embedded {} culture satellite(s)",
        ledger.len()
    );

    Ok(EmbedOutcome {
        ledger,
        save_plan: Some(save_plan),
    })
}

/// Canonicalize the assembly path, without UNC prefixes on Windows
fn resolve_assembly_path(path: &Path) -> Result<PathBuf> {
    if !path.is_file() {
        return Err(assembly_not_found(path.display().to_string()));
    }
    dunce::canonicalize(path).map_err(|_| assembly_not_found(path.display().to_string()))
}
