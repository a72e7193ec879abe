//! Scan command implementation
//!
//! Shows the embedding plan for an assembly: which culture satellites were
//! found and the manifest resource names they would be stored under. This is
//! the debugging surface for "what would the embed step fold in".

use std::path::{Path, PathBuf};

use console::style;
use serde::Serialize;

use crate::cli::ScanArgs;
use crate::discovery::discover;
use crate::error::{ResfoldError, Result, assembly_not_found};
use crate::naming::{assembly_base_name, manifest_resource_name};

/// One planned embedding, in machine-readable form
#[derive(Debug, Serialize)]
struct PlanEntry {
    culture: String,
    satellite_path: PathBuf,
    resource_name: String,
}

#[derive(Debug, Serialize)]
struct ScanPlan {
    assembly: PathBuf,
    satellites: Vec<PlanEntry>,
}

/// Run scan command
pub fn run(args: ScanArgs) -> Result<()> {
    let plan = build_plan(&args.assembly)?;

    if args.json {
        let json = serde_json::to_string_pretty(&plan).map_err(|e| ResfoldError::IoError {
            message: e.to_string(),
        })?;
        println!("{json}");
        return Ok(());
    }

    if plan.satellites.is_empty() {
        println!(
            "No culture satellites found next to {}",
            style(plan.assembly.display()).cyan()
        );
        return Ok(());
    }

    println!(
        "{} culture satellite(s) for {}:",
        plan.satellites.len(),
        style(plan.assembly.display()).cyan()
    );
    for entry in &plan.satellites {
        println!(
            "  {}  {}  ->  {}",
            style(&entry.culture).green().bold(),
            entry.satellite_path.display(),
            style(&entry.resource_name).dim()
        );
    }

    Ok(())
}

fn build_plan(assembly: &Path) -> Result<ScanPlan> {
    if !assembly.is_file() {
        return Err(assembly_not_found(assembly.display().to_string()));
    }
    let base_name = assembly_base_name(assembly)
        .map(ToString::to_string)
        .ok_or_else(|| assembly_not_found(assembly.display().to_string()))?;

    let satellites = discover(assembly)?
        .into_iter()
        .map(|sat| PlanEntry {
            resource_name: manifest_resource_name(&base_name, &sat.culture),
            culture: sat.culture,
            satellite_path: sat.path,
        })
        .collect();

    Ok(ScanPlan {
        assembly: assembly.to_path_buf(),
        satellites,
    })
}
