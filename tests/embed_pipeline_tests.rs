//! Embed step pipeline tests
//!
//! Drive the library pipeline end to end against a real build output tree:
//! discovery, naming, embedding into an in-memory module, the reported
//! ledger, and the independent cleanup step consuming that ledger.

mod common;

use resfold::{
    DebugSymbolPolicy, EmbedRequest, EmbeddingLedger, InMemoryModule, ResourceModule, operations,
};

#[test]
fn test_embed_then_cleanup_round_trip() {
    let build = common::TestBuildDir::new();
    let assembly = build.create_assembly("App.exe");
    build.add_satellite("de", "App");
    build.add_satellite("fr", "App");

    // embed step
    let mut module = InMemoryModule::new();
    let outcome = operations::embed::run(
        &mut module,
        &EmbedRequest {
            assembly_path: assembly.clone(),
            policy: DebugSymbolPolicy::None,
        },
    )
    .expect("embed step failed");

    assert_eq!(module.resource_count(), 2);
    assert_eq!(
        module.resource("App.de.resources.dll").unwrap().data,
        b"satellite de"
    );
    assert_eq!(
        module.resource("App.fr.resources.dll").unwrap().data,
        b"satellite fr"
    );

    // the ledger string is what the host persists between the two steps
    let ledger_output = outcome.ledger.to_delimited();
    assert_eq!(ledger_output, "de;fr");
    assert_eq!(EmbeddingLedger::parse(&ledger_output), outcome.ledger);

    // cleanup step, fed the persisted string verbatim
    let report = operations::cleanup::run(&assembly, &ledger_output).expect("cleanup step failed");
    assert_eq!(report.deleted.len(), 2);
    assert!(report.failures.is_empty());

    assert!(!build.file_exists("de/App.resources.dll"));
    assert!(!build.file_exists("fr/App.resources.dll"));
    assert!(assembly.is_file());
}

#[test]
fn test_embedding_is_idempotent_across_runs() {
    let build = common::TestBuildDir::new();
    let assembly = build.create_assembly("App.exe");
    build.add_satellite("de", "App");
    build.add_satellite("de-DE", "App");

    let request = EmbedRequest {
        assembly_path: assembly,
        policy: DebugSymbolPolicy::None,
    };

    let mut module = InMemoryModule::new();
    let first = operations::embed::run(&mut module, &request).unwrap();
    let names_after_first = module.resource_names();

    let second = operations::embed::run(&mut module, &request).unwrap();
    let names_after_second = module.resource_names();

    assert_eq!(first.ledger, second.ledger);
    assert_eq!(names_after_first, names_after_second);
    assert_eq!(module.resource_count(), 2);
}

#[test]
fn test_fallback_chain_cultures_stay_distinct() {
    let build = common::TestBuildDir::new();
    let assembly = build.create_assembly("App.exe");
    build.add_satellite("de", "App");
    build.add_satellite("de-DE", "App");

    let mut module = InMemoryModule::new();
    let outcome = operations::embed::run(
        &mut module,
        &EmbedRequest {
            assembly_path: assembly,
            policy: DebugSymbolPolicy::None,
        },
    )
    .unwrap();

    // de and de-DE are separate fallback stages, each under its own name
    assert!(module.resource("App.de.resources.dll").is_some());
    assert!(module.resource("App.de-DE.resources.dll").is_some());
    assert_eq!(
        module.resource("App.de.resources.dll").unwrap().data,
        b"satellite de"
    );
    assert_eq!(
        module.resource("App.de-DE.resources.dll").unwrap().data,
        b"satellite de-DE"
    );
    assert!(outcome.ledger.contains("de"));
    assert!(outcome.ledger.contains("de-DE"));
}

#[test]
fn test_failed_embed_commits_nothing_from_the_batch_to_disk() {
    let build = common::TestBuildDir::new();
    let assembly = build.create_assembly("App.exe");
    build.add_satellite("de", "App");
    let fr = build.add_satellite("fr", "App");
    build.add_satellite("pl", "App");

    // fr vanishes between discovery and embed
    let satellites = resfold::discovery::discover(&assembly).unwrap();
    assert_eq!(satellites.len(), 3);
    let batch: Vec<resfold::ResourceInfo> = satellites
        .iter()
        .map(|sat| {
            resfold::ResourceInfo::new(
                sat.path.clone(),
                resfold::naming::manifest_resource_name("App", &sat.culture),
            )
        })
        .collect();
    std::fs::remove_file(&fr).unwrap();

    let mut module = InMemoryModule::new();
    let err = resfold::embedder::embed(&mut module, &batch).unwrap_err();

    // the call failed: whatever partially landed in the in-memory module,
    // the caller must not save it, and no ledger was produced
    assert!(matches!(
        err,
        resfold::ResfoldError::MissingSourceFile { .. }
    ));
    assert!(err.to_string().contains("App.resources.dll"));
}
