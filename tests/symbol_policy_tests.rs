//! Symbol policy matrix tests
//!
//! The five debug symbol policies, exercised through the embed step the way
//! a build host would drive them: derive the policy from build properties,
//! embed, honor the save plan, then check the symbol artifacts are exactly
//! where the policy says they should be.

mod common;

use resfold::{DebugSymbolPolicy, EmbedRequest, InMemoryModule, operations};

/// (debug type property, expects a separate symbol file)
const POLICY_MATRIX: &[(&str, bool)] = &[
    ("none", false),
    ("full", true),
    ("pdbonly", true),
    ("embedded", false),
    ("portable", true),
];

#[test]
fn test_embedding_under_each_policy_keeps_symbols_consistent() {
    for &(debug_type, has_symbol_file) in POLICY_MATRIX {
        let build = common::TestBuildDir::new();
        let assembly = build.create_assembly("App.exe");
        build.add_satellite("de", "App");
        build.add_satellite("pl", "App");
        if has_symbol_file {
            build.add_symbol_file("App");
        }

        let policy = DebugSymbolPolicy::from_build_config(true, debug_type).unwrap();

        // "embedded" requires a save pipeline that re-attaches the stream
        let mut module = if policy == DebugSymbolPolicy::Embedded {
            InMemoryModule::with_embedded_symbol_support()
        } else {
            InMemoryModule::new()
        };

        let outcome = operations::embed::run(
            &mut module,
            &EmbedRequest {
                assembly_path: assembly.clone(),
                policy,
            },
        )
        .unwrap_or_else(|e| panic!("embed failed under '{debug_type}': {e}"));

        assert_eq!(outcome.ledger.to_delimited(), "de;pl", "{debug_type}");
        let plan = outcome.save_plan.expect("satellites were embedded");
        assert_eq!(plan.symbol_file.is_some(), has_symbol_file, "{debug_type}");
        assert_eq!(
            plan.reattach_embedded,
            policy == DebugSymbolPolicy::Embedded,
            "{debug_type}"
        );

        // the separate symbol file, when expected, was left untouched
        policy
            .verify_post_save(&assembly)
            .unwrap_or_else(|e| panic!("post-save check failed under '{debug_type}': {e}"));
        assert_eq!(build.file_exists("App.pdb"), has_symbol_file, "{debug_type}");
    }
}

#[test]
fn test_debug_symbols_disabled_overrides_debug_type() {
    let build = common::TestBuildDir::new();
    let assembly = build.create_assembly("App.exe");
    build.add_satellite("de", "App");
    // no pdb on disk; would be fatal under Full, fine under None

    let policy = DebugSymbolPolicy::from_build_config(false, "full").unwrap();
    assert_eq!(policy, DebugSymbolPolicy::None);

    let mut module = InMemoryModule::new();
    let outcome = operations::embed::run(
        &mut module,
        &EmbedRequest {
            assembly_path: assembly,
            policy,
        },
    )
    .unwrap();
    assert!(!outcome.save_plan.unwrap().write_symbols);
}

#[test]
fn test_embedded_policy_fails_on_symbol_dropping_writer() {
    let build = common::TestBuildDir::new();
    let assembly = build.create_assembly("App.exe");
    build.add_satellite("de", "App");

    let mut module = InMemoryModule::new(); // drops embedded symbols on save
    let result = operations::embed::run(
        &mut module,
        &EmbedRequest {
            assembly_path: assembly,
            policy: DebugSymbolPolicy::Embedded,
        },
    );

    assert!(matches!(
        result,
        Err(resfold::ResfoldError::SymbolDesyncRisk { .. })
    ));
}

#[test]
fn test_missing_pdb_under_file_policy_fails_before_embedding() {
    let build = common::TestBuildDir::new();
    let assembly = build.create_assembly("App.exe");
    build.add_satellite("de", "App");
    // App.pdb deliberately absent

    let mut module = InMemoryModule::new();
    let result = operations::embed::run(
        &mut module,
        &EmbedRequest {
            assembly_path: assembly,
            policy: DebugSymbolPolicy::Portable,
        },
    );

    assert!(matches!(
        result,
        Err(resfold::ResfoldError::SymbolDesyncRisk { .. })
    ));
    assert_eq!(module.resource_count(), 0);
}
