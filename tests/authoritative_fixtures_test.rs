//! Agreement with the authoritative engine
//!
//! The fixtures hold results recorded from the out-of-process engine. The
//! local engine must reproduce every inversion and pitch exactly.

use std::path::Path;

use montuno_wasm::renderers::{compare_with_authority, AuthoritativeEngine, RecordedAuthority};
use montuno_wasm::{EngineConfig, Inversion, MontunoEngine, ResolvedChordInversion};

fn load_authority() -> RecordedAuthority {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/authoritative_inversions.json");
    let json = std::fs::read_to_string(&path).expect("fixture file should be readable");
    RecordedAuthority::from_json(&json).expect("fixture file should parse")
}

#[test]
fn test_local_engine_matches_recorded_results() {
    let authority = load_authority();
    assert!(!authority.cases.is_empty());

    let engine = MontunoEngine::default();
    for case in &authority.cases {
        let response = engine.resolve_request(&case.request).unwrap();
        let divergences = compare_with_authority(&case.request, &response.resolved, &authority).unwrap();
        assert!(divergences.is_empty(), "{}: {:?}", case.name, divergences);
        assert_eq!(response.layouts.len(), case.request.chords.len());
    }
}

#[test]
fn test_agreement_does_not_depend_on_the_cache() {
    let authority = load_authority();
    let engine = MontunoEngine::new(EngineConfig { cache_intervals: false, ..EngineConfig::default() });
    for case in &authority.cases {
        let local = engine.resolve_with_default(&case.request.chords, case.request.default_inversion);
        assert_eq!(local, authority.resolve(&case.request).unwrap(), "{}", case.name);
    }
}

#[test]
fn test_tampered_result_is_reported() {
    let mut authority = load_authority();
    let case = &mut authority.cases[0];
    case.expected[1] = ResolvedChordInversion::new(Inversion::Third, 35);
    let request = case.request.clone();

    let local = MontunoEngine::default().resolve(&request.chords);
    let divergences = compare_with_authority(&request, &local, &authority).unwrap();
    assert_eq!(divergences.len(), 1);
    assert_eq!(divergences[0].index, 1);
    assert_eq!(divergences[0].chord, "G7");
    assert_eq!(divergences[0].local, Some(ResolvedChordInversion::new(Inversion::Fifth, 38)));
}
