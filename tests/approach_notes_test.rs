use montuno_wasm::harmony::{derive_approach_notes, ApproachNotes, DirectDetection};
use montuno_wasm::MontunoEngine;

fn notes(name: &str) -> ApproachNotes {
    derive_approach_notes(&DirectDetection, name)
}

#[test]
fn test_ninth_follows_suffix_alteration() {
    assert_eq!(notes("Cmaj7")[0], "D");
    assert_eq!(notes("C7(b9)")[0], "Db");
    assert_eq!(notes("C7(#9)")[0], "D#");
    assert_eq!(notes("C7+9")[0], "D#");
}

#[test]
fn test_dominant_and_minor_chords() {
    assert_eq!(notes("G7").0, ["A", "C#", "E", "F"]);
    assert_eq!(notes("Dm7").0, ["E", "G", "B", "C"]);
}

#[test]
fn test_flat_spelling() {
    assert_eq!(notes("Ebmaj7").0, ["F", "A", "C", "D"]);
    // b13 in the suffix switches to flats even on a natural root
    assert_eq!(notes("G7b13").fourth(), "Db");
    assert_eq!(notes("A7b9").0, ["Bb", "Eb", "Gb", "G"]);
}

#[test]
fn test_half_diminished() {
    // b5 in the suffix spells the ninth as Db
    assert_eq!(notes("Bm7b5").0, ["Db", "E", "G", "A"]);
}

#[test]
fn test_names_do_not_depend_on_cache() {
    let engine = MontunoEngine::default();
    for name in ["Cmaj7", "F#m7", "Bb7(b9)", "Ddim7", "Eaug"] {
        assert_eq!(engine.approach_notes(name), notes(name));
    }
}

#[test]
fn test_marker_override() {
    let overridden = notes("Cmaj7").with_marker("[Db Ab]");
    assert_eq!(overridden.0, ["Db", "F#", "Ab", "B"]);
}
