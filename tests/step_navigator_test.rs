use montuno_wasm::harmony::DirectDetection;
use montuno_wasm::inversions::{step_inversion_pitch, step_repeatedly, StepDirection};
use montuno_wasm::{Inversion, MontunoEngine, ResolvedChordInversion};

#[test]
fn test_four_steps_up_from_root() {
    let start = ResolvedChordInversion::new(Inversion::Root, 48);
    let steps = step_repeatedly(&DirectDetection, "Cmaj7", start, StepDirection::Up, 4);
    let pitches: Vec<i32> = steps.iter().map(|s| s.pitch).collect();
    assert_eq!(pitches, vec![52, 55, 60, 64]);
    assert_eq!(steps[3].inversion, Inversion::Third);
}

#[test]
fn test_five_steps_up_from_fifth() {
    let start = ResolvedChordInversion::new(Inversion::Fifth, 52);
    let steps = step_repeatedly(&DirectDetection, "Am7", start, StepDirection::Up, 5);
    let pitches: Vec<i32> = steps.iter().map(|s| s.pitch).collect();
    assert_eq!(pitches, vec![57, 60, 64, 69, 72]);
}

#[test]
fn test_steps_down_mirror_steps_up() {
    let start = ResolvedChordInversion::new(Inversion::Root, 60);
    let steps = step_repeatedly(&DirectDetection, "Cmaj7", start, StepDirection::Down, 3);
    let pairs: Vec<(Inversion, i32)> = steps.iter().map(|s| (s.inversion, s.pitch)).collect();
    assert_eq!(
        pairs,
        vec![(Inversion::Fifth, 55), (Inversion::Third, 52), (Inversion::Root, 48)]
    );
}

#[test]
fn test_seventh_never_reached_by_stepping() {
    // Seventh is left out of the rotation even for seventh chords
    let start = ResolvedChordInversion::new(Inversion::Root, 43);
    for direction in [StepDirection::Up, StepDirection::Down] {
        let steps = step_repeatedly(&DirectDetection, "G7", start, direction, 12);
        assert!(steps.iter().all(|s| s.inversion != Inversion::Seventh));
    }
}

#[test]
fn test_stepping_off_a_seventh() {
    let up = step_inversion_pitch(&DirectDetection, "G7", 41, StepDirection::Up, Inversion::Seventh);
    assert_eq!(up, ResolvedChordInversion::new(Inversion::Third, 47));
    let down = step_inversion_pitch(&DirectDetection, "G7", 41, StepDirection::Down, Inversion::Seventh);
    assert_eq!(down, ResolvedChordInversion::new(Inversion::Third, 35));
}

#[test]
fn test_never_repeats_a_pitch() {
    for name in ["Cmaj7", "Dm7", "G7", "Bbsus2", "Ebsus4", "F#m7b5", "Abdim7", "Caug"] {
        for direction in [StepDirection::Up, StepDirection::Down] {
            let start = ResolvedChordInversion::new(Inversion::Third, 50);
            let steps = step_repeatedly(&DirectDetection, name, start, direction, 10);
            let mut seen = vec![start.pitch];
            for s in &steps {
                assert!(!seen.contains(&s.pitch), "{name} {direction:?} repeated {}", s.pitch);
                seen.push(s.pitch);
            }
        }
    }
}

#[test]
fn test_engine_step_uses_cache() {
    let engine = MontunoEngine::default();
    let r = engine.step("Cmaj7", 48, StepDirection::Up, Inversion::Root);
    assert_eq!(r, ResolvedChordInversion::new(Inversion::Third, 52));
    assert_eq!(engine.cached_chords(), 1);
}
