//! Step navigator
//!
//! Moves one chord's bass one inversion up or down from where it currently
//! is, without re-resolving the chain. Only root, third and fifth take part
//! in the rotation; a chord sitting on its seventh re-enters the cycle at
//! the first (stepping up) or last (stepping down) slot.

use serde::{Deserialize, Serialize};

use crate::harmony::IntervalSource;
use crate::models::{Inversion, PitchClass, ResolvedChordInversion, STEP_ROTATION};

use super::base_pitch::base_pitch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepDirection {
    Up,
    Down,
}

impl StepDirection {
    /// +1 (or any non-negative value) is up, negative is down
    pub fn from_sign(sign: i32) -> StepDirection {
        if sign >= 0 {
            StepDirection::Up
        } else {
            StepDirection::Down
        }
    }

    pub fn sign(self) -> i32 {
        match self {
            StepDirection::Up => 1,
            StepDirection::Down => -1,
        }
    }
}

/// Inversions of the rotation cycle, dropping slots that repeat a pitch class
fn rotation_cycle<S: IntervalSource + ?Sized>(source: &S, chord_name: &str) -> Vec<Inversion> {
    let detected = source.intervals(chord_name);
    let mut seen: Vec<PitchClass> = Vec::with_capacity(STEP_ROTATION.len());
    let mut cycle = Vec::with_capacity(STEP_ROTATION.len());
    for inversion in STEP_ROTATION {
        let pc = detected.pitch_class_for(inversion);
        if !seen.contains(&pc) {
            seen.push(pc);
            cycle.push(inversion);
        }
    }
    cycle
}

/// Move one rotation away from `current_inversion`
///
/// # Arguments
/// * `current_pitch` - Bass pitch the chord currently sounds at
/// * `direction` - Up or down
/// * `current_inversion` - Inversion the chord currently uses
///
/// # Returns
/// The target inversion and a pitch strictly above (up) or below (down)
/// `current_pitch`, in the register implied by the current pitch.
pub fn step_inversion_pitch<S: IntervalSource + ?Sized>(
    source: &S,
    chord_name: &str,
    current_pitch: i32,
    direction: StepDirection,
    current_inversion: Inversion,
) -> ResolvedChordInversion {
    let cycle = rotation_cycle(source, chord_name);
    let len = cycle.len();
    let start = cycle
        .iter()
        .position(|&inv| inv == current_inversion)
        .unwrap_or(match direction {
            StepDirection::Up => 0,
            StepDirection::Down => len - 1,
        });
    let target = match direction {
        StepDirection::Up => cycle[(start + 1) % len],
        StepDirection::Down => cycle[(start + len - 1) % len],
    };

    // Half an octave rounds up, as Math.round does
    let register_offset = (current_pitch - base_pitch(source, chord_name, current_inversion) + 6).div_euclid(12);
    let mut pitch = base_pitch(source, chord_name, target) + register_offset * 12;

    match direction {
        StepDirection::Up => {
            while pitch <= current_pitch {
                pitch += 12;
            }
        }
        StepDirection::Down => {
            while pitch >= current_pitch {
                pitch -= 12;
            }
        }
    }

    ResolvedChordInversion::new(target, pitch)
}

/// Apply `steps` single steps in a row, returning every intermediate result
pub fn step_repeatedly<S: IntervalSource + ?Sized>(
    source: &S,
    chord_name: &str,
    start: ResolvedChordInversion,
    direction: StepDirection,
    steps: usize,
) -> Vec<ResolvedChordInversion> {
    let mut current = start;
    let mut out = Vec::with_capacity(steps);
    for _ in 0..steps {
        current = step_inversion_pitch(source, chord_name, current.pitch, direction, current.inversion);
        out.push(current);
    }
    out
}
