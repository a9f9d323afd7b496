//! Bulk inversion edits
//!
//! Caller-side edits that re-resolve the progression and pin new inversion
//! overrides. None of them touch the input slice: each returns a fresh
//! vector where chords that did not change are plain clones, plus the list
//! of indices that did, so the caller can skip re-rendering on no-ops.

use serde::{Deserialize, Serialize};

use crate::harmony::IntervalSource;
use crate::models::{ChordConfig, Inversion, ResolvedChordInversion};

use super::navigator::{step_inversion_pitch, StepDirection};
use super::resolver::{resolve_inversion_chain_with, ResolverSettings};

/// Result of a bulk edit
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BulkEdit {
    pub chords: Vec<ChordConfig>,
    /// Indices whose inversion override changed
    pub changed: Vec<usize>,
}

impl BulkEdit {
    fn unchanged(chords: &[ChordConfig]) -> Self {
        Self { chords: chords.to_vec(), changed: Vec::new() }
    }

    pub fn is_noop(&self) -> bool {
        self.changed.is_empty()
    }
}

/// Walk `steps` rotations from a resolved position
fn walk<S: IntervalSource + ?Sized>(
    source: &S,
    chord_name: &str,
    from: ResolvedChordInversion,
    direction: StepDirection,
    steps: usize,
) -> Inversion {
    let mut current = from;
    for _ in 0..steps {
        current = step_inversion_pitch(source, chord_name, current.pitch, direction, current.inversion);
    }
    current.inversion
}

fn step_count(amount: i32) -> usize {
    amount.unsigned_abs().max(1) as usize
}

/// Step one chord's bass by `direction` rotations (sign gives the direction)
///
/// The chord is pinned to the inversion it lands on, unless that is the
/// inversion it already resolves to.
pub fn nudge_chord<S: IntervalSource + ?Sized>(
    source: &S,
    chords: &[ChordConfig],
    settings: &ResolverSettings,
    index: usize,
    direction: i32,
) -> BulkEdit {
    let resolved = resolve_inversion_chain_with(source, chords, settings);
    let (Some(chord), Some(&current)) = (chords.get(index), resolved.get(index)) else {
        return BulkEdit::unchanged(chords);
    };

    let target = walk(source, &chord.name, current, StepDirection::from_sign(direction), step_count(direction));
    if target == current.inversion {
        return BulkEdit::unchanged(chords);
    }

    log::debug!("nudge #{} {}: {:?} -> {:?}", index, chord.name, current.inversion, target);
    let mut edited = chords.to_vec();
    edited[index].inversion = Some(target);
    BulkEdit { chords: edited, changed: vec![index] }
}

/// Step every chord by `delta` rotations and pin the results
///
/// A zero delta is a no-op.
pub fn shift_all_inversions<S: IntervalSource + ?Sized>(
    source: &S,
    chords: &[ChordConfig],
    settings: &ResolverSettings,
    delta: i32,
) -> BulkEdit {
    if delta == 0 {
        return BulkEdit::unchanged(chords);
    }

    let resolved = resolve_inversion_chain_with(source, chords, settings);
    let direction = StepDirection::from_sign(delta);
    let steps = step_count(delta);

    let mut changed = Vec::new();
    let edited = chords
        .iter()
        .zip(&resolved)
        .enumerate()
        .map(|(i, (chord, &current))| {
            let target = walk(source, &chord.name, current, direction, steps);
            if chord.inversion == Some(target) {
                return chord.clone();
            }
            changed.push(i);
            ChordConfig { inversion: Some(target), ..chord.clone() }
        })
        .collect();

    BulkEdit { chords: edited, changed }
}

/// Drop every override, re-resolve automatically, and pin what comes out
pub fn recalculate_inversions<S: IntervalSource + ?Sized>(
    source: &S,
    chords: &[ChordConfig],
    settings: &ResolverSettings,
) -> BulkEdit {
    let cleared: Vec<ChordConfig> = chords
        .iter()
        .map(|chord| ChordConfig { inversion: None, ..chord.clone() })
        .collect();
    let resolved = resolve_inversion_chain_with(source, &cleared, settings);

    let mut changed = Vec::new();
    let edited = chords
        .iter()
        .zip(&resolved)
        .enumerate()
        .map(|(i, (chord, r))| {
            if chord.inversion == Some(r.inversion) {
                return chord.clone();
            }
            changed.push(i);
            ChordConfig { inversion: Some(r.inversion), ..chord.clone() }
        })
        .collect();

    BulkEdit { chords: edited, changed }
}
