//! Inversion resolver
//!
//! Walks a chord sequence left to right and picks, per chord, an inversion
//! and an absolute bass pitch. The only state carried between chords is the
//! previous bass pitch, threaded explicitly through `ChainState`.
//!
//! Per chord:
//! 1. Take the chord's explicit inversion, else the sequence default
//! 2. Compute its base pitch plus the register offset
//! 3. Automatic chords are leap-limited against the previous bass;
//!    explicit overrides keep their base pitch untouched
//! 4. Automatic chords after the first run a nearest-chord-tone search
//!    around the previous bass and switch to the inversion it lands on
//!
//! Overrides are never leap-limited. A manually chosen inversion may jump
//! far from its neighbour.

use crate::harmony::{ChordIntervals, IntervalSource};
use crate::models::pitch::pitch_class;
use crate::models::{ChordConfig, Inversion, PitchClass, ResolvedChordInversion, INVERSION_ORDER};

use super::base_pitch::{base_pitch_with_offset, limit_leap_by, MAX_LEAP};

/// Sequence-wide resolver settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverSettings {
    pub default_inversion: Inversion,
    pub max_leap: i32,
}

impl ResolverSettings {
    pub fn new(default_inversion: Inversion) -> Self {
        Self { default_inversion, max_leap: MAX_LEAP }
    }
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self::new(Inversion::Root)
    }
}

/// Accumulator threaded between chords
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChainState {
    /// Bass pitch emitted for the previous chord
    pub previous_bass: Option<i32>,
    /// Index of the next chord to resolve
    pub position: usize,
}

impl ChainState {
    /// State for resolving a chain that continues after `previous_bass`
    pub fn after(previous_bass: i32, position: usize) -> Self {
        Self { previous_bass: Some(previous_bass), position }
    }
}

/// Absolute pitch of pitch class `pc` closest to `target`
///
/// Ties (a tritone either way) go to the lower pitch.
pub fn nearest_pitch_of_class(pc: PitchClass, target: i32) -> i32 {
    let below = (target - pc as i32).rem_euclid(12);
    if below <= 12 - below {
        target - below
    } else {
        target - below + 12
    }
}

/// Chord tone closest to `target`, as (pitch class, absolute pitch)
///
/// Candidates are every distinct pitch class of the chord's interval list,
/// extensions included. Ties in distance go to the lower pitch.
pub fn nearest_chord_tone(detected: &ChordIntervals, target: i32) -> Option<(PitchClass, i32)> {
    detected
        .unique_pitch_classes()
        .into_iter()
        .map(|pc| (pc, nearest_pitch_of_class(pc, target)))
        .min_by_key(|&(_, pitch)| ((pitch - target).abs(), pitch))
}

/// First inversion in canonical order whose bass pitch class is `pc`
pub fn inversion_for_pitch_class(detected: &ChordIntervals, pc: PitchClass) -> Option<Inversion> {
    INVERSION_ORDER
        .iter()
        .copied()
        .find(|&inv| detected.pitch_class_for(inv) == pc)
}

/// Resolve a single chord given the accumulator; returns the next accumulator
pub fn resolve_chord<S: IntervalSource + ?Sized>(
    source: &S,
    chord: &ChordConfig,
    state: ChainState,
    settings: &ResolverSettings,
) -> (ResolvedChordInversion, ChainState) {
    let offset = chord.register_offset;
    let mut inversion = chord.inversion.unwrap_or(settings.default_inversion);
    let base = base_pitch_with_offset(source, &chord.name, inversion, offset);

    let mut pitch = match chord.inversion {
        Some(_) => base,
        None => limit_leap_by(state.previous_bass, base, settings.max_leap),
    };

    if let (None, true, Some(prev)) = (chord.inversion, state.position > 0, state.previous_bass) {
        let detected = source.intervals(&chord.name);
        if let Some((pc, nearest)) = nearest_chord_tone(&detected, prev) {
            match inversion_for_pitch_class(&detected, pc) {
                Some(found) => inversion = found,
                None => log::debug!(
                    "{}: nearest tone {} is an extension, keeping {:?}",
                    chord.name,
                    pc,
                    inversion
                ),
            }
            pitch = limit_leap_by(Some(prev), nearest + offset * 12, settings.max_leap);
        }
    }

    log::debug!(
        "resolved #{} {} -> {:?} at {} (prev {:?})",
        state.position,
        chord.name,
        inversion,
        pitch,
        state.previous_bass
    );

    let next = ChainState {
        previous_bass: Some(pitch),
        position: state.position + 1,
    };
    (ResolvedChordInversion::new(inversion, pitch), next)
}

/// Resolve a whole chord sequence with the given lookup source and settings
///
/// Always returns a new vector aligned index-for-index with `chords`.
pub fn resolve_inversion_chain_with<S: IntervalSource + ?Sized>(
    source: &S,
    chords: &[ChordConfig],
    settings: &ResolverSettings,
) -> Vec<ResolvedChordInversion> {
    let mut resolved = Vec::with_capacity(chords.len());
    let mut state = ChainState::default();
    for chord in chords {
        let (result, next) = resolve_chord(source, chord, state, settings);
        resolved.push(result);
        state = next;
    }
    resolved
}

/// Resolve a chord sequence with uncached detection and the standard leap bound
pub fn resolve_inversion_chain(chords: &[ChordConfig], default_inversion: Inversion) -> Vec<ResolvedChordInversion> {
    resolve_inversion_chain_with(
        &crate::harmony::DirectDetection,
        chords,
        &ResolverSettings::new(default_inversion),
    )
}

/// Every inversion of a chord, leap-limited against `previous_bass`
///
/// Sorted by pitch, then by canonical inversion order.
pub fn list_bass_options<S: IntervalSource + ?Sized>(
    source: &S,
    chord_name: &str,
    previous_bass: Option<i32>,
    max_leap: i32,
) -> Vec<ResolvedChordInversion> {
    let mut options: Vec<ResolvedChordInversion> = INVERSION_ORDER
        .iter()
        .map(|&inv| {
            let pitch = limit_leap_by(previous_bass, base_pitch_with_offset(source, chord_name, inv, 0), max_leap);
            ResolvedChordInversion::new(inv, pitch)
        })
        .collect();
    options.sort_by_key(|o| (o.pitch, o.inversion.rank()));
    options
}

/// Pitch class of the bass a resolved chord should carry
pub fn expected_bass_class<S: IntervalSource + ?Sized>(source: &S, chord_name: &str, inversion: Inversion) -> PitchClass {
    source.intervals(chord_name).pitch_class_for(inversion)
}

/// True when the resolved pitch agrees with its inversion's pitch class
pub fn is_consistent<S: IntervalSource + ?Sized>(source: &S, chord_name: &str, resolved: &ResolvedChordInversion) -> bool {
    pitch_class(resolved.pitch) == expected_bass_class(source, chord_name, resolved.inversion)
}
