//! Voice layout builder
//!
//! Computes the absolute pitch of every voice role for one
//! (chord, inversion, harmonization) triple.
//!
//! # Algorithm
//! 1. Anchor the interval list three octaves above C (root pitch class + 36)
//! 2. Rotate left once per inversion rank; each rotation moves the lowest
//!    pitch up an octave to the end of the list
//! 3. The first four pitches become root / third / fifth / seventh
//! 4. "High" voices, tenth and thirteenth sit one octave above their base
//! 5. The harmonization style then moves individual voices

use crate::errors::{MontunoError, Result};
use crate::models::{HarmonizationStyle, Inversion, VoiceLayout};

use super::cache::IntervalSource;

/// Octave anchor for layouts: root pitch class + 36 (C2 = 36)
pub const LAYOUT_ANCHOR: i32 = 36;

/// Build the voice layout of a chord
///
/// # Arguments
/// * `source` - Interval lookup (cached or direct)
/// * `chord_name` - Chord symbol, e.g. "Cmaj7"
/// * `inversion` - Chord tone to place lowest
/// * `style` - Harmonization applied after the default layout
///
/// # Returns
/// The layout, or `UnrecognizedChord` when the name has no root letter
pub fn build_voice_layout<S: IntervalSource + ?Sized>(
    source: &S,
    chord_name: &str,
    inversion: Inversion,
    style: HarmonizationStyle,
) -> Result<VoiceLayout> {
    let detected = source.intervals(chord_name);
    let root_pc = detected
        .root
        .ok_or_else(|| MontunoError::UnrecognizedChord(chord_name.to_string()))?;
    let anchor = root_pc as i32 + LAYOUT_ANCHOR;

    let mut pitches: Vec<i32> = detected.intervals.iter().map(|&i| anchor + i as i32).collect();
    for _ in 0..inversion.rank() {
        if pitches.is_empty() {
            break;
        }
        let lowest = pitches.remove(0);
        pitches.push(lowest + 12);
    }

    let root = pitches.first().copied().unwrap_or(anchor);
    let third = pitches.get(1).copied().unwrap_or(anchor + 4);
    let fifth = pitches.get(2).copied().unwrap_or(anchor + 7);
    let seventh = pitches.get(3).copied();

    let mut layout = VoiceLayout {
        root,
        root_high: root + 12,
        third,
        third_high: third + 12,
        fifth,
        fifth_high: fifth + 12,
        seventh,
        seventh_high: seventh.map(|p| p + 12),
        tenth: third + 12,
        thirteenth: fifth + 12,
    };

    match style {
        HarmonizationStyle::Octaves => {}
        HarmonizationStyle::DoubleOctave => {
            layout.root -= 12;
        }
        HarmonizationStyle::Thirteenths => {
            layout.root_high += 12;
            layout.thirteenth = fifth + 19;
        }
        HarmonizationStyle::Tenths => {
            // The tenth keeps its place above the unlowered third
            layout.third = third - 12;
            layout.tenth = third + 12;
            layout.fifth_high = fifth + 12;
        }
    }

    Ok(layout)
}
