//! Approach-note derivation
//!
//! Each chord gets four ornamental note names, independent of inversion:
//! an upper neighbour near the 9th, a passing 4th/#11, a passing 6th/13th
//! and a 7th. They are names (pitch classes), not absolute pitches.

use serde::{Deserialize, Serialize};

use crate::models::pitch::{note_name, pitch_class, root_symbol};
use crate::models::Spelling;

use super::cache::IntervalSource;
use super::intervals::chord_suffix;

/// Natural approach notes used when a progression marker resets them
pub const DEFAULT_APPROACH_NOTES: [&str; 4] = ["D", "F", "A", "B"];

const MAJOR_SEVENTH_MARKERS: &[&str] = &["maj", "ma7", "∆", "Δ"];
const FLAT_EXTENSION_MARKERS: &[&str] = &["b9", "b5", "b13"];

/// Four approach-note names: ninth, fourth, sixth, seventh
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ApproachNotes(pub [String; 4]);

impl ApproachNotes {
    pub fn ninth(&self) -> &str {
        &self.0[0]
    }

    pub fn fourth(&self) -> &str {
        &self.0[1]
    }

    pub fn sixth(&self) -> &str {
        &self.0[2]
    }

    pub fn seventh(&self) -> &str {
        &self.0[3]
    }

    /// Apply a bracket marker such as `[Eb, A]`
    ///
    /// Each token replaces the slot its letter belongs to:
    /// C/D → ninth, E/F → fourth, G/A → sixth, B → seventh.
    /// Tokens that are not note names are ignored.
    pub fn with_marker(mut self, marker: &str) -> Self {
        let content = marker.trim().trim_start_matches('[').trim_end_matches(']');
        for token in content.split(|c: char| c.is_whitespace() || c == ',') {
            let Some(note) = normalize_note_token(token) else {
                continue;
            };
            if let Some(slot) = approach_slot(&note) {
                self.0[slot] = note;
            }
        }
        self
    }
}

impl Default for ApproachNotes {
    fn default() -> Self {
        ApproachNotes(DEFAULT_APPROACH_NOTES.map(str::to_string))
    }
}

impl std::ops::Index<usize> for ApproachNotes {
    type Output = String;

    fn index(&self, index: usize) -> &String {
        &self.0[index]
    }
}

fn normalize_note_token(token: &str) -> Option<String> {
    let symbol = root_symbol(token.trim())?;
    let mut chars = symbol.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    Some(format!("{}{}", letter, chars.as_str()))
}

fn approach_slot(note: &str) -> Option<usize> {
    match note.chars().next()? {
        'C' | 'D' => Some(0),
        'E' | 'F' => Some(1),
        'G' | 'A' => Some(2),
        'B' => Some(3),
        _ => None,
    }
}

/// Derive the approach notes of a chord
///
/// # Intervals
/// - ninth: 1 for `b9`, 3 for `#9`/`+9`, otherwise 2
/// - fourth: 5 over a minor third, otherwise 6 (#11)
/// - sixth: 8 over a diminished or augmented fifth, otherwise 9
/// - seventh: the chord's own seventh, else 11 for major-seventh markers, else 10
///
/// Names are spelled with flats when the root is flat or the suffix
/// mentions a flattened extension, otherwise with sharps.
pub fn derive_approach_notes<S: IntervalSource + ?Sized>(source: &S, chord_name: &str) -> ApproachNotes {
    let detected = source.intervals(chord_name);
    let root_pc = detected.root_or_c() as i32;
    let intervals = detected.intervals;
    let suffix = chord_suffix(chord_name).to_lowercase();

    let ninth = if suffix.contains("b9") {
        1
    } else if suffix.contains("#9") || suffix.contains("+9") {
        3
    } else {
        2
    };

    let root_interval = intervals.first().copied().unwrap_or(0) as i32;
    let third = intervals.get(1).copied().unwrap_or(4) as i32;
    let fifth = intervals.get(2).copied().unwrap_or(7) as i32;

    let fourth = if third - root_interval == 3 { 5 } else { 6 };
    let sixth = if matches!(fifth - root_interval, 6 | 8) { 8 } else { 9 };
    let seventh = match intervals.get(3) {
        Some(&interval) => interval as i32,
        None if MAJOR_SEVENTH_MARKERS.iter().any(|m| suffix.contains(m)) => 11,
        None => 10,
    };

    let flat_root = root_symbol(chord_name).is_some_and(|root| root.len() > 1 && root.ends_with('b'));
    let spelling = if flat_root || FLAT_EXTENSION_MARKERS.iter().any(|m| suffix.contains(m)) {
        Spelling::Flats
    } else {
        Spelling::Sharps
    };

    let name = |interval: i32| note_name(pitch_class(root_pc + interval), spelling).to_string();
    ApproachNotes([name(ninth), name(fourth), name(sixth), name(seventh)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harmony::cache::DirectDetection;

    fn notes(name: &str) -> ApproachNotes {
        derive_approach_notes(&DirectDetection, name)
    }

    #[test]
    fn test_ninth_sensitivity() {
        assert_eq!(notes("Cmaj7")[0], "D");
        assert_eq!(notes("C7(b9)")[0], "Db");
        assert_eq!(notes("C7(#9)")[0], "D#");
    }

    #[test]
    fn test_major_seventh_chord() {
        assert_eq!(notes("Cmaj7").0, ["D", "F#", "A", "B"]);
    }

    #[test]
    fn test_minor_chord_uses_natural_fourth() {
        let am7 = notes("Am7");
        assert_eq!(am7.fourth(), "D");
        assert_eq!(am7.sixth(), "F#");
        assert_eq!(am7.seventh(), "G");
    }

    #[test]
    fn test_altered_fifth_uses_flat_sixth() {
        assert_eq!(notes("Bm7b5").sixth(), "G");
        assert_eq!(notes("Caug").sixth(), "G#");
    }

    #[test]
    fn test_triad_seventh_fallbacks() {
        assert_eq!(notes("C").seventh(), "A#");
        assert_eq!(notes("Cmaj").seventh(), "B");
    }

    #[test]
    fn test_flat_spelling_from_root() {
        let bb7 = notes("Bb7");
        assert_eq!(bb7.0, ["C", "E", "G", "Ab"]);
    }

    #[test]
    fn test_marker_overrides_slots_by_letter() {
        let base = ApproachNotes::default();
        let updated = base.with_marker("[eb, G#]");
        assert_eq!(updated.0, ["D", "Eb", "G#", "B"]);
        assert_eq!(ApproachNotes::default().with_marker("[]"), ApproachNotes::default());
    }
}
