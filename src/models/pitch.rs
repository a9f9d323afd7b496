//! Pitch classes, note names and root-symbol parsing
//!
//! Pitches are MIDI note numbers (`i32`, 60 = C4). Pitch classes are the
//! pitch modulo one octave, 0 = C.

/// Note identity modulo one octave (0-11)
pub type PitchClass = u8;

pub const SHARP_NAMES: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];
pub const FLAT_NAMES: [&str; 12] = ["C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B"];

/// Which 12-name alphabet to spell pitch classes with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spelling {
    Sharps,
    Flats,
}

/// Reduce any pitch to its pitch class
pub fn pitch_class(pitch: i32) -> PitchClass {
    pitch.rem_euclid(12) as PitchClass
}

/// Spell a pitch class with the given alphabet
pub fn note_name(pc: PitchClass, spelling: Spelling) -> &'static str {
    let idx = (pc % 12) as usize;
    match spelling {
        Spelling::Sharps => SHARP_NAMES[idx],
        Spelling::Flats => FLAT_NAMES[idx],
    }
}

/// Extract the root symbol at the start of a chord name
///
/// The root is a letter A-G (either case) optionally followed by `#` or `b`.
///
/// Examples:
///   "Cmaj7"   → Some("C")
///   "Bb7(b9)" → Some("Bb")
///   "f#m7"    → Some("f#")
///   "Xm"      → None
pub fn root_symbol(chord_name: &str) -> Option<&str> {
    let mut chars = chord_name.char_indices();
    let (_, letter) = chars.next()?;
    if !matches!(letter.to_ascii_uppercase(), 'A'..='G') {
        return None;
    }
    match chars.next() {
        Some((_, '#')) | Some((_, 'b')) => Some(&chord_name[..2]),
        _ => Some(&chord_name[..1]),
    }
}

/// Pitch class of a root symbol such as "C", "F#", "Bb", "Cb"
pub fn root_pitch_class(symbol: &str) -> Option<PitchClass> {
    let mut chars = symbol.chars();
    let base: i32 = match chars.next()?.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };
    let alter = match chars.next() {
        None => 0,
        Some('#') => 1,
        Some('b') => -1,
        Some(_) => return None,
    };
    Some(pitch_class(base + alter))
}

/// Root pitch class of a chord name, None when no root letter is present
pub fn chord_root_pitch_class(chord_name: &str) -> Option<PitchClass> {
    root_symbol(chord_name).and_then(root_pitch_class)
}

/// Format a MIDI note number as name + octave (C4 = 60)
pub fn format_midi_note(midi: i32) -> String {
    let octave = midi.div_euclid(12) - 1;
    format!("{}{}", note_name(pitch_class(midi), Spelling::Sharps), octave)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_symbol() {
        assert_eq!(root_symbol("Cmaj7"), Some("C"));
        assert_eq!(root_symbol("Bb7(b9)"), Some("Bb"));
        assert_eq!(root_symbol("F#m7"), Some("F#"));
        assert_eq!(root_symbol("d"), Some("d"));
        assert_eq!(root_symbol("Hm"), None);
        assert_eq!(root_symbol(""), None);
        assert_eq!(root_symbol("∆7"), None);
    }

    #[test]
    fn test_root_pitch_class() {
        assert_eq!(root_pitch_class("C"), Some(0));
        assert_eq!(root_pitch_class("Db"), Some(1));
        assert_eq!(root_pitch_class("f#"), Some(6));
        assert_eq!(root_pitch_class("Cb"), Some(11));
        assert_eq!(root_pitch_class("B#"), Some(0));
        assert_eq!(root_pitch_class("Bb"), Some(10));
    }

    #[test]
    fn test_format_midi_note() {
        assert_eq!(format_midi_note(62), "D4");
        assert_eq!(format_midi_note(60), "C4");
        assert_eq!(format_midi_note(47), "B2");
        assert_eq!(format_midi_note(0), "C-1");
    }

    #[test]
    fn test_pitch_class_negative() {
        assert_eq!(pitch_class(-1), 11);
        assert_eq!(pitch_class(38), 2);
    }
}
