//! Chord interval detection
//!
//! Maps a chord name to its root pitch class and an ordered interval list.
//! Quality detection is a prioritized table scanned top to bottom, first
//! match wins. The order is a contract: "Cm13" also contains "m", "Cmaj7"
//! also contains "maj", and so on, so reordering rows changes results.
//!
//! Detection never fails. A suffix matching no row is a plain major triad,
//! and a missing root letter is reported as `root: None` for the caller to
//! decide about.

use crate::models::pitch::{chord_root_pitch_class, pitch_class, root_symbol};
use crate::models::{Inversion, PitchClass};

/// Default interval list when no quality row matches
pub const MAJOR_TRIAD: &[u8] = &[0, 4, 7];

/// One row of the quality table
#[derive(Debug)]
pub struct QualityRule {
    /// Short label for logs and tests
    pub label: &'static str,
    /// Substrings (matched against the suffix, case-insensitively for ASCII)
    pub markers: &'static [&'static str],
    pub intervals: &'static [u8],
}

impl QualityRule {
    fn matches(&self, suffix: &str, lowered: &str) -> bool {
        self.markers
            .iter()
            .any(|marker| lowered.contains(marker) || suffix.contains(marker))
    }
}

/// Quality table, most specific first
pub const QUALITY_RULES: &[QualityRule] = &[
    QualityRule { label: "maj13", markers: &["∆13", "Δ13", "maj13"], intervals: &[0, 4, 7, 11, 21] },
    QualityRule { label: "maj11", markers: &["∆11", "Δ11", "maj11"], intervals: &[0, 4, 7, 11, 17] },
    QualityRule { label: "maj9", markers: &["∆9", "Δ9", "maj9"], intervals: &[0, 4, 7, 11, 14] },
    QualityRule { label: "m13", markers: &["m13"], intervals: &[0, 3, 7, 10, 21] },
    QualityRule { label: "m11", markers: &["m11"], intervals: &[0, 3, 7, 10, 17] },
    QualityRule { label: "m9", markers: &["m9"], intervals: &[0, 3, 7, 10, 14] },
    QualityRule { label: "sus2", markers: &["sus2"], intervals: &[0, 2, 7] },
    QualityRule { label: "sus4", markers: &["sus4"], intervals: &[0, 5, 7] },
    QualityRule { label: "dim7", markers: &["dim7", "º7", "°7"], intervals: &[0, 3, 6, 9] },
    QualityRule { label: "dim", markers: &["dim", "º", "°"], intervals: &[0, 3, 6] },
    QualityRule { label: "aug", markers: &["aug", "+"], intervals: &[0, 4, 8] },
    QualityRule { label: "maj7", markers: &["maj7", "ma7", "∆", "Δ"], intervals: &[0, 4, 7, 11] },
    QualityRule { label: "maj", markers: &["maj"], intervals: &[0, 4, 7] },
    QualityRule { label: "m7b5", markers: &["m7b5", "m7(b5)", "ø"], intervals: &[0, 3, 6, 10] },
    QualityRule { label: "m7", markers: &["m7"], intervals: &[0, 3, 7, 10] },
    QualityRule { label: "m", markers: &["m"], intervals: &[0, 3, 7] },
    QualityRule { label: "dom13", markers: &["13"], intervals: &[0, 4, 7, 10, 21] },
    QualityRule { label: "dom11", markers: &["11"], intervals: &[0, 4, 7, 10, 17] },
    QualityRule { label: "dom9", markers: &["9"], intervals: &[0, 4, 7, 10, 14] },
    QualityRule { label: "dom7", markers: &["7"], intervals: &[0, 4, 7, 10] },
];

/// Root and interval list of one chord name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordIntervals {
    /// Root pitch class, None when the name has no root letter
    pub root: Option<PitchClass>,
    /// Label of the matched quality row ("major" for the fallback)
    pub quality: &'static str,
    pub intervals: &'static [u8],
}

impl ChordIntervals {
    /// Root pitch class, C when the name has none
    pub fn root_or_c(&self) -> PitchClass {
        self.root.unwrap_or(0)
    }

    /// Semitones above the root for the chord tone an inversion names
    ///
    /// Chords with fewer tones fall back to 4 / 7 / 10 for third / fifth / seventh.
    pub fn interval_for(&self, inversion: Inversion) -> u8 {
        inversion
            .interval_index()
            .and_then(|idx| self.intervals.get(idx).copied())
            .unwrap_or_else(|| inversion.fallback_interval())
    }

    /// Pitch class placed in the bass by an inversion
    pub fn pitch_class_for(&self, inversion: Inversion) -> PitchClass {
        pitch_class(self.root_or_c() as i32 + self.interval_for(inversion) as i32)
    }

    /// Distinct pitch classes of every listed interval, in list order
    pub fn unique_pitch_classes(&self) -> Vec<PitchClass> {
        let root = self.root_or_c() as i32;
        let mut out: Vec<PitchClass> = Vec::with_capacity(self.intervals.len());
        for &interval in self.intervals {
            let pc = pitch_class(root + interval as i32);
            if !out.contains(&pc) {
                out.push(pc);
            }
        }
        out
    }
}

/// Suffix of a chord name: everything after the root symbol
pub fn chord_suffix(chord_name: &str) -> &str {
    match root_symbol(chord_name) {
        Some(root) => &chord_name[root.len()..],
        None => chord_name,
    }
}

/// First quality row matching the suffix, None for the major-triad fallback
pub fn match_quality(suffix: &str) -> Option<&'static QualityRule> {
    let lowered = suffix.to_lowercase();
    QUALITY_RULES.iter().find(|rule| rule.matches(suffix, &lowered))
}

/// Detect the root pitch class and interval list of a chord name
pub fn detect_intervals(chord_name: &str) -> ChordIntervals {
    let root = chord_root_pitch_class(chord_name);
    if root.is_none() {
        log::warn!("chord '{}' has no recognizable root, assuming C", chord_name);
    }

    let (quality, intervals) = match match_quality(chord_suffix(chord_name)) {
        Some(rule) => (rule.label, rule.intervals),
        None => ("major", MAJOR_TRIAD),
    };

    ChordIntervals { root, quality, intervals }
}
