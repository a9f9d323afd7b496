//! Inversion base pitch and leap limiting
//!
//! The shared primitives of the resolver and the step navigator.

use crate::harmony::IntervalSource;
use crate::models::Inversion;

/// Octave the bass is anchored in before any smoothing (C2 = 36)
pub const BASS_ANCHOR: i32 = 36;

/// Largest allowed move between consecutive automatic bass notes (a minor sixth)
pub const MAX_LEAP: i32 = 8;

/// Unclamped bass pitch of a chord in a given inversion
///
/// Root position is `root + 36`; other inversions place the named chord tone
/// in the same octave: `((root + interval) mod 12) + 36`.
pub fn base_pitch<S: IntervalSource + ?Sized>(source: &S, chord_name: &str, inversion: Inversion) -> i32 {
    let detected = source.intervals(chord_name);
    let root = detected.root_or_c() as i32;
    match inversion {
        Inversion::Root => root + BASS_ANCHOR,
        other => (root + detected.interval_for(other) as i32).rem_euclid(12) + BASS_ANCHOR,
    }
}

/// Base pitch shifted by a register offset in whole octaves
pub fn base_pitch_with_offset<S: IntervalSource + ?Sized>(
    source: &S,
    chord_name: &str,
    inversion: Inversion,
    register_offset: i32,
) -> i32 {
    base_pitch(source, chord_name, inversion) + register_offset * 12
}

/// Move `pitch` by octaves until it is within `max_leap` of `prev`
///
/// With no previous pitch the input is returned unchanged. The result is
/// within `max_leap` of `prev` for any bound of at least 6.
pub fn limit_leap_by(prev: Option<i32>, pitch: i32, max_leap: i32) -> i32 {
    let Some(prev) = prev else {
        return pitch;
    };
    let mut result = pitch;
    while result - prev > max_leap {
        result -= 12;
    }
    while prev - result > max_leap {
        result += 12;
    }
    result
}

/// `limit_leap_by` with the standard bound of 8 semitones
pub fn limit_leap(prev: Option<i32>, pitch: i32) -> i32 {
    limit_leap_by(prev, pitch, MAX_LEAP)
}
