//! Chord harmony: intervals, voice layouts and approach notes
//!
//! - `intervals`: chord-name → (root pitch class, interval list)
//! - `cache`: interval lookup sources (direct or memoized)
//! - `voicing`: per-chord voice layouts under a harmonization style
//! - `approach`: ornamental approach-note names

pub mod approach;
pub mod cache;
pub mod intervals;
pub mod voicing;

pub use approach::{derive_approach_notes, ApproachNotes, DEFAULT_APPROACH_NOTES};
pub use cache::{DirectDetection, IntervalCache, IntervalSource};
pub use intervals::{detect_intervals, ChordIntervals, QUALITY_RULES};
pub use voicing::build_voice_layout;
