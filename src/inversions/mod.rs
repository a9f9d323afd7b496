//! Bass-line inversion engine
//!
//! - `base_pitch`: per-inversion anchor pitch and the leap limiter
//! - `resolver`: left-to-right resolution of a whole progression
//! - `navigator`: single-step rotation of one chord
//! - `bulk`: caller-side edits built on the two above

pub mod base_pitch;
pub mod bulk;
pub mod navigator;
pub mod resolver;

pub use base_pitch::{base_pitch, base_pitch_with_offset, limit_leap, limit_leap_by, BASS_ANCHOR, MAX_LEAP};
pub use bulk::{nudge_chord, recalculate_inversions, shift_all_inversions, BulkEdit};
pub use navigator::{step_inversion_pitch, step_repeatedly, StepDirection};
pub use resolver::{
    list_bass_options, resolve_chord, resolve_inversion_chain, resolve_inversion_chain_with, ChainState,
    ResolverSettings,
};
