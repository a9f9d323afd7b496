//! Renderers module for the montuno engine
//!
//! The engine stops at bass pitches and voice layouts. Turning those into
//! timed notes is the job of an external pattern renderer, which consumes
//! the versioned exchange schema defined here.

pub mod mirror;
pub mod schema;

use serde::{Deserialize, Serialize};

use crate::models::VoiceRole;

// Re-export commonly used types
pub use mirror::{compare_with_authority, AuthoritativeEngine, Divergence, RecordedAuthority, RecordedCase};
pub use schema::{validate_version, ResolutionRequest, ResolutionResponse, SCHEMA_VERSION};

/// Default MIDI velocity (1-127, where 64 is "normal")
pub const DEFAULT_VELOCITY: u8 = 64;

/// One timed note produced by a pattern renderer
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NoteEvent {
    /// Index of the chord in the progression
    pub chord_index: usize,
    pub role: VoiceRole,
    /// MIDI note number 0-127
    pub pitch: u8,
    /// Velocity 1-127
    pub velocity: u8,
    pub start_beat: f64,
    pub duration_beats: f64,
}

/// Rhythmic pattern table applied to a resolved progression
///
/// Implementations own all timing; they read voices by role from the
/// response's layouts.
pub trait PatternRenderer {
    fn render(&self, response: &ResolutionResponse) -> Vec<NoteEvent>;
}
