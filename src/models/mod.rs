//! Models module for the montuno engine
//!
//! This module contains the data model shared by the harmony and inversion
//! engines and by the exchange schema handed to the renderer.

pub mod chord;
pub mod harmonization;
pub mod inversion;
pub mod pitch;
pub mod voice;

// Re-export commonly used types
pub use chord::{ChordConfig, ResolvedChordInversion};
pub use harmonization::{HarmonizationStyle, Octavation};
pub use inversion::{Inversion, INVERSION_ORDER, STEP_ROTATION};
pub use pitch::{format_midi_note, PitchClass, Spelling};
pub use voice::{VoiceLayout, VoiceRole};
