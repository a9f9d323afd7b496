//! Parsing module for chord text
//!
//! Chord symbols arrive as free text. This module holds the rule-driven
//! normalizer that rewrites them into the spellings the interval detector
//! recognizes.

pub mod chord_normalizer;

// Re-export commonly used types
pub use chord_normalizer::{ChordNormalizer, ReplacementRule};
