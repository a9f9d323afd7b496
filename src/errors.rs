//! Error types for the montuno engine
//!
//! The voicing engine itself only ever fails with `UnrecognizedChord`.
//! The remaining variants belong to the optional layers around it
//! (chord-name normalization rules and the exchange schema).

use thiserror::Error;

/// Top-level error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MontunoError {
    /// The chord name does not start with a root letter A-G
    #[error("Unrecognized chord: '{0}' has no root note")]
    UnrecognizedChord(String),

    /// A normalization rule failed to compile
    #[error("Invalid replacement rule '{pattern}': {reason}")]
    InvalidRule { pattern: String, reason: String },

    /// Normalization rules could not be read or decoded
    #[error("Failed to load replacement rules: {0}")]
    RuleSource(String),

    /// Exchange payload was produced for another schema version
    #[error("Schema version mismatch: expected {expected}, found {found}")]
    SchemaVersion { expected: u32, found: u32 },

    /// Exchange payload could not be decoded
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// The authoritative engine could not answer a request
    #[error("Authoritative engine error: {0}")]
    Authority(String),
}

pub type Result<T> = std::result::Result<T, MontunoError>;
