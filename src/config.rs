//! Engine configuration
//!
//! Sequence-wide defaults and tunables, deserialized from the JSON the
//! front-end sends (camelCase). Every field is optional on the wire.

use serde::{Deserialize, Serialize};

use crate::errors::{MontunoError, Result};
use crate::inversions::{ResolverSettings, MAX_LEAP};
use crate::models::{HarmonizationStyle, Inversion};

/// Smallest leap bound the leap limiter can satisfy (half an octave)
pub const MIN_LEAP_BOUND: i32 = 6;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Inversion used for chords without an explicit override
    pub default_inversion: Inversion,

    /// Harmonization for chords that do not set their own
    pub default_harmonization: HarmonizationStyle,

    /// Largest automatic move between consecutive bass notes, in semitones
    pub max_leap: i32,

    /// Memoize interval detection per chord name
    pub cache_intervals: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_inversion: Inversion::Root,
            default_harmonization: HarmonizationStyle::Octaves,
            max_leap: MAX_LEAP,
            cache_intervals: true,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| MontunoError::InvalidPayload(e.to_string()))
    }

    /// `max_leap` raised to the smallest bound the limiter can honour
    pub fn effective_max_leap(&self) -> i32 {
        if self.max_leap < MIN_LEAP_BOUND {
            log::warn!("max_leap {} is below {}, using {}", self.max_leap, MIN_LEAP_BOUND, MIN_LEAP_BOUND);
        }
        self.max_leap.max(MIN_LEAP_BOUND)
    }

    pub fn resolver_settings(&self) -> ResolverSettings {
        ResolverSettings {
            default_inversion: self.default_inversion,
            max_leap: self.effective_max_leap(),
        }
    }
}
