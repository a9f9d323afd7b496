//! Versioned exchange schema
//!
//! The payloads handed across to the rendering side (and to the
//! authoritative engine when comparing results). Field names are camelCase
//! on the wire; every payload carries `version` and is rejected when it
//! does not match `SCHEMA_VERSION`.

use serde::{Deserialize, Serialize};

use crate::errors::{MontunoError, Result};
use crate::models::{ChordConfig, HarmonizationStyle, Inversion, ResolvedChordInversion, VoiceLayout};

pub const SCHEMA_VERSION: u32 = 1;

/// A progression to resolve
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionRequest {
    pub version: u32,
    #[serde(default)]
    pub default_inversion: Inversion,
    #[serde(default)]
    pub default_harmonization: HarmonizationStyle,
    pub chords: Vec<ChordConfig>,
}

impl ResolutionRequest {
    pub fn new(chords: Vec<ChordConfig>, default_inversion: Inversion) -> Self {
        Self {
            version: SCHEMA_VERSION,
            default_inversion,
            default_harmonization: HarmonizationStyle::default(),
            chords,
        }
    }

    pub fn with_harmonization(mut self, style: HarmonizationStyle) -> Self {
        self.default_harmonization = style;
        self
    }

    /// Decode and version-check a request
    pub fn from_json(json: &str) -> Result<Self> {
        let request: ResolutionRequest =
            serde_json::from_str(json).map_err(|e| MontunoError::InvalidPayload(e.to_string()))?;
        validate_version(request.version)?;
        Ok(request)
    }
}

/// Resolved progression, aligned index-for-index with the request
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResponse {
    pub version: u32,
    pub resolved: Vec<ResolvedChordInversion>,
    pub layouts: Vec<VoiceLayout>,
}

impl ResolutionResponse {
    pub fn new(resolved: Vec<ResolvedChordInversion>, layouts: Vec<VoiceLayout>) -> Self {
        Self { version: SCHEMA_VERSION, resolved, layouts }
    }

    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| MontunoError::InvalidPayload(e.to_string()))
    }
}

pub fn validate_version(found: u32) -> Result<()> {
    if found == SCHEMA_VERSION {
        Ok(())
    } else {
        Err(MontunoError::SchemaVersion { expected: SCHEMA_VERSION, found })
    }
}
