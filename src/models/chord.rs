//! Per-chord input and output records
//!
//! `ChordConfig` is owned by the caller and edited by it. The engine only
//! ever reads it and produces fresh `ResolvedChordInversion` values.

use serde::{Deserialize, Serialize};

use super::harmonization::{HarmonizationStyle, Octavation};
use super::inversion::Inversion;

/// One chord of a progression, as configured by the caller
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChordConfig {
    /// Chord symbol, e.g. "Cmaj7", "Bb7(b9)"
    pub name: String,

    /// Explicit inversion override (None = automatic)
    #[serde(default)]
    pub inversion: Option<Inversion>,

    /// Register offset in whole octaves
    #[serde(default)]
    pub register_offset: i32,

    /// Per-chord harmonization (None = sequence default)
    #[serde(default)]
    pub harmonization: Option<HarmonizationStyle>,
}

impl ChordConfig {
    /// Create an automatic chord with no register offset
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inversion: None,
            register_offset: 0,
            harmonization: None,
        }
    }

    pub fn with_inversion(mut self, inversion: Inversion) -> Self {
        self.inversion = Some(inversion);
        self
    }

    pub fn with_register_offset(mut self, octaves: i32) -> Self {
        self.register_offset = octaves;
        self
    }

    pub fn with_octavation(mut self, octavation: Octavation) -> Self {
        self.register_offset = octavation.register_offset();
        self
    }

    pub fn with_harmonization(mut self, style: HarmonizationStyle) -> Self {
        self.harmonization = Some(style);
        self
    }

    /// Harmonization to use for this chord given the sequence default
    pub fn harmonization_or(&self, default: HarmonizationStyle) -> HarmonizationStyle {
        self.harmonization.unwrap_or(default)
    }

    pub fn is_automatic(&self) -> bool {
        self.inversion.is_none()
    }
}

/// Chosen inversion and absolute bass pitch (MIDI note number) for one chord
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedChordInversion {
    pub inversion: Inversion,
    pub pitch: i32,
}

impl ResolvedChordInversion {
    pub fn new(inversion: Inversion, pitch: i32) -> Self {
        Self { inversion, pitch }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_config_defaults_from_json() {
        let chord: ChordConfig = serde_json::from_str(r#"{"name": "G7"}"#).unwrap();
        assert_eq!(chord, ChordConfig::new("G7"));
        assert!(chord.is_automatic());
    }

    #[test]
    fn test_chord_config_camel_case_fields() {
        let chord = ChordConfig::new("Am7")
            .with_inversion(Inversion::Fifth)
            .with_octavation(Octavation::OctaveDown);
        let json = serde_json::to_value(&chord).unwrap();
        assert_eq!(json["registerOffset"], -1);
        assert_eq!(json["inversion"], "fifth");
    }

    #[test]
    fn test_harmonization_fallback() {
        let chord = ChordConfig::new("C");
        assert_eq!(chord.harmonization_or(HarmonizationStyle::Tenths), HarmonizationStyle::Tenths);
        let chord = chord.with_harmonization(HarmonizationStyle::Octaves);
        assert_eq!(chord.harmonization_or(HarmonizationStyle::Tenths), HarmonizationStyle::Octaves);
    }
}
