//! Harmonization styles and octavation labels
//!
//! A harmonization style decides the register of individual voices of a
//! chord (doubling the bass down an octave, dropping the third to form
//! tenths, ...). Octavation shifts the whole chord by whole octaves.

use serde::{Deserialize, Serialize};

/// Register/doubling scheme applied to a chord's voices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HarmonizationStyle {
    #[default]
    #[serde(alias = "Octavas")]
    Octaves,
    #[serde(alias = "Doble octava")]
    DoubleOctave,
    #[serde(alias = "Décimas")]
    Tenths,
    #[serde(alias = "Treceavas")]
    Thirteenths,
}

impl HarmonizationStyle {
    /// Parse a progression marker: 8, 10, 13 or 15
    ///
    /// Examples:
    ///   "8"  → Octaves
    ///   "10" → Tenths
    ///   "13" → Thirteenths
    ///   "15" → DoubleOctave
    pub fn from_marker(marker: &str) -> Option<HarmonizationStyle> {
        match marker.trim() {
            "8" => Some(HarmonizationStyle::Octaves),
            "10" => Some(HarmonizationStyle::Tenths),
            "13" => Some(HarmonizationStyle::Thirteenths),
            "15" => Some(HarmonizationStyle::DoubleOctave),
            _ => None,
        }
    }

    /// Human-facing label used by the front-end menus
    pub fn label(self) -> &'static str {
        match self {
            HarmonizationStyle::Octaves => "Octavas",
            HarmonizationStyle::DoubleOctave => "Doble octava",
            HarmonizationStyle::Tenths => "Décimas",
            HarmonizationStyle::Thirteenths => "Treceavas",
        }
    }
}

/// Whole-chord register shift chosen per chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Octavation {
    #[default]
    Original,
    #[serde(alias = "Octava arriba")]
    OctaveUp,
    #[serde(alias = "Octava abajo")]
    OctaveDown,
}

impl Octavation {
    /// Register offset in whole octaves
    pub fn register_offset(self) -> i32 {
        match self {
            Octavation::Original => 0,
            Octavation::OctaveUp => 1,
            Octavation::OctaveDown => -1,
        }
    }

    /// Accepts the front-end labels case-insensitively; unknown labels mean no shift
    pub fn from_label(label: &str) -> Octavation {
        match label.trim().to_lowercase().as_str() {
            "octava arriba" | "octaveup" | "octave up" => Octavation::OctaveUp,
            "octava abajo" | "octavedown" | "octave down" => Octavation::OctaveDown,
            _ => Octavation::Original,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harmonization_markers() {
        assert_eq!(HarmonizationStyle::from_marker("8"), Some(HarmonizationStyle::Octaves));
        assert_eq!(HarmonizationStyle::from_marker("10"), Some(HarmonizationStyle::Tenths));
        assert_eq!(HarmonizationStyle::from_marker("13"), Some(HarmonizationStyle::Thirteenths));
        assert_eq!(HarmonizationStyle::from_marker("15"), Some(HarmonizationStyle::DoubleOctave));
        assert_eq!(HarmonizationStyle::from_marker("12"), None);
    }

    #[test]
    fn test_harmonization_accepts_labels() {
        let style: HarmonizationStyle = serde_json::from_str("\"Décimas\"").unwrap();
        assert_eq!(style, HarmonizationStyle::Tenths);
        let style: HarmonizationStyle = serde_json::from_str("\"Thirteenths\"").unwrap();
        assert_eq!(style, HarmonizationStyle::Thirteenths);
    }

    #[test]
    fn test_octavation_offsets() {
        assert_eq!(Octavation::from_label("Octava arriba").register_offset(), 1);
        assert_eq!(Octavation::from_label("  octava abajo ").register_offset(), -1);
        assert_eq!(Octavation::from_label("Original").register_offset(), 0);
        assert_eq!(Octavation::from_label("???").register_offset(), 0);
    }
}
