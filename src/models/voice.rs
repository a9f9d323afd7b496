//! Voice roles and per-chord voice layouts
//!
//! A `VoiceLayout` is the concrete realization of one chord: an absolute MIDI
//! pitch for each named voice slot. Pattern tables refer to voices by
//! `VoiceRole`, never by index.

use serde::{Deserialize, Serialize};

/// Named pitch slot in a chord's realization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VoiceRole {
    Root,
    RootHigh,
    Third,
    ThirdHigh,
    Fifth,
    FifthHigh,
    Seventh,
    SeventhHigh,
    Tenth,
    Thirteenth,
}

impl VoiceRole {
    pub const ALL: [VoiceRole; 10] = [
        VoiceRole::Root,
        VoiceRole::RootHigh,
        VoiceRole::Third,
        VoiceRole::ThirdHigh,
        VoiceRole::Fifth,
        VoiceRole::FifthHigh,
        VoiceRole::Seventh,
        VoiceRole::SeventhHigh,
        VoiceRole::Tenth,
        VoiceRole::Thirteenth,
    ];

    /// The base voice a "high" role doubles, if any
    pub fn base(self) -> Option<VoiceRole> {
        match self {
            VoiceRole::RootHigh => Some(VoiceRole::Root),
            VoiceRole::ThirdHigh => Some(VoiceRole::Third),
            VoiceRole::FifthHigh => Some(VoiceRole::Fifth),
            VoiceRole::SeventhHigh => Some(VoiceRole::Seventh),
            _ => None,
        }
    }
}

/// Absolute pitches for every voice role of one chord
///
/// Seventh voices are only present for chords with four or more tones.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VoiceLayout {
    pub root: i32,
    pub root_high: i32,
    pub third: i32,
    pub third_high: i32,
    pub fifth: i32,
    pub fifth_high: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seventh: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seventh_high: Option<i32>,
    pub tenth: i32,
    pub thirteenth: i32,
}

impl VoiceLayout {
    /// Pitch for a role, None when the chord has no such voice
    pub fn get(&self, role: VoiceRole) -> Option<i32> {
        match role {
            VoiceRole::Root => Some(self.root),
            VoiceRole::RootHigh => Some(self.root_high),
            VoiceRole::Third => Some(self.third),
            VoiceRole::ThirdHigh => Some(self.third_high),
            VoiceRole::Fifth => Some(self.fifth),
            VoiceRole::FifthHigh => Some(self.fifth_high),
            VoiceRole::Seventh => self.seventh,
            VoiceRole::SeventhHigh => self.seventh_high,
            VoiceRole::Tenth => Some(self.tenth),
            VoiceRole::Thirteenth => Some(self.thirteenth),
        }
    }

    /// Iterate the roles this layout actually has, with their pitches
    pub fn roles(&self) -> impl Iterator<Item = (VoiceRole, i32)> + '_ {
        VoiceRole::ALL
            .iter()
            .filter_map(move |&role| self.get(role).map(|pitch| (role, pitch)))
    }

    pub fn has_seventh(&self) -> bool {
        self.seventh.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triad_layout() -> VoiceLayout {
        VoiceLayout {
            root: 36,
            root_high: 48,
            third: 40,
            third_high: 52,
            fifth: 43,
            fifth_high: 55,
            seventh: None,
            seventh_high: None,
            tenth: 52,
            thirteenth: 55,
        }
    }

    #[test]
    fn test_get_missing_seventh() {
        let layout = triad_layout();
        assert_eq!(layout.get(VoiceRole::Seventh), None);
        assert_eq!(layout.get(VoiceRole::FifthHigh), Some(55));
        assert_eq!(layout.roles().count(), 8);
    }

    #[test]
    fn test_serialization_omits_absent_seventh() {
        let json = serde_json::to_value(triad_layout()).unwrap();
        assert!(json.get("seventh").is_none());
        assert_eq!(json["rootHigh"], 48);
    }

    #[test]
    fn test_high_roles_know_their_base() {
        assert_eq!(VoiceRole::SeventhHigh.base(), Some(VoiceRole::Seventh));
        assert_eq!(VoiceRole::Tenth.base(), None);
    }
}
