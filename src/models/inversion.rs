//! Inversion labels
//!
//! An inversion names the chord tone placed in the bass. The canonical
//! order (root, third, fifth, seventh) is significant: it breaks ties when a
//! pitch class maps back to an inversion and it defines rotation ranks.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Inversion {
    #[default]
    Root,
    Third,
    Fifth,
    Seventh,
}

/// Canonical order used by the resolver and the bass option listing
pub const INVERSION_ORDER: [Inversion; 4] = [
    Inversion::Root,
    Inversion::Third,
    Inversion::Fifth,
    Inversion::Seventh,
];

/// Rotation universe of the step navigator (the seventh is not part of it)
pub const STEP_ROTATION: [Inversion; 3] = [Inversion::Root, Inversion::Third, Inversion::Fifth];

impl Inversion {
    /// Number of left rotations needed to bring this chord tone to the bass
    pub fn rank(self) -> usize {
        match self {
            Inversion::Root => 0,
            Inversion::Third => 1,
            Inversion::Fifth => 2,
            Inversion::Seventh => 3,
        }
    }

    /// Index into the interval list holding this tone (root has none)
    pub fn interval_index(self) -> Option<usize> {
        match self {
            Inversion::Root => None,
            Inversion::Third => Some(1),
            Inversion::Fifth => Some(2),
            Inversion::Seventh => Some(3),
        }
    }

    /// Interval used when the chord has fewer tones than this inversion needs
    pub fn fallback_interval(self) -> u8 {
        match self {
            Inversion::Root => 0,
            Inversion::Third => 4,
            Inversion::Fifth => 7,
            Inversion::Seventh => 10,
        }
    }

    /// Parse a forced-inversion marker (`/1`, `/3`, `/5`, `/7` in progressions)
    pub fn from_marker(marker: &str) -> Option<Inversion> {
        match marker.trim().trim_start_matches('/') {
            "1" => Some(Inversion::Root),
            "3" => Some(Inversion::Third),
            "5" => Some(Inversion::Fifth),
            "7" => Some(Inversion::Seventh),
            _ => None,
        }
    }

    /// Wire name, as used by the JS front-end
    pub fn as_str(self) -> &'static str {
        match self {
            Inversion::Root => "root",
            Inversion::Third => "third",
            Inversion::Fifth => "fifth",
            Inversion::Seventh => "seventh",
        }
    }

    pub fn from_str_name(s: &str) -> Option<Inversion> {
        INVERSION_ORDER.iter().copied().find(|inv| inv.as_str() == s)
    }
}
