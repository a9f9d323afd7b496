//! Agreement checks against the authoritative engine
//!
//! The local engine mirrors an out-of-process engine that owns the final
//! word on inversions and pitches. `compare_with_authority` lines both
//! results up index by index and reports every position where they differ.

use serde::{Deserialize, Serialize};

use crate::errors::{MontunoError, Result};
use crate::models::ResolvedChordInversion;

use super::schema::{validate_version, ResolutionRequest};

/// An engine whose results are authoritative
pub trait AuthoritativeEngine {
    fn resolve(&self, request: &ResolutionRequest) -> Result<Vec<ResolvedChordInversion>>;
}

/// One position where the local and authoritative results differ
///
/// `None` on either side means that side produced no entry at this index.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Divergence {
    pub index: usize,
    pub chord: String,
    pub local: Option<ResolvedChordInversion>,
    pub authoritative: Option<ResolvedChordInversion>,
}

/// Compare locally resolved values with the authority's answer
pub fn compare_with_authority<A: AuthoritativeEngine + ?Sized>(
    request: &ResolutionRequest,
    local: &[ResolvedChordInversion],
    authority: &A,
) -> Result<Vec<Divergence>> {
    let remote = authority.resolve(request)?;
    let len = local.len().max(remote.len());

    let divergences: Vec<Divergence> = (0..len)
        .filter_map(|index| {
            let mine = local.get(index).copied();
            let theirs = remote.get(index).copied();
            (mine != theirs).then(|| Divergence {
                index,
                chord: request.chords.get(index).map(|c| c.name.clone()).unwrap_or_default(),
                local: mine,
                authoritative: theirs,
            })
        })
        .collect();

    for d in &divergences {
        log::warn!(
            "divergence at #{} {}: local {:?}, authoritative {:?}",
            d.index,
            d.chord,
            d.local,
            d.authoritative
        );
    }
    Ok(divergences)
}

/// A request together with the authority's recorded answer
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecordedCase {
    pub name: String,
    pub request: ResolutionRequest,
    pub expected: Vec<ResolvedChordInversion>,
}

/// Authority replayed from recorded fixtures
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RecordedAuthority {
    pub cases: Vec<RecordedCase>,
}

impl RecordedAuthority {
    pub fn from_json(json: &str) -> Result<Self> {
        let recorded: RecordedAuthority =
            serde_json::from_str(json).map_err(|e| MontunoError::InvalidPayload(e.to_string()))?;
        for case in &recorded.cases {
            validate_version(case.request.version)?;
        }
        Ok(recorded)
    }
}

impl AuthoritativeEngine for RecordedAuthority {
    fn resolve(&self, request: &ResolutionRequest) -> Result<Vec<ResolvedChordInversion>> {
        self.cases
            .iter()
            .find(|case| &case.request == request)
            .map(|case| case.expected.clone())
            .ok_or_else(|| MontunoError::Authority(format!("no recorded case for {} chords", request.chords.len())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChordConfig, Inversion};

    fn request() -> ResolutionRequest {
        ResolutionRequest::new(vec![ChordConfig::new("C"), ChordConfig::new("F")], Inversion::Root)
    }

    fn authority(expected: Vec<ResolvedChordInversion>) -> RecordedAuthority {
        RecordedAuthority {
            cases: vec![RecordedCase { name: "c-f".to_string(), request: request(), expected }],
        }
    }

    #[test]
    fn test_agreement_has_no_divergences() {
        let values = vec![
            ResolvedChordInversion::new(Inversion::Root, 36),
            ResolvedChordInversion::new(Inversion::Fifth, 36),
        ];
        let found = compare_with_authority(&request(), &values, &authority(values.clone())).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_reports_differing_and_missing_positions() {
        let local = vec![
            ResolvedChordInversion::new(Inversion::Root, 36),
            ResolvedChordInversion::new(Inversion::Fifth, 36),
        ];
        let remote = vec![ResolvedChordInversion::new(Inversion::Root, 48)];
        let found = compare_with_authority(&request(), &local, &authority(remote)).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].chord, "C");
        assert_eq!(found[0].authoritative.map(|r| r.pitch), Some(48));
        assert_eq!(found[1].index, 1);
        assert_eq!(found[1].authoritative, None);
    }

    #[test]
    fn test_unknown_request() {
        let other = ResolutionRequest::new(vec![ChordConfig::new("D")], Inversion::Root);
        let err = authority(vec![]).resolve(&other).unwrap_err();
        assert!(matches!(err, MontunoError::Authority(_)));
    }
}
