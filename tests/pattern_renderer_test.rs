//! A pattern renderer consuming the exchange schema
//!
//! Renders every chord as a four-beat block of its voices, to check that a
//! renderer can work purely from the response payload.

use montuno_wasm::renderers::{NoteEvent, PatternRenderer, ResolutionRequest, ResolutionResponse, DEFAULT_VELOCITY};
use montuno_wasm::{ChordConfig, HarmonizationStyle, Inversion, MontunoEngine, VoiceRole};

struct BlockChords {
    roles: Vec<VoiceRole>,
    beats_per_chord: f64,
}

impl PatternRenderer for BlockChords {
    fn render(&self, response: &ResolutionResponse) -> Vec<NoteEvent> {
        let mut events = Vec::new();
        for (chord_index, layout) in response.layouts.iter().enumerate() {
            for &role in &self.roles {
                let Some(pitch) = layout.get(role) else {
                    continue;
                };
                events.push(NoteEvent {
                    chord_index,
                    role,
                    pitch: pitch.clamp(0, 127) as u8,
                    velocity: DEFAULT_VELOCITY,
                    start_beat: chord_index as f64 * self.beats_per_chord,
                    duration_beats: self.beats_per_chord,
                });
            }
        }
        events
    }
}

#[test]
fn test_renderer_reads_voices_by_role() {
    let request = ResolutionRequest::new(
        vec![ChordConfig::new("Cmaj7"), ChordConfig::new("C")],
        Inversion::Root,
    );
    let response = MontunoEngine::default().resolve_request(&request).unwrap();

    let renderer = BlockChords {
        roles: vec![VoiceRole::Root, VoiceRole::Third, VoiceRole::Fifth, VoiceRole::Seventh],
        beats_per_chord: 4.0,
    };
    let events = renderer.render(&response);

    // The triad has no seventh voice
    assert_eq!(events.len(), 7);
    let first: Vec<u8> = events.iter().filter(|e| e.chord_index == 0).map(|e| e.pitch).collect();
    assert_eq!(first, vec![36, 40, 43, 47]);
    assert!(events.iter().filter(|e| e.chord_index == 1).all(|e| e.start_beat == 4.0));
}

#[test]
fn test_harmonization_reaches_the_renderer() {
    let request = ResolutionRequest::new(vec![ChordConfig::new("G7")], Inversion::Root)
        .with_harmonization(HarmonizationStyle::Tenths);
    let response = MontunoEngine::default().resolve_request(&request).unwrap();
    let renderer = BlockChords { roles: vec![VoiceRole::Third, VoiceRole::Tenth], beats_per_chord: 2.0 };
    let events = renderer.render(&response);
    assert_eq!(events[1].pitch - events[0].pitch, 24);
}
