//! JavaScript-facing engine handle
//!
//! JS owns a `Montuno` instance and calls into it; every method is a thin
//! deserialize → engine → serialize wrapper around `MontunoEngine`.

use wasm_bindgen::prelude::*;

use super::helpers::{
    deserialize, engine_error, parse_direction, parse_harmonization, parse_inversion, parse_inversion_or, serialize,
};
use crate::config::EngineConfig;
use crate::engine::MontunoEngine;
use crate::models::{format_midi_note, ChordConfig};
use crate::renderers::{ResolutionRequest, SCHEMA_VERSION};
use crate::wasm_info;

#[wasm_bindgen]
pub struct Montuno {
    engine: MontunoEngine,
}

#[wasm_bindgen]
impl Montuno {
    /// Create an engine; `config` may be omitted for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<Montuno, JsValue> {
        let config: EngineConfig = if config.is_undefined() || config.is_null() {
            EngineConfig::default()
        } else {
            deserialize(config, "Failed to deserialize engine config")?
        };
        wasm_info!("Montuno engine created (default inversion: {})", config.default_inversion.as_str());
        Ok(Montuno { engine: MontunoEngine::new(config) })
    }

    /// Resolve bass inversions for a chord list
    ///
    /// `default_inversion` overrides the configured default when given.
    #[wasm_bindgen(js_name = resolveInversionChain)]
    pub fn resolve_inversion_chain(&self, chords: JsValue, default_inversion: Option<String>) -> Result<JsValue, JsValue> {
        let chords: Vec<ChordConfig> = deserialize(chords, "Failed to deserialize chords")?;
        let default = parse_inversion_or(default_inversion, self.engine.config().default_inversion)?;
        let resolved = self.engine.resolve_with_default(&chords, default);
        serialize(&resolved, "Failed to serialize resolved inversions")
    }

    /// Resolve a versioned request into bass pitches and voice layouts
    #[wasm_bindgen(js_name = resolveRequest)]
    pub fn resolve_request(&self, request: JsValue) -> Result<JsValue, JsValue> {
        let request: ResolutionRequest = deserialize(request, "Failed to deserialize request")?;
        let response = self.engine.resolve_request(&request).map_err(engine_error)?;
        serialize(&response, "Failed to serialize response")
    }

    #[wasm_bindgen(js_name = stepInversionPitch)]
    pub fn step_inversion_pitch(
        &self,
        chord_name: &str,
        current_pitch: i32,
        direction: i32,
        current_inversion: &str,
    ) -> Result<JsValue, JsValue> {
        let direction = parse_direction(direction)?;
        let inversion = parse_inversion(current_inversion)?;
        let result = self.engine.step(chord_name, current_pitch, direction, inversion);
        serialize(&result, "Failed to serialize step result")
    }

    #[wasm_bindgen(js_name = buildVoiceLayout)]
    pub fn build_voice_layout(&self, chord_name: &str, inversion: &str, harmonization: &str) -> Result<JsValue, JsValue> {
        let inversion = parse_inversion(inversion)?;
        let style = parse_harmonization(harmonization)?;
        let layout = self.engine.voice_layout(chord_name, inversion, style).map_err(engine_error)?;
        serialize(&layout, "Failed to serialize voice layout")
    }

    /// Four approach-note names; `marker` is an optional `[Eb A]` override
    #[wasm_bindgen(js_name = deriveApproachNotes)]
    pub fn derive_approach_notes(&self, chord_name: &str, marker: Option<String>) -> Result<JsValue, JsValue> {
        let mut notes = self.engine.approach_notes(chord_name);
        if let Some(marker) = marker {
            notes = notes.with_marker(&marker);
        }
        serialize(&notes.0, "Failed to serialize approach notes")
    }

    #[wasm_bindgen(js_name = listBassOptions)]
    pub fn list_bass_options(&self, chord_name: &str, previous_pitch: Option<i32>) -> Result<JsValue, JsValue> {
        let options = self.engine.bass_options(chord_name, previous_pitch);
        serialize(&options, "Failed to serialize bass options")
    }

    #[wasm_bindgen(js_name = nudgeChordBass)]
    pub fn nudge_chord_bass(&self, chords: JsValue, index: usize, direction: i32) -> Result<JsValue, JsValue> {
        let chords: Vec<ChordConfig> = deserialize(chords, "Failed to deserialize chords")?;
        serialize(&self.engine.nudge(&chords, index, direction), "Failed to serialize edit")
    }

    #[wasm_bindgen(js_name = shiftAllInversions)]
    pub fn shift_all_inversions(&self, chords: JsValue, delta: i32) -> Result<JsValue, JsValue> {
        let chords: Vec<ChordConfig> = deserialize(chords, "Failed to deserialize chords")?;
        serialize(&self.engine.shift_all(&chords, delta), "Failed to serialize edit")
    }

    #[wasm_bindgen(js_name = recalculateInversions)]
    pub fn recalculate_inversions(&self, chords: JsValue) -> Result<JsValue, JsValue> {
        let chords: Vec<ChordConfig> = deserialize(chords, "Failed to deserialize chords")?;
        serialize(&self.engine.recalculate(&chords), "Failed to serialize edit")
    }

    #[wasm_bindgen(js_name = normalizeChord)]
    pub fn normalize_chord(&self, text: &str) -> Result<String, JsValue> {
        self.engine.normalize_chord(text).map_err(engine_error)
    }
}

/// MIDI note number to a note name with octave, e.g. 62 → "D4"
#[wasm_bindgen(js_name = formatMidiNote)]
pub fn format_midi_note_js(midi: i32) -> String {
    format_midi_note(midi)
}

#[wasm_bindgen(js_name = schemaVersion)]
pub fn schema_version() -> u32 {
    SCHEMA_VERSION
}
