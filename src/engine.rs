//! Engine context
//!
//! `MontunoEngine` bundles a configuration with the shared resources the
//! operations read from: the interval cache and the chord-name normalizer.
//! Callers build one and pass it around; nothing here is global. The
//! normalizer is compiled on first use, at most once per engine.

use once_cell::sync::OnceCell;

use crate::config::EngineConfig;
use crate::errors::Result;
use crate::harmony::{
    build_voice_layout, derive_approach_notes, ApproachNotes, ChordIntervals, DirectDetection, IntervalCache,
    IntervalSource,
};
use crate::inversions::{
    list_bass_options, nudge_chord, recalculate_inversions, resolve_inversion_chain_with, shift_all_inversions,
    step_inversion_pitch, BulkEdit, ResolverSettings, StepDirection,
};
use crate::models::{ChordConfig, HarmonizationStyle, Inversion, ResolvedChordInversion, VoiceLayout};
use crate::parse::ChordNormalizer;
use crate::renderers::{validate_version, ResolutionRequest, ResolutionResponse};

#[derive(Debug, Default)]
pub struct MontunoEngine {
    config: EngineConfig,
    cache: IntervalCache,
    normalizer: OnceCell<ChordNormalizer>,
}

impl MontunoEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            cache: IntervalCache::new(),
            normalizer: OnceCell::new(),
        }
    }

    /// Use `normalizer` instead of the built-in rule set
    pub fn with_normalizer(self, normalizer: ChordNormalizer) -> Self {
        Self {
            normalizer: OnceCell::with_value(normalizer),
            ..self
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn cached_chords(&self) -> usize {
        self.cache.len()
    }

    fn source(&self) -> &dyn IntervalSource {
        if self.config.cache_intervals {
            &self.cache
        } else {
            &DirectDetection
        }
    }

    fn settings(&self) -> ResolverSettings {
        self.config.resolver_settings()
    }

    pub fn intervals(&self, chord_name: &str) -> ChordIntervals {
        self.source().intervals(chord_name)
    }

    pub fn voice_layout(&self, chord_name: &str, inversion: Inversion, style: HarmonizationStyle) -> Result<VoiceLayout> {
        build_voice_layout(self.source(), chord_name, inversion, style)
    }

    /// Resolve a progression with the configured default inversion
    pub fn resolve(&self, chords: &[ChordConfig]) -> Vec<ResolvedChordInversion> {
        resolve_inversion_chain_with(self.source(), chords, &self.settings())
    }

    pub fn resolve_with_default(&self, chords: &[ChordConfig], default_inversion: Inversion) -> Vec<ResolvedChordInversion> {
        let settings = ResolverSettings {
            default_inversion,
            ..self.settings()
        };
        resolve_inversion_chain_with(self.source(), chords, &settings)
    }

    /// Resolve a schema request and lay out every chord
    ///
    /// The request's defaults take precedence over the engine's. Fails on a
    /// version mismatch or on the first chord without a root.
    pub fn resolve_request(&self, request: &ResolutionRequest) -> Result<ResolutionResponse> {
        validate_version(request.version)?;
        let resolved = self.resolve_with_default(&request.chords, request.default_inversion);
        let layouts = request
            .chords
            .iter()
            .zip(&resolved)
            .map(|(chord, r)| {
                self.voice_layout(&chord.name, r.inversion, chord.harmonization_or(request.default_harmonization))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(ResolutionResponse::new(resolved, layouts))
    }

    pub fn step(
        &self,
        chord_name: &str,
        current_pitch: i32,
        direction: StepDirection,
        current_inversion: Inversion,
    ) -> ResolvedChordInversion {
        step_inversion_pitch(self.source(), chord_name, current_pitch, direction, current_inversion)
    }

    pub fn approach_notes(&self, chord_name: &str) -> ApproachNotes {
        derive_approach_notes(self.source(), chord_name)
    }

    pub fn bass_options(&self, chord_name: &str, previous_bass: Option<i32>) -> Vec<ResolvedChordInversion> {
        list_bass_options(self.source(), chord_name, previous_bass, self.config.effective_max_leap())
    }

    pub fn nudge(&self, chords: &[ChordConfig], index: usize, direction: i32) -> BulkEdit {
        nudge_chord(self.source(), chords, &self.settings(), index, direction)
    }

    pub fn shift_all(&self, chords: &[ChordConfig], delta: i32) -> BulkEdit {
        shift_all_inversions(self.source(), chords, &self.settings(), delta)
    }

    pub fn recalculate(&self, chords: &[ChordConfig]) -> BulkEdit {
        recalculate_inversions(self.source(), chords, &self.settings())
    }

    pub fn normalizer(&self) -> Result<&ChordNormalizer> {
        self.normalizer.get_or_try_init(ChordNormalizer::builtin)
    }

    pub fn normalize_chord(&self, text: &str) -> Result<String> {
        Ok(self.normalizer()?.normalize(text))
    }
}
