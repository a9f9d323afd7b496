//! Interval lookup sources
//!
//! Every engine operation reads chord intervals through `IntervalSource`.
//! `DirectDetection` re-detects on every call; `IntervalCache` memoizes by
//! chord name. Interval sets never change for a given name, so the cache is
//! read-through only and has no invalidation.

use std::collections::HashMap;
use std::sync::Mutex;

use super::intervals::{detect_intervals, ChordIntervals};

/// Where the engine gets chord intervals from
pub trait IntervalSource {
    fn intervals(&self, chord_name: &str) -> ChordIntervals;
}

/// Uncached detection
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectDetection;

impl IntervalSource for DirectDetection {
    fn intervals(&self, chord_name: &str) -> ChordIntervals {
        detect_intervals(chord_name)
    }
}

/// Content-addressed cache from chord name to detected intervals
#[derive(Debug, Default)]
pub struct IntervalCache {
    entries: Mutex<HashMap<String, ChordIntervals>>,
}

impl IntervalCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct chord names seen so far
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, ChordIntervals>> {
        // Entries are immutable once inserted, so a poisoned map is still valid
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl IntervalSource for IntervalCache {
    fn intervals(&self, chord_name: &str) -> ChordIntervals {
        let mut entries = self.lock();
        if let Some(found) = entries.get(chord_name) {
            return *found;
        }
        let detected = detect_intervals(chord_name);
        log::debug!("interval cache miss: {} -> {:?}", chord_name, detected.intervals);
        entries.insert(chord_name.to_string(), detected);
        detected
    }
}
