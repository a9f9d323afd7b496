//! Montuno WASM Module
//!
//! Chord-tone resolution and bass voice-leading for montuno patterns:
//! chord names to intervals, per-chord voice layouts, inversion chains
//! with bounded bass leaps, single-step inversion navigation and approach
//! notes. The core is plain Rust; `api` wraps it for JavaScript.

pub mod errors;
pub mod models;
pub mod harmony;
pub mod inversions;
pub mod parse;
pub mod renderers;
pub mod config;
pub mod engine;
pub mod api;

// Re-export commonly used types
pub use config::EngineConfig;
pub use engine::MontunoEngine;
pub use errors::{MontunoError, Result};
pub use models::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Montuno WASM module initialized");
}
