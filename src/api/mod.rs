//! Montuno WASM API
//!
//! This module provides the JavaScript-facing API for the montuno engine.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, argument parsing, error handling, and logging
//! - `montuno`: The `Montuno` engine handle and stateless utility functions

pub mod helpers;
pub mod montuno;

pub use montuno::{format_midi_note_js, schema_version, Montuno};
