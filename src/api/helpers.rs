//! Shared helpers for WASM API operations
//!
//! This module contains common patterns and utilities for serialization,
//! deserialization, error handling, and argument parsing across all API
//! operations.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::MontunoError;
use crate::inversions::StepDirection;
use crate::models::{HarmonizationStyle, Inversion};

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Argument Parsing
// ============================================================================

/// Parse an inversion name ("root", "third", "fifth", "seventh")
pub fn parse_inversion(name: &str) -> Result<Inversion, JsValue> {
    Inversion::from_str_name(name)
        .ok_or_else(|| validation_error(format!("Invalid inversion: '{}'", name)))
}

/// Parse an optional inversion, falling back to `default`
pub fn parse_inversion_or(name: Option<String>, default: Inversion) -> Result<Inversion, JsValue> {
    match name.as_deref() {
        None | Some("") => Ok(default),
        Some(name) => parse_inversion(name),
    }
}

/// Parse a harmonization style by variant name or display label
pub fn parse_harmonization(name: &str) -> Result<HarmonizationStyle, JsValue> {
    serde_json::from_value(serde_json::Value::String(name.to_string()))
        .map_err(|_| validation_error(format!("Invalid harmonization: '{}'", name)))
}

/// Parse a step direction (+1 / -1)
pub fn parse_direction(direction: i32) -> Result<StepDirection, JsValue> {
    if direction == 0 {
        return Err(validation_error("Invalid direction: 0 (must be +1 or -1)"));
    }
    Ok(StepDirection::from_sign(direction))
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert a validation error to a JsValue
pub fn validation_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    log_error(&msg);
    JsValue::from_str(&msg)
}

/// Convert an engine error to a JsValue
pub fn engine_error(err: MontunoError) -> JsValue {
    validation_error(err.to_string())
}
