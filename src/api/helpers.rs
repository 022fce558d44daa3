//! Shared helpers for WASM API operations
//!
//! Console logging, serialization, validation and error conversion used by
//! the skyline and breaking bindings.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::geometry::{Axis, Direction};

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
// Validation Helpers
// ============================================================================

/// Validate that a measurement is a finite number
pub fn validate_finite(value: f64, context: &str) -> Result<(), String> {
    if !value.is_finite() {
        return Err(format!("{} must be a finite number, got {}", context, value));
    }
    Ok(())
}

/// Validate a line width for breaking
pub fn validate_line_width(width: f64) -> Result<(), String> {
    validate_finite(width, "Line width")?;
    if width <= 0.0 {
        return Err(format!("Line width must be positive, got {}", width));
    }
    Ok(())
}

/// Convert an axis number (0 = X, 1 = Y) to an axis
pub fn axis_from_u8(axis: u8) -> Result<Axis, String> {
    match axis {
        0 => Ok(Axis::X),
        1 => Ok(Axis::Y),
        _ => Err(format!("Invalid axis value: {} (must be 0 or 1)", axis)),
    }
}

/// Convert a direction number (-1 or 1) to a direction
pub fn direction_from_i8(dir: i8) -> Result<Direction, String> {
    match dir {
        -1 => Ok(Direction::Down),
        1 => Ok(Direction::Up),
        _ => Err(format!("Invalid direction value: {} (must be -1 or 1)", dir)),
    }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_line_width() {
        assert!(validate_line_width(80.0).is_ok());
        assert!(validate_line_width(0.0).is_err());
        assert!(validate_line_width(f64::INFINITY).is_err());
    }

    #[test]
    fn test_axis_and_direction_conversion() {
        assert_eq!(axis_from_u8(1), Ok(Axis::Y));
        assert!(axis_from_u8(2).is_err());
        assert_eq!(direction_from_i8(-1), Ok(Direction::Down));
        assert!(direction_from_i8(0).is_err());
    }
}
