//! Node-to-type conversions.
//!
//! Each conversion takes the node and the field path it was found at, and
//! fails with a [`DocumentError`] naming that path. Numeric conversions
//! range-check rather than truncate.

use serde_json::{Map, Value};

use strata_types::{Color, ResourceName};

use crate::error::{DocumentError, DocumentResult};

/// Human-readable name of a node's type, article included, for
/// wrong-type diagnostics.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn wrong_type(path: &str, expected: &'static str, value: &Value) -> DocumentError {
    DocumentError::WrongType {
        path: path.to_string(),
        expected,
        actual: type_name(value),
    }
}

pub fn as_object<'a>(value: &'a Value, path: &str) -> DocumentResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| wrong_type(path, "an object", value))
}

pub fn as_array<'a>(value: &'a Value, path: &str) -> DocumentResult<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| wrong_type(path, "an array", value))
}

pub fn as_str<'a>(value: &'a Value, path: &str) -> DocumentResult<&'a str> {
    value
        .as_str()
        .ok_or_else(|| wrong_type(path, "a string", value))
}

pub fn as_bool(value: &Value, path: &str) -> DocumentResult<bool> {
    value
        .as_bool()
        .ok_or_else(|| wrong_type(path, "a boolean", value))
}

pub fn as_i64(value: &Value, path: &str) -> DocumentResult<i64> {
    value
        .as_i64()
        .ok_or_else(|| wrong_type(path, "an integer", value))
}

/// A 32-bit integer; values outside the `i32` range are rejected rather
/// than wrapped.
pub fn as_int(value: &Value, path: &str) -> DocumentResult<i32> {
    let wide = as_i64(value, path)?;
    i32::try_from(wide)
        .map_err(|_| DocumentError::out_of_range(path, wide, i32::MIN, i32::MAX))
}

/// An unsigned 32-bit integer; negative or too-large values are rejected.
pub fn as_u32(value: &Value, path: &str) -> DocumentResult<u32> {
    let wide = as_i64(value, path)?;
    u32::try_from(wide).map_err(|_| DocumentError::out_of_range(path, wide, 0u32, u32::MAX))
}

pub fn as_f64(value: &Value, path: &str) -> DocumentResult<f64> {
    value
        .as_f64()
        .ok_or_else(|| wrong_type(path, "a number", value))
}

pub fn as_f32(value: &Value, path: &str) -> DocumentResult<f32> {
    let wide = as_f64(value, path)?;
    let narrow = wide as f32;
    // JSON numbers are finite, so a non-finite cast result means the
    // value fell outside the f32 range.
    if !narrow.is_finite() {
        return Err(DocumentError::out_of_range(path, wide, f32::MIN, f32::MAX));
    }
    Ok(narrow)
}

/// A `namespace:path` resource name written as a string.
pub fn as_name(value: &Value, path: &str) -> DocumentResult<ResourceName> {
    let text = as_str(value, path)?;
    ResourceName::parse(text).map_err(|e| DocumentError::invalid(path, e))
}

/// A color, written either as an integer or as a 6/8-digit hex string.
///
/// The numeric form accepts the signed range (so `-1` is opaque white)
/// as well as the full unsigned 32-bit range.
pub fn as_color(value: &Value, path: &str) -> DocumentResult<Color> {
    match value {
        Value::Number(_) => {
            let wide = as_i64(value, path)?;
            if wide < i64::from(i32::MIN) || wide > i64::from(u32::MAX) {
                return Err(DocumentError::out_of_range(
                    path,
                    wide,
                    i32::MIN,
                    u32::MAX,
                ));
            }
            Ok(Color::from_argb(wide as u32))
        }
        Value::String(text) => Color::parse(text).map_err(|e| DocumentError::invalid(path, e)),
        other => Err(wrong_type(path, "a color (number or hex string)", other)),
    }
}
