//! Codecs for primitive value types.
//!
//! Numeric codecs carry their legal range and enforce it on both the
//! document and wire paths: an out-of-range value is malformed input no
//! matter which representation it arrived in.

use serde_json::Value;

use strata_document::{convert, DocumentError, DocumentResult};
use strata_types::{Color, ResourceName};
use strata_wire::{WireError, WireReader, WireResult, WireWriter};

use crate::loadable::Loadable;

/// Booleans. One byte on the wire.
#[derive(Debug, Clone, Copy)]
pub struct BoolCodec;

impl Loadable for BoolCodec {
    type Value = bool;

    fn convert(&self, element: &Value, path: &str) -> DocumentResult<bool> {
        convert::as_bool(element, path)
    }

    fn serialize(&self, value: &bool) -> Value {
        Value::Bool(*value)
    }

    fn decode(&self, reader: &mut WireReader<'_>) -> WireResult<bool> {
        reader.read_bool()
    }

    fn encode(&self, writer: &mut WireWriter, value: &bool) {
        writer.write_bool(*value);
    }
}

/// 32-bit integers restricted to an inclusive range. Zigzag varint on the
/// wire.
#[derive(Debug, Clone, Copy)]
pub struct IntCodec {
    min: i32,
    max: i32,
}

impl IntCodec {
    pub const ANY: IntCodec = IntCodec::range(i32::MIN, i32::MAX);
    pub const NON_NEGATIVE: IntCodec = IntCodec::range(0, i32::MAX);
    pub const POSITIVE: IntCodec = IntCodec::range(1, i32::MAX);

    pub const fn range(min: i32, max: i32) -> Self {
        assert!(min <= max);
        IntCodec { min, max }
    }

    pub const fn at_least(min: i32) -> Self {
        IntCodec::range(min, i32::MAX)
    }

    fn check(&self, value: i32) -> Result<i32, String> {
        if value < self.min || value > self.max {
            Err(format!(
                "value {value} must be between {} and {}",
                self.min, self.max
            ))
        } else {
            Ok(value)
        }
    }
}

impl Loadable for IntCodec {
    type Value = i32;

    fn convert(&self, element: &Value, path: &str) -> DocumentResult<i32> {
        let value = convert::as_int(element, path)?;
        if value < self.min || value > self.max {
            return Err(DocumentError::out_of_range(path, value, self.min, self.max));
        }
        Ok(value)
    }

    fn serialize(&self, value: &i32) -> Value {
        Value::from(*value)
    }

    fn decode(&self, reader: &mut WireReader<'_>) -> WireResult<i32> {
        self.check(reader.read_i32()?)
            .map_err(WireError::invalid_value)
    }

    fn encode(&self, writer: &mut WireWriter, value: &i32) {
        writer.write_i32(*value);
    }
}

/// 32-bit floats restricted to an inclusive range. Fixed four bytes on the
/// wire. NaN is never in range.
#[derive(Debug, Clone, Copy)]
pub struct FloatCodec {
    min: f32,
    max: f32,
}

impl FloatCodec {
    pub const ANY: FloatCodec = FloatCodec {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };
    pub const NON_NEGATIVE: FloatCodec = FloatCodec {
        min: 0.0,
        max: f32::INFINITY,
    };

    /// # Panics
    ///
    /// Panics unless `min <= max`; NaN bounds never satisfy that.
    pub fn range(min: f32, max: f32) -> Self {
        assert!(min <= max, "float range {min}..={max} is empty");
        FloatCodec { min, max }
    }

    fn check(&self, value: f32) -> Result<f32, String> {
        // Written so NaN fails regardless of the bounds.
        if value >= self.min && value <= self.max {
            Ok(value)
        } else {
            Err(format!(
                "value {value} must be between {} and {}",
                self.min, self.max
            ))
        }
    }
}

impl Loadable for FloatCodec {
    type Value = f32;

    fn convert(&self, element: &Value, path: &str) -> DocumentResult<f32> {
        let value = convert::as_f32(element, path)?;
        if value >= self.min && value <= self.max {
            Ok(value)
        } else {
            Err(DocumentError::out_of_range(path, value, self.min, self.max))
        }
    }

    fn serialize(&self, value: &f32) -> Value {
        Value::from(*value)
    }

    fn decode(&self, reader: &mut WireReader<'_>) -> WireResult<f32> {
        self.check(reader.read_f32()?)
            .map_err(WireError::invalid_value)
    }

    fn encode(&self, writer: &mut WireWriter, value: &f32) {
        writer.write_f32(*value);
    }
}

/// UTF-8 strings capped at a byte length. Length-prefixed on the wire.
#[derive(Debug, Clone, Copy)]
pub struct StringCodec {
    max_length: usize,
}

impl StringCodec {
    /// The conventional short-string bound.
    pub const DEFAULT: StringCodec = StringCodec::with_max(32767);

    pub const fn with_max(max_length: usize) -> Self {
        StringCodec { max_length }
    }

    fn check_length(&self, text: &str) -> Result<(), String> {
        if text.len() > self.max_length {
            Err(format!(
                "string of {} bytes exceeds the {} byte limit",
                text.len(),
                self.max_length
            ))
        } else {
            Ok(())
        }
    }
}

impl Loadable for StringCodec {
    type Value = String;

    fn convert(&self, element: &Value, path: &str) -> DocumentResult<String> {
        let text = convert::as_str(element, path)?;
        self.check_length(text)
            .map_err(|reason| DocumentError::invalid(path, reason))?;
        Ok(text.to_string())
    }

    fn serialize(&self, value: &String) -> Value {
        Value::String(value.clone())
    }

    fn decode(&self, reader: &mut WireReader<'_>) -> WireResult<String> {
        let text = reader.read_str()?;
        self.check_length(text).map_err(WireError::invalid_value)?;
        Ok(text.to_string())
    }

    fn encode(&self, writer: &mut WireWriter, value: &String) {
        writer.write_str(value);
    }
}

/// Resource names in their joined `namespace:path` string form.
#[derive(Debug, Clone, Copy)]
pub struct NameCodec;

impl Loadable for NameCodec {
    type Value = ResourceName;

    fn convert(&self, element: &Value, path: &str) -> DocumentResult<ResourceName> {
        convert::as_name(element, path)
    }

    fn serialize(&self, value: &ResourceName) -> Value {
        Value::String(value.to_string())
    }

    fn decode(&self, reader: &mut WireReader<'_>) -> WireResult<ResourceName> {
        let text = reader.read_str()?;
        ResourceName::parse(text).map_err(WireError::invalid_value)
    }

    fn encode(&self, writer: &mut WireWriter, value: &ResourceName) {
        writer.write_str(&value.to_string());
    }
}

/// ARGB colors. Documents accept an integer or a hex string and always
/// serialize to the hex-string form, short when fully opaque. Fixed four
/// bytes on the wire.
#[derive(Debug, Clone, Copy)]
pub struct ColorCodec;

impl Loadable for ColorCodec {
    type Value = Color;

    fn convert(&self, element: &Value, path: &str) -> DocumentResult<Color> {
        convert::as_color(element, path)
    }

    fn serialize(&self, value: &Color) -> Value {
        let text = if value.is_opaque() {
            format!("{:06x}", value.argb() & 0x00FF_FFFF)
        } else {
            format!("{:08x}", value.argb())
        };
        Value::String(text)
    }

    fn decode(&self, reader: &mut WireReader<'_>) -> WireResult<Color> {
        Ok(Color::from_argb(reader.read_u32()?))
    }

    fn encode(&self, writer: &mut WireWriter, value: &Color) {
        writer.write_u32(value.argb());
    }
}
