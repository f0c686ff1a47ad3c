//! ARGB color values.
//!
//! Colors travel as 32-bit ARGB integers but are usually authored as hex
//! strings. Two string widths are accepted: six digits (`RRGGBB`, alpha
//! forced to `FF`) and eight digits (`AARRGGBB`). Signs are rejected, so a
//! leading `-` never parses.

use std::fmt;

use crate::error::TypeError;

/// A 32-bit color in ARGB channel order.
///
/// # Examples
///
/// ```
/// use strata_types::Color;
///
/// let opaque = Color::parse("336699").unwrap();
/// assert_eq!(opaque.argb(), 0xFF33_6699);
/// assert!(opaque.is_opaque());
///
/// let translucent = Color::parse("80336699").unwrap();
/// assert_eq!(translucent.alpha(), 0x80);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// Fully opaque white, the conventional "unset" tint.
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    pub const fn from_argb(argb: u32) -> Self {
        Color(argb)
    }

    /// Parse a 6- or 8-hex-digit color string.
    pub fn parse(input: &str) -> Result<Self, TypeError> {
        if input.starts_with('-') {
            return Err(invalid(input, "negative values are not allowed"));
        }
        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid(input, "expected hexadecimal digits"));
        }
        // Width decides whether an alpha channel is present.
        let argb = match input.len() {
            6 => {
                let rgb = u32::from_str_radix(input, 16).map_err(|e| invalid(input, e))?;
                rgb | 0xFF00_0000
            }
            8 => u32::from_str_radix(input, 16).map_err(|e| invalid(input, e))?,
            _ => return Err(invalid(input, "expected 6 or 8 hex digits")),
        };
        Ok(Color(argb))
    }

    pub const fn argb(self) -> u32 {
        self.0
    }

    /// The full 8-digit lowercase hex rendering, alpha included.
    pub fn to_hex(self) -> String {
        format!("{:08x}", self.0)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }
}

fn invalid(input: &str, reason: impl ToString) -> TypeError {
    TypeError::InvalidColor {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Color(argb)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({:08x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digits_forces_opaque_alpha() {
        let color = Color::parse("336699").unwrap();
        assert_eq!(color.argb(), 0xFF33_6699);
        assert_eq!(color.alpha(), 0xFF);
        assert_eq!(color.red(), 0x33);
        assert_eq!(color.green(), 0x66);
        assert_eq!(color.blue(), 0x99);
    }

    #[test]
    fn eight_digits_carries_alpha() {
        let color = Color::parse("80336699").unwrap();
        assert_eq!(color.argb(), 0x8033_6699);
        assert!(!color.is_opaque());
    }

    #[test]
    fn high_bit_values_parse() {
        // 8-digit values above 0x7FFFFFFF are legal ARGB.
        let color = Color::parse("ff0000ff").unwrap();
        assert_eq!(color.argb(), 0xFF00_00FF);
    }

    #[test]
    fn uppercase_digits_parse() {
        assert_eq!(Color::parse("ABCDEF").unwrap(), Color::parse("abcdef").unwrap());
    }

    #[test]
    fn reject_wrong_widths() {
        assert!(Color::parse("").is_err());
        assert!(Color::parse("12345").is_err());
        assert!(Color::parse("1234567").is_err());
        assert!(Color::parse("123456789").is_err());
    }

    #[test]
    fn reject_signs_and_nonhex() {
        assert!(matches!(
            Color::parse("-36699").unwrap_err(),
            TypeError::InvalidColor { .. }
        ));
        assert!(Color::parse("-3366999").is_err());
        assert!(Color::parse("+3366et").is_err());
        assert!(Color::parse("zzzzzz").is_err());
    }

    #[test]
    fn display_is_eight_lowercase_digits() {
        assert_eq!(Color::from_argb(0xFF00_A1B2).to_string(), "ff00a1b2");
        assert_eq!(Color::from_argb(0x0001_0203).to_hex(), "00010203");
        assert_eq!(format!("{:?}", Color::WHITE), "Color(ffffffff)");
    }

    #[test]
    fn white_constant() {
        assert_eq!(Color::WHITE.argb(), 0xFFFF_FFFF);
        assert!(Color::WHITE.is_opaque());
    }
}
