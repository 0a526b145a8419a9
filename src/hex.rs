//! Hexadecimal `#RRGGBB` parsing and formatting.

use core::fmt::{self, Write};

use heapless::String;

use crate::types::Rgb;

/// A formatted hex color, exactly `#RRGGBB`.
pub type HexString = String<7>;

/// The input is not a valid `#RRGGBB` hex color.
///
/// Raised for empty or whitespace-only input, a wrong digit count after the
/// optional leading `#`, or any non-hex-digit character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidHexFormat;

impl fmt::Display for InvalidHexFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex color: expected 6 hex digits as #RRGGBB")
    }
}

impl core::error::Error for InvalidHexFormat {}

impl Rgb {
    /// Parses a `RRGGBB` or `#RRGGBB` hex string.
    ///
    /// Surrounding whitespace is ignored and digits may be in either case.
    ///
    /// # Errors
    /// Returns [`InvalidHexFormat`] if the input is empty, has the wrong
    /// length, or contains a non-hex-digit character. Never panics.
    pub fn parse_hex(text: &str) -> Result<Rgb, InvalidHexFormat> {
        let trimmed = text.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        // `from_str_radix` tolerates a leading sign; the explicit digit check
        // keeps inputs like "+1+2+3" out.
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(InvalidHexFormat);
        }

        let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| InvalidHexFormat)?;
        let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| InvalidHexFormat)?;
        let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| InvalidHexFormat)?;

        Ok(Rgb::from_bytes(r, g, b))
    }

    /// Formats as an uppercase `#RRGGBB` hex string.
    ///
    /// Channels are clamped to 0.0-1.0 and rounded to the nearest byte
    /// (half away from zero).
    pub fn to_hex(self) -> HexString {
        let (r, g, b) = self.to_bytes();
        let mut out = HexString::new();
        // "#RRGGBB" is exactly the string's capacity; the write cannot fail.
        let _ = write!(out, "#{r:02X}{g:02X}{b:02X}");
        out
    }
}
