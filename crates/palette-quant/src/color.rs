//! 8-bit RGB color type and its hex text form.
//!
//! The accepted text grammar is deliberately narrow:
//!
//! ```text
//! color := "#"? hex hex hex hex hex hex
//! hex   := [0-9a-fA-F]
//! ```
//!
//! No whitespace trimming, no `#RGB` shorthand, no sign characters.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseError;

/// An immutable 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as a byte array `[R, G, B]`.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels widened to the signed working representation used by the
    /// quantization buffer.
    #[inline]
    pub fn to_i32(self) -> [i32; 3] {
        [self.r as i32, self.g as i32, self.b as i32]
    }

    /// Squared Euclidean distance in raw RGB space.
    ///
    /// # Example
    /// ```
    /// use palette_quant::Color;
    /// assert_eq!(Color::new(10, 0, 0).distance_squared(Color::BLACK), 100);
    /// ```
    #[inline]
    pub fn distance_squared(self, other: Color) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Render as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse one hex string, tagging any error with its position in a list.
    pub(crate) fn parse_indexed(input: &str, index: usize) -> Result<Self, ParseError> {
        let digits = input.strip_prefix('#').unwrap_or(input);

        if digits.len() != 6 {
            return Err(ParseError::InvalidLength {
                index,
                input: input.to_string(),
            });
        }
        // from_str_radix tolerates a leading '+', so validate bytes up front.
        // This also guarantees the slicing below lands on char boundaries.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseError::InvalidDigit {
                index,
                input: input.to_string(),
            });
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ParseError::InvalidDigit {
                index,
                input: input.to_string(),
            })
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl FromStr for Color {
    type Err = ParseError;

    /// Parse `#RRGGBB` or `RRGGBB`, case-insensitive.
    ///
    /// ```
    /// use palette_quant::Color;
    ///
    /// let teal: Color = "#008080".parse().unwrap();
    /// assert_eq!(teal, Color::new(0, 128, 128));
    /// assert!("#0F0".parse::<Color>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_indexed(s, 0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
