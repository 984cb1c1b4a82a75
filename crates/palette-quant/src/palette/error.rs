//! Error type for hex color parsing.

use thiserror::Error;

/// A hex color string that does not match `#?RRGGBB`.
///
/// `index` is the position of the offending string when parsing a list
/// (see [`Palette::from_hex_strings`](super::Palette::from_hex_strings));
/// a standalone [`Color`](crate::Color) parse reports index 0.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not exactly six hex digits after stripping an optional `#`.
    #[error("invalid hex color {input:?} at index {index}: expected 6 hex digits")]
    InvalidLength { index: usize, input: String },

    /// Six characters, but at least one is not a hex digit.
    #[error("invalid hex color {input:?} at index {index}: non-hex character")]
    InvalidDigit { index: usize, input: String },
}

impl ParseError {
    /// Position of the rejected string in the input list.
    pub fn index(&self) -> usize {
        match self {
            ParseError::InvalidLength { index, .. } | ParseError::InvalidDigit { index, .. } => {
                *index
            }
        }
    }

    /// The rejected string, verbatim.
    pub fn input(&self) -> &str {
        match self {
            ParseError::InvalidLength { input, .. } | ParseError::InvalidDigit { input, .. } => {
                input
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::InvalidLength {
            index: 2,
            input: "#FFF".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid hex color \"#FFF\" at index 2: expected 6 hex digits"
        );

        let err = ParseError::InvalidDigit {
            index: 0,
            input: "#GGGGGG".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid hex color \"#GGGGGG\" at index 0: non-hex character"
        );
    }

    #[test]
    fn test_parse_error_accessors() {
        let err = ParseError::InvalidDigit {
            index: 5,
            input: "zzzzzz".to_string(),
        };
        assert_eq!(err.index(), 5);
        assert_eq!(err.input(), "zzzzzz");
    }
}
