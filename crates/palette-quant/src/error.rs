//! Error type for quantization calls.
//!
//! Every variant is a precondition failure. They are all detected before
//! the raster scan begins, so a failed call never leaves the image buffer
//! partially quantized.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantizeError {
    /// The palette has no colors to match against.
    #[error("palette is empty: at least one color is required")]
    EmptyPalette,

    /// Width or height is zero, or the channel data does not hold
    /// exactly `width * height * 4` values.
    #[error("invalid image dimensions {width}x{height} for {len} channel values")]
    InvalidDimensions {
        width: usize,
        height: usize,
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_palette_display() {
        assert_eq!(
            QuantizeError::EmptyPalette.to_string(),
            "palette is empty: at least one color is required"
        );
    }

    #[test]
    fn test_invalid_dimensions_display() {
        let err = QuantizeError::InvalidDimensions {
            width: 0,
            height: 4,
            len: 16,
        };
        assert_eq!(
            err.to_string(),
            "invalid image dimensions 0x4 for 16 channel values"
        );
    }
}
