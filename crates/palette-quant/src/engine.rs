//! The quantization pass.
//!
//! A single raster-order scan (rows top to bottom, pixels left to right)
//! over the buffer. At each pixel:
//!
//! 1. read the current R, G, B, including error diffused from earlier pixels
//! 2. find the nearest palette entry
//! 3. compute `current - replacement`
//! 4. write the replacement, leaving alpha untouched
//! 5. diffuse the error to the right and lower neighbors
//!
//! Scan order is load-bearing. The kernel only pushes error forward in
//! this order, so every pixel's inputs are final by the time it is read.
//! The pass is strictly sequential.

use crate::buffer::ImageBuffer;
use crate::diffuse::{ErrorDiffuser, QuantizationError};
use crate::error::QuantizeError;
use crate::matcher::ColorMatcher;
use crate::palette::Palette;

/// Summary of a completed pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizeStats {
    /// Pixels visited.
    pub pixels: usize,
    /// How many pixels were assigned to each palette entry, by index.
    pub usage: Vec<usize>,
}

impl QuantizeStats {
    /// Number of palette entries chosen at least once.
    pub fn colors_used(&self) -> usize {
        self.usage.iter().filter(|&&n| n > 0).count()
    }
}

/// Entry point for fixed-palette quantization with error diffusion.
///
/// Stateless: the same engine may be used for any number of buffers, one
/// call at a time per buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuantizationEngine;

impl QuantizationEngine {
    pub fn new() -> Self {
        Self
    }

    /// See [`quantize`].
    pub fn quantize(
        &self,
        buffer: &mut ImageBuffer,
        palette: &Palette,
    ) -> Result<QuantizeStats, QuantizeError> {
        quantize(buffer, palette)
    }
}

/// Quantize `buffer` in place to `palette` with Floyd-Steinberg dithering.
///
/// # Errors
///
/// [`QuantizeError::EmptyPalette`] if the palette has no entries. This is
/// checked before any pixel is touched, so on error the buffer is
/// unchanged. Buffer dimensions need no check here: every [`ImageBuffer`]
/// constructor has already validated them.
///
/// # Example
///
/// ```
/// use palette_quant::{quantize, ImageBuffer, Palette};
///
/// let palette = Palette::from_hex_strings(["#000000", "#FFFFFF"]).unwrap();
/// let mut buffer = ImageBuffer::filled(4, 4, [128, 128, 128]).unwrap();
///
/// let stats = quantize(&mut buffer, &palette).unwrap();
/// assert_eq!(stats.pixels, 16);
/// assert_eq!(stats.colors_used(), 2);
/// ```
pub fn quantize(buffer: &mut ImageBuffer, palette: &Palette) -> Result<QuantizeStats, QuantizeError> {
    if palette.is_empty() {
        return Err(QuantizeError::EmptyPalette);
    }

    let duplicates = palette.duplicate_indices();
    if !duplicates.is_empty() {
        tracing::warn!(
            ?duplicates,
            "Palette has duplicate entries; they will never be selected"
        );
    }

    let width = buffer.width();
    let height = buffer.height();
    tracing::debug!(width, height, colors = palette.len(), "Quantizing image");

    let mut usage = vec![0usize; palette.len()];

    for y in 0..height {
        for x in 0..width {
            let current = buffer.rgb(x, y);
            let (idx, _) = ColorMatcher::nearest_index(current, palette)?;
            let replacement = palette.color_at(idx).to_i32();

            let error = QuantizationError::between(current, replacement);
            buffer.set_rgb(x, y, replacement);
            ErrorDiffuser::distribute(buffer, x, y, error);

            usage[idx] += 1;
        }
    }

    let stats = QuantizeStats {
        pixels: width * height,
        usage,
    };
    tracing::debug!(
        pixels = stats.pixels,
        colors_used = stats.colors_used(),
        "Quantization complete"
    );
    Ok(stats)
}

/// Quantize a raw RGBA8 byte slice in place.
///
/// The bytes are only overwritten if the whole pass succeeds.
///
/// # Example
///
/// ```
/// use palette_quant::{quantize_rgba8, Palette};
///
/// let palette = Palette::from_hex_strings(["#000000", "#FFFFFF"]).unwrap();
/// let mut rgba = [20, 20, 20, 255];
/// quantize_rgba8(1, 1, &mut rgba, &palette).unwrap();
/// assert_eq!(rgba, [0, 0, 0, 255]);
/// ```
pub fn quantize_rgba8(
    width: usize,
    height: usize,
    rgba: &mut [u8],
    palette: &Palette,
) -> Result<QuantizeStats, QuantizeError> {
    if palette.is_empty() {
        return Err(QuantizeError::EmptyPalette);
    }
    let mut buffer = ImageBuffer::from_rgba8(width, height, rgba.to_vec())?;
    let stats = quantize(&mut buffer, palette)?;
    buffer.write_rgba8(rgba);
    Ok(stats)
}
