//! RGBA working buffer.
//!
//! [`ImageBuffer`] stores four channels per pixel in row-major order
//! starting at the top-left pixel. Channels are `i32` rather than `u8`:
//! during a quantization pass, diffused error is added to pixels that have
//! not been visited yet, and those intermediate sums may leave `[0, 255]`
//! in either direction.

use crate::error::QuantizeError;

/// Channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// A caller-owned RGBA image.
///
/// The engine borrows it mutably for one pass and keeps no reference
/// afterwards.
///
/// # Example
///
/// ```
/// use palette_quant::ImageBuffer;
///
/// let buffer = ImageBuffer::from_rgba8(2, 1, vec![1, 2, 3, 255, 4, 5, 6, 128]).unwrap();
/// assert_eq!(buffer.pixel(1, 0), [4, 5, 6, 128]);
/// assert_eq!(buffer.to_rgba8(), vec![1, 2, 3, 255, 4, 5, 6, 128]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: usize,
    height: usize,
    data: Vec<i32>,
}

impl ImageBuffer {
    /// Wrap decoded RGBA8 bytes.
    ///
    /// # Errors
    ///
    /// [`QuantizeError::InvalidDimensions`] if either dimension is zero or
    /// `bytes.len() != width * height * 4`.
    pub fn from_rgba8(width: usize, height: usize, bytes: Vec<u8>) -> Result<Self, QuantizeError> {
        validate_dimensions(width, height, bytes.len())?;
        Ok(Self {
            width,
            height,
            data: bytes.into_iter().map(i32::from).collect(),
        })
    }

    /// Wrap signed channel values directly.
    ///
    /// Values outside `[0, 255]` are accepted as-is; they are treated as
    /// pre-accumulated error. Any `i32` is valid: diffusion into a pixel
    /// saturates at the `i32` bounds instead of overflowing.
    pub fn from_channels(width: usize, height: usize, data: Vec<i32>) -> Result<Self, QuantizeError> {
        validate_dimensions(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A `width` x `height` image filled with one opaque color.
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> Result<Self, QuantizeError> {
        let pixel = [rgb[0], rgb[1], rgb[2], 255];
        let bytes = pixel
            .iter()
            .copied()
            .cycle()
            .take(width.saturating_mul(height).saturating_mul(CHANNELS))
            .collect();
        Self::from_rgba8(width, height, bytes)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Linear offset of the first channel of pixel `(x, y)`.
    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        CHANNELS * (x + y * self.width)
    }

    /// Current `[R, G, B, A]` of pixel `(x, y)`, including any accumulated error.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [i32; 4] {
        let i = self.index_of(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Current `[R, G, B]` of pixel `(x, y)`.
    #[inline]
    pub fn rgb(&self, x: usize, y: usize) -> [i32; 3] {
        let i = self.index_of(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Overwrite the color channels of pixel `(x, y)`, leaving alpha alone.
    #[inline]
    pub fn set_rgb(&mut self, x: usize, y: usize, rgb: [i32; 3]) {
        let i = self.index_of(x, y);
        self.data[i..i + 3].copy_from_slice(&rgb);
    }

    /// Add `delta` to the color channels of pixel `(x, y)`, leaving alpha alone.
    ///
    /// Saturates at the `i32` bounds.
    #[inline]
    pub fn add_rgb(&mut self, x: usize, y: usize, delta: [i32; 3]) {
        let i = self.index_of(x, y);
        for (channel, d) in self.data[i..i + 3].iter_mut().zip(delta) {
            *channel = channel.saturating_add(d);
        }
    }

    /// Raw channel values.
    pub fn channels(&self) -> &[i32] {
        &self.data
    }

    /// Convert back to RGBA8, saturating out-of-range values into `[0, 255]`.
    ///
    /// After a successful quantization pass no saturation occurs: every
    /// color channel holds a palette value and alpha is untouched.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.data.iter().map(|&v| v.clamp(0, 255) as u8).collect()
    }

    /// Write the buffer into an RGBA8 slice of matching length.
    pub(crate) fn write_rgba8(&self, out: &mut [u8]) {
        for (dst, &v) in out.iter_mut().zip(&self.data) {
            *dst = v.clamp(0, 255) as u8;
        }
    }
}

/// Check `width`, `height` and channel count agree.
fn validate_dimensions(
    width: usize,
    height: usize,
    len: usize,
) -> Result<(), QuantizeError> {
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(CHANNELS));
    match expected {
        Some(expected) if width > 0 && height > 0 && expected == len => Ok(()),
        _ => Err(QuantizeError::InvalidDimensions { width, height, len }),
    }
}
