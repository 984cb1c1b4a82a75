//! Floyd-Steinberg error diffusion.
//!
//! After a pixel is replaced by its palette match, the difference
//! `current - replacement` is split across not-yet-visited neighbors:
//!
//! ```text
//!        X   7/16
//! 3/16 5/16 1/16
//! ```
//!
//! # Rounding and clamping
//!
//! Shares are computed as `error * weight / 16`, which truncates toward
//! zero. Truncated remainders are dropped, so a small error such as `-1`
//! diffuses nothing at all. The product is taken in `i64` so it cannot
//! overflow for any `i32` error.
//!
//! Neighbor values are never clamped to `[0, 255]`. A pixel that received
//! a lot of error may hold a value below 0 or above 255 until the scan
//! reaches it; it is then matched, and its own error computed, from that
//! unclamped value. Only the `i32` range itself is a hard limit: sums that
//! would leave it saturate.

mod kernel;

pub use kernel::{Kernel, FLOYD_STEINBERG};

use crate::buffer::ImageBuffer;

/// Per-channel signed difference `(current - chosen)` at one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuantizationError {
    pub er: i32,
    pub eg: i32,
    pub eb: i32,
}

impl QuantizationError {
    #[inline]
    pub fn new(er: i32, eg: i32, eb: i32) -> Self {
        Self { er, eg, eb }
    }

    /// Error between the current working value and the chosen color.
    ///
    /// Saturates at the `i32` bounds.
    #[inline]
    pub fn between(current: [i32; 3], chosen: [i32; 3]) -> Self {
        Self {
            er: current[0].saturating_sub(chosen[0]),
            eg: current[1].saturating_sub(chosen[1]),
            eb: current[2].saturating_sub(chosen[2]),
        }
    }

    /// `true` when there is nothing to diffuse.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.er == 0 && self.eg == 0 && self.eb == 0
    }

    /// Share of this error for one kernel entry, truncated toward zero.
    #[inline]
    pub fn scaled(&self, weight: i32, divisor: i32) -> [i32; 3] {
        [self.er, self.eg, self.eb].map(|e| share(e, weight, divisor))
    }
}

#[inline]
fn share(error: i32, weight: i32, divisor: i32) -> i32 {
    let share = i64::from(error) * i64::from(weight) / i64::from(divisor);
    share.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Stateless error distributor.
///
/// Its only side effect is adding shares to up to four pixels of the
/// buffer. Targets outside the image are skipped: there is no wraparound
/// and no coordinate clamping.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorDiffuser;

impl ErrorDiffuser {
    /// Spread `error` from `(x, y)` to its Floyd-Steinberg neighbors.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_quant::{ErrorDiffuser, ImageBuffer, QuantizationError};
    ///
    /// let mut buffer = ImageBuffer::from_rgba8(2, 1, vec![0; 8]).unwrap();
    /// ErrorDiffuser::distribute(&mut buffer, 0, 0, QuantizationError::new(16, 0, -16));
    /// assert_eq!(buffer.rgb(1, 0), [7, 0, -7]);
    /// ```
    pub fn distribute(buffer: &mut ImageBuffer, x: usize, y: usize, error: QuantizationError) {
        Self::distribute_with_kernel(buffer, x, y, error, &FLOYD_STEINBERG);
    }

    pub(crate) fn distribute_with_kernel(
        buffer: &mut ImageBuffer,
        x: usize,
        y: usize,
        error: QuantizationError,
        kernel: &Kernel,
    ) {
        if error.is_zero() {
            return;
        }

        let width = buffer.width() as i64;
        let height = buffer.height() as i64;

        for &(dx, dy, weight) in kernel.entries {
            let nx = x as i64 + dx as i64;
            let ny = y as i64 + dy as i64;

            if nx < 0 || nx >= width || ny < 0 || ny >= height {
                continue;
            }

            buffer.add_rgb(nx as usize, ny as usize, error.scaled(weight, kernel.divisor));
        }
    }
}
