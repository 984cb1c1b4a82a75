//! Error diffusion kernel definition.

/// An error diffusion kernel.
///
/// Each entry is an offset `(dx, dy)` from the current pixel and the
/// numerator of the share of error it receives; the denominator is
/// [`divisor`](Self::divisor). Every offset points strictly forward in
/// raster order (`dy > 0`, or `dy == 0 && dx > 0`), so diffusion never
/// touches a pixel that has already been quantized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    /// `(dx, dy, weight)` entries.
    pub entries: &'static [(i32, i32, i32)],

    /// Each neighbor receives `error * weight / divisor`.
    pub divisor: i32,
}

impl Kernel {
    /// Sum of all weights. Equal to `divisor` for full propagation.
    pub fn total_weight(&self) -> i32 {
        self.entries.iter().map(|&(_, _, w)| w).sum()
    }
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};
