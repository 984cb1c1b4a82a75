//! Nearest-color search.
//!
//! Distance is squared Euclidean distance in raw RGB: no channel weights,
//! no perceptual transform, no square root. The search is a linear scan
//! that only replaces the current best on a strictly smaller distance, so
//! ties resolve to the earliest palette entry.

use crate::color::Color;
use crate::error::QuantizeError;
use crate::palette::Palette;

/// Squared RGB distance between a working pixel value and a palette color.
///
/// `pixel` may hold accumulated error outside `[0, 255]`; `u64` keeps the
/// sum exact for any `i32` channel values.
#[inline]
pub fn distance_squared(pixel: [i32; 3], color: Color) -> u64 {
    let target = color.to_i32();
    pixel
        .iter()
        .zip(target)
        .map(|(&p, c)| {
            let d = (i64::from(p) - i64::from(c)).unsigned_abs();
            d * d
        })
        .sum()
}

/// Stateless nearest-color matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorMatcher;

impl ColorMatcher {
    /// Index and distance of the palette entry closest to `pixel`.
    ///
    /// # Errors
    ///
    /// [`QuantizeError::EmptyPalette`] if the palette has no entries.
    pub fn nearest_index(pixel: [i32; 3], palette: &Palette) -> Result<(usize, u64), QuantizeError> {
        let mut entries = palette.iter().enumerate();
        let (_, first) = entries.next().ok_or(QuantizeError::EmptyPalette)?;

        let mut best_idx = 0;
        let mut best_dist = distance_squared(pixel, first);

        for (i, color) in entries {
            let dist = distance_squared(pixel, color);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        Ok((best_idx, best_dist))
    }

    /// Palette color closest to `pixel`.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_quant::{Color, ColorMatcher, Palette};
    ///
    /// let palette = Palette::from_hex_strings(["#000000", "#FFFFFF"]).unwrap();
    /// let nearest = ColorMatcher::nearest([200, 190, 210], &palette).unwrap();
    /// assert_eq!(nearest, Color::WHITE);
    /// ```
    #[inline]
    pub fn nearest(pixel: [i32; 3], palette: &Palette) -> Result<Color, QuantizeError> {
        Self::nearest_index(pixel, palette).map(|(i, _)| palette.color_at(i))
    }

    /// [`nearest`](Self::nearest) for an in-range [`Color`].
    #[inline]
    pub fn nearest_color(pixel: Color, palette: &Palette) -> Result<Color, QuantizeError> {
        Self::nearest(pixel.to_i32(), palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bw() -> Palette {
        Palette::from_colors(vec![Color::BLACK, Color::WHITE])
    }

    #[test]
    fn test_distance_squared_matches_color_distance() {
        let a = Color::new(12, 200, 99);
        let b = Color::new(250, 3, 140);
        assert_eq!(distance_squared(a.to_i32(), b), u64::from(a.distance_squared(b)));
    }

    #[test]
    fn test_distance_squared_out_of_range_pixel() {
        assert_eq!(distance_squared([-10, 0, 0], Color::BLACK), 100);
        assert_eq!(distance_squared([265, 255, 255], Color::WHITE), 100);
    }

    #[test]
    fn test_distance_squared_extreme_pixel() {
        let d = 2_147_483_648u64 + 255;
        assert_eq!(distance_squared([i32::MIN; 3], Color::WHITE), 3 * d * d);
        assert_eq!(
            ColorMatcher::nearest([i32::MIN; 3], &bw()).unwrap(),
            Color::BLACK
        );
        assert_eq!(
            ColorMatcher::nearest([i32::MAX; 3], &bw()).unwrap(),
            Color::WHITE
        );
    }

    #[test]
    fn test_nearest_black_and_white() {
        let palette = bw();
        assert_eq!(ColorMatcher::nearest([10, 10, 10], &palette).unwrap(), Color::BLACK);
        assert_eq!(ColorMatcher::nearest([250, 250, 250], &palette).unwrap(), Color::WHITE);
        assert_eq!(ColorMatcher::nearest([-40, 0, 0], &palette).unwrap(), Color::BLACK);
        assert_eq!(ColorMatcher::nearest([300, 300, 300], &palette).unwrap(), Color::WHITE);
    }

    #[test]
    fn test_nearest_exact_match_has_zero_distance() {
        let palette = Palette::from_hex_strings(["#112233", "#445566", "#778899"]).unwrap();
        let (idx, dist) = ColorMatcher::nearest_index([0x44, 0x55, 0x66], &palette).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(dist, 0);
    }

    #[test]
    fn test_nearest_uses_unweighted_channels() {
        // Green is perceptually brighter, but raw RGB distance treats
        // every channel equally.
        let palette = Palette::from_colors(vec![Color::new(0, 100, 0), Color::new(0, 0, 99)]);
        let nearest = ColorMatcher::nearest([0, 0, 0], &palette).unwrap();
        assert_eq!(nearest, Color::new(0, 0, 99));
    }

    #[test]
    fn test_tie_resolves_to_first_entry() {
        // (128,128,128) is equidistant from these two
        let a = Color::new(118, 128, 128);
        let b = Color::new(138, 128, 128);

        let forward = Palette::from_colors(vec![a, b]);
        let (idx, _) = ColorMatcher::nearest_index([128, 128, 128], &forward).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(ColorMatcher::nearest([128, 128, 128], &forward).unwrap(), a);

        let reversed = Palette::from_colors(vec![b, a]);
        assert_eq!(ColorMatcher::nearest([128, 128, 128], &reversed).unwrap(), b);
    }

    #[test]
    fn test_duplicate_entries_first_wins() {
        let palette = Palette::from_hex_strings(["#000000", "#000000"]).unwrap();
        let (idx, _) = ColorMatcher::nearest_index([5, 5, 5], &palette).unwrap();
        assert_eq!(idx, 0);
    }

    #[test]
    fn test_empty_palette_is_an_error() {
        let palette = Palette::new();
        assert_eq!(
            ColorMatcher::nearest([0, 0, 0], &palette),
            Err(QuantizeError::EmptyPalette)
        );
        assert_eq!(
            ColorMatcher::nearest_color(Color::WHITE, &palette),
            Err(QuantizeError::EmptyPalette)
        );
    }

    #[test]
    fn test_single_entry_always_wins() {
        let only = Color::new(42, 42, 42);
        let palette = Palette::from_colors(vec![only]);
        for pixel in [[0, 0, 0], [255, 255, 255], [-500, 900, 3]] {
            assert_eq!(ColorMatcher::nearest(pixel, &palette).unwrap(), only);
        }
    }
}
