//! Ordered, editable palette of RGB colors.
//!
//! Insertion order is significant: nearest-color ties resolve to the
//! earliest entry, so reordering a palette can change quantized output.

use std::collections::HashSet;

use super::error::ParseError;
use crate::color::Color;

/// An ordered collection of [`Color`]s.
///
/// The palette owner (a UI, a preset loader) edits it freely between
/// quantization passes. During a pass the engine holds a shared borrow,
/// so the palette cannot change underneath it.
///
/// Duplicate entries are allowed; later duplicates simply never win a
/// nearest-color match.
///
/// An empty palette is a valid value. Quantizing with it fails with
/// [`QuantizeError::EmptyPalette`](crate::QuantizeError::EmptyPalette).
///
/// # Example
///
/// ```
/// use palette_quant::{Color, Palette};
///
/// let mut palette = Palette::from_hex_strings(["#000000", "#FFFFFF"]).unwrap();
/// palette.push(Color::new(255, 0, 0));
///
/// assert_eq!(palette.len(), 3);
/// assert_eq!(palette.color_at(2), Color::new(255, 0, 0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a palette from already-parsed colors, preserving order.
    pub fn from_colors(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Parse a sequence of `#RRGGBB` strings into a palette.
    ///
    /// The policy is to reject: the first malformed string aborts
    /// construction, and the returned [`ParseError`] carries its index and
    /// text. No partially-built palette is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_quant::Palette;
    ///
    /// let err = Palette::from_hex_strings(["#000000", "#12345", "#FFFFFF"]).unwrap_err();
    /// assert_eq!(err.index(), 1);
    /// ```
    pub fn from_hex_strings<I, S>(strings: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let colors = strings
            .into_iter()
            .enumerate()
            .map(|(i, s)| Color::parse_indexed(s.as_ref(), i))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { colors })
    }

    /// Number of entries.
    #[inline]
    pub fn size(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. Use [`get()`](Self::get) for a
    /// checked lookup.
    #[inline]
    pub fn color_at(&self, index: usize) -> Color {
        self.colors[index]
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    /// Append a color at the end.
    pub fn push(&mut self, color: Color) {
        self.colors.push(color);
    }

    /// Insert a color at `index`, shifting later entries right.
    ///
    /// # Panics
    ///
    /// Panics if `index > self.len()`.
    pub fn insert(&mut self, index: usize, color: Color) {
        self.colors.insert(index, color);
    }

    /// Remove and return the color at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<Color> {
        if index < self.colors.len() {
            Some(self.colors.remove(index))
        } else {
            None
        }
    }

    /// Move the entry at `from` so that it ends up at position `to`.
    ///
    /// Returns `false` (and leaves the palette unchanged) if either index
    /// is out of range.
    pub fn move_color(&mut self, from: usize, to: usize) -> bool {
        if from >= self.colors.len() || to >= self.colors.len() {
            return false;
        }
        let color = self.colors.remove(from);
        self.colors.insert(to, color);
        true
    }

    pub fn clear(&mut self) {
        self.colors.clear();
    }

    /// Entries rendered as lowercase `#rrggbb` strings.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_hex()).collect()
    }

    /// Indices of entries that repeat an earlier entry.
    ///
    /// These entries can never be selected by the nearest-color search.
    pub fn duplicate_indices(&self) -> Vec<usize> {
        let mut seen = HashSet::new();
        self.colors
            .iter()
            .enumerate()
            .filter(|(_, c)| !seen.insert(**c))
            .map(|(i, _)| i)
            .collect()
    }
}

impl FromIterator<Color> for Palette {
    fn from_iter<T: IntoIterator<Item = Color>>(iter: T) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Construction tests
    #[test]
    fn test_from_hex_strings_preserves_order() {
        let palette = Palette::from_hex_strings(["#FF0000", "00ff00", "#0000Ff"]).unwrap();
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.color_at(0), Color::new(255, 0, 0));
        assert_eq!(palette.color_at(1), Color::new(0, 255, 0));
        assert_eq!(palette.color_at(2), Color::new(0, 0, 255));
    }

    #[test]
    fn test_from_hex_strings_empty_input() {
        let palette = Palette::from_hex_strings(Vec::<String>::new()).unwrap();
        assert!(palette.is_empty());
        assert_eq!(palette.size(), 0);
    }

    /// The rejection policy: one bad entry fails the whole list.
    #[test]
    fn test_from_hex_strings_rejects_first_invalid() {
        let err = Palette::from_hex_strings(["#000000", "#FFF", "nothex", "#FFFFFF"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidLength {
                index: 1,
                input: "#FFF".to_string()
            }
        );
    }

    #[test]
    fn test_from_hex_strings_all_invalid() {
        let err = Palette::from_hex_strings(["#GGGGGG", "red"]).unwrap_err();
        assert_eq!(err.index(), 0);
        assert!(matches!(err, ParseError::InvalidDigit { .. }));
    }

    #[test]
    fn test_from_hex_strings_accepts_owned_strings() {
        let owned = vec!["#101010".to_string(), "#202020".to_string()];
        let palette = Palette::from_hex_strings(&owned).unwrap();
        assert_eq!(palette.to_hex_strings(), owned);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let palette = Palette::from_hex_strings(["#000000", "#000000", "#ffffff"]).unwrap();
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.duplicate_indices(), vec![1]);
    }

    // Editing tests
    #[test]
    fn test_push_insert_remove() {
        let mut palette = Palette::new();
        palette.push(Color::BLACK);
        palette.push(Color::WHITE);
        palette.insert(1, Color::new(128, 128, 128));
        assert_eq!(
            palette.as_slice(),
            &[Color::BLACK, Color::new(128, 128, 128), Color::WHITE]
        );

        assert_eq!(palette.remove(0), Some(Color::BLACK));
        assert_eq!(palette.remove(5), None);
        assert_eq!(palette.len(), 2);

        palette.clear();
        assert!(palette.is_empty());
    }

    #[test]
    fn test_move_color() {
        let mut palette: Palette = [Color::new(1, 1, 1), Color::new(2, 2, 2), Color::new(3, 3, 3)]
            .into_iter()
            .collect();

        assert!(palette.move_color(0, 2));
        assert_eq!(
            palette.as_slice(),
            &[Color::new(2, 2, 2), Color::new(3, 3, 3), Color::new(1, 1, 1)]
        );

        assert!(palette.move_color(2, 0));
        assert_eq!(palette.color_at(0), Color::new(1, 1, 1));

        assert!(!palette.move_color(0, 3));
        assert!(!palette.move_color(9, 0));
    }

    #[test]
    fn test_get_is_checked() {
        let palette = Palette::from_colors(vec![Color::WHITE]);
        assert_eq!(palette.get(0), Some(Color::WHITE));
        assert_eq!(palette.get(1), None);
    }
}
