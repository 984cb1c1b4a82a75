//! Comma-separated color lists, as given on the command line.

use palette_quant::{Palette, ParseError};

/// Parse `"#000000, #FFFFFF,#ff0000"` into a palette.
///
/// Entries are trimmed and empty entries are skipped; each remaining entry
/// must satisfy the strict `#?RRGGBB` grammar. Error indices refer to the
/// position among non-empty entries.
pub fn parse_color_list(list: &str) -> Result<Palette, ParseError> {
    Palette::from_hex_strings(list.split(',').map(str::trim).filter(|s| !s.is_empty()))
}
