//! Palette type and hex parsing errors.
//!
//! This module provides the ordered [`Palette`] handed to the quantizer and
//! the [`ParseError`] returned when building one from hex strings.

mod error;
mod palette;

pub use error::ParseError;
pub use palette::Palette;
