#![allow(clippy::module_inception)]

//! palette-quant: fixed-palette color quantization with error diffusion
//!
//! Replaces every pixel of an RGBA image with its nearest palette color
//! and spreads the quantization error to not-yet-visited neighbors using
//! the Floyd-Steinberg kernel, so the overall tone survives the reduced
//! color set.
//!
//! # Quick Start
//!
//! ```
//! use palette_quant::{quantize, ImageBuffer, Palette};
//!
//! let palette = Palette::from_hex_strings(["#000000", "#FFFFFF"]).unwrap();
//!
//! let rgba = vec![10, 10, 10, 255, 250, 250, 250, 255, 10, 10, 10, 255, 250, 250, 250, 255];
//! let mut image = ImageBuffer::from_rgba8(2, 2, rgba).unwrap();
//!
//! quantize(&mut image, &palette).unwrap();
//! assert_eq!(image.pixel(0, 0), [0, 0, 0, 255]);
//! assert_eq!(image.pixel(1, 0), [255, 255, 255, 255]);
//! ```
//!
//! # Components
//!
//! | Type | Role |
//! |------|------|
//! | [`Palette`] | Ordered colors, parsed from `#RRGGBB` strings |
//! | [`ColorMatcher`] | Nearest entry by squared RGB distance, first entry wins ties |
//! | [`ErrorDiffuser`] | Splits error 7/3/5/1 sixteenths to the forward neighbors |
//! | [`QuantizationEngine`] / [`quantize`] | Raster-order pass tying the two together |
//!
//! # Numeric policy
//!
//! - Diffused shares are `error * weight / 16` in integer arithmetic,
//!   truncated toward zero.
//! - Accumulated values are not clamped to `[0, 255]`. An unvisited pixel
//!   may drift outside that range; it is matched from that value when
//!   reached. Sums saturate at the `i32` bounds.
//! - Alpha is never read or written by the pass.
//!
//! # Errors
//!
//! [`QuantizeError::EmptyPalette`] and [`QuantizeError::InvalidDimensions`]
//! are checked before the first pixel is touched. [`ParseError`] only
//! arises when building a palette from text.

pub mod buffer;
pub mod color;
pub mod diffuse;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod palette;


pub use buffer::ImageBuffer;
pub use color::Color;
pub use diffuse::{ErrorDiffuser, Kernel, QuantizationError, FLOYD_STEINBERG};
pub use engine::{quantize, quantize_rgba8, QuantizationEngine, QuantizeStats};
pub use error::QuantizeError;
pub use matcher::ColorMatcher;
pub use palette::{Palette, ParseError};
