//! Palettize - quantize images to a fixed color palette.
//!
//! Thin application layer around the `palette-quant` engine: palette
//! presets, PNG input/output and the command-line entry point.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
