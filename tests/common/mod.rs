//! Common test infrastructure for Palettize integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]

pub mod fixtures;

use std::path::{Path, PathBuf};

use palette_quant::{ImageBuffer, Palette};
use palettize::rendering::{decode_png, encode_png};

/// Write `image` as a PNG at `dir/name` and return the path.
pub fn write_png(dir: &Path, name: &str, image: &ImageBuffer) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, encode_png(image).expect("encode fixture")).expect("write fixture");
    path
}

/// Read and decode a PNG written by a test.
pub fn read_png(path: &Path) -> ImageBuffer {
    let bytes = std::fs::read(path).expect("read output");
    decode_png(&bytes).expect("decode output")
}

/// Assert every pixel's RGB is one of the palette's colors.
pub fn assert_palette_only(image: &ImageBuffer, palette: &Palette) {
    for y in 0..image.height() {
        for x in 0..image.width() {
            let rgb = image.rgb(x, y);
            assert!(
                palette.iter().any(|c| c.to_i32() == rgb),
                "pixel ({x},{y}) = {rgb:?} not in palette {:?}",
                palette.to_hex_strings()
            );
        }
    }
}
