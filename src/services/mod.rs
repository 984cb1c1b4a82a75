pub mod pipeline;

pub use pipeline::{quantize_file, quantize_png, resolve_palette, PaletteSource};
