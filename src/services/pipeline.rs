//! End-to-end flow: resolve a palette, decode, quantize, encode.

use std::path::Path;

use palette_quant::{Palette, QuantizationEngine, QuantizeStats};

use crate::error::AppError;
use crate::models::{parse_color_list, PresetConfig};
use crate::rendering::{decode_png, encode_png};

/// Where the palette for a run comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteSource<'a> {
    /// Explicit comma-separated hex colors
    Colors(&'a str),
    /// A named preset
    Preset(&'a str),
    /// The first configured preset
    Default,
}

impl<'a> PaletteSource<'a> {
    /// Explicit colors take precedence over a preset name.
    pub fn from_args(colors: Option<&'a str>, preset: Option<&'a str>) -> Self {
        match (colors, preset) {
            (Some(colors), _) => PaletteSource::Colors(colors),
            (None, Some(preset)) => PaletteSource::Preset(preset),
            (None, None) => PaletteSource::Default,
        }
    }
}

/// Build the palette for `source`.
pub fn resolve_palette(presets: &PresetConfig, source: PaletteSource<'_>) -> Result<Palette, AppError> {
    let palette = match source {
        PaletteSource::Colors(list) => parse_color_list(list)?,
        PaletteSource::Preset(name) => presets.palette(Some(name))?,
        PaletteSource::Default => presets.palette(None)?,
    };
    tracing::debug!(?source, colors = palette.len(), "Resolved palette");
    Ok(palette)
}

/// Quantize PNG bytes, returning the encoded result.
pub fn quantize_png(png_bytes: &[u8], palette: &Palette) -> Result<(Vec<u8>, QuantizeStats), AppError> {
    // Fail before decoding anything
    if palette.is_empty() {
        return Err(palette_quant::QuantizeError::EmptyPalette.into());
    }

    let mut image = decode_png(png_bytes)?;
    let stats = QuantizationEngine::new().quantize(&mut image, palette)?;
    let encoded = encode_png(&image)?;
    Ok((encoded, stats))
}

/// Read `input`, quantize it and write the PNG to `output`.
///
/// `output` is only written when quantization succeeds.
pub fn quantize_file(input: &Path, output: &Path, palette: &Palette) -> Result<QuantizeStats, AppError> {
    let bytes = std::fs::read(input)?;
    let (encoded, stats) = quantize_png(&bytes, palette)?;
    std::fs::write(output, &encoded)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        pixels = stats.pixels,
        colors_used = stats.colors_used(),
        "Quantized image"
    );
    Ok(stats)
}
