//! PNG decoding into the quantizer's RGBA buffer and encoding back.
//!
//! Every input is normalized to 8-bit RGBA: palette images and low bit
//! depths are expanded, 16-bit channels are stripped to 8 bits, and a
//! fully-opaque alpha channel is added where the source has none.

use std::io::Cursor;

use palette_quant::ImageBuffer;

use crate::error::AppError;

/// Decode PNG bytes into an RGBA [`ImageBuffer`].
pub fn decode_png(bytes: &[u8]) -> Result<ImageBuffer, AppError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder.read_info()?;
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    if info.bit_depth != png::BitDepth::Eight {
        return Err(AppError::UnsupportedPng(format!(
            "{:?} bit depth after expansion",
            info.bit_depth
        )));
    }

    let rgba = to_rgba8(&buf, info.color_type)?;
    let image = ImageBuffer::from_rgba8(info.width as usize, info.height as usize, rgba)?;

    tracing::debug!(
        width = info.width,
        height = info.height,
        color_type = ?info.color_type,
        "Decoded PNG"
    );
    Ok(image)
}

/// Encode an [`ImageBuffer`] as an 8-bit RGBA PNG.
pub fn encode_png(image: &ImageBuffer) -> Result<Vec<u8>, AppError> {
    let width = u32::try_from(image.width())
        .map_err(|_| AppError::UnsupportedPng(format!("width {} too large", image.width())))?;
    let height = u32::try_from(image.height())
        .map_err(|_| AppError::UnsupportedPng(format!("height {} too large", image.height())))?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&image.to_rgba8())?;
        writer.finish()?;
    }

    Ok(buf.into_inner())
}

/// Widen decoded 8-bit samples of `color_type` to RGBA.
fn to_rgba8(data: &[u8], color_type: png::ColorType) -> Result<Vec<u8>, AppError> {
    let rgba = match color_type {
        png::ColorType::Rgba => data.to_vec(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Indexed => {
            return Err(AppError::UnsupportedPng(
                "indexed color was not expanded".to_string(),
            ))
        }
    };
    Ok(rgba)
}
