//! Test fixtures and constants.

use palette_quant::ImageBuffer;

/// Presets file with a non-default first entry
pub const PRESETS_YAML: &str = r##"
palettes:
  - name: cga
    colors: ["#000000", "#55ffff", "#ff55ff", "#ffffff"]
  - name: sepia
    colors: ["#2b1d0e", "#7f5f3f", "#d9c3a0"]
"##;

/// Presets file with one malformed color
pub const BROKEN_PRESETS_YAML: &str = r##"
palettes:
  - name: bad
    colors: ["#000000", "#fffff"]
"##;

/// Horizontal gray ramp with a vertical alpha ramp.
pub fn ramp(width: usize, height: usize) -> ImageBuffer {
    let bytes = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .flat_map(|(x, y)| {
            let v = (x * 255 / (width - 1).max(1)) as u8;
            let a = 255 - (y * 200 / height.max(1)) as u8;
            [v, v, v, a]
        })
        .collect();
    ImageBuffer::from_rgba8(width, height, bytes).expect("ramp fixture")
}

/// Four-quadrant color test card.
pub fn color_card(size: usize) -> ImageBuffer {
    let half = size / 2;
    let bytes = (0..size)
        .flat_map(|y| (0..size).map(move |x| (x, y)))
        .flat_map(|(x, y)| match (x < half, y < half) {
            (true, true) => [220, 40, 40, 255],
            (false, true) => [40, 200, 60, 255],
            (true, false) => [30, 50, 210, 255],
            (false, false) => [128, 128, 128, 255],
        })
        .collect();
    ImageBuffer::from_rgba8(size, size, bytes).expect("color card fixture")
}
