use palette_quant::{ParseError, QuantizeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG decode error: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("Unsupported PNG: {0}")]
    UnsupportedPng(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Invalid color in preset '{name}': {source}")]
    InvalidPreset {
        name: String,
        #[source]
        source: ParseError,
    },

    #[error("Unknown palette preset: {0}")]
    UnknownPreset(String),

    #[error("No palette presets configured")]
    NoPresets,

    #[error("Color error: {0}")]
    Parse(#[from] ParseError),

    #[error("Quantize error: {0}")]
    Quantize(#[from] QuantizeError),
}
