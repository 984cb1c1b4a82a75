pub mod colors;
pub mod config;

pub use colors::parse_color_list;
pub use config::{PaletteConfig, PresetConfig};
