use crate::error::AppError;
use palette_quant::Palette;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Palette presets loaded from a YAML file.
///
/// ```yaml
/// palettes:
///   - name: gameboy
///     colors: ["#0f380f", "#306230", "#8bac0f", "#9bbc0f"]
/// ```
///
/// Order is preserved; the first preset is the default.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PresetConfig {
    #[serde(default)]
    pub palettes: Vec<PaletteConfig>,
}

/// A named list of hex colors
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PaletteConfig {
    pub name: String,

    #[serde(default)]
    pub colors: Vec<String>,
}

impl PaletteConfig {
    /// Parse the preset's colors.
    pub fn to_palette(&self) -> Result<Palette, AppError> {
        Palette::from_hex_strings(&self.colors).map_err(|source| AppError::InvalidPreset {
            name: self.name.clone(),
            source,
        })
    }
}

impl PresetConfig {
    /// Load presets from a YAML file.
    ///
    /// Every preset is validated up front so a typo in an unused preset
    /// still surfaces at startup.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            palettes = config.palettes.len(),
            "Loaded palette presets"
        );
        Ok(config)
    }

    /// Load from `path` if given, otherwise use the built-in presets.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("No presets file given, using built-in presets");
                Ok(Self::default())
            }
        }
    }

    /// Parse and validate presets from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, AppError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every preset's colors parse.
    pub fn validate(&self) -> Result<(), AppError> {
        for preset in &self.palettes {
            preset.to_palette()?;
        }
        Ok(())
    }

    /// Look up a preset by exact name.
    pub fn get(&self, name: &str) -> Option<&PaletteConfig> {
        self.palettes.iter().find(|p| p.name == name)
    }

    /// The first preset, if any.
    pub fn default_preset(&self) -> Option<&PaletteConfig> {
        self.palettes.first()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.iter().map(|p| p.name.as_str())
    }

    /// Palette for `name`, or for the default preset when `name` is `None`.
    pub fn palette(&self, name: Option<&str>) -> Result<Palette, AppError> {
        let preset = match name {
            Some(name) => self
                .get(name)
                .ok_or_else(|| AppError::UnknownPreset(name.to_string()))?,
            None => self.default_preset().ok_or(AppError::NoPresets)?,
        };
        preset.to_palette()
    }
}

impl Default for PresetConfig {
    fn default() -> Self {
        let preset = |name: &str, colors: &[&str]| PaletteConfig {
            name: name.to_string(),
            colors: colors.iter().map(|c| c.to_string()).collect(),
        };

        Self {
            palettes: vec![
                preset("mono", &["#000000", "#ffffff"]),
                preset("gray4", &["#000000", "#555555", "#aaaaaa", "#ffffff"]),
                preset("gameboy", &["#0f380f", "#306230", "#8bac0f", "#9bbc0f"]),
            ],
        }
    }
}
