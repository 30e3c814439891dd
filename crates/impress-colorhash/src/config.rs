//! Palette configuration.
//!
//! The palette is the only knob the color hash exposes: two ordered lists of
//! saturation and lightness levels that the HSL selector indexes into. Hue is
//! always continuous.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ColorHashError, Result};

/// Levels used for both saturation and lightness when none are given.
pub const DEFAULT_LEVELS: [f64; 3] = [0.35, 0.5, 0.65];

/// Saturation and lightness levels a hash can select from.
///
/// Both lists must be non-empty and every value must lie in [0, 1]; use
/// [`PaletteConfig::validate`] (or go through [`crate::ColorHash::new`],
/// which does it for you) before computing colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
#[serde(default)]
pub struct PaletteConfig {
    /// Saturation levels in [0, 1]
    pub saturation_levels: Vec<f64>,
    /// Lightness levels in [0, 1]
    pub lightness_levels: Vec<f64>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            saturation_levels: DEFAULT_LEVELS.to_vec(),
            lightness_levels: DEFAULT_LEVELS.to_vec(),
        }
    }
}

impl PaletteConfig {
    /// Create a palette with the default levels
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the saturation levels.
    pub fn with_saturation_levels(mut self, levels: impl Into<Vec<f64>>) -> Self {
        self.saturation_levels = levels.into();
        self
    }

    /// Replace the lightness levels.
    pub fn with_lightness_levels(mut self, levels: impl Into<Vec<f64>>) -> Self {
        self.lightness_levels = levels.into();
        self
    }

    /// Load a palette from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize the palette to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a palette from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize the palette to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ColorHashError::Parse(e.to_string()))
    }

    /// Read and validate a palette file.
    ///
    /// Files ending in `.toml` are parsed as TOML, anything else as JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let config = if is_toml {
            Self::from_toml(&content)?
        } else {
            Self::from_json(&content)?
        };
        config.validate()?;

        tracing::debug!(
            "Loaded palette from {:?}: {} saturation, {} lightness levels",
            path,
            config.saturation_levels.len(),
            config.lightness_levels.len()
        );
        Ok(config)
    }

    /// Validate the level lists.
    ///
    /// Both lists must be non-empty and hold only finite values in [0, 1].
    pub fn validate(&self) -> Result<()> {
        check_levels("saturation_levels", &self.saturation_levels)?;
        check_levels("lightness_levels", &self.lightness_levels)
    }
}

fn check_levels(name: &str, levels: &[f64]) -> Result<()> {
    if levels.is_empty() {
        tracing::debug!("Rejected palette: {} is empty", name);
        return Err(ColorHashError::InvalidConfig(format!("{name} must not be empty")));
    }

    if let Some((index, value)) = levels
        .iter()
        .enumerate()
        .find(|(_, v)| !(0.0..=1.0).contains(*v))
    {
        tracing::debug!("Rejected palette: {}[{}] = {}", name, index, value);
        return Err(ColorHashError::InvalidConfig(format!(
            "{name}[{index}] = {value} is outside [0, 1]"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PaletteConfig::default();
        assert_eq!(config.saturation_levels, vec![0.35, 0.5, 0.65]);
        assert_eq!(config.lightness_levels, vec![0.35, 0.5, 0.65]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_levels_rejected() {
        let config = PaletteConfig::new().with_saturation_levels(Vec::<f64>::new());
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ColorHashError::InvalidConfig(_)));
        assert!(err.to_string().contains("saturation_levels"));

        let config = PaletteConfig::new().with_lightness_levels(Vec::<f64>::new());
        assert!(config.validate().unwrap_err().to_string().contains("lightness_levels"));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let config = PaletteConfig::new().with_lightness_levels([0.2, 1.5]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("lightness_levels[1]"));

        let config = PaletteConfig::new().with_saturation_levels([f64::NAN]);
        assert!(config.validate().is_err());

        let config = PaletteConfig::new().with_saturation_levels([-0.1]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bounds_accepted() {
        let config = PaletteConfig::new()
            .with_saturation_levels([0.0, 1.0])
            .with_lightness_levels([1.0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_serialization() {
        let config = PaletteConfig::new().with_saturation_levels([0.9]);
        let json = config.to_json().unwrap();
        let parsed = PaletteConfig::from_json(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let parsed = PaletteConfig::from_json(r#"{"lightness_levels": [0.4, 0.6]}"#).unwrap();
        assert_eq!(parsed.saturation_levels, DEFAULT_LEVELS.to_vec());
        assert_eq!(parsed.lightness_levels, vec![0.4, 0.6]);
    }

    #[test]
    fn test_toml_parsing() {
        let parsed = PaletteConfig::from_toml(
            "saturation_levels = [0.5]\nlightness_levels = [0.3, 0.7]\n",
        )
        .unwrap();
        assert_eq!(parsed.saturation_levels, vec![0.5]);
        assert_eq!(parsed.lightness_levels, vec![0.3, 0.7]);

        let round_trip = PaletteConfig::from_toml(&parsed.to_toml().unwrap()).unwrap();
        assert_eq!(round_trip, parsed);
    }

    #[test]
    fn test_malformed_documents() {
        assert!(matches!(
            PaletteConfig::from_json("{\"saturation_levels\": \"high\"}"),
            Err(ColorHashError::Parse(_))
        ));
        assert!(matches!(
            PaletteConfig::from_toml("saturation_levels = "),
            Err(ColorHashError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_files() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("palette.toml");
        std::fs::write(&toml_path, "saturation_levels = [0.8]\n").unwrap();
        let config = PaletteConfig::load(&toml_path).unwrap();
        assert_eq!(config.saturation_levels, vec![0.8]);
        assert_eq!(config.lightness_levels, DEFAULT_LEVELS.to_vec());

        let json_path = dir.path().join("palette.json");
        std::fs::write(&json_path, r#"{"lightness_levels": []}"#).unwrap();
        assert!(matches!(
            PaletteConfig::load(&json_path),
            Err(ColorHashError::InvalidConfig(_))
        ));

        assert!(matches!(
            PaletteConfig::load(dir.path().join("missing.json")),
            Err(ColorHashError::Io(_))
        ));
    }
}
