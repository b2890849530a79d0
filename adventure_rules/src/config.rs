//! Starting configuration for a character.

use serde::Deserialize;
use std::path::Path;

use crate::entities::{Scale, DEFAULT_LOCATION};
use crate::error::ConfigError;

/// Where a character starts and how big it is.
///
/// ```toml
/// starting_location = "Home"
/// starting_scale = 1.0
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    pub starting_location: String,
    pub starting_scale: f64,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            starting_location: DEFAULT_LOCATION.to_string(),
            starting_scale: 1.0,
        }
    }
}

impl CharacterConfig {
    /// Read and validate a TOML config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: Self = toml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate TOML held in memory.
    pub fn from_toml_str(data: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(data).map_err(|source| ConfigError::Parse {
            path: "<inline>".into(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_location.trim().is_empty() {
            return Err(ConfigError::EmptyLocation);
        }
        self.scale()?;
        Ok(())
    }

    pub(crate) fn scale(&self) -> Result<Scale, ConfigError> {
        Scale::new(self.starting_scale).ok_or(ConfigError::InvalidScale(self.starting_scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = CharacterConfig::default();
        assert_eq!(cfg.starting_location, "Home");
        assert_eq!(cfg.starting_scale, 1.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let cfg = CharacterConfig::from_toml_str("starting_scale = 4.0").unwrap();
        assert_eq!(cfg.starting_location, "Home");
        assert_eq!(cfg.starting_scale, 4.0);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            CharacterConfig::from_toml_str("starting_scale = 0.0"),
            Err(ConfigError::InvalidScale(_))
        ));
        assert!(matches!(
            CharacterConfig::from_toml_str("starting_location = \"  \""),
            Err(ConfigError::EmptyLocation)
        ));
        assert!(matches!(
            CharacterConfig::from_toml_str("starting_scale = \"big\""),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = CharacterConfig::load("/nonexistent/character.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
