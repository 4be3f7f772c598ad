//! Configuration loading from TOML files

mod constants;
mod procs;

pub use constants::{
    CombatConstants, ElementalConstants, HitConstants, MultiHitConstants, TurnConstants,
};
pub use procs::{ClassProc, ProcTable, ProcTarget};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load and validate combat constants from a TOML file
pub fn load_constants(path: &Path) -> Result<CombatConstants, ConfigError> {
    let constants: CombatConstants = load_toml(path)?;
    constants.validate()?;
    tracing::debug!(path = %path.display(), "loaded combat constants");
    Ok(constants)
}

/// Parse and validate combat constants from a TOML string
pub fn parse_constants(content: &str) -> Result<CombatConstants, ConfigError> {
    let constants: CombatConstants = parse_toml(content)?;
    constants.validate()?;
    Ok(constants)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_constants_match_defaults() {
        let content = include_str!("../../../demos/constants.toml");
        let constants = parse_constants(content).unwrap();
        assert_eq!(constants, CombatConstants::default());
    }

    #[test]
    fn test_load_constants_missing_file() {
        let err = load_constants(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_parse_constants_rejects_bad_toml() {
        let err = parse_constants("[hit\nmiss_chance = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
