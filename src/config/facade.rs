//! ConfigLoader facade delegating to the merge service.

use super::merge::MergeService;
use super::MazeConfig;
use crate::error::ApiError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from the user config file (if any) and the environment.
    pub fn load() -> Result<MazeConfig, ApiError> {
        let config = MergeService::load(None)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<MazeConfig, ApiError> {
        let config = MergeService::load(Some(path))?;
        config.validate()?;
        Ok(config)
    }

    /// Render configuration as TOML.
    pub fn to_toml(config: &MazeConfig) -> Result<String, ApiError> {
        toml::to_string_pretty(config)
            .map_err(|e| ApiError::ConfigError(format!("Failed to render config: {}", e)))
    }
}
