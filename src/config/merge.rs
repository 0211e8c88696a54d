//! MergeService: orchestrates sources and deserializes to MazeConfig.

use crate::config::sources::{environment, user_file};
use crate::config::MazeConfig;
use config::{Config, ConfigError, File};
use std::path::Path;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Precedence: serde defaults (lowest) -> file -> environment (highest).
    /// An explicit file replaces the user file rather than layering on it.
    pub fn load(explicit: Option<&Path>) -> Result<MazeConfig, ConfigError> {
        let builder = Config::builder();
        let builder = match explicit {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => user_file::add_to_builder(builder),
        };
        let builder = environment::add_to_builder(builder);

        builder.build()?.try_deserialize()
    }
}
