//! Per-user config file under the platform config directory.

use config::builder::DefaultState;
use config::{ConfigBuilder, File};
use std::path::PathBuf;

/// `<config dir>/mindmaze/config.toml`, when the platform has a config directory
pub fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "mindmaze", "mindmaze")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add the user file as an optional source.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    match user_config_path() {
        Some(path) => builder.add_source(File::from(path).required(false)),
        None => builder,
    }
}
