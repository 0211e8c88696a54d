//! Environment variable source: MINDMAZE_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "MINDMAZE";

/// Add environment variable overlay to builder.
/// `MINDMAZE__GATE__UNLOCK_PHRASE` sets `gate.unlock_phrase`.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    )
}
