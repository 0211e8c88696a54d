//! Configuration
//!
//! Layered with the `config` crate: serde defaults, then either the user config
//! file or an explicit `--config` file, then `MINDMAZE__SECTION__KEY` overrides.

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

use crate::error::ApiError;
use crate::gate::{DEFAULT_ERROR_REVERT, DEFAULT_UNLOCK_PHRASE};
use crate::logging::LoggingConfig;
use crate::types::StackOrder;
use crate::window::{Viewport, DEFAULT_INITIAL_STACK_ORDER};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Largest accepted stack-order seed; leaves room for every later focus
pub const MAX_INITIAL_STACK_ORDER: StackOrder = u32::MAX as StackOrder;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub logging: LoggingConfig,
    pub desktop: DesktopConfig,
    pub gate: GateConfig,
}

impl MazeConfig {
    pub fn validate(&self) -> Result<(), ApiError> {
        self.desktop.validate()?;
        self.gate.validate()
    }
}

/// Desktop surface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Seed for window stack ordering
    pub initial_stack_order: StackOrder,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        let viewport = Viewport::default();
        Self {
            viewport_width: viewport.width,
            viewport_height: viewport.height,
            initial_stack_order: DEFAULT_INITIAL_STACK_ORDER,
        }
    }
}

impl DesktopConfig {
    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.viewport_width,
            height: self.viewport_height,
        }
    }

    fn validate(&self) -> Result<(), ApiError> {
        if !(self.viewport_width > 0.0 && self.viewport_height > 0.0) {
            return Err(ApiError::ConfigError(format!(
                "Viewport must be non-empty (got {}x{})",
                self.viewport_width, self.viewport_height
            )));
        }
        if self.initial_stack_order > MAX_INITIAL_STACK_ORDER {
            return Err(ApiError::ConfigError(format!(
                "desktop.initial_stack_order must be at most {} (got {})",
                MAX_INITIAL_STACK_ORDER, self.initial_stack_order
            )));
        }
        Ok(())
    }
}

/// Password gate settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    pub unlock_phrase: String,
    /// Delay before a rejected password clears, in milliseconds
    pub error_revert_ms: u64,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            unlock_phrase: DEFAULT_UNLOCK_PHRASE.to_string(),
            error_revert_ms: DEFAULT_ERROR_REVERT.as_millis() as u64,
        }
    }
}

impl GateConfig {
    pub fn error_revert(&self) -> Duration {
        Duration::from_millis(self.error_revert_ms)
    }

    fn validate(&self) -> Result<(), ApiError> {
        if self.unlock_phrase.trim().is_empty() {
            return Err(ApiError::ConfigError(
                "gate.unlock_phrase cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
