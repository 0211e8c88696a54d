//! Core identifier types shared across the desktop core.

use serde::{Deserialize, Serialize};
use std::fmt;

/// WindowId: string identity of an open window (deduplication key)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        WindowId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        WindowId::new(value)
    }
}

impl From<String> for WindowId {
    fn from(value: String) -> Self {
        WindowId(value)
    }
}

/// StackOrder: monotonically assigned focus rank; higher is more recent
pub type StackOrder = u64;

/// Pointer position in desktop coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}
