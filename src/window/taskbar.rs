//! Taskbar view of the open set

use crate::types::WindowId;
use serde::Serialize;

/// One taskbar button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskbarEntry {
    pub id: WindowId,
    pub title: String,
    pub kind: &'static str,
    pub minimized: bool,
    pub active: bool,
}
