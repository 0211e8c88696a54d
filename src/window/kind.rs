//! Window kinds and their payloads

use crate::tree::FileNode;
use std::sync::Arc;

/// The fixed-function application a window hosts
#[derive(Debug, Clone)]
pub enum WindowKind {
    /// File browser rooted at a shared tree node
    Explorer(Arc<FileNode>),
    /// Read-only text body
    TextViewer(String),
    /// Reads and writes the session's answer sheet
    ClueTracker,
    PasswordGate,
}

impl WindowKind {
    pub fn label(&self) -> &'static str {
        match self {
            WindowKind::Explorer(_) => "file-browser",
            WindowKind::TextViewer(_) => "text-viewer",
            WindowKind::ClueTracker => "clue-tracker",
            WindowKind::PasswordGate => "password-gate",
        }
    }

    pub fn explorer_root(&self) -> Option<&Arc<FileNode>> {
        match self {
            WindowKind::Explorer(root) => Some(root),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            WindowKind::TextViewer(body) => Some(body),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_accessors_match_kind() {
        let root = Arc::new(FileNode::folder("r", vec![]));
        let explorer = WindowKind::Explorer(Arc::clone(&root));
        assert!(Arc::ptr_eq(explorer.explorer_root().unwrap(), &root));
        assert!(explorer.text().is_none());

        let viewer = WindowKind::TextViewer("hello".to_string());
        assert_eq!(viewer.text(), Some("hello"));
        assert!(viewer.explorer_root().is_none());
        assert_eq!(WindowKind::ClueTracker.label(), "clue-tracker");
    }
}
