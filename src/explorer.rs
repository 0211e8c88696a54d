//! Explorer Navigation
//!
//! Each file-browser window keeps its own stack of folders, root first and the
//! current folder last. Navigators are created lazily per window id and dropped
//! when their window closes.

use crate::tree::FileNode;
use crate::types::WindowId;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Result of double-clicking an entry in the current folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryAction {
    /// The entry was a folder and is now current
    Descended,
    /// The entry was a file; the caller should open a text viewer
    OpenViewer {
        id: WindowId,
        title: String,
        content: String,
    },
    NotFound,
}

/// Window id used for a text viewer showing `leaf_name`
pub fn viewer_id(leaf_name: &str) -> WindowId {
    WindowId::new(format!("file-{}", leaf_name))
}

/// Navigation stack over the shared tree; never empty
#[derive(Debug, Clone)]
pub struct ExplorerNavigator {
    stack: Vec<Arc<FileNode>>,
}

impl ExplorerNavigator {
    pub fn new(root: Arc<FileNode>) -> Self {
        Self { stack: vec![root] }
    }

    pub fn current_folder(&self) -> &Arc<FileNode> {
        // The stack always holds at least the root.
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push `folder`. Non-folders are rejected and leave the stack untouched.
    pub fn descend(&mut self, folder: Arc<FileNode>) -> bool {
        if !folder.is_folder() {
            return false;
        }
        debug!(folder = %folder.name, depth = self.stack.len() + 1, "Explorer descended");
        self.stack.push(folder);
        true
    }

    /// Pop the current folder; a no-op at the root.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Names from the root to the current folder
    pub fn breadcrumb(&self) -> Vec<&str> {
        self.stack.iter().map(|node| node.name.as_str()).collect()
    }

    /// Double-click the child named `name` in the current folder.
    pub fn enter(&mut self, name: &str) -> EntryAction {
        let Some(child) = self.current_folder().find_child(name).cloned() else {
            return EntryAction::NotFound;
        };
        match child.content() {
            Some(content) => EntryAction::OpenViewer {
                id: viewer_id(&child.name),
                title: child.name.clone(),
                content: content.to_string(),
            },
            None => {
                self.descend(child);
                EntryAction::Descended
            }
        }
    }
}

/// Navigators for all open file-browser windows, keyed by window id
#[derive(Debug, Clone, Default)]
pub struct Explorers {
    navigators: HashMap<WindowId, ExplorerNavigator>,
}

impl Explorers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &WindowId) -> Option<&ExplorerNavigator> {
        self.navigators.get(id)
    }

    /// Navigator for `id`, created at `root` on first use
    pub fn navigator(&mut self, id: &WindowId, root: &Arc<FileNode>) -> &mut ExplorerNavigator {
        self.navigators
            .entry(id.clone())
            .or_insert_with(|| ExplorerNavigator::new(Arc::clone(root)))
    }

    pub fn discard(&mut self, id: &WindowId) -> bool {
        self.navigators.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.navigators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.navigators.is_empty()
    }

    pub fn clear(&mut self) {
        self.navigators.clear();
    }
}
