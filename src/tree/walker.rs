//! Depth-first traversal of the virtual file system

use crate::tree::node::FileNode;
use std::sync::Arc;

/// A node visited during a walk, with the names leading to it from the root
#[derive(Debug, Clone)]
pub struct WalkEntry {
    pub path: Vec<String>,
    pub node: Arc<FileNode>,
}

impl WalkEntry {
    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn display_path(&self) -> String {
        self.path.join(" / ")
    }
}

/// Pre-order walk in display order, root included.
pub fn walk(root: &Arc<FileNode>) -> Vec<WalkEntry> {
    let mut out = Vec::new();
    let mut stack = vec![WalkEntry {
        path: vec![root.name.clone()],
        node: Arc::clone(root),
    }];
    while let Some(entry) = stack.pop() {
        if let Some(children) = entry.node.children() {
            for child in children.iter().rev() {
                let mut path = entry.path.clone();
                path.push(child.name.clone());
                stack.push(WalkEntry {
                    path,
                    node: Arc::clone(child),
                });
            }
        }
        out.push(entry);
    }
    out
}
