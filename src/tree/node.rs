//! File system node types

use crate::clues::ClueId;
use std::sync::Arc;

/// Contents of a non-folder node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub content: String,
    /// Set when this leaf hides a riddle, `None` for decoys
    pub clue: Option<ClueId>,
}

/// Folder or file payload; a folder never has content and a file never has children
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Folder(Vec<Arc<FileNode>>),
    File(Leaf),
}

/// One entry of the virtual file system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    pub name: String,
    pub kind: NodeKind,
}

impl FileNode {
    pub fn folder(name: impl Into<String>, children: Vec<FileNode>) -> Self {
        FileNode {
            name: name.into(),
            kind: NodeKind::Folder(children.into_iter().map(Arc::new).collect()),
        }
    }

    pub fn file(name: impl Into<String>, content: impl Into<String>, clue: Option<ClueId>) -> Self {
        FileNode {
            name: name.into(),
            kind: NodeKind::File(Leaf {
                content: content.into(),
                clue,
            }),
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder(_))
    }

    /// Children in display order, `None` for files
    pub fn children(&self) -> Option<&[Arc<FileNode>]> {
        match &self.kind {
            NodeKind::Folder(children) => Some(children),
            NodeKind::File(_) => None,
        }
    }

    /// Text content, `None` for folders
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Folder(_) => None,
            NodeKind::File(leaf) => Some(&leaf.content),
        }
    }

    pub fn clue(&self) -> Option<ClueId> {
        match &self.kind {
            NodeKind::File(leaf) => leaf.clue,
            NodeKind::Folder(_) => None,
        }
    }

    /// Direct child with the given name (names are unique per parent)
    pub fn find_child(&self, name: &str) -> Option<&Arc<FileNode>> {
        self.children()?.iter().find(|child| child.name == name)
    }
}
