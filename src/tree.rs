//! Virtual File System
//!
//! A static, immutable folder/file tree built once per session. Nodes are shared
//! as `Arc<FileNode>` between any number of explorer windows.

pub mod builder;
pub mod node;
pub mod walker;

pub use builder::{build_file_system, DECOY_MESSAGE, ROOT_NAME};
pub use node::{FileNode, Leaf, NodeKind};
pub use walker::{walk, WalkEntry};
