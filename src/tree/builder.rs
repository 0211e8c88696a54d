//! Static definition of the puzzle's file system

use crate::clues::{ClueId, ClueRegistry};
use crate::tree::node::FileNode;
use std::sync::Arc;

/// Name of the hidden root folder
pub const ROOT_NAME: &str = "???";

/// Content shown by every decoy file
pub const DECOY_MESSAGE: &str = "This is not the clue you're looking for. Keep searching.";

fn decoy(name: &str) -> FileNode {
    FileNode::file(name, DECOY_MESSAGE, None)
}

fn clue(id: u32) -> FileNode {
    match ClueId::new(id) {
        Some(id) => {
            let clue = ClueRegistry::new().get(id);
            FileNode::file(clue.filename, clue.riddle, Some(id))
        }
        // Out-of-range ids are a typo in the table below; placement verification reports them.
        None => FileNode::file("Unknown_File.txt", "", None),
    }
}

fn folder(name: &str, children: Vec<FileNode>) -> FileNode {
    FileNode::folder(name, children)
}

/// Build the session's file system. Deterministic, no inputs, no side effects.
pub fn build_file_system() -> Arc<FileNode> {
    Arc::new(folder(
        ROOT_NAME,
        vec![
            folder(
                "System",
                vec![
                    folder("Logs", vec![decoy("error_log_14.txt"), clue(3)]),
                    folder("Config", vec![decoy("settings.txt"), clue(7)]),
                    folder("Drivers", vec![clue(10)]),
                ],
            ),
            folder(
                "Users",
                vec![
                    folder(
                        "Admin",
                        vec![
                            folder("Documents", vec![clue(1), decoy("notes_backup.txt")]),
                            folder("Downloads", vec![clue(5), decoy("readme.txt")]),
                        ],
                    ),
                    folder("Guest", vec![clue(8), decoy("temp.txt")]),
                ],
            ),
            folder(
                "Programs",
                vec![
                    folder("Utilities", vec![clue(12)]),
                    folder("Games", vec![clue(6), decoy("scores.txt")]),
                ],
            ),
            folder(
                "Archive",
                vec![
                    folder("1995_Backup", vec![clue(2), decoy("old_data.txt")]),
                    folder("2000_Backup", vec![clue(9)]),
                    folder("Misc", vec![clue(11), clue(4)]),
                ],
            ),
            folder(
                "Network",
                vec![
                    folder("Shared", vec![clue(13)]),
                    folder("Private", vec![clue(15)]),
                ],
            ),
            folder(
                "Temp",
                vec![clue(14), decoy("~temp001.txt"), decoy("cache.txt")],
            ),
        ],
    ))
}
