//! Verification that every clue is reachable exactly once.

use crate::clues::{ClueId, CLUE_COUNT};
use crate::tree::{walk, FileNode};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Result of checking clue placement across a file system
#[derive(Debug, Clone, Serialize)]
pub struct PlacementReport {
    pub valid: bool,
    pub leaf_count: usize,
    pub decoy_count: usize,
    pub missing: Vec<ClueId>,
    pub duplicated: Vec<ClueId>,
    /// Clue id -> path of the leaf that holds it
    pub locations: BTreeMap<ClueId, String>,
}

/// Walk `root` and check that ids 1..=15 each tag exactly one leaf.
pub fn verify_placement(root: &Arc<FileNode>) -> PlacementReport {
    let mut counts = [0usize; CLUE_COUNT];
    let mut locations = BTreeMap::new();
    let mut leaf_count = 0;
    let mut decoy_count = 0;

    for entry in walk(root) {
        if entry.node.is_folder() {
            continue;
        }
        leaf_count += 1;
        match entry.node.clue() {
            Some(id) => {
                counts[id.index()] += 1;
                locations.entry(id).or_insert_with(|| entry.display_path());
            }
            None => decoy_count += 1,
        }
    }

    let missing: Vec<_> = ClueId::all().filter(|id| counts[id.index()] == 0).collect();
    let duplicated: Vec<_> = ClueId::all().filter(|id| counts[id.index()] > 1).collect();

    PlacementReport {
        valid: missing.is_empty() && duplicated.is_empty(),
        leaf_count,
        decoy_count,
        missing,
        duplicated,
        locations,
    }
}
