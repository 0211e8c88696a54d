use mindmaze::clues::{get_clue, verify_placement, ClueId, CLUE_COUNT};
use mindmaze::tree::{build_file_system, walk, DECOY_MESSAGE};
use std::collections::HashMap;

#[test]
fn every_clue_is_hidden_exactly_once() {
    let root = build_file_system();
    let mut seen: HashMap<ClueId, usize> = HashMap::new();
    for entry in walk(&root) {
        if let Some(id) = entry.node.clue() {
            *seen.entry(id).or_default() += 1;
        }
    }
    assert_eq!(seen.len(), CLUE_COUNT);
    assert!(seen.values().all(|count| *count == 1));
    assert!(verify_placement(&root).valid);
}

#[test]
fn clue_leaves_carry_their_riddle() {
    for entry in walk(&build_file_system()) {
        let Some(id) = entry.node.clue() else { continue };
        let clue = get_clue(id.get()).unwrap();
        assert_eq!(entry.node.name, clue.filename);
        assert_eq!(entry.node.content(), Some(clue.riddle));
    }
}

#[test]
fn folders_and_files_never_mix() {
    for entry in walk(&build_file_system()) {
        let node = &entry.node;
        assert_eq!(node.is_folder(), node.children().is_some());
        assert_eq!(node.is_folder(), node.content().is_none());
        if !node.is_folder() && node.clue().is_none() {
            assert_eq!(node.content(), Some(DECOY_MESSAGE));
        }
    }
}

#[test]
fn sibling_names_are_unique() {
    for entry in walk(&build_file_system()) {
        if let Some(children) = entry.node.children() {
            let mut names: Vec<_> = children.iter().map(|c| c.name.as_str()).collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "duplicate name under {}", entry.display_path());
        }
    }
}

#[test]
fn get_clue_bounds() {
    for id in 1..=15 {
        assert!(!get_clue(id).unwrap().riddle.is_empty());
    }
    assert!(get_clue(0).is_none());
    assert!(get_clue(16).is_none());
}
