use mindmaze::window::{WindowKind, WindowManager};
use std::sync::Arc;

use crate::integration::support::{act, session, wid};

#[test]
fn end_to_end_focus_and_minimize_scenario() {
    let mut wm = WindowManager::new();

    wm.open("final", "Password Required", WindowKind::PasswordGate);
    assert_eq!(wm.len(), 1);
    assert_eq!(wm.active_window_id(), Some(&wid("final")));

    wm.open("notes", "My Notes", WindowKind::ClueTracker);
    assert_eq!(wm.len(), 2);
    assert_eq!(wm.active_window_id(), Some(&wid("notes")));

    wm.focus(&wid("final"));
    assert_eq!(wm.active_window_id(), Some(&wid("final")));
    assert_eq!(wm.len(), 2);

    wm.toggle_minimize(&wid("final"));
    assert_eq!(wm.active_window_id(), Some(&wid("notes")));

    wm.toggle_minimize(&wid("final"));
    wm.focus(&wid("final"));
    assert_eq!(wm.active_window_id(), Some(&wid("final")));
}

#[test]
fn reopening_an_explorer_does_not_reset_navigation() {
    let (mut s, _) = session();
    act(&mut s, "open explorer");
    act(&mut s, "cd Archive");
    act(&mut s, "cd Misc");
    act(&mut s, "open notes");
    act(&mut s, "open explorer");

    assert_eq!(s.windows().len(), 2);
    assert_eq!(
        s.breadcrumb(&wid("explorer")).unwrap(),
        vec!["???", "Archive", "Misc"]
    );
    assert_eq!(s.windows().active_window_id(), Some(&wid("explorer")));
}

#[test]
fn close_then_open_is_a_brand_new_window() {
    let (mut s, _) = session();
    act(&mut s, "open explorer");
    act(&mut s, "cd Users");
    let first_order = s.windows().get(&wid("explorer")).unwrap().stack_order;

    act(&mut s, "close explorer");
    act(&mut s, "open explorer");

    let record = s.windows().get(&wid("explorer")).unwrap();
    assert!(record.stack_order > first_order);
    assert!(!record.minimized);
    assert_eq!(s.breadcrumb(&wid("explorer")).unwrap(), vec!["???"]);
    assert!(Arc::ptr_eq(
        &s.current_folder(&wid("explorer")).unwrap(),
        s.tree()
    ));
}

#[test]
fn text_viewers_dedupe_by_leaf_name() {
    let (mut s, _) = session();
    act(&mut s, "open explorer");
    act(&mut s, "cd Temp");
    act(&mut s, "view cache.txt");
    act(&mut s, "focus explorer");
    act(&mut s, "view cache.txt");

    let viewers = s
        .windows()
        .windows()
        .iter()
        .filter(|w| w.id.as_str() == "file-cache.txt")
        .count();
    assert_eq!(viewers, 1);
    assert_eq!(s.windows().active_window_id(), Some(&wid("file-cache.txt")));
}

#[test]
fn taskbar_reflects_every_open_window() {
    let (mut s, _) = session();
    act(&mut s, "open archive");
    act(&mut s, "open notes");
    act(&mut s, "open explorer");
    act(&mut s, "min explorer");

    let taskbar = s.windows().list_for_taskbar();
    let ids: Vec<_> = taskbar.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["final", "notes", "explorer"]);
    let active: Vec<_> = taskbar.iter().filter(|e| e.active).map(|e| e.id.as_str()).collect();
    assert_eq!(active, vec!["notes"]);

    act(&mut s, "taskbar explorer");
    let explorer = s.windows().get(&wid("explorer")).unwrap();
    assert!(!explorer.minimized);
}

#[test]
fn stale_ids_never_disturb_the_session() {
    let (mut s, _) = session();
    act(&mut s, "open notes");
    let before = s.windows().top_stack_order();
    for line in ["close ghost", "focus ghost", "min ghost", "taskbar ghost", "drag ghost 1 1"] {
        act(&mut s, line);
    }
    assert_eq!(s.windows().top_stack_order(), before);
    assert_eq!(s.windows().len(), 1);
}
