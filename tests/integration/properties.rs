use mindmaze::explorer::ExplorerNavigator;
use mindmaze::tree::build_file_system;
use mindmaze::types::WindowId;
use mindmaze::window::{WindowKind, WindowManager};
use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Clone)]
enum Op {
    Open(usize),
    Close(usize),
    Focus(usize),
    Minimize(usize),
    Taskbar(usize),
}

const IDS: [&str; 4] = ["final", "notes", "explorer", "file-readme.txt"];

fn op() -> impl Strategy<Value = Op> {
    let idx = 0..IDS.len();
    prop_oneof![
        idx.clone().prop_map(Op::Open),
        idx.clone().prop_map(Op::Close),
        idx.clone().prop_map(Op::Focus),
        idx.clone().prop_map(Op::Minimize),
        idx.prop_map(Op::Taskbar),
    ]
}

fn apply(wm: &mut WindowManager, op: &Op) {
    match op {
        Op::Open(i) => {
            wm.open(IDS[*i], IDS[*i], WindowKind::TextViewer(IDS[*i].to_string()));
        }
        Op::Close(i) => {
            wm.close(&WindowId::new(IDS[*i]));
        }
        Op::Focus(i) => {
            wm.focus(&WindowId::new(IDS[*i]));
        }
        Op::Minimize(i) => {
            wm.toggle_minimize(&WindowId::new(IDS[*i]));
        }
        Op::Taskbar(i) => {
            wm.activate_from_taskbar(&WindowId::new(IDS[*i]));
        }
    }
}

proptest! {
    #[test]
    fn active_window_is_highest_visible_stack_order(ops in prop::collection::vec(op(), 0..60)) {
        let mut wm = WindowManager::new();
        for op in &ops {
            apply(&mut wm, op);

            let expected = wm
                .windows()
                .iter()
                .filter(|w| !w.minimized)
                .max_by_key(|w| w.stack_order)
                .map(|w| w.id.clone());
            prop_assert_eq!(wm.active_window_id().cloned(), expected);

            let ids: HashSet<_> = wm.windows().iter().map(|w| w.id.clone()).collect();
            prop_assert_eq!(ids.len(), wm.len());

            let orders: HashSet<_> = wm.windows().iter().map(|w| w.stack_order).collect();
            prop_assert_eq!(orders.len(), wm.len());

            let active_flags = wm.list_for_taskbar().iter().filter(|e| e.active).count();
            prop_assert!(active_flags <= 1);
        }
    }

    #[test]
    fn descend_then_back_round_trips(path in prop::collection::vec(0usize..8, 0..6)) {
        let root = build_file_system();
        let mut nav = ExplorerNavigator::new(Arc::clone(&root));
        for choice in path {
            let folders: Vec<_> = nav
                .current_folder()
                .children()
                .unwrap_or_default()
                .iter()
                .filter(|c| c.is_folder())
                .cloned()
                .collect();
            if folders.is_empty() {
                break;
            }
            let before = Arc::clone(nav.current_folder());
            let depth = nav.depth();
            let target = Arc::clone(&folders[choice % folders.len()]);
            prop_assert!(nav.descend(Arc::clone(&target)));
            prop_assert!(Arc::ptr_eq(nav.current_folder(), &target));
            prop_assert!(nav.go_back());
            prop_assert!(Arc::ptr_eq(nav.current_folder(), &before));
            prop_assert_eq!(nav.depth(), depth);
            nav.descend(target);
        }
        while nav.go_back() {}
        prop_assert!(Arc::ptr_eq(nav.current_folder(), &root));
        prop_assert!(!nav.go_back());
    }
}
