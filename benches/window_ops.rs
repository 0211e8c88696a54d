use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mindmaze::clock::ManualClock;
use mindmaze::config::MazeConfig;
use mindmaze::desktop::{DesktopAction, Session};
use mindmaze::types::WindowId;
use mindmaze::window::{WindowKind, WindowManager};
use std::sync::Arc;

fn populated(count: usize) -> (WindowManager, Vec<WindowId>) {
    let mut wm = WindowManager::new();
    let ids: Vec<WindowId> = (0..count).map(|i| WindowId::new(format!("file-{}", i))).collect();
    for id in &ids {
        wm.open(id.clone(), id.as_str(), WindowKind::TextViewer(String::new()));
    }
    (wm, ids)
}

fn bench_active_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("active_window");
    for count in [4usize, 16, 64] {
        let (wm, _) = populated(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &wm, |b, wm| {
            b.iter(|| black_box(wm.active_window_id()))
        });
    }
    group.finish();
}

fn bench_focus_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("focus_cycle");
    for count in [4usize, 16, 64] {
        let (mut wm, ids) = populated(count);
        group.bench_function(BenchmarkId::from_parameter(count), |b| {
            b.iter(|| {
                for id in &ids {
                    black_box(wm.focus(id));
                }
            })
        });
    }
    group.finish();
}

fn bench_session_script(c: &mut Criterion) {
    let lines = [
        "open explorer",
        "cd System",
        "cd Logs",
        "view Frontend_Framework.js",
        "focus explorer",
        "back",
        "open notes",
        "answer 3 React",
        "open archive",
        "submit nope",
        "wait 600",
    ];
    let actions: Vec<DesktopAction> = lines.iter().filter_map(|l| l.parse().ok()).collect();
    c.bench_function("session_script", |b| {
        b.iter(|| {
            let mut session = Session::new(MazeConfig::default(), Arc::new(ManualClock::new()));
            for action in &actions {
                black_box(session.apply(action.clone()));
            }
            black_box(session.snapshot())
        })
    });
}

criterion_group!(benches, bench_active_window, bench_focus_cycle, bench_session_script);
criterion_main!(benches);
