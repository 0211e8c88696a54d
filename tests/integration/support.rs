use mindmaze::clock::ManualClock;
use mindmaze::config::MazeConfig;
use mindmaze::desktop::{ActionOutcome, Session};
use mindmaze::types::WindowId;
use std::sync::Arc;

pub fn session() -> (Session, ManualClock) {
    let clock = ManualClock::new();
    let session = Session::new(MazeConfig::default(), Arc::new(clock.clone()));
    (session, clock)
}

pub fn act(session: &mut Session, line: &str) -> ActionOutcome {
    session.apply(line.parse().expect("valid action"))
}

pub fn wid(id: &str) -> WindowId {
    WindowId::new(id)
}
