use mindmaze::clock::ManualClock;
use mindmaze::gate::{GateStatus, PasswordGate};
use std::sync::Arc;
use std::time::Duration;

use crate::integration::support::{act, session};

fn gate() -> (PasswordGate, ManualClock) {
    let clock = ManualClock::new();
    (PasswordGate::with_defaults(Arc::new(clock.clone())), clock)
}

#[test]
fn unlock_phrase_is_case_insensitive() {
    for input in ["yen", "YEN", "Yen"] {
        let (mut g, _) = gate();
        assert_eq!(g.submit(input), GateStatus::Success);
    }
}

#[test]
fn mismatch_reverts_to_idle_after_delay() {
    let (mut g, clock) = gate();
    assert_eq!(g.submit("xyz"), GateStatus::Error);
    clock.advance(Duration::from_millis(600));
    assert_eq!(g.poll(), GateStatus::Idle);
}

#[test]
fn late_revert_never_resets_success() {
    let (mut g, clock) = gate();
    g.submit("xyz");
    clock.advance(Duration::from_millis(300));
    g.submit("yen");
    clock.advance(Duration::from_millis(600));
    assert_eq!(g.poll(), GateStatus::Success);
}

#[test]
fn configured_phrase_and_delay_are_used() {
    let clock = ManualClock::new();
    let mut g = PasswordGate::new("open sesame", Duration::from_millis(50), Arc::new(clock.clone()));
    assert_eq!(g.submit("yen"), GateStatus::Error);
    clock.advance(Duration::from_millis(50));
    assert_eq!(g.poll(), GateStatus::Idle);
    assert_eq!(g.submit("Open Sesame"), GateStatus::Success);
}

#[test]
fn scripted_session_solves_the_archive() {
    let (mut s, _) = session();
    act(&mut s, "open archive");
    act(&mut s, "submit why");
    assert_eq!(s.gate().status(), GateStatus::Error);
    act(&mut s, "wait 600");
    assert_eq!(s.gate().status(), GateStatus::Idle);
    act(&mut s, "submit yen");
    act(&mut s, "wait 10000");
    assert_eq!(s.gate().status(), GateStatus::Success);
}
