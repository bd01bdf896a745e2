use safe_bump::Idx;

use crate::Table;
use crate::scanner::{Phase, Probe, ScanState};

fn hit(is_endpoint: bool) -> Probe {
    Probe::Hit {
        node: Idx::from_raw(7),
        is_endpoint,
    }
}

#[test]
fn new_state() {
    let state = ScanState::new(5);
    assert_eq!(state.phase, Phase::Scanning);
    assert_eq!(state.position(), 5);
    assert_eq!(state.cursor, 0);
    assert_eq!(state.last_endpoint_len, 0);
    assert_eq!(state.resume_at, 6);
    assert!(matches!(state.table, Table::Root));
    assert_eq!(state.token(), None);
}

#[test]
fn hit_descends_without_checkpoint() {
    let state = ScanState::new(2).step(hit(false));
    assert_eq!(state.phase, Phase::Scanning);
    assert_eq!(state.cursor, 1);
    assert_eq!(state.position(), 3);
    assert_eq!(state.last_endpoint_len, 0);
    assert_eq!(state.resume_at, 3);
    assert!(matches!(state.table, Table::Children(node) if node.into_raw() == 7));
}

#[test]
fn endpoint_hit_moves_checkpoint() {
    let state = ScanState::new(2)
        .step(hit(false))
        .step(hit(true))
        .step(hit(false));
    assert_eq!(state.cursor, 3);
    assert_eq!(state.last_endpoint_len, 2);
    assert_eq!(state.resume_at, 4);
}

#[test]
fn miss_without_endpoint_cuts_singleton() {
    let state = ScanState::new(4).step(hit(false)).step(hit(false)).step(Probe::Miss);
    assert_eq!(state.phase, Phase::Flushing);
    assert_eq!(state.last_endpoint_len, 1);
    assert_eq!(state.resume_at, 5);
    assert_eq!(state.token(), Some(4..5));
}

#[test]
fn miss_on_first_code_point_cuts_singleton() {
    let state = ScanState::new(0).step(Probe::Miss);
    assert_eq!(state.token(), Some(0..1));
    assert_eq!(state.resume_at, 1);
}

#[test]
fn miss_after_endpoint_cuts_longest_match() {
    let state = ScanState::new(1)
        .step(hit(true))
        .step(hit(true))
        .step(hit(false))
        .step(Probe::Miss);
    assert_eq!(state.token(), Some(1..3));
    assert_eq!(state.resume_at, 3);
}

#[test]
fn flushing_state_ignores_probes() {
    let flushed = ScanState::new(0).step(hit(true)).step(Probe::Miss);
    let after = flushed.step(hit(true));
    assert_eq!(after.phase, Phase::Flushing);
    assert_eq!(after.cursor, flushed.cursor);
    assert_eq!(after.token(), flushed.token());
}

#[test]
fn restart_begins_at_resume_point() {
    let next = ScanState::new(0)
        .step(hit(true))
        .step(hit(false))
        .step(Probe::Miss)
        .restart();
    assert_eq!(next.start, 1);
    assert_eq!(next.cursor, 0);
    assert_eq!(next.last_endpoint_len, 0);
    assert_eq!(next.phase, Phase::Scanning);
    assert!(matches!(next.table, Table::Root));
}

#[test]
fn resume_always_progresses() {
    for probes in [
        vec![Probe::Miss],
        vec![hit(false), Probe::Miss],
        vec![hit(false), hit(false), hit(false), Probe::Miss],
        vec![hit(true), Probe::Miss],
    ] {
        let state = probes
            .into_iter()
            .fold(ScanState::new(10), ScanState::step);
        assert!(state.resume_at > state.start);
    }
}

#[test]
fn state_debug() {
    let debug = format!("{:?}", ScanState::new(3));
    assert!(debug.contains("start: 3"));
    assert!(debug.contains("Scanning"));
}
