use std::time::Duration;

use crate::clock::{Clock, ManualClock, SystemClock};

#[test]
fn manual_clock_clones_share_offset() {
    let clock = ManualClock::new();
    let probe = clock.clone();
    let before = probe.now();

    clock.advance(Duration::from_millis(250));

    assert_eq!(probe.elapsed(), Duration::from_millis(250));
    assert_eq!(probe.now() - before, Duration::from_millis(250));
}

#[test]
fn manual_clock_never_moves_backwards() {
    let clock = ManualClock::new();
    clock.set_elapsed(Duration::from_secs(2));
    clock.set_elapsed(Duration::from_secs(1));
    assert_eq!(clock.elapsed(), Duration::from_secs(2));
}

#[test]
fn system_clock_is_monotonic() {
    let clock = SystemClock;
    let first = clock.now();
    let second = clock.now();
    assert!(second >= first);
}
