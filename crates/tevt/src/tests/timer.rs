use std::time::Duration;

use crate::clock::ManualClock;
use crate::timer::Timer;

#[test]
fn time_passed_between_start_and_stop() {
    let clock = ManualClock::new();
    let mut timer = Timer::with_clock(clock.clone());

    timer.start();
    clock.advance(Duration::from_millis(1500));
    timer.stop();

    assert_eq!(timer.time_passed(), 1.5);
}

#[test]
fn fresh_timer_reports_zero() {
    let timer = Timer::with_clock(ManualClock::new());
    assert_eq!(timer.time_passed(), 0.0);
}

#[test]
fn restart_without_stop_leaves_stale_reading() {
    let clock = ManualClock::new();
    let mut timer = Timer::with_clock(clock.clone());

    timer.start();
    clock.advance(Duration::from_secs(1));
    timer.stop();
    clock.advance(Duration::from_secs(3));
    timer.start();

    // End still points at the first stop, before the new start.
    assert_eq!(timer.time_passed(), -3.0);
    assert!(timer.stopped_at() < timer.started_at());
}

#[test]
fn system_timer_measures_sleep() {
    let mut timer = Timer::new();
    timer.start();
    std::thread::sleep(Duration::from_millis(10));
    timer.stop();
    assert!(timer.time_passed() >= 0.01);
}
