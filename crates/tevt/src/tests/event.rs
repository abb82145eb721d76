use std::time::Duration;

use crate::clock::ManualClock;
use crate::event::{Schedulable, TimedEvent};

fn one_shot(clock: &ManualClock, wait: Duration) -> TimedEvent<ManualClock> {
    TimedEvent::with_clock(clock.clone(), false, wait)
}

fn repeating(clock: &ManualClock, wait: Duration) -> TimedEvent<ManualClock> {
    TimedEvent::with_clock(clock.clone(), true, wait)
}

#[test]
fn new_event_is_pending() {
    let clock = ManualClock::new();
    let event = one_shot(&clock, Duration::from_millis(100));

    assert_eq!(event.lateness(), -0.1);
    assert!(!event.is_due());
    assert!(!event.is_handled());
    assert!(!event.should_handle());
}

#[test]
fn one_shot_not_due_before_wait() {
    let clock = ManualClock::new();
    let mut event = one_shot(&clock, Duration::from_millis(100));

    for _ in 0..99 {
        clock.advance(Duration::from_millis(1));
        assert!(!event.should_handle());
        assert!(!event.handle());
    }
    assert!(!event.is_handled());
}

#[test]
fn one_shot_handles_once() {
    let clock = ManualClock::new();
    let mut event = one_shot(&clock, Duration::from_millis(100));

    clock.advance(Duration::from_millis(100));
    assert!(event.is_due());
    assert!(event.should_handle());
    assert!(event.handle());
    assert!(event.is_handled());

    for _ in 0..5 {
        clock.advance(Duration::from_secs(1));
        assert!(event.is_due());
        assert!(!event.should_handle());
        assert!(!event.handle());
        assert!(event.is_handled());
    }
}

#[test]
fn zero_wait_is_due_immediately() {
    let clock = ManualClock::new();
    let mut event = one_shot(&clock, Duration::ZERO);

    assert_eq!(event.lateness(), 0.0);
    assert!(event.handle());
}

#[test]
fn one_shot_polled_every_twenty_millis() {
    let clock = ManualClock::new();
    let mut event = one_shot(&clock, Duration::from_millis(100));
    let mut results = Vec::new();

    for _ in 0..10 {
        clock.advance(Duration::from_millis(20));
        results.push(event.should_handle());
        event.handle();
    }

    assert_eq!(
        results,
        [false, false, false, false, true, false, false, false, false, false]
    );
}

#[test]
fn handle_before_due_has_no_side_effect() {
    let clock = ManualClock::new();
    let mut event = repeating(&clock, Duration::from_millis(100));

    clock.advance(Duration::from_millis(60));
    let before = event.lateness();
    assert!(!event.handle());
    assert_eq!(event.lateness(), before);
}

#[test]
fn repeating_event_is_never_handled() {
    let clock = ManualClock::new();
    let mut event = repeating(&clock, Duration::from_millis(10));

    for _ in 0..20 {
        assert!(!event.is_handled());
        clock.advance(Duration::from_millis(7));
        event.handle();
        assert!(!event.is_handled());
    }
}

#[test]
fn repeating_rearms_from_handling_time() {
    let clock = ManualClock::new();
    let mut event = repeating(&clock, Duration::from_millis(100));

    clock.advance(Duration::from_millis(250));
    assert!(event.lateness() > 0.0);
    assert!(event.handle());

    // Overdue time is not carried into the next cycle.
    assert_eq!(event.lateness(), -0.1);
    clock.advance(Duration::from_millis(50));
    assert!(!event.handle());
    clock.advance(Duration::from_millis(50));
    assert!(event.handle());
}

#[test]
fn fast_polling_fires_once_per_wait() {
    let clock = ManualClock::new();
    let mut event = repeating(&clock, Duration::from_millis(50));
    let mut fired = 0;

    // 1s at 10ms intervals.
    for _ in 0..100 {
        clock.advance(Duration::from_millis(10));
        if event.handle() {
            fired += 1;
        }
    }

    assert!((19..=21).contains(&fired), "fired {fired} times");
}

#[test]
fn slow_polling_accumulates_no_backlog() {
    let clock = ManualClock::new();
    let mut event = repeating(&clock, Duration::from_millis(10));

    for _ in 0..10 {
        clock.advance(Duration::from_millis(35));
        assert!(event.handle());
        assert!(!event.handle());
        assert_eq!(event.lateness(), -0.01);
    }
}

#[test]
fn lateness_is_monotonic_without_handle() {
    let clock = ManualClock::new();
    let event = repeating(&clock, Duration::from_millis(30));
    let mut last = event.lateness();

    for step in [0, 1, 5, 10, 0, 20, 100] {
        clock.advance(Duration::from_millis(step));
        let lateness = event.lateness();
        assert!(lateness >= last);
        last = lateness;
    }
}

#[test]
fn accessors_report_construction_values() {
    let clock = ManualClock::new();
    let event = repeating(&clock, Duration::from_millis(75));

    assert!(event.is_repeated());
    assert_eq!(event.wait_time(), Duration::from_millis(75));
    assert!(!one_shot(&clock, Duration::ZERO).is_repeated());
}

#[test]
fn system_clock_event_becomes_due() {
    let mut event = TimedEvent::new(false, Duration::from_millis(20));
    assert!(!event.should_handle());

    std::thread::sleep(Duration::from_millis(25));
    assert!(event.should_handle());
    assert!(event.handle());
    assert!(!event.handle());
}
