//! Minimal driver loop polling a few events against the system clock.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tevt::{JobEvent, PriorityEvent, Schedulable};

fn main() {
    let ticks = Arc::new(AtomicUsize::new(0));
    let counter = ticks.clone();

    let mut heartbeat = JobEvent::new(
        move || {
            counter.fetch_add(1, Ordering::Relaxed);
        },
        true,
        Duration::from_millis(50),
    );
    let mut shutdown = PriorityEvent::new(
        || println!("shutdown requested"),
        10,
        false,
        Duration::from_millis(500),
    );

    let started = Instant::now();
    while !shutdown.is_handled() {
        heartbeat.handle();
        shutdown.handle();
        thread::sleep(Duration::from_millis(10));
    }

    println!(
        "{} heartbeats in {:.3}s",
        ticks.load(Ordering::Relaxed),
        started.elapsed().as_secs_f64()
    );
}
