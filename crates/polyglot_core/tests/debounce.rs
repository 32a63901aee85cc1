use std::time::{Duration, Instant};

use polyglot_core::{Debouncer, DEBOUNCE_WINDOW};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn initial_value_is_emitted_immediately() {
    let start = Instant::now();
    let mut debouncer = Debouncer::with_initial("initial".to_string(), DEBOUNCE_WINDOW, start);

    assert_eq!(debouncer.poll(start), Some("initial".to_string()));
    assert!(!debouncer.is_pending());
}

#[test]
fn update_settles_only_after_quiet_window() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(DEBOUNCE_WINDOW);

    debouncer.push("updated", start);
    assert_eq!(debouncer.poll(start + ms(499)), None);
    assert_eq!(debouncer.deadline(), Some(start + ms(500)));
    assert_eq!(debouncer.poll(start + ms(500)), Some("updated"));
    assert_eq!(debouncer.poll(start + ms(2000)), None);
}

#[test]
fn burst_collapses_to_final_value() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(DEBOUNCE_WINDOW);

    debouncer.push("change1", start);
    debouncer.push("change2", start + ms(200));
    debouncer.push("change3", start + ms(400));

    // 500ms after the first push, but the timer restarted on every update.
    assert_eq!(debouncer.poll(start + ms(500)), None);
    assert_eq!(debouncer.poll(start + ms(899)), None);
    assert_eq!(debouncer.poll(start + ms(900)), Some("change3"));
    assert_eq!(debouncer.poll(start + ms(5000)), None);
}

#[test]
fn continuous_updates_never_settle() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(DEBOUNCE_WINDOW);

    for step in 0..50u64 {
        let now = start + ms(step * 100);
        debouncer.push(step, now);
        assert_eq!(debouncer.poll(now + ms(99)), None);
    }
    assert!(debouncer.is_pending());
}

#[test]
fn value_equal_to_last_settled_is_not_reemitted() {
    let start = Instant::now();
    let mut debouncer = Debouncer::with_initial("fn main() {}", DEBOUNCE_WINDOW, start);
    assert_eq!(debouncer.poll(start), Some("fn main() {}"));

    debouncer.push("fn main() {}x", start + ms(10));
    debouncer.push("fn main() {}", start + ms(20));

    assert_eq!(debouncer.poll(start + ms(600)), None);
    assert!(!debouncer.is_pending());
}
