//! Tests for the countdown timer state machine.

use std::time::{Duration, Instant};
use tablar::CountdownTimer;

const TOTAL: Duration = Duration::from_secs(30);

#[test]
fn test_new_timer_is_stopped_and_full() {
    let timer = CountdownTimer::new(TOTAL);
    assert!(!timer.is_running());
    assert_eq!(timer.time_left(), TOTAL);
    assert_eq!(timer.label(), "00:30");
    assert_eq!(timer.elapsed_fraction(), 0.0);
}

#[test]
fn test_tick_while_paused_is_a_no_op() {
    let mut timer = CountdownTimer::new(TOTAL);
    let now = Instant::now();
    timer.tick(now + Duration::from_secs(10));
    assert_eq!(timer.time_left(), TOTAL);
}

#[test]
fn test_running_timer_counts_down() {
    let mut timer = CountdownTimer::new(TOTAL);
    let now = Instant::now();

    timer.toggle(now);
    assert!(timer.is_running());

    timer.tick(now + Duration::from_secs(12));
    assert_eq!(timer.time_left(), Duration::from_secs(18));
    assert_eq!(timer.label(), "00:18");
}

#[test]
fn test_pause_pins_remaining_time() {
    let mut timer = CountdownTimer::new(TOTAL);
    let now = Instant::now();

    timer.toggle(now);
    timer.toggle(now + Duration::from_secs(10));
    assert!(!timer.is_running());
    assert_eq!(timer.time_left(), Duration::from_secs(20));

    // Paused time does not drain.
    timer.tick(now + Duration::from_secs(25));
    assert_eq!(timer.time_left(), Duration::from_secs(20));
}

#[test]
fn test_resume_extends_end_time() {
    let mut timer = CountdownTimer::new(TOTAL);
    let now = Instant::now();

    timer.toggle(now);
    timer.toggle(now + Duration::from_secs(10)); // pause with 20s left
    timer.toggle(now + Duration::from_secs(60)); // resume much later

    timer.tick(now + Duration::from_secs(65));
    assert_eq!(timer.time_left(), Duration::from_secs(15));
}

#[test]
fn test_reaching_zero_auto_resets() {
    let mut timer = CountdownTimer::new(TOTAL);
    let now = Instant::now();

    timer.toggle(now);
    timer.tick(now + Duration::from_secs(31));

    assert!(!timer.is_running());
    assert_eq!(timer.time_left(), TOTAL);
}

#[test]
fn test_reset_stops_and_refills() {
    let mut timer = CountdownTimer::new(TOTAL);
    let now = Instant::now();

    timer.toggle(now);
    timer.tick(now + Duration::from_secs(5));
    timer.reset();

    assert!(!timer.is_running());
    assert_eq!(timer.time_left(), TOTAL);
}

#[test]
fn test_elapsed_fraction_progresses() {
    let mut timer = CountdownTimer::new(Duration::from_secs(100));
    let now = Instant::now();

    timer.toggle(now);
    timer.tick(now + Duration::from_secs(25));

    let fraction = timer.elapsed_fraction();
    assert!((fraction - 0.25).abs() < 1e-9);
}
