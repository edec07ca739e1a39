// Host-side tests for the animation clock.

use folio_core::AnimationClock;
use instant::Instant;
use std::time::Duration;

#[test]
fn elapsed_counts_from_mount() {
    let t0 = Instant::now();
    let mut clock = AnimationClock::mount_at(t0);
    let f1 = clock.tick_at(t0 + Duration::from_millis(16)).unwrap();
    let f2 = clock.tick_at(t0 + Duration::from_millis(33)).unwrap();
    assert!((f1.elapsed - 0.016).abs() < 1e-6);
    assert!((f2.elapsed - 0.033).abs() < 1e-6);
    assert_eq!(clock.frames(), 2);
}

#[test]
fn elapsed_never_goes_backwards() {
    let t0 = Instant::now();
    let mut clock = AnimationClock::mount_at(t0);
    let late = clock.tick_at(t0 + Duration::from_millis(50)).unwrap();
    let early = clock.tick_at(t0 + Duration::from_millis(20)).unwrap();
    assert_eq!(early.elapsed, late.elapsed);
}

#[test]
fn unmount_stops_all_further_ticks() {
    let t0 = Instant::now();
    let mut clock = AnimationClock::mount_at(t0);
    assert!(clock.tick_at(t0).is_some());
    clock.unmount();
    assert!(!clock.is_mounted());
    assert!(clock.tick_at(t0 + Duration::from_secs(1)).is_none());
    assert!(clock.tick().is_none());
    assert_eq!(clock.frames(), 1);
}

#[test]
fn suspended_clock_resumes_with_wall_clock_elapsed() {
    let t0 = Instant::now();
    let mut clock = AnimationClock::mount_at(t0);
    assert!(clock.tick_at(t0 + Duration::from_millis(100)).is_some());
    assert!(clock.suspend());
    assert!(!clock.suspend());
    assert!(clock.is_mounted());
    assert!(!clock.is_running());
    assert!(clock.tick_at(t0 + Duration::from_millis(200)).is_none());

    assert!(clock.resume());
    let f = clock.tick_at(t0 + Duration::from_secs(5)).unwrap();
    assert!((f.elapsed - 5.0).abs() < 1e-6);
    assert_eq!(clock.frames(), 2);
}

#[test]
fn unmounted_clock_cannot_be_resumed() {
    let t0 = Instant::now();
    let mut clock = AnimationClock::mount_at(t0);
    assert!(clock.suspend());
    clock.unmount();
    assert!(!clock.resume());
    assert!(clock.tick_at(t0 + Duration::from_secs(1)).is_none());

    let mut running = AnimationClock::mount_at(t0);
    assert!(!running.resume());
    assert!(running.is_running());
}
