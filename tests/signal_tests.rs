// Host-side tests for scroll/pointer signals and their teardown.

use glam::Vec2;
use ronin_core::signal::{clamp_unit, scroll_fraction};
use ronin_core::{PointerSignal, ScrollScrub, Signals};

#[test]
fn pointer_rests_at_viewport_center() {
    let p = PointerSignal::default();
    assert_eq!(p.x(), 0.5);
    assert_eq!(p.y(), 0.5);
}

#[test]
fn pointer_is_normalized_by_viewport() {
    let p = PointerSignal::from_client(480.0, 270.0, Vec2::new(960.0, 540.0));
    assert_eq!(p, PointerSignal::new(0.5, 0.5));

    let corner = PointerSignal::from_client(960.0, 0.0, Vec2::new(960.0, 540.0));
    assert_eq!(corner, PointerSignal::new(1.0, 0.0));

    // collapsed viewport falls back to rest
    let p = PointerSignal::from_client(10.0, 10.0, Vec2::ZERO);
    assert_eq!(p, PointerSignal::default());
}

#[test]
fn clamp_unit_handles_nan_and_bounds() {
    assert_eq!(clamp_unit(f32::NAN), 0.0);
    assert_eq!(clamp_unit(-3.0), 0.0);
    assert_eq!(clamp_unit(3.0), 1.0);
    assert_eq!(clamp_unit(0.25), 0.25);
}

#[test]
fn scroll_fraction_spans_top_top_to_bottom_bottom() {
    // region 3000px tall in a 1000px viewport: 2000px of travel
    assert_eq!(scroll_fraction(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_fraction(-1000.0, 3000.0, 1000.0), 0.5);
    assert_eq!(scroll_fraction(-2000.0, 3000.0, 1000.0), 1.0);
    assert_eq!(scroll_fraction(-5000.0, 3000.0, 1000.0), 1.0);
    assert_eq!(scroll_fraction(250.0, 3000.0, 1000.0), 0.0);
}

#[test]
fn scroll_fraction_with_no_travel_is_a_step() {
    assert_eq!(scroll_fraction(10.0, 800.0, 1000.0), 0.0);
    assert_eq!(scroll_fraction(0.0, 800.0, 1000.0), 1.0);
}

#[test]
fn scrub_takes_first_sample_as_is() {
    let mut scrub = ScrollScrub::new(1.0);
    scrub.set_target(0.4);
    assert_eq!(scrub.value(), 0.4);
    assert!(!scrub.step(0.016));
}

#[test]
fn scrub_lags_then_catches_up_without_overshoot() {
    let mut scrub = ScrollScrub::new(1.0);
    scrub.set_target(0.0);
    scrub.set_target(1.0);

    assert!(scrub.step(0.1));
    let first = scrub.value();
    assert!(first > 0.0 && first < 1.0, "expected a partial follow, got {first}");

    let mut prev = first;
    for _ in 0..9 {
        scrub.step(0.1);
        assert!(scrub.value() >= prev);
        assert!(scrub.value() <= 1.0);
        prev = scrub.value();
    }
    // one smoothing period covers ~95% of the jump
    assert!(scrub.value() > 0.94, "got {}", scrub.value());

    for _ in 0..100 {
        scrub.step(0.05);
    }
    assert_eq!(scrub.value(), 1.0);
    assert!(!scrub.step(0.05));
}

#[test]
fn scrub_with_zero_smoothing_follows_directly() {
    let mut scrub = ScrollScrub::new(0.0);
    scrub.set_target(0.2);
    scrub.set_target(0.9);
    scrub.step(0.0);
    assert_eq!(scrub.value(), 0.9);
}

#[test]
fn scrub_clamps_target_and_ignores_bad_dt() {
    let mut scrub = ScrollScrub::new(1.0);
    scrub.set_target(4.0);
    assert_eq!(scrub.target(), 1.0);
    scrub.set_target(-1.0);
    assert_eq!(scrub.target(), 0.0);
    let before = scrub.value();
    scrub.step(f32::NAN);
    scrub.step(-1.0);
    assert_eq!(scrub.value(), before);
}

#[test]
fn handles_write_into_the_owner() {
    let signals = Signals::mount(1.0);
    let handle = signals.handle();

    assert!(handle.scrolled(-1000.0, 3000.0, 1000.0));
    assert!(handle.pointer_moved(0.0, 50.0, Vec2::new(100.0, 100.0)));

    let snap = signals.tick(0.0);
    assert_eq!(snap.progress, 0.5);
    assert_eq!(snap.pointer, PointerSignal::new(0.0, 0.5));
    assert_eq!(signals.writes(), 2);
}

#[test]
fn latest_pointer_move_wins_within_a_frame() {
    let signals = Signals::mount(1.0);
    let handle = signals.handle();
    let viewport = Vec2::new(100.0, 100.0);
    for i in 0..10 {
        handle.pointer_moved(i as f64 * 10.0, 20.0, viewport);
    }
    let snap = signals.tick(0.016);
    assert_eq!(snap.pointer, PointerSignal::new(0.9, 0.2));
}

#[test]
fn no_writes_after_teardown() {
    let signals = Signals::mount(1.0);
    let handle = signals.handle();
    assert!(handle.is_live());
    drop(signals);

    assert!(!handle.is_live());
    assert!(!handle.pointer_moved(10.0, 10.0, Vec2::new(100.0, 100.0)));
    assert!(!handle.scrolled(-500.0, 3000.0, 1000.0));
}

#[test]
fn remount_does_not_see_stale_handles() {
    let first = Signals::mount(1.0);
    let stale = first.handle();
    drop(first);

    let second = Signals::mount(1.0);
    assert!(!stale.pointer_moved(1.0, 1.0, Vec2::new(2.0, 2.0)));
    assert_eq!(second.writes(), 0);
    assert_eq!(second.snapshot().pointer, PointerSignal::default());
    assert_eq!(second.snapshot().progress, 0.0);
}
