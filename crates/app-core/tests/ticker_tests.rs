// Host-side tests for frame timing.

use app_core::*;

#[test]
fn first_frame_has_zero_delta() {
    let mut s = FrameScheduler::new();
    let t = s.advance(12.5);
    assert_eq!(t.elapsed_secs, 0.0);
    assert_eq!(t.delta_secs, 0.0);
    assert_eq!(t.delta_ratio, 0.0);
}

#[test]
fn sixty_hertz_frames_have_unit_ratio() {
    let mut s = FrameScheduler::new();
    s.advance(0.0);
    let t = s.advance(1.0 / 60.0);
    assert!((t.delta_ratio - 1.0).abs() < 1e-4);
    let t = s.advance(1.0 / 60.0 + 1.0 / 120.0);
    assert!((t.delta_ratio - 0.5).abs() < 1e-4);
    assert!((t.elapsed_secs - 0.025).abs() < 1e-6);
}

#[test]
fn long_gaps_are_lag_smoothed_but_elapsed_is_not() {
    let mut s = FrameScheduler::new();
    s.advance(1.0);
    let t = s.advance(11.0);
    assert!((t.delta_secs - 0.033).abs() < 1e-6);
    assert!((t.delta_ratio - 0.033 * 60.0).abs() < 1e-4);
    assert_eq!(t.elapsed_secs, 10.0);
}

#[test]
fn timestamps_going_backwards_yield_zero_delta() {
    let mut s = FrameScheduler::new();
    s.advance(5.0);
    s.advance(5.1);
    let t = s.advance(4.0);
    assert_eq!(t.delta_secs, 0.0);
    let t = s.advance(5.2);
    assert!((t.delta_secs - 0.1).abs() < 1e-5, "measured from 5.1, got {}", t.delta_secs);
}
