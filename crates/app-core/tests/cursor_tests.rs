// Host-side tests for the cursor stalker.

use app_core::*;
use glam::Vec2;

#[derive(Default)]
struct FakeIndicator {
    position: Vec2,
    moves: usize,
    active: bool,
    hidden: bool,
}

impl Indicator for FakeIndicator {
    fn move_to(&mut self, position: Vec2) {
        self.position = position;
        self.moves += 1;
    }

    fn set_class(&mut self, class: &'static str, enabled: bool) {
        match class {
            ACTIVE_CLASS => self.active = enabled,
            HIDDEN_CLASS => self.hidden = enabled,
            other => panic!("unexpected class {other}"),
        }
    }
}

#[test]
fn pointer_move_has_no_immediate_effect() {
    let mut cursor = CursorFollower::default();
    let mut ind = FakeIndicator::default();
    cursor.on_pointer_move(300.0, 200.0);
    assert_eq!(cursor.raw(), Vec2::new(300.0, 200.0));
    assert_eq!(cursor.smoothed(), Vec2::ZERO);
    assert_eq!(ind.moves, 0);
    cursor.tick(1.0, &mut ind);
    assert_eq!(ind.moves, 1);
    assert_eq!(ind.position, cursor.smoothed());
}

#[test]
fn one_reference_frame_closes_smoothing_fraction() {
    let mut cursor = CursorFollower::new(0.1);
    let mut ind = FakeIndicator::default();
    cursor.on_pointer_move(100.0, -50.0);
    cursor.tick(1.0, &mut ind);
    assert!((cursor.smoothed().x - 10.0).abs() < 1e-4);
    assert!((cursor.smoothed().y + 5.0).abs() < 1e-4);
}

#[test]
fn blend_factor_is_frame_rate_independent() {
    let s = 0.1;
    // Two half-frames equal one full frame.
    let half = CursorFollower::blend_factor(s, 0.5);
    let two_halves = 1.0 - (1.0 - half) * (1.0 - half);
    assert!((two_halves - CursorFollower::blend_factor(s, 1.0)).abs() < 1e-6);

    let mut a = CursorFollower::new(s);
    let mut b = CursorFollower::new(s);
    let mut ind = FakeIndicator::default();
    a.on_pointer_move(500.0, 500.0);
    b.on_pointer_move(500.0, 500.0);
    for _ in 0..60 {
        a.tick(1.0, &mut ind); // 60 Hz
    }
    for _ in 0..120 {
        b.tick(0.5, &mut ind); // 120 Hz
    }
    assert!((a.smoothed() - b.smoothed()).length() < 1e-2);
}

#[test]
fn converges_monotonically_without_overshoot() {
    for &s in &[0.05_f32, 0.1, 0.5, 0.95] {
        for &r in &[0.0_f32, 0.25, 1.0, 2.0, 7.5] {
            let mut cursor = CursorFollower::new(s);
            let mut ind = FakeIndicator::default();
            cursor.on_pointer_move(640.0, 360.0);
            let mut prev_gap = (cursor.raw() - cursor.smoothed()).length();
            for _ in 0..200 {
                cursor.tick(r, &mut ind);
                let p = cursor.smoothed();
                assert!(p.x <= 640.0 && p.y <= 360.0, "overshoot s={s} r={r}");
                let gap = (cursor.raw() - p).length();
                assert!(gap <= prev_gap, "gap grew s={s} r={r}");
                prev_gap = gap;
            }
        }
    }
}

#[test]
fn settles_exactly_on_stable_target() {
    let mut cursor = CursorFollower::new(0.1);
    let mut ind = FakeIndicator::default();
    cursor.on_pointer_move(123.456, 789.012);
    for _ in 0..500 {
        cursor.tick(1.0, &mut ind);
    }
    assert_eq!(cursor.smoothed(), cursor.raw());
    assert_eq!(ind.position, Vec2::new(123.456, 789.012));
}

#[test]
fn settles_exactly_far_down_a_scrolled_page() {
    // f32 steps at these offsets are wider than the snap epsilon
    for &y in &[9_000.0_f32, 20_000.0, 100_000.0] {
        let mut cursor = CursorFollower::new(0.1);
        let mut ind = FakeIndicator::default();
        cursor.on_pointer_move(10.0, y);
        for _ in 0..5000 {
            cursor.tick(1.0, &mut ind);
        }
        assert_eq!(cursor.smoothed(), cursor.raw(), "y={y}");
        assert_eq!(ind.position, Vec2::new(10.0, y), "y={y}");
    }
}

#[test]
fn zero_ratio_frames_leave_the_stalker_in_place() {
    let mut cursor = CursorFollower::new(0.1);
    let mut ind = FakeIndicator::default();
    cursor.on_pointer_move(10.0, 20_000.0);
    cursor.tick(1.0, &mut ind);
    let before = cursor.smoothed();
    for _ in 0..10 {
        cursor.tick(0.0, &mut ind);
    }
    assert_eq!(cursor.smoothed(), before);
}

#[test]
fn bad_delta_ratios_do_not_move_or_poison() {
    let mut cursor = CursorFollower::new(0.1);
    let mut ind = FakeIndicator::default();
    cursor.on_pointer_move(10.0, 10.0);
    cursor.tick(-3.0, &mut ind);
    cursor.tick(f32::NAN, &mut ind);
    assert_eq!(cursor.smoothed(), Vec2::ZERO);
}

#[test]
fn hover_and_window_flags_are_independent() {
    let mut cursor = CursorFollower::default();
    let mut ind = FakeIndicator::default();
    assert!(!cursor.is_active() && !cursor.is_hidden());

    cursor.on_hover_enter(&mut ind);
    assert!(cursor.is_active() && ind.active);

    cursor.on_window_leave(&mut ind);
    assert!(cursor.is_hidden() && ind.hidden);
    assert!(cursor.is_active(), "leaving the window keeps hover state");

    cursor.on_window_enter(&mut ind);
    assert!(!cursor.is_hidden() && !ind.hidden);
    assert!(cursor.is_active() && ind.active);

    cursor.on_hover_leave(&mut ind);
    assert!(!cursor.is_active() && !ind.active);
    assert!(!cursor.is_hidden());
}
