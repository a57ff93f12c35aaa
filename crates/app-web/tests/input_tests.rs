// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn drag_reports_deltas_for_its_own_pointer_only() {
    let mut drag = DragState::default();
    assert_eq!(drag.step(1, Vec2::new(5.0, 5.0)), None);

    drag.begin(1, Vec2::new(10.0, 20.0));
    assert_eq!(drag.step(1, Vec2::new(13.0, 16.0)), Some(Vec2::new(3.0, -4.0)));
    // A second finger does not steer the camera
    assert_eq!(drag.step(2, Vec2::new(100.0, 100.0)), None);
    assert_eq!(drag.step(1, Vec2::new(14.0, 16.0)), Some(Vec2::new(1.0, 0.0)));
}

#[test]
fn drag_ends_only_for_the_capturing_pointer() {
    let mut drag = DragState::default();
    drag.begin(7, Vec2::ZERO);
    assert!(!drag.end(3));
    assert!(drag.active);
    assert!(drag.end(7));
    assert!(!drag.active);
    assert!(!drag.end(7));
    assert_eq!(drag.step(7, Vec2::ONE), None);
}

#[test]
fn panel_toggle_key_ignores_case() {
    assert!(is_panel_toggle_key("h", "h"));
    assert!(is_panel_toggle_key("H", "h"));
    assert!(!is_panel_toggle_key("j", "h"));
    assert!(!is_panel_toggle_key("Home", "h"));
}

#[test]
fn stalker_transform_uses_pixel_translate3d() {
    assert_eq!(
        stalker_transform(Vec2::new(12.5, -3.0)),
        "translate3d(12.5px, -3px, 0)"
    );
    assert_eq!(stalker_transform(Vec2::ZERO), "translate3d(0px, 0px, 0)");
}

#[test]
fn range_values_parse_or_are_rejected() {
    assert_eq!(parse_range_value("0.35"), Some(0.35));
    assert_eq!(parse_range_value(" 2 "), Some(2.0));
    assert_eq!(parse_range_value(""), None);
    assert_eq!(parse_range_value("abc"), None);
    assert_eq!(parse_range_value("NaN"), None);
    assert_eq!(parse_range_value("inf"), None);
}
