// Host-side tests for tuning constants and their relationships.

use app_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(CAMERA_FOV_DEGREES > 0.0 && CAMERA_FOV_DEGREES < 180.0);
    assert!(CAMERA_NEAR > 0.0);
    assert!(MIN_VIEWPORT_PX > 0.0);

    // Smoothing and damping are fractions per frame
    assert!(CURSOR_SMOOTHING > 0.0 && CURSOR_SMOOTHING < 1.0);
    assert!(ORBIT_DAMPING > 0.0 && ORBIT_DAMPING <= 1.0);
    assert!(ORBIT_ZOOM_STEP > 0.0 && ORBIT_ZOOM_STEP < 1.0);

    assert!(PALETTE_TRANSITION_SEC > 0.0);
    assert!(REFERENCE_FPS > 0.0);
    assert!(TIME_SCALE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Lag-smoothed delta must be shorter than the threshold that triggers it
    assert!(LAG_ADJUSTED_DELTA_SEC < LAG_THRESHOLD_SEC);

    // Far plane must reach past the backdrop plane
    assert!(CAMERA_FAR_MULTIPLIER > 1.0);

    // Sphere must not cut through the backdrop plane
    assert!(SPHERE_OFFSET_Z > SPHERE_RADIUS);

    // Seam overshoot is small next to the two-decimal rounding
    assert!(PLANE_SCALE_EPSILON > 0.0 && PLANE_SCALE_EPSILON <= 0.01);
}

#[test]
fn default_uniforms_match_constants() {
    let u = UniformSet::new(Viewport::new(640.0, 480.0));
    assert_eq!(u.time, 0.0);
    assert_eq!(u.time_speed, DEFAULT_TIME_SPEED);
    assert_eq!(u.tex_resolution.to_array(), TEX_RESOLUTION);
    assert_eq!(u.noise_loudness.to_array(), DEFAULT_NOISE_LOUDNESS);
    assert_eq!(u.colors.map(Rgb::to_hex), DEFAULT_COLORS);
}
