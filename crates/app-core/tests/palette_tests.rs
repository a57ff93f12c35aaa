// Host-side tests for palette presets, tweens and the hover-driven fade.

use app_core::*;

#[derive(Default)]
struct NullBackend;

impl RenderBackend for NullBackend {
    fn render(&mut self, _frame: &SceneFrame) -> anyhow::Result<()> {
        Ok(())
    }
}

#[derive(Default)]
struct NullIndicator;

impl Indicator for NullIndicator {
    fn move_to(&mut self, _position: glam::Vec2) {}
    fn set_class(&mut self, _class: &'static str, _enabled: bool) {}
}

fn approx(a: Rgb, b: Rgb) -> bool {
    (a.r - b.r).abs() < 1e-5 && (a.g - b.g).abs() < 1e-5 && (a.b - b.b).abs() < 1e-5
}

fn timing(delta: f32) -> FrameTiming {
    FrameTiming {
        elapsed_secs: 0.0,
        delta_secs: delta,
        delta_ratio: delta * REFERENCE_FPS,
    }
}

#[test]
fn neon_preset_matches_reference_colors() {
    let neon: PalettePreset = "neon".parse().unwrap();
    assert_eq!(neon, PalettePreset::Neon);
    assert_eq!(neon.hex(), [0xC729F2, 0x0B2740, 0x13DCF2, 0x7B17A6]);
    assert_eq!(neon.colors()[0].to_hex(), 0xC729F2);
}

#[test]
fn every_preset_round_trips_its_name() {
    for p in PalettePreset::ALL {
        assert_eq!(p.name().parse::<PalettePreset>().unwrap(), p);
        assert_eq!(p.to_string(), p.name());
    }
    assert_eq!(PalettePreset::Default.hex(), DEFAULT_COLORS);
}

#[test]
fn unknown_preset_is_rejected() {
    let err = "vaporwave".parse::<PalettePreset>().unwrap_err();
    assert_eq!(err, SceneError::UnknownPreset("vaporwave".into()));
    assert!("Neon".parse::<PalettePreset>().is_err(), "lookup is case-sensitive");
}

#[test]
fn unknown_preset_leaves_uniforms_untouched() {
    let mut app = AppContext::new(Viewport::new(800.0, 600.0), AppConfig::default());
    let before = app.scene.uniforms.colors;
    let err = app.on_selector_hover("missing").unwrap_err();
    assert!(matches!(err, SceneError::UnknownPreset(_)));
    assert!(!app.transition.is_running());
    app.frame(timing(1.0), &mut NullBackend, &mut NullIndicator)
        .unwrap();
    assert_eq!(app.scene.uniforms.colors, before);
}

#[test]
fn tween_hits_endpoints_and_eases_out() {
    let from = Rgb::from_hex(0x000000);
    let to = Rgb::from_hex(0xFFFFFF);
    let mut tw = ColorTween::new(from, to, 1.4, Ease::Power1Out);
    assert_eq!(tw.value(), from);
    let mid = tw.advance(0.7);
    // Ease-out is ahead of linear at the halfway point.
    assert!((mid.r - 0.75).abs() < 1e-5);
    assert!(!tw.is_finished());
    assert_eq!(tw.advance(10.0), to);
    assert!(tw.is_finished());

    let zero = ColorTween::new(from, to, 0.0, Ease::Linear);
    assert_eq!(zero.value(), to);
}

#[test]
fn hover_fades_all_four_colors_over_transition_duration() {
    let mut app = AppContext::new(Viewport::new(800.0, 600.0), AppConfig::default());
    let start = app.scene.uniforms.colors;
    app.on_selector_hover("neon").unwrap();
    assert!(app.transition.is_running());

    app.frame(timing(0.7), &mut NullBackend, &mut NullIndicator)
        .unwrap();
    let neon = PalettePreset::Neon.colors();
    for i in 0..4 {
        let expected = start[i].lerp(neon[i], Ease::Power1Out.apply(0.5));
        assert!(approx(app.scene.uniforms.colors[i], expected), "slot {i}");
    }

    app.frame(timing(0.7), &mut NullBackend, &mut NullIndicator)
        .unwrap();
    assert_eq!(app.scene.uniforms.colors, neon);
    assert!(!app.transition.is_running());
}

#[test]
fn retarget_starts_from_in_flight_color() {
    let mut app = AppContext::new(Viewport::new(800.0, 600.0), AppConfig::default());
    app.on_selector_hover("neon").unwrap();
    app.frame(timing(0.35), &mut NullBackend, &mut NullIndicator)
        .unwrap();
    let mid = app.scene.uniforms.colors;
    assert_ne!(mid, PalettePreset::Default.colors());

    app.on_selector_hover("ocean").unwrap();
    // First tick after retarget must not snap back towards the original.
    app.frame(timing(0.0), &mut NullBackend, &mut NullIndicator)
        .unwrap();
    assert_eq!(app.scene.uniforms.colors, mid);

    // Halfway through, each slot sits between the in-flight color and ocean.
    app.frame(timing(0.7), &mut NullBackend, &mut NullIndicator)
        .unwrap();
    let ocean = PalettePreset::Ocean.colors();
    for i in 0..4 {
        let expected = mid[i].lerp(ocean[i], Ease::Power1Out.apply(0.5));
        assert!(approx(app.scene.uniforms.colors[i], expected), "slot {i}");
    }

    app.frame(timing(0.7), &mut NullBackend, &mut NullIndicator)
        .unwrap();
    assert_eq!(app.scene.uniforms.colors, PalettePreset::Ocean.colors());
}

#[test]
fn disabled_feature_validates_but_does_not_fade() {
    let config = AppConfig {
        palette_transition: false,
        ..AppConfig::default()
    };
    let mut app = AppContext::new(Viewport::new(800.0, 600.0), config);
    assert_eq!(app.on_selector_hover("neon").unwrap(), PalettePreset::Neon);
    assert!(!app.transition.is_running());
    assert!(app.on_selector_hover("nope").is_err());
}

#[test]
fn panel_color_edit_cancels_that_slot_only() {
    let mut app = AppContext::new(Viewport::new(800.0, 600.0), AppConfig::default());
    app.on_selector_hover("sunset").unwrap();
    let picked: Rgb = "#102030".parse().unwrap();
    app.set_control(ControlId::Color2, ControlValue::Color(picked))
        .unwrap();
    assert_eq!(app.scene.uniforms.colors[1], picked);
    assert!(app.transition.is_running());

    app.frame(timing(2.0), &mut NullBackend, &mut NullIndicator)
        .unwrap();
    assert_eq!(app.scene.uniforms.colors[1], picked);
    assert_eq!(app.scene.uniforms.colors[0], PalettePreset::Sunset.colors()[0]);
}

#[test]
fn rgb_parses_and_formats_picker_strings() {
    let c: Rgb = "#c729f2".parse().unwrap();
    assert_eq!(c, Rgb::from_hex(0xC729F2));
    assert_eq!(c.to_string(), "#c729f2");
    assert!("c729f2".parse::<Rgb>().is_ok());
    for bad in ["#12345", "#zzzzzz", "", "#+12345", "#1234567"] {
        assert_eq!(
            bad.parse::<Rgb>().unwrap_err(),
            SceneError::InvalidColor(bad.into())
        );
    }
}
