use crate::color::Rgb;
use crate::palette::PalettePreset;
use crate::tween::{ColorTween, Ease};

/// Per-slot color fades towards a palette preset.
///
/// Each of the four slots owns at most one tween. Retargeting replaces the
/// slot's tween with a new one that starts from the color currently on
/// screen, so a second hover mid-fade bends the fade instead of snapping.
#[derive(Clone, Debug)]
pub struct PaletteTransition {
    pub duration: f32,
    pub ease: Ease,
    slots: [Option<ColorTween>; 4],
}

impl PaletteTransition {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            ease: Ease::default(),
            slots: [None; 4],
        }
    }

    pub fn retarget(&mut self, preset: PalettePreset, current: &[Rgb; 4]) {
        let to = preset.colors();
        for (i, slot) in self.slots.iter_mut().enumerate() {
            *slot = Some(ColorTween::new(current[i], to[i], self.duration, self.ease));
        }
        log::debug!("[palette] retarget -> {}", preset);
    }

    /// Advance all running tweens and write their values into `colors`.
    pub fn tick(&mut self, dt_sec: f32, colors: &mut [Rgb; 4]) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if let Some(tween) = slot {
                colors[i] = tween.advance(dt_sec);
                if tween.is_finished() {
                    *slot = None;
                }
            }
        }
    }

    /// Drop the tween for one slot, e.g. when the panel sets that color.
    pub fn cancel_slot(&mut self, slot: usize) {
        if let Some(s) = self.slots.get_mut(slot) {
            *s = None;
        }
    }

    pub fn is_running(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }
}
