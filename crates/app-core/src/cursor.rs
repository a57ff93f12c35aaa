//! Cursor stalker: an indicator that trails the pointer with exponential
//! smoothing and reflects hover / out-of-window state through CSS classes.

use crate::constants::{CURSOR_SMOOTHING, CURSOR_SNAP_EPSILON_PX};
use glam::{DVec2, Vec2};

pub const ACTIVE_CLASS: &str = "is-active";
pub const HIDDEN_CLASS: &str = "is-hide";

/// On-screen element driven by the follower.
pub trait Indicator {
    fn move_to(&mut self, position: Vec2);
    fn set_class(&mut self, class: &'static str, enabled: bool);
}

#[derive(Clone, Debug)]
pub struct CursorFollower {
    pub smoothing: f32,
    // f64 so far-scrolled page offsets still resolve steps below the snap epsilon
    raw: DVec2,
    smoothed: DVec2,
    active: bool,
    hidden: bool,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(CURSOR_SMOOTHING)
    }
}

impl CursorFollower {
    pub fn new(smoothing: f32) -> Self {
        Self {
            smoothing: smoothing.clamp(0.0, 1.0),
            raw: DVec2::ZERO,
            smoothed: DVec2::ZERO,
            active: false,
            hidden: false,
        }
    }

    /// Record the latest pointer position (page coordinates). Nothing moves
    /// until the next tick.
    #[inline]
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.raw = DVec2::new(x as f64, y as f64);
    }

    /// Fraction of the remaining gap closed in a tick lasting `delta_ratio`
    /// reference frames.
    pub fn blend_factor(smoothing: f32, delta_ratio: f32) -> f32 {
        let r = if delta_ratio.is_finite() {
            delta_ratio.max(0.0)
        } else {
            0.0
        };
        1.0 - (1.0 - smoothing).powf(r)
    }

    pub fn tick(&mut self, delta_ratio: f32, indicator: &mut dyn Indicator) {
        let dt = Self::blend_factor(self.smoothing, delta_ratio) as f64;
        self.smoothed += (self.raw - self.smoothed) * dt;
        let gap = self.raw - self.smoothed;
        let eps = CURSOR_SNAP_EPSILON_PX as f64;
        if gap.x.abs() < eps && gap.y.abs() < eps {
            self.smoothed = self.raw;
        }
        indicator.move_to(self.smoothed.as_vec2());
    }

    pub fn on_hover_enter(&mut self, indicator: &mut dyn Indicator) {
        self.active = true;
        indicator.set_class(ACTIVE_CLASS, true);
    }

    pub fn on_hover_leave(&mut self, indicator: &mut dyn Indicator) {
        self.active = false;
        indicator.set_class(ACTIVE_CLASS, false);
    }

    pub fn on_window_leave(&mut self, indicator: &mut dyn Indicator) {
        self.hidden = true;
        indicator.set_class(HIDDEN_CLASS, true);
    }

    pub fn on_window_enter(&mut self, indicator: &mut dyn Indicator) {
        self.hidden = false;
        indicator.set_class(HIDDEN_CLASS, false);
    }

    #[inline]
    pub fn raw(&self) -> Vec2 {
        self.raw.as_vec2()
    }

    #[inline]
    pub fn smoothed(&self) -> Vec2 {
        self.smoothed.as_vec2()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}
