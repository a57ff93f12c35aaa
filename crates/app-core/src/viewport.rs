use crate::constants::MIN_VIEWPORT_PX;
use glam::Vec2;

/// Visible page area in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Builds a viewport with both axes clamped to [`MIN_VIEWPORT_PX`].
    ///
    /// Zero, negative and non-finite sizes show up while a window is being
    /// minimised or an iframe is detached; they would otherwise turn the
    /// camera distance and projection into NaN.
    pub fn new(width: f32, height: f32) -> Self {
        let v = Self {
            width: clamp_axis(width),
            height: clamp_axis(height),
        };
        if v.width != width || v.height != height {
            log::warn!(
                "[viewport] clamped {}x{} to {}x{}",
                width,
                height,
                v.width,
                v.height
            );
        }
        v
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[inline]
fn clamp_axis(v: f32) -> f32 {
    if v.is_finite() {
        v.max(MIN_VIEWPORT_PX)
    } else {
        MIN_VIEWPORT_PX
    }
}
