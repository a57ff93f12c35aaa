use crate::color::Rgb;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    /// Quadratic ease-out; the default feel of the page's color fades.
    #[default]
    Power1Out,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// Fixed-duration interpolation between two colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorTween {
    pub from: Rgb,
    pub to: Rgb,
    pub duration: f32,
    pub elapsed: f32,
    pub ease: Ease,
}

impl ColorTween {
    pub fn new(from: Rgb, to: Rgb, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            ease,
        }
    }

    /// Normalised progress in `[0, 1]`; zero-length tweens are complete.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn value(&self) -> Rgb {
        let p = self.progress();
        if p >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, self.ease.apply(p))
    }

    /// Advance by `dt` seconds and return the new value.
    pub fn advance(&mut self, dt: f32) -> Rgb {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
        self.value()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}
