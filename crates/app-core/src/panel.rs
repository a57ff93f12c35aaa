//! Live-tunable panel controls and how they write into [`UniformSet`].

use crate::color::Rgb;
use crate::error::{Result, SceneError};
use crate::uniforms::UniformSet;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlId {
    NoiseX,
    NoiseY,
    TimeSpeed,
    Color1,
    Color2,
    Color3,
    Color4,
}

impl ControlId {
    pub const ALL: [ControlId; 7] = [
        ControlId::NoiseX,
        ControlId::NoiseY,
        ControlId::TimeSpeed,
        ControlId::Color1,
        ControlId::Color2,
        ControlId::Color3,
        ControlId::Color4,
    ];

    /// Stable key used in `data-control` attributes.
    pub fn key(self) -> &'static str {
        match self {
            ControlId::NoiseX => "noise-x",
            ControlId::NoiseY => "noise-y",
            ControlId::TimeSpeed => "speed",
            ControlId::Color1 => "color-1",
            ControlId::Color2 => "color-2",
            ControlId::Color3 => "color-3",
            ControlId::Color4 => "color-4",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ControlId::NoiseX => "Noise X",
            ControlId::NoiseY => "Noise Y",
            ControlId::TimeSpeed => "Speed",
            ControlId::Color1 => "Color 1",
            ControlId::Color2 => "Color 2",
            ControlId::Color3 => "Color 3",
            ControlId::Color4 => "Color 4",
        }
    }

    /// Palette slot for color controls.
    pub fn color_slot(self) -> Option<usize> {
        match self {
            ControlId::Color1 => Some(0),
            ControlId::Color2 => Some(1),
            ControlId::Color3 => Some(2),
            ControlId::Color4 => Some(3),
            _ => None,
        }
    }

    pub fn spec(self) -> ControlSpec {
        let kind = match self {
            ControlId::NoiseX | ControlId::NoiseY => ControlKind::Range {
                min: 0.0,
                max: 100.0,
                step: 0.2,
            },
            ControlId::TimeSpeed => ControlKind::Range {
                min: 0.001,
                max: 5.0,
                step: 0.001,
            },
            _ => ControlKind::Color,
        };
        ControlSpec { id: self, kind }
    }
}

impl FromStr for ControlId {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self> {
        ControlId::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| SceneError::UnknownControl(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlKind {
    Range { min: f32, max: f32, step: f32 },
    Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlSpec {
    pub id: ControlId,
    pub kind: ControlKind,
}

impl ControlSpec {
    /// Clamp into range and snap onto the step grid anchored at `min`.
    pub fn snap(&self, value: f32) -> f32 {
        match self.kind {
            ControlKind::Range { min, max, step } => {
                let v = if value.is_finite() { value } else { min };
                let snapped = ((v - min) / step).round() * step + min;
                snapped.clamp(min, max)
            }
            ControlKind::Color => value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlValue {
    Number(f32),
    Color(Rgb),
}

impl UniformSet {
    /// Write a panel value into the matching uniform.
    pub fn apply_control(&mut self, id: ControlId, value: ControlValue) -> Result<()> {
        let spec = id.spec();
        match (id, value) {
            (ControlId::NoiseX, ControlValue::Number(v)) => self.noise_loudness.x = spec.snap(v),
            (ControlId::NoiseY, ControlValue::Number(v)) => self.noise_loudness.y = spec.snap(v),
            (ControlId::TimeSpeed, ControlValue::Number(v)) => self.time_speed = spec.snap(v),
            (_, ControlValue::Color(c)) => match id.color_slot() {
                Some(slot) => self.colors[slot] = c,
                None => return Err(SceneError::ControlKindMismatch { control: id.key() }),
            },
            _ => return Err(SceneError::ControlKindMismatch { control: id.key() }),
        }
        Ok(())
    }

    /// Current value for a control, used to refresh the panel.
    pub fn control_value(&self, id: ControlId) -> ControlValue {
        match id {
            ControlId::NoiseX => ControlValue::Number(self.noise_loudness.x),
            ControlId::NoiseY => ControlValue::Number(self.noise_loudness.y),
            ControlId::TimeSpeed => ControlValue::Number(self.time_speed),
            _ => ControlValue::Color(self.colors[id.color_slot().unwrap_or_default()]),
        }
    }
}
