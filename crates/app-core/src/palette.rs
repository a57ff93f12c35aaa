//! Named four-color presets that palette selectors point at.

use crate::color::Rgb;
use crate::constants::DEFAULT_COLORS;
use crate::error::{Result, SceneError};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PalettePreset {
    Default,
    Neon,
    Sunset,
    Ocean,
    Forest,
}

impl PalettePreset {
    pub const ALL: [PalettePreset; 5] = [
        PalettePreset::Default,
        PalettePreset::Neon,
        PalettePreset::Sunset,
        PalettePreset::Ocean,
        PalettePreset::Forest,
    ];

    /// Name as written in `data-color` attributes.
    pub fn name(self) -> &'static str {
        match self {
            PalettePreset::Default => "default",
            PalettePreset::Neon => "neon",
            PalettePreset::Sunset => "sunset",
            PalettePreset::Ocean => "ocean",
            PalettePreset::Forest => "forest",
        }
    }

    pub fn hex(self) -> [u32; 4] {
        match self {
            PalettePreset::Default => DEFAULT_COLORS,
            PalettePreset::Neon => [0xC729F2, 0x0B2740, 0x13DCF2, 0x7B17A6],
            PalettePreset::Sunset => [0xF2784B, 0x401A2E, 0xF2C14E, 0xA6324D],
            PalettePreset::Ocean => [0x0E5E6F, 0x03142A, 0x3AB7BF, 0x1B3F8C],
            PalettePreset::Forest => [0x4E8C3A, 0x132A13, 0xB8D96C, 0x2F5D50],
        }
    }

    pub fn colors(self) -> [Rgb; 4] {
        self.hex().map(Rgb::from_hex)
    }
}

impl FromStr for PalettePreset {
    type Err = SceneError;

    /// Exact, case-sensitive lookup; a miss means the markup and the preset
    /// table disagree, so it is reported instead of ignored.
    fn from_str(s: &str) -> Result<Self> {
        PalettePreset::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| SceneError::UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for PalettePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
