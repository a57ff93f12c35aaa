//! Runtime configuration with page-level overrides.
//!
//! Defaults come from [`crate::constants`]; a host can override them through
//! a key lookup (the web front-end reads `data-*` attributes on the canvas).

use crate::constants::{
    CAMERA_FOV_DEGREES, CURSOR_SMOOTHING, PALETTE_TRANSITION_SEC, TIME_SCALE,
};
use crate::error::{Result, SceneError};

pub const KEY_PALETTE_TRANSITION: &str = "data-palette-transition";
pub const KEY_PANEL: &str = "data-panel";
pub const KEY_FOV: &str = "data-fov";
pub const KEY_CURSOR_SMOOTHING: &str = "data-cursor-smoothing";
pub const KEY_TIME_SCALE: &str = "data-time-scale";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub fov_degrees: f32,
    pub time_scale: f32,
    pub cursor_smoothing: f32,
    pub transition_secs: f32,
    /// Fade shader colors when a palette selector is hovered.
    pub palette_transition: bool,
    /// Start with the panel hidden; controls stay live either way.
    pub panel_hidden: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fov_degrees: CAMERA_FOV_DEGREES,
            time_scale: TIME_SCALE,
            cursor_smoothing: CURSOR_SMOOTHING,
            transition_secs: PALETTE_TRANSITION_SEC,
            palette_transition: true,
            panel_hidden: false,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by whatever `lookup` returns for the known keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = lookup(KEY_PALETTE_TRANSITION) {
            cfg.palette_transition = parse_bool(KEY_PALETTE_TRANSITION, &v)?;
        }
        if let Some(v) = lookup(KEY_PANEL) {
            cfg.panel_hidden = match v.trim() {
                "hidden" => true,
                "visible" | "" => false,
                _ => return Err(invalid(KEY_PANEL, &v)),
            };
        }
        if let Some(v) = lookup(KEY_FOV) {
            cfg.fov_degrees = parse_in(KEY_FOV, &v, |f| f >= 1.0 && f <= 179.0)?;
        }
        if let Some(v) = lookup(KEY_CURSOR_SMOOTHING) {
            cfg.cursor_smoothing = parse_in(KEY_CURSOR_SMOOTHING, &v, |f| f > 0.0 && f < 1.0)?;
        }
        if let Some(v) = lookup(KEY_TIME_SCALE) {
            cfg.time_scale = parse_in(KEY_TIME_SCALE, &v, |f| f > 0.0)?;
        }
        Ok(cfg)
    }
}

fn invalid(key: &'static str, value: &str) -> SceneError {
    SceneError::InvalidConfig {
        key,
        value: value.to_string(),
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool> {
    match value.trim() {
        "true" | "1" | "on" | "" => Ok(true),
        "false" | "0" | "off" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

fn parse_in(key: &'static str, value: &str, ok: impl Fn(f32) -> bool) -> Result<f32> {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|f| f.is_finite() && ok(*f))
        .ok_or_else(|| invalid(key, value))
}
