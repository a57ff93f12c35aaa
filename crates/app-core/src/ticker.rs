//! Frame timing derived from the host's animation-frame timestamps.

use crate::constants::{LAG_ADJUSTED_DELTA_SEC, LAG_THRESHOLD_SEC, REFERENCE_FPS};

/// Timing handed to every component for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FrameTiming {
    /// Wall-clock seconds since the first frame; drives `uTime`.
    pub elapsed_secs: f32,
    /// Lag-smoothed seconds since the previous frame; drives tweens.
    pub delta_secs: f32,
    /// `delta_secs` in units of a reference frame (1/60 s).
    pub delta_ratio: f32,
}

/// Turns monotonically increasing timestamps into [`FrameTiming`].
///
/// A gap longer than [`LAG_THRESHOLD_SEC`] (tab in background, debugger
/// pause) counts as [`LAG_ADJUSTED_DELTA_SEC`] so smoothing and fades resume
/// where they left off instead of jumping to the end.
#[derive(Clone, Debug, Default)]
pub struct FrameScheduler {
    start: Option<f64>,
    last: Option<f64>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, now_secs: f64) -> FrameTiming {
        let start = *self.start.get_or_insert(now_secs);
        let raw_delta = match self.last {
            Some(prev) if now_secs > prev => now_secs - prev,
            _ => 0.0,
        };
        if self.last.map_or(true, |prev| now_secs > prev) {
            self.last = Some(now_secs);
        }
        let delta = if raw_delta > LAG_THRESHOLD_SEC {
            LAG_ADJUSTED_DELTA_SEC
        } else {
            raw_delta
        };
        let delta_secs = delta as f32;
        FrameTiming {
            elapsed_secs: (now_secs - start).max(0.0) as f32,
            delta_secs,
            delta_ratio: delta_secs * REFERENCE_FPS,
        }
    }
}
