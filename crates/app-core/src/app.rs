use crate::config::AppConfig;
use crate::cursor::{CursorFollower, Indicator};
use crate::error::Result;
use crate::palette::PalettePreset;
use crate::panel::{ControlId, ControlValue};
use crate::scene::{RenderBackend, ViewportSceneController};
use crate::ticker::FrameTiming;
use crate::transition::PaletteTransition;
use crate::viewport::Viewport;

/// Page-lifetime state shared by the event handlers and the frame loop.
///
/// Event handlers only record state here; everything visible happens in
/// [`AppContext::frame`], at most once per display frame.
pub struct AppContext {
    pub config: AppConfig,
    pub scene: ViewportSceneController,
    pub cursor: CursorFollower,
    pub transition: PaletteTransition,
}

impl AppContext {
    pub fn new(viewport: Viewport, config: AppConfig) -> Self {
        Self {
            scene: ViewportSceneController::new(viewport, &config),
            cursor: CursorFollower::new(config.cursor_smoothing),
            transition: PaletteTransition::new(config.transition_secs),
            config,
        }
    }

    /// Run one frame: color fades, cursor smoothing, then the render.
    pub fn frame(
        &mut self,
        timing: FrameTiming,
        backend: &mut dyn RenderBackend,
        indicator: &mut dyn Indicator,
    ) -> anyhow::Result<()> {
        self.transition
            .tick(timing.delta_secs, &mut self.scene.uniforms.colors);
        self.cursor.tick(timing.delta_ratio, indicator);
        self.scene.tick(timing.elapsed_secs, backend)
    }

    #[inline]
    pub fn on_resize(&mut self, viewport: Viewport) {
        self.scene.on_resize(viewport);
    }

    #[inline]
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.cursor.on_pointer_move(x, y);
    }

    /// Start fading towards the preset named by a hovered selector.
    ///
    /// The name is validated even when fades are switched off, so markup
    /// typos surface regardless of configuration.
    pub fn on_selector_hover(&mut self, name: &str) -> Result<PalettePreset> {
        let preset: PalettePreset = name.parse()?;
        if self.config.palette_transition {
            self.transition
                .retarget(preset, &self.scene.uniforms.colors);
        } else {
            log::debug!("[palette] transitions disabled, ignoring {}", preset);
        }
        Ok(preset)
    }

    /// Apply a panel edit; a direct color edit stops that slot's fade.
    pub fn set_control(&mut self, id: ControlId, value: ControlValue) -> Result<()> {
        self.scene.uniforms.apply_control(id, value)?;
        if let Some(slot) = id.color_slot() {
            self.transition.cancel_slot(slot);
        }
        Ok(())
    }
}
