use crate::panel::Panel;
use crate::render;
use crate::stalker::DomIndicator;
use app_core::{AppContext, FrameScheduler, RenderBackend, SceneFrame, ViewportSceneController};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Stands in for the GPU when WebGPU is unavailable, so the cursor and
/// palette keep running.
struct Headless;

impl RenderBackend for Headless {
    fn render(&mut self, _frame: &SceneFrame) -> anyhow::Result<()> {
        Ok(())
    }
}

pub struct FrameContext {
    pub app: Rc<RefCell<AppContext>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    pub indicator: DomIndicator,
    pub panel: Option<Rc<Panel>>,
    pub scheduler: FrameScheduler,
    pub started: Instant,
    syncing_panel: bool,
}

impl FrameContext {
    pub fn new(
        app: Rc<RefCell<AppContext>>,
        canvas: web::HtmlCanvasElement,
        gpu: Option<render::GpuState>,
        indicator: DomIndicator,
        panel: Option<Rc<Panel>>,
    ) -> Self {
        Self {
            app,
            canvas,
            gpu,
            indicator,
            panel,
            scheduler: FrameScheduler::new(),
            started: Instant::now(),
            syncing_panel: false,
        }
    }

    pub fn frame(&mut self) {
        let timing = self
            .scheduler
            .advance(self.started.elapsed().as_secs_f64());
        let mut app = self.app.borrow_mut();

        let result = match &mut self.gpu {
            Some(g) => {
                g.resize_if_needed(self.canvas.width(), self.canvas.height());
                app.frame(timing, g, &mut self.indicator)
            }
            None => app.frame(timing, &mut Headless, &mut self.indicator),
        };
        if let Err(e) = result {
            log::error!("[frame] {:?}", e);
        }

        // Mirror fading colors into the panel, including the frame a fade ends on
        let running = app.transition.is_running();
        if let Some(panel) = &self.panel {
            if running || self.syncing_panel {
                panel.sync(&app);
            }
        }
        self.syncing_panel = running;
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &ViewportSceneController,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, scene).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else { return };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}
