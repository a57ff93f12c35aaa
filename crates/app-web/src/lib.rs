#![cfg(target_arch = "wasm32")]
use app_core::{AppConfig, AppContext};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod panel;
mod render;
mod stalker;

use constants::{CANVAS_ID, STALKER_SELECTOR};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Bad attributes are logged and fall back to defaults
    let config = AppConfig::from_lookup(|key| canvas.get_attribute(key)).unwrap_or_else(|e| {
        log::error!("[config] {}; using defaults", e);
        AppConfig::default()
    });
    log::info!("[config] {:?}", config);

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    let viewport = dom::window_viewport(&window);
    let app_ctx = AppContext::new(viewport, config.clone());
    let gpu = frame::init_gpu(&canvas, &app_ctx.scene).await;
    let app = Rc::new(RefCell::new(app_ctx));

    let indicator = stalker::DomIndicator::find(&document, STALKER_SELECTOR);

    events::wire_resize(&window, &canvas, app.clone());
    events::wire_cursor(&document, app.clone(), &indicator);
    events::wire_palette_selectors(&document, app.clone());
    events::wire_orbit(&canvas, app.clone());

    let panel = match panel::Panel::build(&document, &app, config.panel_hidden) {
        Ok(p) => {
            events::wire_panel_toggle_h(&window, p.clone());
            Some(p)
        }
        Err(e) => {
            log::error!("[panel] {:?}", e);
            None
        }
    };

    let ctx = frame::FrameContext::new(app, canvas, gpu, indicator, panel);
    frame::start_loop(Rc::new(RefCell::new(ctx)));
    Ok(())
}
