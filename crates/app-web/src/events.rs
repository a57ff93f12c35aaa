use crate::constants::{
    HOVER_TARGET_SELECTOR, PALETTE_ATTR, PALETTE_SELECTOR, PANEL_TOGGLE_KEY,
};
use crate::dom;
use crate::input::{self, DragState};
use crate::panel::Panel;
use crate::stalker::DomIndicator;
use app_core::AppContext;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Keep the canvas backing store and the scene fitted to the window.
pub fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    app: Rc<RefCell<AppContext>>,
) {
    let w = window.clone();
    let canvas = canvas.clone();
    dom::listen(window, "resize", move |_: web::Event| {
        dom::sync_canvas_backing_size(&canvas);
        app.borrow_mut().on_resize(dom::window_viewport(&w));
    });
}

/// Pointer tracking, hover targets and window enter/leave for the stalker.
pub fn wire_cursor(
    document: &web::Document,
    app: Rc<RefCell<AppContext>>,
    indicator: &DomIndicator,
) {
    {
        let app = app.clone();
        dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
            app.borrow_mut()
                .on_pointer_move(ev.page_x() as f32, ev.page_y() as f32);
        });
    }

    let targets = dom::query_all(document, HOVER_TARGET_SELECTOR);
    log::info!("[cursor] {} hover targets", targets.len());
    for el in targets {
        {
            let app = app.clone();
            let mut ind = indicator.clone();
            dom::listen(&el, "mouseenter", move |_: web::MouseEvent| {
                app.borrow_mut().cursor.on_hover_enter(&mut ind);
            });
        }
        let app = app.clone();
        let mut ind = indicator.clone();
        dom::listen(&el, "mouseleave", move |_: web::MouseEvent| {
            app.borrow_mut().cursor.on_hover_leave(&mut ind);
        });
    }

    let Some(body) = document.body() else {
        log::warn!("[cursor] no body, window enter/leave not tracked");
        return;
    };
    {
        let app = app.clone();
        let mut ind = indicator.clone();
        dom::listen(&body, "mouseleave", move |_: web::MouseEvent| {
            app.borrow_mut().cursor.on_window_leave(&mut ind);
        });
    }
    let mut ind = indicator.clone();
    dom::listen(&body, "mouseenter", move |_: web::MouseEvent| {
        app.borrow_mut().cursor.on_window_enter(&mut ind);
    });
}

/// Hovering a `.js-palette` element fades the gradient to its preset.
pub fn wire_palette_selectors(document: &web::Document, app: Rc<RefCell<AppContext>>) {
    let selectors = dom::query_all(document, PALETTE_SELECTOR);
    log::info!("[palette] {} selectors", selectors.len());
    for el in selectors {
        let app = app.clone();
        let target = el.clone();
        dom::listen(&el, "mouseenter", move |_: web::MouseEvent| {
            let Some(name) = target.get_attribute(PALETTE_ATTR) else {
                log::error!("[palette] selector without {}", PALETTE_ATTR);
                return;
            };
            if let Err(e) = app.borrow_mut().on_selector_hover(&name) {
                log::error!("[palette] {}", e);
            }
        });
    }
}

/// Drag to orbit, wheel to dolly.
pub fn wire_orbit(canvas: &web::HtmlCanvasElement, app: Rc<RefCell<AppContext>>) {
    let drag = Rc::new(RefCell::new(DragState::default()));
    {
        let drag = drag.clone();
        let c = canvas.clone();
        dom::listen(canvas, "pointerdown", move |ev: web::PointerEvent| {
            let at = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            drag.borrow_mut().begin(ev.pointer_id(), at);
            let _ = c.set_pointer_capture(ev.pointer_id());
        });
    }
    {
        let drag = drag.clone();
        let app = app.clone();
        dom::listen(canvas, "pointermove", move |ev: web::PointerEvent| {
            let at = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            let Some(d) = drag.borrow_mut().step(ev.pointer_id(), at) else {
                return;
            };
            let mut app = app.borrow_mut();
            let h = app.scene.viewport().height;
            app.scene.orbit_mut().rotate(d.x, d.y, h);
        });
    }
    for name in ["pointerup", "pointercancel"] {
        let drag = drag.clone();
        let c = canvas.clone();
        dom::listen(canvas, name, move |ev: web::PointerEvent| {
            if drag.borrow_mut().end(ev.pointer_id()) {
                let _ = c.release_pointer_capture(ev.pointer_id());
            }
        });
    }
    dom::listen(canvas, "wheel", move |ev: web::WheelEvent| {
        ev.prevent_default();
        app.borrow_mut().scene.orbit_mut().dolly(ev.delta_y() as f32);
    });
}

// Wire an 'H' key handler to toggle the tuning panel
pub fn wire_panel_toggle_h(window: &web::Window, panel: Rc<Panel>) {
    dom::listen(window, "keydown", move |ev: web::KeyboardEvent| {
        if ev.repeat() || !input::is_panel_toggle_key(&ev.key(), PANEL_TOGGLE_KEY) {
            return;
        }
        panel.toggle();
        ev.prevent_default();
    });
}
