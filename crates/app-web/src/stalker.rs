use crate::input;
use app_core::Indicator;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The `.js-stalker` element. Pages without one still run the follower;
/// every write is then a no-op.
#[derive(Clone)]
pub struct DomIndicator {
    el: Option<web::HtmlElement>,
}

impl DomIndicator {
    pub fn find(document: &web::Document, selector: &str) -> Self {
        let el = document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<web::HtmlElement>().ok());
        if el.is_none() {
            log::warn!("[cursor] no {} element, stalker disabled", selector);
        }
        Self { el }
    }
}

impl Indicator for DomIndicator {
    fn move_to(&mut self, position: Vec2) {
        if let Some(el) = &self.el {
            let _ = el
                .style()
                .set_property("transform", &input::stalker_transform(position));
        }
    }

    fn set_class(&mut self, class: &'static str, enabled: bool) {
        if let Some(el) = &self.el {
            let _ = el.class_list().toggle_with_force(class, enabled);
        }
    }
}
