use crate::constants::{PANEL_CONTROL_ATTR, PANEL_ID};
use crate::dom;
use crate::input;
use app_core::{AppContext, ControlId, ControlKind, ControlValue, Rgb};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Live tuning panel: one input per shader control.
///
/// Mounted into `#tuning-panel` when the page provides it, otherwise
/// appended to `<body>`. Visibility follows the overlay convention of an
/// inline `display:none`.
pub struct Panel {
    root: web::HtmlElement,
    inputs: Vec<(ControlId, web::HtmlInputElement)>,
}

impl Panel {
    pub fn build(
        document: &web::Document,
        app: &Rc<RefCell<AppContext>>,
        hidden: bool,
    ) -> anyhow::Result<Rc<Self>> {
        let root = match document.get_element_by_id(PANEL_ID) {
            Some(el) => el,
            None => {
                let el = create(document, "div")?;
                el.set_id(PANEL_ID);
                let body = document
                    .body()
                    .ok_or_else(|| anyhow::anyhow!("no body"))?;
                body.append_child(&el)
                    .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
                el
            }
        };
        let root: web::HtmlElement = root
            .dyn_into()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

        let mut inputs = Vec::with_capacity(ControlId::ALL.len());
        for id in ControlId::ALL {
            let row = create(document, "label")?;
            let caption = create(document, "span")?;
            caption.set_text_content(Some(id.label()));
            let input: web::HtmlInputElement = create(document, "input")?
                .dyn_into()
                .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
            let _ = input.set_attribute(PANEL_CONTROL_ATTR, id.key());
            match id.spec().kind {
                ControlKind::Range { min, max, step } => {
                    input.set_type("range");
                    input.set_min(&min.to_string());
                    input.set_max(&max.to_string());
                    input.set_step(&step.to_string());
                }
                ControlKind::Color => input.set_type("color"),
            }
            let _ = row.append_child(&caption);
            let _ = row.append_child(&input);
            let _ = root.append_child(&row);
            wire_input(id, &input, app.clone());
            inputs.push((id, input));
        }

        let panel = Rc::new(Self { root, inputs });
        panel.sync(&app.borrow());
        if hidden {
            panel.hide();
        }
        log::info!("[panel] {} controls", panel.inputs.len());
        Ok(panel)
    }

    /// Copy current uniform values into the inputs.
    pub fn sync(&self, app: &AppContext) {
        for (id, input) in &self.inputs {
            match app.scene.uniforms.control_value(*id) {
                ControlValue::Number(v) => input.set_value(&v.to_string()),
                ControlValue::Color(c) => input.set_value(&c.to_string()),
            }
        }
    }

    #[inline]
    pub fn show(&self) {
        let _ = self.root.set_attribute("style", "");
    }

    #[inline]
    pub fn hide(&self) {
        let _ = self.root.set_attribute("style", "display:none");
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.root
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false)
    }

    #[inline]
    pub fn toggle(&self) {
        if self.is_hidden() {
            self.show();
        } else {
            self.hide();
        }
    }
}

fn create(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!(format!("create {}: {:?}", tag, e)))
}

fn wire_input(id: ControlId, input: &web::HtmlInputElement, app: Rc<RefCell<AppContext>>) {
    let el = input.clone();
    dom::listen(input, "input", move |_: web::Event| {
        let raw = el.value();
        let value = match id.spec().kind {
            ControlKind::Range { .. } => match input::parse_range_value(&raw) {
                Some(v) => ControlValue::Number(v),
                None => return,
            },
            ControlKind::Color => match raw.parse::<Rgb>() {
                Ok(c) => ControlValue::Color(c),
                Err(e) => {
                    log::warn!("[panel] {}: {}", id.key(), e);
                    return;
                }
            },
        };
        if let Err(e) = app.borrow_mut().set_control(id, value) {
            log::warn!("[panel] {}: {}", id.key(), e);
        }
    });
}
