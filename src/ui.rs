use crate::constants::*;
use crate::dom;
use crate::overlay;
use leafstorm_core::FocusView;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Reflect the focus/hover flags onto the character, logo, dim and info panel.
pub fn apply_focus(document: &web::Document, view: FocusView) {
    for sel in [CHARACTER_SELECTOR, LOGO_SELECTOR] {
        dom::set_class_all(document, sel, FOCUS_CLASS, view.focus);
        dom::set_class_all(document, sel, HOVER_CLASS, view.hover);
    }
    dom::set_class_all(document, GAME_INFO_SELECTOR, OPEN_CLASS, view.info_open);
    if let Some(dim) = dom::query(document, &class_selector(SCREEN_DIM_CLASS)) {
        overlay::set_screen_dim(&dim, view.dim_shown);
    }
    for hitbox in dom::query_all(document, HITBOX_SELECTOR) {
        if let Some(el) = hitbox.dyn_ref::<web::HtmlElement>() {
            let value = if view.hitbox_interactive { "auto" } else { "none" };
            _ = el.style().set_property("pointer-events", value);
        }
    }
}
