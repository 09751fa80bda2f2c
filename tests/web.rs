#![cfg(target_arch = "wasm32")]

use std::sync::Once;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

static START: Once = Once::new();

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

// Build the page markup once, then wire it with a single `start`.
fn page() -> web_sys::Document {
    START.call_once(|| {
        let doc = document();
        let bg = doc.create_element("div").unwrap();
        bg.set_class_name("background");
        doc.body().unwrap().append_child(&bg).unwrap();
        leafstorm_web::start().unwrap();
    });
    document()
}

fn has_class(doc: &web_sys::Document, selector: &str, class: &str) -> bool {
    doc.query_selector(selector)
        .unwrap()
        .map(|el| el.class_list().contains(class))
        .unwrap_or(false)
}

#[wasm_bindgen_test]
fn start_creates_screen_dim() {
    let doc = page();
    assert!(doc.query_selector(".screen-dim").unwrap().is_some());
}

#[wasm_bindgen_test]
fn background_click_creates_flash_layers() {
    let doc = page();
    let bg = doc.query_selector(".background").unwrap().unwrap();
    bg.dyn_ref::<web_sys::HtmlElement>().unwrap().click();
    assert!(doc.query_selector(".fx-layer").unwrap().is_some());
    assert!(has_class(&doc, ".flash-scrim", "show"));
    assert!(doc.query_selector(".lightning-bolt").unwrap().is_some());
}
