#![cfg(target_arch = "wasm32")]
use leafstorm_core::FxConfig;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod clock;
mod constants;
mod context;
mod dom;
mod effects;
mod events;
mod overlay;
mod ui;

use context::Fx;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("leafstorm-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        // script loaded from <head>: wait for <body>
        let doc = document.clone();
        dom::add_simple_listener(&document, "DOMContentLoaded", move || {
            run_init(doc.clone());
        });
    } else {
        run_init(document);
    }
    Ok(())
}

fn run_init(document: web::Document) {
    if let Err(e) = init(document) {
        log::error!("init error: {:?}", e);
    }
}

fn init(document: web::Document) -> anyhow::Result<()> {
    let screen_dim = overlay::ensure_screen_dim(&document)?;
    let fx = Rc::new(Fx::new(document, FxConfig::default())?);

    events::wire_focus(&fx, &screen_dim);
    events::wire_background(&fx);
    events::wire_audio_toggle(&fx);
    events::wire_visibility(&fx);

    clock::start(&fx);
    let mut out = Vec::new();
    fx.stage.borrow_mut().start(dom::now_ms(), &mut out);
    effects::apply(&fx, out);
    Ok(())
}
