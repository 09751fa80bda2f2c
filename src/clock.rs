use crate::context::Fx;
use crate::dom;
use crate::effects;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Install the wake-up callback that advances the stage clock.
///
/// A single `setTimeout` is kept armed for the stage's next deadline. Timers
/// keep firing (throttled) in hidden tabs, so teardowns and the leaf cadence
/// continue while the page is in the background.
pub fn start(fx: &Rc<Fx>) {
    let fx_tick = fx.clone();
    let wake = Closure::wrap(Box::new(move || {
        fx_tick.timer.set(None);
        let mut out = Vec::new();
        fx_tick.stage.borrow_mut().tick(dom::now_ms(), &mut out);
        effects::apply(&fx_tick, out);
    }) as Box<dyn FnMut()>);
    *fx.wake.borrow_mut() = Some(wake.into_js_value().unchecked_into());
    rearm(fx);
}

/// Point the timer at the stage's current next deadline.
pub fn rearm(fx: &Fx) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(handle) = fx.timer.take() {
        w.clear_timeout_with_handle(handle);
    }
    let Some(due) = fx.stage.borrow().next_deadline() else {
        return;
    };
    let delay = (due - dom::now_ms()).max(0.0).ceil() as i32;
    if let Some(cb) = fx.wake.borrow().as_ref() {
        match w.set_timeout_with_callback_and_timeout_and_arguments_0(cb, delay) {
            Ok(handle) => fx.timer.set(Some(handle)),
            Err(e) => log::error!("[clock] setTimeout failed: {:?}", e),
        }
    }
}
