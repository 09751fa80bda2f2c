use crate::audio;
use crate::constants::*;
use crate::context::Fx;
use crate::dom;
use crate::effects;
use crate::ui;
use std::rc::Rc;
use web_sys as web;

fn apply_focus(fx: &Fx) {
    let view = fx.focus.borrow().view();
    ui::apply_focus(&fx.document, view);
}

// Background click: one lightning burst per click, overlapping bursts allowed
pub fn wire_background(fx: &Rc<Fx>) {
    let targets = dom::query_all(&fx.document, BACKGROUND_SELECTOR);
    if targets.is_empty() {
        log::warn!("no {} element; lightning disabled", BACKGROUND_SELECTOR);
    }
    for el in targets {
        let fx = fx.clone();
        dom::add_simple_listener(&el, "click", move || {
            let mut out = Vec::new();
            let plan = fx.stage.borrow_mut().trigger_burst(dom::now_ms(), &mut out);
            log::debug!("[bg] burst {:?}", plan.flashes.len());
            effects::apply(&fx, out);
        });
    }
}

pub fn wire_focus(fx: &Rc<Fx>, screen_dim: &web::HtmlElement) {
    for hitbox in dom::query_all(&fx.document, HITBOX_SELECTOR) {
        let fx_click = fx.clone();
        dom::add_simple_listener(&hitbox, "click", move || {
            fx_click.focus.borrow_mut().focus();
            apply_focus(&fx_click);
        });

        let fx_enter = fx.clone();
        dom::add_simple_listener(&hitbox, "mouseenter", move || {
            let changed = fx_enter.focus.borrow_mut().hover_enter();
            if changed {
                apply_focus(&fx_enter);
            }
        });

        let fx_leave = fx.clone();
        dom::add_simple_listener(&hitbox, "mouseleave", move || {
            let changed = fx_leave.focus.borrow_mut().hover_leave();
            if changed {
                apply_focus(&fx_leave);
            }
        });
    }

    let fx_dim = fx.clone();
    dom::add_simple_listener(screen_dim, "click", move || {
        fx_dim.focus.borrow_mut().dismiss();
        apply_focus(&fx_dim);
    });
}

pub fn wire_audio_toggle(fx: &Rc<Fx>) {
    let Some(button) = fx.player.button().cloned() else {
        return;
    };
    fx.player.render(fx.audio.borrow().indicator());
    let fx = fx.clone();
    dom::add_listener(&button, "click", move |ev: web::MouseEvent| {
        ev.prevent_default();
        let cmd = fx.audio.borrow_mut().toggle();
        audio::run(&fx, cmd);
    });
}

pub fn wire_visibility(fx: &Rc<Fx>) {
    let doc = fx.document.clone();
    let fx = fx.clone();
    dom::add_simple_listener(&doc, "visibilitychange", move || {
        let hidden = fx.document.hidden();
        let cmd = fx.audio.borrow_mut().visibility_changed(hidden);
        if let Some(cmd) = cmd {
            audio::run(&fx, cmd);
        }
    });
}
