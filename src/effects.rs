//! Applies stage commands to the DOM.

use crate::clock;
use crate::constants::*;
use crate::context::Fx;
use crate::dom;
use crate::overlay::Layers;
use leafstorm_core::{Command, FxError, PreloadTicket, Reveal, TransientUnit, UnitId, UnitKind};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

const UNIT_ATTR: &str = "data-unit";

/// Also re-arms the stage clock, since every stage call may move its next
/// deadline.
pub fn apply(fx: &Rc<Fx>, commands: Vec<Command>) {
    for cmd in commands {
        match cmd {
            Command::Preload { ticket, src } => preload(fx, ticket, src),
            Command::Attach { unit, reveal } => {
                if let Err(e) = attach(fx, &unit, reveal) {
                    log::warn!("attach {:?} failed: {:?}", unit.id, e);
                }
            }
            Command::Detach(id) => {
                if let Some(el) = fx.nodes.borrow_mut().remove(&id) {
                    el.remove();
                }
            }
            Command::EnsureFxLayer => ensure_layers(fx),
            Command::ShowFlash { position } => {
                if let Some(layers) = fx.layers.borrow().as_ref() {
                    layers.show_flash(position);
                }
            }
            Command::HideFlash => {
                if let Some(layers) = fx.layers.borrow().as_ref() {
                    layers.hide_flash();
                }
            }
        }
    }
    clock::rearm(fx);
}

fn preload(fx: &Rc<Fx>, ticket: PreloadTicket, src: &'static str) {
    let fx = fx.clone();
    spawn_local(async move {
        let result = match web::HtmlImageElement::new() {
            Ok(img) => {
                img.set_src(src);
                JsFuture::from(img.decode())
                    .await
                    .map(|_| ())
                    .map_err(|e| FxError::PreloadFailed(format!("{}: {:?}", src, e)))
            }
            Err(e) => Err(FxError::PreloadFailed(format!("{:?}", e))),
        };
        let mut out = Vec::new();
        fx.stage
            .borrow_mut()
            .preload_settled(ticket, result, dom::now_ms(), &mut out);
        apply(&fx, out);
    });
}

fn attach(fx: &Rc<Fx>, unit: &TransientUnit, reveal: Reveal) -> anyhow::Result<()> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_src(unit.asset.src);
    _ = img.set_attribute(UNIT_ATTR, &unit.id.0.to_string());
    let parent: web::HtmlElement = match unit.kind {
        UnitKind::Leaf => {
            img.set_class_name(LEAF_CLASS);
            img.set_alt("leaf");
            for (name, value) in unit.timing().css_pairs() {
                dom::set_css_var(&img, name, &value);
            }
            fx.document
                .body()
                .ok_or_else(|| anyhow::anyhow!("no body"))?
        }
        UnitKind::Bolt => {
            img.set_class_name(BOLT_CLASS);
            img.set_alt("lightning");
            ensure_layers(fx);
            fx.layers
                .borrow()
                .as_ref()
                .map(|l| l.fx_layer.clone())
                .ok_or_else(|| anyhow::anyhow!("missing fx layer"))?
        }
    };
    parent
        .append_child(&img)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    match reveal {
        Reveal::Immediate => {}
        Reveal::NextFrame => {
            let shown = img.clone();
            dom::next_frame(move || dom::set_class(&shown, SHOW_CLASS, true));
        }
    }
    fx.nodes.borrow_mut().insert(unit.id, img);
    Ok(())
}

/// Create the fx layer and flash scrim if needed, with one delegated
/// `animationend` listener each.
fn ensure_layers(fx: &Rc<Fx>) {
    if fx.layers.borrow().is_some() {
        return;
    }
    let layers = match Layers::ensure(&fx.document) {
        Ok(l) => l,
        Err(e) => {
            log::error!("fx layers: {:?}", e);
            return;
        }
    };

    let fx_bolt = fx.clone();
    dom::add_listener(&layers.fx_layer, "animationend", move |ev: web::AnimationEvent| {
        let Some(id) = unit_id_of(&ev) else {
            return;
        };
        let mut out = Vec::new();
        fx_bolt.stage.borrow_mut().animation_finished(id, &mut out);
        apply(&fx_bolt, out);
    });

    let fx_scrim = fx.clone();
    let scrim = layers.flash_scrim.clone();
    dom::add_listener(&layers.flash_scrim, "animationend", move |ev: web::AnimationEvent| {
        // only the scrim's own animation, not anything nested inside it
        let own = ev
            .target()
            .and_then(|t| t.dyn_into::<web::HtmlElement>().ok())
            .is_some_and(|t| t == scrim);
        if !own {
            return;
        }
        let mut out = Vec::new();
        fx_scrim.stage.borrow_mut().flash_finished(&mut out);
        apply(&fx_scrim, out);
    });

    *fx.layers.borrow_mut() = Some(layers);
}

fn unit_id_of(ev: &web::AnimationEvent) -> Option<UnitId> {
    let el = ev.target()?.dyn_into::<web::Element>().ok()?;
    el.get_attribute(UNIT_ATTR)?.parse::<u64>().ok().map(UnitId)
}
