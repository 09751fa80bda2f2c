use crate::constants::*;
use crate::context::Fx;
use leafstorm_core::{AudioCommand, FxError, Indicator, PlayAttempt};
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// The looping background track and its toggle button.
pub struct Player {
    element: web::HtmlAudioElement,
    button: Option<web::Element>,
}

impl Player {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let element =
            web::HtmlAudioElement::new_with_src(BGM_SRC).map_err(|e| anyhow::anyhow!("{:?}", e))?;
        element.set_loop(true);
        element.set_preload("auto");
        element.set_volume(BGM_VOLUME);
        let button = document.get_element_by_id(BGM_TOGGLE_ID);
        if button.is_none() {
            log::warn!("missing #{}; music toggle disabled", BGM_TOGGLE_ID);
        }
        Ok(Self { element, button })
    }

    pub fn button(&self) -> Option<&web::Element> {
        self.button.as_ref()
    }

    pub fn render(&self, indicator: Indicator) {
        if let Some(btn) = &self.button {
            btn.set_text_content(Some(indicator.glyph()));
            _ = btn.set_attribute("aria-pressed", indicator.aria_pressed());
            _ = btn.set_attribute("aria-label", indicator.label());
            _ = btn.set_attribute("title", indicator.label());
        }
    }

    fn pause(&self) {
        _ = self.element.pause();
    }

    fn stop(&self) {
        _ = self.element.pause();
        self.element.set_current_time(0.0);
    }
}

/// Carry out an audio command, feeding the outcome of `Play` back into the
/// toggle state and re-rendering the button afterwards.
pub fn run(fx: &Rc<Fx>, cmd: AudioCommand) {
    match cmd {
        AudioCommand::Play(attempt) => play(fx, attempt),
        AudioCommand::Pause => fx.player.pause(),
        AudioCommand::Stop => fx.player.stop(),
    }
    fx.player.render(fx.audio.borrow().indicator());
}

fn play(fx: &Rc<Fx>, attempt: PlayAttempt) {
    let promise = match fx.player.element.play() {
        Ok(p) => p,
        Err(e) => {
            settle(fx, attempt, Err(FxError::PlaybackRejected(format!("{:?}", e))));
            return;
        }
    };
    let fx = fx.clone();
    spawn_local(async move {
        let result = JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| FxError::PlaybackRejected(format!("{:?}", e)));
        settle(&fx, attempt, result);
    });
}

fn settle(fx: &Rc<Fx>, attempt: PlayAttempt, result: Result<(), FxError>) {
    if let Err(e) = &result {
        log::warn!("[audio] {}", e);
    }
    let follow_up = fx.audio.borrow_mut().play_settled(attempt, result);
    match follow_up {
        Some(cmd) => run(fx, cmd),
        None => fx.player.render(fx.audio.borrow().indicator()),
    }
}
