use crate::constants::*;
use crate::dom;
use glam::Vec2;
use web_sys as web;

/// Page-level layers that are created once and then only toggled.
pub struct Layers {
    pub fx_layer: web::HtmlElement,
    pub flash_scrim: web::HtmlElement,
}

impl Layers {
    pub fn ensure(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            fx_layer: dom::ensure_div(document, FX_LAYER_CLASS)?,
            flash_scrim: dom::ensure_div(document, FLASH_SCRIM_CLASS)?,
        })
    }

    /// Move the scrim highlight to `position` (vw, vh) and light it up.
    pub fn show_flash(&self, position: Vec2) {
        dom::set_css_var(&self.flash_scrim, FLASH_X_VAR, &format!("{}vw", position.x));
        dom::set_css_var(&self.flash_scrim, FLASH_Y_VAR, &format!("{}vh", position.y));
        dom::set_class(&self.flash_scrim, SHOW_CLASS, true);
    }

    pub fn hide_flash(&self) {
        dom::set_class(&self.flash_scrim, SHOW_CLASS, false);
    }
}

#[inline]
pub fn ensure_screen_dim(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    dom::ensure_div(document, SCREEN_DIM_CLASS)
}

#[inline]
pub fn set_screen_dim(dim: &web::Element, shown: bool) {
    dom::set_class(dim, SHOW_CLASS, shown);
}
