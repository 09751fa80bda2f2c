use glam::Vec2;

/// The shared flash scrim. Created once, then only toggled and moved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlashOverlay {
    created: bool,
    visible: bool,
    position: Vec2,
}

impl FlashOverlay {
    /// Returns `true` the first time only; the caller creates the layer then.
    pub fn ensure(&mut self) -> bool {
        !std::mem::replace(&mut self.created, true)
    }

    pub fn show_at(&mut self, position: Vec2) {
        self.position = position;
        self.visible = true;
    }

    /// Returns `true` if the overlay was visible.
    pub fn hide(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    pub fn is_created(&self) -> bool {
        self.created
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_is_idempotent_and_hide_keeps_layer() {
        let mut o = FlashOverlay::default();
        assert!(o.ensure());
        assert!(!o.ensure());
        o.show_at(Vec2::new(30.0, 40.0));
        assert!(o.is_visible());
        assert!(o.hide());
        assert!(!o.hide());
        assert!(o.is_created());
        assert_eq!(o.position(), Vec2::new(30.0, 40.0));
    }
}
