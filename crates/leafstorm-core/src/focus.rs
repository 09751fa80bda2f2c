/// Character focus and hover flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusState {
    focused: bool,
    hovered: bool,
}

/// Presentation flags derived from [`FocusState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusView {
    pub focus: bool,
    pub hover: bool,
    pub dim_shown: bool,
    pub info_open: bool,
    pub hitbox_interactive: bool,
}

impl FocusState {
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn dismiss(&mut self) {
        self.focused = false;
    }

    /// Ignored while focused. Returns whether the hover flag changed.
    pub fn hover_enter(&mut self) -> bool {
        if self.focused || self.hovered {
            return false;
        }
        self.hovered = true;
        true
    }

    pub fn hover_leave(&mut self) -> bool {
        std::mem::replace(&mut self.hovered, false)
    }

    pub fn view(&self) -> FocusView {
        FocusView {
            focus: self.focused,
            hover: self.hovered,
            dim_shown: self.focused,
            info_open: self.focused,
            hitbox_interactive: !self.focused,
        }
    }
}
