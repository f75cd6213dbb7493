//! Focus-ring policy: show focus only when it was reached without a pointer.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Tracks whether the current focus of a control should be drawn.
pub struct VisibleFocus {
    pointer_down: bool,
    visible: bool,
}

impl VisibleFocus {
    /// A pointer was pressed on the control.
    pub fn pointer_down(&mut self) {
        self.pointer_down = true;
    }

    /// The pointer was released.
    pub fn pointer_up(&mut self) {
        self.pointer_down = false;
    }

    /// The control gained focus; keyboard focus is visible, pointer focus is not.
    pub fn focus(&mut self) {
        self.visible = !self.pointer_down;
    }

    /// The control lost focus.
    pub fn blur(&mut self) {
        self.visible = false;
    }

    /// Whether a focus indicator should be drawn.
    pub fn visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_focus_is_visible() {
        let mut focus = VisibleFocus::default();
        focus.focus();
        assert!(focus.visible());
        focus.blur();
        assert!(!focus.visible());
    }

    #[test]
    fn pointer_focus_is_hidden_until_refocused_by_keyboard() {
        let mut focus = VisibleFocus::default();
        focus.pointer_down();
        focus.focus();
        focus.pointer_up();
        assert!(!focus.visible());

        focus.blur();
        focus.focus();
        assert!(focus.visible());
    }
}
