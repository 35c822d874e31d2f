use crate::coords::Vec2;

use super::types::{InputEvent, Modifiers, PointerButtonEvent};

/// Per-window state the winit translation reads back.
///
/// Button and wheel events carry no position or modifiers of their own in
/// winit 0.30, so they are filled in from here.
#[derive(Debug, Default)]
pub(crate) struct InputState {
    pub modifiers: Modifiers,

    /// Pointer position in logical pixels; `None` while outside the window.
    pub pointer_pos: Option<Vec2>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = *m,

            InputEvent::PointerMoved(p) => self.pointer_pos = Some(*p),

            InputEvent::PointerLeft => self.pointer_pos = None,

            InputEvent::Key { modifiers, .. } | InputEvent::MouseWheel { modifiers, .. } => {
                self.modifiers = *modifiers;
            }

            InputEvent::PointerButton(PointerButtonEvent { position, modifiers, .. }) => {
                self.pointer_pos = Some(*position);
                self.modifiers = *modifiers;
            }

            InputEvent::Focused(_) | InputEvent::PointerEntered => {}
        }
    }
}
