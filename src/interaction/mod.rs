//! Interaction dispatch: hover, press, focus and keybinding capture.
//!
//! The [`Session`] holds the handles the dispatcher tracks between ticks.
//! Handles are plain [`WidgetId`]s; when a widget is removed through
//! [`Ui::remove_widget`](crate::Ui::remove_widget) every handle pointing into
//! the removed subtree is cleared, and any handle that still goes stale
//! resolves to nothing and dispatches nothing.

mod dispatcher;
mod hooks;
pub mod interactable;

pub use hit_test::HitTester;
pub use interactable::{
    Callback, CursorDownBeginCallback, EventKind, FocusCallback, Handler, Interactable,
    KeyDownCallback, KeyUpCallback, TextInputCallback,
};

use crate::input::{MouseButtons, Pad};
use crate::tree::WidgetId;

#[derive(Debug, Default)]
pub struct Session {
    /// Widget under the cursor.
    pub(crate) hovered: Option<WidgetId>,
    /// Widget that received cursor-down and has not been released yet.
    pub(crate) mouse_down: Option<WidgetId>,
    /// Widget receiving keyboard and pad input.
    pub(crate) input_focus: Option<WidgetId>,
    /// Widget capturing the next raw input for a keybinding.
    pub(crate) binding: Option<WidgetId>,
    /// Primary buttons are masked until they are released.
    pub(crate) ignore_until_released: bool,
    pub(crate) last_pad: Pad,
    pub(crate) last_mouse_buttons: MouseButtons,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every handle that points at one of `removed`.
    ///
    /// Returns true if the focus or binding handle was among them.
    pub(crate) fn forget(&mut self, removed: &[WidgetId]) -> bool {
        let mut clear = |slot: &mut Option<WidgetId>| match *slot {
            Some(id) if removed.contains(&id) => {
                *slot = None;
                true
            }
            _ => false,
        };
        clear(&mut self.hovered);
        clear(&mut self.mouse_down);
        let focus_cleared = clear(&mut self.input_focus);
        let binding_cleared = clear(&mut self.binding);
        focus_cleared || binding_cleared
    }
}
