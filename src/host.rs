//! The game-side collaborators the dispatcher drives.
//!
//! Cursor drawing, the panel stack, audio and the chat box all live outside
//! this crate. The main loop hands an implementation of [`Host`] to
//! [`Ui`](crate::Ui), and every side effect of dispatch goes through it.

use crate::tree::WidgetId;

/// Audio cues played by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// The hovered widget changed.
    HoverChange,
}

/// Sub-panels reachable from the options menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Camera,
    Controls,
    Display,
    Sound,
}

pub trait Host {
    /// Current cursor position in screen space.
    fn cursor_position(&self) -> (f32, f32);

    fn set_cursor_visible(&mut self, visible: bool);

    /// Move the cursor by one navigation cell.
    fn move_cursor(&mut self, dx: i32, dy: i32);

    /// Pop the top panel off the panel stack.
    fn panel_back(&mut self);

    /// Whether the pause panel is currently open.
    fn pause_panel_created(&self) -> bool {
        false
    }

    /// Close every open panel.
    fn shutdown_panel(&mut self) {}

    /// Push a freshly built panel. `caller` is the widget that opened it and
    /// `default_focus` the widget the cursor should start on.
    fn add_panel(
        &mut self,
        _caller: Option<WidgetId>,
        _panel: WidgetId,
        _default_focus: Option<WidgetId>,
    ) {
    }

    /// Build and push one of the options sub-panels.
    fn open_panel(&mut self, _kind: PanelKind) {}

    fn play_sound(&mut self, _cue: SoundCue) {}

    fn chat_box_exists(&self) -> bool {
        false
    }

    fn chat_box_focused(&self) -> bool {
        false
    }

    fn toggle_chat_box(&mut self) {}
}
