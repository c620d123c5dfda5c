//! Input focus and interaction dispatch for an in-game widget tree.
//!
//! Each frame the game calls [`Ui::update`] with the raw controller and mouse
//! state, and forwards keyboard events to [`Ui::on_key_down`],
//! [`Ui::on_key_up`] and [`Ui::on_text_input`]. The dispatcher merges
//! keyboard navigation into a synthetic pad, tracks which widget is hovered,
//! pressed, focused or capturing a keybinding, and fires the handlers hooked
//! onto those widgets.

pub mod config;
pub mod host;
pub mod input;
pub mod interaction;
pub mod panels;
pub mod tree;
pub mod ui;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{ConfigError, InteractionConfig};
pub use host::{Host, PanelKind, SoundCue};
pub use tree::{Tree, WidgetId};
pub use ui::Ui;

pub mod prelude {
    pub use crate::config::InteractionConfig;
    pub use crate::host::{Host, PanelKind, SoundCue};
    pub use crate::input::{Direction, FrameInput, MouseButtons, Pad, PadButtons, Scancode};
    pub use crate::interaction::interactable::{
        callback, cursor_down_begin, focus, key_down, key_up, text_input,
    };
    pub use crate::interaction::{EventKind, Interactable};
    pub use crate::panels::create_options_panel;
    pub use crate::tree::WidgetId;
    pub use crate::ui::Ui;
    pub use crate::widgets::{ButtonStyle, Rect, WidgetState, button, column};
}
