//! Push button.
//!
//! A button is a labeled node with an interaction record whose hover and
//! cursor-down hooks keep its [`WidgetState`](super::WidgetState) in sync so
//! the renderer can draw the hovered and pressed looks. Behavior is attached
//! with [`Ui::hook_click`].

use crate::interaction::interactable::{callback, cursor_down_begin};
use crate::tree::WidgetId;
use crate::ui::Ui;

use super::widget::{ButtonStyle, Rect, WidgetState};

pub fn button(ui: &mut Ui, parent: WidgetId, bounds: Rect, label: &str) -> WidgetId {
    let id = ui.add_widget(parent, bounds);
    if let Some(state) = ui.tree_mut().state_mut(id) {
        *state = WidgetState::labeled(label);
    }

    ui.create_interactable(id);
    ui.hook_hover(
        id,
        Some(callback(|ui, id| {
            if let Some(state) = ui.tree_mut().state_mut(id) {
                state.hovered = true;
            }
        })),
        Some(callback(|ui, id| {
            if let Some(state) = ui.tree_mut().state_mut(id) {
                state.hovered = false;
            }
        })),
    );
    ui.hook_cursor_down(
        id,
        Some(cursor_down_begin(|ui, id, _input_cursor| {
            if let Some(state) = ui.tree_mut().state_mut(id) {
                state.hovered = false;
                state.pressed = true;
            }
        })),
        None,
        Some(callback(|ui, id| {
            if let Some(state) = ui.tree_mut().state_mut(id) {
                state.pressed = false;
            }
        })),
    );
    id
}

pub fn set_button_style(ui: &mut Ui, id: WidgetId, style: ButtonStyle) {
    if let Some(state) = ui.tree_mut().state_mut(id) {
        state.style = style;
    }
}
