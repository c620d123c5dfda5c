//! Hook registration.
//!
//! Every `hook_*` call overwrites only the slots it names; passing `None`
//! clears a slot. A widget needs an interaction record first, created with
//! [`Ui::create_interactable`]; hooking a widget without one does nothing.

use crate::tree::WidgetId;
use crate::ui::Ui;

use super::{
    Callback, CursorDownBeginCallback, EventKind, FocusCallback, Handler, Interactable,
    KeyDownCallback, KeyUpCallback, TextInputCallback,
};

impl Ui {
    /// Give a widget an empty interaction record, replacing any previous one.
    pub fn create_interactable(&mut self, id: WidgetId) {
        if !self.tree.contains(id) {
            log::debug!("create_interactable on unknown widget {:?}", id);
            return;
        }
        if let Some(previous) = self.tree.replace_interactable(id, Interactable::new()) {
            log::debug!(
                "Replaced interaction record of {:?} ({} handlers dropped)",
                id,
                previous.len()
            );
        }
    }

    fn set_handlers(&mut self, id: WidgetId, slots: Vec<(EventKind, Option<Handler>)>) {
        let Some(interactable) = self.tree.interactable_mut(id) else {
            log::debug!("Hooking {:?} without an interaction record", id);
            return;
        };
        for (kind, handler) in slots {
            interactable.set(kind, handler);
        }
    }

    pub fn hook_hover(
        &mut self,
        id: WidgetId,
        on_hover: Option<Callback>,
        on_hover_end: Option<Callback>,
    ) {
        self.set_handlers(
            id,
            vec![
                (EventKind::Hover, on_hover.map(Handler::Widget)),
                (EventKind::HoverEnd, on_hover_end.map(Handler::Widget)),
            ],
        );
    }

    pub fn hook_cursor_down(
        &mut self,
        id: WidgetId,
        on_cursor_down_begin: Option<CursorDownBeginCallback>,
        on_cursor_down: Option<Callback>,
        on_cursor_down_end: Option<Callback>,
    ) {
        self.set_handlers(
            id,
            vec![
                (
                    EventKind::CursorDownBegin,
                    on_cursor_down_begin.map(Handler::CursorDownBegin),
                ),
                (EventKind::CursorDown, on_cursor_down.map(Handler::Widget)),
                (
                    EventKind::CursorDownEnd,
                    on_cursor_down_end.map(Handler::Widget),
                ),
            ],
        );
    }

    pub fn hook_focus(
        &mut self,
        id: WidgetId,
        on_focus_begin: Option<Callback>,
        on_focus: Option<FocusCallback>,
        on_focus_end: Option<Callback>,
    ) {
        self.set_handlers(
            id,
            vec![
                (EventKind::FocusBegin, on_focus_begin.map(Handler::Widget)),
                (EventKind::Focus, on_focus.map(Handler::Focus)),
                (EventKind::FocusEnd, on_focus_end.map(Handler::Widget)),
            ],
        );
    }

    pub fn hook_click(&mut self, id: WidgetId, on_click: Option<Callback>) {
        self.set_handlers(id, vec![(EventKind::Click, on_click.map(Handler::Widget))]);
    }

    pub fn hook_value_change(&mut self, id: WidgetId, on_value_change: Option<Callback>) {
        self.set_handlers(
            id,
            vec![(EventKind::ValueChange, on_value_change.map(Handler::Widget))],
        );
    }

    pub fn hook_bind(&mut self, id: WidgetId, on_bind: Option<Callback>) {
        self.set_handlers(id, vec![(EventKind::Bind, on_bind.map(Handler::Widget))]);
    }

    pub fn hook_key(
        &mut self,
        id: WidgetId,
        on_key_down: Option<KeyDownCallback>,
        on_key_up: Option<KeyUpCallback>,
    ) {
        self.set_handlers(
            id,
            vec![
                (EventKind::KeyDown, on_key_down.map(Handler::KeyDown)),
                (EventKind::KeyUp, on_key_up.map(Handler::KeyUp)),
            ],
        );
    }

    pub fn hook_text_input(&mut self, id: WidgetId, on_text_input: Option<TextInputCallback>) {
        self.set_handlers(
            id,
            vec![(EventKind::TextInput, on_text_input.map(Handler::TextInput))],
        );
    }

    pub fn hook_enabled_change(&mut self, id: WidgetId, on_enabled_change: Option<Callback>) {
        self.set_handlers(
            id,
            vec![(
                EventKind::EnabledChange,
                on_enabled_change.map(Handler::Widget),
            )],
        );
    }
}
