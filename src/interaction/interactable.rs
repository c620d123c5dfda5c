//! Per-widget interaction records.
//!
//! An [`Interactable`] is a sparse map from [`EventKind`] to a [`Handler`].
//! A kind with no handler is simply not dispatched.

use std::collections::HashMap;
use std::rc::Rc;

use crate::input::{Pad, Scancode};
use crate::tree::WidgetId;
use crate::ui::Ui;

/// Callback for events that only carry the target widget
pub type Callback = Rc<dyn Fn(&mut Ui, WidgetId)>;
/// Callback for cursor-down-begin (bool = press came from a non-mouse device)
pub type CursorDownBeginCallback = Rc<dyn Fn(&mut Ui, WidgetId, bool)>;
/// Callback for the per-tick focus event, receiving the merged pad
pub type FocusCallback = Rc<dyn Fn(&mut Ui, WidgetId, &Pad)>;
/// Callback for key-down, returning true when the key was consumed
pub type KeyDownCallback = Rc<dyn Fn(&mut Ui, WidgetId, Scancode) -> bool>;
/// Callback for key-up
pub type KeyUpCallback = Rc<dyn Fn(&mut Ui, WidgetId, Scancode)>;
/// Callback for text input
pub type TextInputCallback = Rc<dyn Fn(&mut Ui, WidgetId, &str)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Hover,
    HoverEnd,
    CursorDownBegin,
    CursorDown,
    CursorDownEnd,
    Click,
    FocusBegin,
    Focus,
    FocusEnd,
    ValueChange,
    Bind,
    KeyDown,
    KeyUp,
    TextInput,
    EnabledChange,
}

#[derive(Clone)]
pub enum Handler {
    Widget(Callback),
    CursorDownBegin(CursorDownBeginCallback),
    Focus(FocusCallback),
    KeyDown(KeyDownCallback),
    KeyUp(KeyUpCallback),
    TextInput(TextInputCallback),
}

/// Wrap a closure as a [`Callback`].
pub fn callback(f: impl Fn(&mut Ui, WidgetId) + 'static) -> Callback {
    Rc::new(f)
}

pub fn cursor_down_begin(f: impl Fn(&mut Ui, WidgetId, bool) + 'static) -> CursorDownBeginCallback {
    Rc::new(f)
}

pub fn focus(f: impl Fn(&mut Ui, WidgetId, &Pad) + 'static) -> FocusCallback {
    Rc::new(f)
}

pub fn key_down(f: impl Fn(&mut Ui, WidgetId, Scancode) -> bool + 'static) -> KeyDownCallback {
    Rc::new(f)
}

pub fn key_up(f: impl Fn(&mut Ui, WidgetId, Scancode) + 'static) -> KeyUpCallback {
    Rc::new(f)
}

pub fn text_input(f: impl Fn(&mut Ui, WidgetId, &str) + 'static) -> TextInputCallback {
    Rc::new(f)
}

#[derive(Clone, Default)]
pub struct Interactable {
    handlers: HashMap<EventKind, Handler>,
}

impl Interactable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install or clear (`None`) the handler for `kind`.
    pub(crate) fn set(&mut self, kind: EventKind, handler: Option<Handler>) {
        match handler {
            Some(handler) => {
                self.handlers.insert(kind, handler);
            }
            None => {
                self.handlers.remove(&kind);
            }
        }
    }

    pub fn has(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub(crate) fn callback(&self, kind: EventKind) -> Option<Callback> {
        match self.handlers.get(&kind) {
            Some(Handler::Widget(cb)) => Some(cb.clone()),
            _ => None,
        }
    }

    pub(crate) fn cursor_down_begin(&self) -> Option<CursorDownBeginCallback> {
        match self.handlers.get(&EventKind::CursorDownBegin) {
            Some(Handler::CursorDownBegin(cb)) => Some(cb.clone()),
            _ => None,
        }
    }

    pub(crate) fn focus(&self) -> Option<FocusCallback> {
        match self.handlers.get(&EventKind::Focus) {
            Some(Handler::Focus(cb)) => Some(cb.clone()),
            _ => None,
        }
    }

    pub(crate) fn key_down(&self) -> Option<KeyDownCallback> {
        match self.handlers.get(&EventKind::KeyDown) {
            Some(Handler::KeyDown(cb)) => Some(cb.clone()),
            _ => None,
        }
    }

    pub(crate) fn key_up(&self) -> Option<KeyUpCallback> {
        match self.handlers.get(&EventKind::KeyUp) {
            Some(Handler::KeyUp(cb)) => Some(cb.clone()),
            _ => None,
        }
    }

    pub(crate) fn text_input(&self) -> Option<TextInputCallback> {
        match self.handlers.get(&EventKind::TextInput) {
            Some(Handler::TextInput(cb)) => Some(cb.clone()),
            _ => None,
        }
    }
}

impl std::fmt::Debug for Interactable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interactable")
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
