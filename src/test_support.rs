//! Recording host shared by the unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::host::{Host, PanelKind, SoundCue};
use crate::tree::WidgetId;

#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    MoveCursor(i32, i32),
    PanelBack,
    ShutdownPanel,
    AddPanel {
        caller: Option<WidgetId>,
        panel: WidgetId,
        default_focus: Option<WidgetId>,
    },
    OpenPanel(PanelKind),
    PlaySound(SoundCue),
    ToggleChat,
}

#[derive(Debug)]
struct State {
    cursor: (f32, f32),
    cursor_visible: bool,
    pause_panel: bool,
    chat_box: bool,
    chat_focused: bool,
    calls: Vec<HostCall>,
}

/// Cloning shares the state, so a test keeps one handle while the `Ui` owns
/// another.
#[derive(Clone)]
pub struct TestHost(Rc<RefCell<State>>);

impl TestHost {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(State {
            cursor: (0.0, 0.0),
            cursor_visible: true,
            pause_panel: false,
            chat_box: false,
            chat_focused: false,
            calls: Vec::new(),
        })))
    }

    pub fn set_cursor(&self, x: f32, y: f32) {
        self.0.borrow_mut().cursor = (x, y);
    }

    pub fn set_cursor_visible_raw(&self, visible: bool) {
        self.0.borrow_mut().cursor_visible = visible;
    }

    pub fn set_pause_panel(&self, open: bool) {
        self.0.borrow_mut().pause_panel = open;
    }

    pub fn set_chat_box(&self, exists: bool, focused: bool) {
        let mut state = self.0.borrow_mut();
        state.chat_box = exists;
        state.chat_focused = focused;
    }

    pub fn cursor_visible(&self) -> bool {
        self.0.borrow().cursor_visible
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.0.borrow().calls.clone()
    }

    pub fn count(&self, call: &HostCall) -> usize {
        self.0.borrow().calls.iter().filter(|c| *c == call).count()
    }

    pub fn sounds(&self) -> usize {
        self.count(&HostCall::PlaySound(SoundCue::HoverChange))
    }

    pub fn moves(&self) -> Vec<(i32, i32)> {
        self.0
            .borrow()
            .calls
            .iter()
            .filter_map(|c| match c {
                HostCall::MoveCursor(dx, dy) => Some((*dx, *dy)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: HostCall) {
        self.0.borrow_mut().calls.push(call);
    }
}

impl Host for TestHost {
    fn cursor_position(&self) -> (f32, f32) {
        self.0.borrow().cursor
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.0.borrow_mut().cursor_visible = visible;
    }

    fn move_cursor(&mut self, dx: i32, dy: i32) {
        self.record(HostCall::MoveCursor(dx, dy));
    }

    fn panel_back(&mut self) {
        self.record(HostCall::PanelBack);
    }

    fn pause_panel_created(&self) -> bool {
        self.0.borrow().pause_panel
    }

    fn shutdown_panel(&mut self) {
        self.record(HostCall::ShutdownPanel);
    }

    fn add_panel(
        &mut self,
        caller: Option<WidgetId>,
        panel: WidgetId,
        default_focus: Option<WidgetId>,
    ) {
        self.record(HostCall::AddPanel {
            caller,
            panel,
            default_focus,
        });
    }

    fn open_panel(&mut self, kind: PanelKind) {
        self.record(HostCall::OpenPanel(kind));
    }

    fn play_sound(&mut self, cue: SoundCue) {
        self.record(HostCall::PlaySound(cue));
    }

    fn chat_box_exists(&self) -> bool {
        self.0.borrow().chat_box
    }

    fn chat_box_focused(&self) -> bool {
        self.0.borrow().chat_focused
    }

    fn toggle_chat_box(&mut self) {
        self.record(HostCall::ToggleChat);
    }
}
