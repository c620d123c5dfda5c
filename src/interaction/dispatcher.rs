//! The per-tick interaction state machine.

use std::time::Instant;

use crate::host::SoundCue;
use crate::input::{FrameInput, MouseButtons, Pad, PadButtons, Scancode};
use crate::tree::WidgetId;
use crate::ui::Ui;

use super::EventKind;

impl Ui {
    /// Run one input tick. Called once per frame by the main loop.
    pub fn update(&mut self, frame: FrameInput) {
        self.update_pad(frame.pad, frame.now);

        // Keep a capture-ending press from landing on something else
        let mut mouse_buttons = frame.mouse_buttons;
        let mut pad_buttons = self.pad.buttons;
        if self.session.ignore_until_released {
            if pad_buttons.contains(PadButtons::A)
                || mouse_buttons.contains(MouseButtons::BUTTON_1)
            {
                pad_buttons.remove(PadButtons::A);
                mouse_buttons.remove(MouseButtons::BUTTON_1);
            } else {
                self.session.ignore_until_released = false;
            }
        }

        let masked_pad = Pad {
            buttons: pad_buttons,
            ..self.pad
        };
        let last_pad_buttons = self.session.last_pad.buttons;
        let last_mouse_buttons = self.session.last_mouse_buttons;
        let pad_pressed = masked_pad.pressed_since(&self.session.last_pad);
        let mouse_pressed = mouse_buttons.contains(MouseButtons::BUTTON_1)
            && !last_mouse_buttons.contains(MouseButtons::BUTTON_1);

        if let Some(focus) = self.session.input_focus {
            let main_buttons = PadButtons::A | PadButtons::B;
            if mouse_pressed && !self.cursor_inside(focus) {
                log::debug!("Click outside focused widget {:?}", focus);
                self.set_input_focus(None);
            } else if pad_buttons.intersects(main_buttons)
                && !last_pad_buttons.intersects(main_buttons)
            {
                self.set_input_focus(None);
            } else {
                self.on_focus(focus);
            }
        } else if pad_pressed.contains(PadButtons::B) {
            self.host.panel_back();
        } else if pad_pressed.contains(PadButtons::START) && self.host.pause_panel_created() {
            self.host.shutdown_panel();
        }

        if let Some(binding) = self.session.binding {
            self.fire(binding, EventKind::Bind);
        } else if pad_buttons.contains(PadButtons::A)
            || mouse_buttons.contains(MouseButtons::BUTTON_1)
        {
            if let Some(hovered) = self.session.hovered.take() {
                self.session.mouse_down = Some(hovered);
                self.on_cursor_down_begin(hovered, mouse_buttons.is_empty());
            } else if let Some(mouse_down) = self.session.mouse_down {
                self.fire(mouse_down, EventKind::CursorDown);
            }
        } else {
            if let Some(mouse_down) = self.session.mouse_down.take() {
                self.on_cursor_down_end(mouse_down);
            }

            let last_hovered = self.session.hovered.take();
            let cursor = self.host.cursor_position();
            let hovered = self.hit_tester.find_hovered(&self.tree, self.root, cursor);
            self.session.hovered = hovered;
            if last_hovered != hovered {
                log::trace!("Hover {:?} -> {:?}", last_hovered, hovered);
                if let Some(old) = last_hovered {
                    self.fire(old, EventKind::HoverEnd);
                }
                self.host.play_sound(SoundCue::HoverChange);
            }
            if let Some(hovered) = hovered {
                self.fire(hovered, EventKind::Hover);
            }
        }

        self.session.last_pad = self.pad;
        self.session.last_mouse_buttons = mouse_buttons;
    }

    fn update_pad(&mut self, raw: Pad, now: Instant) {
        let update = self.merger.update(raw, now);
        self.pad = update.pad;
        if let Some(step) = update.step
            && self.session.input_focus.is_none()
        {
            let (dx, dy) = step.cursor_delta();
            self.host.move_cursor(dx, dy);
        }
    }

    /// Enter (`Some`) or leave (`None`) keybinding capture.
    ///
    /// The cursor is hidden while capturing. Leaving capture masks the
    /// primary buttons until they are released. A removed widget counts as
    /// `None`.
    pub fn set_binding(&mut self, target: Option<WidgetId>) {
        let target = self.live(target);
        log::debug!("Binding capture {:?} -> {:?}", self.session.binding, target);
        self.session.binding = target;
        self.host.set_cursor_visible(target.is_none());
        if target.is_none() {
            self.session.ignore_until_released = true;
        }
    }

    /// Move input focus, firing focus-end on the old target and then
    /// focus-begin on the new one. The cursor is shown only while nothing
    /// has focus. A removed widget counts as `None`.
    pub fn set_input_focus(&mut self, target: Option<WidgetId>) {
        let target = self.live(target);
        let previous = self.session.input_focus;
        log::debug!("Input focus {:?} -> {:?}", previous, target);
        if let Some(previous) = previous {
            self.fire(previous, EventKind::FocusEnd);
        }
        self.session.input_focus = target;
        if let Some(target) = target {
            self.fire(target, EventKind::FocusBegin);
        }
        self.host.set_cursor_visible(target.is_none());
    }

    /// Route a key press. Returns true if the key was consumed.
    pub fn on_key_down(&mut self, code: Scancode) -> bool {
        if let Some(focus) = self.session.input_focus
            && let Some(handler) = self.tree.interactable(focus).and_then(|i| i.key_down())
            && handler(self, focus, code)
        {
            self.merger.release_all();
            return true;
        }

        if code == Scancode::ESCAPE {
            self.host.panel_back();
        }

        if self.host.chat_box_exists()
            && !self.host.chat_box_focused()
            && self.config.is_chat_key(code)
        {
            self.host.toggle_chat_box();
            return true;
        }

        self.merger.press(code)
    }

    /// Route a key release.
    pub fn on_key_up(&mut self, code: Scancode) {
        if let Some(focus) = self.session.input_focus
            && let Some(handler) = self.tree.interactable(focus).and_then(|i| i.key_up())
        {
            handler(self, focus, code);
            self.merger.release_all();
            return;
        }

        if let Some(direction) = self.merger.release(code) {
            if direction.is_vertical() {
                self.pad.stick_y = 0;
            } else {
                self.pad.stick_x = 0;
            }
        }
    }

    /// Forward committed text to the focused widget.
    pub fn on_text_input(&mut self, text: &str) {
        if let Some(focus) = self.session.input_focus
            && let Some(handler) = self.tree.interactable(focus).and_then(|i| i.text_input())
        {
            handler(self, focus, text);
        }
    }

    /// Notify a widget that its value changed.
    pub fn fire_value_change(&mut self, id: WidgetId) {
        self.fire(id, EventKind::ValueChange);
    }

    fn live(&self, target: Option<WidgetId>) -> Option<WidgetId> {
        target.filter(|&id| {
            let alive = self.tree.contains(id);
            if !alive {
                log::debug!("Ignoring removed widget {:?}", id);
            }
            alive
        })
    }

    pub(crate) fn fire(&mut self, id: WidgetId, kind: EventKind) {
        if let Some(handler) = self.tree.interactable(id).and_then(|i| i.callback(kind)) {
            handler(self, id);
        }
    }

    fn on_cursor_down_begin(&mut self, id: WidgetId, input_cursor: bool) {
        if let Some(handler) = self
            .tree
            .interactable(id)
            .and_then(|i| i.cursor_down_begin())
        {
            handler(self, id, input_cursor);
        }
    }

    fn on_cursor_down_end(&mut self, id: WidgetId) {
        self.fire(id, EventKind::CursorDownEnd);
        if self.cursor_inside(id) {
            self.fire(id, EventKind::Click);
        }
    }

    fn on_focus(&mut self, id: WidgetId) {
        if let Some(handler) = self.tree.interactable(id).and_then(|i| i.focus()) {
            let pad = self.pad;
            handler(self, id, &pad);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::interaction::interactable::{callback, cursor_down_begin, focus, key_down, key_up};
    use crate::test_support::{HostCall, TestHost};
    use crate::widgets::Rect;

    type Log = Rc<RefCell<Vec<String>>>;

    struct Harness {
        ui: Ui,
        host: TestHost,
        log: Log,
        start: Instant,
        tick: u64,
    }

    impl Harness {
        fn new() -> Self {
            let host = TestHost::new();
            let ui = Ui::new(host.clone(), Rect::new(0.0, 0.0, 640.0, 480.0));
            Self {
                ui,
                host,
                log: Rc::new(RefCell::new(Vec::new())),
                start: Instant::now(),
                tick: 0,
            }
        }

        /// Interactable widget logging every widget-only event.
        fn widget(&mut self, name: &'static str, rect: Rect) -> WidgetId {
            let id = self.ui.add_widget(self.ui.root(), rect);
            self.ui.create_interactable(id);
            let entry = |event: &'static str, log: &Log| {
                let log = log.clone();
                Some(callback(move |_, _| {
                    log.borrow_mut().push(format!("{event}:{name}"))
                }))
            };
            self.ui
                .hook_hover(id, entry("hover", &self.log), entry("hover_end", &self.log));
            let log = self.log.clone();
            self.ui.hook_cursor_down(
                id,
                Some(cursor_down_begin(move |_, _, input_cursor| {
                    log.borrow_mut()
                        .push(format!("down_begin:{name}:{input_cursor}"))
                })),
                entry("down", &self.log),
                entry("down_end", &self.log),
            );
            self.ui.hook_click(id, entry("click", &self.log));
            self.ui.hook_focus(
                id,
                entry("focus_begin", &self.log),
                None,
                entry("focus_end", &self.log),
            );
            self.ui.hook_bind(id, entry("bind", &self.log));
            id
        }

        fn frame(&mut self, pad: Pad, mouse: MouseButtons) {
            self.tick += 1;
            let now = self.start + Duration::from_millis(16 * self.tick);
            self.ui.update(FrameInput::new(pad, mouse, now));
        }

        fn idle(&mut self) {
            self.frame(Pad::default(), MouseButtons::empty());
        }

        fn mouse(&mut self) {
            self.frame(Pad::default(), MouseButtons::BUTTON_1);
        }

        fn take_log(&self) -> Vec<String> {
            std::mem::take(&mut *self.log.borrow_mut())
        }
    }

    fn button_rect() -> Rect {
        Rect::new(100.0, 100.0, 200.0, 64.0)
    }

    #[test]
    fn test_hover_enter_and_leave() {
        let mut h = Harness::new();
        h.widget("a", button_rect());

        h.host.set_cursor(150.0, 120.0);
        h.idle();
        assert_eq!(h.take_log(), vec!["hover:a"]);
        assert_eq!(h.host.sounds(), 1);

        // Hover fires every tick, the sound only on change
        h.idle();
        assert_eq!(h.take_log(), vec!["hover:a"]);
        assert_eq!(h.host.sounds(), 1);

        h.host.set_cursor(10.0, 10.0);
        h.idle();
        assert_eq!(h.take_log(), vec!["hover_end:a"]);
        assert_eq!(h.host.sounds(), 2);
        assert_eq!(h.ui.hovered(), None);
    }

    #[test]
    fn test_press_and_release_inside_clicks() {
        let mut h = Harness::new();
        let a = h.widget("a", button_rect());
        h.host.set_cursor(150.0, 120.0);
        h.idle();
        h.take_log();

        h.mouse();
        assert_eq!(h.take_log(), vec!["down_begin:a:false"]);
        assert_eq!(h.ui.mouse_down(), Some(a));
        assert_eq!(h.ui.hovered(), None);

        h.mouse();
        assert_eq!(h.take_log(), vec!["down:a"]);

        h.idle();
        assert_eq!(h.take_log(), vec!["down_end:a", "click:a", "hover:a"]);
        assert_eq!(h.ui.mouse_down(), None);
        assert_eq!(h.ui.hovered(), Some(a));
    }

    #[test]
    fn test_release_outside_does_not_click() {
        let mut h = Harness::new();
        h.widget("a", button_rect());
        h.host.set_cursor(150.0, 120.0);
        h.idle();
        h.mouse();
        h.take_log();

        h.host.set_cursor(500.0, 400.0);
        h.idle();
        assert_eq!(h.take_log(), vec!["down_end:a"]);
    }

    #[test]
    fn test_pad_press_reports_non_mouse_input() {
        let mut h = Harness::new();
        h.widget("a", button_rect());
        h.host.set_cursor(150.0, 120.0);
        h.idle();
        h.take_log();

        h.frame(Pad::with_buttons(PadButtons::A), MouseButtons::empty());
        assert_eq!(h.take_log(), vec!["down_begin:a:true"]);
    }

    #[test]
    fn test_press_over_nothing_does_nothing() {
        let mut h = Harness::new();
        h.widget("a", button_rect());
        h.host.set_cursor(10.0, 10.0);
        h.idle();
        h.mouse();
        h.idle();
        assert!(h.take_log().is_empty());
    }

    #[test]
    fn test_focus_order_from_none() {
        let mut h = Harness::new();
        let a = h.widget("a", button_rect());
        let b = h.widget("b", Rect::new(0.0, 300.0, 50.0, 50.0));

        h.ui.set_input_focus(Some(a));
        assert_eq!(h.take_log(), vec!["focus_begin:a"]);
        assert!(!h.host.cursor_visible());
        assert!(h.ui.is_input_focus(Some(a)));

        h.ui.set_input_focus(Some(b));
        assert_eq!(h.take_log(), vec!["focus_end:a", "focus_begin:b"]);

        h.ui.set_input_focus(None);
        assert_eq!(h.take_log(), vec!["focus_end:b"]);
        assert!(h.host.cursor_visible());
        assert!(h.ui.is_input_focus(None));

        // None to none still updates the cursor
        h.host.set_cursor_visible_raw(false);
        h.ui.set_input_focus(None);
        assert!(h.take_log().is_empty());
        assert!(h.host.cursor_visible());
    }

    #[test]
    fn test_focus_receives_merged_pad_each_tick() {
        let mut h = Harness::new();
        let a = h.widget("a", button_rect());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        h.ui.hook_focus(
            a,
            None,
            Some(focus(move |_, _, pad| sink.borrow_mut().push(*pad))),
            None,
        );
        h.ui.set_input_focus(Some(a));

        h.ui.on_key_down(Scancode::RIGHT);
        h.frame(Pad::with_buttons(PadButtons::Z), MouseButtons::empty());

        assert_eq!(
            seen.borrow().as_slice(),
            &[Pad::new(PadButtons::Z, 64, 0)]
        );
        // Focused widgets consume direction, the cursor stays put
        assert!(h.host.moves().is_empty());
    }

    #[test]
    fn test_click_outside_focus_clears_it() {
        let mut h = Harness::new();
        let a = h.widget("a", button_rect());
        h.ui.set_input_focus(Some(a));
        h.take_log();

        h.host.set_cursor(150.0, 120.0);
        h.mouse();
        assert_eq!(h.ui.input_focus(), Some(a));
        h.idle();

        h.host.set_cursor(600.0, 400.0);
        h.mouse();
        assert_eq!(h.ui.input_focus(), None);
        assert!(h.take_log().contains(&"focus_end:a".to_string()));
    }

    #[test]
    fn test_held_mouse_is_not_an_edge() {
        let mut h = Harness::new();
        let a = h.widget("a", button_rect());
        h.host.set_cursor(600.0, 400.0);
        h.mouse();

        // Focus gained while the button is already held
        h.ui.set_input_focus(Some(a));
        h.mouse();
        assert_eq!(h.ui.input_focus(), Some(a));
    }

    #[test]
    fn test_face_button_clears_focus() {
        let mut h = Harness::new();
        let a = h.widget("a", button_rect());
        h.ui.set_input_focus(Some(a));

        h.frame(Pad::with_buttons(PadButtons::B), MouseButtons::empty());
        assert_eq!(h.ui.input_focus(), None);
        // B while focused does not also navigate back
        assert!(!h.host.calls().contains(&HostCall::PanelBack));
    }

    #[test]
    fn test_back_and_start_without_focus() {
        let mut h = Harness::new();
        h.frame(Pad::with_buttons(PadButtons::B), MouseButtons::empty());
        h.frame(Pad::with_buttons(PadButtons::B), MouseButtons::empty());
        assert_eq!(h.host.count(&HostCall::PanelBack), 1);

        h.idle();
        h.frame(Pad::with_buttons(PadButtons::START), MouseButtons::empty());
        assert_eq!(h.host.count(&HostCall::ShutdownPanel), 0);

        h.idle();
        h.host.set_pause_panel(true);
        h.frame(Pad::with_buttons(PadButtons::START), MouseButtons::empty());
        assert_eq!(h.host.count(&HostCall::ShutdownPanel), 1);
    }

    #[test]
    fn test_binding_capture_and_release_latch() {
        let mut h = Harness::new();
        let a = h.widget("a", button_rect());
        let b = h.widget("b", Rect::new(100.0, 300.0, 200.0, 64.0));
        h.host.set_cursor(150.0, 320.0);
        h.idle();
        h.take_log();

        h.ui.set_binding(Some(a));
        assert!(h.ui.is_binding());
        assert!(!h.host.cursor_visible());

        // Bind fires every tick and hover/press are skipped
        h.mouse();
        assert_eq!(h.take_log(), vec!["bind:a"]);

        // The bind handler ends capture while the button is still down
        h.ui.set_binding(None);
        assert!(h.host.cursor_visible());
        h.mouse();
        h.mouse();
        h.idle();
        let log = h.take_log();
        assert!(!log.iter().any(|e| e.starts_with("down_begin")));
        assert!(!log.iter().any(|e| e.starts_with("click")));
        assert_eq!(h.ui.hovered(), Some(b));

        // Next press behaves normally
        h.mouse();
        assert_eq!(h.take_log(), vec!["down_begin:b:false"]);
    }

    #[test]
    fn test_leaving_binding_without_press_is_harmless() {
        let mut h = Harness::new();
        let a = h.widget("a", button_rect());
        h.ui.set_binding(Some(a));
        h.idle();
        h.ui.set_binding(None);

        h.host.set_cursor(150.0, 120.0);
        h.idle();
        h.take_log();
        h.mouse();
        assert_eq!(h.take_log(), vec!["down_begin:a:false"]);
    }

    #[test]
    fn test_arrow_moves_cursor_without_focus() {
        let mut h = Harness::new();
        assert!(h.ui.on_key_down(Scancode::DOWN));
        h.idle();
        assert_eq!(h.host.moves(), vec![(0, 1)]);

        // 16ms ticks: next step only after the 250ms delay
        for _ in 0..15 {
            h.idle();
        }
        assert_eq!(h.host.moves().len(), 1);
        h.idle();
        assert_eq!(h.host.moves().len(), 2);

        h.ui.on_key_up(Scancode::DOWN);
        assert_eq!(h.ui.pad().stick_y, 0);
    }

    #[test]
    fn test_key_down_consumed_by_focus() {
        let mut h = Harness::new();
        let a = h.widget("a", button_rect());
        let keys = Rc::new(RefCell::new(Vec::new()));
        let sink = keys.clone();
        let ups = keys.clone();
        h.ui.hook_key(
            a,
            Some(key_down(move |_, _, code| {
                sink.borrow_mut().push(code);
                code != Scancode::ESCAPE
            })),
            Some(key_up(move |_, _, code| ups.borrow_mut().push(code))),
        );
        h.ui.set_input_focus(Some(a));

        assert!(h.ui.on_key_down(Scancode::LEFT));
        assert_eq!(h.ui.pad().stick_x, 0);

        // Not consumed: falls through to the default handling
        assert!(!h.ui.on_key_down(Scancode::ESCAPE));
        assert_eq!(h.host.count(&HostCall::PanelBack), 1);

        h.ui.on_key_up(Scancode::LEFT);
        assert_eq!(
            keys.borrow().as_slice(),
            &[Scancode::LEFT, Scancode::ESCAPE, Scancode::LEFT]
        );
    }

    #[test]
    fn test_chat_key_opens_chat() {
        let mut h = Harness::new();
        assert!(h.ui.on_key_down(Scancode::ENTER));
        h.ui.on_key_up(Scancode::ENTER);
        assert_eq!(h.host.count(&HostCall::ToggleChat), 0);

        h.host.set_chat_box(true, false);
        assert!(h.ui.on_key_down(Scancode::ENTER));
        assert_eq!(h.host.count(&HostCall::ToggleChat), 1);

        h.host.set_chat_box(true, true);
        assert!(h.ui.on_key_down(Scancode::ENTER));
        assert_eq!(h.host.count(&HostCall::ToggleChat), 1);
    }

    #[test]
    fn test_text_input_goes_to_focus() {
        let mut h = Harness::new();
        let a = h.widget("a", button_rect());
        let text = Rc::new(RefCell::new(String::new()));
        let sink = text.clone();
        h.ui.hook_text_input(
            a,
            Some(crate::interaction::interactable::text_input(move |_, _, t| {
                sink.borrow_mut().push_str(t)
            })),
        );

        h.ui.on_text_input("ignored");
        h.ui.set_input_focus(Some(a));
        h.ui.on_text_input("héllo");
        assert_eq!(text.borrow().as_str(), "héllo");
    }

    #[test]
    fn test_missing_handlers_are_noops() {
        let mut h = Harness::new();
        let plain = h.ui.add_widget(h.ui.root(), button_rect());
        h.ui.fire_value_change(plain);
        h.ui.set_input_focus(Some(plain));
        h.ui.on_text_input("x");
        assert!(!h.ui.on_key_down(Scancode(0x1E)));
        h.ui.on_key_up(Scancode(0x1E));

        h.ui.create_interactable(plain);
        h.host.set_cursor(150.0, 120.0);
        h.ui.set_input_focus(None);
        h.idle();
        h.mouse();
        h.idle();
        assert_eq!(h.ui.hovered(), Some(plain));
    }

    #[test]
    fn test_click_handler_can_remove_its_widget() {
        let mut h = Harness::new();
        let a = h.widget("a", button_rect());
        h.ui.hook_click(a, Some(callback(|ui, id| ui.remove_widget(id))));
        h.host.set_cursor(150.0, 120.0);
        h.idle();
        h.mouse();
        h.idle();

        assert!(!h.ui.tree().contains(a));
        assert_eq!(h.ui.hovered(), None);
        h.idle();
    }

    #[test]
    fn test_removed_widget_cannot_capture_or_focus() {
        let mut h = Harness::new();
        let live = h.widget("live", button_rect());
        let gone = h.ui.add_widget(h.ui.root(), Rect::new(0.0, 0.0, 50.0, 50.0));
        h.ui.create_interactable(gone);
        h.ui.remove_widget(gone);

        h.ui.set_binding(Some(gone));
        assert!(!h.ui.is_binding());
        h.ui.set_input_focus(Some(gone));
        assert!(h.ui.is_input_focus(None));
        assert!(h.host.cursor_visible());

        // Dispatch keeps working over the live widget
        h.host.set_cursor(150.0, 120.0);
        h.idle();
        h.idle();
        assert_eq!(h.ui.hovered(), Some(live));
        h.mouse();
        h.idle();
        assert!(h.take_log().contains(&"click:live".to_string()));
    }
}
