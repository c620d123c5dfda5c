use std::time::{Duration, Instant};

use djui_interact::prelude::*;

/// Host that keeps a cursor in pixels and logs everything else.
struct ConsoleHost {
    cursor: (f32, f32),
    step: f32,
}

impl Host for ConsoleHost {
    fn cursor_position(&self) -> (f32, f32) {
        self.cursor
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        log::info!("cursor visible: {visible}");
    }

    fn move_cursor(&mut self, dx: i32, dy: i32) {
        self.cursor.0 += dx as f32 * self.step;
        self.cursor.1 += dy as f32 * self.step;
        log::info!("cursor -> {:?}", self.cursor);
    }

    fn panel_back(&mut self) {
        log::info!("panel back");
    }

    fn add_panel(&mut self, _caller: Option<WidgetId>, panel: WidgetId, default: Option<WidgetId>) {
        log::info!("panel {:?} pushed, default {:?}", panel, default);
    }

    fn open_panel(&mut self, kind: PanelKind) {
        log::info!("open {:?} panel", kind);
    }

    fn play_sound(&mut self, cue: SoundCue) {
        log::debug!("sound {:?}", cue);
    }
}

fn main() {
    env_logger::init();

    let config = InteractionConfig::load_or_default("djui.toml");
    let host = ConsoleHost {
        cursor: (460.0, 220.0),
        step: 80.0,
    };
    let mut ui = Ui::with_config(host, Rect::new(0.0, 0.0, 1280.0, 720.0), config);
    create_options_panel(&mut ui, None);

    let mut now = Instant::now();
    let mut tick = |ui: &mut Ui, pad: Pad, mouse: MouseButtons| {
        now += Duration::from_millis(16);
        ui.update(FrameInput::new(pad, mouse, now));
    };

    // Hover "Camera", walk down to "Display" with the keyboard, press ENTER
    tick(&mut ui, Pad::default(), MouseButtons::empty());
    for _ in 0..2 {
        ui.on_key_down(Scancode::DOWN);
        tick(&mut ui, Pad::default(), MouseButtons::empty());
        ui.on_key_up(Scancode::DOWN);
        tick(&mut ui, Pad::default(), MouseButtons::empty());
    }
    ui.on_key_down(Scancode::ENTER);
    tick(&mut ui, Pad::default(), MouseButtons::empty());
    ui.on_key_up(Scancode::ENTER);
    tick(&mut ui, Pad::default(), MouseButtons::empty());

    // B backs out of the panel
    tick(&mut ui, Pad::with_buttons(PadButtons::B), MouseButtons::empty());
    tick(&mut ui, Pad::default(), MouseButtons::empty());
}
