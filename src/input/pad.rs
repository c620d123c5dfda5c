use bitflags::bitflags;

bitflags! {
    /// Controller button bits, laid out like the console pad report.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PadButtons: u16 {
        const A       = 0x8000;
        const B       = 0x4000;
        const Z       = 0x2000;
        const START   = 0x1000;
        const D_UP    = 0x0800;
        const D_DOWN  = 0x0400;
        const D_LEFT  = 0x0200;
        const D_RIGHT = 0x0100;
        const L       = 0x0020;
        const R       = 0x0010;
        const C_UP    = 0x0008;
        const C_DOWN  = 0x0004;
        const C_LEFT  = 0x0002;
        const C_RIGHT = 0x0001;
    }
}

bitflags! {
    /// Mouse button bits as reported by the window backend.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MouseButtons: u32 {
        const BUTTON_1 = 1 << 0;
        const BUTTON_2 = 1 << 1;
        const BUTTON_3 = 1 << 2;
        const BUTTON_4 = 1 << 3;
        const BUTTON_5 = 1 << 4;
    }
}

/// One controller sample: buttons plus the analog stick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pad {
    pub buttons: PadButtons,
    pub stick_x: i8,
    pub stick_y: i8,
}

impl Pad {
    pub fn new(buttons: PadButtons, stick_x: i8, stick_y: i8) -> Self {
        Self {
            buttons,
            stick_x,
            stick_y,
        }
    }

    pub fn with_buttons(buttons: PadButtons) -> Self {
        Self {
            buttons,
            ..Self::default()
        }
    }

    pub fn with_stick(stick_x: i8, stick_y: i8) -> Self {
        Self {
            stick_x,
            stick_y,
            ..Self::default()
        }
    }

    /// Buttons held now that were not held in `previous`.
    pub fn pressed_since(&self, previous: &Pad) -> PadButtons {
        self.buttons - previous.buttons
    }
}

/// Cardinal direction of a held arrow key or a deflected stick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Dominant direction of a stick deflection; `None` only at exactly (0, 0).
    pub fn from_stick(stick_x: i8, stick_y: i8) -> Option<Self> {
        if stick_x == 0 && stick_y == 0 {
            return None;
        }
        let (ax, ay) = (i16::from(stick_x).abs(), i16::from(stick_y).abs());
        if ax > ay {
            Some(if stick_x < 0 { Self::Left } else { Self::Right })
        } else {
            Some(if stick_y > 0 { Self::Up } else { Self::Down })
        }
    }

    /// Stick vector written while the direction is held on the keyboard.
    pub fn stick(self, magnitude: i8) -> (i8, i8) {
        match self {
            Self::Up => (0, magnitude.saturating_neg()),
            Self::Down => (0, magnitude),
            Self::Left => (magnitude.saturating_neg(), 0),
            Self::Right => (magnitude, 0),
        }
    }

    /// One-cell cursor step in screen space.
    pub fn cursor_delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}
