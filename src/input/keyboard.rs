use serde::{Deserialize, Serialize};

/// Raw keyboard scancode as delivered by the keyboard backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scancode(pub u32);

impl Scancode {
    pub const ESCAPE: Scancode = Scancode(0x01);
    pub const ENTER: Scancode = Scancode(0x1C);
    pub const T: Scancode = Scancode(0x14);
    pub const UP: Scancode = Scancode(0x148);
    pub const LEFT: Scancode = Scancode(0x14B);
    pub const RIGHT: Scancode = Scancode(0x14D);
    pub const DOWN: Scancode = Scancode(0x150);

    /// Direction for arrow keys.
    pub fn direction(self) -> Option<super::Direction> {
        use super::Direction;
        match self {
            Self::UP => Some(Direction::Up),
            Self::DOWN => Some(Direction::Down),
            Self::LEFT => Some(Direction::Left),
            Self::RIGHT => Some(Direction::Right),
            _ => None,
        }
    }
}

impl From<u32> for Scancode {
    fn from(code: u32) -> Self {
        Scancode(code)
    }
}
