//! Raw input types and the synthetic pad merger.

pub mod keyboard;
pub mod merger;
pub mod pad;

use std::time::Instant;

pub use keyboard::Scancode;
pub use merger::{PadMerger, PadUpdate};
pub use pad::{Direction, MouseButtons, Pad, PadButtons};

/// Everything the dispatcher reads from the input backends in one tick.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    /// Raw controller sample for this tick.
    pub pad: Pad,
    /// Raw mouse button state for this tick.
    pub mouse_buttons: MouseButtons,
    /// Frame timestamp driving the directional repeat timer.
    pub now: Instant,
}

impl FrameInput {
    pub fn new(pad: Pad, mouse_buttons: MouseButtons, now: Instant) -> Self {
        Self {
            pad,
            mouse_buttons,
            now,
        }
    }

    /// A tick with no buttons held and the stick centered.
    pub fn idle(now: Instant) -> Self {
        Self::new(Pad::default(), MouseButtons::empty(), now)
    }
}
