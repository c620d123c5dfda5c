//! Folds keyboard navigation into the synthetic pad.
//!
//! Arrow keys hold a stick direction and ENTER holds the A button. Every tick
//! the held state is merged over the raw controller sample, and the held
//! direction (keyboard or stick) drives a repeat timer that emits one cursor
//! step on the first tick of a new direction and then at a fixed rate.

use std::time::{Duration, Instant};

use crate::config::InteractionConfig;

use super::{Direction, Pad, PadButtons, Scancode};

/// Result of one merge tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PadUpdate {
    /// Raw pad with keyboard state merged in.
    pub pad: Pad,
    /// Direction of a repeat step that fired this tick, if any.
    pub step: Option<Direction>,
}

#[derive(Debug, Default)]
struct RepeatTimer {
    last: Option<Direction>,
    deadline: Option<Instant>,
}

impl RepeatTimer {
    fn tick(
        &mut self,
        direction: Option<Direction>,
        now: Instant,
        initial_delay: Duration,
        interval: Duration,
    ) -> bool {
        let fire = match direction {
            None => false,
            Some(d) if self.last != Some(d) => {
                self.deadline = Some(now + initial_delay);
                true
            }
            Some(_) => match self.deadline {
                Some(deadline) if now > deadline => {
                    self.deadline = Some(now + interval);
                    true
                }
                _ => false,
            },
        };
        self.last = direction;
        fire
    }
}

#[derive(Debug)]
pub struct PadMerger {
    held_direction: Option<Direction>,
    held_buttons: PadButtons,
    repeat: RepeatTimer,
    stick_magnitude: i8,
    initial_delay: Duration,
    repeat_interval: Duration,
}

impl PadMerger {
    pub fn new(config: &InteractionConfig) -> Self {
        Self {
            held_direction: None,
            held_buttons: PadButtons::empty(),
            repeat: RepeatTimer::default(),
            stick_magnitude: config.stick_magnitude.clamp(1, i8::MAX),
            initial_delay: config.initial_repeat_delay(),
            repeat_interval: config.repeat_interval(),
        }
    }

    pub fn held_direction(&self) -> Option<Direction> {
        self.held_direction
    }

    pub fn held_buttons(&self) -> PadButtons {
        self.held_buttons
    }

    /// Record a navigation key press. Returns true for keys the pad uses.
    pub fn press(&mut self, code: Scancode) -> bool {
        if let Some(direction) = code.direction() {
            self.held_direction = Some(direction);
            return true;
        }
        if code == Scancode::ENTER {
            self.held_buttons |= PadButtons::A;
            return true;
        }
        false
    }

    /// Record a navigation key release.
    ///
    /// An arrow only clears the held direction if it is the one being held,
    /// so a late key-up never cancels a newer key-down. Returns the
    /// direction that was released.
    pub fn release(&mut self, code: Scancode) -> Option<Direction> {
        if code == Scancode::ENTER {
            self.held_buttons.remove(PadButtons::A);
            return None;
        }
        let direction = code.direction()?;
        if self.held_direction == Some(direction) {
            self.held_direction = None;
            Some(direction)
        } else {
            None
        }
    }

    /// Forget all held keys.
    pub fn release_all(&mut self) {
        self.held_direction = None;
        self.held_buttons = PadButtons::empty();
    }

    /// Merge held keys over the raw sample and advance the repeat timer.
    pub fn update(&mut self, raw: Pad, now: Instant) -> PadUpdate {
        let mut pad = raw;
        pad.buttons |= self.held_buttons;

        let direction = match self.held_direction {
            Some(held) => {
                (pad.stick_x, pad.stick_y) = held.stick(self.stick_magnitude);
                Some(held)
            }
            // Stick deflection only drives the repeat timer, it is not rewritten
            None => Direction::from_stick(raw.stick_x, raw.stick_y),
        };

        let fired = self
            .repeat
            .tick(direction, now, self.initial_delay, self.repeat_interval);
        if fired {
            log::trace!("pad repeat step {:?}", direction);
        }

        PadUpdate {
            pad,
            step: direction.filter(|_| fired),
        }
    }
}
