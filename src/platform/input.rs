//! Abstract input actions and the per-tick action queue
//!
//! Device listeners (keyboard, mouse, touch) push actions whenever they fire;
//! the tick driver drains the queue once per tick, so every action takes
//! effect atomically at a tick boundary.

use glam::Vec2;

/// What the player did, independent of the device
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Tap/click at a point in logical game coordinates
    ActivateAt(Vec2),
    /// Lift pressed (edge-triggered: one per key-down/touch-start)
    LiftStart,
    /// Lift released
    LiftEnd,
}

/// Convert a device position to logical game coordinates.
///
/// `offset` is the position relative to the canvas' top-left corner in device
/// pixels; `displayed` is the canvas' on-screen size and `logical` its
/// drawing-buffer size.
pub fn to_logical(offset: Vec2, displayed: Vec2, logical: Vec2) -> Vec2 {
    if displayed.x <= 0.0 || displayed.y <= 0.0 {
        return offset;
    }
    offset * (logical / displayed)
}

/// FIFO of actions waiting for the next tick
#[derive(Debug, Clone, Default)]
pub struct ActionQueue {
    pending: Vec<Action>,
    /// Lift currently held, to drop auto-repeat key-downs
    lift_held: bool,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key-down style lift: ignored while the lift is already held, so OS key
    /// auto-repeat does not turn into a stream of lifts
    pub fn press_lift(&mut self) {
        if !self.lift_held {
            self.lift_held = true;
            self.pending.push(Action::LiftStart);
        }
    }

    pub fn release_lift(&mut self) {
        self.lift_held = false;
        self.pending.push(Action::LiftEnd);
    }

    /// Pointer press at a logical position
    pub fn activate_at(&mut self, pos: Vec2) {
        self.pending.push(Action::ActivateAt(pos));
    }

    /// Take everything queued since the last tick, in arrival order
    pub fn drain(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
