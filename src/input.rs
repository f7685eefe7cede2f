//! Input source: raw key events to per-tick intents
//!
//! Key handlers only ever write into an [`IntentBuffer`]. The simulation reads
//! the resulting [`Intents`] once per tick and never touches the buffer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A named player action a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    RotateLeft,
    RotateRight,
    Thrust,
    Shoot,
}

/// Turning direction requested for a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    None,
    Left,
    Right,
}

impl Rotation {
    /// Sign of the rotation rate (left is counter-clockwise on screen)
    pub fn sign(self) -> f32 {
        match self {
            Rotation::None => 0.0,
            Rotation::Left => 1.0,
            Rotation::Right => -1.0,
        }
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Intents {
    pub rotation: Rotation,
    pub thrusting: bool,
    /// Shoot key was down at some point since the previous tick
    pub shoot: bool,
}

/// Key code to action mapping
///
/// Codes are free-form strings so any front end can use its own naming; the
/// defaults follow DOM `KeyboardEvent.code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings(BTreeMap<String, Action>);

impl Default for KeyBindings {
    fn default() -> Self {
        let mut map = BTreeMap::new();
        map.insert("ArrowLeft".to_string(), Action::RotateLeft);
        map.insert("ArrowRight".to_string(), Action::RotateRight);
        map.insert("ArrowUp".to_string(), Action::Thrust);
        map.insert("Space".to_string(), Action::Shoot);
        Self(map)
    }
}

impl KeyBindings {
    pub fn action_for(&self, code: &str) -> Option<Action> {
        self.0.get(code).copied()
    }

    pub fn bind(&mut self, code: impl Into<String>, action: Action) {
        self.0.insert(code.into(), action);
    }
}

/// Buffers key state between ticks
#[derive(Debug, Clone, Default)]
pub struct IntentBuffer {
    bindings: KeyBindings,
    left_held: bool,
    right_held: bool,
    /// Most recently pressed of the two turn keys
    last_turn: Rotation,
    thrust_held: bool,
    shoot_held: bool,
    /// Set on press, cleared when a tick consumes it
    shoot_pulse: bool,
}

impl IntentBuffer {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Default::default()
        }
    }

    /// Handle a key press; returns false for unbound keys
    pub fn key_down(&mut self, code: &str) -> bool {
        match self.bindings.action_for(code) {
            Some(action) => {
                self.press(action);
                true
            }
            None => false,
        }
    }

    /// Handle a key release; returns false for unbound keys
    pub fn key_up(&mut self, code: &str) -> bool {
        match self.bindings.action_for(code) {
            Some(action) => {
                self.release(action);
                true
            }
            None => false,
        }
    }

    pub fn press(&mut self, action: Action) {
        match action {
            Action::RotateLeft => {
                self.left_held = true;
                self.last_turn = Rotation::Left;
            }
            Action::RotateRight => {
                self.right_held = true;
                self.last_turn = Rotation::Right;
            }
            Action::Thrust => self.thrust_held = true,
            Action::Shoot => {
                // Auto-repeat presses while held are not new pulses
                if !self.shoot_held {
                    self.shoot_pulse = true;
                }
                self.shoot_held = true;
            }
        }
    }

    pub fn release(&mut self, action: Action) {
        match action {
            Action::RotateLeft => self.left_held = false,
            Action::RotateRight => self.right_held = false,
            Action::Thrust => self.thrust_held = false,
            Action::Shoot => self.shoot_held = false,
        }
    }

    /// Current turn direction: the latest pressed key that is still held
    fn rotation(&self) -> Rotation {
        match (self.left_held, self.right_held) {
            (true, true) => self.last_turn,
            (true, false) => Rotation::Left,
            (false, true) => Rotation::Right,
            (false, false) => Rotation::None,
        }
    }

    /// Intents as they stand, without consuming the shoot pulse
    pub fn peek(&self) -> Intents {
        Intents {
            rotation: self.rotation(),
            thrusting: self.thrust_held,
            shoot: self.shoot_held || self.shoot_pulse,
        }
    }

    /// Intents for the next tick; clears the one-shot shoot pulse
    pub fn take(&mut self) -> Intents {
        let intents = self.peek();
        self.shoot_pulse = false;
        intents
    }

    /// Drop all held keys (e.g. when the window loses focus)
    pub fn clear(&mut self) {
        *self = Self::new(std::mem::take(&mut self.bindings));
    }
}
