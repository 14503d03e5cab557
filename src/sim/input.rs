//! Keyboard state tracking
//!
//! The front end forwards raw key-down/key-up events by name; the tracker
//! keeps one pressed flag per physical key and unions the WASD/arrow pairs
//! into a per-tick snapshot. No debouncing: OS key-repeat passes straight
//! through as repeated key-down events, which are harmless overwrites.

use serde::{Deserialize, Serialize};

/// Movement keys the game recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

/// Number of tracked keys; discriminants index into the pressed array
const KEY_COUNT: usize = 8;

impl KeyCode {
    /// Map a DOM-style logical key name; unknown keys are ignored upstream
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "w" => Some(KeyCode::W),
            "a" => Some(KeyCode::A),
            "s" => Some(KeyCode::S),
            "d" => Some(KeyCode::D),
            "ArrowUp" => Some(KeyCode::ArrowUp),
            "ArrowDown" => Some(KeyCode::ArrowDown),
            "ArrowLeft" => Some(KeyCode::ArrowLeft),
            "ArrowRight" => Some(KeyCode::ArrowRight),
            _ => None,
        }
    }
}

/// Direction flags read once per movement tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputSnapshot {
    /// True if no direction is held
    #[inline]
    pub fn is_idle(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }
}

/// Pressed/released state of the movement keys
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    pressed: [bool; KEY_COUNT],
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: KeyCode) {
        self.pressed[key as usize] = true;
    }

    pub fn key_up(&mut self, key: KeyCode) {
        self.pressed[key as usize] = false;
    }

    #[inline]
    fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed[key as usize]
    }

    /// Union the two physical keys of each direction
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            up: self.is_pressed(KeyCode::W) || self.is_pressed(KeyCode::ArrowUp),
            down: self.is_pressed(KeyCode::S) || self.is_pressed(KeyCode::ArrowDown),
            left: self.is_pressed(KeyCode::A) || self.is_pressed(KeyCode::ArrowLeft),
            right: self.is_pressed(KeyCode::D) || self.is_pressed(KeyCode::ArrowRight),
        }
    }

    /// Release every key (game stop)
    pub fn clear(&mut self) {
        self.pressed = [false; KEY_COUNT];
    }
}
