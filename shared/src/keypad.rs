//! Virtual keycode table for the on-screen button surrogates.
//!
//! The engine polls keyboard events, so touch controls inject synthetic
//! key-down/key-up events carrying these legacy `keyCode` values.

use serde::{Deserialize, Serialize};

/// On-screen controller buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    Select,
    Start,
    A,
    B,
    Left,
    Right,
    Up,
    Down,
}

impl Button {
    /// Every button, in the order the page lays out its controls.
    pub const ALL: [Button; 8] = [
        Button::Select,
        Button::Start,
        Button::A,
        Button::B,
        Button::Left,
        Button::Right,
        Button::Up,
        Button::Down,
    ];

    /// Keycode the engine binds this button to (Backspace, Enter, X, Z, arrows).
    pub const fn keycode(self) -> u32 {
        match self {
            Button::Select => 8,
            Button::Start => 13,
            Button::A => 88,
            Button::B => 90,
            Button::Left => 37,
            Button::Right => 39,
            Button::Up => 38,
            Button::Down => 40,
        }
    }

    /// Control id stem used by the page (`left` for `left-btn`).
    pub const fn id(self) -> &'static str {
        match self {
            Button::Select => "select",
            Button::Start => "start",
            Button::A => "a",
            Button::B => "b",
            Button::Left => "left",
            Button::Right => "right",
            Button::Up => "up",
            Button::Down => "down",
        }
    }

    /// Parse a control id stem, with or without the `-btn` suffix.
    pub fn from_id(id: &str) -> Option<Self> {
        let stem = id.strip_suffix("-btn").unwrap_or(id);
        Self::ALL.into_iter().find(|b| b.id() == stem)
    }
}

/// Direction of a synthetic key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEventKind {
    KeyDown,
    KeyUp,
}

impl KeyEventKind {
    /// DOM event type name.
    pub const fn event_type(self) -> &'static str {
        match self {
            KeyEventKind::KeyDown => "keydown",
            KeyEventKind::KeyUp => "keyup",
        }
    }
}

/// A synthetic keyboard event to dispatch on the page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub kind: KeyEventKind,
    /// Used for both `keyCode` and `charCode`.
    pub code: u32,
}

impl KeyEvent {
    pub fn down(button: Button) -> Self {
        Self {
            kind: KeyEventKind::KeyDown,
            code: button.keycode(),
        }
    }

    pub fn up(button: Button) -> Self {
        Self {
            kind: KeyEventKind::KeyUp,
            code: button.keycode(),
        }
    }
}
