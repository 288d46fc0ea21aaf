//! On-screen button surrogates.
//!
//! Pointer-enter presses, pointer-leave releases. Held state is tracked so a
//! pointer sliding between buttons never leaves a key stuck down or sends an
//! unmatched key-up.

use std::collections::HashSet;

use gbweb_shared::{Button, KeyEvent};

#[derive(Debug, Default)]
pub struct Keypad {
    held: HashSet<Button>,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key-down for `button`, unless it is already held.
    pub fn press(&mut self, button: Button) -> Option<KeyEvent> {
        self.held.insert(button).then(|| KeyEvent::down(button))
    }

    /// Key-up for `button`, if it was held.
    pub fn release(&mut self, button: Button) -> Option<KeyEvent> {
        self.held.remove(&button).then(|| KeyEvent::up(button))
    }

    /// Key-ups for every held button, e.g. when the page is hidden mid-press.
    pub fn release_all(&mut self) -> Vec<KeyEvent> {
        let mut held: Vec<Button> = self.held.drain().collect();
        held.sort_by_key(|b| b.keycode());
        held.into_iter().map(KeyEvent::up).collect()
    }

    pub fn is_held(&self, button: Button) -> bool {
        self.held.contains(&button)
    }
}
