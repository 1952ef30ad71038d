//! Keyboard state with edge detection

use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Held keys plus the previous frame's copy.
///
/// An action is edge-triggered when its key is held this frame but was not
/// held on the previous one, so holding a key fires it exactly once.
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<KeyCode>,
    prev: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_key(&mut self, code: KeyCode, pressed: bool) {
        if pressed {
            self.held.insert(code);
        } else {
            self.held.remove(&code);
        }
    }

    pub fn held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }

    pub fn just_pressed(&self, code: KeyCode) -> bool {
        self.held.contains(&code) && !self.prev.contains(&code)
    }

    /// Snapshot held keys; call after the frame's update has run
    pub fn end_frame(&mut self) {
        self.prev = self.held.clone();
    }

    /// Direction from an up/down key pair: -1 = up, 1 = down, 0 otherwise
    pub fn axis(&self, up: KeyCode, down: KeyCode) -> i8 {
        match (self.held(up), self.held(down)) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }
}
