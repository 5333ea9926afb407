//! Keyboard state to tick input
//!
//! Key callbacks arrive between ticks and only touch `KeyState`; the tick
//! reads it once through `take_input`.

use crate::sim::{Steer, TickInput};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Launch,
}

impl Key {
    /// Map a typed character (a/d, space), case-insensitive
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(Key::Left),
            'd' => Some(Key::Right),
            ' ' => Some(Key::Launch),
            _ => None,
        }
    }
}

/// Last-writer-wins held direction plus a pending launch
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    steer: Steer,
    launch_pending: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steer(&self) -> Steer {
        self.steer
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.steer = Steer::Left,
            Key::Right => self.steer = Steer::Right,
            Key::Launch => self.launch_pending = true,
        }
    }

    /// Releasing a key only stops the paddle if that key set the current
    /// direction, so letting go of one arrow while the other is held keeps
    /// moving.
    pub fn key_up(&mut self, key: Key) {
        match (key, self.steer) {
            (Key::Left, Steer::Left) | (Key::Right, Steer::Right) => self.steer = Steer::Idle,
            _ => {}
        }
    }

    /// Input for the next tick; consumes the pending launch
    pub fn take_input(&mut self) -> TickInput {
        TickInput {
            steer: self.steer,
            launch: std::mem::take(&mut self.launch_pending),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_chars() {
        assert_eq!(Key::from_char('a'), Some(Key::Left));
        assert_eq!(Key::from_char('D'), Some(Key::Right));
        assert_eq!(Key::from_char(' '), Some(Key::Launch));
        assert_eq!(Key::from_char('x'), None);
        assert_eq!(Key::from_char('A'), Some(Key::Left));
    }

    #[test]
    fn test_release_of_other_key_keeps_direction() {
        let mut keys = KeyState::new();
        keys.key_down(Key::Left);
        keys.key_down(Key::Right);
        // Left released late: right is still held
        keys.key_up(Key::Left);
        assert_eq!(keys.steer(), Steer::Right);
        keys.key_up(Key::Right);
        assert_eq!(keys.steer(), Steer::Idle);
    }

    #[test]
    fn test_launch_consumed_once() {
        let mut keys = KeyState::new();
        keys.key_down(Key::Launch);
        assert!(keys.take_input().launch);
        assert!(!keys.take_input().launch);
    }

    #[test]
    fn test_take_input_keeps_steer() {
        let mut keys = KeyState::new();
        keys.key_down(Key::Right);
        assert_eq!(keys.take_input().steer, Steer::Right);
        assert_eq!(keys.take_input().steer, Steer::Right);
    }
}
