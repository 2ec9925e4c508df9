//! Keyboard bindings.
//!
//! Physical keys are translated to [`GameKey`]s before reaching the game
//! state. Keys without a binding translate to `None` and are ignored.

use bevy::input::keyboard::KeyCode;

/// A game action bound to one or more keys.
///
/// Variant order is the order in which simultaneous presses are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GameKey {
    /// Close the window immediately (`Q`).
    Quit,
    /// Toggle pause (`P`).
    Pause,
    /// Move up (`I` or `ArrowUp`).
    Up,
    /// Move down (`K` or `ArrowDown`).
    Down,
    /// Move left (`J` or `ArrowLeft`).
    Left,
    /// Move right (`L` or `ArrowRight`).
    Right,
}

impl GameKey {
    /// Maps a physical key to its action, if it has one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bevy::input::keyboard::KeyCode;
    /// use sky_shooter::input::GameKey;
    ///
    /// assert_eq!(GameKey::from_key_code(KeyCode::KeyI), Some(GameKey::Up));
    /// assert_eq!(GameKey::from_key_code(KeyCode::Space), None);
    /// ```
    #[must_use]
    pub const fn from_key_code(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::KeyQ => Some(Self::Quit),
            KeyCode::KeyP => Some(Self::Pause),
            KeyCode::KeyI | KeyCode::ArrowUp => Some(Self::Up),
            KeyCode::KeyK | KeyCode::ArrowDown => Some(Self::Down),
            KeyCode::KeyJ | KeyCode::ArrowLeft => Some(Self::Left),
            KeyCode::KeyL | KeyCode::ArrowRight => Some(Self::Right),
            _ => None,
        }
    }
}

/// What the window should do after a key press was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    /// Keep running.
    Continue,
    /// Close the window.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::KeyQ, Some(GameKey::Quit))]
    #[case(KeyCode::KeyP, Some(GameKey::Pause))]
    #[case(KeyCode::KeyI, Some(GameKey::Up))]
    #[case(KeyCode::ArrowUp, Some(GameKey::Up))]
    #[case(KeyCode::KeyK, Some(GameKey::Down))]
    #[case(KeyCode::ArrowDown, Some(GameKey::Down))]
    #[case(KeyCode::KeyJ, Some(GameKey::Left))]
    #[case(KeyCode::ArrowLeft, Some(GameKey::Left))]
    #[case(KeyCode::KeyL, Some(GameKey::Right))]
    #[case(KeyCode::ArrowRight, Some(GameKey::Right))]
    #[case(KeyCode::KeyW, None)]
    #[case(KeyCode::Escape, None)]
    fn key_bindings(#[case] key: KeyCode, #[case] expected: Option<GameKey>) {
        assert_eq!(GameKey::from_key_code(key), expected);
    }

    #[test]
    fn opposite_directions_order_after_their_partners() {
        assert!(GameKey::Up < GameKey::Down);
        assert!(GameKey::Left < GameKey::Right);
        assert!(GameKey::Quit < GameKey::Up);
    }
}
