use std::collections::HashSet;

use crate::traits::KeyState;

/// Key names used by the built-in scenes and shortcuts
pub mod keys {
    pub const ARROW_UP: &str = "ArrowUp";
    pub const ARROW_DOWN: &str = "ArrowDown";
    pub const ARROW_LEFT: &str = "ArrowLeft";
    pub const ARROW_RIGHT: &str = "ArrowRight";
    pub const ENTER: &str = "Enter";
    pub const ESCAPE: &str = "Escape";
    pub const SPACE: &str = " ";
}

/// Set of currently held keys
#[derive(Debug, Clone, Default)]
pub struct InputManager {
    pressed: HashSet<String>,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark key as held; returns true if it was not already held
    pub fn on_key_down(&mut self, key: &str) -> bool {
        if self.pressed.contains(key) {
            false
        } else {
            self.pressed.insert(key.to_owned())
        }
    }

    pub fn on_key_up(&mut self, key: &str) {
        self.pressed.remove(key);
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed.contains(key)
    }

    /// Release everything, e.g. when the window loses focus
    pub fn clear(&mut self) {
        self.pressed.clear();
    }

    pub fn pressed_keys(&self) -> impl Iterator<Item = &str> {
        self.pressed.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pressed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }
}

impl KeyState for InputManager {
    fn is_pressed(&self, key: &str) -> bool {
        InputManager::is_pressed(self, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_manager_empty() {
        let input = InputManager::new();
        assert!(input.is_empty());
        assert!(!input.is_pressed("w"));
    }

    #[test]
    fn test_key_down_reports_fresh_press() {
        let mut input = InputManager::new();
        assert!(input.on_key_down("w"));
        assert!(!input.on_key_down("w"));
        assert_eq!(input.len(), 1);
    }

    #[test]
    fn test_key_up_absent_is_noop() {
        let mut input = InputManager::new();
        input.on_key_up("w");
        assert!(input.is_empty());
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let mut input = InputManager::new();
        input.on_key_down("W");
        assert!(!input.is_pressed("w"));
        assert!(input.is_pressed("W"));
    }

    #[test]
    fn test_key_state_trait_matches() {
        let mut input = InputManager::new();
        input.on_key_down(keys::ARROW_UP);
        let state: &dyn KeyState = &input;
        assert!(state.is_pressed(keys::ARROW_UP));
        assert!(state.any_pressed(&["w", keys::ARROW_UP]));
    }
}
