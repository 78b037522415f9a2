/// Read-only view of held keys
///
/// Keys use `KeyboardEvent.key` names: "ArrowUp", "Enter", " ", "w".
pub trait KeyState {
    /// Check if key is currently held
    fn is_pressed(&self, key: &str) -> bool;

    /// Check if any of the keys is held
    fn any_pressed(&self, keys: &[&str]) -> bool {
        keys.iter().any(|key| self.is_pressed(key))
    }
}
