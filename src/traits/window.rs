/// Host window seen by the game loop
pub trait WindowContext {
    /// Request the window to redraw
    fn request_redraw(&self);
}

/// Host input the game reacts to, decoupled from the windowing library
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    KeyDown(String),
    KeyUp(String),
    Resized { width: u32, height: u32 },
    Focused(bool),
}

impl HostEvent {
    pub fn key_down(key: impl Into<String>) -> Self {
        Self::KeyDown(key.into())
    }

    pub fn key_up(key: impl Into<String>) -> Self {
        Self::KeyUp(key.into())
    }
}
