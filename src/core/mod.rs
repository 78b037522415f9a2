pub mod clock;
pub mod headless;
pub mod input;
pub mod input_adapter;
pub mod scene_manager;
pub mod timer;

pub use clock::Clock;
pub use headless::HeadlessRenderer;
pub use input::{keys, InputManager};
pub use scene_manager::{Phase, SceneManager, DEFAULT_FADE_DURATION};
pub use timer::{Countdown, FrameGate};
