pub mod assets;
pub mod controller;
pub mod renderer;
pub mod scene;
pub mod window;

pub use assets::*;
pub use controller::*;
pub use renderer::*;
pub use scene::*;
pub use window::*;
