pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod geometry;
pub mod loaders;
pub mod material;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod startup;
pub mod traits;
pub mod types;
pub mod window;

pub use config::GameConfig;
pub use game::Game;
pub use scenes::SceneKind;
