use log::{error, info};
use winit::event_loop::ActiveEventLoop;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::Game;
use crate::loaders::FileAssetLoader;
use crate::renderer::GpuRenderer;
use crate::window::Window;

/// Shown when the machine has no usable GPU
pub const GRAPHICS_FALLBACK_MESSAGE: &str =
    "This demo needs a GPU with Vulkan, Metal, DirectX 12 or WebGPU support, and none was found.";

/// Open the window, bring up the GPU and install the starting scene
pub fn start(
    event_loop: &ActiveEventLoop,
    config: &GameConfig,
) -> Result<(Window, Game<GpuRenderer>), GameError> {
    let window = Window::open(event_loop, config)?;

    let renderer = match pollster::block_on(GpuRenderer::new(window.inner().clone())) {
        Ok(renderer) => renderer,
        Err(err @ GameError::GraphicsUnavailable(_)) => {
            error!("{GRAPHICS_FALLBACK_MESSAGE}");
            eprintln!("{GRAPHICS_FALLBACK_MESSAGE}");
            return Err(err);
        }
        Err(err) => return Err(err),
    };

    let game = Game::new(renderer, Box::new(FileAssetLoader::default()), config);
    info!("started with {} scene", config.start_scene);
    Ok((window, game))
}
