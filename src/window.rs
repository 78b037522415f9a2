use std::sync::Arc;
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window as WinitWindow;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::traits::WindowContext;

/// Wrapper around the winit window the game draws into
#[derive(Debug, Clone)]
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    /// Open a window titled and sized from the config
    pub fn open(event_loop: &ActiveEventLoop, config: &GameConfig) -> Result<Self, GameError> {
        let attributes = WinitWindow::default_attributes()
            .with_title(config.title.as_str())
            .with_inner_size(LogicalSize::new(config.width, config.height));

        event_loop
            .create_window(attributes)
            .map(|window| Self::new(Arc::new(window)))
            .map_err(|e| GameError::SurfaceUnavailable(e.to_string()))
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }
}

impl WindowContext for Window {
    fn request_redraw(&self) {
        self.inner.request_redraw();
    }
}
