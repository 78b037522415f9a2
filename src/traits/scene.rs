use super::assets::AssetLoader;
use super::controller::KeyState;
use super::renderer::Renderer;
use crate::camera::Camera;
use crate::error::{RenderError, SceneError};
use crate::scenes::SceneKind;
use std::task::Poll;

/// Collaborators handed to a scene for one lifecycle call
pub struct SceneContext<'a> {
    pub renderer: &'a mut dyn Renderer,
    pub input: &'a dyn KeyState,
    pub assets: &'a dyn AssetLoader,
    requested: Option<SceneKind>,
}

impl<'a> SceneContext<'a> {
    pub fn new(
        renderer: &'a mut dyn Renderer,
        input: &'a dyn KeyState,
        assets: &'a dyn AssetLoader,
    ) -> Self {
        Self {
            renderer,
            input,
            assets,
            requested: None,
        }
    }

    /// Ask the game to switch scenes once the current frame is done
    pub fn request_scene(&mut self, kind: SceneKind) {
        self.requested = Some(kind);
    }

    pub fn take_request(&mut self) -> Option<SceneKind> {
        self.requested.take()
    }
}

/// One self-contained 3D environment
///
/// A scene is inert until `init` completes and inert again after `dispose`.
/// Disposed scenes are never re-initialized.
pub trait Scene {
    fn kind(&self) -> SceneKind;

    /// Build the scene. Polled once per frame until `Ready`.
    fn init(&mut self, ctx: &mut SceneContext) -> Poll<Result<(), SceneError>>;

    /// Advance animation by `dt` seconds. No-op until the primary object exists.
    fn update(&mut self, dt: f32, ctx: &mut SceneContext);

    /// Draw once. No-op until camera and primary object exist.
    fn render(&mut self, dt: f32, renderer: &mut dyn Renderer) -> Result<(), RenderError>;

    /// Release GPU resources and return to the inert state
    fn dispose(&mut self, renderer: &mut dyn Renderer);

    fn camera_mut(&mut self) -> Option<&mut Camera>;

    /// Camera and primary object both present
    fn is_initialized(&self) -> bool;
}
