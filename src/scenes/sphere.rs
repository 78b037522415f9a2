use futures::task::noop_waker_ref;
use futures::FutureExt;
use glam::Vec3;
use log::{debug, info, warn};
use std::path::PathBuf;
use std::task::{Context, Poll};

use crate::camera::Camera;
use crate::config::SceneSettings;
use crate::error::{RenderError, SceneError};
use crate::geometry::Geometry;
use crate::material::{Material, TextureData};
use crate::scene::{Light, SceneGraph, Transform};
use crate::traits::{MeshHandle, Renderer, Scene, SceneContext, TextureFuture};

use super::SceneKind;

const SPHERE_SEGMENTS: u32 = 32;

/// Textured sphere turning about Y, seen through a perspective camera
///
/// Init waits for the texture before building anything else. A failed load
/// leaves lights and camera in place but no sphere.
pub struct SphereScene {
    fov: f32,
    texture: PathBuf,
    graph: SceneGraph,
    camera: Option<Camera>,
    sphere: Option<MeshHandle>,
    loading: Option<TextureFuture>,
}

impl SphereScene {
    pub fn new(settings: &SceneSettings) -> Self {
        Self {
            fov: settings.sphere_fov,
            texture: settings.sphere_texture.clone(),
            graph: SceneGraph::new(),
            camera: None,
            sphere: None,
            loading: None,
        }
    }

    pub fn sphere_transform(&self) -> Option<Transform> {
        self.graph.node(self.sphere?).map(|node| node.transform)
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn has_camera(&self) -> bool {
        self.camera.is_some()
    }

    fn init_objects(
        &mut self,
        texture: TextureData,
        renderer: &mut dyn Renderer,
    ) -> Result<(), RenderError> {
        let geometry = Geometry::sphere(1.0, SPHERE_SEGMENTS, SPHERE_SEGMENTS);
        let texture = texture.fit_within(renderer.max_texture_dimension());
        let material = Material::default().with_map(texture);

        let handle = renderer.upload_mesh(&geometry, &material)?;
        self.graph.add_mesh(handle, Transform::default());
        self.sphere = Some(handle);
        Ok(())
    }

    fn init_lights(&mut self) {
        self.graph.add_light(Light::ambient(0xffffff));
        self.graph
            .add_light(Light::directional(0xffffff, 0.5, Vec3::new(5.0, 5.0, 5.0)));
    }

    fn init_camera(&mut self, aspect: f32) {
        let camera = Camera::perspective(self.fov, aspect, 0.1, 1000.0).at(Vec3::new(0.0, 0.0, 5.0));
        self.camera = Some(camera);
    }
}

impl Scene for SphereScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Sphere
    }

    fn init(&mut self, ctx: &mut SceneContext) -> Poll<Result<(), SceneError>> {
        if self.is_initialized() {
            warn!("sphere scene already initialized");
            return Poll::Ready(Ok(()));
        }

        let path = &self.texture;
        let loading = self.loading.get_or_insert_with(|| {
            info!("loading sphere texture {}", path.display());
            ctx.assets.load_texture(path)
        });

        let mut cx = Context::from_waker(noop_waker_ref());
        let loaded = match loading.poll_unpin(&mut cx) {
            Poll::Ready(loaded) => loaded,
            Poll::Pending => return Poll::Pending,
        };
        self.loading = None;

        let result = match loaded {
            Ok(texture) => {
                debug!("sphere texture {}x{} decoded", texture.width, texture.height);
                self.init_objects(texture, ctx.renderer).map_err(SceneError::from)
            }
            Err(err) => Err(SceneError::from(err)),
        };

        self.init_lights();
        self.init_camera(ctx.renderer.aspect());
        Poll::Ready(result)
    }

    fn update(&mut self, dt: f32, _ctx: &mut SceneContext) {
        let Some(handle) = self.sphere else {
            return;
        };

        if let Some(node) = self.graph.node_mut(handle) {
            node.transform.rotation.y += dt;
        }
    }

    fn render(&mut self, _dt: f32, renderer: &mut dyn Renderer) -> Result<(), RenderError> {
        match (&self.camera, self.sphere) {
            (Some(camera), Some(_)) => renderer.render(&self.graph, camera),
            _ => Ok(()),
        }
    }

    fn dispose(&mut self, renderer: &mut dyn Renderer) {
        if let Some(handle) = self.sphere.take() {
            renderer.release_mesh(handle);
            debug!("released sphere mesh {}", handle.id());
        }
        self.loading = None;
        self.graph.clear();
        self.camera = None;
    }

    fn camera_mut(&mut self) -> Option<&mut Camera> {
        self.camera.as_mut()
    }

    fn is_initialized(&self) -> bool {
        self.camera.is_some() && self.sphere.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Projection;
    use crate::core::{HeadlessRenderer, InputManager};
    use crate::error::AssetError;
    use crate::traits::AssetLoader;
    use futures::future;
    use std::path::Path;

    struct ReadyAssets;

    impl AssetLoader for ReadyAssets {
        fn load_texture(&self, _path: &Path) -> TextureFuture {
            future::ready(Ok(TextureData::white())).boxed()
        }
    }

    struct BrokenAssets;

    impl AssetLoader for BrokenAssets {
        fn load_texture(&self, _path: &Path) -> TextureFuture {
            future::ready(Err(AssetError::Canceled)).boxed()
        }
    }

    #[test]
    fn test_init_with_texture() {
        let mut renderer = HeadlessRenderer::new(800, 400);
        let input = InputManager::new();
        let mut ctx = SceneContext::new(&mut renderer, &input, &ReadyAssets);
        let mut scene = SphereScene::new(&SceneSettings::default());

        assert!(matches!(scene.init(&mut ctx), Poll::Ready(Ok(()))));
        assert!(scene.is_initialized());
        assert_eq!(scene.graph().lights().len(), 2);

        let camera = scene.camera_mut().unwrap();
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(camera.projection, Projection::perspective(75.0, 2.0, 0.1, 1000.0));
    }

    #[test]
    fn test_failed_texture_keeps_lights_and_camera() {
        let mut renderer = HeadlessRenderer::new(800, 600);
        let input = InputManager::new();
        let mut ctx = SceneContext::new(&mut renderer, &input, &BrokenAssets);
        let mut scene = SphereScene::new(&SceneSettings::default());

        assert!(matches!(scene.init(&mut ctx), Poll::Ready(Err(SceneError::Asset(_)))));
        assert!(!scene.is_initialized());
        assert!(scene.has_camera());
        assert_eq!(scene.graph().lights().len(), 2);
        assert!(scene.graph().meshes().is_empty());
    }

    struct LargeAssets;

    impl AssetLoader for LargeAssets {
        fn load_texture(&self, _path: &Path) -> TextureFuture {
            let pixels = vec![255; TextureData::byte_len(40, 20)];
            future::ready(Ok(TextureData::new(40, 20, pixels))).boxed()
        }
    }

    #[test]
    fn test_texture_downscaled_to_device_limit() {
        let mut renderer = HeadlessRenderer::new(800, 600).with_max_texture_dimension(10);
        let input = InputManager::new();
        let mut ctx = SceneContext::new(&mut renderer, &input, &LargeAssets);
        let mut scene = SphereScene::new(&SceneSettings::default());

        assert!(matches!(scene.init(&mut ctx), Poll::Ready(Ok(()))));
        assert!(scene.is_initialized());
        assert_eq!(renderer.last_texture_size(), Some((10, 5)));
    }

    #[test]
    fn test_update_spins_about_y() {
        let mut renderer = HeadlessRenderer::new(800, 600);
        let input = InputManager::new();
        let mut ctx = SceneContext::new(&mut renderer, &input, &ReadyAssets);
        let mut scene = SphereScene::new(&SceneSettings::default());
        let _ = scene.init(&mut ctx);

        scene.update(0.25, &mut ctx);
        scene.update(0.25, &mut ctx);

        assert_eq!(scene.sphere_transform().unwrap().rotation, Vec3::new(0.0, 0.5, 0.0));
    }
}
