use glam::Vec3;
use log::{debug, warn};
use std::task::Poll;

use crate::camera::Camera;
use crate::config::SceneSettings;
use crate::core::keys;
use crate::error::{RenderError, SceneError};
use crate::geometry::Geometry;
use crate::material::Material;
use crate::math::Color;
use crate::scene::{Light, SceneGraph, Transform};
use crate::traits::{MeshHandle, Renderer, Scene, SceneContext};

use super::SceneKind;

const CUBE_COLOR: u32 = 0x00ff00;
const AMBIENT_COLOR: u32 = 0x404040;

/// Spinning green cube under an orthographic top-down camera
///
/// Arrow keys or WASD slide the cube across the XZ plane, Enter asks for
/// the sphere scene.
pub struct CubeScene {
    frustum_size: f32,
    move_speed: f32,
    graph: SceneGraph,
    camera: Option<Camera>,
    cube: Option<MeshHandle>,
    switch_requested: bool,
}

impl CubeScene {
    pub fn new(settings: &SceneSettings) -> Self {
        Self {
            frustum_size: settings.frustum_size,
            move_speed: settings.cube_move_speed,
            graph: SceneGraph::new(),
            camera: None,
            cube: None,
            switch_requested: false,
        }
    }

    /// Transform of the cube, once initialized
    pub fn cube_transform(&self) -> Option<Transform> {
        self.graph.node(self.cube?).map(|node| node.transform)
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    fn init_lights(&mut self) {
        self.graph
            .add_light(Light::directional(0xffffff, 1.0, Vec3::new(5.0, 10.0, 5.0)));
        self.graph.add_light(Light::ambient(AMBIENT_COLOR));
    }

    fn init_objects(&mut self, renderer: &mut dyn Renderer) -> Result<(), RenderError> {
        let geometry = Geometry::cuboid(1.0, 1.0, 1.0);
        let material = Material::standard(Color::from_hex(CUBE_COLOR))
            .with_roughness(0.5)
            .with_metalness(0.5);

        let handle = renderer.upload_mesh(&geometry, &material)?;
        self.graph.add_mesh(handle, Transform::default());
        self.cube = Some(handle);
        Ok(())
    }

    fn init_camera(&mut self, aspect: f32) {
        let camera = Camera::orthographic(self.frustum_size, aspect, 0.1, 1000.0)
            .at(Vec3::new(0.0, 10.0, 0.0))
            .looking_at(Vec3::ZERO)
            .with_up(Vec3::NEG_Z);
        self.camera = Some(camera);
    }
}

/// Unit direction on the XZ plane from held movement keys; screen up is -Z
fn movement(ctx: &SceneContext) -> Vec3 {
    let input = ctx.input;
    let mut direction = Vec3::ZERO;

    if input.any_pressed(&[keys::ARROW_UP, "w"]) {
        direction.z -= 1.0;
    }
    if input.any_pressed(&[keys::ARROW_DOWN, "s"]) {
        direction.z += 1.0;
    }
    if input.any_pressed(&[keys::ARROW_LEFT, "a"]) {
        direction.x -= 1.0;
    }
    if input.any_pressed(&[keys::ARROW_RIGHT, "d"]) {
        direction.x += 1.0;
    }

    direction.normalize_or_zero()
}

impl Scene for CubeScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Cube
    }

    fn init(&mut self, ctx: &mut SceneContext) -> Poll<Result<(), SceneError>> {
        if self.is_initialized() {
            warn!("cube scene already initialized");
            return Poll::Ready(Ok(()));
        }

        self.init_lights();
        let objects = self.init_objects(ctx.renderer);
        self.init_camera(ctx.renderer.aspect());
        Poll::Ready(objects.map_err(SceneError::from))
    }

    fn update(&mut self, dt: f32, ctx: &mut SceneContext) {
        let Some(handle) = self.cube else {
            return;
        };

        let step = movement(ctx) * self.move_speed * dt;
        if let Some(node) = self.graph.node_mut(handle) {
            node.transform.rotation.x += dt;
            node.transform.rotation.z += dt;
            node.transform.position += step;
        }

        if !self.switch_requested && ctx.input.is_pressed(keys::ENTER) {
            self.switch_requested = true;
            ctx.request_scene(SceneKind::Sphere);
        }
    }

    fn render(&mut self, _dt: f32, renderer: &mut dyn Renderer) -> Result<(), RenderError> {
        match (&self.camera, self.cube) {
            (Some(camera), Some(_)) => renderer.render(&self.graph, camera),
            _ => Ok(()),
        }
    }

    fn dispose(&mut self, renderer: &mut dyn Renderer) {
        if let Some(handle) = self.cube.take() {
            renderer.release_mesh(handle);
            debug!("released cube mesh {}", handle.id());
        }
        self.graph.clear();
        self.camera = None;
    }

    fn camera_mut(&mut self) -> Option<&mut Camera> {
        self.camera.as_mut()
    }

    fn is_initialized(&self) -> bool {
        self.camera.is_some() && self.cube.is_some()
    }
}
