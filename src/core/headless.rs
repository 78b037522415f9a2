use std::collections::HashMap;

use log::trace;

use crate::camera::Camera;
use crate::error::RenderError;
use crate::geometry::Geometry;
use crate::material::Material;
use crate::scene::{MeshNode, SceneGraph};
use crate::traits::{check_texture_size, MeshHandle, Renderer, DEFAULT_MAX_TEXTURE_DIMENSION};

/// Renderer without a GPU - keeps books on what a real backend would hold
///
/// Used for tests and benchmarks, and to run the loop where no adapter exists.
#[derive(Debug, Clone)]
pub struct HeadlessRenderer {
    size: (u32, u32),
    meshes: HashMap<MeshHandle, usize>,
    next_handle: u64,
    uploads: usize,
    releases: usize,
    draw_calls: usize,
    empty_frames: usize,
    opacity: f32,
    max_texture_dimension: u32,
    last_camera: Option<Camera>,
    last_meshes: Vec<MeshNode>,
    last_texture_size: Option<(u32, u32)>,
}

impl HeadlessRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            meshes: HashMap::new(),
            next_handle: 1,
            uploads: 0,
            releases: 0,
            draw_calls: 0,
            empty_frames: 0,
            opacity: 1.0,
            max_texture_dimension: DEFAULT_MAX_TEXTURE_DIMENSION,
            last_camera: None,
            last_meshes: Vec::new(),
            last_texture_size: None,
        }
    }

    /// Emulate a device with a smaller texture limit
    pub fn with_max_texture_dimension(mut self, max: u32) -> Self {
        self.max_texture_dimension = max;
        self
    }

    /// Meshes uploaded and not yet released
    pub fn live_meshes(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_live(&self, handle: MeshHandle) -> bool {
        self.meshes.contains_key(&handle)
    }

    pub fn uploads(&self) -> usize {
        self.uploads
    }

    pub fn releases(&self) -> usize {
        self.releases
    }

    pub fn draw_calls(&self) -> usize {
        self.draw_calls
    }

    /// Cleared frames presented because nothing could draw
    pub fn empty_frames(&self) -> usize {
        self.empty_frames
    }

    /// Every frame presented, drawn or cleared
    pub fn presents(&self) -> usize {
        self.draw_calls + self.empty_frames
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn last_camera(&self) -> Option<&Camera> {
        self.last_camera.as_ref()
    }

    /// Mesh nodes as they were drawn in the latest frame
    pub fn last_meshes(&self) -> &[MeshNode] {
        &self.last_meshes
    }

    /// Size of the most recently uploaded material map
    pub fn last_texture_size(&self) -> Option<(u32, u32)> {
        self.last_texture_size
    }
}

impl Renderer for HeadlessRenderer {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn max_texture_dimension(&self) -> u32 {
        self.max_texture_dimension
    }

    fn upload_mesh(
        &mut self,
        geometry: &Geometry,
        material: &Material,
    ) -> Result<MeshHandle, RenderError> {
        check_texture_size(material, self.max_texture_dimension)?;

        let handle = MeshHandle::new(self.next_handle);
        self.next_handle += 1;
        self.uploads += 1;
        self.meshes.insert(handle, geometry.triangle_count());
        if let Some(map) = &material.map {
            self.last_texture_size = Some((map.width, map.height));
        }
        Ok(handle)
    }

    fn release_mesh(&mut self, handle: MeshHandle) {
        if self.meshes.remove(&handle).is_some() {
            self.releases += 1;
        }
    }

    fn render(&mut self, graph: &SceneGraph, camera: &Camera) -> Result<(), RenderError> {
        let triangles: usize = graph
            .meshes()
            .iter()
            .filter_map(|node| self.meshes.get(&node.handle))
            .sum();
        trace!("headless frame: {} meshes, {triangles} triangles", graph.meshes().len());

        self.draw_calls += 1;
        self.last_camera = Some(*camera);
        self.last_meshes = graph.meshes().to_vec();
        Ok(())
    }

    fn present_empty(&mut self) -> Result<(), RenderError> {
        trace!("headless frame: cleared");
        self.empty_frames += 1;
        Ok(())
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }
}
