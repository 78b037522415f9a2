use crate::camera::Camera;
use crate::error::RenderError;
use crate::geometry::Geometry;
use crate::material::Material;
use crate::scene::SceneGraph;

/// Opaque id of geometry and material uploaded to a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(u64);

impl MeshHandle {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Largest texture side every wgpu device accepts (`wgpu::Limits::default()`)
pub const DEFAULT_MAX_TEXTURE_DIMENSION: u32 = 8192;

/// Reject a material whose map exceeds `max_dimension` on either side
pub fn check_texture_size(material: &Material, max_dimension: u32) -> Result<(), RenderError> {
    match &material.map {
        Some(map) if !map.fits_within(max_dimension) => Err(RenderError::TextureTooLarge {
            width: map.width,
            height: map.height,
            max: max_dimension,
        }),
        _ => Ok(()),
    }
}

/// Drawing backend shared by all scenes
pub trait Renderer {
    /// Drawable size in physical pixels
    fn size(&self) -> (u32, u32);

    /// Width over height, 1.0 for a degenerate size
    fn aspect(&self) -> f32 {
        let (width, height) = self.size();
        if width == 0 || height == 0 {
            1.0
        } else {
            width as f32 / height as f32
        }
    }

    fn set_size(&mut self, width: u32, height: u32);

    /// Largest width or height accepted for a material map
    fn max_texture_dimension(&self) -> u32;

    /// Upload geometry and material; the caller owns the handle until released
    ///
    /// Fails without allocating anything when the map is too large.
    fn upload_mesh(
        &mut self,
        geometry: &Geometry,
        material: &Material,
    ) -> Result<MeshHandle, RenderError>;

    /// Free GPU resources behind a handle. Unknown handles are ignored.
    fn release_mesh(&mut self, handle: MeshHandle);

    /// Draw one frame of a scene graph through a camera
    fn render(&mut self, graph: &SceneGraph, camera: &Camera) -> Result<(), RenderError>;

    /// Present a cleared frame for a step where no scene can draw
    fn present_empty(&mut self) -> Result<(), RenderError>;

    /// Global fade factor in [0, 1] multiplied into the final color
    fn set_opacity(&mut self, opacity: f32);
}
