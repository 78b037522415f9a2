use crate::math::Color;
use crate::traits::MeshHandle;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Light source in a scene graph
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Ambient {
        color: Color,
        intensity: f32,
    },
    /// Parallel light shining from `position` towards the origin
    Directional {
        color: Color,
        intensity: f32,
        position: Vec3,
    },
}

impl Light {
    pub fn ambient(hex: u32) -> Self {
        Self::Ambient {
            color: Color::from_hex(hex),
            intensity: 1.0,
        }
    }

    pub fn directional(hex: u32, intensity: f32, position: Vec3) -> Self {
        Self::Directional {
            color: Color::from_hex(hex),
            intensity,
            position,
        }
    }
}

/// Position, XYZ euler rotation (radians) and scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

/// Uploaded mesh placed in the world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshNode {
    pub handle: MeshHandle,
    pub transform: Transform,
}

/// Flat container of lights and meshes owned by a single scene
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    lights: Vec<Light>,
    meshes: Vec<MeshNode>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn add_mesh(&mut self, handle: MeshHandle, transform: Transform) {
        self.meshes.push(MeshNode { handle, transform });
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn meshes(&self) -> &[MeshNode] {
        &self.meshes
    }

    pub fn node(&self, handle: MeshHandle) -> Option<&MeshNode> {
        self.meshes.iter().find(|node| node.handle == handle)
    }

    pub fn node_mut(&mut self, handle: MeshHandle) -> Option<&mut MeshNode> {
        self.meshes.iter_mut().find(|node| node.handle == handle)
    }

    /// Sum of all ambient contributions
    pub fn ambient(&self) -> Color {
        self.lights
            .iter()
            .filter_map(|light| match *light {
                Light::Ambient { color, intensity } => Some(color.scaled(intensity)),
                Light::Directional { .. } => None,
            })
            .fold(Color::BLACK, |acc, c| Color::rgb(acc.r + c.r, acc.g + c.g, acc.b + c.b))
    }

    /// First directional light, as (direction towards the light, radiance)
    pub fn key_light(&self) -> Option<(Vec3, Color)> {
        self.lights.iter().find_map(|light| match *light {
            Light::Directional {
                color,
                intensity,
                position,
            } => Some((position.normalize_or_zero(), color.scaled(intensity))),
            Light::Ambient { .. } => None,
        })
    }

    pub fn clear(&mut self) {
        self.lights.clear();
        self.meshes.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty() && self.meshes.is_empty()
    }
}
