use glam::{Mat4, Vec3};

/// Projection model of a camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Box projection; `frustum_size` is the visible height in world units
    Orthographic {
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
        near: f32,
        far: f32,
        frustum_size: f32,
    },
    /// Pinhole projection; `fov` is the vertical field of view in degrees
    Perspective {
        fov: f32,
        aspect: f32,
        near: f32,
        far: f32,
    },
}

impl Projection {
    pub fn orthographic(frustum_size: f32, aspect: f32, near: f32, far: f32) -> Self {
        let half_height = frustum_size / 2.0;
        let half_width = half_height * aspect;
        Self::Orthographic {
            left: -half_width,
            right: half_width,
            top: half_height,
            bottom: -half_height,
            near,
            far,
            frustum_size,
        }
    }

    pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self::Perspective {
            fov,
            aspect,
            near,
            far,
        }
    }

    /// Recompute the projection for a new viewport aspect ratio
    pub fn reproject(&mut self, aspect: f32) {
        match self {
            Self::Orthographic {
                left,
                right,
                top,
                bottom,
                frustum_size,
                ..
            } => {
                let half_height = *frustum_size / 2.0;
                *left = -half_height * aspect;
                *right = half_height * aspect;
                *top = half_height;
                *bottom = -half_height;
            }
            Self::Perspective { aspect: current, .. } => *current = aspect,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        match *self {
            Self::Orthographic {
                left,
                right,
                top,
                bottom,
                near,
                far,
                ..
            } => Mat4::orthographic_rh(left, right, bottom, top, near, far),
            Self::Perspective {
                fov,
                aspect,
                near,
                far,
            } => Mat4::perspective_rh(fov.to_radians(), aspect, near, far),
        }
    }
}

/// Positioned camera looking at a target point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub projection: Projection,
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Camera {
    pub fn new(projection: Projection) -> Self {
        Self {
            projection,
            position: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
        }
    }

    pub fn orthographic(frustum_size: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self::new(Projection::orthographic(frustum_size, aspect, near, far))
    }

    pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self::new(Projection::perspective(fov, aspect, near, far))
    }

    /// Move the camera, keeping its viewing direction
    pub fn at(mut self, position: Vec3) -> Self {
        let direction = self.target - self.position;
        self.position = position;
        self.target = position + direction;
        self
    }

    pub fn looking_at(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    pub fn with_up(mut self, up: Vec3) -> Self {
        self.up = up;
        self
    }

    pub fn reproject(&mut self, aspect: f32) {
        self.projection.reproject(aspect);
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection(&self) -> Mat4 {
        self.projection.matrix()
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}
