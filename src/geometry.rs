use crate::types::Vertex;
use std::f32::consts::PI;

/// CPU-side indexed triangle mesh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Geometry {
    /// Axis-aligned box centered at the origin, one quad per face
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        let (x, y, z) = (width * 0.5, height * 0.5, depth * 0.5);

        #[rustfmt::skip]
        let vertices = vec![
            // +Z
            Vertex::new([-x, -y,  z], [ 0.0,  0.0,  1.0], [0.0, 1.0]),
            Vertex::new([ x, -y,  z], [ 0.0,  0.0,  1.0], [1.0, 1.0]),
            Vertex::new([ x,  y,  z], [ 0.0,  0.0,  1.0], [1.0, 0.0]),
            Vertex::new([-x,  y,  z], [ 0.0,  0.0,  1.0], [0.0, 0.0]),
            // -Z
            Vertex::new([ x, -y, -z], [ 0.0,  0.0, -1.0], [0.0, 1.0]),
            Vertex::new([-x, -y, -z], [ 0.0,  0.0, -1.0], [1.0, 1.0]),
            Vertex::new([-x,  y, -z], [ 0.0,  0.0, -1.0], [1.0, 0.0]),
            Vertex::new([ x,  y, -z], [ 0.0,  0.0, -1.0], [0.0, 0.0]),
            // +Y
            Vertex::new([-x,  y,  z], [ 0.0,  1.0,  0.0], [0.0, 1.0]),
            Vertex::new([ x,  y,  z], [ 0.0,  1.0,  0.0], [1.0, 1.0]),
            Vertex::new([ x,  y, -z], [ 0.0,  1.0,  0.0], [1.0, 0.0]),
            Vertex::new([-x,  y, -z], [ 0.0,  1.0,  0.0], [0.0, 0.0]),
            // -Y
            Vertex::new([-x, -y, -z], [ 0.0, -1.0,  0.0], [0.0, 1.0]),
            Vertex::new([ x, -y, -z], [ 0.0, -1.0,  0.0], [1.0, 1.0]),
            Vertex::new([ x, -y,  z], [ 0.0, -1.0,  0.0], [1.0, 0.0]),
            Vertex::new([-x, -y,  z], [ 0.0, -1.0,  0.0], [0.0, 0.0]),
            // +X
            Vertex::new([ x, -y,  z], [ 1.0,  0.0,  0.0], [0.0, 1.0]),
            Vertex::new([ x, -y, -z], [ 1.0,  0.0,  0.0], [1.0, 1.0]),
            Vertex::new([ x,  y, -z], [ 1.0,  0.0,  0.0], [1.0, 0.0]),
            Vertex::new([ x,  y,  z], [ 1.0,  0.0,  0.0], [0.0, 0.0]),
            // -X
            Vertex::new([-x, -y, -z], [-1.0,  0.0,  0.0], [0.0, 1.0]),
            Vertex::new([-x, -y,  z], [-1.0,  0.0,  0.0], [1.0, 1.0]),
            Vertex::new([-x,  y,  z], [-1.0,  0.0,  0.0], [1.0, 0.0]),
            Vertex::new([-x,  y, -z], [-1.0,  0.0,  0.0], [0.0, 0.0]),
        ];

        let indices = (0..6u32)
            .flat_map(|face| {
                let base = face * 4;
                [base, base + 1, base + 2, base + 2, base + 3, base]
            })
            .collect();

        Self { vertices, indices }
    }

    /// UV sphere centered at the origin
    ///
    /// `width_segments` divides the equator, `height_segments` runs pole to pole.
    /// Both are clamped to the smallest values that still enclose a volume.
    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let segments = width_segments.max(3);
        let rings = height_segments.max(2);

        let mut vertices = Vec::with_capacity(((segments + 1) * (rings + 1)) as usize);
        let mut indices = Vec::with_capacity((segments * rings * 6) as usize);

        for ring in 0..=rings {
            let v = ring as f32 / rings as f32;
            let phi = PI * v;
            let y = phi.cos();
            let ring_radius = phi.sin();

            for seg in 0..=segments {
                let u = seg as f32 / segments as f32;
                let theta = 2.0 * PI * u;
                // Counter-clockwise when seen from outside
                let x = ring_radius * theta.cos();
                let z = -ring_radius * theta.sin();

                vertices.push(Vertex::new(
                    [x * radius, y * radius, z * radius],
                    [x, y, z],
                    [u, v],
                ));
            }
        }

        for ring in 0..rings {
            for seg in 0..segments {
                let current = ring * (segments + 1) + seg;
                let next = current + segments + 1;

                indices.extend_from_slice(&[current, next, current + 1]);
                indices.extend_from_slice(&[current + 1, next, next + 1]);
            }
        }

        Self { vertices, indices }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
