use crate::math::Color;
use image::imageops::{self, FilterType};
use image::RgbaImage;
use log::warn;
use std::sync::Arc;

/// Decoded RGBA8 texture, shared between loader and renderer
#[derive(Debug, Clone, PartialEq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub pixels: Arc<[u8]>,
}

impl TextureData {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), Self::byte_len(width, height));
        Self {
            width,
            height,
            pixels: pixels.into(),
        }
    }

    /// Single opaque white texel
    pub fn white() -> Self {
        Self::new(1, 1, vec![255; 4])
    }

    /// Bytes of RGBA8 data for the given size
    pub fn byte_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * 4
    }

    pub fn fits_within(&self, max_dimension: u32) -> bool {
        self.width <= max_dimension && self.height <= max_dimension
    }

    /// Downscale, keeping the aspect ratio, so neither side exceeds `max_dimension`
    ///
    /// Textures that already fit are returned unchanged.
    pub fn fit_within(self, max_dimension: u32) -> Self {
        let max_dimension = max_dimension.max(1);
        if self.fits_within(max_dimension) {
            return self;
        }

        let Some(image) = RgbaImage::from_raw(self.width, self.height, self.pixels.to_vec())
        else {
            warn!("texture buffer does not match {}x{}", self.width, self.height);
            return self;
        };

        let scale = max_dimension as f64 / self.width.max(self.height) as f64;
        let width = ((self.width as f64 * scale).round() as u32).clamp(1, max_dimension);
        let height = ((self.height as f64 * scale).round() as u32).clamp(1, max_dimension);
        warn!(
            "downscaling {}x{} texture to {width}x{height} (device limit {max_dimension})",
            self.width, self.height
        );

        let resized = imageops::resize(&image, width, height, FilterType::Triangle);
        Self::new(width, height, resized.into_raw())
    }
}

/// Physically based surface description
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub color: Color,
    pub roughness: f32,
    pub metalness: f32,
    pub map: Option<TextureData>,
}

impl Material {
    pub fn standard(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness.clamp(0.0, 1.0);
        self
    }

    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness.clamp(0.0, 1.0);
        self
    }

    pub fn with_map(mut self, map: TextureData) -> Self {
        self.map = Some(map);
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            roughness: 1.0,
            metalness: 0.0,
            map: None,
        }
    }
}
