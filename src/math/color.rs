/// Linear RGBA color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Build from a packed 0xRRGGBB value
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::rgb(channel(16), channel(8), channel(0))
    }

    /// Multiply RGB by a scalar, keeping alpha
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: self.a,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_green() {
        let c = Color::from_hex(0x00ff00);
        assert!(c.r.abs() < 0.01);
        assert!((c.g - 1.0).abs() < 0.01);
        assert!(c.b.abs() < 0.01);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_from_hex_grey() {
        let c = Color::from_hex(0x404040);
        let expected = 64.0 / 255.0;
        assert!((c.r - expected).abs() < 0.001);
        assert!((c.g - expected).abs() < 0.001);
        assert!((c.b - expected).abs() < 0.001);
    }

    #[test]
    fn test_scaled_keeps_alpha() {
        let c = Color::WHITE.scaled(0.5);
        assert_eq!(c.to_array(), [0.5, 0.5, 0.5, 1.0]);
    }
}
