//! Render output buffer and its 8-bit export.

use std::path::Path;

use glint_core::Color;
use image::{ImageFormat, ImageResult, Rgb, RgbImage};

/// Row-major grid of unclamped colors, row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::ZERO)
    }

    /// Create a new image buffer filled with `color`.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// All pixels of row `y`, left to right.
    pub fn row(&self, y: u32) -> &[Color] {
        let start = self.index(0, y);
        &self.pixels[start..start + self.width as usize]
    }

    /// Convert to an 8-bit RGB image, clamping every channel to [0, 1].
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| Rgb(color_to_rgb8(self.get(x, y))))
    }

    /// Write the image as a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        let path = path.as_ref();
        self.to_rgb_image().save_with_format(path, ImageFormat::Png)?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

/// Convert a color to 8-bit RGB. Out-of-range channels are clamped; NaN maps to 0.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let channel = |c: f32| (255.0 * c.clamp(0.0, 1.0)) as u8;
    [channel(color.x), channel(color.y), channel(color.z)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_indexing() {
        let mut image = ImageBuffer::new(4, 3);
        assert_eq!(image.pixels.len(), 12);

        image.set(3, 1, Color::ONE);
        assert_eq!(image.get(3, 1), Color::ONE);
        assert_eq!(image.pixels[7], Color::ONE);
        assert_eq!(image.row(1)[3], Color::ONE);
        assert_eq!(image.row(1).len(), 4);
        assert_eq!(image.get(0, 2), Color::ZERO);
    }

    #[test]
    fn test_color_to_rgb8_clamps() {
        assert_eq!(color_to_rgb8(Color::new(0.0, 0.5, 1.0)), [0, 127, 255]);
        assert_eq!(color_to_rgb8(Color::new(-1.0, 1.5, f32::NAN)), [0, 255, 0]);
    }

    #[test]
    fn test_to_rgb_image() {
        let mut image = ImageBuffer::filled(2, 2, Color::new(2.0, 0.0, 0.0));
        image.set(1, 0, Color::new(0.0, 0.0, 1.0));

        let rgb = image.to_rgb_image();
        assert_eq!(rgb.dimensions(), (2, 2));
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([255, 0, 0]));
        assert_eq!(rgb.get_pixel(1, 0), &Rgb([0, 0, 255]));
    }

    #[test]
    fn test_save_png() {
        let image = ImageBuffer::filled(3, 2, Color::new(0.0, 1.0, 0.0));
        let path = std::env::temp_dir().join(format!("glint_save_png_{}.png", std::process::id()));

        image.save_png(&path).unwrap();
        let loaded = image::open(&path).unwrap().to_rgb8();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(loaded.get_pixel(2, 1), &Rgb([0, 255, 0]));
    }
}
