use crate::coords::ContentExtent;
use crate::paint::Color;

use super::ContentError;

/// CPU-side RGBA8 pixels, rows top-first, premultiplied alpha.
///
/// This is what a textured quad uploads once at load time. Width and height
/// are always non-zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl ContentBitmap {
    /// Wraps premultiplied RGBA8 pixels.
    pub fn from_premul_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ContentError> {
        if width == 0 || height == 0 {
            return Err(ContentError::Empty);
        }
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(ContentError::SizeMismatch { expected, actual: pixels.len() });
        }
        Ok(Self { width, height, pixels })
    }

    /// Wraps straight-alpha RGBA8 pixels, premultiplying them in place.
    pub fn from_straight_rgba8(width: u32, height: u32, mut pixels: Vec<u8>) -> Result<Self, ContentError> {
        for px in pixels.chunks_exact_mut(4) {
            let a = px[3] as u16;
            for c in &mut px[..3] {
                *c = ((*c as u16 * a + 127) / 255) as u8;
            }
        }
        Self::from_premul_rgba8(width, height, pixels)
    }

    /// A bitmap filled with one color.
    pub fn solid(width: u32, height: u32, color: Color) -> Result<Self, ContentError> {
        let px = color.to_rgba8();
        let pixels = px.repeat(width as usize * height as usize);
        Self::from_premul_rgba8(width, height, pixels)
    }

    /// A fully transparent bitmap.
    pub(crate) fn transparent(width: u32, height: u32) -> Result<Self, ContentError> {
        Self::from_premul_rgba8(width, height, vec![0; width as usize * height as usize * 4])
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn extent(&self) -> ContentExtent {
        ContentExtent::new(self.width, self.height)
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Bytes per row, as the texture upload expects.
    #[inline]
    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }

    /// Returns the premultiplied pixel at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]])
    }

    /// True if any pixel is not fully opaque.
    pub fn has_translucency(&self) -> bool {
        self.pixels.chunks_exact(4).any(|px| px[3] < 255)
    }

    /// Composites `color` over the pixel at `(x, y)`. Out-of-bounds writes are ignored.
    pub(crate) fn blend_over(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let dst = Color::from_premul_u8([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]);
        self.pixels[i..i + 4].copy_from_slice(&color.over(dst).to_rgba8());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_size() {
        assert_eq!(ContentBitmap::from_premul_rgba8(0, 4, vec![]), Err(ContentError::Empty));
    }

    #[test]
    fn rejects_wrong_length() {
        let err = ContentBitmap::from_premul_rgba8(2, 2, vec![0; 15]).unwrap_err();
        assert_eq!(err, ContentError::SizeMismatch { expected: 16, actual: 15 });
    }

    #[test]
    fn straight_pixels_are_premultiplied() {
        let bmp = ContentBitmap::from_straight_rgba8(1, 1, vec![255, 128, 0, 128]).unwrap();
        assert_eq!(bmp.pixel(0, 0), Some([128, 64, 0, 128]));
    }

    #[test]
    fn solid_fill_and_translucency() {
        let opaque = ContentBitmap::solid(3, 2, Color::WHITE).unwrap();
        assert_eq!(opaque.extent(), ContentExtent::new(3, 2));
        assert_eq!(opaque.pixels().len(), 24);
        assert!(!opaque.has_translucency());

        let clear = ContentBitmap::solid(1, 1, Color::TRANSPARENT).unwrap();
        assert!(clear.has_translucency());
    }

    #[test]
    fn blend_over_accumulates_coverage() {
        let mut bmp = ContentBitmap::transparent(1, 1).unwrap();
        bmp.blend_over(0, 0, Color::WHITE.scaled(0.5));
        assert_eq!(bmp.pixel(0, 0), Some([128, 128, 128, 128]));
        bmp.blend_over(0, 0, Color::WHITE);
        assert_eq!(bmp.pixel(0, 0), Some([255, 255, 255, 255]));
        // out of bounds is a no-op
        bmp.blend_over(5, 5, Color::WHITE);
    }

    #[test]
    fn coverage_over_opaque_lightens_it() {
        let mut bmp = ContentBitmap::solid(1, 1, Color::from_premul(0.2, 0.2, 0.2, 1.0)).unwrap();
        bmp.blend_over(0, 0, Color::WHITE.scaled(0.6));
        // 0.6 + 0.2 * 0.4
        assert_eq!(bmp.pixel(0, 0), Some([173, 173, 173, 255]));
    }
}
