use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings};

use crate::paint::Color;

use super::{ContentBitmap, ContentError, FontLoadError};

/// Text appearance for [`TextRasterizer::rasterize`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    /// Pixel size (em height).
    pub size: f32,
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self { size: 120.0, color: Color::WHITE }
    }
}

/// Rasterizes strings into tightly cropped bitmaps with fontdue.
///
/// Runs once at load time; the result is uploaded as a texture and never
/// touched on the per-frame path.
pub struct TextRasterizer {
    font: fontdue::Font,
}

impl TextRasterizer {
    /// Parses a TrueType or OpenType font from raw bytes.
    pub fn new(font_bytes: &[u8]) -> Result<Self, FontLoadError> {
        let font = fontdue::Font::from_bytes(font_bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        Ok(Self { font })
    }

    /// Renders `text` on a transparent background.
    ///
    /// The bitmap is sized to the union of the visible glyph boxes, so there is
    /// no padding around the ink. Text without visible glyphs is
    /// [`ContentError::Empty`].
    pub fn rasterize(&self, text: &str, style: TextStyle) -> Result<ContentBitmap, ContentError> {
        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(
            &[&self.font],
            &fontdue::layout::TextStyle::new(text, style.size.max(1.0), 0),
        );

        let glyphs: Vec<_> = layout
            .glyphs()
            .iter()
            .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
            .map(|g| (g.key, GlyphBox { x: g.x, y: g.y, width: g.width, height: g.height }))
            .collect();

        let bounds = ink_bounds(glyphs.iter().map(|(_, b)| *b)).ok_or(ContentError::Empty)?;
        let mut bitmap = ContentBitmap::transparent(bounds.width(), bounds.height())?;

        for (key, placed) in &glyphs {
            let (metrics, coverage) = self.font.rasterize_config(*key);
            let left = placed.x.floor() as i32 - bounds.min_x;
            let top = placed.y.floor() as i32 - bounds.min_y;

            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let c = coverage[row * metrics.width + col];
                    if c == 0 {
                        continue;
                    }
                    let (x, y) = (left + col as i32, top + row as i32);
                    if x < 0 || y < 0 {
                        continue;
                    }
                    bitmap.blend_over(x as u32, y as u32, style.color.scaled(c as f32 / 255.0));
                }
            }
        }

        log::debug!(
            "rasterized {:?} at {}px into {}x{}",
            text,
            style.size,
            bitmap.width(),
            bitmap.height()
        );

        Ok(bitmap)
    }
}

/// Placement of one glyph bitmap in layout space (+Y down).
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct GlyphBox {
    pub x: f32,
    pub y: f32,
    pub width: usize,
    pub height: usize,
}

/// Integer pixel bounds, `min` inclusive and `max` exclusive.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct PixelBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl PixelBounds {
    pub fn width(self) -> u32 {
        (self.max_x - self.min_x).max(0) as u32
    }

    pub fn height(self) -> u32 {
        (self.max_y - self.min_y).max(0) as u32
    }
}

/// Union of the glyph boxes snapped to whole pixels, or `None` if there is no ink.
pub(crate) fn ink_bounds(boxes: impl IntoIterator<Item = GlyphBox>) -> Option<PixelBounds> {
    boxes
        .into_iter()
        .filter(|b| b.width > 0 && b.height > 0)
        .map(|b| {
            let x = b.x.floor() as i32;
            let y = b.y.floor() as i32;
            PixelBounds { min_x: x, min_y: y, max_x: x + b.width as i32, max_y: y + b.height as i32 }
        })
        .reduce(|a, b| PixelBounds {
            min_x: a.min_x.min(b.min_x),
            min_y: a.min_y.min(b.min_y),
            max_x: a.max_x.max(b.max_x),
            max_y: a.max_y.max(b.max_y),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(x: f32, y: f32, width: usize, height: usize) -> GlyphBox {
        GlyphBox { x, y, width, height }
    }

    #[test]
    fn no_glyphs_has_no_bounds() {
        assert_eq!(ink_bounds(Vec::<GlyphBox>::new()), None);
        assert_eq!(ink_bounds([glyph(3.0, 3.0, 0, 10)]), None);
    }

    #[test]
    fn bounds_cover_every_glyph() {
        let b = ink_bounds([glyph(0.0, 10.0, 8, 12), glyph(10.0, 4.0, 6, 18), glyph(20.0, 12.0, 5, 5)])
            .unwrap();
        assert_eq!(b, PixelBounds { min_x: 0, min_y: 4, max_x: 25, max_y: 22 });
        assert_eq!((b.width(), b.height()), (25, 18));
    }

    #[test]
    fn fractional_origins_snap_down() {
        let b = ink_bounds([glyph(1.6, -2.2, 4, 4)]).unwrap();
        assert_eq!(b, PixelBounds { min_x: 1, min_y: -3, max_x: 5, max_y: 1 });
    }

    fn system_font() -> Option<TextRasterizer> {
        [
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/noto/NotoSans-Regular.ttf",
            "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
        ]
        .iter()
        .filter_map(|p| std::fs::read(p).ok())
        .find_map(|bytes| TextRasterizer::new(&bytes).ok())
    }

    macro_rules! font_or_skip {
        () => {
            match system_font() {
                Some(f) => f,
                None => {
                    eprintln!("no system font found, skipping");
                    return;
                }
            }
        };
    }

    fn inked_span(len: u32, has_ink: impl Fn(u32) -> bool) -> (u32, u32) {
        let first = (0..len).find(|&i| has_ink(i)).unwrap();
        let last = (0..len).rev().find(|&i| has_ink(i)).unwrap();
        (first, last)
    }

    #[test]
    fn hello_world_is_tight_wide_and_premultiplied() {
        let font = font_or_skip!();
        let bmp = font.rasterize("Hello World", TextStyle::default()).unwrap();
        let (w, h) = (bmp.width(), bmp.height());

        assert!(w > h, "{w}x{h}");
        assert!(h <= 180, "{w}x{h}");
        assert!(bmp.has_translucency());

        // White text: every premultiplied channel equals alpha.
        for px in bmp.pixels().chunks_exact(4) {
            assert!(px[0] == px[3] && px[1] == px[3] && px[2] == px[3], "{px:?}");
        }
        assert!(bmp.pixels().chunks_exact(4).any(|px| px[3] > 200));

        // Cropped to the ink, up to antialiasing slack.
        let row_ink = |y: u32| (0..w).any(|x| bmp.pixel(x, y).is_some_and(|p| p[3] > 0));
        let col_ink = |x: u32| (0..h).any(|y| bmp.pixel(x, y).is_some_and(|p| p[3] > 0));
        let (top, bottom) = inked_span(h, row_ink);
        let (left, right) = inked_span(w, col_ink);
        assert!(top <= 1 && bottom + 2 >= h, "rows {top}..={bottom} of {h}");
        assert!(left <= 1 && right + 2 >= w, "cols {left}..={right} of {w}");
    }

    #[test]
    fn text_color_is_premultiplied_into_the_bitmap() {
        let font = font_or_skip!();
        let style = TextStyle { size: 48.0, color: Color::from_straight(1.0, 0.0, 0.0, 1.0) };
        let bmp = font.rasterize("Hi", style).unwrap();

        for px in bmp.pixels().chunks_exact(4) {
            assert_eq!((px[1], px[2]), (0, 0));
            assert!(px[0] <= px[3]);
        }
    }

    #[test]
    fn larger_size_gives_larger_bitmap() {
        let font = font_or_skip!();
        let small = font.rasterize("Hello", TextStyle { size: 24.0, ..TextStyle::default() }).unwrap();
        let large = font.rasterize("Hello", TextStyle { size: 96.0, ..TextStyle::default() }).unwrap();
        assert!(large.width() > small.width() && large.height() > small.height());
    }

    #[test]
    fn blank_text_is_empty_content() {
        let font = font_or_skip!();
        assert_eq!(font.rasterize("", TextStyle::default()), Err(ContentError::Empty));
        assert_eq!(font.rasterize("   ", TextStyle::default()), Err(ContentError::Empty));
    }

    #[test]
    fn garbage_font_bytes_are_rejected() {
        assert!(TextRasterizer::new(&[0u8; 16]).is_err());
    }

    #[test]
    fn default_style_matches_demo_text() {
        let style = TextStyle::default();
        assert_eq!(style.size, 120.0);
        assert_eq!(style.color, Color::WHITE);
    }
}
