/// Intrinsic pixel size of the content drawn on a quad.
///
/// Fixed once the content is loaded. For textured quads this is the texture
/// size; flat-color quads pick an extent to describe the shape they keep.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ContentExtent {
    pub width: u32,
    pub height: u32,
}

impl ContentExtent {
    /// A 1×1 extent. Fits as a square.
    pub const SQUARE: Self = Self::new(1, 1);

    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Default for ContentExtent {
    fn default() -> Self {
        Self::SQUARE
    }
}
