use winit::dpi::PhysicalSize;

/// Drawable surface size in physical pixels.
///
/// Set by the runtime when the surface is created and on every resize. A
/// viewport with a zero dimension (minimized window) is never handed to
/// drawables; see [`Viewport::is_valid`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl From<PhysicalSize<u32>> for Viewport {
    #[inline]
    fn from(size: PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_viewport_is_invalid() {
        assert!(!Viewport::new(0, 10).is_valid());
        assert!(!Viewport::new(10, 0).is_valid());
        assert!(Viewport::new(1, 1).is_valid());
    }

    #[test]
    fn from_physical_size() {
        let vp: Viewport = PhysicalSize::new(1280u32, 720u32).into();
        assert_eq!(vp, Viewport::new(1280, 720));
    }
}
