use crate::coords::{ContentExtent, Viewport};

use super::FitError;

/// Per-axis multipliers applied to the unit quad's half-extents.
///
/// Invariant: both components lie in `(0, 1]` and at least one equals `1.0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FitScale {
    pub x: f32,
    pub y: f32,
}

impl FitScale {
    /// No scaling; the quad covers the whole viewport.
    pub const IDENTITY: Self = Self { x: 1.0, y: 1.0 };

    /// Fits `content` into `viewport`.
    pub fn between(content: ContentExtent, viewport: Viewport) -> Result<Self, FitError> {
        compute_fit_scale(
            content.width as f32,
            content.height as f32,
            viewport.width as f32,
            viewport.height as f32,
        )
    }
}

impl Default for FitScale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Computes the scale that inscribes content of the given size in the viewport.
///
/// When the viewport is relatively wider than the content, the X axis shrinks
/// (pillarbox); otherwise the Y axis shrinks (letterbox). Equal aspect ratios
/// take the second branch and yield [`FitScale::IDENTITY`].
///
/// Every dimension must be positive and finite. The aspect ratios are compared
/// as cross products in `f64`, so no intermediate overflows for any pair of
/// finite `f32` inputs; a shrunk axis too small for `f32` is
/// [`FitError::ScaleUnderflow`].
pub fn compute_fit_scale(
    content_width: f32,
    content_height: f32,
    viewport_width: f32,
    viewport_height: f32,
) -> Result<FitScale, FitError> {
    let content_width = positive("content_width", content_width)?;
    let content_height = positive("content_height", content_height)?;
    let viewport_width = positive("viewport_width", viewport_width)?;
    let viewport_height = positive("viewport_height", viewport_height)?;

    // content_aspect * (ch * vh) and viewport_aspect * (ch * vh).
    let content_cross = content_width * viewport_height;
    let viewport_cross = viewport_width * content_height;

    let scale = if viewport_cross > content_cross {
        FitScale { x: shrink(content_cross / viewport_cross)?, y: 1.0 }
    } else {
        FitScale { x: 1.0, y: shrink(viewport_cross / content_cross)? }
    };

    Ok(scale)
}

/// Narrows a ratio in `(0, 1]` to `f32`, rejecting values that round to zero.
fn shrink(ratio: f64) -> Result<f32, FitError> {
    let narrowed = ratio as f32;
    if narrowed > 0.0 && narrowed <= 1.0 {
        Ok(narrowed)
    } else {
        Err(FitError::ScaleUnderflow { ratio })
    }
}

fn positive(name: &'static str, value: f32) -> Result<f64, FitError> {
    if value > 0.0 && value.is_finite() {
        Ok(value as f64)
    } else {
        Err(FitError::InvalidArgument { name, value })
    }
}
