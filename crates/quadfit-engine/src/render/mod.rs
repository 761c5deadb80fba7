//! GPU drawables.
//!
//! Each drawable owns its GPU resources (pipeline, buffers, texture) and
//! releases them on drop. Positions are fitted on the CPU with
//! [`crate::fit`] and uploaded in NDC; shaders pass them through.
//!
//! Convention:
//! - corners in triangle-strip order (BL, BR, TL, TR)
//! - content textures are premultiplied RGBA

mod ctx;
mod drawable;
mod error;
mod flat;
mod program;
mod quad;
mod texture;
mod textured;

pub use ctx::{RenderCtx, RenderTarget};
pub use drawable::Drawable;
pub use error::InitError;
pub use flat::{FlatColorDesc, FlatColorQuad};
pub use program::BlendMode;
pub use quad::QuadGeometry;
pub use textured::{TexturedDesc, TexturedQuad};

use crate::coords::{ContentExtent, Viewport};
use crate::fit::{FitError, FitScale};

/// Quad geometry for `extent` fitted into `viewport`.
pub fn fit_geometry(extent: ContentExtent, viewport: Viewport) -> Result<QuadGeometry, FitError> {
    FitScale::between(extent, viewport).map(QuadGeometry::new)
}
