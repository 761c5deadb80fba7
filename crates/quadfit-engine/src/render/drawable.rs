use crate::content::ContentBitmap;
use crate::coords::ContentExtent;
use crate::fit::FitError;

use super::quad::QuadGeometry;
use super::{
    BlendMode, FlatColorDesc, FlatColorQuad, InitError, RenderCtx, RenderTarget, TexturedDesc, TexturedQuad,
};

/// One aspect-fitted quad, either a flat color or a texture.
///
/// Lifecycle mirrors the surface: build on surface creation, [`resize`] on
/// every viewport change (and once right after building), [`draw`] per frame.
///
/// [`resize`]: Drawable::resize
/// [`draw`]: Drawable::draw
pub enum Drawable {
    FlatColor(FlatColorQuad),
    Textured(TexturedQuad),
}

impl Drawable {
    pub fn flat_color(ctx: &RenderCtx<'_>, desc: FlatColorDesc) -> Result<Self, InitError> {
        FlatColorQuad::new(ctx, desc).map(Drawable::FlatColor)
    }

    pub fn textured(
        ctx: &RenderCtx<'_>,
        bitmap: &ContentBitmap,
        desc: TexturedDesc,
    ) -> Result<Self, InitError> {
        TexturedQuad::new(ctx, bitmap, desc).map(Drawable::Textured)
    }

    /// Intrinsic size the quad is fitted by.
    pub fn extent(&self) -> ContentExtent {
        match self {
            Drawable::FlatColor(q) => q.extent(),
            Drawable::Textured(q) => q.extent(),
        }
    }

    /// Blend mode the drawable was built with.
    pub fn blend(&self) -> BlendMode {
        match self {
            Drawable::FlatColor(q) => q.blend(),
            Drawable::Textured(q) => q.blend(),
        }
    }

    /// Current corner positions.
    pub fn geometry(&self) -> QuadGeometry {
        match self {
            Drawable::FlatColor(q) => q.geometry(),
            Drawable::Textured(q) => q.geometry(),
        }
    }

    pub fn resize(&mut self, ctx: &RenderCtx<'_>) -> Result<(), FitError> {
        match self {
            Drawable::FlatColor(q) => q.resize(ctx),
            Drawable::Textured(q) => q.resize(ctx),
        }
    }

    pub fn draw(&self, target: &mut RenderTarget<'_>) {
        match self {
            Drawable::FlatColor(q) => q.draw(target),
            Drawable::Textured(q) => q.draw(target),
        }
    }
}

impl From<FlatColorQuad> for Drawable {
    fn from(q: FlatColorQuad) -> Self {
        Drawable::FlatColor(q)
    }
}

impl From<TexturedQuad> for Drawable {
    fn from(q: TexturedQuad) -> Self {
        Drawable::Textured(q)
    }
}
