//! Ready-made [`App`] that shows a single aspect-fitted quad.

use anyhow::{Context, Result};

use crate::content::{ContentBitmap, ContentError, TextRasterizer, TextStyle, decode_image};
use crate::core::{App, AppControl, FrameCtx};
use crate::paint::Color;
use crate::render::{Drawable, FlatColorDesc, RenderCtx, TexturedDesc};

/// Where the quad's pixels come from.
///
/// Textured sources are turned into a bitmap once, on surface creation.
pub enum QuadSource {
    FlatColor(FlatColorDesc),
    Text {
        rasterizer: TextRasterizer,
        text: String,
        style: TextStyle,
        desc: TexturedDesc,
    },
    Image {
        bytes: Vec<u8>,
        desc: TexturedDesc,
    },
}

impl QuadSource {
    /// Produces the bitmap for textured sources; `None` for flat color.
    pub fn load_bitmap(&self) -> Result<Option<ContentBitmap>, ContentError> {
        match self {
            QuadSource::FlatColor(_) => Ok(None),
            QuadSource::Text { rasterizer, text, style, .. } => rasterizer.rasterize(text, *style).map(Some),
            QuadSource::Image { bytes, .. } => decode_image(bytes).map(Some),
        }
    }

    fn build(&self, ctx: &RenderCtx<'_>) -> Result<Drawable> {
        let drawable = match (self, self.load_bitmap()?) {
            (QuadSource::FlatColor(desc), _) => Drawable::flat_color(ctx, *desc)?,
            (QuadSource::Text { desc, .. } | QuadSource::Image { desc, .. }, Some(bitmap)) => {
                Drawable::textured(ctx, &bitmap, *desc)?
            }
            (_, None) => return Err(ContentError::Empty.into()),
        };
        Ok(drawable)
    }
}

/// Clears the frame and draws one [`Drawable`] built from a [`QuadSource`].
pub struct QuadShell {
    source: QuadSource,
    clear: Color,
    drawable: Option<Drawable>,
}

impl QuadShell {
    pub fn new(source: QuadSource) -> Self {
        Self {
            source,
            clear: Color::GRAY,
            drawable: None,
        }
    }

    pub fn with_clear_color(mut self, clear: Color) -> Self {
        self.clear = clear;
        self
    }

    pub fn drawable(&self) -> Option<&Drawable> {
        self.drawable.as_ref()
    }
}

impl App for QuadShell {
    fn on_surface_created(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        let drawable = self.source.build(ctx).context("failed to build quad")?;
        let extent = drawable.extent();
        log::info!(
            "quad ready, content {}x{}, blend {:?}",
            extent.width,
            extent.height,
            drawable.blend()
        );
        self.drawable = Some(drawable);
        Ok(())
    }

    fn on_surface_changed(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        let Some(drawable) = self.drawable.as_mut() else { return Ok(()) };
        drawable.resize(ctx)?;

        let scale = drawable.geometry().scale();
        log::debug!(
            "viewport {}x{} -> fit scale ({:.3}, {:.3})",
            ctx.viewport.width,
            ctx.viewport.height,
            scale.x,
            scale.y
        );
        Ok(())
    }

    fn on_draw_frame(&mut self, frame: &mut FrameCtx<'_, '_>) -> AppControl {
        let drawable = self.drawable.as_ref();
        frame.render(self.clear, |_, target| {
            if let Some(d) = drawable {
                d.draw(target);
            }
        })
    }
}
