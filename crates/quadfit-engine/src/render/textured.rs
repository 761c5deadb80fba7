use wgpu::util::DeviceExt;

use crate::content::ContentBitmap;
use crate::coords::ContentExtent;
use crate::fit::FitError;

use super::program::{ProgramDesc, build_pipeline};
use super::quad::{Position, PositionBuffer, QuadGeometry, TexCoord, VERTEX_COUNT};
use super::texture::ContentTexture;
use super::{BlendMode, InitError, RenderCtx, RenderTarget};

/// Construction parameters for [`TexturedQuad`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct TexturedDesc {
    /// [`BlendMode::Auto`] blends when the bitmap has translucent pixels.
    pub blend: BlendMode,
    /// Sample the bitmap upside down.
    pub flip_y: bool,
}

impl TexturedDesc {
    pub(super) fn resolved_blend(&self, bitmap: &ContentBitmap) -> BlendMode {
        self.blend.resolve(bitmap.has_translucency())
    }
}

/// Quad showing a bitmap, fitted to the viewport without distortion.
///
/// Drawn as a single 4-vertex triangle strip.
pub struct TexturedQuad {
    desc: TexturedDesc,
    pipeline: wgpu::RenderPipeline,
    texture: ContentTexture,
    positions: PositionBuffer,
    tex_coords: wgpu::Buffer,
}

impl TexturedQuad {
    /// Uploads `bitmap` and builds the pipeline. The bitmap may be dropped afterwards.
    pub fn new(ctx: &RenderCtx<'_>, bitmap: &ContentBitmap, mut desc: TexturedDesc) -> Result<Self, InitError> {
        desc.blend = desc.resolved_blend(bitmap);
        let bind_group_layout = ContentTexture::bind_group_layout(ctx.device);

        let pipeline = build_pipeline(
            ctx,
            ProgramDesc {
                label: "quadfit textured",
                source: include_str!("shaders/textured.wgsl"),
                bind_group_layout: &bind_group_layout,
                buffers: &[Position::layout(), TexCoord::layout()],
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                blend: desc.blend,
            },
        )?;

        let texture = ContentTexture::upload(ctx, &bind_group_layout, bitmap)?;

        let tex_coords = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quadfit textured uvs"),
            contents: bytemuck::cast_slice(&TexCoord::corners(desc.flip_y)),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let positions = PositionBuffer::new(ctx.device, "quadfit textured positions", QuadGeometry::default());

        Ok(Self {
            desc,
            pipeline,
            texture,
            positions,
            tex_coords,
        })
    }

    #[inline]
    pub fn extent(&self) -> ContentExtent {
        self.texture.extent()
    }

    /// Blend mode in effect, with [`BlendMode::Auto`] already resolved.
    #[inline]
    pub fn blend(&self) -> BlendMode {
        self.desc.blend
    }

    #[inline]
    pub fn geometry(&self) -> QuadGeometry {
        self.positions.geometry()
    }

    /// Refits the quad to `ctx.viewport`. Only the position buffer is rewritten.
    pub fn resize(&mut self, ctx: &RenderCtx<'_>) -> Result<(), FitError> {
        let geometry = super::fit_geometry(self.texture.extent(), ctx.viewport)?;
        self.positions.update(ctx.queue, geometry);
        Ok(())
    }

    pub fn draw(&self, target: &mut RenderTarget<'_>) {
        let mut rpass = target.begin_pass("quadfit textured pass");
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, self.texture.bind_group(), &[]);
        rpass.set_vertex_buffer(0, self.positions.slice());
        rpass.set_vertex_buffer(1, self.tex_coords.slice(..));
        rpass.draw(0..VERTEX_COUNT, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn auto_blend_follows_bitmap_alpha() {
        let desc = TexturedDesc::default();
        let opaque = ContentBitmap::solid(2, 2, Color::WHITE).unwrap();
        let text_like = ContentBitmap::solid(2, 2, Color::WHITE.scaled(0.25)).unwrap();

        assert_eq!(desc.resolved_blend(&opaque), BlendMode::Replace);
        assert_eq!(desc.resolved_blend(&text_like), BlendMode::PremultipliedAlpha);
    }

    #[test]
    fn forced_replace_ignores_translucency() {
        let desc = TexturedDesc { blend: BlendMode::Replace, flip_y: false };
        let clear = ContentBitmap::solid(1, 1, Color::TRANSPARENT).unwrap();
        assert_eq!(desc.resolved_blend(&clear), BlendMode::Replace);
    }
}
