use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::content::ContentError;
use crate::coords::ContentExtent;
use crate::fit::FitError;
use crate::paint::Color;

use super::program::{ProgramDesc, build_pipeline};
use super::quad::{Position, PositionBuffer, QUAD_INDICES, QuadGeometry};
use super::{BlendMode, InitError, RenderCtx, RenderTarget};

/// Construction parameters for [`FlatColorQuad`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlatColorDesc {
    /// Premultiplied fill color.
    pub color: Color,
    /// Shape the quad keeps on screen; the default is a square.
    pub extent: ContentExtent,
    pub blend: BlendMode,
}

impl Default for FlatColorDesc {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            extent: ContentExtent::SQUARE,
            blend: BlendMode::Auto,
        }
    }
}

impl FlatColorDesc {
    /// A translucent fill blends; an opaque one replaces.
    pub(super) fn resolved_blend(&self) -> BlendMode {
        self.blend.resolve(self.color.a < 1.0)
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct FillUniform {
    color: [f32; 4],
}

/// Solid-color quad, drawn with one indexed triangle-list call.
pub struct FlatColorQuad {
    desc: FlatColorDesc,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    // Kept alive for the bind group.
    _fill_ubo: wgpu::Buffer,
    positions: PositionBuffer,
    index_buffer: wgpu::Buffer,
}

impl FlatColorQuad {
    pub fn new(ctx: &RenderCtx<'_>, mut desc: FlatColorDesc) -> Result<Self, InitError> {
        if desc.extent.is_empty() {
            return Err(ContentError::Empty.into());
        }
        desc.blend = desc.resolved_blend();

        let bind_group_layout = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("quadfit flat bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(std::mem::size_of::<FillUniform>() as u64),
                },
                count: None,
            }],
        });

        let pipeline = build_pipeline(
            ctx,
            ProgramDesc {
                label: "quadfit flat",
                source: include_str!("shaders/flat.wgsl"),
                bind_group_layout: &bind_group_layout,
                buffers: &[Position::layout()],
                topology: wgpu::PrimitiveTopology::TriangleList,
                blend: desc.blend,
            },
        )?;

        let fill_ubo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quadfit flat fill ubo"),
            contents: bytemuck::bytes_of(&FillUniform { color: desc.color.to_array() }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("quadfit flat bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: fill_ubo.as_entire_binding(),
            }],
        });

        let index_buffer = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quadfit flat ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        let positions = PositionBuffer::new(ctx.device, "quadfit flat positions", QuadGeometry::default());

        Ok(Self {
            desc,
            pipeline,
            bind_group,
            _fill_ubo: fill_ubo,
            positions,
            index_buffer,
        })
    }

    #[inline]
    pub fn extent(&self) -> ContentExtent {
        self.desc.extent
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

    /// Refits the quad to `ctx.viewport`.
    pub fn resize(&mut self, ctx: &RenderCtx<'_>) -> Result<(), FitError> {
        let geometry = super::fit_geometry(self.desc.extent, ctx.viewport)?;
        self.positions.update(ctx.queue, geometry);
        Ok(())
    }

    pub fn draw(&self, target: &mut RenderTarget<'_>) {
        let mut rpass = target.begin_pass("quadfit flat pass");
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.positions.slice());
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_blend_follows_fill_alpha() {
        let opaque = FlatColorDesc::default();
        assert_eq!(opaque.resolved_blend(), BlendMode::Replace);

        let translucent = FlatColorDesc { color: Color::WHITE.scaled(0.5), ..opaque };
        assert_eq!(translucent.resolved_blend(), BlendMode::PremultipliedAlpha);
    }

    #[test]
    fn explicit_blend_is_kept() {
        let desc = FlatColorDesc { blend: BlendMode::PremultipliedAlpha, ..FlatColorDesc::default() };
        assert_eq!(desc.resolved_blend(), BlendMode::PremultipliedAlpha);
    }
}
