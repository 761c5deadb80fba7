//! Quad geometry shared by every drawable.
//!
//! Corners are stored in triangle-strip order: bottom-left, bottom-right,
//! top-left, top-right. Positions are NDC (+Y up); texture coordinates use
//! wgpu's convention (v = 0 is the first bitmap row).

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::fit::FitScale;

pub(super) const VERTEX_COUNT: u32 = 4;

/// Index list for drawing the strip corners as two triangles.
pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 2, 1, 3];

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct Position {
    pub pos: [f32; 2],
}

impl Position {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Position>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct TexCoord {
    pub uv: [f32; 2],
}

impl TexCoord {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TexCoord>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }

    /// Texture coordinates for the four corners.
    ///
    /// `flip_y` samples the bitmap upside down.
    pub(super) fn corners(flip_y: bool) -> [TexCoord; 4] {
        let (bottom, top) = if flip_y { (0.0, 1.0) } else { (1.0, 0.0) };
        [
            TexCoord { uv: [0.0, bottom] },
            TexCoord { uv: [1.0, bottom] },
            TexCoord { uv: [0.0, top] },
            TexCoord { uv: [1.0, top] },
        ]
    }
}

/// A quad centered at the origin with half-extents `(scale.x, scale.y)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadGeometry {
    scale: FitScale,
}

impl QuadGeometry {
    #[inline]
    pub fn new(scale: FitScale) -> Self {
        Self { scale }
    }

    #[inline]
    pub fn scale(&self) -> FitScale {
        self.scale
    }

    /// Corner positions in strip order.
    pub fn corners(&self) -> [[f32; 2]; 4] {
        let (x, y) = (self.scale.x, self.scale.y);
        [[-x, -y], [x, -y], [-x, y], [x, y]]
    }

    pub(super) fn positions(&self) -> [Position; 4] {
        self.corners().map(|pos| Position { pos })
    }
}

impl Default for QuadGeometry {
    fn default() -> Self {
        Self::new(FitScale::IDENTITY)
    }
}

/// Records `next` as the current geometry and returns the vertices to
/// upload, or `None` when nothing changed.
fn stage_positions(current: &mut QuadGeometry, next: QuadGeometry) -> Option<[Position; 4]> {
    if *current == next {
        return None;
    }
    *current = next;
    Some(next.positions())
}

/// GPU vertex buffer holding the quad's positions.
///
/// This is the only buffer rewritten on resize; texture coordinates, indices
/// and bindings stay as created.
pub(super) struct PositionBuffer {
    buffer: wgpu::Buffer,
    geometry: QuadGeometry,
}

impl PositionBuffer {
    pub(super) fn new(device: &wgpu::Device, label: &str, geometry: QuadGeometry) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&geometry.positions()),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        Self { buffer, geometry }
    }

    /// Rewrites the positions if the geometry changed.
    pub(super) fn update(&mut self, queue: &wgpu::Queue, geometry: QuadGeometry) {
        if let Some(positions) = stage_positions(&mut self.geometry, geometry) {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&positions));
        }
    }

    #[inline]
    pub(super) fn geometry(&self) -> QuadGeometry {
        self.geometry
    }

    #[inline]
    pub(super) fn slice(&self) -> wgpu::BufferSlice<'_> {
        self.buffer.slice(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{ContentExtent, Viewport};

    #[test]
    fn identity_quad_spans_ndc() {
        assert_eq!(
            QuadGeometry::default().corners(),
            [[-1.0, -1.0], [1.0, -1.0], [-1.0, 1.0], [1.0, 1.0]]
        );
    }

    #[test]
    fn scaled_corners_follow_strip_order() {
        let q = QuadGeometry::new(FitScale { x: 0.25, y: 1.0 });
        assert_eq!(q.corners(), [[-0.25, -1.0], [0.25, -1.0], [-0.25, 1.0], [0.25, 1.0]]);
    }

    #[test]
    fn on_screen_aspect_matches_content() {
        let content = ContentExtent::new(640, 120);
        let viewport = Viewport::new(800, 600);
        let q = QuadGeometry::new(FitScale::between(content, viewport).unwrap());

        let [bl, br, tl, _] = q.corners();
        let px_w = (br[0] - bl[0]) / 2.0 * viewport.width as f32;
        let px_h = (tl[1] - bl[1]) / 2.0 * viewport.height as f32;

        let expected = content.width as f32 / content.height as f32;
        assert!((px_w / px_h - expected).abs() < 1e-4);
    }

    #[test]
    fn upright_uvs_put_first_row_on_top() {
        let uv = TexCoord::corners(false);
        assert_eq!(uv[2].uv, [0.0, 0.0]); // top-left
        assert_eq!(uv[1].uv, [1.0, 1.0]); // bottom-right
    }

    #[test]
    fn flipped_uvs_swap_rows() {
        let uv = TexCoord::corners(true);
        assert_eq!(uv[0].uv, [0.0, 0.0]); // bottom-left
        assert_eq!(uv[3].uv, [1.0, 1.0]); // top-right
    }

    #[test]
    fn unchanged_geometry_is_not_reuploaded() {
        let mut current = QuadGeometry::default();
        assert_eq!(stage_positions(&mut current, QuadGeometry::default()), None);

        let letterboxed = QuadGeometry::new(FitScale { x: 1.0, y: 0.25 });
        let staged = stage_positions(&mut current, letterboxed).unwrap();
        assert_eq!(staged.map(|p| p.pos), letterboxed.corners());
        assert_eq!(current, letterboxed);

        // Same viewport again, e.g. a redundant resize event.
        assert_eq!(stage_positions(&mut current, letterboxed), None);
    }

    #[test]
    fn indices_cover_both_triangles() {
        assert_eq!(QUAD_INDICES.len(), 6);
        assert!(QUAD_INDICES.iter().all(|&i| (i as u32) < VERTEX_COUNT));
    }
}
