use anyhow::Result;

use crate::render::RenderCtx;

use super::ctx::FrameCtx;

/// Control directive returned by the draw callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Render-callback surface implemented by applications.
pub trait App {
    /// The surface exists. Load content, build pipelines and upload textures.
    ///
    /// An error here is fatal: the runtime stops and returns it.
    fn on_surface_created(&mut self, ctx: &RenderCtx<'_>) -> Result<()>;

    /// The surface has a new, non-zero size (`ctx.viewport`).
    ///
    /// Errors are logged and the previous geometry stays in place.
    fn on_surface_changed(&mut self, ctx: &RenderCtx<'_>) -> Result<()>;

    /// Called once per redraw.
    fn on_draw_frame(&mut self, frame: &mut FrameCtx<'_, '_>) -> AppControl;
}
