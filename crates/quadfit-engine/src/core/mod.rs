//! Contract between the runtime (platform loop) and the application.
//!
//! The runtime drives three callbacks on the render thread, in order:
//! surface created (once), surface changed (after creation and on every
//! resize), draw frame (once per redraw).

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
