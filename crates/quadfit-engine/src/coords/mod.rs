//! Size types shared by the fit calculator and the drawables.
//!
//! Everything here is measured in physical pixels. Quad geometry itself lives
//! in NDC (see `render::quad`).

mod extent;
mod viewport;

pub use extent::ContentExtent;
pub use viewport::Viewport;
