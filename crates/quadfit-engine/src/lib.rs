//! quadfit engine crate.
//!
//! Draws a single quad (flat color or textured) that keeps its content's
//! aspect ratio inside whatever surface it is shown on.
//!
//! - [`fit`]: the pure aspect-fit calculation
//! - [`content`]: text rasterization and image decoding into bitmaps
//! - [`render`]: GPU drawables built on wgpu
//! - [`window`] + [`core`]: the winit runtime and its app callbacks

pub mod content;
pub mod coords;
pub mod core;
pub mod device;
pub mod fit;
pub mod logging;
pub mod paint;
pub mod render;
pub mod shell;
pub mod window;
