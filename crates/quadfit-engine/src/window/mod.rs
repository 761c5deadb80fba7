//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single window, and wires the window's
//! lifecycle to the GPU layer and the [`App`](crate::core::App) callbacks.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
