//! Color representation (premultiplied alpha) shared by content and drawables.

mod color;

pub use color::Color;
