//! Pixel content for textured quads.
//!
//! Content is produced once at load time, either by rasterizing a string
//! ([`TextRasterizer`]) or by decoding an encoded image ([`decode_image`]).
//! Both yield a premultiplied [`ContentBitmap`].

mod bitmap;
mod error;
mod decode;
mod text;

pub use bitmap::ContentBitmap;
pub use error::{ContentError, FontLoadError};
pub use decode::decode_image;
pub use text::{TextRasterizer, TextStyle};
