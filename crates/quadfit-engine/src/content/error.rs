use std::fmt;

/// Error returned by [`TextRasterizer::new`](super::TextRasterizer::new).
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Error produced while obtaining pixel data for a quad.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentError {
    /// The content would have zero width or height (e.g. blank text).
    Empty,
    /// Pixel buffer length does not match `width * height * 4`.
    SizeMismatch { expected: usize, actual: usize },
    /// Encoded image bytes could not be decoded.
    Decode(String),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Empty => write!(f, "content has no visible pixels"),
            ContentError::SizeMismatch { expected, actual } => {
                write!(f, "pixel buffer holds {actual} bytes, expected {expected}")
            }
            ContentError::Decode(msg) => write!(f, "image decode error: {msg}"),
        }
    }
}

impl std::error::Error for ContentError {}
