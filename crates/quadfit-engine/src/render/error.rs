use std::fmt;

use crate::content::ContentError;
use crate::coords::ContentExtent;

/// Fatal error while building a drawable's GPU resources.
///
/// Returned from load; the drawable cannot be drawn and nothing is retried.
#[derive(Debug, Clone)]
pub enum InitError {
    /// The shader failed to compile or the pipeline failed validation.
    ShaderCompilation { label: &'static str, messages: Vec<String> },
    /// The content could not be produced.
    Content(ContentError),
    /// The content is larger than the device's 2D texture limit.
    TextureTooLarge { extent: ContentExtent, max: u32 },
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::ShaderCompilation { label, messages } => {
                write!(f, "failed to build shader program `{label}`")?;
                for m in messages {
                    write!(f, "\n  {m}")?;
                }
                Ok(())
            }
            InitError::Content(e) => write!(f, "content error: {e}"),
            InitError::TextureTooLarge { extent, max } => write!(
                f,
                "texture {}x{} exceeds device limit {max}",
                extent.width, extent.height
            ),
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitError::Content(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContentError> for InitError {
    fn from(e: ContentError) -> Self {
        InitError::Content(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_error_lists_messages() {
        let e = InitError::ShaderCompilation {
            label: "quadfit textured",
            messages: vec!["error: unknown identifier `uvv`".to_string()],
        };
        let s = e.to_string();
        assert!(s.starts_with("failed to build shader program `quadfit textured`"));
        assert!(s.contains("unknown identifier"));
    }

    #[test]
    fn content_errors_convert() {
        let e: InitError = ContentError::Empty.into();
        assert!(matches!(e, InitError::Content(ContentError::Empty)));
        assert!(std::error::Error::source(&e).is_some());
    }
}
