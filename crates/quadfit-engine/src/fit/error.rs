use std::fmt;

/// Error returned by [`compute_fit_scale`](super::compute_fit_scale).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FitError {
    /// A dimension was zero, negative, or not finite.
    InvalidArgument { name: &'static str, value: f32 },
    /// The aspect ratios differ so much that the shrunk axis rounds to zero in `f32`.
    ScaleUnderflow { ratio: f64 },
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitError::InvalidArgument { name, value } => {
                write!(f, "invalid argument: `{name}` must be positive and finite, got {value}")
            }
            FitError::ScaleUnderflow { ratio } => {
                write!(f, "fit scale {ratio:e} is too small to represent")
            }
        }
    }
}

impl std::error::Error for FitError {}
