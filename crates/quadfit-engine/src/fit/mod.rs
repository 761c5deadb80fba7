//! Aspect-ratio-preserving fit of a quad into a viewport.
//!
//! The quad is a unit square in NDC (`[-1, 1]` on both axes). Fitting shrinks
//! one axis so the quad keeps the content's aspect ratio on screen, leaving
//! bars on the other axis (letterbox or pillarbox). Nothing is cropped.

mod error;
mod scale;

pub use error::FitError;
pub use scale::{FitScale, compute_fit_scale};
