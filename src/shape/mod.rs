mod arc;
mod circle;
mod distance;
mod intersect;
mod line;
mod ray;
mod segment;
#[allow(clippy::module_inception)]
mod shape;

pub use arc::*;
pub use circle::*;
pub use distance::*;
pub use intersect::*;
pub use line::*;
pub use ray::*;
pub use segment::*;
pub use shape::*;

use thiserror::Error;

/// Errors from shape construction and primitive vector operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// A constructor received a value combination it cannot interpret.
    #[error("illegal shape parameters: {0}")]
    IllegalParameters(&'static str),

    /// Attempted to normalize a zero-length vector.
    #[error("zero-length vector cannot be normalized")]
    ZeroDivision,
}
