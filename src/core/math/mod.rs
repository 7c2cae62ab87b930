mod base_math;
mod vector2;

pub use base_math::*;
pub use vector2::*;
