mod edge;
mod face;
mod poly_types;
#[allow(clippy::module_inception)]
mod polygon;

/// Internal algorithm modules made public for visualization, benchmarking,
/// and testing purposes.
pub mod internal;

pub use edge::*;
pub use face::*;
pub use poly_types::*;
pub use polygon::*;

use crate::core::traits::Real;
use crate::shape::Shape;

/// Union of two polygons.
#[inline]
pub fn union<T>(a: &Polygon<T>, b: &Polygon<T>) -> Result<Polygon<T>, BooleanOpError>
where
    T: Real,
{
    a.boolean(b, BooleanOp::Union)
}

/// Intersection of two polygons.
#[inline]
pub fn intersect<T>(a: &Polygon<T>, b: &Polygon<T>) -> Result<Polygon<T>, BooleanOpError>
where
    T: Real,
{
    a.boolean(b, BooleanOp::Intersect)
}

/// Subtraction of `b` from `a`.
#[inline]
pub fn subtract<T>(a: &Polygon<T>, b: &Polygon<T>) -> Result<Polygon<T>, BooleanOpError>
where
    T: Real,
{
    a.boolean(b, BooleanOp::Subtract)
}

/// Boundary pieces of `a` inside `b` and of `b` inside `a`, without
/// materializing a result polygon.
#[inline]
pub fn inner_clip<T>(
    a: &Polygon<T>,
    b: &Polygon<T>,
) -> Result<(Vec<Shape<T>>, Vec<Shape<T>>), BooleanOpError>
where
    T: Real,
{
    internal::poly_boolean::polygon_inner_clip(a, b, &BooleanOptions::new())
}

/// Boundary pieces of `a` outside `b`.
#[inline]
pub fn outer_clip<T>(a: &Polygon<T>, b: &Polygon<T>) -> Result<Vec<Shape<T>>, BooleanOpError>
where
    T: Real,
{
    internal::poly_boolean::polygon_outer_clip(a, b, &BooleanOptions::new())
}
