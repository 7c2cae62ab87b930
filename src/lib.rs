//! 2D planar polygon kernel.
//!
//! Polygons are built from segment and circular-arc boundary curves held in a
//! face/edge planar graph, spatially indexed by an augmented interval tree.
//! On top of that sit point classification (ray shooting) and the polygon
//! boolean operations: union, intersection, subtraction, and boundary
//! clipping.
//!
//! All geometry is generic over the numeric type through the
//! [Real](crate::core::traits::Real) trait (`f64` by default) and every
//! comparison goes through an explicit epsilon, carried by the option structs
//! of the operations.

#[macro_use]
mod macros;

/// Core numeric traits and scalar/vector math.
pub mod core;

/// Augmented red-black interval tree and the planar set built on it.
pub mod index;

/// Shape primitives (segment, arc, line, circle) and the boundary `Shape`
/// tagged union.
pub mod shape;

/// Polygon representation (face/edge planar graph) and boolean operations.
pub mod polygon;

pub use crate::core::math::Vector2;
pub use crate::polygon::{
    BooleanOp, BooleanOpError, BooleanOptions, Edge, EdgeKey, Face, FaceKey, Inclusion,
    Orientation, Overlap, Polygon,
};
pub use crate::shape::{Arc, Circle, Line, Segment, Shape, ShapeError};
