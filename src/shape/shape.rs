use super::{shape_distance, shape_shape_intr, Arc, Segment, ShapeIntr};
use crate::core::math::Vector2;
use crate::core::traits::Real;
use crate::index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Boundary curve of a polygon: a segment or a circular arc.
///
/// Closed tagged union so every operation dispatch is checked exhaustively
/// at compile time.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shape<T = f64> {
    Segment(Segment<T>),
    Arc(Arc<T>),
}

impl<T> From<Segment<T>> for Shape<T> {
    #[inline]
    fn from(seg: Segment<T>) -> Self {
        Shape::Segment(seg)
    }
}

impl<T> From<Arc<T>> for Shape<T> {
    #[inline]
    fn from(arc: Arc<T>) -> Self {
        Shape::Arc(arc)
    }
}

impl<T> Shape<T>
where
    T: Real,
{
    pub fn bbox(&self) -> AABB<T> {
        match self {
            Shape::Segment(s) => s.bbox(),
            Shape::Arc(a) => a.bbox(),
        }
    }

    pub fn length(&self) -> T {
        match self {
            Shape::Segment(s) => s.length(),
            Shape::Arc(a) => a.length(),
        }
    }

    pub fn start(&self) -> Vector2<T> {
        match self {
            Shape::Segment(s) => s.start,
            Shape::Arc(a) => a.start(),
        }
    }

    pub fn end(&self) -> Vector2<T> {
        match self {
            Shape::Segment(s) => s.end,
            Shape::Arc(a) => a.end(),
        }
    }

    pub fn midpoint(&self) -> Vector2<T> {
        match self {
            Shape::Segment(s) => s.midpoint(),
            Shape::Arc(a) => a.midpoint(),
        }
    }

    pub fn contains_point(&self, point: Vector2<T>, eps: T) -> bool {
        match self {
            Shape::Segment(s) => s.contains_point(point, eps),
            Shape::Arc(a) => a.contains_point(point, eps),
        }
    }

    /// Boundary distance from the start to a point assumed on the shape.
    pub fn dist_from_start(&self, point: Vector2<T>) -> T {
        match self {
            Shape::Segment(s) => s.dist_from_start(point),
            Shape::Arc(a) => a.dist_from_start(point),
        }
    }

    pub fn closest_point_to(&self, point: Vector2<T>) -> Vector2<T> {
        match self {
            Shape::Segment(s) => s.closest_point_to(point),
            Shape::Arc(a) => a.closest_point_to(point),
        }
    }

    /// Unit direction of travel leaving the start point.
    pub fn tangent_in_start(&self) -> Vector2<T> {
        match self {
            Shape::Segment(s) => s.tangent_in_start(),
            Shape::Arc(a) => a.tangent_in_start(),
        }
    }

    /// Unit direction pointing backwards (against travel) at the end point.
    pub fn tangent_in_end(&self) -> Vector2<T> {
        match self {
            Shape::Segment(s) => s.tangent_in_end(),
            Shape::Arc(a) => a.tangent_in_end(),
        }
    }

    /// Unit direction of travel at a point assumed on the shape.
    pub fn tangent_at(&self, point: Vector2<T>) -> Vector2<T> {
        match self {
            Shape::Segment(s) => s.tangent_in_start(),
            Shape::Arc(a) => a.tangent_at(point),
        }
    }

    pub fn reverse(&self) -> Self {
        match self {
            Shape::Segment(s) => Shape::Segment(s.reverse()),
            Shape::Arc(a) => Shape::Arc(a.reverse()),
        }
    }

    pub fn translate(&self, dx: T, dy: T) -> Self {
        match self {
            Shape::Segment(s) => Shape::Segment(s.translate(dx, dy)),
            Shape::Arc(a) => Shape::Arc(a.translate(dx, dy)),
        }
    }

    /// Split at a point assumed on the shape; splitting at an endpoint
    /// (within `eps`) returns `None` for the empty piece.
    pub fn split_at(&self, point: Vector2<T>, eps: T) -> (Option<Self>, Option<Self>) {
        match self {
            Shape::Segment(s) => {
                let (a, b) = s.split_at(point, eps);
                (a.map(Shape::Segment), b.map(Shape::Segment))
            }
            Shape::Arc(a) => {
                let (p, q) = a.split_at(point, eps);
                (p.map(Shape::Arc), q.map(Shape::Arc))
            }
        }
    }

    /// Green's theorem term for the signed area of a loop containing this
    /// shape.
    pub fn signed_area_term(&self) -> T {
        match self {
            Shape::Segment(s) => s.signed_area_term(),
            Shape::Arc(a) => a.signed_area_term(),
        }
    }

    /// Intersection points with another shape. Overlapping (coincident)
    /// runs contribute their two endpoints.
    pub fn intersect(&self, other: &Self, eps: T) -> Vec<Vector2<T>> {
        match shape_shape_intr(self, other, eps) {
            ShapeIntr::None => Vec::new(),
            ShapeIntr::One { point } => vec![point],
            ShapeIntr::Two { point1, point2 } | ShapeIntr::Overlap { point1, point2 } => {
                vec![point1, point2]
            }
        }
    }

    /// Whether this shape coincides with `other` over a run of positive
    /// length.
    pub fn overlaps(&self, other: &Self, eps: T) -> bool {
        matches!(shape_shape_intr(self, other, eps), ShapeIntr::Overlap { .. })
    }

    /// Shortest distance to another shape together with a connecting
    /// segment realizing it (degenerate when the shapes intersect).
    pub fn distance_to(&self, other: &Self, eps: T) -> (T, Segment<T>) {
        shape_distance(self, other, eps)
    }
}
