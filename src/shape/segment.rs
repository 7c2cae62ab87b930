use crate::core::math::{dist_squared, line_seg_closest_point, midpoint, Vector2};
use crate::core::traits::Real;
use crate::index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Straight boundary curve from `start` to `end`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment<T = f64> {
    pub start: Vector2<T>,
    pub end: Vector2<T>,
}

impl<T> Segment<T>
where
    T: Real,
{
    #[inline]
    pub fn new(start: Vector2<T>, end: Vector2<T>) -> Self {
        Segment { start, end }
    }

    #[inline]
    pub fn length(&self) -> T {
        self.start.distance_to(self.end)
    }

    pub fn bbox(&self) -> AABB<T> {
        let (min_x, max_x) = crate::core::math::min_max(self.start.x, self.end.x);
        let (min_y, max_y) = crate::core::math::min_max(self.start.y, self.end.y);
        AABB::new(min_x, min_y, max_x, max_y)
    }

    #[inline]
    pub fn midpoint(&self) -> Vector2<T> {
        midpoint(self.start, self.end)
    }

    /// Test if `point` lies on the segment within `eps`.
    pub fn contains_point(&self, point: Vector2<T>, eps: T) -> bool {
        let closest = line_seg_closest_point(self.start, self.end, point);
        dist_squared(closest, point) < eps * eps
    }

    /// Closest point on the segment to `point`.
    #[inline]
    pub fn closest_point_to(&self, point: Vector2<T>) -> Vector2<T> {
        line_seg_closest_point(self.start, self.end, point)
    }

    /// Boundary distance from `start` to a point assumed on the segment.
    #[inline]
    pub fn dist_from_start(&self, point: Vector2<T>) -> T {
        self.start.distance_to(point)
    }

    /// Unit direction of travel leaving `start`.
    #[inline]
    pub fn tangent_in_start(&self) -> Vector2<T> {
        (self.end - self.start).normalize()
    }

    /// Unit direction pointing backwards (against travel) at `end`.
    #[inline]
    pub fn tangent_in_end(&self) -> Vector2<T> {
        (self.start - self.end).normalize()
    }

    #[inline]
    pub fn reverse(&self) -> Self {
        Segment::new(self.end, self.start)
    }

    #[inline]
    pub fn translate(&self, dx: T, dy: T) -> Self {
        Segment::new(self.start.translate(dx, dy), self.end.translate(dx, dy))
    }

    /// Split at a point assumed on the segment. A split at (or within `eps`
    /// of) an endpoint returns `None` for the empty piece.
    pub fn split_at(&self, point: Vector2<T>, eps: T) -> (Option<Self>, Option<Self>) {
        if point.fuzzy_eq_eps(self.start, eps) {
            return (None, Some(*self));
        }
        if point.fuzzy_eq_eps(self.end, eps) {
            return (Some(*self), None);
        }
        (
            Some(Segment::new(self.start, point)),
            Some(Segment::new(point, self.end)),
        )
    }

    /// Green's theorem term for the signed area of a loop containing this
    /// segment.
    #[inline]
    pub fn signed_area_term(&self) -> T {
        (self.start.x * self.end.y - self.end.x * self.start.y) / T::two()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn split_interior_point() {
        let seg = Segment::new(vec2(0.0, 0.0), vec2(10.0, 0.0));
        let (a, b) = seg.split_at(vec2(4.0, 0.0), 1e-8);
        assert!(a.unwrap().end.fuzzy_eq(vec2(4.0, 0.0)));
        assert!(b.unwrap().start.fuzzy_eq(vec2(4.0, 0.0)));
    }

    #[test]
    fn split_at_endpoint_is_idempotent() {
        let seg = Segment::new(vec2(0.0, 0.0), vec2(10.0, 0.0));
        let (a, b) = seg.split_at(vec2(0.0, 0.0), 1e-8);
        assert!(a.is_none());
        assert_eq!(b.unwrap(), seg);
    }

    #[test]
    fn contains_point_tolerance() {
        let seg = Segment::new(vec2(0.0, 0.0), vec2(10.0, 10.0));
        assert!(seg.contains_point(vec2(5.0, 5.0), 1e-8));
        assert!(!seg.contains_point(vec2(5.0, 5.1), 1e-8));
        assert!(!seg.contains_point(vec2(11.0, 11.0), 1e-8));
    }

    #[test]
    fn area_term_of_ccw_square() {
        let s1 = Segment::new(vec2(0.0, 0.0), vec2(1.0, 0.0));
        let s2 = Segment::new(vec2(1.0, 0.0), vec2(1.0, 1.0));
        let s3 = Segment::new(vec2(1.0, 1.0), vec2(0.0, 1.0));
        let s4 = Segment::new(vec2(0.0, 1.0), vec2(0.0, 0.0));
        let area: f64 = s1.signed_area_term()
            + s2.signed_area_term()
            + s3.signed_area_term()
            + s4.signed_area_term();
        assert!(area.fuzzy_eq(1.0));
    }
}
