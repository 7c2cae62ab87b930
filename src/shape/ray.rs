use super::{Arc, Segment, Shape};
use crate::core::math::{point_from_parametric, Vector2};
use crate::core::traits::Real;
use crate::index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Horizontal ray from `start` towards positive x.
///
/// This is the probe used by ray-shoot point classification; it is not
/// stored in polygon boundaries.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ray<T = f64> {
    pub start: Vector2<T>,
}

impl<T> Ray<T>
where
    T: Real,
{
    #[inline]
    pub fn new(start: Vector2<T>) -> Self {
        Ray { start }
    }

    /// Half-infinite query box of the ray, inflated by `eps`.
    pub fn bbox(&self, eps: T) -> AABB<T> {
        AABB::new(
            self.start.x - eps,
            self.start.y - eps,
            num_traits::real::Real::max_value(),
            self.start.y + eps,
        )
    }

    #[inline]
    fn on_ray_x(&self, x: T, eps: T) -> bool {
        x.fuzzy_gt_eps(self.start.x, eps)
    }

    /// Intersection points of the ray with a boundary shape.
    ///
    /// A segment collinear with the ray contributes its endpoints that lie
    /// on the ray; everything else contributes proper curve/line crossing
    /// points filtered to the ray half.
    pub fn intersect_shape(&self, shape: &Shape<T>, eps: T) -> Vec<Vector2<T>> {
        match shape {
            Shape::Segment(seg) => self.intersect_segment(seg, eps),
            Shape::Arc(arc) => self.intersect_arc(arc, eps),
        }
    }

    fn intersect_segment(&self, seg: &Segment<T>, eps: T) -> Vec<Vector2<T>> {
        let y = self.start.y;
        let mut out = Vec::new();

        let start_on = seg.start.y.fuzzy_eq_eps(y, eps);
        let end_on = seg.end.y.fuzzy_eq_eps(y, eps);

        if start_on && end_on {
            // collinear with the ray line
            if self.on_ray_x(seg.start.x, eps) {
                out.push(seg.start);
            }
            if self.on_ray_x(seg.end.x, eps) {
                out.push(seg.end);
            }
            return out;
        }

        let dy = seg.end.y - seg.start.y;
        let t = (y - seg.start.y) / dy;
        let len = seg.length();
        if (t * len).fuzzy_in_range_eps(T::zero(), len, eps) {
            let p = point_from_parametric(seg.start, seg.end, t);
            if self.on_ray_x(p.x, eps) {
                out.push(p);
            }
        }
        out
    }

    fn intersect_arc(&self, arc: &Arc<T>, eps: T) -> Vec<Vector2<T>> {
        let y = self.start.y;
        let dy = y - arc.center.y;
        let mut out = Vec::new();

        if dy.abs() > arc.radius + eps {
            return out;
        }

        let mut push_if_on = |p: Vector2<T>| {
            if arc.angle_within_sweep(crate::core::math::angle(arc.center, p), eps)
                && self.on_ray_x(p.x, eps)
            {
                out.push(p);
            }
        };

        if dy.abs().fuzzy_eq_eps(arc.radius, eps) {
            // tangential touch at the top or bottom of the circle
            let sign = if dy < T::zero() { -T::one() } else { T::one() };
            push_if_on(Vector2::new(arc.center.x, arc.center.y + sign * arc.radius));
            return out;
        }

        let x_off = (arc.radius * arc.radius - dy * dy).sqrt();
        push_if_on(Vector2::new(arc.center.x + x_off, y));
        push_if_on(Vector2::new(arc.center.x - x_off, y));
        out
    }
}
