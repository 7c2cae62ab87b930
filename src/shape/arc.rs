use super::ShapeError;
use crate::core::math::{angle, angle_is_within_sweep_eps, normalize_radians, point_on_circle, Vector2};
use crate::core::traits::Real;
use crate::index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Circular-arc boundary curve.
///
/// The sweep runs from `start_angle` to `end_angle` counter clockwise when
/// `ccw` is true, clockwise otherwise. Angles are kept raw (not normalized)
/// so a full circle is represented with `end_angle = start_angle + 2PI`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Arc<T = f64> {
    pub center: Vector2<T>,
    pub radius: T,
    pub start_angle: T,
    pub end_angle: T,
    pub ccw: bool,
}

impl<T> Arc<T>
where
    T: Real,
{
    pub fn new(
        center: Vector2<T>,
        radius: T,
        start_angle: T,
        end_angle: T,
        ccw: bool,
    ) -> Result<Self, ShapeError> {
        if !(radius > T::zero()) {
            return Err(ShapeError::IllegalParameters("arc radius must be positive"));
        }
        Ok(Arc {
            center,
            radius,
            start_angle,
            end_angle,
            ccw,
        })
    }

    /// Counter clockwise full circle starting (and ending) at angle 0.
    pub fn full_circle(center: Vector2<T>, radius: T) -> Result<Self, ShapeError> {
        Arc::new(center, radius, T::zero(), T::tau(), true)
    }

    /// Magnitude of the swept angle in `[0, 2PI]`.
    #[inline]
    pub fn sweep(&self) -> T {
        if self.ccw {
            normalize_radians(self.end_angle - self.start_angle)
        } else {
            normalize_radians(self.start_angle - self.end_angle)
        }
    }

    /// Swept angle, negative for clockwise arcs.
    #[inline]
    pub fn sweep_signed(&self) -> T {
        if self.ccw { self.sweep() } else { -self.sweep() }
    }

    #[inline]
    pub fn length(&self) -> T {
        self.radius * self.sweep()
    }

    #[inline]
    pub fn start(&self) -> Vector2<T> {
        point_on_circle(self.radius, self.center, self.start_angle)
    }

    #[inline]
    pub fn end(&self) -> Vector2<T> {
        point_on_circle(self.radius, self.center, self.end_angle)
    }

    /// Point reached after sweeping `delta` radians (non-negative) from the
    /// start in the arc direction.
    #[inline]
    pub fn point_at_sweep(&self, delta: T) -> Vector2<T> {
        let a = if self.ccw {
            self.start_angle + delta
        } else {
            self.start_angle - delta
        };
        point_on_circle(self.radius, self.center, a)
    }

    #[inline]
    pub fn midpoint(&self) -> Vector2<T> {
        self.point_at_sweep(self.sweep() / T::two())
    }

    fn angle_eps(&self, eps: T) -> T {
        // positional epsilon converted to an angular one at this radius
        num_traits::real::Real::max(eps / self.radius, T::fuzzy_epsilon())
    }

    /// Test if the angle (radians, any range) lies within the arc sweep.
    pub fn angle_within_sweep(&self, test_angle: T, eps: T) -> bool {
        angle_is_within_sweep_eps(
            test_angle,
            self.start_angle,
            self.sweep_signed(),
            self.angle_eps(eps),
        )
    }

    /// Test if `point` lies on the arc within `eps`.
    pub fn contains_point(&self, point: Vector2<T>, eps: T) -> bool {
        let radial = point - self.center;
        if !(radial.length() - self.radius).fuzzy_eq_zero_eps(eps) {
            return false;
        }
        self.angle_within_sweep(angle(self.center, point), eps)
    }

    /// Boundary distance from the start to a point assumed on the arc.
    pub fn dist_from_start(&self, point: Vector2<T>) -> T {
        let pa = angle(self.center, point);
        let delta = if self.ccw {
            normalize_radians(pa - self.start_angle)
        } else {
            normalize_radians(self.start_angle - pa)
        };
        self.radius * delta
    }

    /// Closest point on the arc to `point`.
    pub fn closest_point_to(&self, point: Vector2<T>) -> Vector2<T> {
        let radial = point - self.center;
        if radial.length().fuzzy_eq_zero() {
            return self.start();
        }
        let pa = angle(self.center, point);
        if self.angle_within_sweep(pa, T::fuzzy_epsilon()) {
            return point_on_circle(self.radius, self.center, pa);
        }
        let start = self.start();
        let end = self.end();
        if crate::core::math::dist_squared(point, start)
            < crate::core::math::dist_squared(point, end)
        {
            start
        } else {
            end
        }
    }

    /// Unit tangent in the direction of travel at `point` (assumed on the
    /// arc).
    pub fn tangent_at(&self, point: Vector2<T>) -> Vector2<T> {
        let radial = (point - self.center).normalize();
        if self.ccw { radial.perp() } else { -radial.perp() }
    }

    /// Unit direction of travel leaving the start point.
    #[inline]
    pub fn tangent_in_start(&self) -> Vector2<T> {
        self.tangent_at(self.start())
    }

    /// Unit direction pointing backwards (against travel) at the end point.
    #[inline]
    pub fn tangent_in_end(&self) -> Vector2<T> {
        -self.tangent_at(self.end())
    }

    #[inline]
    pub fn translate(&self, dx: T, dy: T) -> Self {
        Arc {
            center: self.center.translate(dx, dy),
            ..*self
        }
    }

    #[inline]
    pub fn reverse(&self) -> Self {
        Arc {
            center: self.center,
            radius: self.radius,
            start_angle: self.end_angle,
            end_angle: self.start_angle,
            ccw: !self.ccw,
        }
    }

    pub fn bbox(&self) -> AABB<T> {
        let start = self.start();
        let end = self.end();
        let mut bbox = AABB::new(
            num_traits::real::Real::min(start.x, end.x),
            num_traits::real::Real::min(start.y, end.y),
            num_traits::real::Real::max(start.x, end.x),
            num_traits::real::Real::max(start.y, end.y),
        );
        // extend by the axis-extremal circle points the sweep passes through
        let mut quadrant_angle = T::zero();
        for _ in 0..4 {
            if self.angle_within_sweep(quadrant_angle, T::fuzzy_epsilon()) {
                let p = point_on_circle(self.radius, self.center, quadrant_angle);
                bbox = bbox.merge_with(&AABB::from_point(p.x, p.y));
            }
            quadrant_angle = quadrant_angle + T::pi() / T::two();
        }
        bbox
    }

    /// Split at a point assumed on the arc. A split at (or within `eps` of)
    /// an endpoint returns `None` for the empty piece.
    pub fn split_at(&self, point: Vector2<T>, eps: T) -> (Option<Self>, Option<Self>) {
        if point.fuzzy_eq_eps(self.start(), eps) {
            return (None, Some(*self));
        }
        if point.fuzzy_eq_eps(self.end(), eps) {
            return (Some(*self), None);
        }

        // keep raw angles monotonic along the direction of travel so the
        // piece sweeps stay additive
        let pa = angle(self.center, point);
        let delta = if self.ccw {
            normalize_radians(pa - self.start_angle)
        } else {
            normalize_radians(self.start_angle - pa)
        };
        let (mid_raw, end_raw) = if self.ccw {
            (self.start_angle + delta, self.start_angle + self.sweep())
        } else {
            (self.start_angle - delta, self.start_angle - self.sweep())
        };

        let first = Arc {
            center: self.center,
            radius: self.radius,
            start_angle: self.start_angle,
            end_angle: mid_raw,
            ccw: self.ccw,
        };
        let second = Arc {
            center: self.center,
            radius: self.radius,
            start_angle: mid_raw,
            end_angle: end_raw,
            ccw: self.ccw,
        };
        (Some(first), Some(second))
    }

    /// Green's theorem term for the signed area of a loop containing this
    /// arc: the chord term plus the circular-segment correction.
    pub fn signed_area_term(&self) -> T {
        let start = self.start();
        let end = self.end();
        let chord_term = (start.x * end.y - end.x * start.y) / T::two();
        let sweep = self.sweep();
        let segment_area = self.radius * self.radius * (sweep - sweep.sin()) / T::two();
        if self.ccw {
            chord_term + segment_area
        } else {
            chord_term - segment_area
        }
    }
}
