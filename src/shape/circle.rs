use super::{Arc, ShapeError};
use crate::core::math::{dist_squared, Vector2};
use crate::core::traits::Real;
use crate::index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Circle primitive.
///
/// Not stored in polygon boundaries directly; a circular face is built from
/// arcs (see [Circle::as_boundary_arcs]).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle<T = f64> {
    pub center: Vector2<T>,
    pub radius: T,
}

impl<T> Circle<T>
where
    T: Real,
{
    pub fn new(center: Vector2<T>, radius: T) -> Result<Self, ShapeError> {
        if !(radius > T::zero()) {
            return Err(ShapeError::IllegalParameters(
                "circle radius must be positive",
            ));
        }
        Ok(Circle { center, radius })
    }

    #[inline]
    pub fn bbox(&self) -> AABB<T> {
        AABB::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    /// Test if `point` lies inside or on the circle.
    #[inline]
    pub fn contains_point(&self, point: Vector2<T>) -> bool {
        dist_squared(self.center, point) <= self.radius * self.radius
    }

    /// Test if `point` lies on the circle boundary within `eps`.
    #[inline]
    pub fn on_boundary(&self, point: Vector2<T>, eps: T) -> bool {
        (self.center.distance_to(point) - self.radius).fuzzy_eq_zero_eps(eps)
    }

    /// The circle boundary as two counter clockwise half arcs, suitable for
    /// a polygon face.
    pub fn as_boundary_arcs(&self) -> [Arc<T>; 2] {
        let upper = Arc {
            center: self.center,
            radius: self.radius,
            start_angle: T::zero(),
            end_angle: T::pi(),
            ccw: true,
        };
        let lower = Arc {
            center: self.center,
            radius: self.radius,
            start_angle: T::pi(),
            end_angle: T::tau(),
            ccw: true,
        };
        [upper, lower]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn boundary_arcs_close_the_loop() {
        let circle = Circle::new(vec2(1.0, 2.0), 3.0).unwrap();
        let [a, b] = circle.as_boundary_arcs();
        assert!(a.end().fuzzy_eq(b.start()));
        assert!(b.end().fuzzy_eq(a.start()));
        assert_fuzzy_eq!(a.length() + b.length(), 2.0 * std::f64::consts::PI * 3.0, 1e-9);
    }

    #[test]
    fn containment() {
        let circle = Circle::new(vec2(0.0, 0.0), 5.0).unwrap();
        assert!(circle.contains_point(vec2(3.0, 3.0)));
        assert!(!circle.contains_point(vec2(4.0, 4.0)));
        assert!(circle.on_boundary(vec2(5.0, 0.0), 1e-8));
    }
}
