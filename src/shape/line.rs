use super::ShapeError;
use crate::core::math::Vector2;
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Infinite line through `point` with direction `dir` (unit length).
///
/// Not stored in polygon boundaries; used by the classifier and the
/// intersection math.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line<T = f64> {
    pub point: Vector2<T>,
    pub dir: Vector2<T>,
}

impl<T> Line<T>
where
    T: Real,
{
    pub fn new(point: Vector2<T>, dir: Vector2<T>) -> Result<Self, ShapeError> {
        let dir = dir.try_normalize().ok_or(ShapeError::ZeroDivision)?;
        Ok(Line { point, dir })
    }

    /// Horizontal line through `y`.
    pub fn horizontal(y: T) -> Self {
        Line {
            point: Vector2::new(T::zero(), y),
            dir: Vector2::new(T::one(), T::zero()),
        }
    }

    /// Test if `test` lies to the left of the line (looking along `dir`).
    #[inline]
    pub fn point_on_left(&self, test: Vector2<T>) -> bool {
        self.dir.perp_dot(test - self.point) > T::zero()
    }

    /// Perpendicular (unsigned) distance from `test` to the line.
    #[inline]
    pub fn distance_to_point(&self, test: Vector2<T>) -> T {
        self.dir.perp_dot(test - self.point).abs()
    }

    /// Test if `test` lies on the line within `eps`.
    #[inline]
    pub fn contains_point(&self, test: Vector2<T>, eps: T) -> bool {
        self.distance_to_point(test).fuzzy_eq_zero_eps(eps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn zero_direction_is_rejected() {
        assert_eq!(
            Line::new(vec2(0.0, 0.0), vec2(0.0, 0.0)),
            Err(ShapeError::ZeroDivision)
        );
    }

    #[test]
    fn left_side_test() {
        let line = Line::new(vec2(0.0, 0.0), vec2(1.0, 0.0)).unwrap();
        assert!(line.point_on_left(vec2(3.0, 1.0)));
        assert!(!line.point_on_left(vec2(3.0, -1.0)));
        assert!(!line.point_on_left(vec2(3.0, 0.0)));
    }

    #[test]
    fn distance_and_containment() {
        let line = Line::horizontal(2.0);
        assert_eq!(line.distance_to_point(vec2(100.0, 5.0)), 3.0);
        assert!(line.contains_point(vec2(-50.0, 2.0), 1e-8));
    }
}
