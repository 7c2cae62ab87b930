use super::IntervalKey;
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis aligned bounding box used as the interval key for all spatial
/// queries.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AABB<T = f64> {
    pub min_x: T,
    pub min_y: T,
    pub max_x: T,
    pub max_y: T,
}

impl<T> AABB<T>
where
    T: Real,
{
    #[inline]
    pub fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        debug_assert!(min_x <= max_x && min_y <= max_y, "degenerate box extents");
        AABB {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Box covering a single point.
    #[inline]
    pub fn from_point(x: T, y: T) -> Self {
        AABB::new(x, y, x, y)
    }

    /// Grow the box by `dist` on every side.
    #[inline]
    pub fn expand(&self, dist: T) -> Self {
        AABB::new(
            self.min_x - dist,
            self.min_y - dist,
            self.max_x + dist,
            self.max_y + dist,
        )
    }

    /// Smallest box containing both `self` and `other`.
    #[inline]
    pub fn merge_with(&self, other: &Self) -> Self {
        AABB {
            min_x: num_traits::real::Real::min(self.min_x, other.min_x),
            min_y: num_traits::real::Real::min(self.min_y, other.min_y),
            max_x: num_traits::real::Real::max(self.max_x, other.max_x),
            max_y: num_traits::real::Real::max(self.max_y, other.max_y),
        }
    }

    /// Test if the boxes overlap (shared boundary counts as overlap).
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }

    /// Test if the point is inside or on the box.
    #[inline]
    pub fn contains_point(&self, x: T, y: T) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl<T> IntervalKey for AABB<T>
where
    T: Real,
{
    /// Total order by low corner then high corner, point-lexicographic.
    fn less_than(&self, other: &Self) -> bool {
        if self.min_x != other.min_x {
            return self.min_x < other.min_x;
        }
        if self.min_y != other.min_y {
            return self.min_y < other.min_y;
        }
        if self.max_x != other.max_x {
            return self.max_x < other.max_x;
        }
        self.max_y < other.max_y
    }

    fn equal_to(&self, other: &Self) -> bool {
        self == other
    }

    fn intersects(&self, other: &Self) -> bool {
        self.overlaps(other)
    }

    fn merge(&self, other: &Self) -> Self {
        self.merge_with(other)
    }
}
