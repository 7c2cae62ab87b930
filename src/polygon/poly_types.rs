//! Supporting public types for the polygon boolean operations.

use crate::core::traits::Real;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of a point or edge relative to a polygon.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Inclusion {
    Inside,
    Outside,
    /// On the polygon boundary.
    Boundary,
}

/// Direction relation of a boundary edge coinciding with a boundary edge of
/// the other polygon.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Overlap {
    /// Coincident edges run in the same direction.
    Same,
    /// Coincident edges run in opposite directions.
    Opposite,
}

/// Orientation of a face loop, from the sign of its area.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    /// Degenerate loop with (fuzzy) zero area.
    NotOrientable,
}

/// Boolean operation to apply to two polygons.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BooleanOp {
    /// Union of the polygons.
    Union,
    /// Intersection of the polygons.
    Intersect,
    /// Exclusion of the second polygon from the first (implemented against
    /// a reversed clone of the second operand).
    Subtract,
}

/// Fatal failures of the boolean engine.
///
/// Locally recoverable situations (zero-length pieces, coincident points,
/// tangential touches) are handled with tolerance branches and never
/// surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BooleanOpError {
    /// The repair pass could not reconcile inconsistent inclusion flags
    /// around a face boundary chain (geometry degenerate beyond tolerance).
    #[error("unresolved boundary conflict between polygon faces")]
    UnresolvedBoundaryConflict,

    /// Face reconstruction walked a loop that never returned to its
    /// starting edge. Defensive check for topology corruption; unreachable
    /// with consistent upstream stages.
    #[error("infinite loop detected while rebuilding result faces")]
    InfiniteLoop,
}

/// Options for the boolean operations.
#[derive(Debug, Clone)]
pub struct BooleanOptions<T> {
    /// Fuzzy comparison epsilon used for determining if two positions are
    /// equal.
    pub pos_equal_eps: T,
    /// Multiplier applied to `pos_equal_eps` when the repair pass searches
    /// a conflicted chain for a missed intersection.
    pub repair_dist_factor: T,
    /// Ceiling on boundary-conflict repair passes; exceeding it fails with
    /// [BooleanOpError::UnresolvedBoundaryConflict] instead of looping.
    pub max_repair_passes: usize,
}

impl<T> BooleanOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            pos_equal_eps: T::from(1e-5).unwrap(),
            repair_dist_factor: T::from(10.0).unwrap(),
            max_repair_passes: 16,
        }
    }
}

impl<T> Default for BooleanOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
