use super::{FaceKey, Inclusion, Overlap};
use crate::core::math::Vector2;
use crate::core::traits::Real;
use crate::index::AABB;
use crate::shape::Shape;
use slotmap::new_key_type;

new_key_type! {
    /// Arena key of an [Edge] within its owning [Polygon](super::Polygon).
    pub struct EdgeKey;
}

/// One boundary curve of a face plus its topology links and the inclusion
/// state the boolean engine works with.
///
/// `next`/`prev` link the circular loop of the owning face and are null
/// keys only transiently inside the boolean algorithm; `face` is likewise
/// `None` only while faces are being rebuilt.
#[derive(Debug, Clone)]
pub struct Edge<T>
where
    T: Real,
{
    pub shape: Shape<T>,
    pub next: EdgeKey,
    pub prev: EdgeKey,
    pub face: Option<FaceKey>,
    /// Cumulative boundary length from the face's first edge to this edge's
    /// start; 0 at the first edge, monotonically non-decreasing along
    /// `next`.
    pub arc_length: T,
    /// Inclusion of the whole edge relative to the other polygon, set once
    /// by the classifier during a boolean operation.
    pub bv: Option<Inclusion>,
    /// Inclusion of the edge start point (may disagree with `bv_end` until
    /// reconciled).
    pub bv_start: Option<Inclusion>,
    /// Inclusion of the edge end point.
    pub bv_end: Option<Inclusion>,
    /// Set only when this edge coincides with a boundary edge of the other
    /// polygon.
    pub overlap: Option<Overlap>,
}

impl<T> Edge<T>
where
    T: Real,
{
    pub fn new(shape: Shape<T>) -> Self {
        use slotmap::Key;
        Edge {
            shape,
            next: EdgeKey::null(),
            prev: EdgeKey::null(),
            face: None,
            arc_length: T::zero(),
            bv: None,
            bv_start: None,
            bv_end: None,
            overlap: None,
        }
    }

    #[inline]
    pub fn start(&self) -> Vector2<T> {
        self.shape.start()
    }

    #[inline]
    pub fn end(&self) -> Vector2<T> {
        self.shape.end()
    }

    #[inline]
    pub fn length(&self) -> T {
        self.shape.length()
    }

    #[inline]
    pub fn bbox(&self) -> AABB<T> {
        self.shape.bbox()
    }

    /// Clear all boolean-operation state.
    pub fn reset_inclusion(&mut self) {
        self.bv = None;
        self.bv_start = None;
        self.bv_end = None;
        self.overlap = None;
    }
}
