use super::EdgeKey;
use crate::index::AABB;
use slotmap::new_key_type;

new_key_type! {
    /// Arena key of a [Face] within its owning [Polygon](super::Polygon).
    pub struct FaceKey;
}

/// One closed boundary loop of a polygon.
///
/// The loop is a circular doubly linked list of edges; the face only holds
/// the entry points, the links live on the edges (a face borrows edges the
/// polygon's edge arena owns).
#[derive(Debug, Clone)]
pub struct Face<T = f64> {
    pub first: EdgeKey,
    pub last: EdgeKey,
    /// Bounding box captured when the face was registered. Edge splits keep
    /// it exact; edge removals can only shrink the face, so it stays a
    /// valid (conservative) spatial key.
    pub bbox: AABB<T>,
}
