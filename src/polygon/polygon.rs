use super::internal::poly_boolean::polygon_boolean;
use super::internal::poly_contains::point_location;
use super::{
    BooleanOp, BooleanOpError, BooleanOptions, Edge, EdgeKey, Face, FaceKey, Inclusion, Orientation,
};
use crate::core::math::Vector2;
use crate::core::traits::Real;
use crate::index::{PlanarSet, AABB};
use crate::shape::{Circle, Segment, Shape, ShapeError};
use slotmap::{Key, SlotMap};

/// A polygon: a set of closed boundary loops (faces) over a flat,
/// spatially indexed collection of edges.
///
/// Faces may be disjoint islands or, with opposite orientation, holes;
/// point classification uses crossing parity so holes need no special
/// casing. Edges and faces live in arenas and reference each other by key,
/// and each arena has a [PlanarSet] over it for box range queries.
///
/// Invariant: every edge in some face loop is also in the edge set and vice
/// versa, except transiently inside the boolean algorithm.
#[derive(Debug, Clone)]
pub struct Polygon<T = f64>
where
    T: Real,
{
    pub(crate) edges: SlotMap<EdgeKey, Edge<T>>,
    pub(crate) faces: SlotMap<FaceKey, Face<T>>,
    pub(crate) edge_set: PlanarSet<AABB<T>, EdgeKey>,
    pub(crate) face_set: PlanarSet<AABB<T>, FaceKey>,
}

impl<T> Default for Polygon<T>
where
    T: Real,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Polygon<T>
where
    T: Real,
{
    pub fn new() -> Self {
        Polygon {
            edges: SlotMap::with_key(),
            faces: SlotMap::with_key(),
            edge_set: PlanarSet::new(),
            face_set: PlanarSet::new(),
        }
    }

    /// Polygon with a single face connecting `points` by segments (closing
    /// back to the first point).
    pub fn from_points(points: &[Vector2<T>]) -> Self {
        let mut polygon = Polygon::new();
        polygon
            .add_face_from_points(points)
            .expect("at least 3 distinct points required");
        polygon
    }

    /// Polygon whose single face is the circle boundary (two half arcs).
    pub fn from_circle(circle: Circle<T>) -> Self {
        let mut polygon = Polygon::new();
        let [upper, lower] = circle.as_boundary_arcs();
        polygon
            .add_face(vec![Shape::Arc(upper), Shape::Arc(lower)])
            .expect("circle boundary arcs form a closed loop");
        polygon
    }

    /// Add a face connecting `points` by segments.
    pub fn add_face_from_points(&mut self, points: &[Vector2<T>]) -> Result<FaceKey, ShapeError> {
        if points.len() < 3 {
            return Err(ShapeError::IllegalParameters(
                "face needs at least 3 points",
            ));
        }
        let mut shapes = Vec::with_capacity(points.len());
        for i in 0..points.len() {
            let j = (i + 1) % points.len();
            shapes.push(Shape::Segment(Segment::new(points[i], points[j])));
        }
        self.add_face(shapes)
    }

    /// Add a face from a closed chain of shapes (each shape's end point
    /// coincides with the next shape's start point, wrapping around).
    pub fn add_face(&mut self, shapes: Vec<Shape<T>>) -> Result<FaceKey, ShapeError> {
        if shapes.is_empty() {
            return Err(ShapeError::IllegalParameters("face needs at least 1 shape"));
        }
        for i in 0..shapes.len() {
            let j = (i + 1) % shapes.len();
            if !shapes[i].end().fuzzy_eq(shapes[j].start()) {
                return Err(ShapeError::IllegalParameters(
                    "face shapes do not form a closed chain",
                ));
            }
        }

        let keys: Vec<EdgeKey> = shapes
            .into_iter()
            .map(|s| self.edges.insert(Edge::new(s)))
            .collect();
        let n = keys.len();
        for (i, &k) in keys.iter().enumerate() {
            let next = keys[(i + 1) % n];
            let prev = keys[(i + n - 1) % n];
            self.edges[k].next = next;
            self.edges[k].prev = prev;
            self.edge_set.add(self.edges[k].bbox(), k);
        }
        Ok(self.register_face(keys[0], keys[n - 1]))
    }

    /// Record a face over an already linked circular chain `first ..= last`,
    /// assigning back references, arc lengths, and the spatial keys.
    pub(crate) fn register_face(&mut self, first: EdgeKey, last: EdgeKey) -> FaceKey {
        let fk = self.faces.insert(Face {
            first,
            last,
            bbox: self.edges[first].bbox(),
        });

        let mut bbox = self.edges[first].bbox();
        let mut arc_length = T::zero();
        let mut cur = first;
        let guard = self.edges.len() + 1;
        for _ in 0..guard {
            let edge = &mut self.edges[cur];
            edge.face = Some(fk);
            edge.arc_length = arc_length;
            arc_length = arc_length + edge.length();
            bbox = bbox.merge_with(&edge.bbox());
            if cur == last {
                break;
            }
            cur = edge.next;
        }
        debug_assert_eq!(self.edges[last].next, first, "face chain must be circular");

        self.faces[fk].bbox = bbox;
        self.face_set.add(bbox, fk);
        fk
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[inline]
    pub fn edge(&self, key: EdgeKey) -> &Edge<T> {
        &self.edges[key]
    }

    #[inline]
    pub fn face(&self, key: FaceKey) -> &Face<T> {
        &self.faces[key]
    }

    pub fn face_keys(&self) -> Vec<FaceKey> {
        self.faces.keys().collect()
    }

    /// Edge keys of the face loop in link order starting at `first`.
    pub fn face_edges(&self, face: FaceKey) -> Vec<EdgeKey> {
        let first = self.faces[face].first;
        let last = self.faces[face].last;
        let mut out = Vec::new();
        let mut cur = first;
        let guard = self.edges.len() + 1;
        for _ in 0..guard {
            out.push(cur);
            if cur == last {
                return out;
            }
            cur = self.edges[cur].next;
        }
        debug_assert!(false, "face loop did not terminate at its last edge");
        out
    }

    /// All boundary shapes of the polygon.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape<T>> {
        self.edges.values().map(|e| &e.shape)
    }

    /// Bounding box of the whole polygon (merge of all edge boxes, O(1)
    /// from the edge set root aggregate).
    #[inline]
    pub fn bbox(&self) -> Option<AABB<T>> {
        self.edge_set.bounds()
    }

    /// Validity check for a face loop: circular, mutually linked, and free
    /// of sub-cycles (tortoise/hare).
    pub fn face_loop_is_valid(&self, face: FaceKey) -> bool {
        let first = self.faces[face].first;
        let mut slow = first;
        let mut fast = first;
        let guard = self.edges.len() + 1;
        for _ in 0..guard {
            // consistency of the doubly linked structure
            if self.edges[self.edges[slow].next].prev != slow {
                return false;
            }
            if self.edges[slow].face != Some(face) {
                return false;
            }
            slow = self.edges[slow].next;
            fast = self.edges[self.edges[fast].next].next;
            if slow == first || fast == first {
                return true;
            }
            if slow == fast {
                // cycle that bypasses `first`
                return false;
            }
        }
        false
    }

    /// Signed area of one face loop (Green's theorem; positive for counter
    /// clockwise).
    pub fn face_signed_area(&self, face: FaceKey) -> T {
        self.face_edges(face)
            .iter()
            .fold(T::zero(), |acc, &k| acc + self.edges[k].shape.signed_area_term())
    }

    pub fn face_orientation(&self, face: FaceKey) -> Orientation {
        let area = self.face_signed_area(face);
        if area.fuzzy_eq_zero() {
            Orientation::NotOrientable
        } else if area > T::zero() {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        }
    }

    /// Signed area of the polygon: the sum over faces, so holes (opposite
    /// orientation loops) subtract.
    pub fn signed_area(&self) -> T {
        self.faces
            .keys()
            .fold(T::zero(), |acc, fk| acc + self.face_signed_area(fk))
    }

    /// Absolute area enclosed by the polygon.
    #[inline]
    pub fn area(&self) -> T {
        self.signed_area().abs()
    }

    /// Translate the whole polygon.
    pub fn translate(&mut self, dx: T, dy: T) {
        self.edge_set.clear();
        self.face_set.clear();
        let keys: Vec<EdgeKey> = self.edges.keys().collect();
        for k in keys {
            let shape = self.edges[k].shape.translate(dx, dy);
            self.edges[k].shape = shape;
            self.edge_set.add(shape.bbox(), k);
        }
        let fks: Vec<FaceKey> = self.faces.keys().collect();
        for fk in fks {
            let bbox = self.faces[fk].bbox;
            let moved = AABB::new(bbox.min_x + dx, bbox.min_y + dy, bbox.max_x + dx, bbox.max_y + dy);
            self.faces[fk].bbox = moved;
            self.face_set.add(moved, fk);
        }
    }

    /// Reverse every face (shape directions and link order), normalizing
    /// orientation; used to turn a polygon into a subtrahend.
    pub fn reverse(&mut self) {
        let fks: Vec<FaceKey> = self.faces.keys().collect();
        for fk in fks {
            self.reverse_face(fk);
        }
    }

    /// Rebuild one face loop with every shape reversed and the link
    /// direction flipped.
    pub fn reverse_face(&mut self, face: FaceKey) {
        let keys = self.face_edges(face);
        for &k in &keys {
            let e = &mut self.edges[k];
            e.shape = e.shape.reverse();
            std::mem::swap(&mut e.next, &mut e.prev);
            let bv_start = e.bv_start;
            e.bv_start = e.bv_end;
            e.bv_end = bv_start;
        }
        let f = &mut self.faces[face];
        let first = f.first;
        f.first = f.last;
        f.last = first;
        self.recompute_arc_lengths(face);
    }

    /// Recompute cumulative arc lengths for a face loop.
    pub(crate) fn recompute_arc_lengths(&mut self, face: FaceKey) {
        let keys = self.face_edges(face);
        let mut arc_length = T::zero();
        for k in keys {
            self.edges[k].arc_length = arc_length;
            arc_length = arc_length + self.edges[k].length();
        }
    }

    /// Split the edge's shape at `point`, inserting the new piece before the
    /// edge (the edge keeps its key and becomes the tail piece). Returns the
    /// edge ending at the vertex; idempotent when `point` coincides with an
    /// existing endpoint.
    pub fn add_vertex(&mut self, edge: EdgeKey, point: Vector2<T>, eps: T) -> EdgeKey {
        let shape = self.edges[edge].shape;
        if point.fuzzy_eq_eps(shape.start(), eps) {
            return self.edges[edge].prev;
        }
        if point.fuzzy_eq_eps(shape.end(), eps) {
            return edge;
        }

        let (part1, part2) = shape.split_at(point, eps);
        let (part1, part2) = match (part1, part2) {
            (Some(a), Some(b)) => (a, b),
            // split landed on an endpoint after all, treat as vertex hit
            _ => return edge,
        };

        let old_box = shape.bbox();
        let prev = self.edges[edge].prev;
        let face = self.edges[edge].face;
        let arc_length = self.edges[edge].arc_length;

        let mut new_edge = Edge::new(part1);
        new_edge.prev = prev;
        new_edge.next = edge;
        new_edge.face = face;
        new_edge.arc_length = arc_length;
        new_edge.bv = self.edges[edge].bv;
        new_edge.bv_start = self.edges[edge].bv_start;
        new_edge.overlap = self.edges[edge].overlap;
        let nk = self.edges.insert(new_edge);

        self.edges[prev].next = nk;
        {
            let e = &mut self.edges[edge];
            e.prev = nk;
            e.shape = part2;
            e.arc_length = arc_length + part1.length();
            e.bv_start = None;
        }

        if let Some(fk) = face {
            if self.faces[fk].first == edge {
                self.faces[fk].first = nk;
            }
        }

        self.edge_set.remove(&old_box, edge);
        self.edge_set.add(part2.bbox(), edge);
        self.edge_set.add(part1.bbox(), nk);
        nk
    }

    /// Unlink and delete one edge. The surrounding loop is spliced back
    /// together; a face losing its last edge is deleted too.
    pub fn remove_edge(&mut self, edge: EdgeKey) {
        let e = match self.edges.remove(edge) {
            Some(e) => e,
            None => return,
        };
        self.edge_set.remove(&e.shape.bbox(), edge);

        if let Some(fk) = e.face {
            if e.next == edge {
                // last edge of its face
                let face = self.faces.remove(fk).expect("edge referenced a live face");
                self.face_set.remove(&face.bbox, fk);
                return;
            }
            self.edges[e.prev].next = e.next;
            self.edges[e.next].prev = e.prev;
            let f = &mut self.faces[fk];
            if f.first == edge {
                f.first = e.next;
            }
            if f.last == edge {
                f.last = e.prev;
            }
            self.recompute_arc_lengths(fk);
        } else {
            // dangling edge outside any face, just fix the neighbors
            if !e.prev.is_null() {
                if let Some(p) = self.edges.get_mut(e.prev) {
                    if p.next == edge {
                        p.next = EdgeKey::null();
                    }
                }
            }
            if !e.next.is_null() {
                if let Some(n) = self.edges.get_mut(e.next) {
                    if n.prev == edge {
                        n.prev = EdgeKey::null();
                    }
                }
            }
        }
    }

    /// Delete a whole face and all of its edges.
    pub fn remove_face(&mut self, face: FaceKey) {
        let keys = self.face_edges(face);
        let f = self.faces.remove(face).expect("face key must be live");
        self.face_set.remove(&f.bbox, face);
        for k in keys {
            if let Some(e) = self.edges.remove(k) {
                self.edge_set.remove(&e.shape.bbox(), k);
            }
        }
    }

    /// Drop the face record leaving its edges alive with `face = None`;
    /// used while the boolean engine rebuilds result loops.
    pub(crate) fn unregister_face(&mut self, face: FaceKey) {
        if let Some(f) = self.faces.remove(face) {
            self.face_set.remove(&f.bbox, face);
            let mut cur = f.first;
            let guard = self.edges.len() + 1;
            for _ in 0..guard {
                let Some(e) = self.edges.get_mut(cur) else {
                    break;
                };
                if e.face != Some(face) {
                    break;
                }
                e.face = None;
                cur = e.next;
                if cur == f.first || cur.is_null() {
                    break;
                }
            }
        }
    }

    /// Edges passing through `point` (probe box query plus exact on-shape
    /// filter).
    pub fn edges_at_point(&self, point: Vector2<T>, eps: T) -> Vec<EdgeKey> {
        let probe = AABB::from_point(point.x, point.y).expand(eps);
        self.edge_set
            .query(&probe)
            .into_iter()
            .filter(|&k| self.edges[k].shape.contains_point(point, eps))
            .collect()
    }

    /// Classify a point against this polygon.
    #[inline]
    pub fn point_location(&self, point: Vector2<T>, eps: T) -> Inclusion {
        point_location(self, point, eps)
    }

    /// `true` when the point is inside or on the boundary.
    pub fn contains_point(&self, point: Vector2<T>) -> bool {
        self.point_location(point, T::from(1e-5).unwrap()) != Inclusion::Outside
    }

    /// Boolean operation against another polygon with default options.
    #[inline]
    pub fn boolean(&self, other: &Polygon<T>, op: BooleanOp) -> Result<Polygon<T>, BooleanOpError> {
        self.boolean_opt(other, op, &BooleanOptions::new())
    }

    /// Boolean operation against another polygon.
    #[inline]
    pub fn boolean_opt(
        &self,
        other: &Polygon<T>,
        op: BooleanOp,
        options: &BooleanOptions<T>,
    ) -> Result<Polygon<T>, BooleanOpError> {
        polygon_boolean(self, other, op, options)
    }
}
