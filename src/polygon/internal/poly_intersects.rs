//! Intersection discovery between two polygons and the bookkeeping that
//! follows it: sorting, edge splitting, and duplicate filtering.
//!
//! Intersections are recorded as two index-aligned arrays of
//! [IntPoint] records, one per polygon, so `ips1[i]` and `ips2[i]`
//! always describe the same physical intersection seen from each side.

use crate::core::math::Vector2;
use crate::core::traits::Real;
use crate::polygon::{EdgeKey, FaceKey, Polygon};
use std::collections::HashMap;

/// One intersection point as seen from one of the two polygons.
///
/// Lives only for the duration of one boolean operation call.
#[derive(Debug, Clone)]
pub struct IntPoint<T> {
    /// Geometric position.
    pub point: Vector2<T>,
    /// Position along the owning face boundary, used as the sort
    /// coordinate.
    pub arc_len: T,
    /// Edge the point falls on before splitting.
    pub on_edge: EdgeKey,
    /// After splitting: the edge ending at this point. Cleared when its
    /// chain is pruned.
    pub edge_before: Option<EdgeKey>,
    /// After splitting: the edge starting at this point. Cleared when its
    /// chain is pruned.
    pub edge_after: Option<EdgeKey>,
    /// Owning face at discovery time.
    pub face: FaceKey,
    /// Point coincides with the current edge's start vertex.
    pub is_vertex_start: bool,
    /// Point coincides with the current edge's end vertex.
    pub is_vertex_end: bool,
    /// Stable first-seen id of `face`, disambiguating the sort for
    /// multi-face polygons.
    pub face_sort_id: usize,
    /// Face key of the rebuilt loop this point resolved to during
    /// reconstruction.
    pub new_face: Option<FaceKey>,
}

/// Discover all intersections between the boundaries of `p1` and `p2`.
///
/// For every edge of `p1` the edge index of `p2` is range-queried with the
/// edge box; exact shape intersections of each candidate pair append one
/// aligned [IntPoint] record pair per point. Coincident runs contribute
/// their two endpoints.
pub fn find_intersections<T>(
    p1: &Polygon<T>,
    p2: &Polygon<T>,
    eps: T,
) -> (Vec<IntPoint<T>>, Vec<IntPoint<T>>)
where
    T: Real,
{
    let mut ips1 = Vec::new();
    let mut ips2 = Vec::new();
    let mut face_ids1: HashMap<FaceKey, usize> = HashMap::new();
    let mut face_ids2: HashMap<FaceKey, usize> = HashMap::new();

    for (k1, e1) in p1.edges.iter() {
        for k2 in p2.edge_set.query(&e1.bbox().expand(eps)) {
            let points = e1.shape.intersect(&p2.edges[k2].shape, eps);
            for pt in points {
                ips1.push(make_int_point(p1, k1, pt, &mut face_ids1, eps));
                ips2.push(make_int_point(p2, k2, pt, &mut face_ids2, eps));
            }
        }
    }

    (ips1, ips2)
}

fn make_int_point<T>(
    poly: &Polygon<T>,
    edge: EdgeKey,
    point: Vector2<T>,
    face_ids: &mut HashMap<FaceKey, usize>,
    eps: T,
) -> IntPoint<T>
where
    T: Real,
{
    let e = &poly.edges[edge];
    let face = e.face.expect("edges carry a face before the boolean splits");
    let next_id = face_ids.len();
    let face_sort_id = *face_ids.entry(face).or_insert(next_id);
    IntPoint {
        point,
        arc_len: e.arc_length + e.shape.dist_from_start(point),
        on_edge: edge,
        edge_before: None,
        edge_after: None,
        face,
        is_vertex_start: point.fuzzy_eq_eps(e.start(), eps),
        is_vertex_end: point.fuzzy_eq_eps(e.end(), eps),
        face_sort_id,
        new_face: None,
    }
}

/// Indexes of `ips` sorted by `(face_sort_id, arc_len)`.
///
/// The record arrays themselves are never reordered (that would break the
/// cross-polygon index alignment); all face-order walks go through an
/// order vector like this one.
pub fn sorted_order<T>(ips: &[IntPoint<T>]) -> Vec<usize>
where
    T: Real,
{
    let mut order: Vec<usize> = (0..ips.len()).collect();
    order.sort_by(|&a, &b| {
        ips[a]
            .face_sort_id
            .cmp(&ips[b].face_sort_id)
            .then(ips[a].arc_len.partial_cmp(&ips[b].arc_len).unwrap())
    });
    order
}

/// Runs of `order` indexes sharing one face, in sorted order.
pub fn face_groups<T>(ips: &[IntPoint<T>], order: &[usize]) -> Vec<Vec<usize>>
where
    T: Real,
{
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for &i in order {
        match groups.last_mut() {
            Some(group) if ips[group[0]].face == ips[i].face => group.push(i),
            _ => groups.push(vec![i]),
        }
    }
    groups
}

/// Split the polygon's edges at every intersection point, rewriting
/// `edge_before`/`edge_after` to the adjacent pieces.
///
/// Points are processed in face/arc-length order; `add_vertex` keeps the
/// original edge key for the tail piece, so records of later points on the
/// same edge stay valid. `is_vertex` flags are recomputed first since an
/// earlier split shifts what the edge's start vertex is.
pub fn split_at_int_points<T>(poly: &mut Polygon<T>, ips: &mut [IntPoint<T>], order: &[usize], eps: T)
where
    T: Real,
{
    for &i in order {
        let point = ips[i].point;
        let on_edge = ips[i].on_edge;
        ips[i].is_vertex_start = point.fuzzy_eq_eps(poly.edges[on_edge].start(), eps);
        ips[i].is_vertex_end = point.fuzzy_eq_eps(poly.edges[on_edge].end(), eps);

        let before = poly.add_vertex(on_edge, point, eps);
        let after = poly.edges[before].next;
        ips[i].edge_before = Some(before);
        ips[i].edge_after = Some(after);
    }
}

/// Filter duplicate intersection records.
///
/// Two records are duplicates exactly when they resolved to the identical
/// `(edge_before, edge_after)` pair on *both* polygons: numerical noise
/// where one geometric point was discovered from different edge pairs.
/// Both aligned arrays are filtered together so the alignment survives.
pub fn dedup_int_points<T>(
    ips1: Vec<IntPoint<T>>,
    ips2: Vec<IntPoint<T>>,
) -> (Vec<IntPoint<T>>, Vec<IntPoint<T>>)
where
    T: Real,
{
    debug_assert_eq!(ips1.len(), ips2.len());
    let mut seen: HashMap<(EdgeKey, EdgeKey, EdgeKey, EdgeKey), usize> = HashMap::new();
    let mut keep = vec![true; ips1.len()];
    for i in 0..ips1.len() {
        let key = (
            ips1[i].edge_before.expect("split before dedup"),
            ips1[i].edge_after.expect("split before dedup"),
            ips2[i].edge_before.expect("split before dedup"),
            ips2[i].edge_after.expect("split before dedup"),
        );
        if seen.contains_key(&key) {
            keep[i] = false;
        } else {
            seen.insert(key, i);
        }
    }

    let filter = |ips: Vec<IntPoint<T>>| -> Vec<IntPoint<T>> {
        ips.into_iter()
            .zip(keep.iter())
            .filter_map(|(ip, &k)| if k { Some(ip) } else { None })
            .collect()
    };
    (filter(ips1), filter(ips2))
}
