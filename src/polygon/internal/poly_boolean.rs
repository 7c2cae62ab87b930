//! The polygon boolean engine.
//!
//! A boolean operation clones both operands and runs a multi-pass state
//! machine over their face/edge graphs: intersection discovery and edge
//! splitting (see [super::poly_intersects]), inclusion classification via
//! ray shooting, boundary-conflict repair, operator-driven pruning of
//! boundary chains and whole faces, and finally reconstruction of closed
//! result loops spliced across the two graphs.

use super::poly_contains::point_location;
use super::poly_intersects::{
    dedup_int_points, face_groups, find_intersections, sorted_order, split_at_int_points, IntPoint,
};
use crate::core::math::Vector2;
use crate::core::traits::Real;
use crate::polygon::{
    BooleanOp, BooleanOpError, BooleanOptions, Edge, EdgeKey, FaceKey, Inclusion, Overlap, Polygon,
};
use crate::shape::Shape;
use slotmap::Key;
use std::collections::{HashMap, HashSet};

/// Perform a boolean operation between two polygons.
///
/// The operands are never mutated; subtraction reverses the clone of the
/// second operand and then shares the union/intersect machinery through
/// the pruning truth table.
pub fn polygon_boolean<T>(
    p1: &Polygon<T>,
    p2: &Polygon<T>,
    op: BooleanOp,
    options: &BooleanOptions<T>,
) -> Result<Polygon<T>, BooleanOpError>
where
    T: Real,
{
    let mut a = p1.clone();
    let mut b = p2.clone();
    if op == BooleanOp::Subtract {
        b.reverse();
    }

    let mut state = prepare(&mut a, &mut b, options)?;

    prune_chains(&mut a, &mut state.ips1, &state.order1, op, true)?;
    prune_untouched_faces(&mut a, &state.ips1, op, true);
    prune_chains(&mut b, &mut state.ips2, &state.order2, op, false)?;
    prune_untouched_faces(&mut b, &state.ips2, op, false);

    restore_result(&mut a, &b, &mut state.ips1, &mut state.ips2, options)?;

    for e in a.edges.values_mut() {
        e.reset_inclusion();
    }
    Ok(a)
}

/// Boundary curves of `p1` inside `p2` and of `p2` inside `p1`.
pub fn polygon_inner_clip<T>(
    p1: &Polygon<T>,
    p2: &Polygon<T>,
    options: &BooleanOptions<T>,
) -> Result<(Vec<Shape<T>>, Vec<Shape<T>>), BooleanOpError>
where
    T: Real,
{
    let mut a = p1.clone();
    let mut b = p2.clone();
    prepare(&mut a, &mut b, options)?;

    let shapes1 = a
        .edges
        .values()
        .filter(|e| {
            e.bv == Some(Inclusion::Inside)
                || (e.bv == Some(Inclusion::Boundary) && e.overlap == Some(Overlap::Same))
        })
        .map(|e| e.shape)
        .collect();
    let shapes2 = b
        .edges
        .values()
        .filter(|e| e.bv == Some(Inclusion::Inside))
        .map(|e| e.shape)
        .collect();
    Ok((shapes1, shapes2))
}

/// Boundary curves of `p1` outside `p2`.
pub fn polygon_outer_clip<T>(
    p1: &Polygon<T>,
    p2: &Polygon<T>,
    options: &BooleanOptions<T>,
) -> Result<Vec<Shape<T>>, BooleanOpError>
where
    T: Real,
{
    let mut a = p1.clone();
    let mut b = p2.clone();
    prepare(&mut a, &mut b, options)?;

    Ok(a.edges
        .values()
        .filter(|e| e.bv == Some(Inclusion::Outside))
        .map(|e| e.shape)
        .collect())
}

struct BooleanState<T> {
    ips1: Vec<IntPoint<T>>,
    ips2: Vec<IntPoint<T>>,
    order1: Vec<usize>,
    order2: Vec<usize>,
}

/// Stages 1-8: discovery, sorting, splitting, dedup, classification,
/// boundary repair, and overlap tagging. Leaves both polygons split at
/// every intersection with consistent inclusion flags on every edge.
fn prepare<T>(
    a: &mut Polygon<T>,
    b: &mut Polygon<T>,
    options: &BooleanOptions<T>,
) -> Result<BooleanState<T>, BooleanOpError>
where
    T: Real,
{
    let eps = options.pos_equal_eps;

    // 1-3: discover, sort, split
    let (mut ips1, mut ips2) = find_intersections(a, b, eps);
    let order1 = sorted_order(&ips1);
    split_at_int_points(a, &mut ips1, &order1, eps);
    let order2 = sorted_order(&ips2);
    split_at_int_points(b, &mut ips2, &order2, eps);

    // 4: filter numerical-noise duplicates
    let (mut ips1, mut ips2) = dedup_int_points(ips1, ips2);

    // 5: single-verdict classification of faces without intersections
    classify_untouched_faces(a, b, &ips1, eps);
    classify_untouched_faces(b, a, &ips2, eps);

    // 6: classify edges of touched faces, boundary-seeded at intersection
    // points
    seed_boundary_flags(a, &ips1);
    seed_boundary_flags(b, &ips2);
    classify_touched_edges(a, b, &ips1, eps);
    classify_touched_edges(b, a, &ips2, eps);

    // 7: repair inconsistent classifications until a pass changes nothing
    let mut passes = 0usize;
    loop {
        let repaired_a = fix_boundary_conflicts(a, b, &mut ips1, &mut ips2, options)?;
        let repaired_b = fix_boundary_conflicts(b, a, &mut ips2, &mut ips1, options)?;
        if !repaired_a && !repaired_b {
            break;
        }
        // a synthesized intersection added edges; classify whatever the
        // splits left unset before walking the chains again
        classify_touched_edges(a, b, &ips1, eps);
        classify_touched_edges(b, a, &ips2, eps);

        passes += 1;
        if passes > options.max_repair_passes {
            return Err(BooleanOpError::UnresolvedBoundaryConflict);
        }
    }

    let order1 = sorted_order(&ips1);
    let order2 = sorted_order(&ips2);

    // 8: mark coincident single-edge chains
    tag_overlaps(a, b, &ips1, &ips2, &order1, eps);

    Ok(BooleanState {
        ips1,
        ips2,
        order1,
        order2,
    })
}

/// A face with no recorded intersections is wholly inside, wholly outside,
/// or entirely on the boundary of the other polygon; one ray-shoot call
/// decides for every edge of the face.
fn classify_untouched_faces<T>(
    poly: &mut Polygon<T>,
    other: &Polygon<T>,
    ips: &[IntPoint<T>],
    eps: T,
) where
    T: Real,
{
    let touched: HashSet<FaceKey> = ips.iter().map(|ip| ip.face).collect();
    for fk in poly.face_keys() {
        if touched.contains(&fk) {
            continue;
        }
        let sample = poly.edges[poly.faces[fk].first].shape.midpoint();
        let verdict = point_location(other, sample, eps);
        for k in poly.face_edges(fk) {
            poly.edges[k].bv = Some(verdict);
        }
    }
}

/// Edges incident to an intersection point start as boundary at the shared
/// endpoint.
fn seed_boundary_flags<T>(poly: &mut Polygon<T>, ips: &[IntPoint<T>])
where
    T: Real,
{
    for ip in ips {
        if let Some(before) = ip.edge_before {
            if let Some(e) = poly.edges.get_mut(before) {
                e.bv_end = Some(Inclusion::Boundary);
            }
        }
        if let Some(after) = ip.edge_after {
            if let Some(e) = poly.edges.get_mut(after) {
                e.bv_start = Some(Inclusion::Boundary);
            }
        }
    }
}

/// Classify every still-unset edge of the faces holding intersection
/// points: both endpoints independently, then the midpoint when they
/// disagree (boundary-seeded endpoints leave the decision to the
/// midpoint).
fn classify_touched_edges<T>(poly: &mut Polygon<T>, other: &Polygon<T>, ips: &[IntPoint<T>], eps: T)
where
    T: Real,
{
    let touched: HashSet<FaceKey> = ips.iter().map(|ip| ip.face).collect();
    for fk in touched {
        if !poly.faces.contains_key(fk) {
            continue;
        }
        for k in poly.face_edges(fk) {
            if poly.edges[k].bv.is_some() {
                continue;
            }
            let bv_start = match poly.edges[k].bv_start {
                Some(v) => v,
                None => {
                    let v = point_location(other, poly.edges[k].start(), eps);
                    poly.edges[k].bv_start = Some(v);
                    v
                }
            };
            let bv_end = match poly.edges[k].bv_end {
                Some(v) => v,
                None => {
                    let v = point_location(other, poly.edges[k].end(), eps);
                    poly.edges[k].bv_end = Some(v);
                    v
                }
            };
            let bv = if bv_start == bv_end && bv_start != Inclusion::Boundary {
                bv_start
            } else {
                point_location(other, poly.edges[k].shape.midpoint(), eps)
            };
            poly.edges[k].bv = Some(bv);
        }
    }
}

/// Walk the chain `from ..= to` along `next` links.
fn collect_chain<T>(
    poly: &Polygon<T>,
    from: EdgeKey,
    to: EdgeKey,
) -> Result<Vec<EdgeKey>, BooleanOpError>
where
    T: Real,
{
    let mut out = Vec::new();
    let mut cur = from;
    let guard = poly.edge_count() + 1;
    for _ in 0..guard {
        out.push(cur);
        if cur == to {
            return Ok(out);
        }
        cur = poly.edges[cur].next;
        if cur.is_null() {
            break;
        }
    }
    Err(BooleanOpError::UnresolvedBoundaryConflict)
}

/// One pass of the boundary-conflict repair over every chain between
/// consecutive intersection points. Returns whether anything changed; the
/// caller loops until a pass is a no-op (bounded by
/// [BooleanOptions::max_repair_passes]).
fn fix_boundary_conflicts<T>(
    poly: &mut Polygon<T>,
    other: &mut Polygon<T>,
    ips: &mut Vec<IntPoint<T>>,
    other_ips: &mut Vec<IntPoint<T>>,
    options: &BooleanOptions<T>,
) -> Result<bool, BooleanOpError>
where
    T: Real,
{
    let order = sorted_order(ips);
    let groups = face_groups(ips, &order);
    let mut changed = false;

    for group in groups {
        let n = group.len();
        for idx in 0..n {
            let cur = group[idx];
            let next = group[(idx + 1) % n];
            let (Some(e_from), Some(e_to)) = (ips[cur].edge_after, ips[next].edge_before) else {
                continue;
            };
            let bv_from = poly.edges[e_from].bv;
            let bv_to = poly.edges[e_to].bv;

            match (bv_from, bv_to) {
                // (a) one end boundary, the other not: the boundary verdict
                // on a tiny end edge is noise, adopt the neighbor's value
                (Some(Inclusion::Boundary), Some(v)) if v != Inclusion::Boundary => {
                    poly.edges[e_from].bv = Some(v);
                    changed = true;
                }
                (Some(v), Some(Inclusion::Boundary)) if v != Inclusion::Boundary => {
                    poly.edges[e_to].bv = Some(v);
                    changed = true;
                }
                // (b) both ends boundary: interior edges arbitrate
                (Some(Inclusion::Boundary), Some(Inclusion::Boundary)) => {
                    if e_from == e_to {
                        continue;
                    }
                    let chain = collect_chain(poly, e_from, e_to)?;
                    let mut interior = None;
                    for &k in &chain[1..chain.len().saturating_sub(1)] {
                        match (interior, poly.edges[k].bv) {
                            (_, Some(Inclusion::Boundary)) | (_, None) => {}
                            (None, Some(v)) => interior = Some(v),
                            (Some(seen), Some(v)) if seen != v => {
                                return Err(BooleanOpError::UnresolvedBoundaryConflict);
                            }
                            _ => {}
                        }
                    }
                    if let Some(v) = interior {
                        poly.edges[e_from].bv = Some(v);
                        poly.edges[e_to].bv = Some(v);
                        changed = true;
                    }
                }
                // (c) inside on one end, outside on the other, with no
                // recorded intersection between: an intersection was missed
                // within tolerance, synthesize it and restart the pass
                (Some(Inclusion::Inside), Some(Inclusion::Outside))
                | (Some(Inclusion::Outside), Some(Inclusion::Inside)) => {
                    let chain = collect_chain(poly, e_from, e_to)?;
                    synthesize_missed_intersection(
                        poly, other, ips, other_ips, &chain, options,
                    )?;
                    return Ok(true);
                }
                _ => {}
            }
        }
    }

    Ok(changed)
}

/// Find the point of nearest approach between a conflicted chain and the
/// other polygon, record it as a new aligned intersection pair, and split
/// both polygons there.
fn synthesize_missed_intersection<T>(
    poly: &mut Polygon<T>,
    other: &mut Polygon<T>,
    ips: &mut Vec<IntPoint<T>>,
    other_ips: &mut Vec<IntPoint<T>>,
    chain: &[EdgeKey],
    options: &BooleanOptions<T>,
) -> Result<(), BooleanOpError>
where
    T: Real,
{
    let eps = options.pos_equal_eps;
    let repair_dist = options.repair_dist_factor * eps;

    let mut best: Option<(T, EdgeKey, EdgeKey, Vector2<T>, Vector2<T>)> = None;
    for &k in chain {
        let shape = poly.edges[k].shape;
        for ok in other.edge_set.query(&shape.bbox().expand(repair_dist)) {
            let (dist, conn) = shape.distance_to(&other.edges[ok].shape, eps);
            if dist > repair_dist {
                continue;
            }
            // a closest approach at an already recorded intersection point
            // (the chain's own endpoints foremost) repairs nothing
            if ips.iter().any(|ip| ip.point.fuzzy_eq_eps(conn.start, eps)) {
                continue;
            }
            if best.as_ref().map_or(true, |b| dist < b.0) {
                best = Some((dist, k, ok, conn.start, conn.end));
            }
        }
    }

    let Some((_, k, ok, pt_self, pt_other)) = best else {
        // nothing within tolerance to repair against
        return Err(BooleanOpError::UnresolvedBoundaryConflict);
    };

    let self_sort_id = find_face_sort_id(ips, poly.edges[k].face);
    let other_sort_id = find_face_sort_id(other_ips, other.edges[ok].face);
    let rec_self = split_for_repair(poly, k, pt_self, self_sort_id, eps);
    let rec_other = split_for_repair(other, ok, pt_other, other_sort_id, eps);
    ips.push(rec_self);
    other_ips.push(rec_other);
    Ok(())
}

fn find_face_sort_id<T>(ips: &[IntPoint<T>], face: Option<FaceKey>) -> usize
where
    T: Real,
{
    let face = face.expect("repair runs before faces are torn down");
    ips.iter()
        .find(|ip| ip.face == face)
        .map(|ip| ip.face_sort_id)
        .unwrap_or_else(|| {
            ips.iter().map(|ip| ip.face_sort_id + 1).max().unwrap_or(0)
        })
}

/// Split one polygon at a synthesized intersection point and build its
/// record. The adjacent pieces get their inclusion cleared (boundary
/// seeded at the new vertex) so the next classification pass recomputes
/// them.
fn split_for_repair<T>(
    poly: &mut Polygon<T>,
    edge: EdgeKey,
    point: Vector2<T>,
    face_sort_id: usize,
    eps: T,
) -> IntPoint<T>
where
    T: Real,
{
    let face = poly.edges[edge].face.expect("chain edges carry faces");
    let arc_len = poly.edges[edge].arc_length + poly.edges[edge].shape.dist_from_start(point);
    let is_vertex_start = point.fuzzy_eq_eps(poly.edges[edge].start(), eps);
    let is_vertex_end = point.fuzzy_eq_eps(poly.edges[edge].end(), eps);

    let before = poly.add_vertex(edge, point, eps);
    let after = poly.edges[before].next;

    for k in [before, after] {
        let e = &mut poly.edges[k];
        e.bv = None;
    }
    poly.edges[before].bv_end = Some(Inclusion::Boundary);
    poly.edges[after].bv_start = Some(Inclusion::Boundary);

    IntPoint {
        point,
        arc_len,
        on_edge: edge,
        edge_before: Some(before),
        edge_after: Some(after),
        face,
        is_vertex_start,
        is_vertex_end,
        face_sort_id,
        new_face: None,
    }
}

/// Mark single-edge boundary chains that coincide with a single edge of
/// the other polygon, recording whether the two runs point the same way.
fn tag_overlaps<T>(
    a: &mut Polygon<T>,
    b: &mut Polygon<T>,
    ips1: &[IntPoint<T>],
    ips2: &[IntPoint<T>],
    order1: &[usize],
    eps: T,
) where
    T: Real,
{
    let groups = face_groups(ips1, order1);
    for group in groups {
        let n = group.len();
        for idx in 0..n {
            let cur = group[idx];
            let next = group[(idx + 1) % n];
            let (Some(e_from), Some(e_to)) = (ips1[cur].edge_after, ips1[next].edge_before) else {
                continue;
            };
            if e_from != e_to {
                continue;
            }
            let mid = a.edges[e_from].shape.midpoint();
            let p_next = ips1[next].point;

            // the coincident b edge leaves the shared point either forwards
            // (same direction) or ends there coming from the next point
            // (opposite direction)
            let same = ips2[cur].edge_after.filter(|&k| {
                b.edges[k].end().fuzzy_eq_eps(p_next, eps)
                    && b.edges[k].shape.contains_point(mid, eps)
            });
            let opposite = ips2[cur].edge_before.filter(|&k| {
                b.edges[k].start().fuzzy_eq_eps(p_next, eps)
                    && b.edges[k].shape.contains_point(mid, eps)
            });

            let (other_edge, overlap) = match (same, opposite) {
                (Some(k), _) => (k, Overlap::Same),
                (None, Some(k)) => (k, Overlap::Opposite),
                (None, None) => continue,
            };

            a.edges[e_from].overlap = Some(overlap);
            a.edges[e_from].bv = Some(Inclusion::Boundary);
            b.edges[other_edge].overlap = Some(overlap);
            b.edges[other_edge].bv = Some(Inclusion::Boundary);
        }
    }
}

/// Decide chain removal per the operator truth table.
fn chain_is_removed<T>(
    poly: &Polygon<T>,
    e_from: EdgeKey,
    e_to: EdgeKey,
    op: BooleanOp,
    is_result: bool,
) -> Result<bool, BooleanOpError>
where
    T: Real,
{
    let bv_from = poly.edges[e_from].bv;
    let bv_to = poly.edges[e_to].bv;

    let bv = match (bv_from, bv_to) {
        (Some(Inclusion::Boundary), Some(v)) | (Some(v), Some(Inclusion::Boundary)) => v,
        (Some(u), Some(v)) if u == v => v,
        // inside/outside mismatch surviving repair is unresolvable
        (Some(_), Some(_)) => return Err(BooleanOpError::UnresolvedBoundaryConflict),
        _ => return Ok(false),
    };

    let removed = match bv {
        Inclusion::Inside => match op {
            BooleanOp::Union => true,
            BooleanOp::Intersect => false,
            BooleanOp::Subtract => is_result,
        },
        Inclusion::Outside => match op {
            BooleanOp::Union => false,
            BooleanOp::Intersect => true,
            BooleanOp::Subtract => !is_result,
        },
        Inclusion::Boundary => match poly.edges[e_from].overlap {
            // coincident chains running against each other cancel
            Some(Overlap::Opposite) => true,
            // one copy of a shared boundary survives, on the result side
            Some(Overlap::Same) | None => !is_result,
        },
    };
    Ok(removed)
}

/// Stage 9: delete irrelevant chains between consecutive intersection
/// points, clearing the dangling edge references on their records.
fn prune_chains<T>(
    poly: &mut Polygon<T>,
    ips: &mut [IntPoint<T>],
    order: &[usize],
    op: BooleanOp,
    is_result: bool,
) -> Result<(), BooleanOpError>
where
    T: Real,
{
    let groups = face_groups(ips, order);
    for group in groups {
        let n = group.len();
        for idx in 0..n {
            let cur = group[idx];
            let next = group[(idx + 1) % n];
            let (Some(e_from), Some(e_to)) = (ips[cur].edge_after, ips[next].edge_before) else {
                continue;
            };
            if !chain_is_removed(poly, e_from, e_to, op, is_result)? {
                continue;
            }
            let chain = collect_chain(poly, e_from, e_to)?;
            for k in chain {
                poly.remove_edge(k);
            }
            ips[cur].edge_after = None;
            ips[next].edge_before = None;
        }
    }

    // drop references that pointed into removed chains (self-touching
    // points can reference an edge deleted through another record)
    for ip in ips.iter_mut() {
        if let Some(k) = ip.edge_before {
            if !poly.edges.contains_key(k) {
                ip.edge_before = None;
            }
        }
        if let Some(k) = ip.edge_after {
            if !poly.edges.contains_key(k) {
                ip.edge_after = None;
            }
        }
    }
    Ok(())
}

/// Stage 10: delete untouched faces whose single verdict makes them
/// irrelevant for the operator.
fn prune_untouched_faces<T>(poly: &mut Polygon<T>, ips: &[IntPoint<T>], op: BooleanOp, is_result: bool)
where
    T: Real,
{
    let touched: HashSet<FaceKey> = ips.iter().map(|ip| ip.face).collect();
    for fk in poly.face_keys() {
        if touched.contains(&fk) {
            continue;
        }
        let verdict = poly.edges[poly.faces[fk].first].bv;
        let removed = match verdict {
            Some(Inclusion::Inside) => match op {
                BooleanOp::Union => true,
                BooleanOp::Intersect => false,
                BooleanOp::Subtract => is_result,
            },
            Some(Inclusion::Outside) => match op {
                BooleanOp::Union => false,
                BooleanOp::Intersect => true,
                BooleanOp::Subtract => !is_result,
            },
            Some(Inclusion::Boundary) => !is_result,
            None => false,
        };
        if removed {
            poly.remove_face(fk);
        }
    }
}

/// Stage 11: materialize the result into `a`.
///
/// Copies every surviving edge (and wholly surviving face) of `b` into
/// `a`'s arenas, splices dangling chain ends across the two polygons at
/// each intersection point, then rebuilds faces by walking the
/// reconnected loops.
fn restore_result<T>(
    a: &mut Polygon<T>,
    b: &Polygon<T>,
    ips1: &mut [IntPoint<T>],
    ips2: &mut [IntPoint<T>],
    options: &BooleanOptions<T>,
) -> Result<(), BooleanOpError>
where
    T: Real,
{
    let eps = options.pos_equal_eps;
    let touched_b: HashSet<FaceKey> = ips2.iter().map(|ip| ip.face).collect();

    // wholly surviving b faces copy over as-is
    for fk in b.face_keys() {
        if touched_b.contains(&fk) {
            continue;
        }
        let keys = b.face_edges(fk);
        let new_keys: Vec<EdgeKey> = keys
            .iter()
            .map(|&k| a.edges.insert(Edge::new(b.edges[k].shape)))
            .collect();
        let n = new_keys.len();
        for (i, &nk) in new_keys.iter().enumerate() {
            a.edges[nk].next = new_keys[(i + 1) % n];
            a.edges[nk].prev = new_keys[(i + n - 1) % n];
            let bbox = a.edges[nk].bbox();
            a.edge_set.add(bbox, nk);
        }
        a.register_face(new_keys[0], new_keys[n - 1]);
    }

    // surviving edges of intersected b faces come over with their links
    // remapped; gaps left by pruning are reconnected below
    let mut key_map: HashMap<EdgeKey, EdgeKey> = HashMap::new();
    let survivors: Vec<EdgeKey> = b
        .edges
        .iter()
        .filter(|(_, e)| e.face.map_or(false, |f| touched_b.contains(&f)))
        .map(|(k, _)| k)
        .collect();
    for &k in &survivors {
        let nk = a.edges.insert(Edge::new(b.edges[k].shape));
        let bbox = a.edges[nk].bbox();
        a.edge_set.add(bbox, nk);
        key_map.insert(k, nk);
    }
    for &k in &survivors {
        let nk = key_map[&k];
        a.edges[nk].next = key_map.get(&b.edges[k].next).copied().unwrap_or_else(EdgeKey::null);
        a.edges[nk].prev = key_map.get(&b.edges[k].prev).copied().unwrap_or_else(EdgeKey::null);
    }
    for ip in ips2.iter_mut() {
        ip.edge_before = ip.edge_before.and_then(|k| key_map.get(&k).copied());
        ip.edge_after = ip.edge_after.and_then(|k| key_map.get(&k).copied());
    }

    // old faces referenced by intersection points are gone; their edges
    // get new loops below
    let touched_a: HashSet<FaceKey> = ips1.iter().map(|ip| ip.face).collect();
    for fk in touched_a {
        a.unregister_face(fk);
    }

    splice_dangling_ends(a, ips1, ips2, eps)?;
    rebuild_faces(a, ips1, ips2)
}

/// Reconnect every dangling chain end at each intersection point with a
/// continuation from the other polygon (or, failing that, another
/// same-coordinate intersection point, which handles tangential
/// self-touching).
fn splice_dangling_ends<T>(
    a: &mut Polygon<T>,
    ips1: &[IntPoint<T>],
    ips2: &[IntPoint<T>],
    eps: T,
) -> Result<(), BooleanOpError>
where
    T: Real,
{
    let mut claimed: HashSet<EdgeKey> = HashSet::new();
    // outgoing edges of intact through-links are not available as
    // continuations
    for ip in ips1.iter().chain(ips2.iter()) {
        if ip.edge_before.is_some() {
            if let Some(after) = ip.edge_after {
                claimed.insert(after);
            }
        }
    }

    let search_continuation = |point: Vector2<T>, claimed: &HashSet<EdgeKey>| -> Option<EdgeKey> {
        ips1.iter()
            .chain(ips2.iter())
            .filter(|ip| ip.point.fuzzy_eq_eps(point, eps))
            .filter_map(|ip| ip.edge_after)
            .find(|k| !claimed.contains(k))
    };

    let mut links: Vec<(EdgeKey, EdgeKey)> = Vec::new();
    for i in 0..ips1.len() {
        for (this, that) in [(&ips1[i], &ips2[i]), (&ips2[i], &ips1[i])] {
            let (Some(inc), None) = (this.edge_before, this.edge_after) else {
                continue;
            };
            let cont = that
                .edge_after
                .filter(|k| !claimed.contains(k))
                .or_else(|| search_continuation(this.point, &claimed));
            let Some(cont) = cont else {
                return Err(BooleanOpError::InfiniteLoop);
            };
            claimed.insert(cont);
            links.push((inc, cont));
        }
    }

    for (inc, cont) in links {
        a.edges[inc].next = cont;
        a.edges[cont].prev = inc;
    }
    Ok(())
}

/// Walk forward from each intersection point's outgoing edge, building a
/// new face per reconnected loop; every other point resolving into the
/// same loop is tagged with it so nothing is rebuilt twice.
fn rebuild_faces<T>(
    a: &mut Polygon<T>,
    ips1: &mut [IntPoint<T>],
    ips2: &mut [IntPoint<T>],
) -> Result<(), BooleanOpError>
where
    T: Real,
{
    for i in 0..ips1.len() + ips2.len() {
        let ip = if i < ips1.len() {
            &ips1[i]
        } else {
            &ips2[i - ips1.len()]
        };
        let Some(start) = ip.edge_after else {
            continue;
        };
        if !a.edges.contains_key(start) || a.edges[start].face.is_some() {
            continue;
        }

        // forward walk with an infinite-loop guard
        let guard = a.edge_count() + 1;
        let mut cur = start;
        let mut last = start;
        let mut steps = 0usize;
        loop {
            steps += 1;
            if steps > guard {
                return Err(BooleanOpError::InfiniteLoop);
            }
            let next = a.edges[cur].next;
            if next.is_null() || !a.edges.contains_key(next) {
                return Err(BooleanOpError::InfiniteLoop);
            }
            if next == start {
                last = cur;
                break;
            }
            cur = next;
        }
        let fk = a.register_face(start, last);

        for ip in ips1.iter_mut().chain(ips2.iter_mut()) {
            if let Some(after) = ip.edge_after {
                if a.edges.get(after).and_then(|e| e.face) == Some(fk) {
                    ip.new_face = Some(fk);
                }
            }
        }
    }

    // nothing reachable should be left outside a face
    let orphans: Vec<EdgeKey> = a
        .edges
        .iter()
        .filter(|(_, e)| e.face.is_none())
        .map(|(k, _)| k)
        .collect();
    debug_assert!(orphans.is_empty(), "orphan edges after face rebuild");
    for k in orphans {
        a.remove_edge(k);
    }
    Ok(())
}
