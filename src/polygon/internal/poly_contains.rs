//! Ray-shoot point classification.
//!
//! Single source of truth for every inclusion flag the boolean engine
//! sets: classify a point against a polygon by shooting a horizontal ray
//! and counting sign-changing boundary crossings.

use crate::core::math::Vector2;
use crate::core::traits::Real;
use crate::polygon::{EdgeKey, Inclusion, Polygon};
use crate::shape::{Ray, Shape};

/// Classify `point` against `polygon` as inside, outside, or on the
/// boundary.
///
/// Quick box reject, then a horizontal ray query against the polygon's
/// edge index. Any ray intersection coinciding with `point` short-circuits
/// to `Boundary`. Otherwise crossings are counted left to right:
///
/// * interior segment hits always cross (a collinear horizontal segment
///   contributes vertex events instead),
/// * interior arc hits cross unless the hit is the arc's extremal point
///   (tangential touch),
/// * a hit at a loop vertex counts only when the boundary enters and
///   leaves on opposite sides of the ray line, resolving runs collinear
///   with the ray by walking backwards to the last edge that left it.
///
/// Odd parity is inside.
pub fn point_location<T>(polygon: &Polygon<T>, point: Vector2<T>, eps: T) -> Inclusion
where
    T: Real,
{
    let bbox = match polygon.bbox() {
        Some(b) => b,
        None => return Inclusion::Outside,
    };
    if !bbox.expand(eps).contains_point(point.x, point.y) {
        return Inclusion::Outside;
    }

    let ray = Ray::new(point);
    let mut intersections: Vec<(Vector2<T>, EdgeKey)> = Vec::new();
    for k in polygon.edge_set.query(&ray.bbox(eps)) {
        // the candidate band contains every edge passing through the point
        // itself, so the boundary short-circuit is exact
        if polygon.edges[k].shape.contains_point(point, eps) {
            return Inclusion::Boundary;
        }
        for ip in ray.intersect_shape(&polygon.edges[k].shape, eps) {
            if ip.fuzzy_eq_eps(point, eps) {
                return Inclusion::Boundary;
            }
            intersections.push((ip, k));
        }
    }

    intersections.sort_by(|a, b| a.0.x.partial_cmp(&b.0.x).unwrap());

    // y side of a probe point relative to the ray line: -1 below, 1 above,
    // 0 when on it within tolerance
    let side = |probe: Vector2<T>| -> i8 {
        let dy = probe.y - point.y;
        if dy.fuzzy_eq_zero() {
            0
        } else if dy > T::zero() {
            1
        } else {
            -1
        }
    };

    let mut counter = 0usize;
    for &(ip, k) in intersections.iter() {
        let shape = &polygon.edges[k].shape;

        if ip.fuzzy_eq_eps(shape.start(), eps) {
            // vertex event; the same physical point also shows up as the
            // previous edge's end hit, which is skipped below, so it is
            // counted exactly once here
            let out_side = side(ip + shape.tangent_in_start());
            if out_side == 0 {
                // boundary continues along the ray; the vertex where it
                // finally leaves does the counting
                continue;
            }

            let mut in_side = 0i8;
            let mut prev = polygon.edges[k].prev;
            for _ in 0..polygon.edge_count() {
                let pe = &polygon.edges[prev];
                if !pe.length().fuzzy_eq_zero_eps(eps) {
                    in_side = side(ip + pe.shape.tangent_in_end());
                    if in_side != 0 {
                        break;
                    }
                }
                prev = pe.prev;
            }

            if in_side != 0 && in_side != out_side {
                counter += 1;
            }
        } else if ip.fuzzy_eq_eps(shape.end(), eps) {
            // counted by the next edge's start event
            continue;
        } else {
            match shape {
                Shape::Segment(_) => {
                    // interior hit of a non-horizontal segment always
                    // crosses (collinear segments only produce endpoint
                    // hits)
                    counter += 1;
                }
                Shape::Arc(_) => {
                    // tangential touch at the arc extremal point does not
                    // cross
                    if side(ip + shape.tangent_at(ip)) != 0 {
                        counter += 1;
                    }
                }
            }
        }
    }

    if counter % 2 == 1 {
        Inclusion::Inside
    } else {
        Inclusion::Outside
    }
}
