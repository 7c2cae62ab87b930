//! Intersection math for the shape primitives.
//!
//! The parametric line/circle solvers work on raw points and radii; the
//! [shape_shape_intr] dispatch applies segment extents and arc sweeps on
//! top of them.

use super::{Arc, Segment, Shape};
use crate::core::math::{angle, min_max, parametric_from_point, point_from_parametric, Vector2};
use crate::core::traits::Real;

/// Result of intersecting two line segments parametrically.
#[derive(Debug, Copy, Clone)]
pub enum LineLineIntr<T> {
    /// Parallel (or degenerate distinct) segments, no intersect.
    NoIntersect,
    /// Single intersect within both segments.
    TrueIntersect { seg1_t: T, seg2_t: T },
    /// Intersect exists only by extending one or both segments.
    FalseIntersect { seg1_t: T, seg2_t: T },
    /// Collinear segments coinciding over a run, parametrized on the second
    /// segment.
    Overlapping { seg2_t0: T, seg2_t1: T },
}

/// Finds the intersects between two line segments `v1->v2` and `u1->u2`
/// using the parametric equation `P(t) = p0 + t * (p1 - p0)`.
///
/// Parametric values are scaled by segment length before fuzzy range checks
/// so `epsilon` is applied at position scale.
pub fn line_line_intr<T>(
    v1: Vector2<T>,
    v2: Vector2<T>,
    u1: Vector2<T>,
    u2: Vector2<T>,
    epsilon: T,
) -> LineLineIntr<T>
where
    T: Real,
{
    use LineLineIntr::*;

    let v = v2 - v1;
    let u = u2 - u1;
    let v_pdot_u = v.perp_dot(u);
    let w = v1 - u1;

    let seg1_length = v.length();
    let seg2_length = u.length();

    if !v_pdot_u.fuzzy_eq_zero_eps(epsilon) {
        // not parallel/collinear
        let seg1_t = u.perp_dot(w) / v_pdot_u;
        let seg2_t = v.perp_dot(w) / v_pdot_u;
        if !(seg1_t * seg1_length).fuzzy_in_range_eps(T::zero(), seg1_length, epsilon)
            || !(seg2_t * seg2_length).fuzzy_in_range_eps(T::zero(), seg2_length, epsilon)
        {
            return FalseIntersect { seg1_t, seg2_t };
        }
        return TrueIntersect { seg1_t, seg2_t };
    }

    // parallel and possibly collinear
    if !v.perp_dot(w).fuzzy_eq_zero_eps(epsilon) || !u.perp_dot(w).fuzzy_eq_zero_eps(epsilon) {
        return NoIntersect;
    }

    let v_is_point = v1.fuzzy_eq_eps(v2, epsilon);
    let u_is_point = u1.fuzzy_eq_eps(u2, epsilon);

    if v_is_point && u_is_point {
        if v1.fuzzy_eq_eps(u1, epsilon) {
            return TrueIntersect {
                seg1_t: T::zero(),
                seg2_t: T::zero(),
            };
        }
        return NoIntersect;
    }

    if v_is_point {
        let seg2_t = parametric_from_point(u1, u2, v1, epsilon);
        if (seg2_t * seg2_length).fuzzy_in_range_eps(T::zero(), seg2_length, epsilon) {
            return TrueIntersect {
                seg1_t: T::zero(),
                seg2_t,
            };
        }
        return NoIntersect;
    }

    if u_is_point {
        let seg1_t = parametric_from_point(v1, v2, u1, epsilon);
        if (seg1_t * seg1_length).fuzzy_in_range_eps(T::zero(), seg1_length, epsilon) {
            return TrueIntersect {
                seg1_t,
                seg2_t: T::zero(),
            };
        }
        return NoIntersect;
    }

    // collinear, project seg1 end points onto seg2 parametrically
    let w2 = v2 - u1;
    let (mut seg2_t0, mut seg2_t1) = if u.x.abs() > u.y.abs() {
        (w.x / u.x, w2.x / u.x)
    } else {
        (w.y / u.y, w2.y / u.y)
    };

    if seg2_t0 > seg2_t1 {
        std::mem::swap(&mut seg2_t0, &mut seg2_t1);
    }

    // sticky range check to prefer treating near-touches as intersects
    if !(seg2_t0 * seg2_length).fuzzy_lt_eps(seg2_length, epsilon)
        || !(seg2_t1 * seg2_length).fuzzy_gt_eps(T::zero(), epsilon)
    {
        return NoIntersect;
    }

    seg2_t0 = num_traits::real::Real::max(seg2_t0, T::zero());
    seg2_t1 = num_traits::real::Real::min(seg2_t1, T::one());

    if ((seg2_t1 - seg2_t0) * seg2_length).fuzzy_eq_zero_eps(epsilon) {
        // segments touch end to end at a single point
        let seg1_t = if v1.fuzzy_eq_eps(u1, epsilon) || v1.fuzzy_eq_eps(u2, epsilon) {
            T::zero()
        } else {
            T::one()
        };
        return TrueIntersect {
            seg1_t,
            seg2_t: seg2_t0,
        };
    }

    Overlapping { seg2_t0, seg2_t1 }
}

/// Result of intersecting a line segment with a circle, parametrized on the
/// segment.
#[derive(Debug, Copy, Clone)]
pub enum LineCircleIntr<T> {
    NoIntersect,
    /// Single (tangent) touch.
    TangentIntersect { t0: T },
    TwoIntersects { t0: T, t1: T },
}

/// Finds the intersects between the segment `p0->p1` (extended as needed;
/// callers range check the returned parametric values) and the circle.
pub fn line_circle_intr<T>(
    p0: Vector2<T>,
    p1: Vector2<T>,
    radius: T,
    circle_center: Vector2<T>,
    epsilon: T,
) -> LineCircleIntr<T>
where
    T: Real,
{
    // Solved geometrically with the circle shifted to the origin and the
    // segment as a line Ax + By + C = 0, which is more numerically stable
    // than the quadratic in t.
    use LineCircleIntr::*;

    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;

    if p0.fuzzy_eq_eps(p1, epsilon) {
        // degenerate segment, test the point against the circle
        let d = p0.distance_to(circle_center);
        if d.fuzzy_eq_eps(radius, epsilon) {
            return TangentIntersect { t0: T::zero() };
        }
        return NoIntersect;
    }

    let p0_shifted = p0 - circle_center;
    let p1_shifted = p1 - circle_center;

    let (a, b, c) = if dx.fuzzy_eq_zero() {
        // vertical line
        let x_pos = (p1_shifted.x + p0_shifted.x) / T::two();
        (T::one(), T::zero(), -x_pos)
    } else {
        let m = dy / dx;
        (m, -T::one(), p1_shifted.y - m * p1_shifted.x)
    };

    let a2_b2 = a * a + b * b;
    let shortest_dist = c.abs() / a2_b2.sqrt();

    if shortest_dist > radius + epsilon {
        return NoIntersect;
    }

    // foot of the perpendicular, shifted back to real coordinates
    let x0 = -a * c / a2_b2 + circle_center.x;
    let y0 = -b * c / a2_b2 + circle_center.y;

    if shortest_dist.fuzzy_eq_eps(radius, epsilon) {
        let t0 = parametric_from_point(p0, p1, Vector2::new(x0, y0), epsilon);
        return TangentIntersect { t0 };
    }

    let d = radius * radius - c * c / a2_b2;
    // abs to avoid NaN from a tiny negative under the sqrt
    let mult = (d / a2_b2).abs().sqrt();

    let sol1 = parametric_from_point(
        p0,
        p1,
        Vector2::new(x0 + b * mult, y0 - a * mult),
        epsilon,
    );
    let sol2 = parametric_from_point(
        p0,
        p1,
        Vector2::new(x0 - b * mult, y0 + a * mult),
        epsilon,
    );
    let (t0, t1) = min_max(sol1, sol2);
    TwoIntersects { t0, t1 }
}

/// Result of intersecting two circles.
#[derive(Debug, Copy, Clone)]
pub enum CircleCircleIntr<T> {
    NoIntersect,
    TangentIntersect { point: Vector2<T> },
    TwoIntersects { point1: Vector2<T>, point2: Vector2<T> },
    /// Same circle.
    Overlapping,
}

/// Finds the intersects between two circles.
pub fn circle_circle_intr<T>(
    radius1: T,
    center1: Vector2<T>,
    radius2: T,
    center2: Vector2<T>,
    epsilon: T,
) -> CircleCircleIntr<T>
where
    T: Real,
{
    use CircleCircleIntr::*;

    let cv = center2 - center1;
    let d2 = cv.dot(cv);
    let d = d2.sqrt();

    if d.fuzzy_eq_zero_eps(epsilon) {
        if radius1.fuzzy_eq_eps(radius2, epsilon) {
            return Overlapping;
        }
        return NoIntersect;
    }

    if !d.fuzzy_lt_eps(radius1 + radius2, epsilon) || !d.fuzzy_gt_eps((radius1 - radius2).abs(), epsilon)
    {
        return NoIntersect;
    }

    let rad1_sq = radius1 * radius1;
    let a = (rad1_sq - radius2 * radius2 + d2) / (T::two() * d);
    let foot = center1 + cv.scale(a / d);
    let diff = rad1_sq - a * a;

    if diff < T::zero() {
        return TangentIntersect { point: foot };
    }

    let h_over_d = diff.sqrt() / d;
    let x_term = h_over_d * cv.y;
    let y_term = h_over_d * cv.x;

    let pt1 = Vector2::new(foot.x + x_term, foot.y - y_term);
    let pt2 = Vector2::new(foot.x - x_term, foot.y + y_term);

    if pt1.fuzzy_eq_eps(pt2, epsilon) {
        return TangentIntersect { point: pt1 };
    }

    TwoIntersects {
        point1: pt1,
        point2: pt2,
    }
}

/// Result of intersecting two boundary shapes.
#[derive(Debug, Copy, Clone)]
pub enum ShapeIntr<T> {
    None,
    One { point: Vector2<T> },
    Two {
        point1: Vector2<T>,
        point2: Vector2<T>,
    },
    /// Shapes coincide over a run of positive length bounded by the two
    /// points.
    Overlap {
        point1: Vector2<T>,
        point2: Vector2<T>,
    },
}

/// Finds the intersects between two boundary shapes.
pub fn shape_shape_intr<T>(s1: &Shape<T>, s2: &Shape<T>, eps: T) -> ShapeIntr<T>
where
    T: Real,
{
    match (s1, s2) {
        (Shape::Segment(a), Shape::Segment(b)) => seg_seg_intr(a, b, eps),
        (Shape::Segment(a), Shape::Arc(b)) => seg_arc_intr(a, b, eps),
        (Shape::Arc(a), Shape::Segment(b)) => seg_arc_intr(b, a, eps),
        (Shape::Arc(a), Shape::Arc(b)) => arc_arc_intr(a, b, eps),
    }
}

fn seg_seg_intr<T>(a: &Segment<T>, b: &Segment<T>, eps: T) -> ShapeIntr<T>
where
    T: Real,
{
    match line_line_intr(a.start, a.end, b.start, b.end, eps) {
        LineLineIntr::NoIntersect | LineLineIntr::FalseIntersect { .. } => ShapeIntr::None,
        LineLineIntr::TrueIntersect { seg1_t, .. } => ShapeIntr::One {
            point: point_from_parametric(a.start, a.end, seg1_t),
        },
        LineLineIntr::Overlapping { seg2_t0, seg2_t1 } => {
            let point1 = point_from_parametric(b.start, b.end, seg2_t0);
            let point2 = point_from_parametric(b.start, b.end, seg2_t1);
            if point1.fuzzy_eq_eps(point2, eps) {
                ShapeIntr::One { point: point1 }
            } else {
                ShapeIntr::Overlap { point1, point2 }
            }
        }
    }
}

fn seg_arc_intr<T>(seg: &Segment<T>, arc: &Arc<T>, eps: T) -> ShapeIntr<T>
where
    T: Real,
{
    let seg_len = seg.length();
    let point_on_both = |t: T| -> Option<Vector2<T>> {
        if !(t * seg_len).fuzzy_in_range_eps(T::zero(), seg_len, eps) {
            return None;
        }
        let p = point_from_parametric(seg.start, seg.end, t);
        if arc.angle_within_sweep(angle(arc.center, p), eps) {
            Some(p)
        } else {
            None
        }
    };

    match line_circle_intr(seg.start, seg.end, arc.radius, arc.center, eps) {
        LineCircleIntr::NoIntersect => ShapeIntr::None,
        LineCircleIntr::TangentIntersect { t0 } => match point_on_both(t0) {
            Some(point) => ShapeIntr::One { point },
            None => ShapeIntr::None,
        },
        LineCircleIntr::TwoIntersects { t0, t1 } => {
            match (point_on_both(t0), point_on_both(t1)) {
                (None, None) => ShapeIntr::None,
                (Some(point), None) | (None, Some(point)) => ShapeIntr::One { point },
                (Some(point1), Some(point2)) => ShapeIntr::Two { point1, point2 },
            }
        }
    }
}

fn arc_arc_intr<T>(a: &Arc<T>, b: &Arc<T>, eps: T) -> ShapeIntr<T>
where
    T: Real,
{
    let in_both_sweeps = |p: Vector2<T>| -> bool {
        a.angle_within_sweep(angle(a.center, p), eps)
            && b.angle_within_sweep(angle(b.center, p), eps)
    };

    match circle_circle_intr(a.radius, a.center, b.radius, b.center, eps) {
        CircleCircleIntr::NoIntersect => ShapeIntr::None,
        CircleCircleIntr::TangentIntersect { point } => {
            if in_both_sweeps(point) {
                ShapeIntr::One { point }
            } else {
                ShapeIntr::None
            }
        }
        CircleCircleIntr::TwoIntersects { point1, point2 } => {
            match (in_both_sweeps(point1), in_both_sweeps(point2)) {
                (true, true) => ShapeIntr::Two { point1, point2 },
                (true, false) => ShapeIntr::One { point: point1 },
                (false, true) => ShapeIntr::One { point: point2 },
                (false, false) => ShapeIntr::None,
            }
        }
        CircleCircleIntr::Overlapping => same_circle_arcs_intr(a, b, eps),
    }
}

/// Arcs on the same circle: collect the endpoints lying on both arcs, then
/// decide whether they bound a shared run or are bare touches.
fn same_circle_arcs_intr<T>(a: &Arc<T>, b: &Arc<T>, eps: T) -> ShapeIntr<T>
where
    T: Real,
{
    let mut pts: Vec<Vector2<T>> = Vec::new();
    for cand in [a.start(), a.end(), b.start(), b.end()] {
        if a.contains_point(cand, eps)
            && b.contains_point(cand, eps)
            && !pts.iter().any(|p| p.fuzzy_eq_eps(cand, eps))
        {
            pts.push(cand);
        }
    }

    pts.sort_by(|p, q| {
        a.dist_from_start(*p)
            .partial_cmp(&a.dist_from_start(*q))
            .unwrap()
    });

    match pts.len() {
        0 => ShapeIntr::None,
        1 => ShapeIntr::One { point: pts[0] },
        _ => {
            let point1 = pts[0];
            let point2 = *pts.last().unwrap();
            // probe between the bounding points along `a`; if the probe is
            // on both arcs they genuinely share a run
            let d1 = a.dist_from_start(point1);
            let d2 = a.dist_from_start(point2);
            let probe = a.point_at_sweep((d1 + d2) / (T::two() * a.radius));
            if b.contains_point(probe, eps) {
                ShapeIntr::Overlap { point1, point2 }
            } else {
                ShapeIntr::Two { point1, point2 }
            }
        }
    }
}
