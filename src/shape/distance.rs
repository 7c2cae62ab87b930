use super::{shape_shape_intr, Segment, Shape, ShapeIntr};
use crate::core::math::Vector2;
use crate::core::traits::Real;

/// Shortest distance between two boundary shapes together with a connecting
/// segment realizing it.
///
/// Intersecting shapes have distance zero with a degenerate connecting
/// segment at an intersection point. Otherwise the minimum is taken over
/// feature-point projections (endpoints, midpoints, and arc-center feet
/// projected onto the other shape), which is exact for segment pairs and
/// tight for arcs in the near-touch regime the boolean repair pass probes.
pub fn shape_distance<T>(s1: &Shape<T>, s2: &Shape<T>, eps: T) -> (T, Segment<T>)
where
    T: Real,
{
    match shape_shape_intr(s1, s2, eps) {
        ShapeIntr::None => {}
        ShapeIntr::One { point }
        | ShapeIntr::Two { point1: point, .. }
        | ShapeIntr::Overlap { point1: point, .. } => {
            return (T::zero(), Segment::new(point, point));
        }
    }

    let mut best_dist = num_traits::real::Real::max_value();
    let mut best = Segment::new(s1.start(), s2.start());
    let mut consider = |p: Vector2<T>, q: Vector2<T>| {
        let d = p.distance_to(q);
        if d < best_dist {
            best_dist = d;
            best = Segment::new(p, q);
        }
    };

    for p in [s1.start(), s1.end(), s1.midpoint()] {
        consider(p, s2.closest_point_to(p));
    }
    for q in [s2.start(), s2.end(), s2.midpoint()] {
        consider(s1.closest_point_to(q), q);
    }

    if let Shape::Arc(a) = s1 {
        let q = s2.closest_point_to(a.center);
        consider(s1.closest_point_to(q), q);
    }
    if let Shape::Arc(a) = s2 {
        let p = s1.closest_point_to(a.center);
        consider(p, s2.closest_point_to(p));
    }

    (best_dist, best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;
    use crate::core::traits::FuzzyEq;
    use crate::shape::Arc;

    const EPS: f64 = 1e-8;

    #[test]
    fn parallel_segment_distance() {
        let a = Shape::Segment(Segment::new(vec2(0.0, 0.0), vec2(10.0, 0.0)));
        let b = Shape::Segment(Segment::new(vec2(2.0, 3.0), vec2(8.0, 3.0)));
        let (d, conn) = a.distance_to(&b, EPS);
        assert_fuzzy_eq!(d, 3.0);
        assert_fuzzy_eq!(conn.length(), 3.0);
    }

    #[test]
    fn intersecting_shapes_have_zero_distance() {
        let a = Shape::Segment(Segment::new(vec2(0.0, 0.0), vec2(10.0, 10.0)));
        let b = Shape::Segment(Segment::new(vec2(0.0, 10.0), vec2(10.0, 0.0)));
        let (d, _) = a.distance_to(&b, EPS);
        assert_fuzzy_eq!(d, 0.0);
    }

    #[test]
    fn segment_to_arc_distance() {
        let arc = Shape::Arc(Arc::full_circle(vec2(0.0, 0.0), 2.0).unwrap());
        let seg = Shape::Segment(Segment::new(vec2(5.0, -10.0), vec2(5.0, 10.0)));
        let (d, conn) = seg.distance_to(&arc, EPS);
        assert_fuzzy_eq!(d, 3.0, 1e-6);
        assert!(conn.contains_point(vec2(2.0, 0.0), 1e-6) || conn.contains_point(vec2(5.0, 0.0), 1e-6));
    }
}
