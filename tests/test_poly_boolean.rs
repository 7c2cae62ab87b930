use planar_booleans::core::math::vec2;
use planar_booleans::core::traits::FuzzyEq;
use planar_booleans::polygon::{
    inner_clip, intersect, outer_clip, subtract, union, Inclusion, Polygon,
};
use planar_booleans::polygon_points;
use planar_booleans::shape::{Circle, Shape};
use planar_booleans::assert_fuzzy_eq;

const EPS: f64 = 1e-5;
const AREA_EPS: f64 = 1e-6;

fn square(x: f64, y: f64, size: f64) -> Polygon {
    polygon_points![(x, y), (x + size, y), (x + size, y + size), (x, y + size)]
}

#[test]
fn overlapping_squares_all_operations() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(5.0, 5.0, 10.0);

    let u = union(&a, &b).unwrap();
    assert_fuzzy_eq!(u.area(), 175.0, AREA_EPS);
    assert_eq!(u.face_count(), 1);

    let i = intersect(&a, &b).unwrap();
    assert_fuzzy_eq!(i.area(), 25.0, AREA_EPS);
    assert_eq!(i.face_count(), 1);

    let s1 = subtract(&a, &b).unwrap();
    assert_fuzzy_eq!(s1.area(), 75.0, AREA_EPS);

    let s2 = subtract(&b, &a).unwrap();
    assert_fuzzy_eq!(s2.area(), 75.0, AREA_EPS);
}

#[test]
fn union_intersect_area_identity() {
    // area(A ∪ B) = area(A) + area(B) - area(A ∩ B)
    let cases = [
        (square(0.0, 0.0, 10.0), square(5.0, 5.0, 10.0)),
        (square(0.0, 0.0, 10.0), square(3.0, -4.0, 6.0)),
        (square(0.0, 0.0, 8.0), square(20.0, 20.0, 5.0)),
        (
            square(0.0, 0.0, 10.0),
            Polygon::from_circle(Circle::new(vec2(10.0, 5.0), 3.0).unwrap()),
        ),
    ];
    for (a, b) in &cases {
        let u = union(a, b).unwrap().area();
        let i = intersect(a, b).unwrap().area();
        assert_fuzzy_eq!(u + i, a.area() + b.area(), 1e-4);
    }
}

#[test]
fn union_is_idempotent() {
    let a = square(0.0, 0.0, 10.0);
    let u = union(&a, &a).unwrap();
    assert_fuzzy_eq!(u.area(), a.area(), AREA_EPS);
}

#[test]
fn union_and_intersect_commute() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(5.0, 5.0, 10.0);
    assert_fuzzy_eq!(
        union(&a, &b).unwrap().area(),
        union(&b, &a).unwrap().area(),
        AREA_EPS
    );
    assert_fuzzy_eq!(
        intersect(&a, &b).unwrap().area(),
        intersect(&b, &a).unwrap().area(),
        AREA_EPS
    );
}

#[test]
fn intersection_is_contained_in_both() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(5.0, 5.0, 10.0);
    let result = intersect(&a, &b).unwrap();
    for shape in result.shapes() {
        for point in [shape.start(), shape.midpoint(), shape.end()] {
            assert_ne!(a.point_location(point, EPS), Inclusion::Outside);
            assert_ne!(b.point_location(point, EPS), Inclusion::Outside);
        }
    }
}

#[test]
fn subtraction_interior_is_disjoint_from_subtrahend() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(5.0, 5.0, 10.0);
    let result = subtract(&a, &b).unwrap();
    // interior samples of the result never land inside b
    for p in [
        vec2(2.5, 2.5),
        vec2(7.5, 2.5),
        vec2(2.5, 7.5),
        vec2(1.0, 9.0),
    ] {
        assert_eq!(result.point_location(p, EPS), Inclusion::Inside);
        assert_ne!(b.point_location(p, EPS), Inclusion::Inside);
    }
    // the bitten-out region is gone
    assert_eq!(result.point_location(vec2(7.5, 7.5), EPS), Inclusion::Outside);
}

#[test]
fn disjoint_polygons() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(20.0, 0.0, 5.0);

    let u = union(&a, &b).unwrap();
    assert_fuzzy_eq!(u.area(), 125.0, AREA_EPS);
    assert_eq!(u.face_count(), 2);

    let i = intersect(&a, &b).unwrap();
    assert!(i.is_empty());
    assert_fuzzy_eq!(i.area(), 0.0);

    let s = subtract(&a, &b).unwrap();
    assert_fuzzy_eq!(s.area(), 100.0, AREA_EPS);
}

#[test]
fn contained_polygons_and_holes() {
    let outer = square(0.0, 0.0, 10.0);
    let inner = square(3.0, 3.0, 4.0);

    let u = union(&outer, &inner).unwrap();
    assert_fuzzy_eq!(u.area(), 100.0, AREA_EPS);
    assert_eq!(u.face_count(), 1);

    let i = intersect(&outer, &inner).unwrap();
    assert_fuzzy_eq!(i.area(), 16.0, AREA_EPS);

    // subtracting the inner square leaves a hole: two faces, net area 84
    let s = subtract(&outer, &inner).unwrap();
    assert_eq!(s.face_count(), 2);
    assert_fuzzy_eq!(s.area(), 84.0, AREA_EPS);
    assert_eq!(s.point_location(vec2(5.0, 5.0), EPS), Inclusion::Outside);
    assert_eq!(s.point_location(vec2(1.0, 5.0), EPS), Inclusion::Inside);

    // subtracting the container removes everything
    let empty = subtract(&inner, &outer).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn adjacent_squares_share_an_edge() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(10.0, 0.0, 10.0);

    let u = union(&a, &b).unwrap();
    assert_fuzzy_eq!(u.area(), 200.0, AREA_EPS);
    assert_eq!(u.face_count(), 1);
    // the shared edge is gone from the union boundary
    assert!(u
        .shapes()
        .all(|s| !s.contains_point(vec2(10.0, 5.0), EPS)));

    // intersection of edge-adjacent squares is degenerate
    let i = intersect(&a, &b).unwrap();
    assert_fuzzy_eq!(i.area(), 0.0, AREA_EPS);

    // subtraction leaves the first square untouched
    let s = subtract(&a, &b).unwrap();
    assert_fuzzy_eq!(s.area(), 100.0, AREA_EPS);
}

#[test]
fn corner_touching_squares() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(10.0, 10.0, 10.0);

    let u = union(&a, &b).unwrap();
    assert_fuzzy_eq!(u.area(), 200.0, AREA_EPS);
    assert_eq!(u.face_count(), 2);

    let i = intersect(&a, &b).unwrap();
    assert_fuzzy_eq!(i.area(), 0.0, AREA_EPS);
}

#[test]
fn identical_squares() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(0.0, 0.0, 10.0);

    assert_fuzzy_eq!(union(&a, &b).unwrap().area(), 100.0, AREA_EPS);
    assert_fuzzy_eq!(intersect(&a, &b).unwrap().area(), 100.0, AREA_EPS);
    let s = subtract(&a, &b).unwrap();
    assert_fuzzy_eq!(s.area(), 0.0, AREA_EPS);
}

#[test]
fn circle_inside_square() {
    let square = square(-10.0, -10.0, 20.0);
    let circle = Polygon::from_circle(Circle::new(vec2(0.0, 0.0), 5.0).unwrap());

    // union boundary is the square's boundary only
    let u = union(&square, &circle).unwrap();
    assert_eq!(u.face_count(), 1);
    assert!(u.shapes().all(|s| matches!(s, Shape::Segment(_))));
    assert_fuzzy_eq!(u.area(), 400.0, AREA_EPS);

    // intersection boundary is the circle only
    let i = intersect(&square, &circle).unwrap();
    assert!(i.shapes().all(|s| matches!(s, Shape::Arc(_))));
    assert_fuzzy_eq!(i.area(), std::f64::consts::PI * 25.0, 1e-6);

    // subtraction leaves a round hole
    let s = subtract(&square, &circle).unwrap();
    assert_eq!(s.face_count(), 2);
    assert_fuzzy_eq!(s.area(), 400.0 - std::f64::consts::PI * 25.0, 1e-6);
    assert_eq!(s.point_location(vec2(0.0, 0.0), EPS), Inclusion::Outside);
    assert_eq!(s.point_location(vec2(8.0, 8.0), EPS), Inclusion::Inside);
}

#[test]
fn circle_crossing_square() {
    let a = square(0.0, 0.0, 10.0);
    let circle = Polygon::from_circle(Circle::new(vec2(10.0, 5.0), 3.0).unwrap());

    let i = intersect(&a, &circle).unwrap();
    // half disk clipped by the square's right edge
    assert_fuzzy_eq!(i.area(), std::f64::consts::PI * 9.0 / 2.0, 1e-4);
    // boundary mixes the chord segment and the arc
    assert!(i.shapes().any(|s| matches!(s, Shape::Segment(_))));
    assert!(i.shapes().any(|s| matches!(s, Shape::Arc(_))));

    let u = union(&a, &circle).unwrap();
    assert_fuzzy_eq!(
        u.area(),
        100.0 + std::f64::consts::PI * 9.0 / 2.0,
        1e-4
    );
}

#[test]
fn concave_result_with_multiple_pieces() {
    // subtracting a bar through the middle splits the square in two
    let a = square(0.0, 0.0, 10.0);
    let bar = polygon_points![(-1.0, 4.0), (11.0, 4.0), (11.0, 6.0), (-1.0, 6.0)];

    let s = subtract(&a, &bar).unwrap();
    assert_fuzzy_eq!(s.area(), 80.0, AREA_EPS);
    assert_eq!(s.face_count(), 2);
    assert_eq!(s.point_location(vec2(5.0, 2.0), EPS), Inclusion::Inside);
    assert_eq!(s.point_location(vec2(5.0, 8.0), EPS), Inclusion::Inside);
    assert_eq!(s.point_location(vec2(5.0, 5.0), EPS), Inclusion::Outside);
}

#[test]
fn clip_operations_return_boundary_pieces() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(5.0, 5.0, 10.0);

    let (in_a, in_b) = inner_clip(&a, &b).unwrap();
    // pieces of a's boundary inside b
    let len_a: f64 = in_a.iter().map(|s| s.length()).sum();
    assert_fuzzy_eq!(len_a, 10.0, 1e-6);
    for s in &in_a {
        assert_ne!(b.point_location(s.midpoint(), EPS), Inclusion::Outside);
    }
    let len_b: f64 = in_b.iter().map(|s| s.length()).sum();
    assert_fuzzy_eq!(len_b, 10.0, 1e-6);

    let out_a = outer_clip(&a, &b).unwrap();
    let len_out: f64 = out_a.iter().map(|s| s.length()).sum();
    assert_fuzzy_eq!(len_out, 30.0, 1e-6);
    for s in &out_a {
        assert_eq!(b.point_location(s.midpoint(), EPS), Inclusion::Outside);
    }
}

#[test]
fn operands_are_never_mutated() {
    let a = square(0.0, 0.0, 10.0);
    let b = square(5.0, 5.0, 10.0);
    let a_edges = a.edge_count();
    let b_edges = b.edge_count();

    let _ = union(&a, &b).unwrap();
    let _ = intersect(&a, &b).unwrap();
    let _ = subtract(&a, &b).unwrap();

    assert_eq!(a.edge_count(), a_edges);
    assert_eq!(b.edge_count(), b_edges);
    assert_fuzzy_eq!(a.area(), 100.0);
    assert_fuzzy_eq!(b.area(), 100.0);
}
