use planar_booleans::core::math::vec2;
use planar_booleans::polygon::{Inclusion, Polygon};
use planar_booleans::shape::Circle;
use planar_booleans::polygon_points;

const EPS: f64 = 1e-5;

fn unit_square() -> Polygon {
    polygon_points![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]
}

#[test]
fn square_classification() {
    let square = unit_square();
    assert_eq!(square.point_location(vec2(5.0, 5.0), EPS), Inclusion::Inside);
    assert_eq!(square.point_location(vec2(5.0, 0.0), EPS), Inclusion::Boundary);
    // fast box-reject path
    assert_eq!(square.point_location(vec2(15.0, 15.0), EPS), Inclusion::Outside);
    // outside but within the bounding box band of the ray
    assert_eq!(square.point_location(vec2(-5.0, 5.0), EPS), Inclusion::Outside);
}

#[test]
fn vertex_and_corner_rays() {
    let square = unit_square();
    // ray through the right corner vertices must not double count
    assert_eq!(square.point_location(vec2(5.0, 10.0), EPS), Inclusion::Boundary);
    assert_eq!(square.point_location(vec2(-5.0, 10.0), EPS), Inclusion::Outside);
    assert_eq!(square.point_location(vec2(-5.0, 0.0), EPS), Inclusion::Outside);
    assert_eq!(square.point_location(vec2(0.0, 0.0), EPS), Inclusion::Boundary);
}

#[test]
fn diamond_vertex_on_ray() {
    // ray from inside passes exactly through the right vertex: the two
    // incident edges are on opposite sides, one crossing
    let diamond = polygon_points![(0.0, -10.0), (10.0, 0.0), (0.0, 10.0), (-10.0, 0.0)];
    assert_eq!(diamond.point_location(vec2(0.0, 0.0), EPS), Inclusion::Inside);
    assert_eq!(diamond.point_location(vec2(-20.0, 0.0), EPS), Inclusion::Outside);
    assert_eq!(diamond.point_location(vec2(5.0, 0.1), EPS), Inclusion::Inside);
}

#[test]
fn circle_polygon_classification() {
    let circle = Polygon::from_circle(Circle::new(vec2(0.0, 0.0), 5.0).unwrap());
    assert_eq!(circle.point_location(vec2(0.0, 0.0), EPS), Inclusion::Inside);
    assert_eq!(circle.point_location(vec2(5.0, 0.0), EPS), Inclusion::Boundary);
    assert_eq!(circle.point_location(vec2(0.0, -5.0), EPS), Inclusion::Boundary);
    assert_eq!(circle.point_location(vec2(4.9, 0.0), EPS), Inclusion::Inside);
    assert_eq!(circle.point_location(vec2(5.1, 0.0), EPS), Inclusion::Outside);
    // ray from outside tangent to the circle bottom does not cross
    assert_eq!(circle.point_location(vec2(-20.0, -5.0), EPS), Inclusion::Outside);
}

#[test]
fn polygon_with_hole_by_orientation() {
    let mut polygon = unit_square();
    // clockwise inner loop is a hole under crossing parity
    polygon
        .add_face_from_points(&[
            vec2(3.0, 3.0),
            vec2(3.0, 7.0),
            vec2(7.0, 7.0),
            vec2(7.0, 3.0),
        ])
        .unwrap();
    assert_eq!(polygon.point_location(vec2(5.0, 5.0), EPS), Inclusion::Outside);
    assert_eq!(polygon.point_location(vec2(1.0, 5.0), EPS), Inclusion::Inside);
    assert_eq!(polygon.point_location(vec2(3.0, 5.0), EPS), Inclusion::Boundary);
}

#[test]
fn concave_polygon_multiple_crossings() {
    // u-shape: ray through the notch crosses four boundary edges
    let u = polygon_points![
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 10.0),
        (7.0, 10.0),
        (7.0, 3.0),
        (3.0, 3.0),
        (3.0, 10.0),
        (0.0, 10.0),
    ];
    assert_eq!(u.point_location(vec2(5.0, 5.0), EPS), Inclusion::Outside);
    assert_eq!(u.point_location(vec2(1.5, 5.0), EPS), Inclusion::Inside);
    assert_eq!(u.point_location(vec2(8.5, 5.0), EPS), Inclusion::Inside);
    assert_eq!(u.point_location(vec2(5.0, 1.5), EPS), Inclusion::Inside);
}
