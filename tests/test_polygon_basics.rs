use planar_booleans::core::math::vec2;
use planar_booleans::core::traits::FuzzyEq;
use planar_booleans::polygon::{Orientation, Polygon};
use planar_booleans::polygon_points;
use planar_booleans::shape::Circle;
use planar_booleans::assert_fuzzy_eq;

const EPS: f64 = 1e-5;

fn square() -> Polygon {
    polygon_points![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]
}

#[test]
fn construction_and_counts() {
    let polygon = square();
    assert_eq!(polygon.face_count(), 1);
    assert_eq!(polygon.edge_count(), 4);
    assert!(!polygon.is_empty());
    assert!(Polygon::<f64>::new().is_empty());
}

#[test]
fn area_and_orientation() {
    let polygon = square();
    assert_fuzzy_eq!(polygon.area(), 100.0);
    let fk = polygon.face_keys()[0];
    assert_eq!(polygon.face_orientation(fk), Orientation::CounterClockwise);

    let mut reversed = polygon.clone();
    reversed.reverse();
    let fk = reversed.face_keys()[0];
    assert_eq!(reversed.face_orientation(fk), Orientation::Clockwise);
    assert_fuzzy_eq!(reversed.face_signed_area(fk), -100.0);
    // absolute area is orientation independent
    assert_fuzzy_eq!(reversed.area(), 100.0);
}

#[test]
fn circle_polygon_area() {
    let circle = Polygon::from_circle(Circle::new(vec2(3.0, -1.0), 5.0).unwrap());
    assert_eq!(circle.edge_count(), 2);
    assert_fuzzy_eq!(circle.area(), std::f64::consts::PI * 25.0, 1e-9);
}

#[test]
fn bbox_from_edge_set_aggregate() {
    let polygon = square();
    let bbox = polygon.bbox().unwrap();
    assert_fuzzy_eq!(bbox.min_x, 0.0);
    assert_fuzzy_eq!(bbox.max_x, 10.0);
    assert_fuzzy_eq!(bbox.max_y, 10.0);
}

#[test]
fn face_loops_are_valid_circular_lists() {
    let polygon = square();
    for fk in polygon.face_keys() {
        assert!(polygon.face_loop_is_valid(fk));
    }

    // arc lengths are monotonically non-decreasing along the loop
    let fk = polygon.face_keys()[0];
    let keys = polygon.face_edges(fk);
    assert_eq!(keys.len(), 4);
    let mut prev = -1.0;
    for k in &keys {
        let al = polygon.edge(*k).arc_length;
        assert!(al >= prev);
        prev = al;
    }
    assert_fuzzy_eq!(polygon.edge(keys[0]).arc_length, 0.0);
    assert_fuzzy_eq!(polygon.edge(keys[3]).arc_length, 30.0);
}

#[test]
fn add_vertex_splits_and_is_idempotent_on_vertices() {
    let mut polygon = square();
    let fk = polygon.face_keys()[0];
    let keys = polygon.face_edges(fk);
    let bottom = keys[0];

    // interior split inserts one edge before the original
    let before = polygon.add_vertex(bottom, vec2(4.0, 0.0), EPS);
    assert_eq!(polygon.edge_count(), 5);
    assert!(polygon.edge(before).end().fuzzy_eq(vec2(4.0, 0.0)));
    assert_eq!(polygon.edge(before).next, bottom);
    assert!(polygon.edge(bottom).start().fuzzy_eq(vec2(4.0, 0.0)));
    assert!(polygon.face_loop_is_valid(fk));
    assert_fuzzy_eq!(polygon.edge(bottom).arc_length, 4.0);

    // splitting at an existing vertex is a no-op returning the edge that
    // ends there
    let again = polygon.add_vertex(bottom, vec2(4.0, 0.0), EPS);
    assert_eq!(again, before);
    assert_eq!(polygon.edge_count(), 5);

    // total area unchanged by splitting
    assert_fuzzy_eq!(polygon.area(), 100.0);
}

#[test]
fn remove_edge_keeps_loop_consistent() {
    let mut polygon = square();
    let fk = polygon.face_keys()[0];
    let keys = polygon.face_edges(fk);
    polygon.remove_edge(keys[1]);
    assert_eq!(polygon.edge_count(), 3);
    // the loop is spliced back together (now geometrically open but
    // structurally circular)
    assert_eq!(polygon.edge(keys[0]).next, keys[2]);
    assert_eq!(polygon.edge(keys[2]).prev, keys[0]);
}

#[test]
fn removing_all_edges_drops_the_face() {
    let mut polygon = square();
    let fk = polygon.face_keys()[0];
    for k in polygon.face_edges(fk) {
        polygon.remove_edge(k);
    }
    assert_eq!(polygon.face_count(), 0);
    assert!(polygon.is_empty());
}

#[test]
fn translate_moves_everything() {
    let mut polygon = square();
    polygon.translate(5.0, -2.0);
    let bbox = polygon.bbox().unwrap();
    assert_fuzzy_eq!(bbox.min_x, 5.0);
    assert_fuzzy_eq!(bbox.min_y, -2.0);
    assert_fuzzy_eq!(polygon.area(), 100.0);
    assert!(polygon.contains_point(vec2(10.0, 3.0)));
    assert!(!polygon.contains_point(vec2(2.0, 3.0)));
}

#[test]
fn edges_at_point_probe() {
    let polygon = square();
    // corner hits both incident edges
    assert_eq!(polygon.edges_at_point(vec2(10.0, 0.0), EPS).len(), 2);
    assert_eq!(polygon.edges_at_point(vec2(5.0, 0.0), EPS).len(), 1);
    assert!(polygon.edges_at_point(vec2(5.0, 5.0), EPS).is_empty());
}
