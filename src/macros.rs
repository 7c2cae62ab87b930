/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Construct a [Polygon](crate::polygon::Polygon) with a single face from a
/// list of `(x, y)` vertex tuples connected by segments (closing back to the
/// first vertex).
///
/// # Examples
///
/// ```
/// # use planar_booleans::polygon_points;
/// # use planar_booleans::polygon::*;
/// let polygon = polygon_points![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
/// assert_eq!(polygon.face_count(), 1);
/// assert_eq!(polygon.edge_count(), 4);
/// ```
#[macro_export]
macro_rules! polygon_points {
    ($( ($x:expr, $y:expr) ),* $(,)?) => {
        {
            let points = vec![$($crate::core::math::Vector2::new($x, $y)),*];
            $crate::polygon::Polygon::from_points(&points)
        }
    };
}
