use super::Vector2;
use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 { (v1, v2) } else { (v2, v1) }
}

/// Normalize radians to be between `0` and `2PI`, e.g. `-PI/4` becomes
/// `7PI/4` and `5PI` becomes `PI`. Values already in `[0, 2PI]` are left
/// unchanged.
#[inline]
pub fn normalize_radians<T>(angle: T) -> T
where
    T: Real,
{
    if angle >= T::zero() && angle <= T::tau() {
        return angle;
    }

    angle - (angle / T::tau()).floor() * T::tau()
}

/// Returns the smaller difference between two angles, negative if
/// `normalize_radians(angle2 - angle1) > PI`.
#[inline]
pub fn delta_angle<T>(angle1: T, angle2: T) -> T
where
    T: Real,
{
    let mut diff = normalize_radians(angle2 - angle1);
    if diff > T::pi() {
        diff = diff - T::tau();
    }

    diff
}

/// Tests if `test_angle` lies within the sweep starting at `start_angle`.
///
/// The sweep is counter clockwise for positive `sweep_angle` and clockwise
/// for negative, inclusive at both ends using `epsilon`.
pub fn angle_is_within_sweep_eps<T>(test_angle: T, start_angle: T, sweep_angle: T, epsilon: T) -> bool
where
    T: Real,
{
    let sweep = normalize_radians(sweep_angle.abs());
    let delta = if sweep_angle < T::zero() {
        normalize_radians(start_angle - test_angle)
    } else {
        normalize_radians(test_angle - start_angle)
    };

    delta.fuzzy_lt_eps(sweep, epsilon) || delta.fuzzy_gt_eps(T::tau(), epsilon)
}

/// Same as [angle_is_within_sweep_eps] using the default fuzzy epsilon.
#[inline]
pub fn angle_is_within_sweep<T>(test_angle: T, start_angle: T, sweep_angle: T) -> bool
where
    T: Real,
{
    angle_is_within_sweep_eps(test_angle, start_angle, sweep_angle, T::fuzzy_epsilon())
}

/// Returns the squared distance between `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p1 - p0;
    d.dot(d)
}

/// Returns the angle of the direction from `p0` to `p1` in radians,
/// normalized to `[0, 2PI)`.
#[inline]
pub fn angle<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    normalize_radians((p1.y - p0.y).atan2(p1.x - p0.x))
}

/// Returns the midpoint between `p0` and `p1`.
#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new((p0.x + p1.x) / T::two(), (p0.y + p1.y) / T::two())
}

/// Returns the point on the circle with `radius` and `center` at `angle`
/// radians.
#[inline]
pub fn point_on_circle<T>(radius: T, center: Vector2<T>, angle: T) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Returns the point on the segment `p0->p1` at parametric value `t`
/// (`P(t) = p0 + t * (p1 - p0)`).
#[inline]
pub fn point_from_parametric<T>(p0: Vector2<T>, p1: Vector2<T>, t: T) -> Vector2<T>
where
    T: Real,
{
    p0 + (p1 - p0).scale(t)
}

/// Returns the parametric value for `point` on the segment `p0->p1`,
/// projecting onto the dominant axis for numeric stability. Returns 0 when
/// the segment is degenerate within `epsilon`.
#[inline]
pub fn parametric_from_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>, epsilon: T) -> T
where
    T: Real,
{
    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;
    if dx.abs() > dy.abs() {
        if dx.fuzzy_eq_zero_eps(epsilon) {
            return T::zero();
        }
        (point.x - p0.x) / dx
    } else {
        if dy.fuzzy_eq_zero_eps(epsilon) {
            return T::zero();
        }
        (point.y - p0.y) / dy
    }
}

/// Returns the closest point to `point` on the segment `p0->p1`.
pub fn line_seg_closest_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    let v = p1 - p0;
    let w = point - p0;
    let c1 = w.dot(v);
    if c1 < T::fuzzy_epsilon() {
        return p0;
    }

    let c2 = v.dot(v);
    if c2 < c1 + T::fuzzy_epsilon() {
        return p1;
    }

    p0 + v.scale(c1 / c2)
}

/// Returns `true` if `point` is to the left of the line pointing from `p0`
/// to `p1`.
#[inline]
pub fn is_left<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> bool
where
    T: Real,
{
    (p1 - p0).perp_dot(point - p0) > T::zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;
    use std::f64::consts::PI;

    #[test]
    fn normalize_radians_wraps() {
        assert_fuzzy_eq!(normalize_radians(5.0 * PI), PI);
        assert_fuzzy_eq!(normalize_radians(-PI / 4.0), 7.0 * PI / 4.0);
        assert_fuzzy_eq!(normalize_radians(PI), PI);
    }

    #[test]
    fn delta_angle_signs() {
        assert_fuzzy_eq!(delta_angle(0.5 * PI, 0.25 * PI), -0.25 * PI);
        assert_fuzzy_eq!(delta_angle(0.25 * PI, 0.5 * PI), 0.25 * PI);
    }

    #[test]
    fn sweep_membership() {
        // quarter sweep ccw from 0
        assert!(angle_is_within_sweep(PI / 8.0, 0.0, PI / 2.0));
        assert!(!angle_is_within_sweep(PI, 0.0, PI / 2.0));
        // quarter sweep cw from 0
        assert!(angle_is_within_sweep(2.0 * PI - PI / 8.0, 0.0, -PI / 2.0));
        // endpoints are inclusive
        assert!(angle_is_within_sweep(0.0, 0.0, PI / 2.0));
        assert!(angle_is_within_sweep(PI / 2.0, 0.0, PI / 2.0));
    }

    #[test]
    fn closest_point_on_segment_clamps() {
        let p0 = Vector2::new(0.0, 0.0);
        let p1 = Vector2::new(10.0, 0.0);
        assert!(line_seg_closest_point(p0, p1, Vector2::new(-5.0, 3.0)).fuzzy_eq(p0));
        assert!(line_seg_closest_point(p0, p1, Vector2::new(15.0, 3.0)).fuzzy_eq(p1));
        assert!(
            line_seg_closest_point(p0, p1, Vector2::new(4.0, 3.0)).fuzzy_eq(Vector2::new(4.0, 0.0))
        );
    }
}
