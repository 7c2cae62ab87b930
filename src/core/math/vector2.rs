use crate::core::traits::Real;
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D point/vector value type.
///
/// Used for both positions and directions; operations return new values.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T>
where
    T: Real,
{
    /// Create a new vector with x and y components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    /// Create a zero vector (x = 0, y = 0).
    #[inline]
    pub fn zero() -> Self {
        Vector2::new(T::zero(), T::zero())
    }

    /// Uniformly scale the vector by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        vec2(scale_factor * self.x, scale_factor * self.y)
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Perpendicular dot product (`self.x * other.y - self.y * other.x`).
    #[inline]
    pub fn perp_dot(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Squared length of the vector.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Length of the vector.
    #[inline]
    pub fn length(&self) -> T {
        self.dot(*self).sqrt()
    }

    /// Distance to another point.
    #[inline]
    pub fn distance_to(&self, other: Self) -> T {
        (other - *self).length()
    }

    /// Normalize the vector (length = 1). Panics in debug builds on a zero
    /// vector; use [Vector2::try_normalize] for fallible normalization.
    #[inline]
    pub fn normalize(&self) -> Self {
        debug_assert!(!self.length().fuzzy_eq_zero(), "normalizing zero vector");
        self.scale(T::one() / self.length())
    }

    /// Normalize the vector, returning `None` when its length is (fuzzy)
    /// zero.
    #[inline]
    pub fn try_normalize(&self) -> Option<Self> {
        let len = self.length();
        if len.fuzzy_eq_zero() {
            None
        } else {
            Some(self.scale(T::one() / len))
        }
    }

    /// Create perpendicular vector (rotated 90 degrees counter clockwise).
    #[inline]
    pub fn perp(&self) -> Self {
        vec2(-self.y, self.x)
    }

    /// Translate the point by `dx`, `dy`.
    #[inline]
    pub fn translate(&self, dx: T, dy: T) -> Self {
        vec2(self.x + dx, self.y + dy)
    }

    /// Fuzzy equal comparison with another vector using the `fuzzy_epsilon`
    /// given.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another vector using `T::fuzzy_epsilon()`.
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

use crate::core::traits::FuzzyEq;

/// Shorthand constructor for [Vector2].
#[inline(always)]
pub fn vec2<T>(x: T, y: T) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(x, y)
}

macro_rules! impl_binary_op {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<&Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op_func(self, rhs: &Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<Vector2<T>> for &Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<'b, T: Real> ops::$op_trait<&'b Vector2<T>> for &Vector2<T> {
            type Output = Vector2<T>;
            #[inline]
            fn $op_func(self, rhs: &'b Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

impl_binary_op!(Add, add, +);
impl_binary_op!(Sub, sub, -);

impl<T: Real> ops::Neg for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}
