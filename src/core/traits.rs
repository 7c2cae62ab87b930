//! Numeric traits used by all geometry types.
//!
//! Floating point geometry is never compared exactly: every equality and
//! ordering goes through an epsilon. [FuzzyEq] and [FuzzyOrd] carry those
//! comparisons and [Real] bundles them with the `num-traits` real number
//! operations the kernel needs.

/// Fuzzy equality comparisons using an epsilon value.
pub trait FuzzyEq: Sized + Copy {
    /// Default epsilon used when none is supplied.
    fn fuzzy_epsilon() -> Self;

    /// Returns `true` if `self` is approximately equal to `other` using the
    /// `fuzzy_epsilon` given.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_eps] using the default epsilon.
    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    /// Returns `true` if `self` is approximately zero using the
    /// `fuzzy_epsilon` given.
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_zero_eps] using the default epsilon.
    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }
}

/// Fuzzy ordering comparisons using an epsilon value.
pub trait FuzzyOrd: FuzzyEq {
    /// Fuzzy greater than (`self + eps > other`).
    fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyOrd::fuzzy_gt_eps] using the default epsilon.
    #[inline]
    fn fuzzy_gt(&self, other: Self) -> bool {
        self.fuzzy_gt_eps(other, Self::fuzzy_epsilon())
    }

    /// Fuzzy less than (`self < other + eps`).
    fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyOrd::fuzzy_lt_eps] using the default epsilon.
    #[inline]
    fn fuzzy_lt(&self, other: Self) -> bool {
        self.fuzzy_lt_eps(other, Self::fuzzy_epsilon())
    }

    /// Test if `self` is between `min` and `max` inclusive using the
    /// `fuzzy_epsilon` given.
    #[inline]
    fn fuzzy_in_range_eps(&self, min: Self, max: Self, fuzzy_epsilon: Self) -> bool {
        self.fuzzy_gt_eps(min, fuzzy_epsilon) && self.fuzzy_lt_eps(max, fuzzy_epsilon)
    }

    /// Same as [FuzzyOrd::fuzzy_in_range_eps] using the default epsilon.
    #[inline]
    fn fuzzy_in_range(&self, min: Self, max: Self) -> bool {
        self.fuzzy_in_range_eps(min, max, Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy {
    ($ty:ty, $eps:expr) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn fuzzy_epsilon() -> Self {
                $eps
            }
            #[inline]
            fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                (*self - other).abs() < fuzzy_epsilon
            }
            #[inline]
            fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
                self.abs() < fuzzy_epsilon
            }
        }

        impl FuzzyOrd for $ty {
            #[inline]
            fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                self + fuzzy_epsilon > other
            }
            #[inline]
            fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                *self < other + fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy!(f32, 1.0e-8);
impl_fuzzy!(f64, 1.0e-8);

/// Trait representing a real number that can be fuzzy compared and ordered.
///
/// All geometry in this crate is generic over this trait; `f32` and `f64`
/// implement it.
pub trait Real:
    num_traits::real::Real + num_traits::Bounded + FuzzyOrd + Default + std::fmt::Debug + 'static
{
    #[inline]
    fn pi() -> Self {
        Self::from(std::f64::consts::PI).unwrap()
    }

    #[inline]
    fn tau() -> Self {
        Self::from(std::f64::consts::TAU).unwrap()
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn four() -> Self {
        Self::two() + Self::two()
    }

    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    #[inline]
    fn min_value() -> Self {
        num_traits::real::Real::min_value()
    }

    #[inline]
    fn max_value() -> Self {
        num_traits::real::Real::max_value()
    }
}

impl Real for f32 {
    #[inline]
    fn pi() -> Self {
        std::f32::consts::PI
    }

    #[inline]
    fn tau() -> Self {
        std::f32::consts::TAU
    }
}

impl Real for f64 {
    #[inline]
    fn pi() -> Self {
        std::f64::consts::PI
    }

    #[inline]
    fn tau() -> Self {
        std::f64::consts::TAU
    }
}
