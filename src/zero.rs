/*
    Approximate comparisons against zero
*/

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A tolerance band `[-precision, precision]` around zero.
///
/// Comparing a value against a `Zero` turns an exact floating-point
/// comparison into an approximate one:
///  - `v` is zero iff `-precision <= v <= precision`,
///  - `v` is less than zero iff `v < -precision`,
///  - `v` is greater than zero iff `v > precision`.
///
/// ```
/// use interval_bounds::Zero;
///
/// assert!(1e-13_f64 == Zero::default());
/// assert!(1e-3_f64 != Zero::default());
/// assert!(1e-3_f64 == Zero::new(1e-2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zero {
    precision: f64,
}

impl Zero {
    /// Precision used by `Zero::default()`.
    pub const DEFAULT_PRECISION: f64 = 1e-12;

    /// Creates a zero band with the given (non-negative) precision.
    pub fn new(precision: f64) -> Self {
        debug_assert!(
            precision >= 0.0,
            "invalid precision, must be non-negative: {}",
            precision
        );
        Self { precision }
    }

    /// Returns the half-width of this band.
    #[inline]
    pub fn precision(&self) -> f64 {
        self.precision
    }
}

impl Default for Zero {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PRECISION)
    }
}

/// Classification of a value against a `Zero` band.
///
/// Implemented for `f64` and `Interval`. For an interval each predicate holds
/// only if it holds for every member of the interval, so `is_zero` and
/// `is_not_zero` may both be false for an interval straddling the band.
pub trait ZeroCompare {
    /// Returns true if this value lies entirely inside the band.
    fn is_zero(&self, zero: Zero) -> bool;

    /// Returns true if this value lies entirely outside the band.
    fn is_not_zero(&self, zero: Zero) -> bool;

    /// Returns true if this value lies entirely below the band.
    fn is_less_than_zero(&self, zero: Zero) -> bool;

    /// Returns true if this value lies entirely above the band.
    fn is_greater_than_zero(&self, zero: Zero) -> bool;

    /// Returns true if no part of this value lies above the band.
    fn is_less_or_equal_zero(&self, zero: Zero) -> bool;

    /// Returns true if no part of this value lies below the band.
    fn is_greater_or_equal_zero(&self, zero: Zero) -> bool;
}

impl ZeroCompare for f64 {
    #[inline]
    fn is_zero(&self, zero: Zero) -> bool {
        -zero.precision <= *self && *self <= zero.precision
    }

    #[inline]
    fn is_not_zero(&self, zero: Zero) -> bool {
        *self < -zero.precision || *self > zero.precision
    }

    #[inline]
    fn is_less_than_zero(&self, zero: Zero) -> bool {
        *self < -zero.precision
    }

    #[inline]
    fn is_greater_than_zero(&self, zero: Zero) -> bool {
        *self > zero.precision
    }

    #[inline]
    fn is_less_or_equal_zero(&self, zero: Zero) -> bool {
        *self <= zero.precision
    }

    #[inline]
    fn is_greater_or_equal_zero(&self, zero: Zero) -> bool {
        *self >= -zero.precision
    }
}

impl PartialEq<Zero> for f64 {
    fn eq(&self, zero: &Zero) -> bool {
        self.is_zero(*zero)
    }
}

// Values inside the band compare `Equal`; NaN is unordered.
impl PartialOrd<Zero> for f64 {
    fn partial_cmp(&self, zero: &Zero) -> Option<Ordering> {
        if self.is_less_than_zero(*zero) {
            Some(Ordering::Less)
        } else if self.is_greater_than_zero(*zero) {
            Some(Ordering::Greater)
        } else if self.is_zero(*zero) {
            Some(Ordering::Equal)
        } else {
            None
        }
    }
}
