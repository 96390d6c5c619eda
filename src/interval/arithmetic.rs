/*
    Arithmetic operators
*/

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use tracing::trace;

use super::*;

// Reciprocal
impl Interval {
    // Enclosure of `1 / x` for a non-empty divisor lying on one side of zero
    // (touching zero at one bound at most). A zero bound maps to an infinity
    // of the matching sign, regardless of the sign of the zero itself.
    fn reciprocal(&self) -> Interval {
        let lower = if self.upper == 0.0 {
            f64::NEG_INFINITY
        } else {
            round::div(1.0, self.upper, ToNegative)
        };
        let upper = if self.lower == 0.0 {
            f64::INFINITY
        } else {
            round::div(1.0, self.lower, ToPositive)
        };
        Interval::new(lower, upper)
    }

    // Divisor classification for the division policy.
    #[inline]
    fn straddles_zero(&self) -> bool {
        (self.lower == 0.0 && self.upper == 0.0) || (self.lower < 0.0 && self.upper > 0.0)
    }

    #[inline]
    fn is_exact_zero(&self) -> bool {
        self.lower == 0.0 && self.upper == 0.0
    }

    // Result of dividing `self` by a divisor containing zero: only an exact
    // zero numerator still has a bounded quotient.
    fn divide_by_straddling(&self) -> Interval {
        if self.is_exact_zero() {
            Interval::from(0.0)
        } else {
            trace!(numerator = %self, "divisor contains zero, quotient is unbounded");
            Interval::whole()
        }
    }
}

// Implementing `Neg`
impl Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Interval {
        Interval::new(-self.upper, -self.lower)
    }
}

// Implementing `Add`
impl Add for Interval {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Interval {
        Interval::new(
            round::add(self.lower, rhs.lower, ToNegative),
            round::add(self.upper, rhs.upper, ToPositive),
        )
    }
}

impl Add<f64> for Interval {
    type Output = Interval;

    fn add(self, rhs: f64) -> Interval {
        self + Interval::from(rhs)
    }
}

impl Add<Interval> for f64 {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Interval {
        Interval::from(self) + rhs
    }
}

// Implementing `Sub`
impl Sub for Interval {
    type Output = Interval;

    fn sub(self, rhs: Interval) -> Interval {
        Interval::new(
            round::sub(self.lower, rhs.upper, ToNegative),
            round::sub(self.upper, rhs.lower, ToPositive),
        )
    }
}

impl Sub<f64> for Interval {
    type Output = Interval;

    fn sub(self, rhs: f64) -> Interval {
        self - Interval::from(rhs)
    }
}

impl Sub<Interval> for f64 {
    type Output = Interval;

    fn sub(self, rhs: Interval) -> Interval {
        Interval::from(self) - rhs
    }
}

// Implementing `Mul`
impl Mul for Interval {
    type Output = Interval;

    fn mul(self, rhs: Interval) -> Interval {
        if self.is_empty() || rhs.is_empty() {
            return Interval::empty();
        }

        let corners = [
            (self.lower, rhs.lower),
            (self.lower, rhs.upper),
            (self.upper, rhs.lower),
            (self.upper, rhs.upper),
        ];
        let lower = corners
            .iter()
            .map(|&(a, b)| round::mul(a, b, ToNegative))
            .fold(f64::INFINITY, f64::min);
        let upper = corners
            .iter()
            .map(|&(a, b)| round::mul(a, b, ToPositive))
            .fold(f64::NEG_INFINITY, f64::max);
        Interval::new(lower, upper)
    }
}

impl Mul<f64> for Interval {
    type Output = Interval;

    fn mul(self, rhs: f64) -> Interval {
        if self.is_empty() || rhs.is_nan() {
            Interval::empty()
        } else if rhs >= 0.0 {
            Interval::new(
                round::mul(self.lower, rhs, ToNegative),
                round::mul(self.upper, rhs, ToPositive),
            )
        } else {
            Interval::new(
                round::mul(self.upper, rhs, ToNegative),
                round::mul(self.lower, rhs, ToPositive),
            )
        }
    }
}

impl Mul<Interval> for f64 {
    type Output = Interval;

    fn mul(self, rhs: Interval) -> Interval {
        rhs * self
    }
}

// Implementing `Div`
impl Div for Interval {
    type Output = Interval;

    /// Divides two intervals.
    ///
    /// If the divisor lies on one side of zero the result is the product
    /// with its reciprocal. Otherwise the result is `[0, 0]` when the
    /// numerator is exactly zero, and `whole()` in every other case, since
    /// the true quotient set (two disjoint rays) is not an interval.
    fn div(self, rhs: Interval) -> Interval {
        if self.is_empty() || rhs.is_empty() {
            Interval::empty()
        } else if rhs.straddles_zero() {
            self.divide_by_straddling()
        } else {
            self * rhs.reciprocal()
        }
    }
}

impl Div<f64> for Interval {
    type Output = Interval;

    fn div(self, rhs: f64) -> Interval {
        if self.is_empty() || rhs.is_nan() {
            Interval::empty()
        } else if rhs > 0.0 {
            Interval::new(
                round::div(self.lower, rhs, ToNegative),
                round::div(self.upper, rhs, ToPositive),
            )
        } else if rhs < 0.0 {
            Interval::new(
                round::div(self.upper, rhs, ToNegative),
                round::div(self.lower, rhs, ToPositive),
            )
        } else {
            self.divide_by_straddling()
        }
    }
}

impl Div<Interval> for f64 {
    type Output = Interval;

    fn div(self, rhs: Interval) -> Interval {
        Interval::from(self) / rhs
    }
}

// Compound assignment
macro_rules! compound_assign {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Interval {
            fn $method(&mut self, rhs: Interval) {
                *self = *self $op rhs;
            }
        }

        impl $trait<f64> for Interval {
            fn $method(&mut self, rhs: f64) {
                *self = *self $op rhs;
            }
        }
    };
}

compound_assign!(AddAssign, add_assign, +);
compound_assign!(SubAssign, sub_assign, -);
compound_assign!(MulAssign, mul_assign, *);
compound_assign!(DivAssign, div_assign, /);

// Implementing the `num_traits` identities
impl num_traits::Zero for Interval {
    fn zero() -> Self {
        Interval::from(0.0)
    }

    fn is_zero(&self) -> bool {
        self.is_exact_zero()
    }
}

impl num_traits::One for Interval {
    fn one() -> Self {
        Interval::from(1.0)
    }
}
