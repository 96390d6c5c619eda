/*
    Directed rounding of double-precision operations
*/

use tracing::trace;

#[cfg(feature = "mpfr")]
mod mpfr;
#[cfg(not(feature = "mpfr"))]
mod ulp;

#[cfg(feature = "mpfr")]
pub use mpfr::*;
#[cfg(not(feature = "mpfr"))]
pub use ulp::*;

/// Direction in which an inexact result is rounded.
///
/// Interval bounds are always rounded outward: lower bounds
/// toward negative infinity and upper bounds toward positive infinity.
/// Exact results are returned unchanged in either mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundingMode {
    ToNegative,
    ToPositive,
}

impl RoundingMode {
    /// Returns the opposite rounding direction.
    #[inline]
    pub fn reverse(self) -> Self {
        match self {
            RoundingMode::ToNegative => RoundingMode::ToPositive,
            RoundingMode::ToPositive => RoundingMode::ToNegative,
        }
    }
}

/// Returns the smallest double strictly greater than `x`.
/// Infinities and NaN are returned unchanged, except that the successor
/// of negative infinity is `f64::MIN`.
pub fn next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY {
        x
    } else if x == f64::NEG_INFINITY {
        f64::MIN
    } else if x == 0.0 {
        // covers both +0 and -0
        f64::from_bits(1)
    } else {
        let bits = x.to_bits();
        if x > 0.0 {
            f64::from_bits(bits + 1)
        } else {
            f64::from_bits(bits - 1)
        }
    }
}

/// Returns the largest double strictly less than `x`.
pub fn next_down(x: f64) -> f64 {
    -next_up(-x)
}

// Moves a rounded-to-nearest result one step in direction `rm`
// when the sign of its rounding error `err` says it landed on the wrong side.
#[inline]
fn correct(r: f64, err: f64, rm: RoundingMode) -> f64 {
    match rm {
        RoundingMode::ToNegative if err < 0.0 => next_down(r),
        RoundingMode::ToPositive if err > 0.0 => next_up(r),
        _ => r,
    }
}

// An infinite result of finite operands is an overflow; the inward
// direction saturates at the largest finite double.
#[inline]
fn saturate(r: f64, rm: RoundingMode) -> f64 {
    trace!(result = r, ?rm, "directed operation overflowed");
    match rm {
        RoundingMode::ToNegative if r == f64::INFINITY => f64::MAX,
        RoundingMode::ToPositive if r == f64::NEG_INFINITY => f64::MIN,
        _ => r,
    }
}

// Below 2^-969 the low half of a double-width product falls into the
// subnormal range, so FMA residuals are no longer exact.
const RESIDUAL_LIMIT: f64 = f64::MIN_POSITIVE * 9007199254740992.0;

// Results this small may carry an inexact residual. Step outward
// unconditionally.
#[inline]
fn is_tiny(r: f64) -> bool {
    r.abs() < RESIDUAL_LIMIT
}

#[inline]
fn step(r: f64, rm: RoundingMode) -> f64 {
    match rm {
        RoundingMode::ToNegative => next_down(r),
        RoundingMode::ToPositive => next_up(r),
    }
}

/// Adds two doubles rounding the result in direction `rm`.
pub fn add(a: f64, b: f64, rm: RoundingMode) -> f64 {
    let s = a + b;
    if !s.is_finite() {
        return if a.is_finite() && b.is_finite() {
            saturate(s, rm)
        } else {
            s
        };
    }

    // TwoSum: `err` is exactly (a + b) - s
    let bb = s - a;
    let err = (a - (s - bb)) + (b - bb);
    correct(s, err, rm)
}

/// Subtracts `b` from `a` rounding the result in direction `rm`.
pub fn sub(a: f64, b: f64, rm: RoundingMode) -> f64 {
    add(a, -b, rm)
}

/// Multiplies two doubles rounding the result in direction `rm`.
/// A zero factor yields zero even if the other factor is infinite.
pub fn mul(a: f64, b: f64, rm: RoundingMode) -> f64 {
    if a == 0.0 || b == 0.0 {
        return 0.0;
    }

    let p = a * b;
    if !p.is_finite() {
        return if a.is_finite() && b.is_finite() {
            saturate(p, rm)
        } else {
            p
        };
    }

    if is_tiny(p) {
        return step(p, rm);
    }

    // `err` is exactly a * b - p
    let err = a.mul_add(b, -p);
    correct(p, err, rm)
}

/// Divides `a` by `b` rounding the result in direction `rm`.
/// The caller is responsible for excluding a zero divisor.
pub fn div(a: f64, b: f64, rm: RoundingMode) -> f64 {
    if a == 0.0 || (a.is_finite() && b.is_infinite()) {
        return 0.0;
    }

    let q = a / b;
    if !q.is_finite() {
        return if a.is_finite() && b.is_finite() && b != 0.0 {
            saturate(q, rm)
        } else {
            q
        };
    }

    if is_tiny(q) || is_tiny(a) {
        return step(q, rm);
    }

    // a - q * b is exact; the true quotient exceeds `q` iff that residual
    // has the same sign as `b`
    let residual = (-q).mul_add(b, a);
    let err = if b > 0.0 { residual } else { -residual };
    correct(q, err, rm)
}

/// Square root of `a` rounded in direction `rm`.
pub fn sqrt(a: f64, rm: RoundingMode) -> f64 {
    let r = a.sqrt();
    if !r.is_finite() || r == 0.0 {
        return r;
    }

    if is_tiny(a) {
        return step(r, rm);
    }

    // `err` has the sign of a - r * r, and so of sqrt(a) - r
    let err = -r.mul_add(r, -a);
    correct(r, err, rm)
}

/// Raises `a` to a non-negative integer power rounding in direction `rm`.
pub fn powi(a: f64, n: u32, rm: RoundingMode) -> f64 {
    if a < 0.0 {
        // odd powers of negative numbers flip the rounding direction
        let magnitude = if n % 2 == 1 {
            -powi(-a, n, rm.reverse())
        } else {
            powi(-a, n, rm)
        };
        return magnitude;
    }

    // all partial products are non-negative, so rounding each one
    // in the same direction rounds the final result in that direction
    let mut result = 1.0;
    let mut base = a;
    let mut exponent = n;
    while exponent > 0 {
        if exponent % 2 == 1 {
            result = mul(result, base, rm);
        }
        exponent /= 2;
        if exponent > 0 {
            base = mul(base, base, rm);
        }
    }
    result
}
