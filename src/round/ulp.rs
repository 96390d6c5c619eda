/*
    Elementary functions widened by one ulp
*/

use std::f64::consts::PI;

use super::{next_down, next_up, RoundingMode};

// The platform libm is faithful (error below one ulp) for these functions,
// so one step away from the nearest result brackets the true value.
// An infinite image of a finite nonzero argument is an overflow, saturated
// at the largest finite double in the inward direction.
#[inline]
fn widen(x: f64, r: f64, rm: RoundingMode) -> f64 {
    if r.is_infinite() && x.is_finite() && x != 0.0 {
        return match rm {
            RoundingMode::ToNegative if r == f64::INFINITY => f64::MAX,
            RoundingMode::ToPositive if r == f64::NEG_INFINITY => f64::MIN,
            _ => r,
        };
    }
    if !r.is_finite() {
        return r;
    }
    match rm {
        RoundingMode::ToNegative => next_down(r),
        RoundingMode::ToPositive => next_up(r),
    }
}

macro_rules! directed_unary {
    ($(#[$doc:meta])* $name:ident => $method:ident) => {
        $(#[$doc])*
        pub fn $name(x: f64, rm: RoundingMode) -> f64 {
            widen(x, x.$method(), rm)
        }
    };
}

directed_unary!(
    /// `e^x` rounded in direction `rm`.
    exp => exp
);
directed_unary!(
    /// Natural logarithm of `x` rounded in direction `rm`.
    ln => ln
);
directed_unary!(
    /// Sine of `x` rounded in direction `rm`.
    sin => sin
);
directed_unary!(
    /// Cosine of `x` rounded in direction `rm`.
    cos => cos
);
directed_unary!(
    /// Tangent of `x` rounded in direction `rm`.
    tan => tan
);
directed_unary!(
    /// Arcsine of `x` rounded in direction `rm`.
    asin => asin
);
directed_unary!(
    /// Arccosine of `x` rounded in direction `rm`.
    acos => acos
);
directed_unary!(
    /// Arctangent of `x` rounded in direction `rm`.
    atan => atan
);

/// The constant π rounded in direction `rm`.
pub fn pi(rm: RoundingMode) -> f64 {
    // `PI` is the double nearest to π, which lies below π
    match rm {
        RoundingMode::ToNegative => PI,
        RoundingMode::ToPositive => next_up(PI),
    }
}
