/*
    Correctly rounded elementary functions backed by MPFR
*/

use rug::float::{Constant, Round};
use rug::Float;

use super::RoundingMode;

// Working precision, that of an IEEE-754 double. Every f64 converts to a
// 53-bit `Float` exactly, so the only rounding is the one requested.
const PREC: u32 = 53;

impl From<RoundingMode> for Round {
    fn from(rm: RoundingMode) -> Self {
        match rm {
            RoundingMode::ToNegative => Round::Down,
            RoundingMode::ToPositive => Round::Up,
        }
    }
}

macro_rules! directed_unary {
    ($(#[$doc:meta])* $name:ident => $method:ident) => {
        $(#[$doc])*
        pub fn $name(x: f64, rm: RoundingMode) -> f64 {
            let round = Round::from(rm);
            let mut f = Float::with_val(PREC, x);
            f.$method(round);
            f.to_f64_round(round)
        }
    };
}

directed_unary!(
    /// `e^x` rounded in direction `rm`.
    exp => exp_round
);
directed_unary!(
    /// Natural logarithm of `x` rounded in direction `rm`.
    ln => ln_round
);
directed_unary!(
    /// Sine of `x` rounded in direction `rm`.
    sin => sin_round
);
directed_unary!(
    /// Cosine of `x` rounded in direction `rm`.
    cos => cos_round
);
directed_unary!(
    /// Tangent of `x` rounded in direction `rm`.
    tan => tan_round
);
directed_unary!(
    /// Arcsine of `x` rounded in direction `rm`.
    asin => asin_round
);
directed_unary!(
    /// Arccosine of `x` rounded in direction `rm`.
    acos => acos_round
);
directed_unary!(
    /// Arctangent of `x` rounded in direction `rm`.
    atan => atan_round
);

/// The constant π rounded in direction `rm`.
pub fn pi(rm: RoundingMode) -> f64 {
    let round = Round::from(rm);
    let (f, _) = Float::with_val_round(PREC, Constant::Pi, round);
    f.to_f64_round(round)
}
