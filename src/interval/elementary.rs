/*
    Elementary functions
*/

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::*;

// Relative slack applied when locating extrema and poles of periodic
// functions. A false positive only loosens a bound.
const PHASE_SLACK: f64 = 1e-12;

// Beyond this magnitude consecutive doubles are further apart than the
// slack can account for, so every phase is assumed to be present.
const PHASE_LIMIT: f64 = 1e15;

// Returns true if a point `phase + k * period` (integer `k`) may lie in
// `[lower, upper]`.
fn may_contain_phase(lower: f64, upper: f64, phase: f64, period: f64) -> bool {
    if !(lower.abs() < PHASE_LIMIT && upper.abs() < PHASE_LIMIT) {
        return true;
    }
    let from = (lower - phase) / period;
    let to = (upper - phase) / period;
    let slack = PHASE_SLACK * (1.0 + from.abs().max(to.abs()));
    (to + slack).floor() >= (from - slack).ceil()
}

// Enclosure of π.
fn pi_enclosure() -> Interval {
    Interval::new(round::pi(ToNegative), round::pi(ToPositive))
}

// Enclosure of a periodic function with unit amplitude given the phases of
// its maxima and minima within a period of 2π.
fn periodic(
    x: &Interval,
    max_phase: f64,
    min_phase: f64,
    f: fn(f64, round::RoundingMode) -> f64,
) -> Interval {
    if x.is_empty() {
        return Interval::empty();
    }
    if !x.is_bounded() || x.width() >= TAU {
        return Interval::new(-1.0, 1.0);
    }

    let lower = if may_contain_phase(x.lower, x.upper, min_phase, TAU) {
        -1.0
    } else {
        f(x.lower, ToNegative).min(f(x.upper, ToNegative)).max(-1.0)
    };
    let upper = if may_contain_phase(x.lower, x.upper, max_phase, TAU) {
        1.0
    } else {
        f(x.lower, ToPositive).max(f(x.upper, ToPositive)).min(1.0)
    };
    Interval::new(lower, upper)
}

impl Interval {
    /// Returns the image of this `Interval` under `|x|`.
    pub fn abs(&self) -> Interval {
        if self.is_empty() {
            Interval::empty()
        } else if self.lower >= 0.0 {
            *self
        } else if self.upper <= 0.0 {
            -*self
        } else if -self.lower < self.upper {
            Interval::new(0.0, self.upper)
        } else {
            Interval::new(0.0, -self.lower)
        }
    }

    /// Returns the square root of the non-negative part of this `Interval`,
    /// or the empty interval if it lies entirely below zero.
    pub fn sqrt(&self) -> Interval {
        if self.is_empty() || self.upper < 0.0 {
            return Interval::empty();
        }
        Interval::new(
            round::sqrt(self.lower.max(0.0), ToNegative),
            round::sqrt(self.upper, ToPositive),
        )
    }

    pub fn sin(&self) -> Interval {
        periodic(self, FRAC_PI_2, -FRAC_PI_2, round::sin)
    }

    pub fn cos(&self) -> Interval {
        periodic(self, 0.0, PI, round::cos)
    }

    /// Returns the image under `tan`, or `whole()` if this `Interval`
    /// may contain a pole.
    pub fn tan(&self) -> Interval {
        if self.is_empty() {
            return Interval::empty();
        }
        if !self.is_bounded()
            || self.width() >= PI
            || may_contain_phase(self.lower, self.upper, FRAC_PI_2, PI)
        {
            return Interval::whole();
        }
        Interval::new(
            round::tan(self.lower, ToNegative),
            round::tan(self.upper, ToPositive),
        )
    }

    /// Arcsine of the part of this `Interval` within `[-1, 1]`.
    pub fn asin(&self) -> Interval {
        let domain = self.intersection(Interval::new(-1.0, 1.0));
        if domain.is_empty() {
            return Interval::empty();
        }
        Interval::new(
            round::asin(domain.lower, ToNegative),
            round::asin(domain.upper, ToPositive),
        )
    }

    /// Arccosine of the part of this `Interval` within `[-1, 1]`.
    pub fn acos(&self) -> Interval {
        let domain = self.intersection(Interval::new(-1.0, 1.0));
        if domain.is_empty() {
            return Interval::empty();
        }
        // decreasing
        Interval::new(
            round::acos(domain.upper, ToNegative).max(0.0),
            round::acos(domain.lower, ToPositive),
        )
    }

    pub fn atan(&self) -> Interval {
        if self.is_empty() {
            return Interval::empty();
        }
        Interval::new(
            round::atan(self.lower, ToNegative),
            round::atan(self.upper, ToPositive),
        )
    }

    /// Returns the enclosure of `atan2(y, x)` with `self` as `y`.
    ///
    /// The branch cut along the negative x axis is avoided by rotating a
    /// quarter turn whenever `x` is not strictly positive; if `y` then
    /// straddles zero the result is `[-π, π]`.
    pub fn atan2(&self, x: Interval) -> Interval {
        let y = *self;
        if y.is_empty() || x.is_empty() {
            return Interval::empty();
        }

        let pi = pi_enclosure();
        if x.lower > 0.0 {
            (y / x).atan()
        } else if y.lower > 0.0 {
            (-x / y).atan() + pi * 0.5
        } else if y.upper < 0.0 {
            (-x / y).atan() - pi * 0.5
        } else {
            Interval::new(-pi.upper, pi.upper)
        }
    }

    pub fn exp(&self) -> Interval {
        if self.is_empty() {
            return Interval::empty();
        }
        Interval::new(
            round::exp(self.lower, ToNegative).max(0.0),
            round::exp(self.upper, ToPositive),
        )
    }

    /// Natural logarithm of the positive part of this `Interval`,
    /// or the empty interval if it has no positive part.
    pub fn log(&self) -> Interval {
        if self.is_empty() || self.upper <= 0.0 {
            return Interval::empty();
        }
        let lower = if self.lower <= 0.0 {
            f64::NEG_INFINITY
        } else {
            round::ln(self.lower, ToNegative)
        };
        Interval::new(lower, round::ln(self.upper, ToPositive))
    }

    /// Raises this `Interval` to an integer power.
    /// Negative powers divide one by the positive power, following the
    /// division policy for divisors containing zero.
    pub fn powi(&self, exponent: i32) -> Interval {
        if self.is_empty() {
            return Interval::empty();
        }
        let n = exponent.unsigned_abs();
        let positive = if n == 0 {
            Interval::from(1.0)
        } else if n % 2 == 0 {
            let magnitude = self.abs();
            Interval::new(
                round::powi(magnitude.lower, n, ToNegative),
                round::powi(magnitude.upper, n, ToPositive),
            )
        } else {
            Interval::new(
                round::powi(self.lower, n, ToNegative),
                round::powi(self.upper, n, ToPositive),
            )
        };

        if exponent < 0 {
            1.0 / positive
        } else {
            positive
        }
    }

    /// Raises this `Interval` to a real power as `exp(log(x) * exponent)`.
    /// Only the positive part of the base contributes.
    pub fn powf(&self, exponent: f64) -> Interval {
        (self.log() * exponent).exp()
    }

    /// Raises this `Interval` to an interval power as
    /// `exp(log(x) * exponent)`.
    pub fn pow(&self, exponent: Interval) -> Interval {
        (self.log() * exponent).exp()
    }
}
