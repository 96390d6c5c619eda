/*
    Definition of `Interval`
*/

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::round::{self, RoundingMode::*};
use crate::{Error, Result};

mod arithmetic;
mod compare;
mod convert;
mod elementary;

/** A closed range of real numbers `[lower, upper]`.
 *
 * An `Interval` is a guaranteed enclosure of some unknown real value:
 * every operation returns an interval containing the exact result of
 * the corresponding real operation applied to any members of its
 * arguments, with bounds rounded outward.
 *
 * Every interval falls in one of four classes which determine the
 * branch each operation takes:
 *
 *  - empty: both bounds are NaN, contains no value;
 *  - singleton: `lower == upper`;
 *  - bounded: finite bounds with `lower < upper`;
 *  - unbounded: at least one infinite bound (`whole()` is `[-inf, +inf]`).
 *
 * A single NaN bound is malformed and rejected by the constructors.
 */
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(into = "convert::IntervalRepr", try_from = "convert::IntervalRepr")]
pub struct Interval {
    lower: f64,
    upper: f64,
}

// Constructors
impl Interval {
    /// Creates the interval `[lower, upper]`.
    ///
    /// Passing `lower > upper` or a single NaN bound is a contract violation,
    /// checked in debug builds. Use `Interval::try_new` for untrusted input.
    #[inline]
    pub fn new(lower: f64, upper: f64) -> Self {
        debug_assert!(
            lower.is_nan() == upper.is_nan(),
            "malformed interval, only one bound is NaN: [{}, {}]",
            lower,
            upper
        );
        debug_assert!(
            lower.is_nan() || lower <= upper,
            "invalid interval, lower bound exceeds upper bound: [{}, {}]",
            lower,
            upper
        );
        Self { lower, upper }
    }

    /// Creates the interval `[lower, upper]`, reporting an error if the
    /// bounds are out of order or exactly one of them is NaN.
    /// Two NaN bounds produce the empty interval.
    pub fn try_new(lower: f64, upper: f64) -> Result<Self> {
        match (lower.is_nan(), upper.is_nan()) {
            (true, true) => Ok(Self::empty()),
            (false, false) if lower <= upper => Ok(Self { lower, upper }),
            (false, false) => Err(Error::InvertedBounds { lower, upper }),
            _ => Err(Error::MalformedBounds { lower, upper }),
        }
    }

    /// Returns the smallest interval containing both values,
    /// in whichever order they are given.
    pub fn hull_of(first: f64, second: f64) -> Self {
        if first <= second {
            Self::new(first, second)
        } else {
            Self::new(second, first)
        }
    }

    /// Returns the empty interval.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            lower: f64::NAN,
            upper: f64::NAN,
        }
    }

    /// Returns the interval containing every real number.
    #[inline]
    pub const fn whole() -> Self {
        Self {
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
        }
    }

    /// Returns `[0, 1]`.
    #[inline]
    pub const fn unit() -> Self {
        Self {
            lower: 0.0,
            upper: 1.0,
        }
    }

    /// Returns a random sub-interval of `[0, 1)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let first: f64 = rng.gen();
        let second: f64 = rng.gen();
        Self::hull_of(first, second)
    }
}

// Queries
impl Interval {
    /// Returns the lower bound of this `Interval`.
    #[inline]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper bound of this `Interval`.
    #[inline]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns the midpoint, computed as `lower + 0.5 * width`.
    ///
    /// The median of `whole()` is zero and that of a half-unbounded
    /// interval is its infinite bound.
    pub fn median(&self) -> f64 {
        let width = self.width();
        if width.is_finite() {
            self.lower + 0.5 * width
        } else if self.lower == f64::NEG_INFINITY && self.upper == f64::INFINITY {
            0.0
        } else if self.lower == f64::NEG_INFINITY {
            self.lower
        } else if self.upper == f64::INFINITY {
            self.upper
        } else {
            // finite bounds whose difference overflows
            0.5 * self.lower + 0.5 * self.upper
        }
    }

    /// Returns `upper - lower`.
    #[inline]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Draws a value uniformly from this `Interval` using `rng`.
    /// The result is always contained in the interval.
    pub fn random_value<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let t: f64 = rng.gen();
        self.clamp(self.lower + t * self.width())
    }

    /// Returns true if this `Interval` contains no value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lower.is_nan() && self.upper.is_nan()
    }

    /// Returns true if both bounds are equal.
    #[inline]
    pub fn is_singleton(&self) -> bool {
        self.lower == self.upper
    }

    /// Returns true if both bounds are finite.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite()
    }

    /// Returns true if at least one bound is infinite.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.lower.is_infinite() || self.upper.is_infinite()
    }
}

// Derived intervals
impl Interval {
    /// Projects `value` into this `Interval`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value <= self.lower {
            self.lower
        } else if value <= self.upper {
            value
        } else {
            self.upper
        }
    }

    /// Projects both bounds of `interval` into this `Interval`.
    pub fn clamp_interval(&self, interval: Interval) -> Interval {
        if self.is_empty() || interval.is_empty() {
            return Self::empty();
        }
        Self::new(self.clamp(interval.lower), self.clamp(interval.upper))
    }

    /// Returns `lower + t * width`, the point at parameter `t`
    /// along this `Interval`.
    pub fn interpolated(&self, t: f64) -> f64 {
        self.lower + t * self.width()
    }

    /// Returns an enclosure of `lower + t * width` for all `t` in `t`.
    /// An unbounded interval yields `Whole`.
    pub fn interpolated_interval(&self, t: Interval) -> Interval {
        if self.is_empty() || t.is_empty() {
            return Self::empty();
        }
        if self.is_unbounded() {
            return Self::whole();
        }
        self.lower + t * self.width_enclosure()
    }

    /// Returns the image of this `Interval` under `x -> x^2`.
    pub fn squared(&self) -> Interval {
        if self.is_empty() {
            Self::empty()
        } else if self.lower > 0.0 {
            Self::new(
                round::mul(self.lower, self.lower, ToNegative),
                round::mul(self.upper, self.upper, ToPositive),
            )
        } else if self.upper < 0.0 {
            Self::new(
                round::mul(self.upper, self.upper, ToNegative),
                round::mul(self.lower, self.lower, ToPositive),
            )
        } else if -self.lower < self.upper {
            Self::new(0.0, round::mul(self.upper, self.upper, ToPositive))
        } else {
            Self::new(0.0, round::mul(self.lower, self.lower, ToPositive))
        }
    }

    /// Splits this `Interval` at its median.
    pub fn bisected(&self) -> (Interval, Interval) {
        let mid = self.median();
        (Self::new(self.lower, mid), Self::new(mid, self.upper))
    }

    /// Returns the smallest interval containing both this `Interval`
    /// and `other` (a value or an interval). The empty interval is
    /// the identity of this operation.
    pub fn hull(&self, other: impl Into<Interval>) -> Interval {
        let other = other.into();
        if self.is_empty() {
            other
        } else if other.is_empty() {
            *self
        } else {
            Self::new(self.lower.min(other.lower), self.upper.max(other.upper))
        }
    }

    /// Returns the values common to this `Interval` and `other`,
    /// or the empty interval if they are disjoint.
    pub fn intersection(&self, other: Interval) -> Interval {
        if self.is_empty() || other.is_empty() {
            return Self::empty();
        }

        let lower = self.lower.max(other.lower);
        let upper = self.upper.min(other.upper);
        if lower <= upper {
            Self::new(lower, upper)
        } else {
            Self::empty()
        }
    }

    // Outward-rounded enclosure of `upper - lower`.
    fn width_enclosure(&self) -> Interval {
        Self::new(
            round::sub(self.upper, self.lower, ToNegative),
            round::sub(self.upper, self.lower, ToPositive),
        )
    }
}

// Complex-number compatibility
impl Interval {
    /// Returns this `Interval` (real intervals are self-conjugate).
    #[inline]
    pub fn conj(&self) -> Interval {
        *self
    }

    /// Returns this `Interval`.
    #[inline]
    pub fn real(&self) -> Interval {
        *self
    }

    /// Returns `[0, 0]`.
    #[inline]
    pub fn imag(&self) -> Interval {
        Self::from(0.0)
    }

    /// Squared magnitude, identical to `squared()`.
    #[inline]
    pub fn abs2(&self) -> Interval {
        self.squared()
    }
}

// Implementing `Default` as the empty interval
impl Default for Interval {
    fn default() -> Self {
        Self::empty()
    }
}
