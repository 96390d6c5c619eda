/*
    Conversions to and from `Interval`
*/

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::*;

// Implementing `From<f64>` as the degenerate interval `[value, value]`
impl From<f64> for Interval {
    fn from(value: f64) -> Self {
        Interval::new(value, value)
    }
}

impl From<RangeInclusive<f64>> for Interval {
    fn from(range: RangeInclusive<f64>) -> Self {
        Interval::new(*range.start(), *range.end())
    }
}

// Implementing `Display`: `[]`, `[value]`, or `[lower,upper]`
impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "[]")
        } else if self.is_singleton() {
            write!(f, "[{}]", self.lower)
        } else {
            write!(f, "[{},{}]", self.lower, self.upper)
        }
    }
}

// Serialized form of one bound. Self-describing formats such as JSON
// cannot carry infinities or NaN as numbers, so those are spelled out.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
enum Bound {
    Finite(f64),
    Special(Special),
}

#[derive(Clone, Copy, Serialize, Deserialize)]
enum Special {
    #[serde(rename = "-inf")]
    NegInfinity,
    #[serde(rename = "+inf")]
    PosInfinity,
    #[serde(rename = "nan")]
    Nan,
}

impl From<f64> for Bound {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Bound::Finite(value)
        } else if value.is_nan() {
            Bound::Special(Special::Nan)
        } else if value > 0.0 {
            Bound::Special(Special::PosInfinity)
        } else {
            Bound::Special(Special::NegInfinity)
        }
    }
}

impl From<Bound> for f64 {
    fn from(bound: Bound) -> Self {
        match bound {
            Bound::Finite(value) => value,
            Bound::Special(Special::NegInfinity) => f64::NEG_INFINITY,
            Bound::Special(Special::PosInfinity) => f64::INFINITY,
            Bound::Special(Special::Nan) => f64::NAN,
        }
    }
}

/// Serialized form of an `Interval`.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(rename = "Interval")]
pub(super) struct IntervalRepr {
    lower: Bound,
    upper: Bound,
}

impl From<Interval> for IntervalRepr {
    fn from(interval: Interval) -> Self {
        Self {
            lower: interval.lower.into(),
            upper: interval.upper.into(),
        }
    }
}

impl TryFrom<IntervalRepr> for Interval {
    type Error = Error;

    fn try_from(repr: IntervalRepr) -> Result<Self> {
        let (lower, upper) = (f64::from(repr.lower), f64::from(repr.upper));
        Interval::try_new(lower, upper).inspect_err(|err| {
            debug!(%err, "rejected serialized interval");
        })
    }
}
