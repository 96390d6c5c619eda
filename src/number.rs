/*
    Defines a number
*/

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use rand::Rng;

use crate::{Interval, ZeroCompare};

/// The coefficient type of a bounds matrix.
///
/// A `Number` is either a plain `f64`, which behaves as a degenerate
/// zero-width interval, or an `Interval`. Componentwise matrix operations
/// are written once against this trait and dispatched statically.
pub trait Number:
    Copy
    + Default
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + From<f64>
    + ZeroCompare
    + num_traits::Zero
    + num_traits::One
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
    /// Returns the lower bound of this `Number`.
    fn lower(&self) -> f64;

    /// Returns the upper bound of this `Number`.
    fn upper(&self) -> f64;

    /// Returns the midpoint of this `Number`.
    fn median(&self) -> f64;

    /// Returns the width of this `Number` (zero for plain values).
    fn width(&self) -> f64;

    /// Returns an enclosure of the square of this `Number`.
    fn squared(&self) -> Self;

    /// Returns this `Number` as an `Interval`.
    fn bounds(&self) -> Interval;

    /// Returns a random `Number`: a value in `[0, 1)` or a
    /// random sub-interval of it.
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl Number for f64 {
    #[inline]
    fn lower(&self) -> f64 {
        *self
    }

    #[inline]
    fn upper(&self) -> f64 {
        *self
    }

    #[inline]
    fn median(&self) -> f64 {
        *self
    }

    #[inline]
    fn width(&self) -> f64 {
        0.0
    }

    #[inline]
    fn squared(&self) -> Self {
        self * self
    }

    #[inline]
    fn bounds(&self) -> Interval {
        Interval::from(*self)
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.gen()
    }
}

impl Number for Interval {
    #[inline]
    fn lower(&self) -> f64 {
        Interval::lower(self)
    }

    #[inline]
    fn upper(&self) -> f64 {
        Interval::upper(self)
    }

    #[inline]
    fn median(&self) -> f64 {
        Interval::median(self)
    }

    #[inline]
    fn width(&self) -> f64 {
        Interval::width(self)
    }

    #[inline]
    fn squared(&self) -> Self {
        Interval::squared(self)
    }

    #[inline]
    fn bounds(&self) -> Interval {
        *self
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Interval::random(rng)
    }
}
