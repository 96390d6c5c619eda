/*
    Mixed-operand operations
*/

use crate::{Interval, Zero, ZeroCompare};

/// Smallest interval enclosing two operands, each either a plain
/// value or an `Interval`.
pub trait Hull<Rhs = Self> {
    fn hull(self, rhs: Rhs) -> Interval;
}

/// Common part of two operands, each either a plain value or an
/// `Interval`. Plain values are compared with the default `Zero`
/// tolerance; a value matching an interval yields the value itself.
pub trait Intersection<Rhs = Self> {
    fn intersection(self, rhs: Rhs) -> Interval;
}

impl Hull for f64 {
    fn hull(self, rhs: f64) -> Interval {
        Interval::hull_of(self, rhs)
    }
}

impl Hull<Interval> for f64 {
    fn hull(self, rhs: Interval) -> Interval {
        Interval::hull(&rhs, self)
    }
}

impl Hull<f64> for Interval {
    fn hull(self, rhs: f64) -> Interval {
        Interval::hull(&self, rhs)
    }
}

impl Hull for Interval {
    fn hull(self, rhs: Interval) -> Interval {
        Interval::hull(&self, rhs)
    }
}

impl Intersection for f64 {
    fn intersection(self, rhs: f64) -> Interval {
        if (self - rhs).is_zero(Zero::default()) {
            Interval::from(self + 0.5 * (rhs - self))
        } else {
            Interval::empty()
        }
    }
}

impl Intersection<Interval> for f64 {
    fn intersection(self, rhs: Interval) -> Interval {
        if rhs.contains(self, Zero::default()) {
            Interval::from(self)
        } else {
            Interval::empty()
        }
    }
}

impl Intersection<f64> for Interval {
    fn intersection(self, rhs: f64) -> Interval {
        rhs.intersection(self)
    }
}

impl Intersection for Interval {
    fn intersection(self, rhs: Interval) -> Interval {
        Interval::intersection(&self, rhs)
    }
}
