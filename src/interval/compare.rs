/*
    Equality, containment, and comparisons against zero
*/

use crate::{Zero, ZeroCompare};

use super::*;

// Implementing `PartialEq`: bounds compared exactly, all empty
// intervals are equal to each other.
impl PartialEq for Interval {
    fn eq(&self, other: &Interval) -> bool {
        (self.is_empty() && other.is_empty())
            || (self.lower == other.lower && self.upper == other.upper)
    }
}

impl PartialEq<f64> for Interval {
    fn eq(&self, value: &f64) -> bool {
        self.lower == *value && self.upper == *value
    }
}

impl PartialEq<Interval> for f64 {
    fn eq(&self, interval: &Interval) -> bool {
        interval == self
    }
}

impl PartialEq<Zero> for Interval {
    fn eq(&self, zero: &Zero) -> bool {
        self.is_zero(*zero)
    }
}

// Containment and overlap
impl Interval {
    /// Returns true if `value` lies within this `Interval` expanded by
    /// `tolerance` on both sides.
    pub fn contains(&self, value: f64, tolerance: Zero) -> bool {
        value >= self.lower - tolerance.precision() && value <= self.upper + tolerance.precision()
    }

    /// Returns true if `value` lies within this `Interval` contracted by
    /// `tolerance` on both sides.
    pub fn strictly_contains(&self, value: f64, tolerance: Zero) -> bool {
        value > self.lower + tolerance.precision() && value < self.upper - tolerance.precision()
    }

    /// Returns true if `interval` lies within this `Interval` expanded by
    /// `tolerance`. The empty interval is contained in every interval.
    pub fn contains_interval(&self, interval: Interval, tolerance: Zero) -> bool {
        interval.is_empty()
            || (interval.lower >= self.lower - tolerance.precision()
                && interval.upper <= self.upper + tolerance.precision())
    }

    /// Returns true if `interval` lies within this `Interval` contracted by
    /// `tolerance`.
    pub fn strictly_contains_interval(&self, interval: Interval, tolerance: Zero) -> bool {
        interval.is_empty()
            || (interval.lower > self.lower + tolerance.precision()
                && interval.upper < self.upper - tolerance.precision())
    }

    /// Returns true if the two intervals share a point, allowing a gap
    /// of up to `tolerance` between them.
    pub fn overlaps(&self, interval: Interval, tolerance: Zero) -> bool {
        interval.lower <= self.upper + tolerance.precision()
            && interval.upper >= self.lower - tolerance.precision()
    }

    /// Returns true if the two intervals share a sub-interval wider than
    /// `tolerance` on each side.
    pub fn strictly_overlaps(&self, interval: Interval, tolerance: Zero) -> bool {
        interval.lower < self.upper - tolerance.precision()
            && interval.upper > self.lower + tolerance.precision()
    }
}

// Comparisons against zero
impl Interval {
    /// Returns true if this `Interval` lies within `[-precision, precision]`.
    pub fn is_zero(&self, zero: Zero) -> bool {
        self.lower >= -zero.precision() && self.upper <= zero.precision()
    }

    /// Returns true if this `Interval` lies entirely outside the zero band.
    pub fn is_not_zero(&self, zero: Zero) -> bool {
        self.lower > zero.precision() || self.upper < -zero.precision()
    }

    /// Returns true if this `Interval` lies entirely below the zero band.
    pub fn is_less_than_zero(&self, zero: Zero) -> bool {
        self.upper < -zero.precision()
    }

    /// Returns true if this `Interval` lies entirely above the zero band.
    pub fn is_greater_than_zero(&self, zero: Zero) -> bool {
        self.lower > zero.precision()
    }

    pub fn is_less_or_equal_zero(&self, zero: Zero) -> bool {
        self.upper <= zero.precision()
    }

    pub fn is_greater_or_equal_zero(&self, zero: Zero) -> bool {
        self.lower >= -zero.precision()
    }
}

impl ZeroCompare for Interval {
    fn is_zero(&self, zero: Zero) -> bool {
        Interval::is_zero(self, zero)
    }

    fn is_not_zero(&self, zero: Zero) -> bool {
        Interval::is_not_zero(self, zero)
    }

    fn is_less_than_zero(&self, zero: Zero) -> bool {
        Interval::is_less_than_zero(self, zero)
    }

    fn is_greater_than_zero(&self, zero: Zero) -> bool {
        Interval::is_greater_than_zero(self, zero)
    }

    fn is_less_or_equal_zero(&self, zero: Zero) -> bool {
        Interval::is_less_or_equal_zero(self, zero)
    }

    fn is_greater_or_equal_zero(&self, zero: Zero) -> bool {
        Interval::is_greater_or_equal_zero(self, zero)
    }
}
