use std::f64::consts::PI;

use interval_bounds::round::{self, RoundingMode::*};
use interval_bounds::Interval;

#[test]
fn neighbors() {
    assert_eq!(round::next_up(1.0), 1.0 + f64::EPSILON);
    assert_eq!(round::next_down(1.0), 1.0 - f64::EPSILON / 2.0);
    assert_eq!(round::next_up(0.0), f64::from_bits(1));
    assert_eq!(round::next_up(-0.0), f64::from_bits(1));
    assert_eq!(round::next_down(0.0), -f64::from_bits(1));
    assert_eq!(round::next_up(f64::MAX), f64::INFINITY);
    assert_eq!(round::next_up(f64::NEG_INFINITY), f64::MIN);
    assert_eq!(round::next_down(f64::NEG_INFINITY), f64::NEG_INFINITY);
    assert_eq!(round::next_up(-1.0), -1.0 + f64::EPSILON / 2.0);
    assert!(round::next_up(f64::NAN).is_nan());
    assert_eq!(ToNegative.reverse(), ToPositive);
    assert_eq!(ToPositive.reverse(), ToNegative);
}

#[test]
fn exact_results() {
    assert_eq!(round::add(1.0, 2.0, ToNegative), 3.0);
    assert_eq!(round::add(1.0, 2.0, ToPositive), 3.0);
    assert_eq!(round::sub(1.0, 0.25, ToNegative), 0.75);
    assert_eq!(round::mul(3.0, 0.5, ToPositive), 1.5);
    assert_eq!(round::div(1.0, 4.0, ToNegative), 0.25);
    assert_eq!(round::sqrt(9.0, ToNegative), 3.0);
    assert_eq!(round::sqrt(9.0, ToPositive), 3.0);
    assert_eq!(round::powi(-2.0, 3, ToNegative), -8.0);
    assert_eq!(round::powi(5.0, 0, ToPositive), 1.0);
}

#[test]
fn inexact_results() {
    let cases: [(&str, fn(f64, f64, round::RoundingMode) -> f64, f64, f64); 4] = [
        ("add", round::add, 0.1, 0.2),
        ("sub", round::sub, 1.0, 1e-20),
        ("mul", round::mul, 0.1, 0.3),
        ("div", round::div, 1.0, 3.0),
    ];

    for (name, op, a, b) in cases {
        let lower = op(a, b, ToNegative);
        let upper = op(a, b, ToPositive);
        assert!(
            lower < upper && round::next_up(lower) == upper,
            "{}({:e}, {:e}) not bracketed by neighbors: [{:e}, {:e}]",
            name,
            a,
            b,
            lower,
            upper
        );
    }

    let lower = round::sqrt(2.0, ToNegative);
    let upper = round::sqrt(2.0, ToPositive);
    assert_eq!(round::next_up(lower), upper);
    assert!(lower <= 2.0_f64.sqrt() && 2.0_f64.sqrt() <= upper);

    let lower = round::powi(1.1, 7, ToNegative);
    let upper = round::powi(1.1, 7, ToPositive);
    assert!(lower < upper && upper - lower < 1e-14, "powi(1.1, 7) in [{:e}, {:e}]", lower, upper);
}

#[test]
fn special_values() {
    assert_eq!(round::mul(0.0, f64::INFINITY, ToNegative), 0.0);
    assert_eq!(round::mul(f64::NEG_INFINITY, 0.0, ToPositive), 0.0);
    assert_eq!(round::div(0.0, 5.0, ToPositive), 0.0);
    assert_eq!(round::div(1.0, f64::INFINITY, ToNegative), 0.0);
    assert_eq!(round::add(f64::INFINITY, 1.0, ToNegative), f64::INFINITY);

    // overflow saturates in the inward direction
    assert_eq!(round::mul(f64::MAX, 2.0, ToNegative), f64::MAX);
    assert_eq!(round::mul(f64::MAX, 2.0, ToPositive), f64::INFINITY);
    assert_eq!(round::add(f64::MIN, f64::MIN, ToPositive), f64::MIN);
    assert_eq!(round::add(f64::MIN, f64::MIN, ToNegative), f64::NEG_INFINITY);

    // underflow steps outward
    let tiny = round::mul(f64::MIN_POSITIVE, 0.5, ToNegative);
    let above = round::mul(f64::MIN_POSITIVE, 0.5, ToPositive);
    assert!(tiny < above && tiny >= 0.0);
}

#[test]
fn small_normal_results() {
    // 2^-1000: normal, but residuals of its products are subnormal
    let scale = f64::from_bits(23 << 52);
    let a = 1.0 + f64::EPSILON;
    let b = scale * a;

    let nearest = a * b;
    let lower = round::mul(a, b, ToNegative);
    let upper = round::mul(a, b, ToPositive);
    assert!(lower < nearest && nearest < upper, "mul not widened: [{:e}, {:e}]", lower, upper);

    let product = Interval::from(a) * Interval::from(b);
    assert!(!product.is_singleton(), "inexact product collapsed to {}", product);

    let nearest = b / 3.0;
    let lower = round::div(b, 3.0, ToNegative);
    let upper = round::div(b, 3.0, ToPositive);
    assert!(lower < nearest && nearest < upper, "div not widened: [{:e}, {:e}]", lower, upper);

    let mut x = scale;
    for _ in 0..200 {
        let root = x.sqrt();
        let lower = round::sqrt(x, ToNegative);
        let upper = round::sqrt(x, ToPositive);
        assert!(
            lower < upper && lower <= root && root <= upper,
            "sqrt({:e}) not bracketed: [{:e}, {:e}]",
            x,
            lower,
            upper
        );
        assert!(!Interval::from(x).sqrt().is_singleton());
        x = round::next_up(x);
    }
}

#[test]
fn elementary() {
    let unary: [(&str, fn(f64, round::RoundingMode) -> f64, fn(f64) -> f64, f64); 8] = [
        ("exp", round::exp, f64::exp, 0.5),
        ("ln", round::ln, f64::ln, 3.0),
        ("sin", round::sin, f64::sin, 1.0),
        ("cos", round::cos, f64::cos, 1.0),
        ("tan", round::tan, f64::tan, 1.0),
        ("asin", round::asin, f64::asin, 0.3),
        ("acos", round::acos, f64::acos, 0.3),
        ("atan", round::atan, f64::atan, 2.0),
    ];

    for (name, directed, nearest, x) in unary {
        let lower = directed(x, ToNegative);
        let upper = directed(x, ToPositive);
        let value = nearest(x);
        assert!(
            lower < upper && lower <= value && value <= upper,
            "{}({:e}) = {:e} not within [{:e}, {:e}]",
            name,
            x,
            value,
            lower,
            upper
        );
    }

    // overflow saturates in the inward direction
    assert_eq!(round::exp(1000.0, ToNegative), f64::MAX);
    assert_eq!(round::exp(1000.0, ToPositive), f64::INFINITY);

    assert!(round::pi(ToNegative) <= PI && PI <= round::pi(ToPositive));
    assert!(round::pi(ToNegative) < round::pi(ToPositive));
}
