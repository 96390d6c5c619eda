/*
    Scalar arithmetic and equality on `Matrix<T>`
*/

use std::ops::{Div, DivAssign, Mul, MulAssign, Neg};

use super::*;

impl<T: Copy + Neg<Output = T>> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(mut self) -> Matrix<T> {
        self.data.iter_mut().for_each(|x| *x = -*x);
        self
    }
}

impl<T: Copy + Neg<Output = T>> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        -self.clone()
    }
}

// Scaling by a scalar, either `f64` or `Interval`
impl<T, S> Mul<S> for Matrix<T>
where
    T: Copy + Mul<S, Output = T>,
    S: Copy,
{
    type Output = Matrix<T>;

    fn mul(mut self, scalar: S) -> Matrix<T> {
        self *= scalar;
        self
    }
}

impl<T, S> Div<S> for Matrix<T>
where
    T: Copy + Div<S, Output = T>,
    S: Copy,
{
    type Output = Matrix<T>;

    fn div(mut self, scalar: S) -> Matrix<T> {
        self /= scalar;
        self
    }
}

impl<T, S> MulAssign<S> for Matrix<T>
where
    T: Copy + Mul<S, Output = T>,
    S: Copy,
{
    fn mul_assign(&mut self, scalar: S) {
        self.data.iter_mut().for_each(|x| *x = *x * scalar);
    }
}

impl<T, S> DivAssign<S> for Matrix<T>
where
    T: Copy + Div<S, Output = T>,
    S: Copy,
{
    fn div_assign(&mut self, scalar: S) {
        self.data.iter_mut().for_each(|x| *x = *x / scalar);
    }
}

// Exact coefficient-wise equality
impl<T: Copy + PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.coefficients_eq(other)
    }
}

impl<T: Copy + PartialEq> PartialEq<MatrixView<'_, T>> for Matrix<T> {
    fn eq(&self, other: &MatrixView<'_, T>) -> bool {
        self.coefficients_eq(other)
    }
}

impl<T: Copy + PartialEq> PartialEq<Matrix<T>> for MatrixView<'_, T> {
    fn eq(&self, other: &Matrix<T>) -> bool {
        self.coefficients_eq(other)
    }
}
