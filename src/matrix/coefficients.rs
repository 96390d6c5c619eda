/*
    Coefficient-wise operations shared by matrices and views
*/

use std::ops::{Add, Div, Mul, Sub};

use super::*;
use crate::{Hull, Interval, Intersection, Zero, ZeroCompare};

/** Read access to a rectangular grid of coefficients.
 *
 * Implementors only supply the shape and a coefficient accessor; maps,
 * folds, predicates, coefficient-wise arithmetic and reductions are
 * provided on top. Every traversal visits coefficients in column-major
 * order, and every binary operation fails with `Error::ShapeMismatch`
 * unless both operands have the same shape.
 *
 * Implemented by `Matrix` and by the borrowed `MatrixView`.
 */
pub trait Coefficients<T: Copy> {
    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn cols(&self) -> usize;

    /// Returns the coefficient at `(row, col)`.
    ///
    /// Panics if out of range.
    fn coeff(&self, row: usize, col: usize) -> T;

    fn shape(&self) -> Shape {
        Shape::new(self.rows(), self.cols())
    }

    fn size(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Copies the coefficients into a new `Matrix`.
    fn to_matrix(&self) -> Matrix<T> {
        self.map(|x| x)
    }

    //
    //  Higher-order operations
    //

    /// Applies `f` to every coefficient.
    fn map<U, F>(&self, mut f: F) -> Matrix<U>
    where
        F: FnMut(T) -> U,
    {
        Matrix::from_fn(self.rows(), self.cols(), |row, col| f(self.coeff(row, col)))
    }

    /// Applies `f` to every pair of coefficients at the same position.
    fn binary_map<U, V, M, F>(&self, other: &M, mut f: F) -> Result<Matrix<V>>
    where
        U: Copy,
        M: Coefficients<U> + ?Sized,
        F: FnMut(T, U) -> V,
    {
        check_shape(self.shape(), other.shape())?;
        Ok(Matrix::from_fn(self.rows(), self.cols(), |row, col| {
            f(self.coeff(row, col), other.coeff(row, col))
        }))
    }

    /// Accumulates every coefficient into `init` using `f`.
    fn fold<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        let mut acc = init;
        for col in 0..self.cols() {
            for row in 0..self.rows() {
                acc = f(acc, self.coeff(row, col));
            }
        }
        acc
    }

    /// Combines the coefficients with `f`, starting from the first one.
    /// Returns `None` for a matrix without coefficients.
    fn reduce<F>(&self, mut f: F) -> Option<T>
    where
        F: FnMut(T, T) -> T,
    {
        self.fold(None, |acc, x| match acc {
            None => Some(x),
            Some(acc) => Some(f(acc, x)),
        })
    }

    /// Accumulates every pair of coefficients at the same position
    /// into `init` using `f`.
    fn binary_fold<U, A, M, F>(&self, other: &M, init: A, mut f: F) -> Result<A>
    where
        U: Copy,
        M: Coefficients<U> + ?Sized,
        F: FnMut(A, T, U) -> A,
    {
        check_shape(self.shape(), other.shape())?;
        let mut acc = init;
        for col in 0..self.cols() {
            for row in 0..self.rows() {
                acc = f(acc, self.coeff(row, col), other.coeff(row, col));
            }
        }
        Ok(acc)
    }

    /// Returns true if `pred` holds for some coefficient.
    fn any<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(T) -> bool,
    {
        (0..self.cols()).any(|col| (0..self.rows()).any(|row| pred(self.coeff(row, col))))
    }

    /// Returns true if `pred` holds for every coefficient.
    fn all<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(T) -> bool,
    {
        !self.any(|x| !pred(x))
    }

    /// Returns true if `pred` holds for some pair of coefficients
    /// at the same position.
    fn binary_any<U, M, F>(&self, other: &M, mut pred: F) -> Result<bool>
    where
        U: Copy,
        M: Coefficients<U> + ?Sized,
        F: FnMut(T, U) -> bool,
    {
        check_shape(self.shape(), other.shape())?;
        Ok((0..self.cols()).any(|col| {
            (0..self.rows()).any(|row| pred(self.coeff(row, col), other.coeff(row, col)))
        }))
    }

    /// Returns true if `pred` holds for every pair of coefficients
    /// at the same position.
    fn binary_all<U, M, F>(&self, other: &M, mut pred: F) -> Result<bool>
    where
        U: Copy,
        M: Coefficients<U> + ?Sized,
        F: FnMut(T, U) -> bool,
    {
        self.binary_any(other, |x, y| !pred(x, y)).map(|found| !found)
    }

    /// Exact coefficient-wise equality. Operands of different
    /// shapes are never equal.
    fn coefficients_eq<M>(&self, other: &M) -> bool
    where
        T: PartialEq,
        M: Coefficients<T> + ?Sized,
    {
        self.shape() == other.shape() && self.binary_all(other, |x, y| x == y).unwrap_or(false)
    }

    //
    //  Predicates
    //

    /// Returns true if every coefficient is within `zero` of `value`.
    fn is_constant(&self, value: f64, zero: Zero) -> bool
    where
        T: Number,
    {
        self.all(|x| ZeroCompare::is_zero(&(x - T::from(value)), zero))
    }

    /// Returns true if every coefficient is within `zero` of zero.
    fn is_zero(&self, zero: Zero) -> bool
    where
        T: Number,
    {
        self.all(|x| ZeroCompare::is_zero(&x, zero))
    }

    /// Returns true if every coefficient is within `zero` of one.
    fn is_ones(&self, zero: Zero) -> bool
    where
        T: Number,
    {
        self.is_constant(1.0, zero)
    }

    /// Returns true if every coefficient is within `zero` of the
    /// corresponding identity coefficient.
    fn is_identity(&self, zero: Zero) -> bool
    where
        T: Number,
    {
        (0..self.cols()).all(|col| {
            (0..self.rows()).all(|row| {
                let residual = self.coeff(row, col) - kronecker_delta::<T>(row, col);
                ZeroCompare::is_zero(&residual, zero)
            })
        })
    }

    //
    //  Coefficient-wise operations
    //

    fn cwise_lower(&self) -> Matrix<f64>
    where
        T: Number,
    {
        self.map(|x| x.lower())
    }

    fn cwise_upper(&self) -> Matrix<f64>
    where
        T: Number,
    {
        self.map(|x| x.upper())
    }

    fn cwise_median(&self) -> Matrix<f64>
    where
        T: Number,
    {
        self.map(|x| x.median())
    }

    fn cwise_width(&self) -> Matrix<f64>
    where
        T: Number,
    {
        self.map(|x| x.width())
    }

    fn cwise_squared(&self) -> Matrix<T>
    where
        T: Number,
    {
        self.map(|x| x.squared())
    }

    /// Converts every coefficient to an `Interval`.
    fn bounds(&self) -> Matrix<Interval>
    where
        T: Number,
    {
        self.map(|x| x.bounds())
    }

    /// Coefficient-wise product.
    fn cwise_product<U, M>(&self, other: &M) -> Result<Matrix<<T as Mul<U>>::Output>>
    where
        T: Mul<U>,
        U: Copy,
        M: Coefficients<U> + ?Sized,
    {
        self.binary_map(other, |x, y| x * y)
    }

    /// Coefficient-wise quotient.
    fn cwise_quotient<U, M>(&self, other: &M) -> Result<Matrix<<T as Div<U>>::Output>>
    where
        T: Div<U>,
        U: Copy,
        M: Coefficients<U> + ?Sized,
    {
        self.binary_map(other, |x, y| x / y)
    }

    /// Coefficient-wise hull.
    fn cwise_hull<U, M>(&self, other: &M) -> Result<Matrix<Interval>>
    where
        T: Hull<U>,
        U: Copy,
        M: Coefficients<U> + ?Sized,
    {
        self.binary_map(other, |x, y| x.hull(y))
    }

    /// Coefficient-wise intersection.
    fn cwise_intersection<U, M>(&self, other: &M) -> Result<Matrix<Interval>>
    where
        T: Intersection<U>,
        U: Copy,
        M: Coefficients<U> + ?Sized,
    {
        self.binary_map(other, |x, y| x.intersection(y))
    }

    //
    //  Reductions
    //

    /// Sum of all coefficients, zero for a matrix without coefficients.
    fn sum(&self) -> T
    where
        T: num_traits::Zero,
    {
        self.fold(T::zero(), |acc, x| acc + x)
    }

    /// Product of all coefficients, one for a matrix without coefficients.
    fn product(&self) -> T
    where
        T: num_traits::One,
    {
        self.fold(T::one(), |acc, x| acc * x)
    }

    //
    //  Matrix arithmetic
    //

    /// Returns the transpose.
    fn transpose(&self) -> Matrix<T> {
        Matrix::from_fn(self.cols(), self.rows(), |row, col| self.coeff(col, row))
    }

    /// Coefficient-wise sum.
    fn checked_add<U, M>(&self, other: &M) -> Result<Matrix<<T as Add<U>>::Output>>
    where
        T: Add<U>,
        U: Copy,
        M: Coefficients<U> + ?Sized,
    {
        self.binary_map(other, |x, y| x + y)
    }

    /// Coefficient-wise difference.
    fn checked_sub<U, M>(&self, other: &M) -> Result<Matrix<<T as Sub<U>>::Output>>
    where
        T: Sub<U>,
        U: Copy,
        M: Coefficients<U> + ?Sized,
    {
        self.binary_map(other, |x, y| x - y)
    }

    /// Returns the matrix product `self * other`, which requires
    /// `self.cols() == other.rows()`.
    fn matrix_product<U, V, M>(&self, other: &M) -> Result<Matrix<V>>
    where
        T: Mul<U, Output = V>,
        U: Copy,
        V: Copy + num_traits::Zero,
        M: Coefficients<U> + ?Sized,
    {
        check_shape(Shape::new(self.cols(), other.cols()), other.shape())?;
        let inner = self.cols();
        Ok(Matrix::from_fn(self.rows(), other.cols(), |row, col| {
            (0..inner).fold(V::zero(), |acc, k| {
                acc + self.coeff(row, k) * other.coeff(k, col)
            })
        }))
    }
}

impl<T: Copy> Coefficients<T> for Matrix<T> {
    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn coeff(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }

    fn to_matrix(&self) -> Matrix<T> {
        self.clone()
    }
}

impl<T: Copy> Coefficients<T> for MatrixView<'_, T> {
    #[inline]
    fn rows(&self) -> usize {
        MatrixView::rows(self)
    }

    #[inline]
    fn cols(&self) -> usize {
        MatrixView::cols(self)
    }

    #[inline]
    fn coeff(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }
}
