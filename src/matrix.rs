/*
    Definition of `Matrix<T>`
*/

use std::fmt;
use std::ops::{Index, IndexMut};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Number, Result};

mod arithmetic;
mod coefficients;
mod linalg;
mod view;

pub use coefficients::*;
pub use view::*;

/// Number of rows and columns of a matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Returns the number of coefficients.
    #[inline]
    pub const fn size(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns true if this shape has as many rows as columns.
    #[inline]
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// Reports a mismatch between the shape required by an operation and
// the shape of its second operand.
pub(crate) fn check_shape(expected: Shape, found: Shape) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        debug!(%expected, %found, "shape mismatch in binary matrix operation");
        Err(Error::ShapeMismatch { expected, found })
    }
}

/** A dense `rows x cols` grid of coefficients, stored in column-major order.
 *
 * The coefficient type is either `f64` or `Interval`. A matrix of
 * intervals is an axis-aligned box: each coefficient independently
 * bounds one coordinate. The shape is fixed at construction, and
 * every binary operation checks that both operands have the same shape.
 *
 * Most read-only operations are provided by the `Coefficients` trait,
 * which is shared with borrowed `MatrixView`s.
 */
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(
    try_from = "MatrixRepr<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

// Constructors
impl<T> Matrix<T> {
    /// Creates a matrix from coefficients listed in column-major order.
    pub fn from_col_major(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let expected = rows * cols;
        if data.len() != expected {
            return Err(Error::DataLength {
                expected,
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix whose coefficient at `(row, col)` is `f(row, col)`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for col in 0..cols {
            for row in 0..rows {
                data.push(f(row, col));
            }
        }
        Self { rows, cols, data }
    }

    /// Creates a column vector.
    pub fn column(values: Vec<T>) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            data: values,
        }
    }

    /// Creates a row vector.
    pub fn row_vector(values: Vec<T>) -> Self {
        Self {
            rows: 1,
            cols: values.len(),
            data: values,
        }
    }
}

impl<T: Copy> Matrix<T> {
    /// Creates a matrix with every coefficient set to `value`.
    pub fn from_element(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Creates a matrix from a list of rows, which must all have
    /// the same length.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        if let Some(ragged) = rows.iter().find(|row| row.as_ref().len() != cols) {
            return Err(Error::DataLength {
                expected: cols,
                found: ragged.as_ref().len(),
            });
        }
        Ok(Self::from_fn(rows.len(), cols, |row, col| {
            rows[row].as_ref()[col]
        }))
    }
}

impl<T: Number> Matrix<T> {
    /// Creates a matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_element(rows, cols, T::zero())
    }

    /// Creates a matrix of ones.
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::from_element(rows, cols, T::one())
    }

    /// Creates a square identity matrix.
    pub fn identity(size: usize) -> Self {
        Self::from_fn(size, size, kronecker_delta)
    }

    /// Creates a matrix of random coefficients drawn from `rng`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        Self::from_fn(rows, cols, |_, _| T::random(rng))
    }
}

// `(row == col) ? 1 : 0`
pub(crate) fn kronecker_delta<T: Number>(row: usize, col: usize) -> T {
    if row == col {
        T::one()
    } else {
        T::zero()
    }
}

// Shape and storage
impl<T> Matrix<T> {
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Returns the coefficients in column-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the coefficients in column-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterates mutably over the coefficients in column-major order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Returns the coefficient at `(row, col)`, or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row + col * self.rows)
        } else {
            None
        }
    }

    /// Returns the coefficient at `(row, col)` mutably,
    /// or `None` if out of range.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            self.data.get_mut(row + col * self.rows)
        } else {
            None
        }
    }

    /// Consumes this matrix returning its column-major storage.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

// In-place fills
impl<T: Number> Matrix<T> {
    pub fn set_constant(&mut self, value: T) {
        self.data.iter_mut().for_each(|coeff| *coeff = value);
    }

    pub fn set_zero(&mut self) {
        self.set_constant(T::zero());
    }

    pub fn set_ones(&mut self) {
        self.set_constant(T::one());
    }

    /// Sets ones on the diagonal and zeros elsewhere.
    /// Non-square matrices keep their shape.
    pub fn set_identity(&mut self) {
        let rows = self.rows;
        for (index, coeff) in self.data.iter_mut().enumerate() {
            *coeff = kronecker_delta(index % rows, index / rows);
        }
    }

    /// Replaces every coefficient with a random one drawn from `rng`.
    pub fn set_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.data.iter_mut().for_each(|coeff| *coeff = T::random(rng));
    }
}

// Indexing by `(row, col)` and by column-major position
impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of range for a {} matrix",
            row,
            col,
            self.shape()
        );
        &self.data[row + col * self.rows]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of range for a {} matrix",
            row,
            col,
            self.shape()
        );
        let rows = self.rows;
        &mut self.data[row + col * rows]
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

// Serialized form of a matrix, validated on the way in
#[derive(Deserialize)]
#[serde(rename = "Matrix")]
struct MatrixRepr<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> TryFrom<MatrixRepr<T>> for Matrix<T> {
    type Error = Error;

    fn try_from(repr: MatrixRepr<T>) -> Result<Self> {
        Matrix::from_col_major(repr.rows, repr.cols, repr.data).inspect_err(|err| {
            debug!(%err, "rejected serialized matrix");
        })
    }
}

// Implementing `Display`, one row per line
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.data[row + col * self.rows])?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
