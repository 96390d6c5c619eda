/*
    Determinant and inverse of small square matrices
*/

use std::ops::Div;

use tracing::trace;

use super::*;

impl<T: Number + Div<Output = T>> Matrix<T> {
    /// Returns the determinant of a square matrix of size 1, 2 or 3.
    ///
    /// For interval coefficients the result encloses the determinant
    /// of every real matrix contained in this one.
    pub fn determinant(&self) -> Result<T> {
        self.check_invertible_shape()?;
        Ok(match self.rows {
            1 => self[(0, 0)],
            2 => self.minor(0, 0, 1, 1),
            _ => {
                self[(0, 0)] * self.minor(1, 1, 2, 2) - self[(0, 1)] * self.minor(1, 0, 2, 2)
                    + self[(0, 2)] * self.minor(1, 0, 2, 1)
            }
        })
    }

    /// Returns the inverse of a square matrix of size 1, 2 or 3, computed
    /// as the adjugate divided by the determinant.
    ///
    /// For interval coefficients the result encloses the inverse of every
    /// invertible real matrix contained in this one. When the determinant
    /// may be zero, the affected coefficients become `whole()`.
    pub fn inverse(&self) -> Result<Matrix<T>> {
        let det = self.determinant()?;
        if det.lower() <= 0.0 && det.upper() >= 0.0 {
            trace!(%det, "inverting a matrix whose determinant may vanish");
        }

        let size = self.rows;
        Ok(Matrix::from_fn(size, size, |row, col| {
            self.cofactor(col, row) / det
        }))
    }

    fn check_invertible_shape(&self) -> Result<()> {
        let shape = self.shape();
        if !shape.is_square() {
            Err(Error::NotSquare(shape))
        } else if !(1..=3).contains(&shape.rows) {
            Err(Error::UnsupportedSize(shape))
        } else {
            Ok(())
        }
    }

    // Determinant of the 2x2 submatrix taken from rows `r0`, `r1`
    // and columns `c0`, `c1`.
    fn minor(&self, r0: usize, c0: usize, r1: usize, c1: usize) -> T {
        self[(r0, c0)] * self[(r1, c1)] - self[(r0, c1)] * self[(r1, c0)]
    }

    // Signed determinant of the matrix without `row` and `col`.
    fn cofactor(&self, row: usize, col: usize) -> T {
        match self.rows {
            1 => T::one(),
            2 => {
                let value = self[(1 - row, 1 - col)];
                if (row + col) % 2 == 0 {
                    value
                } else {
                    -value
                }
            }
            _ => {
                // remaining rows and columns, in cyclic order so that
                // the 2x2 minor already carries the cofactor sign
                let (r0, r1) = ((row + 1) % 3, (row + 2) % 3);
                let (c0, c1) = ((col + 1) % 3, (col + 2) % 3);
                self.minor(r0, c0, r1, c1)
            }
        }
    }
}
