/*
    Borrowed rectangular views of a `Matrix`
*/

use std::fmt;

use super::*;

/// A read-only rectangular window into a `Matrix`.
///
/// A view borrows the coefficients of its parent: column `c` of the view
/// starts `c * col_stride` positions after its first coefficient in the
/// parent's column-major storage.
#[derive(Clone, Copy, Debug)]
pub struct MatrixView<'a, T> {
    data: &'a [T],
    rows: usize,
    cols: usize,
    col_stride: usize,
}

impl<'a, T> MatrixView<'a, T> {
    // Borrows the `rows x cols` block beginning at column-major position
    // `offset` of `data`, whose columns are `col_stride` apart.
    fn new(data: &'a [T], offset: usize, rows: usize, cols: usize, col_stride: usize) -> Self {
        let len = if rows == 0 || cols == 0 {
            0
        } else {
            (cols - 1) * col_stride + rows
        };
        Self {
            data: &data[offset..offset + len],
            rows,
            cols,
            col_stride,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Returns the coefficient at `(row, col)`, or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&'a T> {
        if row < self.rows && col < self.cols {
            self.data.get(row + col * self.col_stride)
        } else {
            None
        }
    }

    /// Returns the `rows x cols` sub-view starting at `(start_row, start_col)`.
    ///
    /// Panics if the block does not fit inside this view.
    pub fn block(
        &self,
        start_row: usize,
        start_col: usize,
        rows: usize,
        cols: usize,
    ) -> MatrixView<'a, T> {
        assert!(
            start_row + rows <= self.rows && start_col + cols <= self.cols,
            "block of {} at ({}, {}) does not fit in a {} view",
            Shape::new(rows, cols),
            start_row,
            start_col,
            self.shape()
        );
        let offset = if rows == 0 || cols == 0 {
            0
        } else {
            start_row + start_col * self.col_stride
        };
        Self::new(self.data, offset, rows, cols, self.col_stride)
    }

    /// Returns row `index` as a `1 x cols` view.
    pub fn row(&self, index: usize) -> MatrixView<'a, T> {
        self.block(index, 0, 1, self.cols)
    }

    /// Returns column `index` as a `rows x 1` view.
    pub fn col(&self, index: usize) -> MatrixView<'a, T> {
        self.block(0, index, self.rows, 1)
    }
}

impl<T> std::ops::Index<(usize, usize)> for MatrixView<'_, T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of range for a {} view",
            row,
            col,
            self.shape()
        );
        &self.data[row + col * self.col_stride]
    }
}

// Views into a matrix
impl<T> Matrix<T> {
    /// Borrows the whole matrix as a view.
    pub fn as_view(&self) -> MatrixView<'_, T> {
        MatrixView::new(&self.data, 0, self.rows, self.cols, self.rows)
    }

    /// Borrows the `rows x cols` block starting at `(start_row, start_col)`.
    ///
    /// Panics if the block does not fit inside this matrix.
    pub fn block(
        &self,
        start_row: usize,
        start_col: usize,
        rows: usize,
        cols: usize,
    ) -> MatrixView<'_, T> {
        self.as_view().block(start_row, start_col, rows, cols)
    }

    /// Borrows row `index`.
    pub fn row(&self, index: usize) -> MatrixView<'_, T> {
        self.as_view().row(index)
    }

    /// Borrows column `index`.
    pub fn col(&self, index: usize) -> MatrixView<'_, T> {
        self.as_view().col(index)
    }
}

impl<T: fmt::Display + Copy> fmt::Display for MatrixView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_matrix(), f)
    }
}
