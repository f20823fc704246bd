//! Dense row-major matrix container

use crate::element::Element;
use crate::error::{Error, Result};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Dense rows×cols matrix stored in a single contiguous `Vec<T>`
///
/// Storage is row-major: element (row, col) lives at `row * cols + col`,
/// which keeps whole rows contiguous for the multiplication kernels. A
/// `Matrix` owns its storage: `clone` duplicates it and no two matrices
/// ever alias, so mutating one never affects another.
///
/// # Indexing
///
/// The default accessors `m[(row, col)]` check both coordinates and panic
/// out of range. The `unsafe` [`Matrix::get_unchecked`] /
/// [`Matrix::get_unchecked_mut`] accessors skip the check; the hot kernels
/// use them where the loop bounds already guarantee validity.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T: Element> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Element> Matrix<T> {
    /// Create a zero-filled matrix with the given dimensions
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Create a matrix from a flat row-major slice
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal `rows * cols`. For a fallible
    /// alternative, use [`Self::try_from_slice`].
    pub fn from_slice(data: &[T], rows: usize, cols: usize) -> Self {
        Self::try_from_slice(data, rows, cols).expect("Matrix::from_slice failed")
    }

    /// Create a matrix from a flat row-major slice (fallible version)
    ///
    /// Returns an error if `data.len()` does not equal `rows * cols`.
    pub fn try_from_slice(data: &[T], rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::DimensionMismatch {
                expected: rows * cols,
                got: data.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            data: data.to_vec(),
        })
    }

    /// Wrap a flat sequence as an n×1 column matrix
    pub fn column_vector(values: &[T]) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            data: values.to_vec(),
        }
    }

    /// Wrap a flat sequence as a 1×n row matrix
    pub fn row_vector(values: &[T]) -> Self {
        Self {
            rows: 1,
            cols: values.len(),
            data: values.to_vec(),
        }
    }

    /// Create an n×n identity matrix
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        m
    }

    /// Assemble a matrix from its dimensions and owned row-major storage.
    /// Internal constructor for kernels that build the backing vector
    /// directly.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The backing row-major storage
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Read an element without bounds checking
    ///
    /// # Safety
    ///
    /// The caller must guarantee `row < rows` and `col < cols`; a
    /// violating index is undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> &T {
        self.data.get_unchecked(row * self.cols + col)
    }

    /// Write an element without bounds checking
    ///
    /// # Safety
    ///
    /// The caller must guarantee `row < rows` and `col < cols`; a
    /// violating index is undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, row: usize, col: usize) -> &mut T {
        self.data.get_unchecked_mut(row * self.cols + col)
    }

    /// Element-wise sum of two equally shaped matrices
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(Error::ShapeMismatch {
                expected: self.shape(),
                got: other.shape(),
            });
        }
        Ok(self.add_unchecked(other))
    }

    /// Element-wise difference of two equally shaped matrices
    pub fn sub(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(Error::ShapeMismatch {
                expected: self.shape(),
                got: other.shape(),
            });
        }
        Ok(self.sub_unchecked(other))
    }

    /// Element-wise sum without shape validation. The Strassen quadrants
    /// are equal-sized by construction, so the recursion skips the check.
    pub(crate) fn add_unchecked(&self, other: &Self) -> Self {
        debug_assert_eq!(self.shape(), other.shape());
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| a + b)
            .collect();
        Self::from_parts(self.rows, self.cols, data)
    }

    /// Element-wise difference without shape validation
    pub(crate) fn sub_unchecked(&self, other: &Self) -> Self {
        debug_assert_eq!(self.shape(), other.shape());
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| a - b)
            .collect();
        Self::from_parts(self.rows, self.cols, data)
    }

    /// Copy out a size×size block starting at (start_row, start_col)
    ///
    /// # Panics
    ///
    /// Panics if the block extends past the matrix bounds.
    pub fn sub_block(&self, start_row: usize, start_col: usize, size: usize) -> Self {
        let mut sub = Self::zeros(size, size);
        for i in 0..size {
            for j in 0..size {
                sub[(i, j)] = self[(start_row + i, start_col + j)];
            }
        }
        sub
    }

    /// Overwrite a region in place with the contents of `block`
    ///
    /// # Panics
    ///
    /// Panics if `block` extends past the matrix bounds.
    pub fn insert_block(&mut self, start_row: usize, start_col: usize, block: &Self) {
        for i in 0..block.rows {
            for j in 0..block.cols {
                self[(start_row + i, start_col + j)] = block[(i, j)];
            }
        }
    }

    /// Extend to a new_size×new_size square, zero-filled outside the
    /// original top-left region
    ///
    /// Already-square matrices of the target size come back as an equal
    /// clone. Padded entries are exactly `T::zero()`.
    pub fn pad_to_square(&self, new_size: usize) -> Self {
        if self.rows == new_size && self.cols == new_size {
            return self.clone();
        }
        let mut padded = Self::zeros(new_size, new_size);
        for i in 0..self.rows.min(new_size) {
            for j in 0..self.cols.min(new_size) {
                padded[(i, j)] = self[(i, j)];
            }
        }
        padded
    }

    /// Copy out the top-left rows×cols region
    ///
    /// # Panics
    ///
    /// Panics if the matrix is smaller than the requested region.
    pub fn unpad(&self, rows: usize, cols: usize) -> Self {
        let mut result = Self::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                result[(i, j)] = self[(i, j)];
            }
        }
        result
    }
}

impl<T: Element> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T: Element> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

impl<T: Element + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.data[i * self.cols + j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_shape_and_storage() {
        let m = Matrix::<f64>::zeros(2, 3);
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.as_slice(), &[0.0; 6]);
    }

    #[test]
    fn try_from_slice_rejects_bad_length() {
        let err = Matrix::try_from_slice(&[1.0, 2.0, 3.0], 2, 2).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 4,
                got: 3
            }
        ));
    }

    #[test]
    fn row_major_layout() {
        let m = Matrix::from_slice(&[1, 2, 3, 4, 5, 6], 2, 3);
        assert_eq!(m[(0, 2)], 3);
        assert_eq!(m[(1, 0)], 4);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn checked_index_panics_out_of_range() {
        let m = Matrix::<f64>::zeros(2, 2);
        // (0, 3) maps inside the backing vector but is out of range
        let _ = m[(0, 3)];
    }

    #[test]
    fn clone_does_not_alias() {
        let mut a = Matrix::from_slice(&[1.0, 2.0], 1, 2);
        let b = a.clone();
        a[(0, 0)] = 9.0;
        assert_eq!(b[(0, 0)], 1.0);
    }

    #[test]
    fn pad_of_exact_square_is_equal() {
        let m = Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0], 2, 2);
        assert_eq!(m.pad_to_square(2), m);
    }
}
