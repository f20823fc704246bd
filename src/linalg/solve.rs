//! Linear system solving from a packed LU decomposition

use super::lu::{lu_decompose, LuDecomposition};
use crate::element::LinalgElement;
use crate::error::{Error, Result};
use crate::matrix::Matrix;

impl<T: LinalgElement> LuDecomposition<T> {
    /// Solve the original system A·x = b from the packed factors
    ///
    /// Applies the recorded row permutation to `b`, forward-substitutes
    /// through L (unit diagonal implicit), then backward-substitutes
    /// through U. No residual checking happens here; callers wanting
    /// validation can recompute A·x with the multiplication engine.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if `b.len()` differs from the system
    /// dimension.
    pub fn solve(&self, b: &[T]) -> Result<Vec<T>> {
        let dim = self.dimension();
        if b.len() != dim {
            return Err(Error::DimensionMismatch {
                expected: dim,
                got: b.len(),
            });
        }

        // Apply the pivoting row order to the right-hand side
        let pb: Vec<T> = self.permutation.iter().map(|&p| b[p]).collect();

        // Forward substitution: L y = P b
        let mut y = vec![T::zero(); dim];
        for i in 0..dim {
            let mut sum = T::zero();
            for j in 0..i {
                sum = sum + self.lu[(i, j)] * y[j];
            }
            y[i] = pb[i] - sum;
        }

        // Backward substitution: U x = y
        let mut x = vec![T::zero(); dim];
        for i in (0..dim).rev() {
            let mut sum = T::zero();
            for j in (i + 1)..dim {
                sum = sum + self.lu[(i, j)] * x[j];
            }
            x[i] = (y[i] - sum) / self.lu[(i, i)];
        }

        Ok(x)
    }
}

/// Decompose `a` and solve a single system a·x = b in one call
///
/// # Errors
///
/// Propagates the decomposition errors ([`Error::ShapeMismatch`],
/// [`Error::SingularMatrix`]) and the solver's
/// [`Error::DimensionMismatch`].
pub fn solve<T: LinalgElement>(a: &Matrix<T>, b: &[T]) -> Result<Vec<T>> {
    lu_decompose(a)?.solve(b)
}
