//! LU decomposition with partial pivoting

use crate::element::LinalgElement;
use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Pivot magnitudes below this are treated as zero, compared in f64
const PIVOT_TOLERANCE: f64 = 1e-15;

/// LU decomposition result: P·A = L·U
///
/// L and U are packed into a single matrix for memory efficiency: the
/// upper triangle (diagonal included) is U, the strictly-lower triangle
/// holds L's multipliers, and L's unit diagonal is implicit. Produced once
/// by [`lu_decompose`] and read-only afterwards; one decomposition can
/// solve any number of right-hand sides.
#[derive(Clone, Debug)]
pub struct LuDecomposition<T: LinalgElement> {
    /// Packed factors: U in the upper triangle (diagonal included), L's
    /// sub-diagonal multipliers below it (unit diagonal not stored)
    pub lu: Matrix<T>,

    /// Permutation: output row `i` holds original input row
    /// `permutation[i]`; always a permutation of `0..dimension`
    pub permutation: Vec<usize>,

    /// +1 or -1: parity of the row swaps performed during pivoting,
    /// usable as the determinant sign factor
    pub sign: i32,
}

impl<T: LinalgElement> LuDecomposition<T> {
    /// Dimension of the decomposed square system
    #[inline]
    pub fn dimension(&self) -> usize {
        self.lu.rows()
    }
}

/// Decompose a square matrix into packed LU factors with partial pivoting
///
/// Gaussian elimination runs on a private copy, so the caller's matrix is
/// never mutated. At each pivot column the remaining row with the largest
/// absolute value is selected (first-found wins on ties), rows are
/// swapped, and the sub-diagonal multipliers are stored in place.
///
/// # Errors
///
/// - [`Error::ShapeMismatch`] if `a` is not square.
/// - [`Error::SingularMatrix`] when a pivoted diagonal magnitude falls
///   below 1e-15; the error carries the failing pivot index and no partial
///   result is usable.
pub fn lu_decompose<T: LinalgElement>(a: &Matrix<T>) -> Result<LuDecomposition<T>> {
    if a.rows() != a.cols() {
        return Err(Error::ShapeMismatch {
            expected: (a.rows(), a.rows()),
            got: a.shape(),
        });
    }
    let dim = a.rows();

    // Working copy, flat row-major like the container itself
    let mut lu: Vec<T> = a.as_slice().to_vec();
    let mut permutation: Vec<usize> = (0..dim).collect();
    let mut sign = 1;

    for i in 0..dim {
        // Select the row at or below i with the largest magnitude in
        // column i; strict > keeps the earliest row on ties
        let mut max_index = i;
        let mut max_val = lu[i * dim + i].abs_val();
        for j in (i + 1)..dim {
            let val = lu[j * dim + i].abs_val();
            if val > max_val {
                max_val = val;
                max_index = j;
            }
        }

        if max_index != i {
            // Swap the entire rows, multipliers included, so the packed L
            // stays consistent with the recorded permutation
            for j in 0..dim {
                lu.swap(i * dim + j, max_index * dim + j);
            }
            permutation.swap(i, max_index);
            sign = -sign;
        }

        if lu[i * dim + i].abs_val().to_f64() < PIVOT_TOLERANCE {
            return Err(Error::SingularMatrix { pivot: i });
        }

        for j in (i + 1)..dim {
            let mult = lu[j * dim + i] / lu[i * dim + i];
            lu[j * dim + i] = mult;
            for k in (i + 1)..dim {
                let update = mult * lu[i * dim + k];
                lu[j * dim + k] = lu[j * dim + k] - update;
            }
        }
    }

    Ok(LuDecomposition {
        lu: Matrix::from_parts(dim, dim, lu),
        permutation,
        sign,
    })
}
