//! Hybrid classical/Strassen matrix multiplication

use crate::element::Element;
use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Size threshold shared by the hybrid dispatch and the recursion base.
///
/// At dispatch it bounds an operand's element count; in the recursion it
/// bounds the current dimension. Below it, recursion overhead and the
/// temporary quadrant allocations cost more than the saved multiplications.
const THRESHOLD: usize = 64;

/// Smallest power of two greater than or equal to `n`
///
/// The padded square size used by the recursive multiplier.
/// `next_power_of_two(0)` is 1; powers of two map to themselves.
#[inline]
pub fn next_power_of_two(n: usize) -> usize {
    n.next_power_of_two()
}

/// Multiply two matrices, choosing between the classical and Strassen
/// algorithms
///
/// Small operands (fewer than 64 elements on either side) go straight to
/// the classical kernel on their original shapes. Larger products are
/// padded to a shared power-of-two square, multiplied recursively, and
/// unpadded to (lhs rows × rhs cols). The result never aliases either
/// input.
///
/// # Errors
///
/// [`Error::IncompatibleDimensions`] if `a.cols() != b.rows()`.
pub fn multiply<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    if a.cols() != b.rows() {
        return Err(Error::IncompatibleDimensions {
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }

    if a.rows() * a.cols() < THRESHOLD || b.rows() * b.cols() < THRESHOLD {
        return Ok(classical_multiply(a, b));
    }

    let max_dim = a.rows().max(a.cols()).max(b.rows()).max(b.cols());
    let padded_size = next_power_of_two(max_dim);

    let a_padded = a.pad_to_square(padded_size);
    let b_padded = b.pad_to_square(padded_size);

    let c_padded = strassen_multiply(&a_padded, &b_padded);

    Ok(c_padded.unpad(a.rows(), b.cols()))
}

/// Classical O(n³) multiplication with ikj loop ordering
///
/// The contraction index sits in the middle loop so the innermost loop
/// walks one row of `b` and one row of the output contiguously, instead of
/// striding down a column. Accumulation happens in `T` with no extended
/// precision.
///
/// # Panics
///
/// Panics if `a.cols() != b.rows()`; [`multiply`] validates this before
/// dispatching here.
pub fn classical_multiply<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    let m = a.rows();
    let k = a.cols();
    let n = b.cols();
    assert_eq!(k, b.rows(), "inner dimensions must agree");

    let mut out = Matrix::zeros(m, n);
    for i in 0..m {
        for p in 0..k {
            // SAFETY: i < m, p < k, j < n by the loop bounds, and the
            // shapes are m×k, k×n, m×n.
            let tmp = unsafe { *a.get_unchecked(i, p) };
            for j in 0..n {
                let acc = unsafe { *out.get_unchecked(i, j) + tmp * *b.get_unchecked(p, j) };
                unsafe {
                    *out.get_unchecked_mut(i, j) = acc;
                }
            }
        }
    }
    out
}

/// Strassen divide-and-conquer multiplication of square power-of-two
/// matrices
///
/// Each level partitions both operands into four quadrants, forms the
/// seven Strassen intermediate products recursively, and assembles the
/// output quadrants from fixed linear combinations, for ~n^2.807 scalar
/// multiplications instead of n³. Dimensions at or below the threshold
/// degrade to [`classical_multiply`].
///
/// Callers must supply square operands of one shared power-of-two
/// dimension; [`multiply`] establishes this by padding before dispatching
/// here.
pub fn strassen_multiply<T: Element>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    let n = a.rows();
    if n <= THRESHOLD {
        return classical_multiply(a, b);
    }
    let half = n / 2;

    let a11 = a.sub_block(0, 0, half);
    let a12 = a.sub_block(0, half, half);
    let a21 = a.sub_block(half, 0, half);
    let a22 = a.sub_block(half, half, half);

    let b11 = b.sub_block(0, 0, half);
    let b12 = b.sub_block(0, half, half);
    let b21 = b.sub_block(half, 0, half);
    let b22 = b.sub_block(half, half, half);

    let m1 = strassen_multiply(&a11.add_unchecked(&a22), &b11.add_unchecked(&b22));
    let m2 = strassen_multiply(&a21.add_unchecked(&a22), &b11);
    let m3 = strassen_multiply(&a11, &b12.sub_unchecked(&b22));
    let m4 = strassen_multiply(&a22, &b21.sub_unchecked(&b11));
    let m5 = strassen_multiply(&a11.add_unchecked(&a12), &b22);
    let m6 = strassen_multiply(&a21.sub_unchecked(&a11), &b11.add_unchecked(&b12));
    let m7 = strassen_multiply(&a12.sub_unchecked(&a22), &b21.add_unchecked(&b22));

    let c11 = m1
        .add_unchecked(&m4)
        .sub_unchecked(&m5)
        .add_unchecked(&m7);
    let c12 = m3.add_unchecked(&m5);
    let c21 = m2.add_unchecked(&m4);
    let c22 = m1
        .sub_unchecked(&m2)
        .add_unchecked(&m3)
        .add_unchecked(&m6);

    let mut c = Matrix::zeros(n, n);
    c.insert_block(0, 0, &c11);
    c.insert_block(0, half, &c12);
    c.insert_block(half, 0, &c21);
    c.insert_block(half, half, &c22);
    c
}

/// Recompute `a * x` through [`multiply`] and compare it element-wise
/// against `expected` for exact equality
///
/// Returns `Ok(false)` on any element or shape disagreement.
///
/// # Errors
///
/// Propagates [`Error::IncompatibleDimensions`] from the multiplication.
pub fn verify_product<T: Element>(
    a: &Matrix<T>,
    x: &Matrix<T>,
    expected: &Matrix<T>,
) -> Result<bool> {
    let product = multiply(a, x)?;
    if product.shape() != expected.shape() {
        return Ok(false);
    }
    Ok(product
        .as_slice()
        .iter()
        .zip(expected.as_slice())
        .all(|(p, e)| p == e))
}
