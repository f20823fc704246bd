//! Common test utilities
#![allow(dead_code)]

use matr::prelude::*;

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two f64 matrices agree element-wise within an absolute tolerance
pub fn assert_matrix_close(a: &Matrix<f64>, b: &Matrix<f64>, atol: f64, msg: &str) {
    assert_eq!(a.shape(), b.shape(), "{}: shape mismatch", msg);
    assert_allclose_f64(a.as_slice(), b.as_slice(), 0.0, atol, msg);
}

/// Deterministic fill for reproducible test matrices
///
/// Values are integer-valued f64s, so sums and products of moderate size
/// stay exact and both multiplication paths can be compared tightly.
pub fn patterned_matrix(rows: usize, cols: usize) -> Matrix<f64> {
    let mut m = Matrix::zeros(rows, cols);
    for i in 0..rows {
        for j in 0..cols {
            m[(i, j)] = ((i * 31 + j * 17 + 7) % 100) as f64 - 50.0;
        }
    }
    m
}
