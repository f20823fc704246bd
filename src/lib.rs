//! # matr
//!
//! **Dense numeric matrices with hybrid Strassen multiplication and
//! LU-based linear solving.**
//!
//! matr provides a contiguous row-major matrix container and two
//! computational engines built on it: matrix–matrix multiplication that
//! automatically switches between the cache-friendly classical kernel and
//! a padded Strassen recursion, and direct solution of square systems via
//! LU decomposition with partial pivoting.
//!
//! ## Features
//!
//! - **Matrix container**: dense row-major storage with value semantics,
//!   sub-block extraction/insertion, and power-of-two padding
//! - **Hybrid multiplication**: classical ikj kernel below a size
//!   threshold, Strassen's divide-and-conquer above it
//! - **LU decomposition**: partial pivoting on a working copy, packed L/U
//!   factors, permutation vector and swap-parity sign
//! - **Linear solver**: permutation + forward/backward substitution,
//!   reusable across right-hand sides
//! - **Generic elements**: any [`element::Element`] type multiplies;
//!   decomposition is restricted to floating-point elements at compile
//!   time
//!
//! ## Quick Start
//!
//! ```
//! use matr::prelude::*;
//!
//! let a: Matrix<f64> = Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0], 2, 2);
//! let b = Matrix::from_slice(&[5.0, 6.0, 7.0, 8.0], 2, 2);
//!
//! let c = multiply(&a, &b)?;
//! assert_eq!(c, Matrix::from_slice(&[19.0, 22.0, 43.0, 50.0], 2, 2));
//!
//! let lu = lu_decompose(&a)?;
//! let x = lu.solve(&[5.0, 11.0])?;
//! assert!((x[0] - 1.0).abs() < 1e-12 && (x[1] - 2.0).abs() < 1e-12);
//! # Ok::<(), matr::error::Error>(())
//! ```
//!
//! All operations are synchronous and single-threaded; every call takes
//! its inputs by shared reference and returns freshly owned output, so
//! concurrent use on disjoint matrices needs no coordination.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod element;
pub mod error;
pub mod io;
pub mod linalg;
pub mod matrix;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::element::{Element, LinalgElement};
    pub use crate::error::{Error, Result};
    pub use crate::linalg::{
        classical_multiply, lu_decompose, multiply, next_power_of_two, solve, strassen_multiply,
        verify_product, LuDecomposition,
    };
    pub use crate::matrix::Matrix;
}
