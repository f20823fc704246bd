//! Text-file loading and saving for matrices and vectors
//!
//! Matrices are stored as a `rows cols` header followed by rows·cols
//! whitespace-separated values in row-major order; vectors as a count
//! followed by the values. Saving writes values fixed to two decimal
//! digits, one row per line. The core engines only require fully-populated
//! inputs; every malformed-input condition is raised here.

use crate::element::Element;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use std::fmt;
use std::fs;
use std::path::Path;

/// Load a matrix from a structured text file
///
/// # Errors
///
/// [`Error::Io`] if the file cannot be read, [`Error::ParseSize`] /
/// [`Error::Parse`] on malformed tokens, [`Error::InsufficientData`] if
/// the file ends before `rows * cols` values were read.
pub fn load_matrix<T: Element>(path: impl AsRef<Path>) -> Result<Matrix<T>> {
    let text = fs::read_to_string(path)?;
    let mut tokens = text.split_whitespace();

    let rows: usize = next_token(&mut tokens, 2, 0)?.parse()?;
    let cols: usize = next_token(&mut tokens, 2, 1)?.parse()?;

    let total = rows * cols;
    let mut data = Vec::with_capacity(total);
    for got in 0..total {
        let value: f64 = next_token(&mut tokens, total, got)?.parse()?;
        data.push(T::from_f64(value));
    }
    Ok(Matrix::from_parts(rows, cols, data))
}

/// Load a vector from a structured text file (count, then values)
///
/// # Errors
///
/// Same taxonomy as [`load_matrix`].
pub fn load_vector<T: Element>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let text = fs::read_to_string(path)?;
    let mut tokens = text.split_whitespace();

    let size: usize = next_token(&mut tokens, 1, 0)?.parse()?;

    let mut values = Vec::with_capacity(size);
    for got in 0..size {
        let value: f64 = next_token(&mut tokens, size, got)?.parse()?;
        values.push(T::from_f64(value));
    }
    Ok(values)
}

/// Save a matrix with values fixed to two decimal digits, space-separated,
/// one row per line
///
/// # Errors
///
/// [`Error::Io`] if the file cannot be written.
pub fn save_matrix<T: Element + fmt::Display>(
    path: impl AsRef<Path>,
    matrix: &Matrix<T>,
) -> Result<()> {
    let mut out = String::new();
    for i in 0..matrix.rows() {
        for j in 0..matrix.cols() {
            out.push_str(&format!("{:.2} ", matrix[(i, j)]));
        }
        out.push('\n');
    }
    fs::write(path, out)?;
    Ok(())
}

fn next_token<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    expected: usize,
    got: usize,
) -> Result<&'a str> {
    tokens
        .next()
        .ok_or(Error::InsufficientData { expected, got })
}
