//! Loader and serializer tests over real temp files.

mod common;

use common::assert_allclose_f64;
use matr::io::{load_matrix, load_vector, save_matrix};
use matr::prelude::*;
use std::fs;

#[test]
fn load_matrix_parses_header_and_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "2 3\n1 2 3\n4 5 6\n").unwrap();

    let m: Matrix<f64> = load_matrix(&path).unwrap();
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn load_vector_parses_count_and_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("b.txt");
    fs::write(&path, "3\n1.5 -2.5 3.25\n").unwrap();

    let v: Vec<f64> = load_vector(&path).unwrap();
    assert_eq!(v, vec![1.5, -2.5, 3.25]);
}

#[test]
fn save_then_load_roundtrip_within_rounding() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("m.txt");

    let m = Matrix::from_slice(&[1.25, -3.5, 0.333333, 100.0, 0.004, 2.0], 2, 3);
    save_matrix(&path, &m).unwrap();

    let reloaded: Matrix<f64> = load_matrix(&path).unwrap();
    assert_eq!(reloaded.shape(), m.shape());
    // Two-decimal formatting bounds the round-trip error by half a cent
    assert_allclose_f64(
        reloaded.as_slice(),
        m.as_slice(),
        0.0,
        0.005 + 1e-12,
        "roundtrip",
    );
}

#[test]
fn saved_format_is_two_decimals_one_row_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fmt.txt");

    let m = Matrix::from_slice(&[1.0, 2.25, -0.5, 10.0], 2, 2);
    save_matrix(&path, &m).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "1.00 2.25 \n-0.50 10.00 \n");
}

#[test]
fn missing_file_is_io_error() {
    let err = load_matrix::<f64>("/nonexistent/matrix.txt").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn truncated_matrix_file_is_insufficient_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.txt");
    fs::write(&path, "2 2\n1 2 3\n").unwrap();

    let err = load_matrix::<f64>(&path).unwrap_err();
    assert!(matches!(
        err,
        Error::InsufficientData {
            expected: 4,
            got: 3
        }
    ));
}

#[test]
fn garbage_value_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "2 2\n1 2 x 4\n").unwrap();

    let err = load_matrix::<f64>(&path).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn garbage_header_is_size_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("badhdr.txt");
    fs::write(&path, "two 2\n1 2\n").unwrap();

    let err = load_matrix::<f64>(&path).unwrap_err();
    assert!(matches!(err, Error::ParseSize(_)));
}

#[test]
fn integer_matrix_loads_through_f64_interchange() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("int.txt");
    fs::write(&path, "2 2\n1 2\n3 4\n").unwrap();

    let m: Matrix<i64> = load_matrix(&path).unwrap();
    assert_eq!(m.as_slice(), &[1, 2, 3, 4]);
}
