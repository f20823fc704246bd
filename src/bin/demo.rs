//! Demo driver: load matrices and a vector from files, multiply,
//! decompose, solve, and verify.

use std::env;
use std::process;

use matr::io::{load_matrix, load_vector, save_matrix};
use matr::prelude::*;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 5 {
        eprintln!(
            "Usage: {} <fileA.txt> <fileB.txt> <fileb.txt> <output.txt>",
            args[0]
        );
        process::exit(1);
    }

    if let Err(e) = run(&args[1], &args[2], &args[3], &args[4]) {
        eprintln!("\n[ERROR]: {e}");
        process::exit(1);
    }
}

fn run(path_a: &str, path_b: &str, path_rhs: &str, path_out: &str) -> Result<()> {
    println!("--- Loading Matrices ---");
    let mat_a: Matrix<f64> = load_matrix(path_a)?;
    let mat_b: Matrix<f64> = load_matrix(path_b)?;
    let b: Vec<f64> = load_vector(path_rhs)?;

    println!("Matrix A: {}x{}", mat_a.rows(), mat_a.cols());
    println!("Matrix B: {}x{}", mat_b.rows(), mat_b.cols());
    println!("Vector b: {}x1", b.len());

    println!("\n--- Computing Matrix Product (A * B) ---");
    let product = multiply(&mat_a, &mat_b)?;
    println!("Product calculated. Saving to {path_out}...");
    save_matrix(path_out, &product)?;

    println!("\n--- Performing LU Decomposition on A ---");
    let lu = lu_decompose(&mat_a)?;
    println!("Packed L/U matrix:");
    print!("{}", lu.lu);

    println!("\n--- Solving System Ax = b ---");
    let x = lu.solve(&b)?;
    println!("Solution vector x:");
    let rendered: Vec<String> = x.iter().map(|v| v.to_string()).collect();
    println!("{}", rendered.join(" "));

    println!("\n--- Verifying Result (A * x == b) ---");
    let x_mat = Matrix::column_vector(&x);
    let b_mat = Matrix::column_vector(&b);
    if verify_product(&mat_a, &x_mat, &b_mat)? {
        println!("Verification successful: matrices are identical.");
    } else {
        println!("Verification failed: matrices are different.");
    }

    Ok(())
}
