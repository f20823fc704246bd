//! Linear algebra engines: hybrid multiplication and LU-based solving

pub mod lu;
pub mod matmul;
pub mod solve;

pub use lu::{lu_decompose, LuDecomposition};
pub use matmul::{
    classical_multiply, multiply, next_power_of_two, strassen_multiply, verify_product,
};
pub use solve::solve;
