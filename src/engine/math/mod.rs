//! Math types shared between the engine and scripts.

pub mod matrix;

pub use matrix::{Matrix, MATRIX_LEN};
