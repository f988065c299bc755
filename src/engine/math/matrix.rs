//! Host-side 4x4 transform matrix.

use std::fmt;
use std::ops::Mul;

use glam::Mat4;

/// Number of components in a matrix.
pub const MATRIX_LEN: usize = 16;

/// A 4x4 `f32` matrix stored column-major, laid out exactly like `glam::Mat4`.
///
/// Values are copied across the script boundary, so the type is `Copy` and
/// `Pod`: it can be viewed as sixteen floats without any conversion.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Matrix(Mat4);

impl Matrix {
    pub const IDENTITY: Self = Self(Mat4::IDENTITY);
    pub const ZERO: Self = Self(Mat4::ZERO);

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Build a matrix from sixteen values in column-major order.
    pub fn from_cols_array(values: &[f32; MATRIX_LEN]) -> Self {
        Self(Mat4::from_cols_array(values))
    }

    /// Build a matrix from a slice, which must hold exactly sixteen values.
    pub fn from_cols_slice(values: &[f32]) -> Option<Self> {
        let values: &[f32; MATRIX_LEN] = values.try_into().ok()?;
        Some(Self::from_cols_array(values))
    }

    /// The sixteen components in column-major order.
    pub fn as_cols(&self) -> &[f32; MATRIX_LEN] {
        bytemuck::cast_ref(self)
    }

    pub fn to_cols_array(self) -> [f32; MATRIX_LEN] {
        bytemuck::cast(self)
    }

    /// Component at `row`, `col` (both zero-based).
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.as_cols()[col * 4 + row]
    }

    pub fn multiply(&self, rhs: &Matrix) -> Matrix {
        Self(self.0 * rhs.0)
    }

    /// Inverse of the matrix. Singularity is not checked: a singular input
    /// produces non-finite components.
    pub fn inverse(&self) -> Matrix {
        Self(self.0.inverse())
    }

    pub fn transpose(&self) -> Matrix {
        Self(self.0.transpose())
    }

    pub fn abs_diff_eq(&self, other: &Matrix, max_abs_diff: f32) -> bool {
        self.0.abs_diff_eq(other.0, max_abs_diff)
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        self.multiply(&rhs)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matrix(")?;
        for row in 0..4 {
            if row > 0 {
                write!(f, "; ")?;
            }
            write!(
                f,
                "{}, {}, {}, {}",
                self.get(row, 0),
                self.get(row, 1),
                self.get(row, 2),
                self.get(row, 3)
            )?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn sample() -> Matrix {
        Matrix::from_cols_array(&[
            2.0, 0.0, 0.0, 0.0, //
            0.0, 3.0, 0.0, 0.0, //
            0.0, 0.0, 4.0, 0.0, //
            5.0, -1.0, 7.0, 1.0,
        ])
    }

    #[test]
    fn column_major_layout_round_trips() {
        let values: [f32; MATRIX_LEN] = std::array::from_fn(|i| i as f32 + 0.5);
        let matrix = Matrix::from_cols_array(&values);
        assert_eq!(matrix.to_cols_array(), values);
        assert_eq!(matrix.as_cols(), &values);
        // Fourth column holds components 12..16.
        assert_eq!(matrix.get(0, 3), 12.5);
        assert_eq!(matrix.get(3, 0), 3.5);
    }

    #[test]
    fn from_slice_requires_sixteen_values() {
        assert!(Matrix::from_cols_slice(&[1.0; 15]).is_none());
        assert!(Matrix::from_cols_slice(&[1.0; 17]).is_none());
        assert_eq!(Matrix::from_cols_slice(&[0.0; 16]), Some(Matrix::ZERO));
    }

    #[test]
    fn identity_is_neutral_for_multiply() {
        let m = sample();
        assert_eq!(Matrix::identity().multiply(&m), m);
        assert_eq!(m.multiply(&Matrix::identity()), m);
        assert_eq!(Matrix::zero() * Matrix::identity(), Matrix::zero());
    }

    #[test]
    fn transpose_is_an_involution() {
        let m = sample();
        assert_ne!(m.transpose(), m);
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().get(3, 0), m.get(0, 3));
    }

    #[test]
    fn inverse_undoes_multiply() {
        let m = sample();
        assert!(m.multiply(&m.inverse()).abs_diff_eq(&Matrix::identity(), EPS));
        assert!(m.inverse().multiply(&m).abs_diff_eq(&Matrix::identity(), EPS));
    }

    #[test]
    fn singular_inverse_is_not_finite() {
        let inverse = Matrix::zero().inverse();
        assert!(inverse.as_cols().iter().any(|v| !v.is_finite()));
    }

    #[test]
    fn display_lists_rows() {
        let text = Matrix::identity().to_string();
        assert_eq!(text, "matrix(1, 0, 0, 0; 0, 1, 0, 0; 0, 0, 1, 0; 0, 0, 0, 1)");
    }
}
