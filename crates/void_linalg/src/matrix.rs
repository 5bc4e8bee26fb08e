//! Matrix types for transformations
//!
//! Storage is column-major: `m.cols[c][r]` is the element in column `c`,
//! row `r`. Matrices act on column vectors from the left, so `a * b`
//! applies `b` first.

use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign,
};

use crate::error::{read_floats, MathError, Result};
use crate::vector::{Vec2, Vec3, Vec4};

/// 2x2 matrix (column-major)
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat2 {
    pub cols: [Vec2; 2],
}

/// 3x3 matrix (column-major)
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat3 {
    pub cols: [Vec3; 3],
}

/// 4x4 matrix (column-major) - the main transformation matrix
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat4 {
    pub cols: [Vec4; 4],
}

macro_rules! impl_matrix_scalar_op {
    ($name:ident, $op_trait:ident, $op_fn:ident, $assign_trait:ident, $assign_fn:ident) => {
        impl $op_trait<f32> for $name {
            type Output = Self;
            #[inline]
            fn $op_fn(self, rhs: f32) -> Self {
                Self { cols: self.cols.map(|c| $op_trait::$op_fn(c, rhs)) }
            }
        }

        impl $assign_trait<f32> for $name {
            #[inline]
            fn $assign_fn(&mut self, rhs: f32) {
                for c in &mut self.cols {
                    $assign_trait::$assign_fn(c, rhs);
                }
            }
        }
    };
}

macro_rules! impl_matrix_columnwise_op {
    ($name:ident, $op_trait:ident, $op_fn:ident, $assign_trait:ident, $assign_fn:ident) => {
        impl $op_trait for $name {
            type Output = Self;
            #[inline]
            fn $op_fn(mut self, rhs: Self) -> Self {
                $assign_trait::$assign_fn(&mut self, rhs);
                self
            }
        }

        impl $assign_trait for $name {
            #[inline]
            fn $assign_fn(&mut self, rhs: Self) {
                for (c, r) in self.cols.iter_mut().zip(rhs.cols) {
                    $assign_trait::$assign_fn(c, r);
                }
            }
        }
    };
}

macro_rules! impl_matrix {
    ($name:ident, $vec:ident, $n:literal, $len:literal) => {
        impl $name {
            #[inline]
            pub fn col(&self, index: usize) -> $vec {
                self.cols[index]
            }

            /// Element at `column`, `row`.
            #[inline]
            pub fn get(&self, column: usize, row: usize) -> f32 {
                self.cols[column][row]
            }

            /// Column-major float view, suitable for uploading as a uniform.
            #[inline]
            pub fn as_array(&self) -> &[f32; $len] {
                bytemuck::cast_ref(self)
            }

            #[inline]
            pub fn as_array_mut(&mut self) -> &mut [f32; $len] {
                bytemuck::cast_mut(self)
            }

            #[inline]
            pub fn to_cols_array_2d(&self) -> [[f32; $n]; $n] {
                self.cols.map($vec::to_array)
            }

            #[inline]
            pub fn from_cols_array_2d(cols: [[f32; $n]; $n]) -> Self {
                Self { cols: cols.map($vec::from_array) }
            }

            pub fn transpose(&self) -> Self {
                let mut m = *self;
                for i in 0..$n {
                    for j in (i + 1)..$n {
                        let upper = m.cols[i][j];
                        m.cols[i][j] = m.cols[j][i];
                        m.cols[j][i] = upper;
                    }
                }
                m
            }

            /// `adjugate / determinant`.
            ///
            /// There is no singularity check: a singular matrix yields `inf`
            /// and `NaN` entries. Use [`Self::try_inverse`] to detect it.
            #[inline]
            pub fn inverse(&self) -> Self {
                self.adjugate() / self.determinant()
            }

            /// Like [`Self::inverse`], but rejects a zero or non-finite determinant.
            pub fn try_inverse(&self) -> Result<Self> {
                let determinant = self.determinant();
                if determinant == 0.0 || !determinant.is_finite() {
                    log::trace!(
                        "{} inverse rejected: determinant {}",
                        stringify!($name),
                        determinant
                    );
                    return Err(MathError::Singular { determinant });
                }
                Ok(self.adjugate() / determinant)
            }

            /// Exchanges every column with the matching column of `other`.
            #[inline]
            pub fn swap(&mut self, other: &mut Self) {
                for (a, b) in self.cols.iter_mut().zip(other.cols.iter_mut()) {
                    core::mem::swap(a, b);
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::IDENTITY
            }
        }

        impl_matrix_scalar_op!($name, Add, add, AddAssign, add_assign);
        impl_matrix_scalar_op!($name, Sub, sub, SubAssign, sub_assign);
        impl_matrix_scalar_op!($name, Mul, mul, MulAssign, mul_assign);
        impl_matrix_scalar_op!($name, Div, div, DivAssign, div_assign);
        impl_matrix_columnwise_op!($name, Add, add, AddAssign, add_assign);
        impl_matrix_columnwise_op!($name, Sub, sub, SubAssign, sub_assign);

        impl Mul<$vec> for $name {
            type Output = $vec;

            #[inline]
            fn mul(self, rhs: $vec) -> $vec {
                let mut out = self.cols[0] * rhs[0];
                for k in 1..$n {
                    out += self.cols[k] * rhs[k];
                }
                out
            }
        }

        impl Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self { cols: rhs.cols.map(|c| self * c) }
            }
        }

        impl MulAssign for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl Index<usize> for $name {
            type Output = $vec;
            #[inline]
            fn index(&self, column: usize) -> &$vec {
                &self.cols[column]
            }
        }

        impl IndexMut<usize> for $name {
            #[inline]
            fn index_mut(&mut self, column: usize) -> &mut $vec {
                &mut self.cols[column]
            }
        }

        /// Reads the leading floats in column-major order.
        impl TryFrom<&[f32]> for $name {
            type Error = MathError;

            fn try_from(slice: &[f32]) -> core::result::Result<Self, MathError> {
                let floats = read_floats::<$len>(slice)?;
                Ok(*bytemuck::cast_ref::<[f32; $len], $name>(&floats))
            }
        }

        #[cfg(any(test, feature = "approx"))]
        impl approx::AbsDiffEq for $name {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                self.cols
                    .iter()
                    .zip(other.cols.iter())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        #[cfg(any(test, feature = "approx"))]
        impl approx::RelativeEq for $name {
            fn default_max_relative() -> f32 {
                f32::EPSILON
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                self.cols
                    .iter()
                    .zip(other.cols.iter())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }
    };
}

impl_matrix!(Mat2, Vec2, 2, 4);
impl_matrix!(Mat3, Vec3, 3, 9);
impl_matrix!(Mat4, Vec4, 4, 16);

#[inline]
fn det2(m00: f32, m01: f32, m10: f32, m11: f32) -> f32 {
    m00 * m11 - m01 * m10
}

#[inline]
#[allow(clippy::too_many_arguments)]
fn det3(
    m00: f32,
    m01: f32,
    m02: f32,
    m10: f32,
    m11: f32,
    m12: f32,
    m20: f32,
    m21: f32,
    m22: f32,
) -> f32 {
    m00 * m11 * m22 + m01 * m12 * m20 + m02 * m10 * m21
        - m02 * m11 * m20
        - m01 * m10 * m22
        - m00 * m12 * m21
}

impl Mat2 {
    pub const IDENTITY: Self = Self::from_cols(Vec2::X, Vec2::Y);
    pub const ZERO: Self = Self::from_cols(Vec2::ZERO, Vec2::ZERO);

    #[inline]
    pub const fn from_cols(c0: Vec2, c1: Vec2) -> Self {
        Self { cols: [c0, c1] }
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        let m = &self.cols;
        m[0][0] * m[1][1] - m[1][0] * m[0][1]
    }

    pub fn adjugate(&self) -> Self {
        let m = &self.cols;
        Self::from_cols(
            Vec2::new(m[1][1], -m[0][1]),
            Vec2::new(-m[1][0], m[0][0]),
        )
    }
}

impl Mat3 {
    pub const IDENTITY: Self = Self::from_cols(Vec3::X, Vec3::Y, Vec3::Z);
    pub const ZERO: Self = Self::from_cols(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO);

    #[inline]
    pub const fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self { cols: [c0, c1, c2] }
    }

    /// Cofactor expansion along the first column.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let m = &self.cols;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Transpose of the cofactor matrix, from nine 2x2 minors.
    pub fn adjugate(&self) -> Self {
        let m = &self.cols;
        let m00 = det2(m[1][1], m[1][2], m[2][1], m[2][2]);
        let m01 = det2(m[1][0], m[1][2], m[2][0], m[2][2]);
        let m02 = det2(m[1][0], m[1][1], m[2][0], m[2][1]);

        let m10 = det2(m[0][1], m[0][2], m[2][1], m[2][2]);
        let m11 = det2(m[0][0], m[0][2], m[2][0], m[2][2]);
        let m12 = det2(m[0][0], m[0][1], m[2][0], m[2][1]);

        let m20 = det2(m[0][1], m[0][2], m[1][1], m[1][2]);
        let m21 = det2(m[0][0], m[0][2], m[1][0], m[1][2]);
        let m22 = det2(m[0][0], m[0][1], m[1][0], m[1][1]);

        Self::from_cols(
            Vec3::new(m00, -m10, m20),
            Vec3::new(-m01, m11, -m21),
            Vec3::new(m02, -m12, m22),
        )
    }

    /// Embed into the upper-left block of an identity 4x4
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_cols(
            self.cols[0].extend(0.0),
            self.cols[1].extend(0.0),
            self.cols[2].extend(0.0),
            Vec4::W,
        )
    }
}

impl Mat4 {
    pub const IDENTITY: Self = Self::from_cols(Vec4::X, Vec4::Y, Vec4::Z, Vec4::W);
    pub const ZERO: Self = Self::from_cols(Vec4::ZERO, Vec4::ZERO, Vec4::ZERO, Vec4::ZERO);

    #[inline]
    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self { cols: [c0, c1, c2, c3] }
    }

    /// Minor of the element at `column`, `row`: the 3x3 determinant left after
    /// striking out that column and row.
    fn minor(&self, column: usize, row: usize) -> f32 {
        let mut e = [0.0; 9];
        let mut n = 0;
        for c in (0..4).filter(|&c| c != column) {
            for r in (0..4).filter(|&r| r != row) {
                e[n] = self.cols[c][r];
                n += 1;
            }
        }
        det3(e[0], e[1], e[2], e[3], e[4], e[5], e[6], e[7], e[8])
    }

    /// Cofactor expansion along the first column.
    pub fn determinant(&self) -> f32 {
        let m = &self.cols;
        m[0][0] * self.minor(0, 0) - m[0][1] * self.minor(0, 1) + m[0][2] * self.minor(0, 2)
            - m[0][3] * self.minor(0, 3)
    }

    /// Transpose of the cofactor matrix, from sixteen 3x3 minors.
    pub fn adjugate(&self) -> Self {
        let mut adj = Self::ZERO;
        for c in 0..4 {
            for r in 0..4 {
                let sign = if (c + r) % 2 == 0 { 1.0 } else { -1.0 };
                adj.cols[c][r] = sign * self.minor(r, c);
            }
        }
        adj
    }

    /// Upper-left 3x3 block
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::from_cols(
            self.cols[0].truncate(),
            self.cols[1].truncate(),
            self.cols[2].truncate(),
        )
    }

    /// Get the translation component
    #[inline]
    pub fn get_translation(&self) -> Vec3 {
        self.cols[3].truncate()
    }

    /// Transform a point (w=1), including the perspective divide
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        let v = *self * point.extend(1.0);
        v.truncate() / v.w
    }

    /// Transform a vector (w=0)
    #[inline]
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        (*self * vector.extend(0.0)).truncate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample_mat3() -> Mat3 {
        Mat3::from_cols(
            Vec3::new(2.0, 0.0, 1.0),
            Vec3::new(1.0, 3.0, 2.0),
            Vec3::new(1.0, 1.0, 2.0),
        )
    }

    fn sample_mat4() -> Mat4 {
        Mat4::from_cols(
            Vec4::new(4.0, 0.0, 1.0, 2.0),
            Vec4::new(1.0, 3.0, 0.0, 1.0),
            Vec4::new(0.0, 2.0, 5.0, 1.0),
            Vec4::new(1.0, 1.0, 1.0, 6.0),
        )
    }

    #[test]
    fn test_mat4_identity() {
        let m = Mat4::IDENTITY;
        let v = Vec4::new(1.0, 2.0, 3.0, 1.0);
        assert_eq!(m * v, v);
        assert_eq!(Mat4::default(), Mat4::IDENTITY);
    }

    #[test]
    fn test_column_major_layout() {
        let m = Mat2::from_cols(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        assert_eq!(m.as_array(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.get(1, 0), 3.0);
        assert_eq!(m[1][0], 3.0);
        assert_eq!(m.col(0), Vec2::new(1.0, 2.0));
        assert_eq!(core::mem::size_of::<Mat4>(), 64);
        assert_eq!(core::mem::size_of::<Mat3>(), 36);
    }

    #[test]
    fn test_matrix_vector_product() {
        let m = Mat2::from_cols(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        // [1 3; 2 4] * (5, 6) = (23, 34)
        assert_eq!(m * Vec2::new(5.0, 6.0), Vec2::new(23.0, 34.0));
    }

    #[test]
    fn test_matrix_product_applies_rhs_first() {
        let a = Mat2::from_cols(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        let b = Mat2::from_cols(Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0));
        let v = Vec2::new(2.0, 5.0);
        assert_eq!((a * b) * v, a * (b * v));
        // [1 3; 2 4] * [0 1; 1 0] = [3 1; 4 2]
        assert_eq!(a * b, Mat2::from_cols(Vec2::new(3.0, 4.0), Vec2::new(1.0, 2.0)));

        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
    }

    #[test]
    fn test_scalar_and_columnwise_ops() {
        let mut m = Mat2::IDENTITY;
        m += 1.0;
        assert_eq!(m, Mat2::from_cols(Vec2::new(2.0, 1.0), Vec2::new(1.0, 2.0)));
        m *= 2.0;
        assert_eq!(m, Mat2::from_cols(Vec2::new(4.0, 2.0), Vec2::new(2.0, 4.0)));
        m -= Mat2::IDENTITY;
        assert_eq!(m, Mat2::from_cols(Vec2::new(3.0, 2.0), Vec2::new(2.0, 3.0)));
        m /= 2.0;
        assert_eq!(m, Mat2::from_cols(Vec2::new(1.5, 1.0), Vec2::new(1.0, 1.5)));
        assert_eq!(m + m, m * 2.0);
        assert_eq!(m - m, Mat2::ZERO);
        assert_eq!(Mat3::IDENTITY - 1.0 + 1.0, Mat3::IDENTITY);
    }

    #[test]
    fn test_transpose() {
        let m = sample_mat4();
        let t = m.transpose();
        for c in 0..4 {
            for r in 0..4 {
                assert_eq!(t.get(c, r), m.get(r, c));
            }
        }
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_determinants() {
        assert_eq!(Mat2::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat3::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat3::ZERO.determinant(), 0.0);
        assert_eq!(Mat4::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4::ZERO.determinant(), 0.0);
        assert_eq!(
            Mat2::from_cols(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)).determinant(),
            -2.0
        );
        assert_eq!(sample_mat3().determinant(), 6.0);
        let m4 = sample_mat4();
        assert_eq!(m4.determinant(), m4.transpose().determinant());
    }

    #[test]
    fn test_adjugate_times_matrix_is_scaled_identity() {
        let m = sample_mat3();
        assert_abs_diff_eq!(m.adjugate() * m, Mat3::IDENTITY * m.determinant(), epsilon = 1e-5);
        let m = sample_mat4();
        assert_abs_diff_eq!(m * m.adjugate(), Mat4::IDENTITY * m.determinant(), epsilon = 1e-3);
    }

    #[test]
    fn test_inverse() {
        let m2 = Mat2::from_cols(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        assert_abs_diff_eq!(m2 * m2.inverse(), Mat2::IDENTITY, epsilon = 1e-6);
        let m3 = sample_mat3();
        assert_abs_diff_eq!(m3 * m3.inverse(), Mat3::IDENTITY, epsilon = 1e-6);
        let m4 = sample_mat4();
        assert_abs_diff_eq!(m4 * m4.inverse(), Mat4::IDENTITY, epsilon = 1e-5);
        assert_abs_diff_eq!(m4.inverse() * m4, Mat4::IDENTITY, epsilon = 1e-5);
    }

    #[test]
    fn test_singular_inverse_is_not_finite() {
        let inv = Mat3::ZERO.inverse();
        assert!(inv.as_array().iter().all(|v| !v.is_finite()));
        let singular = Mat2::from_cols(Vec2::new(1.0, 2.0), Vec2::new(2.0, 4.0));
        assert!(singular.inverse().as_array().iter().any(|v| !v.is_finite()));
    }

    #[test]
    fn test_try_inverse() {
        assert_eq!(
            Mat4::ZERO.try_inverse(),
            Err(MathError::Singular { determinant: 0.0 })
        );
        let m = sample_mat3();
        assert_eq!(m.try_inverse().unwrap(), m.inverse());
    }

    #[test]
    fn test_swap() {
        let mut a = Mat3::IDENTITY;
        let mut b = sample_mat3();
        a.swap(&mut b);
        assert_eq!(a, sample_mat3());
        assert_eq!(b, Mat3::IDENTITY);
    }

    #[test]
    fn test_try_from_slice_is_column_major() {
        let data: Vec<f32> = (0..16).map(|i| i as f32).collect();
        let m = Mat4::try_from(&data[..]).unwrap();
        assert_eq!(m.col(1), Vec4::new(4.0, 5.0, 6.0, 7.0));
        assert_eq!(m.as_array()[..], data[..]);
        assert_eq!(
            Mat3::try_from(&data[..8]),
            Err(MathError::SliceTooShort { expected: 9, found: 8 })
        );
    }

    #[test]
    fn test_cols_array_2d() {
        let m = sample_mat4();
        assert_eq!(Mat4::from_cols_array_2d(m.to_cols_array_2d()), m);
    }

    #[test]
    fn test_mat3_to_mat4_and_back() {
        let m = sample_mat3();
        let m4 = m.to_mat4();
        assert_eq!(m4.col(3), Vec4::W);
        assert_eq!(m4.to_mat3(), m);
    }

    #[test]
    fn test_transform_point_and_vector() {
        let mut m = Mat4::IDENTITY;
        m.cols[3] = Vec4::new(1.0, 2.0, 3.0, 1.0);
        assert_eq!(m.transform_point(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.transform_vector(Vec3::X), Vec3::X);
        assert_eq!(m.get_translation(), Vec3::new(1.0, 2.0, 3.0));
    }
}
