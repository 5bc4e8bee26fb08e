//! Vector types
//!
//! Every operator is componentwise: `Vec3 * Vec3` multiplies per component,
//! it is not a dot product. Scalar operands broadcast to all components.
//! Equality is exact; compare through `is_almost_zero` on the difference (or
//! the `approx` traits) when a tolerance is wanted.

use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::consts::{NORMALIZE_TOLERANCE, VEC_SLERP_THRESHOLD};
use crate::error::{read_floats, MathError};
use crate::scalar::{abs, acos, clamp, inv_sqrt, sin, sqrt};

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// 3D vector - the workhorse of 3D graphics
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// 4D vector - for homogeneous coordinates and colors
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

macro_rules! impl_vector_op {
    ($name:ident { $($field:ident),+ }, $op_trait:ident, $op_fn:ident, $assign_trait:ident, $assign_fn:ident, $op:tt) => {
        impl $op_trait for $name {
            type Output = Self;
            #[inline]
            fn $op_fn(self, rhs: Self) -> Self {
                Self { $($field: self.$field $op rhs.$field),+ }
            }
        }

        impl $op_trait<f32> for $name {
            type Output = Self;
            #[inline]
            fn $op_fn(self, rhs: f32) -> Self {
                Self { $($field: self.$field $op rhs),+ }
            }
        }

        impl $assign_trait for $name {
            #[inline]
            fn $assign_fn(&mut self, rhs: Self) {
                $(self.$field = self.$field $op rhs.$field;)+
            }
        }

        impl $assign_trait<f32> for $name {
            #[inline]
            fn $assign_fn(&mut self, rhs: f32) {
                $(self.$field = self.$field $op rhs;)+
            }
        }
    };
}

macro_rules! impl_vector {
    ($name:ident, $n:literal, { $($field:ident),+ }) => {
        impl $name {
            #[inline]
            pub const fn splat(v: f32) -> Self {
                Self { $($field: v),+ }
            }

            #[inline]
            pub const fn from_array(array: [f32; $n]) -> Self {
                let [$($field),+] = array;
                Self { $($field),+ }
            }

            #[inline]
            pub const fn to_array(self) -> [f32; $n] {
                [$(self.$field),+]
            }

            /// View of the components as a contiguous float array.
            #[inline]
            pub fn as_array(&self) -> &[f32; $n] {
                bytemuck::cast_ref(self)
            }

            #[inline]
            pub fn as_array_mut(&mut self) -> &mut [f32; $n] {
                bytemuck::cast_mut(self)
            }

            #[inline]
            pub fn dot(self, other: Self) -> f32 {
                let [first, rest @ ..] = (self * other).to_array();
                rest.iter().fold(first, |acc, v| acc + v)
            }

            #[inline]
            pub fn length_squared(self) -> f32 {
                self.dot(self)
            }

            #[inline]
            pub fn length(self) -> f32 {
                sqrt(self.length_squared())
            }

            /// True when every component is within `tolerance` of zero.
            ///
            /// This is a per-component test, not a magnitude test.
            #[inline]
            pub fn is_almost_zero(self, tolerance: f32) -> bool {
                $(abs(self.$field) <= tolerance)&&+
            }

            /// Unit vector in the same direction, or zero when the vector is
            /// almost zero (see [`Self::is_almost_zero`]).
            #[inline]
            pub fn normalize(self) -> Self {
                self.normalize_with(NORMALIZE_TOLERANCE)
            }

            #[inline]
            pub fn normalize_with(self, tolerance: f32) -> Self {
                if self.is_almost_zero(tolerance) {
                    Self::ZERO
                } else {
                    self * inv_sqrt(self.length_squared())
                }
            }

            /// `(1 - t) * self + t * other`, unclamped.
            #[inline]
            pub fn lerp(self, other: Self, t: f32) -> Self {
                self * (1.0 - t) + other * t
            }

            /// Spherical interpolation between the directions of `self` and `other`.
            ///
            /// Falls back to [`Self::lerp`] when the directions are within
            /// `acos(VEC_SLERP_THRESHOLD)` of each other, where dividing by
            /// `sin(angle)` loses precision.
            pub fn slerp(self, other: Self, t: f32) -> Self {
                let angle_cos = clamp(self.normalize().dot(other.normalize()), -1.0, 1.0);
                if angle_cos < VEC_SLERP_THRESHOLD {
                    let angle = acos(angle_cos);
                    let inv_sin_angle = 1.0 / sin(angle);
                    let f0 = inv_sin_angle * sin((1.0 - t) * angle);
                    let f1 = inv_sin_angle * sin(t * angle);
                    self * f0 + other * f1
                } else {
                    self.lerp(other, t)
                }
            }

            /// Component-wise minimum
            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self { $($field: if self.$field < other.$field { self.$field } else { other.$field }),+ }
            }

            /// Component-wise maximum
            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self { $($field: if self.$field > other.$field { self.$field } else { other.$field }),+ }
            }
        }

        impl_vector_op!($name { $($field),+ }, Add, add, AddAssign, add_assign, +);
        impl_vector_op!($name { $($field),+ }, Sub, sub, SubAssign, sub_assign, -);
        impl_vector_op!($name { $($field),+ }, Mul, mul, MulAssign, mul_assign, *);
        impl_vector_op!($name { $($field),+ }, Div, div, DivAssign, div_assign, /);

        impl Mul<$name> for f32 {
            type Output = $name;
            #[inline]
            fn mul(self, rhs: $name) -> $name {
                rhs * self
            }
        }

        impl Neg for $name {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl Index<usize> for $name {
            type Output = f32;
            #[inline]
            fn index(&self, index: usize) -> &f32 {
                &self.as_array()[index]
            }
        }

        impl IndexMut<usize> for $name {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                &mut self.as_array_mut()[index]
            }
        }

        impl From<[f32; $n]> for $name {
            fn from(array: [f32; $n]) -> Self {
                Self::from_array(array)
            }
        }

        impl From<$name> for [f32; $n] {
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }

        /// Reads the leading components; extra floats are ignored.
        impl TryFrom<&[f32]> for $name {
            type Error = MathError;

            fn try_from(slice: &[f32]) -> Result<Self, MathError> {
                read_floats::<$n>(slice).map(Self::from_array)
            }
        }

        #[cfg(any(test, feature = "approx"))]
        impl approx::AbsDiffEq for $name {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                $(approx::AbsDiffEq::abs_diff_eq(&self.$field, &other.$field, epsilon))&&+
            }
        }

        #[cfg(any(test, feature = "approx"))]
        impl approx::RelativeEq for $name {
            fn default_max_relative() -> f32 {
                f32::EPSILON
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                $(approx::RelativeEq::relative_eq(&self.$field, &other.$field, epsilon, max_relative))&&+
            }
        }
    };
}

impl_vector!(Vec2, 2, { x, y });
impl_vector!(Vec3, 3, { x, y, z });
impl_vector!(Vec4, 4, { x, y, z, w });

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn extend(self, z: f32) -> Vec3 {
        Vec3::new(self.x, self.y, z)
    }
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);
    pub const NEG_X: Self = Self::new(-1.0, 0.0, 0.0);
    pub const NEG_Y: Self = Self::new(0.0, -1.0, 0.0);
    pub const NEG_Z: Self = Self::new(0.0, 0.0, -1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Right-handed cross product `self × other`
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// A unit vector perpendicular to `self`, picked without trigonometry.
    ///
    /// Zero components are special-cased in x, y order so the result is
    /// valid for every non-zero input.
    pub fn perpendicular(self) -> Self {
        if self.x == 0.0 {
            Self::new(0.0, -self.z, self.y).normalize()
        } else if self.y == 0.0 {
            Self::new(-self.z, 0.0, self.x).normalize()
        } else {
            Self::new(-self.y, self.x, 0.0).normalize()
        }
    }

    #[inline]
    pub fn truncate(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }

    #[inline]
    pub fn r(self) -> f32 {
        self.x
    }

    #[inline]
    pub fn g(self) -> f32 {
        self.y
    }

    #[inline]
    pub fn b(self) -> f32 {
        self.z
    }
}

impl Vec4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn xyz(self) -> Vec3 {
        self.truncate()
    }

    #[inline]
    pub fn r(self) -> f32 {
        self.x
    }

    #[inline]
    pub fn g(self) -> f32 {
        self.y
    }

    #[inline]
    pub fn b(self) -> f32 {
        self.z
    }

    #[inline]
    pub fn a(self) -> f32 {
        self.w
    }
}

impl From<Vec2> for Vec3 {
    fn from(v: Vec2) -> Self {
        v.extend(0.0)
    }
}

impl From<Vec3> for Vec4 {
    fn from(v: Vec3) -> Self {
        v.extend(0.0)
    }
}

impl From<Vec4> for Vec3 {
    fn from(v: Vec4) -> Self {
        v.truncate()
    }
}
