//! Quaternion for 3D rotations
//!
//! `Quat { x, y, z, w }` stands for `xi + yj + zk + w`. Rotation helpers
//! assume unit length and do not check it.

use core::ops::{Add, Div, Mul, MulAssign, Neg, Sub};

use crate::consts::{NORMALIZE_TOLERANCE, PI, QUAT_SLERP_THRESHOLD};
use crate::error::{read_floats, MathError};
use crate::matrix::{Mat3, Mat4};
use crate::scalar::{acos, clamp, cos, inv_sqrt, sin, sqrt};
use crate::vector::{Vec3, Vec4};

/// Quaternion representing a 3D rotation
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// Rotation of `angle` radians about a unit `axis`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisAngle {
    pub axis: Vec3,
    pub angle: f32,
}

impl Quat {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn from_vec4(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }

    #[inline]
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, self.w)
    }

    /// Vector part `(x, y, z)`
    #[inline]
    pub fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    /// `(axis * sin(angle / 2), cos(angle / 2))`. `axis` must be unit length.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let half = angle * 0.5;
        let s = sin(half);
        Self::new(axis.x * s, axis.y * s, axis.z * s, cos(half))
    }

    #[inline]
    pub fn from_rotation_x(angle: f32) -> Self {
        Self::from_axis_angle(Vec3::X, angle)
    }

    #[inline]
    pub fn from_rotation_y(angle: f32) -> Self {
        Self::from_axis_angle(Vec3::Y, angle)
    }

    #[inline]
    pub fn from_rotation_z(angle: f32) -> Self {
        Self::from_axis_angle(Vec3::Z, angle)
    }

    /// Shortest rotation taking unit vector `start` onto unit vector `target`.
    ///
    /// Parallel inputs give the identity. Anti-parallel inputs have no unique
    /// axis; they rotate by π about `start.perpendicular()`.
    pub fn orient_towards(start: Vec3, target: Vec3) -> Self {
        let angle_cos = clamp(start.dot(target), -1.0, 1.0);
        let axis = start.cross(target);
        if axis.is_almost_zero(NORMALIZE_TOLERANCE) {
            if angle_cos > 0.0 {
                log::trace!("orient_towards: parallel inputs, using identity");
                return Self::IDENTITY;
            }
            log::trace!("orient_towards: anti-parallel inputs, turning about a perpendicular");
            return Self::from_axis_angle(start.perpendicular(), PI);
        }
        Self::from_axis_angle(axis.normalize(), acos(angle_cos))
    }

    /// Rotation block of a pure-rotation matrix.
    ///
    /// Branches on the trace and then on the largest diagonal element, so no
    /// case divides by a value near zero.
    pub fn from_mat3(m: &Mat3) -> Self {
        let [c0, c1, c2] = m.cols;
        let trace = c0.x + c1.y + c2.z;

        if trace > 0.0 {
            let s = sqrt(trace + 1.0) * 2.0;
            Self::new(
                (c1.z - c2.y) / s,
                (c2.x - c0.z) / s,
                (c0.y - c1.x) / s,
                0.25 * s,
            )
        } else if c0.x > c1.y && c0.x > c2.z {
            let s = sqrt(1.0 + c0.x - c1.y - c2.z) * 2.0;
            Self::new(
                0.25 * s,
                (c0.y + c1.x) / s,
                (c2.x + c0.z) / s,
                (c1.z - c2.y) / s,
            )
        } else if c1.y > c2.z {
            let s = sqrt(1.0 + c1.y - c0.x - c2.z) * 2.0;
            Self::new(
                (c0.y + c1.x) / s,
                0.25 * s,
                (c1.z + c2.y) / s,
                (c2.x - c0.z) / s,
            )
        } else {
            let s = sqrt(1.0 + c2.z - c0.x - c1.y) * 2.0;
            Self::new(
                (c2.x + c0.z) / s,
                (c1.z + c2.y) / s,
                0.25 * s,
                (c0.y - c1.x) / s,
            )
        }
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        sqrt(self.length_squared())
    }

    /// Scales to unit length. The zero quaternion becomes `NaN`.
    #[inline]
    pub fn normalize(self) -> Self {
        self * inv_sqrt(self.length_squared())
    }

    /// Negated vector part. The inverse of a unit quaternion.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// `conjugate / length_squared`
    #[inline]
    pub fn inverse(self) -> Self {
        self.conjugate() / self.length_squared()
    }

    /// Spherical interpolation along the shorter arc.
    ///
    /// `other` is negated when the inputs lie in opposite hemispheres. Nearly
    /// equal inputs (cosine at or above `QUAT_SLERP_THRESHOLD`) are blended
    /// linearly without renormalizing.
    pub fn slerp(self, other: Self, t: f32) -> Self {
        let mut other = other;
        let mut angle_cos = self.dot(other);
        if angle_cos < 0.0 {
            other = -other;
            angle_cos = -angle_cos;
        }
        let angle_cos = clamp(angle_cos, -1.0, 1.0);

        if angle_cos < QUAT_SLERP_THRESHOLD {
            let angle = acos(angle_cos);
            let inv_sin_angle = 1.0 / sin(angle);
            self * (sin((1.0 - t) * angle) * inv_sin_angle)
                + other * (sin(t * angle) * inv_sin_angle)
        } else {
            self * (1.0 - t) + other * t
        }
    }

    /// Axis and full angle of a unit quaternion.
    ///
    /// `q` and `-q` give the same result (angle in `[0, π]`). Near-identity
    /// rotations have no stable axis and report `+Y`.
    pub fn to_axis_angle(self) -> AxisAngle {
        let q = if self.w < 0.0 { -self } else { self };
        let w = clamp(q.w, -1.0, 1.0);
        let angle = 2.0 * acos(w);
        let half_sin = sqrt(1.0 - w * w);

        if half_sin <= NORMALIZE_TOLERANCE {
            log::trace!("to_axis_angle: near-identity rotation, reporting +Y axis");
            return AxisAngle { axis: Vec3::Y, angle };
        }
        AxisAngle { axis: q.xyz() / half_sin, angle }
    }

    /// Convert to 3x3 rotation matrix
    pub fn to_mat3(self) -> Mat3 {
        let x2 = self.x + self.x;
        let y2 = self.y + self.y;
        let z2 = self.z + self.z;
        let xx = self.x * x2;
        let xy = self.x * y2;
        let xz = self.x * z2;
        let yy = self.y * y2;
        let yz = self.y * z2;
        let zz = self.z * z2;
        let wx = self.w * x2;
        let wy = self.w * y2;
        let wz = self.w * z2;

        Mat3::from_cols(
            Vec3::new(1.0 - (yy + zz), xy + wz, xz - wy),
            Vec3::new(xy - wz, 1.0 - (xx + zz), yz + wx),
            Vec3::new(xz + wy, yz - wx, 1.0 - (xx + yy)),
        )
    }

    /// Convert to 4x4 rotation matrix
    #[inline]
    pub fn to_mat4(self) -> Mat4 {
        self.to_mat3().to_mat4()
    }

    /// Rotates `v` by the expanded sandwich product `q v q*`.
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let Self { x, y, z, w } = self;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Vec3::new(
            v.x * (1.0 - 2.0 * (yy + zz)) + v.y * 2.0 * (xy - wz) + v.z * 2.0 * (xz + wy),
            v.x * 2.0 * (xy + wz) + v.y * (1.0 - 2.0 * (xx + zz)) + v.z * 2.0 * (yz - wx),
            v.x * 2.0 * (xz - wy) + v.y * 2.0 * (yz + wx) + v.z * (1.0 - 2.0 * (xx + yy)),
        )
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<AxisAngle> for Quat {
    fn from(aa: AxisAngle) -> Self {
        Self::from_axis_angle(aa.axis, aa.angle)
    }
}

impl From<Vec4> for Quat {
    fn from(v: Vec4) -> Self {
        Self::from_vec4(v)
    }
}

impl From<Quat> for Vec4 {
    fn from(q: Quat) -> Self {
        q.to_vec4()
    }
}

/// Reads `x, y, z, w` from the front of the slice.
impl TryFrom<&[f32]> for Quat {
    type Error = MathError;

    fn try_from(slice: &[f32]) -> Result<Self, MathError> {
        let [x, y, z, w] = read_floats::<4>(slice)?;
        Ok(Self::new(x, y, z, w))
    }
}

impl Neg for Quat {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Add for Quat {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub for Quat {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Mul<f32> for Quat {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Div<f32> for Quat {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

/// Hamilton product. `(p * q) * v` rotates by `q` first, then `p`.
impl Mul for Quat {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (p, q) = (self, rhs);
        Self::new(
            p.w * q.x + q.w * p.x + p.y * q.z - p.z * q.y,
            p.w * q.y + q.w * p.y + p.z * q.x - p.x * q.z,
            p.w * q.z + q.w * p.z + p.x * q.y - p.y * q.x,
            p.w * q.w - p.x * q.x - p.y * q.y - p.z * q.z,
        )
    }
}

impl MulAssign for Quat {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vec3> for Quat {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate(rhs)
    }
}

/// Rotates the `xyz` part and passes `w` through.
impl Mul<Vec4> for Quat {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.rotate(rhs.xyz()).extend(rhs.w)
    }
}

#[cfg(any(test, feature = "approx"))]
impl approx::AbsDiffEq for Quat {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.to_vec4().abs_diff_eq(&other.to_vec4(), epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl approx::RelativeEq for Quat {
    fn default_max_relative() -> f32 {
        f32::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.to_vec4().relative_eq(&other.to_vec4(), epsilon, max_relative)
    }
}
