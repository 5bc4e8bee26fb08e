//! Scalar math utilities
//!
//! Thin wrappers over the platform's single-precision routines plus the
//! interpolation and rounding helpers the vector types build on. Domain
//! errors follow IEEE semantics (`sqrt(-1.0)` is `NaN`).

use crate::consts;

/// Convert degrees to radians
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees * consts::DEG_TO_RAD
}

/// Convert radians to degrees
#[inline]
pub fn degrees(radians: f32) -> f32 {
    radians * consts::RAD_TO_DEG
}

/// Checks whether `v` is NaN. NaN is the only value that compares unequal to itself.
#[inline]
#[allow(clippy::eq_op)]
pub fn is_nan(v: f32) -> bool {
    v != v
}

#[inline]
pub fn pow(base: f32, exp: f32) -> f32 {
    base.powf(exp)
}

#[inline]
pub fn sqrt(a: f32) -> f32 {
    a.sqrt()
}

#[inline]
pub fn cbrt(a: f32) -> f32 {
    a.cbrt()
}

#[inline]
pub fn inv_sqrt(a: f32) -> f32 {
    1.0 / a.sqrt()
}

/// Returns `1.0`, `-1.0` or `0.0`. Zero and NaN both map to `0.0`.
#[inline]
pub fn sign(a: f32) -> f32 {
    ((a > 0.0) as i32 - (a < 0.0) as i32) as f32
}

#[inline]
pub fn sin(angle: f32) -> f32 {
    angle.sin()
}

#[inline]
pub fn asin(v: f32) -> f32 {
    v.asin()
}

#[inline]
pub fn cos(angle: f32) -> f32 {
    angle.cos()
}

#[inline]
pub fn acos(v: f32) -> f32 {
    v.acos()
}

#[inline]
pub fn tan(angle: f32) -> f32 {
    angle.tan()
}

#[inline]
pub fn atan(v: f32) -> f32 {
    v.atan()
}

#[inline]
pub fn atan2(y: f32, x: f32) -> f32 {
    y.atan2(x)
}

/// e^n
#[inline]
pub fn exp(n: f32) -> f32 {
    n.exp()
}

/// Natural logarithm
#[inline]
pub fn ln(v: f32) -> f32 {
    v.ln()
}

#[inline]
pub fn log10(v: f32) -> f32 {
    v.log10()
}

#[inline]
pub fn log2(v: f32) -> f32 {
    v.log2()
}

/// Floating point remainder of `x / y`. The result has the sign of `x`.
#[inline]
pub fn fmod(x: f32, y: f32) -> f32 {
    x % y
}

/// Rounds half-way cases away from zero.
#[inline]
pub fn round(x: f32) -> f32 {
    x.round()
}

/// Rounds `x` to the nearest multiple of `b`. `b` must be positive.
#[inline]
pub fn round_to_nearest(x: f32, b: f32) -> f32 {
    round(x / b) * b
}

#[inline]
pub fn floor(x: f32) -> f32 {
    x.floor()
}

#[inline]
pub fn ceil(x: f32) -> f32 {
    x.ceil()
}

/// Fractional part of `x`, carrying the sign of `x`.
#[inline]
pub fn fract(x: f32) -> f32 {
    x.fract()
}

#[inline]
pub fn abs(a: f32) -> f32 {
    if a < 0.0 { -a } else { a }
}

#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b { a } else { b }
}

#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b { a } else { b }
}

/// Clamp value between lower and upper limit
#[inline]
pub fn clamp<T: PartialOrd>(x: T, lower: T, upper: T) -> T {
    min(max(x, lower), upper)
}

/// Whether `value` lies within `tolerance` of zero (inclusive).
#[inline]
pub fn is_almost_zero(value: f32, tolerance: f32) -> bool {
    abs(value) <= tolerance
}

/// Moves `current` towards `target` by at most `change`.
pub fn step_to_value(current: f32, target: f32, change: f32) -> f32 {
    let delta = target - current;
    if abs(delta) > change {
        current + sign(delta) * change
    } else {
        target
    }
}

/// Linear interpolation, `(1 - t) * a + t * b`. Not clamped.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}

/// Cubic Hermite step: 0 at or before `edge0`, 1 at or after `edge1`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = clamp((x - edge0) / (edge1 - edge0), 0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Quintic step `6t^5 - 15t^4 + 10t^3`, with zero first and second derivatives
/// at both edges.
#[inline]
pub fn smootherstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = clamp((x - edge0) / (edge1 - edge0), 0.0, 1.0);
    t * t * t * ((6.0 * t - 15.0) * t + 10.0)
}
