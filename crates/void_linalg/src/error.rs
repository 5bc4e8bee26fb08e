//! Error types for the checked boundary operations
//!
//! Arithmetic never fails; only slice conversions and `try_inverse` do.

use thiserror::Error;

/// Errors raised by checked conversions and checked inversion
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// Source slice holds fewer floats than the target type needs
    #[error("slice too short: expected at least {expected} floats, found {found}")]
    SliceTooShort { expected: usize, found: usize },

    /// Matrix has a zero or non-finite determinant
    #[error("matrix is singular (determinant {determinant})")]
    Singular { determinant: f32 },
}

/// Result type for checked math operations
pub type Result<T> = core::result::Result<T, MathError>;

/// Reads the first `N` floats of `slice`.
pub(crate) fn read_floats<const N: usize>(slice: &[f32]) -> Result<[f32; N]> {
    match slice.get(..N) {
        Some(head) => {
            let mut out = [0.0; N];
            out.copy_from_slice(head);
            Ok(out)
        }
        None => Err(MathError::SliceTooShort {
            expected: N,
            found: slice.len(),
        }),
    }
}
