//! Bit counting and integer logarithms
//!
//! `clz(0)` is the full bit width for every integer size, unlike the raw
//! CPU instruction.

/// Fixed-width unsigned integers with bit counting primitives.
pub trait BitOps: Copy {
    /// Width of the integer in bits
    const BITS: u32;

    /// Number of set bits
    fn popcount(self) -> u32;

    /// Number of leading zero bits. Returns `BITS` for zero.
    fn clz(self) -> u32;

    /// `floor(log2(self))` computed as `BITS - clz - 1`.
    ///
    /// Zero has no logarithm; it yields the wrapped `-1`, i.e. `u32::MAX`.
    #[inline]
    fn floor_log2(self) -> u32 {
        Self::BITS.wrapping_sub(self.clz()).wrapping_sub(1)
    }
}

macro_rules! impl_bit_ops {
    ($($t:ty),*) => {
        $(
            impl BitOps for $t {
                const BITS: u32 = <$t>::BITS;

                #[inline]
                fn popcount(self) -> u32 {
                    self.count_ones()
                }

                #[inline]
                fn clz(self) -> u32 {
                    self.leading_zeros()
                }
            }
        )*
    };
}

impl_bit_ops!(u8, u16, u32, u64);

/// Counts the set bits in `v`.
#[inline]
pub fn popcount<T: BitOps>(v: T) -> u32 {
    v.popcount()
}

/// Counts leading zeros of `v`; the bit width when `v == 0`.
#[inline]
pub fn clz<T: BitOps>(v: T) -> u32 {
    v.clz()
}

/// Floor of the base-2 logarithm. `ilog2(0)` is `u32::MAX` (wrapped `-1`).
#[inline]
pub fn ilog2<T: BitOps>(v: T) -> u32 {
    v.floor_log2()
}

const POWERS_OF_10: [u64; 20] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
    10_000_000_000_000_000_000,
];

/// Floor of the base-10 logarithm. Returns 0 for `ilog10(0)`.
///
/// Estimates from the bit length (`1233 / 4096 ≈ log10(2)`) and corrects the
/// single possible overshoot against a table of powers of ten.
#[inline]
pub fn ilog10(v: u64) -> u64 {
    if v == 0 {
        return 0;
    }
    let estimate = ((ilog2(v) as u64 + 1) * 1233) >> 12;
    estimate - (v < POWERS_OF_10[estimate as usize]) as u64
}
