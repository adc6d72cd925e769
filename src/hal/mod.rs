// src/hal/mod.rs

//! Two-lane 64-bit vector ALU used by the vectorized multipliers.
//!
//! A register is an opaque 128-bit value read either as two `u64` lanes or as two
//! `f64` lanes; switching views is free, exactly like a WASM `v128`. The
//! floating-point tricks in FloatCIOS depend on that reinterpretation.

use std::fmt::Debug;

/// Capability interface for 2-lane 64-bit integer/double arithmetic.
///
/// Every backend must be numerically interchangeable with [`ScalarAlu`].
pub trait VectorAlu: Copy + Default + Send + Sync {
    /// One 128-bit register.
    type V: Copy + Debug + Send + Sync;

    fn name(&self) -> &'static str;

    // --- 생성 ---
    fn i64x2_make(&self, l: u64, h: u64) -> Self::V;
    fn i64x2_splat(&self, x: u64) -> Self::V;
    fn f64x2_make(&self, l: f64, h: f64) -> Self::V;
    fn f64x2_splat(&self, x: f64) -> Self::V;

    // --- 레인 추출 ---
    fn i64x2_extract_l(&self, v: Self::V) -> u64;
    fn i64x2_extract_h(&self, v: Self::V) -> u64;
    fn f64x2_extract_l(&self, v: Self::V) -> f64;
    fn f64x2_extract_h(&self, v: Self::V) -> f64;

    // --- 정수 연산 (모두 wrapping) ---
    fn i64x2_add(&self, a: Self::V, b: Self::V) -> Self::V;
    fn i64x2_sub(&self, a: Self::V, b: Self::V) -> Self::V;
    /// Low 64 bits of the lane-wise product.
    fn i64x2_mul(&self, a: Self::V, b: Self::V) -> Self::V;
    fn v128_and(&self, a: Self::V, b: Self::V) -> Self::V;
    /// Logical shift right.
    fn u64x2_shr(&self, a: Self::V, n: u32) -> Self::V;
    /// Arithmetic shift right.
    fn i64x2_shr(&self, a: Self::V, n: u32) -> Self::V;

    // --- 부동소수점 연산 ---
    fn f64x2_sub(&self, a: Self::V, b: Self::V) -> Self::V;
    /// `a * b + c` with an infinitely precise product and a single rounding.
    fn f64x2_fma(&self, a: Self::V, b: Self::V, c: Self::V) -> Self::V;

    /// `"(<l>, <h>)"` with each lane decoded as sign, unbiased exponent and mantissa.
    fn describe_f64x2(&self, v: Self::V) -> String {
        format!(
            "({}, {})",
            fmt_f64_lane(self.i64x2_extract_l(v)),
            fmt_f64_lane(self.i64x2_extract_h(v))
        )
    }

    /// `"(<l> <h>)"` as zero-padded hex.
    fn describe_i64x2(&self, v: Self::V) -> String {
        format!("({:016x} {:016x})", self.i64x2_extract_l(v), self.i64x2_extract_h(v))
    }
}

/// Formats raw double bits as `"<+|-> <exponent - 1023> <13 hex digit mantissa>"`.
pub fn fmt_f64_lane(bits: u64) -> String {
    let sign = if bits >> 63 == 0 { '+' } else { '-' };
    let exp = ((bits >> 52) & 0x7ff) as i64 - 1023;
    let mantissa = bits & 0xf_ffff_ffff_ffff;
    format!("{sign} {exp} {mantissa:013x}")
}

pub mod cpu;
pub use cpu::ScalarAlu;

#[cfg(feature = "portable-simd")]
pub mod simd;
#[cfg(feature = "portable-simd")]
pub use simd::PortableSimdAlu;

/// Backend used when a caller does not pick one.
#[cfg(feature = "portable-simd")]
pub type DefaultAlu = PortableSimdAlu;
#[cfg(not(feature = "portable-simd"))]
pub type DefaultAlu = ScalarAlu;
