//! `std::simd` backend. Needs a nightly toolchain (`--features portable-simd`).

use std::simd::num::{SimdFloat, SimdInt, SimdUint};
use std::simd::{f64x2, i64x2, u64x2, StdFloat};

use super::VectorAlu;

/// Lowers every operation to a `Simd<_, 2>` instruction where the target has one.
#[derive(Clone, Copy, Debug, Default)]
pub struct PortableSimdAlu;

#[inline(always)]
fn as_f64(v: u64x2) -> f64x2 {
    f64x2::from_bits(v)
}

impl VectorAlu for PortableSimdAlu {
    type V = u64x2;

    fn name(&self) -> &'static str {
        "portable-simd"
    }

    #[inline(always)]
    fn i64x2_make(&self, l: u64, h: u64) -> u64x2 {
        u64x2::from_array([l, h])
    }

    #[inline(always)]
    fn i64x2_splat(&self, x: u64) -> u64x2 {
        u64x2::splat(x)
    }

    #[inline(always)]
    fn f64x2_make(&self, l: f64, h: f64) -> u64x2 {
        f64x2::from_array([l, h]).to_bits()
    }

    #[inline(always)]
    fn f64x2_splat(&self, x: f64) -> u64x2 {
        f64x2::splat(x).to_bits()
    }

    #[inline(always)]
    fn i64x2_extract_l(&self, v: u64x2) -> u64 {
        v[0]
    }

    #[inline(always)]
    fn i64x2_extract_h(&self, v: u64x2) -> u64 {
        v[1]
    }

    #[inline(always)]
    fn f64x2_extract_l(&self, v: u64x2) -> f64 {
        as_f64(v)[0]
    }

    #[inline(always)]
    fn f64x2_extract_h(&self, v: u64x2) -> f64 {
        as_f64(v)[1]
    }

    // Simd 정수 연산은 기본적으로 wrapping입니다.
    #[inline(always)]
    fn i64x2_add(&self, a: u64x2, b: u64x2) -> u64x2 {
        a + b
    }

    #[inline(always)]
    fn i64x2_sub(&self, a: u64x2, b: u64x2) -> u64x2 {
        a - b
    }

    #[inline(always)]
    fn i64x2_mul(&self, a: u64x2, b: u64x2) -> u64x2 {
        a * b
    }

    #[inline(always)]
    fn v128_and(&self, a: u64x2, b: u64x2) -> u64x2 {
        a & b
    }

    #[inline(always)]
    fn u64x2_shr(&self, a: u64x2, n: u32) -> u64x2 {
        a >> u64x2::splat(n as u64)
    }

    #[inline(always)]
    fn i64x2_shr(&self, a: u64x2, n: u32) -> u64x2 {
        (a.cast::<i64>() >> i64x2::splat(n as i64)).cast::<u64>()
    }

    #[inline(always)]
    fn f64x2_sub(&self, a: u64x2, b: u64x2) -> u64x2 {
        (as_f64(a) - as_f64(b)).to_bits()
    }

    #[inline(always)]
    fn f64x2_fma(&self, a: u64x2, b: u64x2, c: u64x2) -> u64x2 {
        as_f64(a).mul_add(as_f64(b), as_f64(c)).to_bits()
    }
}
