//! CIOS over 5 x 51-bit limbs held in `f64` lanes.
//!
//! Each 51 x 51-bit limb product is split into a high and low half with two FMAs:
//! `hi = fma(x, y, 2^103)` rounds the product to a multiple of `2^51`, and
//! `lo = fma(x, y, (2^103 + 3 * 2^51) - hi)` recovers the exact remainder. Both
//! halves are then added to the accumulator as raw integer bits, so every addition
//! also adds a known exponent bias. The accumulator is seeded with the negated sum
//! of those biases, which makes them cancel by the time a slot is read out.

use crate::core::{BigIntF255, UnresolvedF255};
use crate::core::bigintf::{F255_LIMBS, F255_LIMB_BITS};
use crate::hal::{DefaultAlu, VectorAlu};

const SLOTS: usize = 2 * F255_LIMBS + 1;

/// Bias-cancelling accumulator seeds.
const SEEDS: [u64; SLOTS] = [
    0x7990000000000000,
    0x6660000000000000,
    0x5330000000000000,
    0x4000000000000000,
    0x2CD0000000000000,
    0x2680000000000000,
    0x39B0000000000000,
    0x4CE0000000000000,
    0x6010000000000000,
    0x7340000000000000,
    0,
];

// --- 분할 상수 (비트 패턴) ---
const C_MASK: u64 = 0x7FFFFFFFFFFFF;
/// `2^52`
const C_BIAS: u64 = 0x4330000000000000;
/// `2^103`
const C_HI: u64 = 0x4660000000000000;
/// `2^103 + 3 * 2^51`
const C_LO: u64 = 0x4660000000000003;

struct SplitConsts<V> {
    hi: V,
    lo: V,
}

/// Adds the high halves of `term * rhs[j]` into `sum[j + 1]` and returns the low halves.
#[inline(always)]
fn split_products<A: VectorAlu>(
    alu: &A,
    c: &SplitConsts<A::V>,
    term: A::V,
    rhs: &[A::V; F255_LIMBS],
    sum: &mut [A::V; SLOTS],
) -> [A::V; F255_LIMBS] {
    std::array::from_fn(|j| {
        let hi = alu.f64x2_fma(term, rhs[j], c.hi);
        sum[j + 1] = alu.i64x2_add(sum[j + 1], hi);
        let sub = alu.f64x2_sub(c.lo, hi);
        alu.f64x2_fma(term, rhs[j], sub)
    })
}

/// `a * b * 2^-255`, congruent mod `p` but not normalized.
///
/// `n0 = -p^-1 mod 2^51`. Operand limbs must be below `2^51`; the top limb of a
/// resolved value may exceed that only by a carry. Finish with
/// [`UnresolvedF255::reduce`] then [`UnresolvedF255::resolve`].
pub fn mont_mul_cios_f64_simd(a: &BigIntF255, b: &BigIntF255, p: &BigIntF255, n0: u64) -> UnresolvedF255 {
    mont_mul_cios_f64_with(DefaultAlu::default(), a, b, p, n0)
}

pub fn mont_mul_cios_f64_with<A: VectorAlu>(
    alu: A,
    a: &BigIntF255,
    b: &BigIntF255,
    p: &BigIntF255,
    n0: u64,
) -> UnresolvedF255 {
    let consts = SplitConsts {
        hi: alu.i64x2_splat(C_HI),
        lo: alu.i64x2_splat(C_LO),
    };
    let mask = alu.i64x2_splat(C_MASK);
    let bias = alu.i64x2_splat(C_BIAS);

    let bv = b.v.map(|x| alu.f64x2_splat(x));
    let pv = p.v.map(|x| alu.f64x2_splat(x));
    let mut sum = SEEDS.map(|s| alu.i64x2_splat(s));

    for i in 0..F255_LIMBS {
        // sum += a[i] * b
        let term = alu.f64x2_splat(a.v[i]);
        let lo = split_products(&alu, &consts, term, &bv, &mut sum);
        for j in 0..F255_LIMBS {
            sum[j] = alu.i64x2_add(sum[j], lo[j]);
        }

        // q = sum[0] * n0 mod 2^51, as an exact double
        let q0 = alu.i64x2_extract_l(sum[0]).wrapping_mul(n0);
        let q1 = alu.i64x2_extract_h(sum[0]).wrapping_mul(n0);
        let q = alu.v128_and(alu.i64x2_make(q0, q1), mask);
        let term = alu.f64x2_sub(alu.i64x2_add(q, bias), bias);

        // sum = (sum + q * p) / 2^51
        let lo = split_products(&alu, &consts, term, &pv, &mut sum);
        sum[0] = alu.i64x2_add(sum[0], lo[0]);
        sum[1] = alu.i64x2_add(sum[1], lo[1]);
        sum[0] = alu.i64x2_add(sum[1], alu.i64x2_shr(sum[0], F255_LIMB_BITS));
        for j in 1..F255_LIMBS - 1 {
            sum[j] = alu.i64x2_add(sum[j + 1], lo[j + 1]);
        }
        sum[4] = sum[5];
        sum[5] = sum[i + 6];
    }

    UnresolvedF255 {
        v: std::array::from_fn(|j| alu.i64x2_extract_l(sum[j]) as i64),
    }
}
