//! Bos-Montgomery CIOS with two independent accumulators.
//!
//! `d` collects `a * b`, `e` collects `q * p`, both shifted down one limb per outer
//! iteration. Since the two chains never touch each other they map onto the two
//! lanes of a vector register: lane 0 carries `(a_j * b_i, d)` and lane 1 carries
//! `(q * p_i, e)`. The result is `d - e` brought back into `[0, p)`.

use crate::core::wide_arith::LimbSplit;
use crate::core::BigInt256;
use crate::hal::{DefaultAlu, VectorAlu};

const L: usize = BigInt256::NUM_LIMBS;
const W: u32 = BigInt256::LIMB_BITS;

/// `q = (mu * b0) * a_j + mu * (d0 - e0) mod 2^32`
#[inline(always)]
fn quotient(mu_b0: u64, a_j: u64, mu: u64, d0: u64, e0: u64) -> u64 {
    mu_b0
        .wrapping_mul(a_j)
        .wrapping_add(mu.wrapping_mul(d0.wrapping_sub(e0)))
        .lo_bits(W)
}

/// `d - e` if `d >= e`, else `p - (e - d)`.
#[inline(always)]
fn combine(d: &BigInt256, e: &BigInt256, p: &BigInt256) -> BigInt256 {
    if e.gt(d) {
        let e_minus_d = e.sub(d).0;
        p.sub(&e_minus_d).0
    } else {
        d.sub(e).0
    }
}

/// `a * b * 2^-256 mod p` with `mu = p^-1 mod 2^32`.
pub fn bm17_non_simd_mont_mul(a: &BigInt256, b: &BigInt256, p: &BigInt256, mu: u64) -> BigInt256 {
    let mut d = BigInt256::ZERO;
    let mut e = BigInt256::ZERO;
    let mu_b0 = mu.wrapping_mul(b.v[0]);

    for j in 0..L {
        let a_j = a.v[j];
        let q = quotient(mu_b0, a_j, mu, d.v[0], e.v[0]);
        let mut t0 = a_j.wrapping_mul(b.v[0]).wrapping_add(d.v[0]).hi_bits(W);
        let mut t1 = q.wrapping_mul(p.v[0]).wrapping_add(e.v[0]).hi_bits(W);

        for i in 1..L {
            let p0 = a_j.wrapping_mul(b.v[i]).wrapping_add(t0).wrapping_add(d.v[i]);
            t0 = p0.hi_bits(W);
            d.v[i - 1] = p0.lo_bits(W);
            let p1 = q.wrapping_mul(p.v[i]).wrapping_add(t1).wrapping_add(e.v[i]);
            t1 = p1.hi_bits(W);
            e.v[i - 1] = p1.lo_bits(W);
        }
        d.v[L - 1] = t0;
        e.v[L - 1] = t1;
    }

    combine(&d, &e, p)
}

/// Vectorized form of [`bm17_non_simd_mont_mul`] on the default backend.
pub fn bm17_simd_mont_mul(a: &BigInt256, b: &BigInt256, p: &BigInt256, mu: u64) -> BigInt256 {
    bm17_simd_mont_mul_with(DefaultAlu::default(), a, b, p, mu)
}

/// Vectorized form of [`bm17_non_simd_mont_mul`]; bit-identical on every backend.
pub fn bm17_simd_mont_mul_with<A: VectorAlu>(
    alu: A,
    a: &BigInt256,
    b: &BigInt256,
    p: &BigInt256,
    mu: u64,
) -> BigInt256 {
    let mask = alu.i64x2_splat(BigInt256::MASK);
    let mut de = [alu.i64x2_splat(0); L];
    let bp: [A::V; L] = std::array::from_fn(|i| alu.i64x2_make(b.v[i], p.v[i]));
    let mu_b0 = mu.wrapping_mul(b.v[0]);

    for j in 0..L {
        let d0 = alu.i64x2_extract_l(de[0]);
        let e0 = alu.i64x2_extract_h(de[0]);
        let q = quotient(mu_b0, a.v[j], mu, d0, e0);
        let aq = alu.i64x2_make(a.v[j], q);

        // (t0, t1) = (a_j * b_0 + d_0, q * p_0 + e_0) >> 32
        let mut t01 = alu.u64x2_shr(alu.i64x2_add(alu.i64x2_mul(aq, bp[0]), de[0]), W);
        for i in 1..L {
            let p01 = alu.i64x2_add(alu.i64x2_add(t01, de[i]), alu.i64x2_mul(aq, bp[i]));
            t01 = alu.u64x2_shr(p01, W);
            de[i - 1] = alu.v128_and(p01, mask);
        }
        de[L - 1] = t01;
    }

    let mut d = BigInt256::ZERO;
    let mut e = BigInt256::ZERO;
    for i in 0..L {
        d.v[i] = alu.i64x2_extract_l(de[i]);
        e.v[i] = alu.i64x2_extract_h(de[i]);
    }
    combine(&d, &e, p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FieldPreset;
    use crate::hal::ScalarAlu;
    use crate::mont::cios::mont_mul_cios;
    use crate::mont::test_utils::{mont_oracle, to_big};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scalar_and_vector_forms_agree() {
        let params = FieldPreset::Bls12_377Fr.get_params();
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..256 {
            let a = BigInt256::random_below(&mut rng, &params.p256);
            let b = BigInt256::random_below(&mut rng, &params.p256);
            let scalar = bm17_non_simd_mont_mul(&a, &b, &params.p256, params.mu_32);
            assert_eq!(scalar, bm17_simd_mont_mul_with(ScalarAlu, &a, &b, &params.p256, params.mu_32));
            assert_eq!(scalar, bm17_simd_mont_mul(&a, &b, &params.p256, params.mu_32));
        }
    }

    #[test]
    fn matches_oracle_and_cios() {
        let params = FieldPreset::Bls12_377Fr.get_params();
        let mut rng = StdRng::seed_from_u64(18);
        for _ in 0..256 {
            let a = BigInt256::random_below(&mut rng, &params.p256);
            let b = BigInt256::random_below(&mut rng, &params.p256);
            let r = bm17_non_simd_mont_mul(&a, &b, &params.p256, params.mu_32);
            assert_eq!(to_big(&r.v, 32), mont_oracle(&a.v, &b.v, 32, 256));
            assert_eq!(r, mont_mul_cios(&a, &b, &params.p256, &params.p256_wide, params.n0_32));
        }
    }

    #[test]
    fn combine_wraps_through_modulus() {
        let p = FieldPreset::Bls12_377Fr.get_params().p256;
        let d = BigInt256::from_limbs([3, 0, 0, 0, 0, 0, 0, 0]);
        let e = BigInt256::from_limbs([5, 0, 0, 0, 0, 0, 0, 0]);
        let two = BigInt256::from_limbs([2, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(combine(&d, &e, &p), p.sub(&two).0);
        assert!(combine(&e, &e, &p).is_zero());
    }
}
