//! ClassicCIOS over 8 x 32-bit limbs (Coarsely Integrated Operand Scanning).

use crate::core::wide_arith::LimbSplit;
use crate::core::{BigInt256, BigInt256Wide};

const L: usize = BigInt256::NUM_LIMBS;
const W: u32 = BigInt256::LIMB_BITS;

/// `a * b * 2^-256 mod p`.
///
/// `a, b < p`, `p` odd, `p_wide` is `p` with a zero ninth limb and
/// `n0 = -p^-1 mod 2^32`. Every product and carry fits in 64 bits, so the
/// accumulator is a plain `[u64; L + 2]` of 32-bit words.
pub fn mont_mul_cios(
    a: &BigInt256,
    b: &BigInt256,
    p: &BigInt256,
    p_wide: &BigInt256Wide,
    n0: u64,
) -> BigInt256 {
    let mut t = [0u64; L + 2];

    for i in 0..L {
        // t += a[i] * b
        let mut c = 0u64;
        for j in 0..L {
            let cs = t[j]
                .wrapping_add(a.v[i].wrapping_mul(b.v[j]))
                .wrapping_add(c);
            c = cs.hi_bits(W);
            t[j] = cs.lo_bits(W);
        }
        let cs = t[L].wrapping_add(c);
        t[L] = cs.lo_bits(W);
        t[L + 1] = cs.hi_bits(W);

        // t = (t + m * p) / 2^32
        let m = t[0].wrapping_mul(n0).lo_bits(W);
        let mut c = t[0].wrapping_add(m.wrapping_mul(p.v[0])).hi_bits(W);
        for j in 1..L {
            let cs = t[j]
                .wrapping_add(m.wrapping_mul(p.v[j]))
                .wrapping_add(c);
            c = cs.hi_bits(W);
            t[j - 1] = cs.lo_bits(W);
        }
        let cs = t[L].wrapping_add(c);
        t[L - 1] = cs.lo_bits(W);
        t[L] = t[L + 1].wrapping_add(cs.hi_bits(W));
    }

    let mut wide = BigInt256Wide::ZERO;
    wide.v.copy_from_slice(&t[..L + 1]);
    if wide.ge(p_wide) {
        wide = wide.sub(p_wide).0;
    }

    let mut res = BigInt256::ZERO;
    res.v.copy_from_slice(&wide.v[..L]);
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FieldPreset;
    use crate::mont::test_utils::{from_big, mont_oracle, to_big};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn matches_oracle() {
        let params = FieldPreset::Bls12_377Fr.get_params();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..256 {
            let a = BigInt256::random_below(&mut rng, &params.p256);
            let b = BigInt256::random_below(&mut rng, &params.p256);
            let r = mont_mul_cios(&a, &b, &params.p256, &params.p256_wide, params.n0_32);
            assert_eq!(to_big(&r.v, 32), mont_oracle(&a.v, &b.v, 32, 256));
        }
    }

    #[test]
    fn one_times_r_squared_is_r() {
        // mont(R^2 mod p, 1) = R mod p
        let params = FieldPreset::Bls12_377Fr.get_params();
        let p = to_big(&params.p256.v, 32);
        let r = (num_bigint::BigUint::from(1u8) << 256u32) % &p;
        let r2 = (&r * &r) % &p;
        let one = BigInt256::from_limbs([1, 0, 0, 0, 0, 0, 0, 0]);
        let res = mont_mul_cios(
            &BigInt256::from_limbs(from_big(&r2, 32)),
            &one,
            &params.p256,
            &params.p256_wide,
            params.n0_32,
        );
        assert_eq!(to_big(&res.v, 32), r);
    }

    #[test]
    fn zero_operand_gives_zero() {
        let params = FieldPreset::Bls12_377Fr.get_params();
        let a = BigInt256::rand(3);
        let res = mont_mul_cios(&a, &BigInt256::ZERO, &params.p256, &params.p256_wide, params.n0_32);
        assert!(res.is_zero());
    }
}
