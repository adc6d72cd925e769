//! CIOS with delayed carries over 9 limbs of 30 or 29 bits.
//!
//! With `W <= 30` a `u64` slot can absorb `nsafe = 8` limb products before it
//! overflows, so inside the outer loop only the quotient carry into slot 1 is
//! propagated and every other slot accumulates unnormalized. One full carry pass
//! after the last iteration restores `W`-bit limbs.

use crate::core::wide_arith::LimbSplit;
use crate::core::{BigInt, BigInt261, BigInt270};

const L: usize = 9;

/// `a * b * 2^(-9W) mod p` with `mu = -p^-1 mod 2^W`.
///
/// The unrolling assumes `L = 9` and `nsafe = 8`, which holds for `W` of 29 or 30.
pub fn mont_mul_delayed<const W: u32>(
    a: &BigInt<L, W>,
    b: &BigInt<L, W>,
    p: &BigInt<L, W>,
    mu: u64,
) -> BigInt<L, W> {
    let mut s = [0u64; L];

    for i in 0..L {
        let a_i = a.v[i];
        let t = s[0].wrapping_add(a_i.wrapping_mul(b.v[0]));
        let qi = mu.wrapping_mul(t.lo_bits(W)).lo_bits(W);
        let c = t.wrapping_add(qi.wrapping_mul(p.v[0])).hi_bits(W);

        s[0] = s[1]
            .wrapping_add(a_i.wrapping_mul(b.v[1]))
            .wrapping_add(qi.wrapping_mul(p.v[1]))
            .wrapping_add(c);
        for j in 2..L - 1 {
            s[j - 1] = s[j]
                .wrapping_add(a_i.wrapping_mul(b.v[j]))
                .wrapping_add(qi.wrapping_mul(p.v[j]));
        }
        s[L - 2] = a_i
            .wrapping_mul(b.v[L - 1])
            .wrapping_add(qi.wrapping_mul(p.v[L - 1]));
    }

    let mut res = BigInt::<L, W>::ZERO;
    let mut c = 0u64;
    for i in 0..L {
        c = s[i].wrapping_add(c);
        res.v[i] = c.lo_bits(W);
        c = c.hi_bits(W);
    }

    if res.ge(p) {
        res = res.sub(p).0;
    }
    res
}

/// 9 x 30-bit instance of [`mont_mul_delayed`].
pub fn mont_mul_9x30(a: &BigInt270, b: &BigInt270, p: &BigInt270, mu: u64) -> BigInt270 {
    mont_mul_delayed(a, b, p, mu)
}

/// 9 x 29-bit instance of [`mont_mul_delayed`].
pub fn mont_mul_9x29(a: &BigInt261, b: &BigInt261, p: &BigInt261, mu: u64) -> BigInt261 {
    mont_mul_delayed(a, b, p, mu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FieldPreset;
    use crate::mont::test_utils::{mont_oracle, to_big};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_mont_mul_9x30_matches_oracle() {
        let params = FieldPreset::Bls12_377Fr.get_params();
        let mut rng = StdRng::seed_from_u64(30);
        for _ in 0..256 {
            let a = BigInt270::random_below(&mut rng, &params.p270);
            let b = BigInt270::random_below(&mut rng, &params.p270);
            let r = mont_mul_9x30(&a, &b, &params.p270, params.mu_30);
            assert_eq!(to_big(&r.v, 30), mont_oracle(&a.v, &b.v, 30, 270));
        }
    }

    #[test]
    fn test_mont_mul_9x29_matches_oracle() {
        let params = FieldPreset::Bls12_377Fr.get_params();
        let mut rng = StdRng::seed_from_u64(29);
        for _ in 0..256 {
            let a = BigInt261::random_below(&mut rng, &params.p261);
            let b = BigInt261::random_below(&mut rng, &params.p261);
            let r = mont_mul_9x29(&a, &b, &params.p261, params.mu_29);
            assert_eq!(to_big(&r.v, 29), mont_oracle(&a.v, &b.v, 29, 261));
        }
    }

    #[test]
    fn largest_operands_stay_below_modulus() {
        let params = FieldPreset::Bls12_377Fr.get_params();
        let one = BigInt270::from_limbs([1, 0, 0, 0, 0, 0, 0, 0, 0]);
        let p_minus_one = params.p270.sub(&one).0;
        let r = mont_mul_9x30(&p_minus_one, &p_minus_one, &params.p270, params.mu_30);
        assert!(params.p270.gt(&r));
        assert_eq!(to_big(&r.v, 30), mont_oracle(&p_minus_one.v, &p_minus_one.v, 30, 270));
    }
}
